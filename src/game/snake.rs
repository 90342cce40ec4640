use super::direction::Direction;
use super::field::{Cell, Field};
use super::snapshot::Segment;
use crate::consts;
use std::collections::VecDeque;

/// The snake's body and heading
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.
    body: VecDeque<Cell>,

    /// The direction in which the snake is currently facing
    direction: Direction,
}

impl Snake {
    /// Create a snake of [`INITIAL_SNAKE_LENGTH`][consts::INITIAL_SNAKE_LENGTH]
    /// cells lying horizontally across the center of `field`, facing east
    pub(crate) fn centered(field: Field) -> Snake {
        let center = field.center();
        let head = Cell::new(center.row, center.col + 1);
        let body = std::iter::successors(Some(head), |&c| Some(Direction::West.advance(c)))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect();
        Snake {
            body,
            direction: Direction::East,
        }
    }

    /// Create a snake occupying the given cells, head first.  Returns `None`
    /// if `cells` is empty.
    #[cfg(test)]
    pub(crate) fn from_cells<I>(cells: I, direction: Direction) -> Option<Snake>
    where
        I: IntoIterator<Item = Cell>,
    {
        let body = cells.into_iter().collect::<VecDeque<_>>();
        (!body.is_empty()).then_some(Snake { body, direction })
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.body[0]
    }

    /// Return the direction in which the snake is facing
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the snake's direction to `direction`
    pub(crate) fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.cells().enumerate().map(|(i, cell)| Segment {
            cell,
            is_head: i == 0,
        })
    }

    /// Add a new head at `cell`
    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Remove the last cell of the tail, keeping at least the head
    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_snake() {
        let field = Field::new(0, 0, 20, 40).expect("field should be valid");
        let snake = Snake::centered(field);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(10, 21), Cell::new(10, 20), Cell::new(10, 19)]
        );
        assert_eq!(snake.direction(), Direction::East);
        assert!(snake.cells().all(|c| !field.is_wall(c)));
    }

    #[test]
    fn centered_in_smallest_field() {
        let field = Field::new(0, 0, 3, 5).expect("field should be valid");
        let snake = Snake::centered(field);
        assert!(snake.cells().all(|c| !field.is_wall(c)));
    }

    #[test]
    fn push_and_pop() {
        let mut snake = Snake::from_cells([Cell::new(1, 2), Cell::new(1, 1)], Direction::East)
            .expect("snake should be nonempty");
        snake.push_head(Cell::new(1, 3));
        assert_eq!(snake.head(), Cell::new(1, 3));
        assert_eq!(snake.len(), 3);
        snake.pop_tail();
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Cell::new(1, 3), Cell::new(1, 2)]
        );
        snake.pop_tail();
        snake.pop_tail();
        assert_eq!(snake.cells().collect::<Vec<_>>(), [Cell::new(1, 3)]);
    }

    #[test]
    fn segments_flag_head() {
        let snake = Snake::from_cells([Cell::new(1, 2), Cell::new(1, 1)], Direction::East)
            .expect("snake should be nonempty");
        let heads = snake.segments().map(|s| s.is_head).collect::<Vec<_>>();
        assert_eq!(heads, [true, false]);
    }

    #[test]
    fn empty_snake() {
        assert!(Snake::from_cells([], Direction::North).is_none());
    }
}
