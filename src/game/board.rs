use super::field::{Cell, Field};
use super::snake::Snake;
use crate::consts;
use crate::difficulty::Difficulty;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// A bonus fruit and the number of ticks it has left before it vanishes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bonus {
    pub(crate) cell: Cell,
    pub(crate) ticks_left: u32,
}

/// Everything occupying the playing field during a round
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(crate) snake: Snake,
    pub(crate) food: Cell,
    pub(crate) bonus: Option<Bonus>,
    pub(crate) obstacles: HashSet<Cell>,
}

impl Board {
    /// Lay out a new round: a centered snake, then the difficulty's starting
    /// obstacles, then the food.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field runs out of free cells before everything
    /// has been placed.
    pub(crate) fn new<R: Rng>(
        field: Field,
        difficulty: &Difficulty,
        rng: &mut R,
    ) -> Result<Board, BoardFull> {
        let snake = Snake::centered(field);
        let mut obstacles = HashSet::with_capacity(difficulty.base_obstacles);
        for _ in 0..difficulty.base_obstacles {
            let cell = sample_free_cell(field, rng, |c| snake.contains(c) || obstacles.contains(&c))?;
            obstacles.insert(cell);
        }
        let food = sample_free_cell(field, rng, |c| snake.contains(c) || obstacles.contains(&c))?;
        Ok(Board {
            snake,
            food,
            bonus: None,
            obstacles,
        })
    }

    /// Test whether `cell` holds the snake, an obstacle, the food, or the
    /// bonus fruit
    pub(crate) fn is_occupied(&self, cell: Cell) -> bool {
        self.snake.contains(cell)
            || self.obstacles.contains(&cell)
            || self.food == cell
            || self.bonus.is_some_and(|b| b.cell == cell)
    }

    /// Pick a random interior cell that nothing currently occupies
    pub(crate) fn sample_free_cell<R: Rng>(
        &self,
        field: Field,
        rng: &mut R,
    ) -> Result<Cell, BoardFull> {
        sample_free_cell(field, rng, |c| self.is_occupied(c))
    }
}

/// Pick a uniformly random interior cell of `field` for which `occupied`
/// returns `false`.
///
/// Up to [`MAX_PLACEMENT_ATTEMPTS`][consts::MAX_PLACEMENT_ATTEMPTS] random
/// cells are tried first; if all of them are taken, the choice is made from
/// a full scan of the interior instead, so that a nearly-full field is still
/// handled in bounded time.
pub(crate) fn sample_free_cell<R, F>(field: Field, rng: &mut R, occupied: F) -> Result<Cell, BoardFull>
where
    R: Rng,
    F: Fn(Cell) -> bool,
{
    let rows = field.interior_rows();
    let cols = field.interior_cols();
    for _ in 0..consts::MAX_PLACEMENT_ATTEMPTS {
        let cell = Cell::new(rng.random_range(rows.clone()), rng.random_range(cols.clone()));
        if !occupied(cell) {
            return Ok(cell);
        }
    }
    field
        .interior()
        .filter(|&c| !occupied(c))
        .choose(rng)
        .ok_or(BoardFull)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cells are left on the playing field")]
pub(crate) struct BoardFull;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::{DifficultyKind, Presets};
    use crate::game::direction::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn assert_disjoint(board: &Board) {
        let snake = board.snake.cells().collect::<HashSet<_>>();
        assert_eq!(snake.len(), board.snake.len(), "snake overlaps itself");
        assert!(!snake.contains(&board.food), "food is on the snake");
        assert!(!board.obstacles.contains(&board.food), "food is on an obstacle");
        assert!(snake.is_disjoint(&board.obstacles), "snake is on an obstacle");
        if let Some(bonus) = board.bonus {
            assert!(!snake.contains(&bonus.cell), "bonus is on the snake");
            assert!(!board.obstacles.contains(&bonus.cell), "bonus is on an obstacle");
            assert_ne!(bonus.cell, board.food, "bonus is on the food");
        }
    }

    #[rstest]
    #[case(DifficultyKind::Calm)]
    #[case(DifficultyKind::Classic)]
    #[case(DifficultyKind::Turbo)]
    fn new_board_is_disjoint(#[case] kind: DifficultyKind) {
        let difficulty = Presets::default().get(kind);
        let field = Field::new(0, 0, 20, 40).expect("field should be valid");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..50 {
            let board = Board::new(field, &difficulty, &mut rng).expect("board should fit");
            assert_eq!(board.snake.len(), consts::INITIAL_SNAKE_LENGTH);
            assert_eq!(board.obstacles.len(), difficulty.base_obstacles);
            assert!(board.bonus.is_none());
            assert!(!field.is_wall(board.food));
            assert!(board.obstacles.iter().all(|&c| !field.is_wall(c)));
            assert_disjoint(&board);
        }
    }

    #[test]
    fn free_cell_avoids_everything() {
        let field = Field::new(0, 0, 4, 6).expect("field should be valid");
        // Interior is rows 1-2, columns 1-4: eight cells
        let board = Board {
            snake: Snake::from_cells(
                [Cell::new(1, 3), Cell::new(1, 2), Cell::new(1, 1)],
                Direction::East,
            )
            .expect("snake should be nonempty"),
            food: Cell::new(2, 1),
            bonus: Some(Bonus {
                cell: Cell::new(2, 2),
                ticks_left: 5,
            }),
            obstacles: HashSet::from([Cell::new(2, 3), Cell::new(1, 4)]),
        };
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..20 {
            assert_eq!(board.sample_free_cell(field, &mut rng), Ok(Cell::new(2, 4)));
        }
    }

    #[test]
    fn full_field_fails() {
        let field = Field::new(0, 0, 3, 5).expect("field should be valid");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let difficulty = Presets::default().get(DifficultyKind::Calm);
        // Three interior cells, all taken by the snake
        assert_eq!(Board::new(field, &difficulty, &mut rng), Err(BoardFull));
        assert_eq!(sample_free_cell(field, &mut rng, |_| true), Err(BoardFull));
    }

    #[test]
    fn free_cell_stays_inside() {
        let field = Field::new(5, 7, 6, 9).expect("field should be valid");
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        for _ in 0..200 {
            let cell = sample_free_cell(field, &mut rng, |_| false).expect("field has room");
            assert!(!field.is_wall(cell), "{cell:?} is not in the interior");
        }
    }
}
