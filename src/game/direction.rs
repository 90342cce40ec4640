use super::field::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        let Cell { row, col } = cell;
        match self {
            Direction::North => Cell::new(row - 1, col),
            Direction::East => Cell::new(row, col + 1),
            Direction::South => Cell::new(row + 1, col),
            Direction::West => Cell::new(row, col - 1),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
