use super::board::Bonus;
use super::direction::Direction;
use super::field::{Cell, Field};
use crate::difficulty::DifficultyKind;

/// A cell of the snake's body
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) cell: Cell,
    pub(crate) is_head: bool,
}

/// Read-only copy of everything needed to draw one frame of a round.  The
/// renderer sees nothing else of the game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) field: Field,
    /// Snake cells, head first
    pub(crate) segments: Vec<Segment>,
    pub(crate) direction: Direction,
    pub(crate) food: Cell,
    pub(crate) bonus: Option<Bonus>,
    pub(crate) obstacles: Vec<Cell>,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) high_score: u32,
    pub(crate) difficulty: DifficultyKind,
    pub(crate) paused: bool,
    pub(crate) game_over: bool,
    /// The cell the snake ran into, if it crashed
    pub(crate) collision: Option<Cell>,
}

impl Snapshot {
    pub(crate) fn head(&self) -> Option<Cell> {
        self.segments.iter().find(|s| s.is_head).map(|s| s.cell)
    }
}
