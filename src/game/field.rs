use crate::consts;
use ratatui::layout::Size;
use std::ops::RangeInclusive;
use thiserror::Error;

/// A location on the playing field, in terminal-style coordinates: rows grow
/// downwards and columns grow rightwards.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) row: i32,
    pub(crate) col: i32,
}

impl Cell {
    pub(crate) const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
}

/// The rectangular playing field.  The outermost ring of cells is wall; only
/// the cells strictly inside it are playable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    top: i32,
    left: i32,
    height: i32,
    width: i32,
}

impl Field {
    /// Create a field with its top-left wall cell at `(top, left)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the field is too small to hold a freshly-placed snake
    /// in its interior.
    pub(crate) fn new(top: i32, left: i32, height: i32, width: i32) -> Result<Field, FieldError> {
        if height < consts::MIN_FIELD_HEIGHT || width < consts::MIN_FIELD_WIDTH {
            return Err(FieldError::TooSmall { height, width });
        }
        Ok(Field {
            top,
            left,
            height,
            width,
        })
    }

    /// Create a field filling a game screen of the given size, less the rows
    /// used by the score bar and messages
    pub(crate) fn for_display(size: Size) -> Result<Field, FieldError> {
        let height = i32::from(size.height) - i32::from(consts::HUD_ROWS);
        Field::new(0, 0, height, i32::from(size.width))
    }

    pub(crate) fn top(self) -> i32 {
        self.top
    }

    pub(crate) fn left(self) -> i32 {
        self.left
    }

    pub(crate) fn height(self) -> i32 {
        self.height
    }

    pub(crate) fn width(self) -> i32 {
        self.width
    }

    /// Test whether `cell` lies on or beyond the border ring
    pub(crate) fn is_wall(self, cell: Cell) -> bool {
        !(self.interior_rows().contains(&cell.row) && self.interior_cols().contains(&cell.col))
    }

    pub(crate) fn interior_rows(self) -> RangeInclusive<i32> {
        (self.top + 1)..=(self.top + self.height - 2)
    }

    pub(crate) fn interior_cols(self) -> RangeInclusive<i32> {
        (self.left + 1)..=(self.left + self.width - 2)
    }

    /// Iterate over every playable cell, row by row
    pub(crate) fn interior(self) -> impl Iterator<Item = Cell> {
        let cols = self.interior_cols();
        self.interior_rows()
            .flat_map(move |row| cols.clone().map(move |col| Cell::new(row, col)))
    }

    /// The cell at the middle of the field
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.top + self.height / 2, self.left + self.width / 2)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum FieldError {
    #[error(
        "playing field of {height}x{width} cells is too small; at least {min_height}x{min_width} is needed (try enlarging the terminal)",
        min_height = consts::MIN_FIELD_HEIGHT,
        min_width = consts::MIN_FIELD_WIDTH
    )]
    TooSmall { height: i32, width: i32 },
}
