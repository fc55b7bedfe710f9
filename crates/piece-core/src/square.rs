//! Board coordinates.

use crate::{BoardError, Shade};
use std::fmt;
use std::str::FromStr;

/// A displacement between two squares, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rows: i32,
    pub cols: i32,
}

impl Offset {
    /// Creates an offset.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Offset { rows, cols }
    }
}

/// A `(row, column)` coordinate, 0-indexed.
///
/// Coordinates are signed so that squares off the board can still be named
/// and rejected by bounds checks instead of being unrepresentable.
/// Ordering is row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: i32,
    col: i32,
}

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// Returns the row.
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the square displaced by `offset`.
    ///
    /// Saturates at the `i32` limits; the result may lie off any board.
    #[inline]
    pub const fn offset(self, offset: Offset) -> Self {
        Square {
            row: self.row.saturating_add(offset.rows),
            col: self.col.saturating_add(offset.cols),
        }
    }

    /// Returns the color class of this square.
    #[inline]
    pub const fn shade(self) -> Shade {
        if self.row.rem_euclid(2) == self.col.rem_euclid(2) {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Square::new(row, col)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    /// Parses `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || BoardError::SquareSyntax(s.to_string());
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);

        let (row, col) = inner.split_once(',').ok_or_else(syntax)?;
        let row = row.trim().parse::<i32>().map_err(|_| syntax())?;
        let col = col.trim().parse::<i32>().map_err(|_| syntax())?;
        Ok(Square::new(row, col))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
