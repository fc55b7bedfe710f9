//! Occupancy grid.

use crate::{BoardError, QueryError, Square};
use std::fmt;

/// Size of a rectangular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: u16,
    cols: u16,
}

impl Dimensions {
    /// The standard 8x8 chess board.
    pub const STANDARD: Dimensions = Dimensions { rows: 8, cols: 8 };

    /// Creates dimensions of `rows` x `cols`; both must be at least 1.
    pub const fn new(rows: u16, cols: u16) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions { rows, cols });
        }
        Ok(Dimensions { rows, cols })
    }

    /// Returns the number of rows.
    #[inline]
    pub const fn rows(self) -> u16 {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub const fn cols(self) -> u16 {
        self.cols
    }

    /// Returns the number of squares.
    #[inline]
    pub const fn area(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Returns true if `square` lies on a board of this size.
    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        square.row() >= 0
            && square.row() < self.rows as i32
            && square.col() >= 0
            && square.col() < self.cols as i32
    }

    /// Returns the row-major cell index of `square`, if it is on the board.
    #[inline]
    fn index(self, square: Square) -> Option<usize> {
        if self.contains(square) {
            Some(square.row() as usize * self.cols as usize + square.col() as usize)
        } else {
            None
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A fixed-size grid where every cell is either empty or occupied.
///
/// Occupied cells are static obstacles. The board does not track the moving
/// piece, so callers should leave the piece's own square empty. Dimensions
/// never change after construction; cells change only via
/// [`set_occupied`](Board::set_occupied).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Board {
    /// Character printed for an empty cell.
    pub const EMPTY_CHAR: char = 'O';
    /// Character printed for an occupied cell.
    pub const OCCUPIED_CHAR: char = 'X';

    /// Creates an empty board.
    pub fn new(dims: Dimensions) -> Self {
        Board {
            dims,
            cells: vec![false; dims.area()],
        }
    }

    /// Creates an empty 8x8 board.
    pub fn standard() -> Self {
        Self::new(Dimensions::STANDARD)
    }

    /// Creates a board with the given squares occupied.
    ///
    /// Squares outside the board are ignored.
    pub fn build<I>(dims: Dimensions, occupied: I) -> Self
    where
        I: IntoIterator<Item = Square>,
    {
        let mut board = Self::new(dims);
        for square in occupied {
            if let Some(index) = dims.index(square) {
                board.cells[index] = true;
            }
        }
        board
    }

    /// Returns the board's dimensions.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns true if `square` is on the board.
    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        self.dims.contains(square)
    }

    /// Returns `Err(OutOfBounds)` if `square` is off the board.
    #[inline]
    pub fn check_bounds(&self, square: Square) -> Result<(), QueryError> {
        if self.in_bounds(square) {
            Ok(())
        } else {
            Err(QueryError::OutOfBounds(square))
        }
    }

    /// Returns whether `square` is occupied.
    ///
    /// Returns `None` when the square is off the board: such a square has no
    /// occupancy, which is different from being free.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> Option<bool> {
        self.dims.index(square).map(|index| self.cells[index])
    }

    /// Returns whether two squares share a shade, or `None` if either is off
    /// the board.
    pub fn same_shade(&self, a: Square, b: Square) -> Option<bool> {
        if self.in_bounds(a) && self.in_bounds(b) {
            Some(a.shade() == b.shade())
        } else {
            None
        }
    }

    /// Marks `square` as occupied or empty.
    pub fn set_occupied(&mut self, square: Square, occupied: bool) -> Result<(), QueryError> {
        let index = self
            .dims
            .index(square)
            .ok_or(QueryError::OutOfBounds(square))?;
        self.cells[index] = occupied;
        Ok(())
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let cols = self.dims.cols as i32;
        (0..self.dims.rows as i32).flat_map(move |row| (0..cols).map(move |col| Square::new(row, col)))
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .zip(self.cells.iter())
            .filter_map(|(square, &occupied)| occupied.then_some(square))
    }

    /// Renders the board one row per line, letting `overlay` replace the
    /// character of any square.
    pub fn render_with<F>(&self, overlay: F) -> String
    where
        F: Fn(Square) -> Option<char>,
    {
        let mut out = String::with_capacity(self.dims.area() + self.dims.rows as usize);
        for (i, square) in self.squares().enumerate() {
            let c = overlay(square).unwrap_or(if self.cells[i] {
                Self::OCCUPIED_CHAR
            } else {
                Self::EMPTY_CHAR
            });
            out.push(c);
            if square.col() == self.dims.cols as i32 - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(|_| None))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({})", self.dims)?;
        write!(f, "{}", self)
    }
}
