//! Move sequences returned by the search.

use piece_core::Square;
use std::fmt;

/// A start-to-goal sequence of squares, both endpoints included.
///
/// Consecutive squares are one legal move apart. A path always holds at
/// least one square; a single-square path means start and goal coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    /// A zero-move path.
    pub(crate) fn single(square: Square) -> Self {
        Path {
            squares: vec![square],
        }
    }

    /// Builds a path from squares listed goal first.
    pub(crate) fn from_reversed(mut squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        squares.reverse();
        Path { squares }
    }

    /// Returns the first square.
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    /// Returns the last square.
    pub fn goal(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Returns every square from start to goal.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the number of moves, one less than the number of squares.
    pub fn move_count(&self) -> usize {
        self.squares.len() - 1
    }

    /// Iterates over `(from, to)` pairs, one per move.
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Consumes the path, returning its squares.
    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_square_path() {
        let path = Path::single(Square::new(1, 1));
        assert_eq!(path.start(), Square::new(1, 1));
        assert_eq!(path.goal(), Square::new(1, 1));
        assert_eq!(path.move_count(), 0);
        assert_eq!(path.steps().count(), 0);
        assert_eq!(path.to_string(), "(1, 1)");
    }

    #[test]
    fn reversed_input_reads_start_to_goal() {
        let path = Path::from_reversed(vec![
            Square::new(5, 1),
            Square::new(4, 2),
            Square::new(3, 3),
        ]);
        assert_eq!(path.start(), Square::new(3, 3));
        assert_eq!(path.goal(), Square::new(5, 1));
        assert_eq!(path.move_count(), 2);
        assert_eq!(
            path.steps().collect::<Vec<_>>(),
            vec![
                (Square::new(3, 3), Square::new(4, 2)),
                (Square::new(4, 2), Square::new(5, 1)),
            ]
        );
        assert_eq!(path.to_string(), "(3, 3) -> (4, 2) -> (5, 1)");
        assert_eq!(path.into_squares().len(), 3);
    }
}
