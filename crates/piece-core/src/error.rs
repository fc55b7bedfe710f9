//! Error taxonomy for board construction and queries.

use crate::Square;
use thiserror::Error;

/// Errors raised while building a board or parsing its inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyDimensions { rows: u16, cols: u16 },

    #[error("invalid square '{0}': expected \"row,col\"")]
    SquareSyntax(String),
}

/// Why a goal square cannot be reached.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Unreachable {
    #[error("goal {0} is occupied")]
    GoalOccupied(Square),

    #[error("a bishop on {start} can never reach {goal}: the squares differ in shade")]
    ColorMismatch { start: Square, goal: Square },

    #[error("no sequence of moves connects the squares")]
    NoPath,
}

/// Errors signaled by board queries, move generation, and path search.
///
/// The three kinds stay distinct even though path queries report all of them
/// as "no path found" to callers that only care about success.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("square {0} is outside the board")]
    OutOfBounds(Square),

    #[error("unsupported piece: '{0}' (expected king, rook, bishop, or knight)")]
    UnsupportedPiece(String),

    #[error("unreachable: {0}")]
    Unreachable(#[from] Unreachable),
}

impl QueryError {
    /// Returns true if this error is reported as NOT_FOUND by path queries.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::OutOfBounds(_) | QueryError::Unreachable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_converts_into_query_error() {
        let err: QueryError = Unreachable::NoPath.into();
        assert_eq!(err, QueryError::Unreachable(Unreachable::NoPath));
        assert!(err.is_not_found());
    }

    #[test]
    fn unsupported_piece_is_not_a_path_result() {
        let err = QueryError::UnsupportedPiece("queen".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            QueryError::OutOfBounds(Square::new(-1, 2)).to_string(),
            "square (-1, 2) is outside the board"
        );
        assert_eq!(
            QueryError::from(Unreachable::GoalOccupied(Square::new(2, 2))).to_string(),
            "unreachable: goal (2, 2) is occupied"
        );
        assert_eq!(
            BoardError::EmptyDimensions { rows: 0, cols: 8 }.to_string(),
            "board dimensions must be at least 1x1, got 0x8"
        );
    }
}
