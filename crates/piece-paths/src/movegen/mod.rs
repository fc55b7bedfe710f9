//! One-step move generation.
//!
//! Leaping pieces (king, knight) produce candidates from a fixed offset list
//! which are then filtered by [`retain_reachable`]. Sliding pieces (rook,
//! bishop) walk each direction until the first edge or obstacle, so every
//! square they yield is already reachable.

mod stepping;

pub use stepping::{stepping, Stepping, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};

use piece_core::{Board, Offset, PieceKind, QueryError, Square};

/// The squares reachable in exactly one move.
///
/// Holds no duplicates. Iteration follows generation order, which keeps
/// search results deterministic; callers should otherwise treat it as a set.
///
/// `==` compares in order, so two sets holding the same squares in a
/// different order are unequal. Collect into a `BTreeSet` or `HashSet` to
/// compare contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    squares: Vec<Square>,
}

impl MoveSet {
    /// Creates an empty move set.
    #[inline]
    pub const fn new() -> Self {
        MoveSet {
            squares: Vec::new(),
        }
    }

    /// Adds a square if it is not already present.
    #[inline]
    fn insert(&mut self, square: Square) {
        if !self.squares.contains(&square) {
            self.squares.push(square);
        }
    }

    /// Returns the number of squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true if no move is possible.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns true if `square` is one of the destinations.
    #[inline]
    pub fn contains(&self, square: Square) -> bool {
        self.squares.contains(&square)
    }

    /// Returns the destinations as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the destinations.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.squares.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Square;
    type IntoIter = std::vec::IntoIter<Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

/// Keeps the candidates that are on the board and unoccupied.
pub fn retain_reachable<I>(board: &Board, candidates: I) -> MoveSet
where
    I: IntoIterator<Item = Square>,
{
    let mut moves = MoveSet::new();
    for square in candidates {
        if board.is_occupied(square) == Some(false) {
            moves.insert(square);
        }
    }
    moves
}

/// Returns the squares `piece` can reach from `from` in one move.
///
/// Fails with [`QueryError::OutOfBounds`] if `from` is off the board. The
/// origin's own occupancy is not consulted.
pub fn generate_moves(board: &Board, from: Square, piece: PieceKind) -> Result<MoveSet, QueryError> {
    board.check_bounds(from)?;

    let moves = match stepping(piece) {
        Stepping::Leap(offsets) => {
            retain_reachable(board, offsets.iter().map(|&offset| from.offset(offset)))
        }
        Stepping::Slide(directions) => {
            let mut moves = MoveSet::new();
            for &direction in directions {
                slide(board, from, direction, &mut moves);
            }
            moves
        }
    };
    Ok(moves)
}

/// Like [`generate_moves`], for a piece named at the boundary.
///
/// Fails with [`QueryError::UnsupportedPiece`] if `piece` is not a
/// recognized name.
pub fn generate_moves_named(board: &Board, from: Square, piece: &str) -> Result<MoveSet, QueryError> {
    let piece = piece.parse::<PieceKind>()?;
    generate_moves(board, from, piece)
}

fn slide(board: &Board, from: Square, direction: Offset, moves: &mut MoveSet) {
    let mut square = from.offset(direction);
    // Off-board squares have no occupancy, which ends the ray like a blocker.
    while board.is_occupied(square) == Some(false) {
        moves.squares.push(square);
        square = square.offset(direction);
    }
}
