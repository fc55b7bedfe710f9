//! Movement patterns for each piece kind.

use piece_core::{Offset, PieceKind};

/// How a piece reaches its one-step destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stepping {
    /// Jumps to each offset from the origin.
    Leap(&'static [Offset]),
    /// Slides along each direction until blocked by an edge or obstacle.
    Slide(&'static [Offset]),
}

/// All squares at Chebyshev distance 1, clockwise from straight up.
pub const KING_OFFSETS: [Offset; 8] = [
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, 1),
    Offset::new(1, 1),
    Offset::new(1, 0),
    Offset::new(1, -1),
    Offset::new(0, -1),
    Offset::new(-1, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
];

/// Up, right, down, left.
pub const ORTHOGONALS: [Offset; 4] = [
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(1, 0),
    Offset::new(0, -1),
];

pub const DIAGONALS: [Offset; 4] = [
    Offset::new(-1, 1),
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, -1),
];

/// Returns the movement pattern of `piece`.
pub const fn stepping(piece: PieceKind) -> Stepping {
    match piece {
        PieceKind::King => Stepping::Leap(&KING_OFFSETS),
        PieceKind::Knight => Stepping::Leap(&KNIGHT_OFFSETS),
        PieceKind::Rook => Stepping::Slide(&ORTHOGONALS),
        PieceKind::Bishop => Stepping::Slide(&DIAGONALS),
    }
}
