//! Piece kinds supported by move generation.

use crate::QueryError;
use std::str::FromStr;

/// The pieces whose movement can be generated and searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 4] = [
        PieceKind::King,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Returns the lower-case name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
        }
    }

    /// Returns true if this piece slides along rays (rook or bishop).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop)
    }
}

impl FromStr for PieceKind {
    type Err = QueryError;

    /// Parses a piece name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| QueryError::UnsupportedPiece(s.to_string()))
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
        };
        write!(f, "{}", name)
    }
}
