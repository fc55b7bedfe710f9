//! Core types for single-piece path puzzles.
//!
//! This crate provides the board layer shared by move generation and search:
//! - [`Square`] and [`Offset`] for board coordinates
//! - [`Shade`] for the two color classes of the checkerboard
//! - [`PieceKind`] for the supported pieces
//! - [`Dimensions`] and [`Board`] for the occupancy grid
//! - [`QueryError`] and [`BoardError`] for signaled failures

mod board;
mod error;
mod piece;
mod shade;
mod square;

pub use board::{Board, Dimensions};
pub use error::{BoardError, QueryError, Unreachable};
pub use piece::PieceKind;
pub use shade::Shade;
pub use square::{Offset, Square};
