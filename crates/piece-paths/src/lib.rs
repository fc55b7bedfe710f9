//! One-step move generation and shortest-path search for a single piece.
//!
//! This crate provides:
//! - [`generate_moves`] - the squares a piece reaches in exactly one move
//! - [`retain_reachable`] - the shared in-bounds/unoccupied filter
//! - [`find_shortest_path`] and [`find_min_moves`] - breadth-first search over
//!   the implicit graph of squares, with edges produced by move generation
//!
//! Other occupied squares are static obstacles: a piece can neither land on
//! nor pass through them.
//!
//! # Example
//!
//! ```
//! use piece_core::{Board, Dimensions, PieceKind, Square};
//! use piece_paths::{find_min_moves, find_shortest_path};
//!
//! let board = Board::standard();
//! let moves = find_min_moves(&board, Square::new(3, 3), Square::new(5, 1), PieceKind::King);
//! assert_eq!(moves, Ok(2));
//!
//! let obstacles = [(2, 2), (2, 3), (3, 3), (3, 2), (3, 4), (4, 4)].map(Square::from);
//! let board = Board::build(Dimensions::STANDARD, obstacles);
//! let path = find_shortest_path(&board, Square::new(4, 1), Square::new(2, 5), PieceKind::Knight)
//!     .unwrap();
//! assert_eq!(path.move_count(), 4);
//! ```

pub mod movegen;
mod path;
mod search;

pub use movegen::{generate_moves, generate_moves_named, retain_reachable, MoveSet};
pub use path::Path;
pub use search::{find_min_moves, find_shortest_path};
