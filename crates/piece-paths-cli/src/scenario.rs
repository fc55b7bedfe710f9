//! Path queries and the built-in demo set.

use piece_core::{Board, Dimensions, PieceKind, QueryError, Square};
use piece_paths::{find_shortest_path, Path};

/// A single shortest-path question.
#[derive(Debug, Clone)]
pub struct Query {
    pub title: String,
    pub piece: PieceKind,
    pub start: Square,
    pub goal: Square,
    pub board: Board,
}

impl Query {
    /// Runs the search.
    pub fn run(&self) -> Result<Path, QueryError> {
        find_shortest_path(&self.board, self.start, self.goal, self.piece)
    }
}

/// The demo queries: a king on an empty board, a knight working around a
/// block of obstacles, and a bishop asked to change shade.
pub fn demo() -> Vec<Query> {
    let block = [(2, 2), (2, 3), (3, 3), (3, 2), (3, 4), (4, 4)].map(Square::from);
    vec![
        Query {
            title: "king min moves".to_string(),
            piece: PieceKind::King,
            start: Square::new(3, 3),
            goal: Square::new(5, 1),
            board: Board::standard(),
        },
        Query {
            title: "knight path".to_string(),
            piece: PieceKind::Knight,
            start: Square::new(4, 1),
            goal: Square::new(2, 5),
            board: Board::build(Dimensions::STANDARD, block),
        },
        Query {
            title: "bishop unreachable".to_string(),
            piece: PieceKind::Bishop,
            start: Square::new(1, 1),
            goal: Square::new(0, 3),
            board: Board::standard(),
        },
    ]
}
