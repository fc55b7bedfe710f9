//! Text and JSON rendering of query results.

use crate::scenario::Query;
use piece_core::{Board, PieceKind, QueryError, Square};
use piece_paths::{MoveSet, Path};
use serde::Serialize;

/// JSON form of a path query result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PathReport {
    pub title: String,
    pub piece: String,
    pub start: [i32; 2],
    pub goal: [i32; 2],
    /// Minimum number of moves, absent when no path exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    /// One shortest path, start and goal included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<[i32; 2]>>,
    /// Why no path exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PathReport {
    pub fn new(query: &Query, result: &Result<Path, QueryError>) -> Self {
        let (moves, path, reason) = match result {
            Ok(path) => (
                Some(path.move_count()),
                Some(path.squares().iter().copied().map(pair).collect()),
                None,
            ),
            Err(e) => (None, None, Some(e.to_string())),
        };
        PathReport {
            title: query.title.clone(),
            piece: query.piece.name().to_string(),
            start: pair(query.start),
            goal: pair(query.goal),
            moves,
            path,
            reason,
        }
    }
}

/// JSON form of a move generation result.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MovesReport {
    pub piece: String,
    pub from: [i32; 2],
    /// Destinations in row-major order, absent when the query was invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<[i32; 2]>>,
    /// Why no moves could be generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MovesReport {
    pub fn new(piece: PieceKind, from: Square, result: &Result<MoveSet, QueryError>) -> Self {
        let (moves, reason) = match result {
            Ok(moves) => {
                let mut moves: Vec<[i32; 2]> = moves.iter().copied().map(pair).collect();
                moves.sort_unstable();
                (Some(moves), None)
            }
            Err(e) => (None, Some(e.to_string())),
        };
        MovesReport {
            piece: piece.name().to_string(),
            from: pair(from),
            moves,
            reason,
        }
    }
}

fn pair(square: Square) -> [i32; 2] {
    [square.row(), square.col()]
}

/// Describes a path result in prose, followed by the board with the path
/// marked when one was found.
pub fn path_text(query: &Query, result: &Result<Path, QueryError>) -> String {
    match result {
        Ok(path) => {
            let mut out = format!(
                "A {} can move from location {} to {} in {} moves minimum.\n",
                query.piece,
                query.start,
                query.goal,
                path.move_count()
            );
            out.push_str(&format!("One possible shortest path: {}\n", path));
            out.push_str(&mark_path(&query.board, path));
            out
        }
        Err(e) => format!(
            "A {} cannot reach location {} from location {}: {}\n",
            query.piece, query.goal, query.start, e
        ),
    }
}

/// Renders the board with `S` at the start, `E` at the goal, and `-` on the
/// squares in between.
pub fn mark_path(board: &Board, path: &Path) -> String {
    board.render_with(|square| {
        if square == path.start() {
            Some('S')
        } else if square == path.goal() {
            Some('E')
        } else if path.squares().contains(&square) {
            Some('-')
        } else {
            None
        }
    })
}

/// Renders the board with `P` on the piece and `*` on each destination.
pub fn moves_text(
    board: &Board,
    piece: PieceKind,
    from: Square,
    result: &Result<MoveSet, QueryError>,
) -> String {
    let moves = match result {
        Ok(moves) => moves,
        Err(e) => return format!("A {} on {} has no moves: {}\n", piece, from, e),
    };
    let mut out = format!("A {} on {} has {} moves.\n", piece, from, moves.len());
    out.push_str(&board.render_with(|square| {
        if square == from {
            Some('P')
        } else if moves.contains(square) {
            Some('*')
        } else {
            None
        }
    }));
    out
}
