//! Breadth-first shortest-path search.
//!
//! Squares are nodes and the edges out of a square are exactly the moves
//! [`generate_moves`] yields for it, produced lazily as the search expands.
//! Every move costs one, so the first time the goal is discovered it is at
//! minimum distance. Among several shortest paths, the one returned follows
//! the generator's ordering.

use crate::movegen::generate_moves;
use crate::Path;
use piece_core::{Board, PieceKind, QueryError, Square, Unreachable};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

/// Visited squares and the square each was first reached from.
///
/// Owned by a single search call.
struct SearchTree {
    root: Square,
    parents: HashMap<Square, Square>,
}

impl SearchTree {
    /// Upper bound on the squares reserved up front; the map grows past it
    /// only as the search actually explores.
    const MAX_RESERVED: usize = 256;

    fn new(root: Square, board_area: usize) -> Self {
        SearchTree {
            root,
            parents: HashMap::with_capacity(board_area.min(Self::MAX_RESERVED)),
        }
    }

    /// Records `square` as reached from `parent`. Returns false if it was
    /// already visited.
    fn discover(&mut self, square: Square, parent: Square) -> bool {
        if square == self.root || self.parents.contains_key(&square) {
            return false;
        }
        self.parents.insert(square, parent);
        true
    }

    /// Walks parent links from `goal` back to the root.
    fn path_to(&self, goal: Square) -> Path {
        let mut squares = vec![goal];
        let mut current = goal;
        while let Some(&parent) = self.parents.get(&current) {
            squares.push(parent);
            current = parent;
        }
        Path::from_reversed(squares)
    }
}

/// Finds a shortest sequence of moves taking `piece` from `start` to `goal`.
///
/// Checked in order before searching:
/// - [`QueryError::OutOfBounds`] if either square is off the board
/// - `start == goal` returns the one-square path, whatever the board holds there
/// - [`Unreachable::GoalOccupied`] if `goal` is occupied
/// - [`Unreachable::ColorMismatch`] for a bishop changing shade
///
/// Returns [`Unreachable::NoPath`] if the search exhausts every reachable
/// square without finding `goal`.
pub fn find_shortest_path(
    board: &Board,
    start: Square,
    goal: Square,
    piece: PieceKind,
) -> Result<Path, QueryError> {
    board.check_bounds(start)?;
    board.check_bounds(goal)?;

    if start == goal {
        return Ok(Path::single(start));
    }
    if board.is_occupied(goal) == Some(true) {
        debug!(%goal, "goal is occupied");
        return Err(Unreachable::GoalOccupied(goal).into());
    }
    if piece == PieceKind::Bishop && start.shade() != goal.shade() {
        debug!(%start, %goal, "bishop cannot change shade");
        return Err(Unreachable::ColorMismatch { start, goal }.into());
    }

    let mut tree = SearchTree::new(start, board.dimensions().area());
    let mut frontier = VecDeque::from([start]);

    while let Some(current) = frontier.pop_front() {
        let moves = generate_moves(board, current, piece)?;
        trace!(%current, moves = moves.len(), "expanding");

        for next in moves {
            if !tree.discover(next, current) {
                continue;
            }
            if next == goal {
                let path = tree.path_to(goal);
                debug!(%piece, %start, %goal, moves = path.move_count(), "path found");
                return Ok(path);
            }
            frontier.push_back(next);
        }
    }

    debug!(%piece, %start, %goal, explored = tree.parents.len() + 1, "no path");
    Err(Unreachable::NoPath.into())
}

/// Returns the minimum number of moves from `start` to `goal`.
///
/// This is the move count of [`find_shortest_path`]'s result and fails in
/// the same cases.
pub fn find_min_moves(
    board: &Board,
    start: Square,
    goal: Square,
    piece: PieceKind,
) -> Result<usize, QueryError> {
    find_shortest_path(board, start, goal, piece).map(|path| path.move_count())
}
