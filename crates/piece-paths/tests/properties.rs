//! Property-based tests using proptest.
//!
//! Move generation and search are checked against a brute-force reference
//! that decides single steps geometrically and computes distances by
//! layering over every square of the board.

use piece_core::{Board, Dimensions, Offset, PieceKind, QueryError, Square, Unreachable};
use piece_paths::{find_min_moves, find_shortest_path, generate_moves};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

fn piece() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn square() -> impl Strategy<Value = Square> {
    (0i32..8, 0i32..8).prop_map(Square::from)
}

fn obstacles() -> impl Strategy<Value = Vec<Square>> {
    prop::collection::vec(square(), 0..24)
}

/// Builds a board from `obstacles`, leaving `keep_free` empty.
fn board_without(obstacles: &[Square], keep_free: Square) -> Board {
    let occupied = obstacles.iter().copied().filter(|&sq| sq != keep_free);
    Board::build(Dimensions::STANDARD, occupied)
}

fn clear_between(board: &Board, from: Square, to: Square) -> bool {
    let step = Offset::new(
        (to.row() - from.row()).signum(),
        (to.col() - from.col()).signum(),
    );
    let mut sq = from.offset(step);
    while sq != to {
        if board.is_occupied(sq) != Some(false) {
            return false;
        }
        sq = sq.offset(step);
    }
    true
}

fn legal_step(board: &Board, piece: PieceKind, from: Square, to: Square) -> bool {
    if from == to || board.is_occupied(to) != Some(false) {
        return false;
    }
    let (dr, dc) = ((to.row() - from.row()).abs(), (to.col() - from.col()).abs());
    match piece {
        PieceKind::King => dr.max(dc) == 1,
        PieceKind::Knight => (dr, dc) == (1, 2) || (dr, dc) == (2, 1),
        PieceKind::Rook => (dr == 0 || dc == 0) && clear_between(board, from, to),
        PieceKind::Bishop => dr == dc && clear_between(board, from, to),
    }
}

fn reference_moves(board: &Board, piece: PieceKind, from: Square) -> BTreeSet<Square> {
    board
        .squares()
        .filter(|&to| legal_step(board, piece, from, to))
        .collect()
}

fn reference_distance(board: &Board, piece: PieceKind, start: Square, goal: Square) -> Option<usize> {
    let all: Vec<Square> = board.squares().collect();
    let mut dist = HashMap::from([(start, 0usize)]);
    let mut layer = vec![start];
    while !layer.is_empty() {
        let mut next = Vec::new();
        for &from in &layer {
            let d = dist[&from];
            for &to in &all {
                if !dist.contains_key(&to) && legal_step(board, piece, from, to) {
                    dist.insert(to, d + 1);
                    next.push(to);
                }
            }
        }
        layer = next;
    }
    dist.get(&goal).copied()
}

proptest! {
    /// Property: generated moves are on the board, unoccupied, and match the reference
    #[test]
    fn prop_moves_match_reference(obstacles in obstacles(), from in square(), piece in piece()) {
        let board = board_without(&obstacles, from);
        let moves = generate_moves(&board, from, piece).unwrap();

        for &to in moves.iter() {
            prop_assert_eq!(board.is_occupied(to), Some(false));
        }
        let generated: BTreeSet<Square> = moves.iter().copied().collect();
        prop_assert_eq!(generated.len(), moves.len());
        prop_assert_eq!(generated, reference_moves(&board, piece, from));
    }

    /// Property: generating twice with the same inputs gives the same result
    #[test]
    fn prop_generation_is_idempotent(obstacles in obstacles(), from in square(), piece in piece()) {
        let board = Board::build(Dimensions::STANDARD, obstacles);
        let first = generate_moves(&board, from, piece);
        let second = generate_moves(&board, from, piece);
        prop_assert_eq!(first, second);
    }

    /// Property: returned paths are legal, shortest, and agree with find_min_moves
    #[test]
    fn prop_paths_are_valid_and_shortest(
        obstacles in obstacles(),
        start in square(),
        goal in square(),
        piece in piece(),
    ) {
        let board = board_without(&obstacles, start);
        let result = find_shortest_path(&board, start, goal, piece);
        let expected = reference_distance(&board, piece, start, goal);

        match result {
            Ok(path) => {
                prop_assert_eq!(path.start(), start);
                prop_assert_eq!(path.goal(), goal);
                for (from, to) in path.steps() {
                    prop_assert!(generate_moves(&board, from, piece).unwrap().contains(to));
                }
                prop_assert_eq!(Some(path.move_count()), expected);
                prop_assert_eq!(find_min_moves(&board, start, goal, piece), Ok(path.move_count()));
            }
            Err(QueryError::Unreachable(_)) => {
                prop_assert_eq!(expected, None);
                prop_assert!(find_min_moves(&board, start, goal, piece).is_err());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Property: a bishop never reaches a square of the other shade
    #[test]
    fn prop_bishop_keeps_its_shade(start in square(), goal in square()) {
        prop_assume!(start.shade() != goal.shade());
        prop_assert_eq!(
            find_shortest_path(&Board::standard(), start, goal, PieceKind::Bishop),
            Err(QueryError::Unreachable(Unreachable::ColorMismatch { start, goal }))
        );
    }

    /// Property: start == goal is a zero-move path, even on a marked square
    #[test]
    fn prop_start_is_goal(obstacles in obstacles(), square in square(), piece in piece()) {
        let mut board = Board::build(Dimensions::STANDARD, obstacles);
        board.set_occupied(square, true).unwrap();
        let path = find_shortest_path(&board, square, square, piece).unwrap();
        prop_assert_eq!(path.squares(), &[square][..]);
        prop_assert_eq!(find_min_moves(&board, square, square, piece), Ok(0));
    }
}
