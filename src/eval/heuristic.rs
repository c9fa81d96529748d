//! Heuristic evaluation function for Dots-and-Boxes board positions
//!
//! This module provides the evaluation used at the leaves of both searches.
//! Values are from the maximizing side's point of view:
//! - Positive values favour [`Player::Max`]
//! - Finished games score at least [`Score::LIMIT`] in magnitude
//! - Unfinished games never reach [`Score::LIMIT`]

use crate::board::{Board, Player};
use crate::engine::Difficulty;

use super::scores::Score;

/// Evaluate the board for the search.
///
/// Finished boards get their [`terminal_score`]. Otherwise `Easy` uses the
/// cheap [`naive_score`] difference and the other difficulties the
/// [`chain_score`] difference.
///
/// Takes `&mut` because the chain estimate plays moves internally; the board
/// is restored before returning.
#[must_use]
pub fn evaluate(board: &mut Board, difficulty: Difficulty) -> i32 {
    if board.is_finished() {
        return terminal_score(board);
    }

    match difficulty {
        Difficulty::Easy => naive_score(board, Player::Max) - naive_score(board, Player::Min),
        Difficulty::Medium | Difficulty::Hard => {
            chain_score(board, Player::Max) as i32 - chain_score(board, Player::Min) as i32
        }
    }
}

/// Score of a finished game: 0 on a tie, otherwise `LIMIT + margin`,
/// signed towards the winner.
#[must_use]
pub fn terminal_score(board: &Board) -> i32 {
    debug_assert!(board.is_finished());
    let max = board.score(Player::Max) as i32;
    let min = board.score(Player::Min) as i32;

    match max.cmp(&min) {
        std::cmp::Ordering::Equal => Score::TIE,
        std::cmp::Ordering::Greater => Score::LIMIT + (max - min),
        std::cmp::Ordering::Less => -(Score::LIMIT + (min - max)),
    }
}

/// Optimistic estimate: every box the opponent has not taken yet
/// ends up with `side`.
#[inline]
#[must_use]
pub fn naive_score(board: &Board, side: Player) -> i32 {
    board.total_boxes() as i32 - board.score(side.opponent()) as i32
}

/// Score `side` reaches by taking every box it can capture for free right now.
///
/// If `side` is to move, every box with three sides drawn is closed, which
/// may leave its neighbour with three sides in turn, until no such box is
/// left. Every simulated move is undone before returning, so the board is
/// unchanged. A side that is not to move cannot capture and keeps its
/// current score.
pub fn chain_score(board: &mut Board, side: Player) -> u32 {
    if board.current_player() != side {
        return board.score(side);
    }

    let mut taken = Vec::new();
    loop {
        let pending = board.almost_completed_edges();
        if pending.is_empty() {
            break;
        }
        for edge in pending {
            // Two pending boxes may share their missing edge
            if board.make_move(edge) {
                taken.push(edge);
            }
        }
    }

    let score = board.score(side);
    for edge in taken.into_iter().rev() {
        board.undo_move(edge);
    }
    score
}
