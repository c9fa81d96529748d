//! Turn advancement and game result

use std::fmt;

use crate::board::{Board, Player};

/// Pass the turn unless the last move closed a box.
///
/// Returns the side to move next.
#[inline]
pub fn advance_turn(board: &mut Board) -> Player {
    if !board.completed_box() {
        board.switch_player();
    }
    board.current_player()
}

/// Winner of a finished game, `None` while playing or on a tie
pub fn winner(board: &Board) -> Option<Player> {
    if !board.is_finished() {
        return None;
    }
    let max = board.score(Player::Max);
    let min = board.score(Player::Min);
    match max.cmp(&min) {
        std::cmp::Ordering::Greater => Some(Player::Max),
        std::cmp::Ordering::Less => Some(Player::Min),
        std::cmp::Ordering::Equal => None,
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Player, max: u32, min: u32 },
    Tie { score: u32 },
}

impl Outcome {
    /// Result of a finished board, `None` while playing
    pub fn of(board: &Board) -> Option<Outcome> {
        if !board.is_finished() {
            return None;
        }
        let max = board.score(Player::Max);
        let min = board.score(Player::Min);
        Some(match winner(board) {
            Some(winner) => Outcome::Win { winner, max, min },
            None => Outcome::Tie { score: max },
        })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win { winner, max, min } => {
                write!(f, "Player {winner} won ({} {max} - {min} {})", Player::Max, Player::Min)
            }
            Outcome::Tie { score } => write!(f, "It's a tie ({score} - {score})"),
        }
    }
}
