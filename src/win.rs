//! Win evaluation.
//!
//! A side wins by infiltration (enough pieces on protected cells inside the
//! opposing home rows) or by eliminating every opposing piece. The checks
//! run in a fixed priority order, so if both sides reach the infiltration
//! threshold on the same board, Player One is declared the winner.

use crate::board::{Board, Player};

/// Default pieces-in-enemy-zone threshold.
pub const DEFAULT_WINNING_CONDITION: u8 = 1;

/// Valid range for the winning-condition setting.
pub const WINNING_CONDITION_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Decide whether either side has won. Pure read; `None` means the game
/// continues.
///
/// Priority order: One's infiltration, Two's infiltration, One eliminated,
/// Two eliminated.
#[must_use]
pub fn evaluate_win(board: &Board, threshold: u8) -> Option<Player> {
    let threshold = threshold as usize;

    if board.infiltration_count(Player::One) >= threshold {
        return Some(Player::One);
    }
    if board.infiltration_count(Player::Two) >= threshold {
        return Some(Player::Two);
    }
    if board.piece_count(Player::One) == 0 {
        return Some(Player::Two);
    }
    if board.piece_count(Player::Two) == 0 {
        return Some(Player::One);
    }
    None
}
