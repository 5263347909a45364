//! Turn progression and the automaton trigger probability.
//!
//! Each successful move flips the player to move and increments the move
//! count. The automaton is gated behind a fixed warm-up of six moves that
//! protects the opening setup; after that, every move draws against a
//! running probability that starts at 0.1, grows by 0.02 per non-firing
//! move, and resets on firing. The probability is deliberately unclamped:
//! it can exceed 1.0, which guarantees the next draw fires.
//!
//! The trigger state is caller-owned - there are no module-level globals,
//! and the randomness comes through an injected [`ProbabilitySource`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::automaton::apply_automaton_step;
use crate::board::{Board, Player};
use crate::rng::ProbabilitySource;

/// Probability after a reset, and before the warm-up ends.
pub const INITIAL_PROBABILITY: f64 = 0.1;

/// Growth per non-firing move once eligible.
pub const PROBABILITY_INCREMENT: f64 = 0.02;

/// Moves that must be played before the automaton can fire at all.
pub const WARMUP_MOVES: u32 = 6;

/// Caller-owned turn record, created alongside the board and reset with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_player: Player,
    pub move_count: u32,
    /// Running automaton trigger probability.
    pub probability: f64,
}

impl TurnState {
    /// A fresh game: Player One to move, no moves played.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_player: Player::One,
            move_count: 0,
            probability: INITIAL_PROBABILITY,
        }
    }

    /// Advance after a successful move: flip the player to move, bump the
    /// move count, and roll for an automaton step.
    ///
    /// Returns whether the automaton fired (and thus mutated `board`). The
    /// caller decides what to do with the flag - typically forwarding it to
    /// a feedback sink.
    pub fn advance(&mut self, board: &mut Board, rng: &mut impl ProbabilitySource) -> bool {
        self.current_player = self.current_player.opponent();
        self.move_count += 1;

        if self.move_count < WARMUP_MOVES {
            // Probability stays pinned during warm-up; no draw happens.
            return false;
        }

        if rng.next_unit() < self.probability {
            *board = apply_automaton_step(board);
            debug!(move_count = self.move_count, "automaton step fired");
            self.probability = INITIAL_PROBABILITY;
            true
        } else {
            self.probability += PROBABILITY_INCREMENT;
            false
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
