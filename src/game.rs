//! Game orchestrator.
//!
//! Ties the rules core together the way a UI drives it: ask for legal
//! moves, play one, let the turn controller roll for an automaton step,
//! then check for a winner. `Game` owns the board, turn state, and RNG;
//! everything underneath stays pure and separately testable.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::board::{Board, Coord, Player};
use crate::error::GameError;
use crate::feedback::{FeedbackSink, NoopFeedback};
use crate::moves::{apply_move, legal_moves};
use crate::persist::SavedGame;
use crate::rng::GameRng;
use crate::turn::TurnState;
use crate::win::{evaluate_win, DEFAULT_WINNING_CONDITION, WINNING_CONDITION_RANGE};

/// What a single played move produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The automaton fired after this move.
    pub automaton_fired: bool,
    /// The game ended with this winner.
    pub winner: Option<Player>,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: TurnState,
    rng: GameRng,
    winning_condition: u8,
}

/// Builder for a new game.
pub struct GameBuilder {
    seed: u64,
    winning_condition: u8,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            seed: 0,
            winning_condition: DEFAULT_WINNING_CONDITION,
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the automaton trigger draws.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Pieces required in the enemy zone to win.
    #[must_use]
    pub fn winning_condition(mut self, threshold: u8) -> Self {
        assert!(
            WINNING_CONDITION_RANGE.contains(&threshold),
            "Winning condition must be 1-5"
        );
        self.winning_condition = threshold;
        self
    }

    #[must_use]
    pub fn build(self) -> Game {
        Game {
            board: Board::initial(),
            turn: TurnState::new(),
            rng: GameRng::new(self.seed),
            winning_condition: self.winning_condition,
        }
    }
}

impl Game {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current_player
    }

    #[must_use]
    pub fn winning_condition(&self) -> u8 {
        self.winning_condition
    }

    /// Legal destinations for the player to move.
    ///
    /// Empty when `from` does not hold one of the current player's pieces;
    /// selecting the opponent's piece (or nothing) is not an error.
    #[must_use]
    pub fn legal_moves(&self, from: Coord) -> FxHashSet<Coord> {
        if self.board.occupant(from) != Some(self.turn.current_player) {
            return FxHashSet::default();
        }
        legal_moves(&self.board, from)
    }

    /// Play a move for the current player.
    ///
    /// Applies the move, advances the turn (possibly firing the automaton),
    /// and evaluates the win condition against the post-step board.
    pub fn play(&mut self, from: Coord, to: Coord) -> Result<PlayOutcome, GameError> {
        self.play_with(from, to, &mut NoopFeedback)
    }

    /// Like [`Game::play`], notifying `feedback` if the automaton fires.
    pub fn play_with(
        &mut self,
        from: Coord,
        to: Coord,
        feedback: &mut dyn FeedbackSink,
    ) -> Result<PlayOutcome, GameError> {
        if self.board.occupant(from) != Some(self.turn.current_player) {
            return Err(GameError::IllegalMove { from, to });
        }

        self.board = apply_move(&self.board, from, to)?;
        let automaton_fired = self.turn.advance(&mut self.board, &mut self.rng);
        if automaton_fired {
            feedback.automaton_fired();
        }

        let winner = evaluate_win(&self.board, self.winning_condition);
        if let Some(player) = winner {
            debug!(%player, move_count = self.turn.move_count, "game over");
        }
        Ok(PlayOutcome {
            automaton_fired,
            winner,
        })
    }

    /// Snapshot for the save/restore collaborator.
    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            board: self.board.clone(),
            current_player: self.turn.current_player,
            move_count: self.turn.move_count,
            probability: self.turn.probability,
            rng: self.rng.state(),
        }
    }

    /// Resume from a snapshot. The winning condition is not part of the
    /// snapshot; it comes from settings.
    #[must_use]
    pub fn restore(saved: &SavedGame, winning_condition: u8) -> Game {
        Game {
            board: saved.board.clone(),
            turn: saved.turn_state(),
            rng: GameRng::from_state(&saved.rng),
            winning_condition,
        }
    }
}
