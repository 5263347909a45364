//! # quasistar
//!
//! Rules engine for QuasiStar, a two-player abstract strategy game on a
//! 12×8 board with a stochastic Game-of-Life perturbation layer.
//!
//! ## Design Principles
//!
//! 1. **Pure rules core**: move generation, move application, the automaton
//!    step, and win evaluation are pure functions over the board. Nothing in
//!    the crate renders, persists, or vibrates.
//!
//! 2. **Caller-owned state**: the board and [`TurnState`] are plain values
//!    the caller holds and threads through calls. No globals, no interior
//!    mutability.
//!
//! 3. **Injectable randomness**: the only random decision (the automaton
//!    trigger draw) goes through [`ProbabilitySource`], so games replay
//!    deterministically from a seed and tests inject fixed sequences.
//!
//! 4. **Collaborators behind traits**: settings storage, save/restore, and
//!    haptic feedback are seams ([`SettingsStore`], [`SaveStore`],
//!    [`FeedbackSink`]) the embedding platform implements.
//!
//! ## Modules
//!
//! - `board`: grid, players, coordinates, zone geometry
//! - `moves`: legal-move generation and move application
//! - `automaton`: the Game-of-Life step
//! - `turn`: turn progression and trigger probability
//! - `win`: win evaluation
//! - `rng`: deterministic, injectable randomness
//! - `game`: orchestrator tying a full game together
//! - `settings`, `persist`, `feedback`: external-collaborator seams
//! - `error`: the (narrow) error taxonomy

pub mod automaton;
pub mod board;
pub mod error;
pub mod feedback;
pub mod game;
pub mod moves;
pub mod persist;
pub mod rng;
pub mod settings;
pub mod turn;
pub mod win;

// Re-export commonly used types
pub use crate::automaton::apply_automaton_step;
pub use crate::board::{Board, CellState, Coord, Player};
pub use crate::error::GameError;
pub use crate::feedback::{FeedbackSink, NoopFeedback};
pub use crate::game::{Game, GameBuilder, PlayOutcome};
pub use crate::moves::{apply_move, legal_moves};
pub use crate::persist::{InMemorySaveStore, SaveStore, SavedGame};
pub use crate::rng::{FixedSequence, GameRng, GameRngState, ProbabilitySource};
pub use crate::settings::{InMemorySettingsStore, Settings, SettingsStore};
pub use crate::turn::{TurnState, INITIAL_PROBABILITY, PROBABILITY_INCREMENT, WARMUP_MOVES};
pub use crate::win::{evaluate_win, DEFAULT_WINNING_CONDITION, WINNING_CONDITION_RANGE};
