//! Save and restore of in-progress games.
//!
//! A [`SavedGame`] snapshot carries everything the rules need to resume:
//! board, player to move, move count, trigger probability, and the RNG
//! state so the draw sequence continues where it left off. The wire shape
//! is an opaque `bincode` blob; storage lives behind the [`SaveStore`]
//! trait. A blob that fails to decode is reported as "no saved state", never
//! as a fatal condition.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::rng::GameRngState;
use crate::turn::TurnState;

/// Complete snapshot of an in-progress game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub board: Board,
    pub current_player: Player,
    pub move_count: u32,
    pub probability: f64,
    pub rng: GameRngState,
}

impl SavedGame {
    /// Encode to an opaque blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a blob. Corrupt or foreign bytes read as "no saved state".
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<SavedGame> {
        bincode::deserialize(bytes).ok()
    }

    /// The turn-state part of the snapshot.
    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        TurnState {
            current_player: self.current_player,
            move_count: self.move_count,
            probability: self.probability,
        }
    }
}

/// Storage seam for saved games.
pub trait SaveStore {
    fn save(&mut self, game: &SavedGame);
    /// `None` when nothing is saved or the stored blob fails to decode.
    fn load(&self) -> Option<SavedGame>;
    fn clear(&mut self);
}

/// Holds the encoded blob in memory. Backs tests and embedded use; platform
/// stores implement [`SaveStore`] outside this crate.
#[derive(Clone, Debug, Default)]
pub struct InMemorySaveStore {
    blob: Option<Vec<u8>>,
}

impl SaveStore for InMemorySaveStore {
    fn save(&mut self, game: &SavedGame) {
        // An unencodable snapshot is treated the same as never saving.
        self.blob = game.to_bytes().ok();
    }

    fn load(&self) -> Option<SavedGame> {
        self.blob.as_deref().and_then(SavedGame::from_bytes)
    }

    fn clear(&mut self) {
        self.blob = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    fn sample() -> SavedGame {
        SavedGame {
            board: Board::initial(),
            current_player: Player::Two,
            move_count: 9,
            probability: 0.16,
            rng: GameRng::new(42).state(),
        }
    }

    #[test]
    fn test_blob_round_trip() {
        let saved = sample();
        let bytes = saved.to_bytes().unwrap();
        let restored = SavedGame::from_bytes(&bytes).unwrap();
        assert_eq!(saved, restored);
    }

    #[test]
    fn test_corrupt_blob_reads_as_absent() {
        assert!(SavedGame::from_bytes(b"not a snapshot").is_none());
        assert!(SavedGame::from_bytes(&[]).is_none());
    }

    #[test]
    fn test_store_save_load_clear() {
        let mut store = InMemorySaveStore::default();
        assert!(store.load().is_none());

        let saved = sample();
        store.save(&saved);
        assert_eq!(store.load(), Some(saved));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_turn_state_projection() {
        let turn = sample().turn_state();
        assert_eq!(turn.current_player, Player::Two);
        assert_eq!(turn.move_count, 9);
        assert_eq!(turn.probability, 0.16);
    }
}
