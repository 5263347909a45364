//! Player-facing settings and their storage seam.
//!
//! The rules core only consumes `winning_condition`; the UI reads the rest.
//! Actual persistence (platform preference stores) lives behind the
//! [`SettingsStore`] trait; [`InMemorySettingsStore`] backs tests and
//! embedded use.

use serde::{Deserialize, Serialize};

use crate::win::{DEFAULT_WINNING_CONDITION, WINNING_CONDITION_RANGE};

/// Persisted settings with their documented defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Pieces required in the enemy zone to win, 1–5.
    pub winning_condition: u8,
    /// Haptic pulse when the automaton fires.
    pub vibration_enabled: bool,
    /// Show coordinate labels on the board.
    pub show_labels: bool,
}

impl Settings {
    /// Set the winning condition, clamped into its valid range.
    pub fn set_winning_condition(&mut self, value: u8) {
        self.winning_condition = value.clamp(
            *WINNING_CONDITION_RANGE.start(),
            *WINNING_CONDITION_RANGE.end(),
        );
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Settings::default();
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            winning_condition: DEFAULT_WINNING_CONDITION,
            vibration_enabled: true,
            show_labels: false,
        }
    }
}

/// Storage seam for settings. Implementations must tolerate missing data by
/// falling back to defaults.
pub trait SettingsStore {
    fn load(&self) -> Settings;
    fn save(&mut self, settings: Settings);
    fn reset(&mut self);
}

/// Trivial in-memory store.
#[derive(Clone, Debug, Default)]
pub struct InMemorySettingsStore {
    settings: Option<Settings>,
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Settings {
        self.settings.unwrap_or_default()
    }

    fn save(&mut self, settings: Settings) {
        self.settings = Some(settings);
    }

    fn reset(&mut self) {
        self.settings = None;
    }
}
