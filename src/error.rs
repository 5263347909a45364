//! Error taxonomy.
//!
//! Deliberately narrow: coordinates are range-checked at construction and
//! move legality is validated in `apply_move`, so only two things can go
//! wrong. "No winner yet" and "no legal moves" are ordinary return values,
//! not errors.

use thiserror::Error;

use crate::board::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A coordinate outside the 12×8 grid. Only producible at the
    /// `TryFrom<(u8, u8)>` validation seam; a constructed `Coord` is always
    /// in bounds.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// `to` is not a legal destination for the piece at `from`, or `from`
    /// holds no piece of the player to move.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },
}
