//! Legal-move generation and move application.
//!
//! Movement uses the sliding/zone rule set: from the selected piece, each of
//! the 8 directions is scanned outward one cell at a time. The first empty
//! cell in a direction is a destination and ends the scan; a cell inside the
//! mover's enemy home zone is a destination regardless of its occupant (zone
//! capture). Diagonal scans may jump exactly one intervening occupied cell
//! of either side before testing the landing cell; orthogonal scans stop at
//! the first occupied cell.

use rustc_hash::FxHashSet;

use crate::board::{Board, Coord};
use crate::error::GameError;

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All legal destinations for the piece at `from`.
///
/// Returns the empty set when `from` is unoccupied - an empty selection is
/// not an error. The result never contains `from` itself and never leaves
/// the grid.
#[must_use]
pub fn legal_moves(board: &Board, from: Coord) -> FxHashSet<Coord> {
    let mut moves = FxHashSet::default();
    let Some(mover) = board.occupant(from) else {
        return moves;
    };
    let enemy_rows = mover.enemy_home_rows();

    for (dr, dc) in DIRECTIONS {
        let diagonal = dr != 0 && dc != 0;
        let mut cursor = from;
        let mut jumped = false;

        while let Some(next) = cursor.offset(dr, dc) {
            if board.occupant(next).is_none() || enemy_rows.contains(&next.row()) {
                moves.insert(next);
                break;
            }
            if diagonal && !jumped {
                // One occupied cell may be jumped; a second ends the scan.
                jumped = true;
                cursor = next;
            } else {
                break;
            }
        }
    }
    moves
}

/// Apply a move, producing a new board.
///
/// Validates that `to` is a legal destination for the piece at `from` and
/// rejects the move otherwise; a silently corrupted board is worse than a
/// rejected move. Moving into the enemy home zone overwrites any occupant
/// there - pieces never stack.
pub fn apply_move(board: &Board, from: Coord, to: Coord) -> Result<Board, GameError> {
    let mover = board
        .occupant(from)
        .ok_or(GameError::IllegalMove { from, to })?;
    if !legal_moves(board, from).contains(&to) {
        return Err(GameError::IllegalMove { from, to });
    }

    let mut next = board.clone();
    next.set_occupant(to, Some(mover));
    next.set_occupant(from, None);
    Ok(next)
}
