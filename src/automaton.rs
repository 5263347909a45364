//! Game-of-Life perturbation step.
//!
//! A synchronous Conway-style rule applied to every unprotected cell:
//! births and deaths are decided against the pre-step board, so no cell's
//! new state influences another cell's neighbor count within the same step.
//! Protected cells (home rows and the sanctuary) copy through unchanged and
//! are invisible to neighbor counts.

use crate::board::{Board, CellState, Coord, Player};

/// Occupied, unprotected neighbors of a cell, split by owner.
fn neighbor_counts(board: &Board, coord: Coord) -> (u32, u32) {
    let mut one = 0;
    let mut two = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let Some(neighbor) = coord.offset(dr, dc) else {
                continue;
            };
            let cell = board.get(neighbor);
            if cell.protected {
                continue;
            }
            match cell.occupant {
                Some(Player::One) => one += 1,
                Some(Player::Two) => two += 1,
                None => {}
            }
        }
    }
    (one, two)
}

/// Apply one automaton step, producing a new board.
///
/// Pure function of the board alone: it never consults whose turn it is,
/// and calling it twice on the same input yields identical output.
///
/// Per unprotected cell, with `one + two` occupied unprotected neighbors:
/// - empty with exactly 3 neighbors: born to the majority owner (Two on the
///   `one == two` branch of the comparison, which a 3-neighbor split cannot
///   actually reach);
/// - occupied with fewer than 2 or more than 3 neighbors: dies;
/// - otherwise unchanged.
#[must_use]
pub fn apply_automaton_step(board: &Board) -> Board {
    let mut next = board.clone();
    for (coord, cell) in board.iter() {
        if cell.protected {
            continue;
        }
        let (one, two) = neighbor_counts(board, coord);
        let total = one + two;

        let new_cell = match cell.occupant {
            None if total == 3 => CellState {
                occupant: Some(if one > two { Player::One } else { Player::Two }),
                protected: false,
            },
            Some(_) if !(2..=3).contains(&total) => CellState {
                occupant: None,
                protected: false,
            },
            _ => cell,
        };
        if new_cell != cell {
            next.set_occupant(coord, new_cell.occupant);
        }
    }
    next
}
