//! Board representation and zone geometry.
//!
//! ## Layout
//!
//! The board is a fixed 12-row × 8-column grid, row-major, row 0 at Player
//! Two's home edge and row 11 at Player One's. Both players start with
//! pieces on their two home rows, on cells where `(row + col)` is odd.
//!
//! ## Protected cells
//!
//! Rows 0–1, rows 10–11, and the 2×2 sanctuary at rows 5–6 × cols 3–4 are
//! exempt from automaton mutation. Protection is a static property of a
//! coordinate: it is set once in `Board::initial` and never changes during
//! play — only occupants change.

use serde::{Deserialize, Serialize};
use std::ops::{Index, RangeInclusive};

use crate::error::GameError;

/// One of the two sides. Empty cells hold `Option<Player>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The opposing player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// This player's own protected start rows.
    #[must_use]
    pub const fn home_rows(self) -> RangeInclusive<u8> {
        match self {
            Player::One => 10..=11,
            Player::Two => 0..=1,
        }
    }

    /// The opponent's protected start rows - the infiltration target.
    #[must_use]
    pub const fn enemy_home_rows(self) -> RangeInclusive<u8> {
        self.opponent().home_rows()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One"),
            Player::Two => write!(f, "Player Two"),
        }
    }
}

/// A board coordinate, always within the 12×8 grid once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, returning `None` if outside the grid.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Coord> {
        if (row as usize) < Board::ROWS && (col as usize) < Board::COLS {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Offset by a direction vector, returning `None` if the result leaves
    /// the grid. Used for direction scans and neighbor enumeration.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Coord> {
        let row = i32::from(self.row) + dr;
        let col = i32::from(self.col) + dc;
        if (0..Board::ROWS as i32).contains(&row) && (0..Board::COLS as i32).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate every coordinate on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..Board::ROWS as u8).flat_map(|row| (0..Board::COLS as u8).map(move |col| Coord { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = GameError;

    /// Validation seam for untrusted input (e.g. raw UI taps).
    fn try_from((row, col): (u8, u8)) -> Result<Coord, GameError> {
        Coord::new(row, col).ok_or(GameError::OutOfBounds { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// State of a single cell.
///
/// `protected` never changes after board creation; `occupant` is the only
/// field that varies during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellState {
    pub occupant: Option<Player>,
    pub protected: bool,
}

/// The 12×8 game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellState; Board::COLS]; Board::ROWS],
}

impl Board {
    pub const ROWS: usize = 12;
    pub const COLS: usize = 8;

    /// Sanctuary block: rows 5–6 × cols 3–4.
    const SANCTUARY_ROWS: RangeInclusive<u8> = 5..=6;
    const SANCTUARY_COLS: RangeInclusive<u8> = 3..=4;

    /// The deterministic starting position: Two on rows 0–1 and One on rows
    /// 10–11, each on cells with odd `(row + col)` parity.
    #[must_use]
    pub fn initial() -> Board {
        let mut board = Board::empty();
        for coord in Coord::all() {
            let odd = (coord.row + coord.col) % 2 == 1;
            let occupant = if odd && Player::Two.home_rows().contains(&coord.row) {
                Some(Player::Two)
            } else if odd && Player::One.home_rows().contains(&coord.row) {
                Some(Player::One)
            } else {
                None
            };
            board.cells[coord.row as usize][coord.col as usize].occupant = occupant;
        }
        board
    }

    /// A board with the standard protection geometry and no pieces.
    ///
    /// Scenario construction starts here and places pieces with
    /// [`Board::set_occupant`].
    #[must_use]
    pub fn empty() -> Board {
        let mut cells = [[CellState {
            occupant: None,
            protected: false,
        }; Board::COLS]; Board::ROWS];
        for coord in Coord::all() {
            cells[coord.row as usize][coord.col as usize].protected = Self::protected_at(coord);
        }
        Board { cells }
    }

    fn protected_at(coord: Coord) -> bool {
        Player::One.home_rows().contains(&coord.row)
            || Player::Two.home_rows().contains(&coord.row)
            || (Self::SANCTUARY_ROWS.contains(&coord.row) && Self::SANCTUARY_COLS.contains(&coord.col))
    }

    /// Cell state at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> CellState {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Occupant at a coordinate, `None` for an empty cell.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<Player> {
        self.get(coord).occupant
    }

    #[must_use]
    pub fn is_protected(&self, coord: Coord) -> bool {
        self.get(coord).protected
    }

    /// Replace the occupant of a cell. Protection is untouched.
    pub fn set_occupant(&mut self, coord: Coord, occupant: Option<Player>) {
        self.cells[coord.row as usize][coord.col as usize].occupant = occupant;
    }

    /// Total pieces on the board for a player.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.iter().filter(|(_, cell)| cell.occupant == Some(player)).count()
    }

    /// Pieces a player has sitting on protected cells inside the opposing
    /// home rows.
    #[must_use]
    pub fn infiltration_count(&self, player: Player) -> usize {
        let rows = player.enemy_home_rows();
        self.iter()
            .filter(|(coord, cell)| {
                cell.occupant == Some(player) && cell.protected && rows.contains(&coord.row())
            })
            .count()
    }

    /// Iterate all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        Coord::all().map(move |coord| (coord, self.get(coord)))
    }
}

impl Index<Coord> for Board {
    type Output = CellState;

    fn index(&self, coord: Coord) -> &CellState {
        &self.cells[coord.row as usize][coord.col as usize]
    }
}
