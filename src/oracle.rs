//! Read-only view of the opponent grid that the targeting engine consults.

use crate::bitboard::CellSet;
use crate::common::{BoardError, GuessResult};
use crate::config::GRID_SIZE;
use crate::coord::Coord;

/// Queries the targeting engine needs from whoever owns the opponent grid.
///
/// The engine never mutates the grid; it borrows an oracle for the duration of
/// a single decision.
pub trait GridOracle {
    /// Whether `(row, col)` is a playable cell.
    fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// Whether a shot at `coord` is known to have missed.
    fn is_miss(&self, coord: Coord) -> bool;
}

impl<O: GridOracle + ?Sized> GridOracle for &O {
    fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        (**self).is_valid_cell(row, col)
    }

    fn is_miss(&self, coord: Coord) -> bool {
        (**self).is_miss(coord)
    }
}

/// Hits and misses a shooter has recorded against the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuessLedger {
    pub hits: CellSet,
    pub misses: CellSet,
}

impl GuessLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of a shot at `coord`.
    pub fn record(&mut self, coord: Coord, result: GuessResult) -> Result<(), BoardError> {
        if self.is_guessed(coord) {
            return Err(BoardError::AlreadyGuessed);
        }
        if result.is_hit() {
            self.hits.insert(coord);
        } else {
            self.misses.insert(coord);
        }
        Ok(())
    }

    pub fn is_guessed(&self, coord: Coord) -> bool {
        self.hits.contains(coord) || self.misses.contains(coord)
    }

    /// Every cell fired upon, regardless of outcome.
    pub fn guessed(&self) -> CellSet {
        self.hits | self.misses
    }
}

impl GridOracle for GuessLedger {
    fn is_miss(&self, coord: Coord) -> bool {
        self.misses.contains(coord)
    }
}
