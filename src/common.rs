//! Common types: board errors and shot results.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of a shot as reported by the board that received it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot missed all ships.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, GuessResult::Sink(_))
    }
}

/// Errors returned by board, ledger and game-runner operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Named ship not found in the fleet.
    NameNotFound,
    /// Ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Guess was already made at this position.
    AlreadyGuessed,
    /// Random placement gave up.
    UnableToPlaceShip,
    /// Ship would extend past the grid edge.
    ShipOutOfBounds,
    /// A cell on the ship map belongs to no placed ship.
    UnknownShipHit,
    /// Game did not finish within the allowed number of turns.
    TurnLimit(usize),
    /// Shooter has no unvisited cell left while ships are still afloat.
    BoardExhausted,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the grid", row, col)
            }
            BoardError::NameNotFound => write!(f, "Ship name not found in fleet"),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnknownShipHit => write!(f, "Hit cell does not belong to any ship"),
            BoardError::TurnLimit(n) => write!(f, "Game not finished after {} turns", n),
            BoardError::BoardExhausted => write!(f, "No unvisited cells remain"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
