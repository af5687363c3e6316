//! Reference opponent board: ship placement and shot resolution.

use core::fmt;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::{BoardError, GuessResult};
use crate::config::{GRID_SIZE, NUM_SHIPS, SHIPS};
use crate::coord::Coord;
use crate::oracle::GridOracle;
use crate::ship::{Orientation, Ship};

/// Placement attempts per ship before `random_placement` gives up.
const PLACEMENT_ATTEMPTS: usize = 100;

/// The standard fleet laid out on a grid, with the shots it has received.
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    sunk: [bool; NUM_SHIPS],
    ship_map: CellSet,
    hits: CellSet,
    misses: CellSet,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            sunk: [false; NUM_SHIPS],
            ship_map: CellSet::new(),
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    /// Returns `true` when every placed ship is sunk and at least one exists.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().any(Option::is_some)
            && self
                .ships
                .iter()
                .zip(self.sunk.iter())
                .all(|(ship, &sunk)| ship.is_none() || sunk)
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> CellSet {
        self.ship_map
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Place ship `ship_index` at (row, col) with `orientation`.
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(SHIPS[ship_index], orientation, row, col)?;
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Returns a random non-overlapping (row, col, orientation) for `ship_index`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let def = SHIPS[ship_index];
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - def.length()),
                Orientation::Vertical => (GRID_SIZE - def.length(), GRID_SIZE - 1),
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let ship = Ship::new(def, orient, r, c)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((r, c, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every ship of the standard fleet at random.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            let (r, c, o) = self.random_placement(rng, i)?;
            self.place(i, r, c, o)?;
        }
        Ok(())
    }

    /// Process a shot at (row, col), marking hits/misses and reporting result.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let coord = Coord::new(row, col)?;
        if self.hits.contains(coord) || self.misses.contains(coord) {
            return Err(BoardError::AlreadyGuessed);
        }
        if !self.ship_map.contains(coord) {
            self.misses.insert(coord);
            return Ok(GuessResult::Miss);
        }
        self.hits.insert(coord);
        for (i, slot) in self.ships.iter_mut().enumerate() {
            if let Some(ship) = slot {
                if ship.guess(coord) {
                    if ship.is_sunk() && !self.sunk[i] {
                        self.sunk[i] = true;
                        return Ok(GuessResult::Sink(ship.ship_type().name()));
                    }
                    return Ok(GuessResult::Hit);
                }
            }
        }
        Err(BoardError::UnknownShipHit)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl GridOracle for Board {
    fn is_miss(&self, coord: Coord) -> bool {
        self.misses.contains(coord)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("sunk", &self.sunk)
            .field("hits", &self.hits.count_ones())
            .field("misses", &self.misses.count_ones())
            .finish()
    }
}
