//! Ship types, the fleet table and ship footprints.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::common::BoardError;
use crate::config::{GRID_SIZE, SHIPS};
use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Extends along the row towards higher columns.
    Horizontal,
    /// Extends down the column towards higher rows.
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A hypothetical run of `length` cells starting at an anchor.
///
/// The run may leave the grid; callers decide what makes it valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation, length: usize) -> Self {
        Self { row, col, orientation, length }
    }

    /// Raw `(row, col)` pairs covered by the run, in order from the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Placement { row, col, orientation, length } = *self;
        (0..length).map(move |k| match orientation {
            Orientation::Horizontal => (row, col + k),
            Orientation::Vertical => (row + k, col),
        })
    }

    fn ends_inside(start: usize, length: usize) -> bool {
        start.checked_add(length).is_some_and(|end| end <= GRID_SIZE)
    }

    /// Whether the whole run lies inside the grid.
    pub fn fits(&self) -> bool {
        if self.length == 0 {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => {
                self.row < GRID_SIZE && Self::ends_inside(self.col, self.length)
            }
            Orientation::Vertical => {
                self.col < GRID_SIZE && Self::ends_inside(self.row, self.length)
            }
        }
    }
}

/// A ship type together with the number of instances still afloat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetEntry {
    pub ship: ShipType,
    pub remaining: u8,
}

/// Table of ship types the shooter still has to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new(entries: Vec<FleetEntry>) -> Self {
        Self { entries }
    }

    /// One of each ship in [`SHIPS`].
    pub fn standard() -> Self {
        Self::new(SHIPS.iter().map(|&ship| FleetEntry { ship, remaining: 1 }).collect())
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    /// Lengths of the types that still have at least one ship afloat.
    pub fn remaining_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .filter(|e| e.remaining > 0)
            .map(|e| e.ship.length())
    }

    /// Sum of the lengths of every ship still afloat.
    pub fn remaining_cells(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.ship.length() * e.remaining as usize)
            .sum()
    }

    pub fn all_sunk(&self) -> bool {
        self.entries.iter().all(|e| e.remaining == 0)
    }

    /// Mark one ship of type `name` as sunk.
    pub fn record_sunk(&mut self, name: &str) -> Result<(), BoardError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.ship.name() == name && e.remaining > 0)
            .ok_or(BoardError::NameNotFound)?;
        entry.remaining -= 1;
        Ok(())
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::standard()
    }
}

/// A ship placed on the grid, with hits tracked in a [`CellSet`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    mask: CellSet,
    hits: CellSet,
}

impl Ship {
    /// Place a ship at (`row`, `col`) with `orientation`.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let placement = Placement::new(row, col, orientation, ship_type.length());
        if !placement.fits() {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mask = CellSet::from_cells(placement.cells())?;
        Ok(Ship {
            ship_type,
            orientation,
            origin: Coord::new(row, col)?,
            mask,
            hits: CellSet::new(),
        })
    }

    /// Register a shot; returns `true` if it struck this ship.
    pub fn guess(&mut self, coord: Coord) -> bool {
        if self.mask.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> CellSet {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
        )
    }
}
