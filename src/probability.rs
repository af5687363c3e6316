//! Placement-count density over the opponent grid.
//!
//! Scores are plain counts held in a fixed array, rebuilt on every call.

use core::fmt;

use crate::{
    bitboard::CellSet,
    config::GRID_SIZE,
    coord::Coord,
    oracle::GridOracle,
    ship::{Fleet, Orientation, Placement},
};

/// Per-cell count of valid ship placements covering that cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityGrid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl ProbabilityGrid {
    pub fn new() -> Self {
        Self { cells: [[0; GRID_SIZE]; GRID_SIZE] }
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> u32 {
        self.cells[coord.row()][coord.col()]
    }

    /// Every cell with its score, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        Coord::all().map(move |c| (c, self.get(c)))
    }

    /// Sum of all scores.
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Highest score among `cells`, or `None` if `cells` is empty.
    pub fn max_over<I>(&self, cells: I) -> Option<u32>
    where
        I: IntoIterator<Item = Coord>,
    {
        cells.into_iter().map(|c| self.get(c)).max()
    }

    fn add(&mut self, placement: &Placement) {
        for (r, c) in placement.cells() {
            self.cells[r][c] += 1;
        }
    }
}

impl Default for ProbabilityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProbabilityGrid:")?;
        for row in self.cells.iter() {
            for v in row.iter() {
                write!(f, "{:4}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A placement is ruled out if it leaves the grid, touches a cell the oracle
/// rejects, or covers a cell we have fired at and know to be a miss.
fn is_valid_placement<O: GridOracle + ?Sized>(
    placement: &Placement,
    oracle: &O,
    visited: &CellSet,
) -> bool {
    placement.fits()
        && placement.cells().all(|(r, c)| {
            if !oracle.is_valid_cell(r, c) {
                return false;
            }
            let coord = Coord::from_index(r, c);
            !(visited.contains(coord) && oracle.is_miss(coord))
        })
}

/// Count, for every cell, the valid placements of every remaining ship type
/// that cover it. Each type with at least one ship afloat is counted once, in
/// both orientations, from every anchor cell.
///
/// Visited cells are scored like any other; excluding them is the selector's
/// job.
pub fn calc_density<O: GridOracle + ?Sized>(
    oracle: &O,
    visited: &CellSet,
    fleet: &Fleet,
) -> ProbabilityGrid {
    let mut grid = ProbabilityGrid::new();

    for len in fleet.remaining_lengths() {
        if len == 0 || len > GRID_SIZE {
            continue;
        }
        for orientation in Orientation::BOTH {
            for anchor in Coord::all() {
                let placement = Placement::new(anchor.row(), anchor.col(), orientation, len);
                if is_valid_placement(&placement, oracle, visited) {
                    grid.add(&placement);
                }
            }
        }
    }

    grid
}
