//! Candidate generation for the next shot.

use alloc::vec::Vec;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    bitboard::CellSet, coord::Coord, hunt::Fringe, oracle::GridOracle,
    probability::ProbabilityGrid,
};

/// Unvisited, playable orthogonal neighbours of every fringe hit.
///
/// A cell next to two hits appears twice, which doubles its chance of being
/// picked.
pub fn fringe_candidates<O: GridOracle + ?Sized>(
    fringe: &Fringe,
    oracle: &O,
    visited: &CellSet,
) -> Vec<Coord> {
    fringe
        .iter()
        .flat_map(|hit| hit.neighbors())
        .filter(|n| oracle.is_valid_cell(n.row(), n.col()) && !visited.contains(*n))
        .collect()
}

/// Every unvisited cell in row-major order.
pub fn unvisited_cells(visited: &CellSet) -> Vec<Coord> {
    visited.free_coords().collect()
}

/// Unvisited cells sharing the highest score.
///
/// When every unvisited cell scores zero the whole unvisited set is returned;
/// that only happens if the fleet table no longer matches the board.
pub fn densest_cells(grid: &ProbabilityGrid, visited: &CellSet) -> Vec<Coord> {
    let open = unvisited_cells(visited);
    let best = match grid.max_over(open.iter().copied()) {
        Some(best) => best,
        None => return open,
    };
    if best == 0 {
        debug!("no placement fits any open cell, choosing uniformly");
        return open;
    }
    open.into_iter().filter(|&c| grid.get(c) == best).collect()
}

/// Uniform pick among `candidates`.
pub fn pick<R: Rng + ?Sized>(candidates: &[Coord], rng: &mut R) -> Option<Coord> {
    candidates.choose(rng).copied()
}
