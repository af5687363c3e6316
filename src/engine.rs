//! The targeting engine: one shot per turn, fed back by the caller.
//!
//! Each turn the caller asks [`TargetingEngine::next_shot`] for a cell, fires
//! it at the opponent, and reports the outcome through
//! [`TargetingEngine::report_result`]. While no ship is located the engine
//! fires at the densest cell of a freshly computed [`ProbabilityGrid`]; after
//! a hit it works the neighbours of the hits until the ship sinks or the
//! fringe runs dry.

use core::mem;
use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    bitboard::CellSet,
    common::GuessResult,
    coord::Coord,
    hunt::HuntState,
    oracle::GridOracle,
    probability::{calc_density, ProbabilityGrid},
    selector,
    ship::Fleet,
};

/// Hunt/search opponent for one board.
#[derive(Debug, Clone)]
pub struct TargetingEngine<R = SmallRng> {
    initial_fleet: Fleet,
    fleet: Fleet,
    visited: CellSet,
    state: HuntState,
    rng: R,
}

impl TargetingEngine<SmallRng> {
    /// Engine with a deterministic `SmallRng` seeded from `seed`.
    pub fn seeded(fleet: Fleet, seed: u64) -> Self {
        Self::with_rng(fleet, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetingEngine<R> {
    pub fn with_rng(fleet: Fleet, rng: R) -> Self {
        Self {
            initial_fleet: fleet.clone(),
            fleet,
            visited: CellSet::new(),
            state: HuntState::Search,
            rng,
        }
    }

    /// Choose the next cell to fire at, or `None` once every cell is visited.
    pub fn next_shot<O: GridOracle + ?Sized>(&mut self, oracle: &O) -> Option<Coord> {
        if let HuntState::Hunt(fringe) = &self.state {
            let candidates = selector::fringe_candidates(fringe, oracle, &self.visited);
            if let Some(shot) = selector::pick(&candidates, &mut self.rng) {
                trace!("hunt shot {} from {} fringe hits", shot, fringe.len());
                return Some(shot);
            }
            debug!("fringe of {} hits exhausted, back to search", fringe.len());
            self.state = HuntState::Search;
        }

        let grid = self.probability_field(oracle);
        let candidates = selector::densest_cells(&grid, &self.visited);
        let shot = selector::pick(&candidates, &mut self.rng)?;
        trace!("search shot {} (score {}, {} tied)", shot, grid.get(shot), candidates.len());
        Some(shot)
    }

    /// Record the outcome of a shot at `coord`.
    ///
    /// Reports for cells that were already visited are ignored.
    pub fn report_result(&mut self, coord: Coord, was_hit: bool, ship_sunk: bool) {
        if !self.visited.insert(coord) {
            warn!("ignoring repeated result for {}", coord);
            return;
        }
        let was_hunting = self.state.is_hunting();
        self.state = mem::take(&mut self.state).advance(coord, was_hit, ship_sunk);
        if was_hunting != self.state.is_hunting() {
            debug!(
                "{} at {}: {}",
                if ship_sunk { "sunk" } else if was_hit { "hit" } else { "miss" },
                coord,
                if self.state.is_hunting() { "hunting" } else { "searching" }
            );
        }
    }

    /// Record a board's verdict, also retiring the ship type on a sink.
    pub fn report_guess(&mut self, coord: Coord, result: GuessResult) {
        if self.visited.contains(coord) {
            warn!("ignoring repeated result for {}", coord);
            return;
        }
        if let GuessResult::Sink(name) = result {
            if self.fleet.record_sunk(name).is_err() {
                warn!("sunk ship {} is not in the fleet table", name);
            }
        }
        self.report_result(coord, result.is_hit(), result.is_sunk());
    }

    /// Forget every shot and restore the fleet the engine was built with.
    pub fn reset(&mut self) {
        self.visited.clear_all();
        self.state = HuntState::Search;
        self.fleet = self.initial_fleet.clone();
    }

    /// Density for the current visited set and fleet.
    pub fn probability_field<O: GridOracle + ?Sized>(&self, oracle: &O) -> ProbabilityGrid {
        calc_density(oracle, &self.visited, &self.fleet)
    }

    pub fn state(&self) -> &HuntState {
        &self.state
    }

    pub fn is_hunting(&self) -> bool {
        self.state.is_hunting()
    }

    pub fn fringe(&self) -> &[Coord] {
        self.state.fringe()
    }

    pub fn visited(&self) -> CellSet {
        self.visited
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}
