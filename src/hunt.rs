//! Search/Hunt state machine driven by shot results.

use alloc::vec;
use alloc::vec::Vec;

use crate::coord::Coord;

/// Confirmed hits on the ship currently being hunted. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fringe {
    hits: Vec<Coord>,
}

impl Fringe {
    /// Start a fringe from the first hit on a ship.
    pub fn new(first: Coord) -> Self {
        Self { hits: vec![first] }
    }

    pub fn push(&mut self, coord: Coord) {
        self.hits.push(coord);
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.hits
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord> {
        self.hits.iter()
    }
}

/// Whether the engine is sweeping the grid or finishing off a located ship.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HuntState {
    #[default]
    Search,
    Hunt(Fringe),
}

impl HuntState {
    /// Next state given the result of a shot at `coord`.
    pub fn advance(self, coord: Coord, was_hit: bool, ship_sunk: bool) -> HuntState {
        match (self, was_hit) {
            (_, true) if ship_sunk => HuntState::Search,
            (HuntState::Search, true) => HuntState::Hunt(Fringe::new(coord)),
            (HuntState::Hunt(mut fringe), true) => {
                fringe.push(coord);
                HuntState::Hunt(fringe)
            }
            // Other ends of a multi-hit line are still worth trying.
            (HuntState::Hunt(fringe), false) if fringe.len() > 1 => HuntState::Hunt(fringe),
            (_, false) => HuntState::Search,
        }
    }

    pub fn is_hunting(&self) -> bool {
        matches!(self, HuntState::Hunt(_))
    }

    /// Fringe coordinates, empty while searching.
    pub fn fringe(&self) -> &[Coord] {
        match self {
            HuntState::Search => &[],
            HuntState::Hunt(fringe) => fringe.as_slice(),
        }
    }
}
