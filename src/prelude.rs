//! Commonly used types and utilities for ease of import.

pub use crate::{
    calc_density, Board, Coord, Fleet, GridOracle, GuessLedger, GuessResult, HuntState,
    Skirmish, TargetingEngine,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
