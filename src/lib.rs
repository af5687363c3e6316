#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod engine;
mod game;
mod hunt;
#[cfg(feature = "std")]
mod logging;
mod oracle;
mod probability;
pub mod prelude;
pub mod selector;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, CellSet};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use engine::TargetingEngine;
pub use game::*;
pub use hunt::{Fringe, HuntState};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use oracle::{GridOracle, GuessLedger};
pub use probability::{calc_density, ProbabilityGrid};
pub use ship::*;
