use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, GuessResult},
    coord::Coord,
    engine::TargetingEngine,
};

/// One resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotRecord {
    pub coord: Coord,
    pub result: GuessResult,
}

/// Totals for a finished game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
}

/// Drives a targeting engine against a board until the fleet is gone.
pub struct Skirmish<R> {
    board: Board,
    engine: TargetingEngine<R>,
    outcome: Outcome,
}

impl<R: Rng> Skirmish<R> {
    pub fn new(board: Board, engine: TargetingEngine<R>) -> Self {
        Self { board, engine, outcome: Outcome::default() }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn engine(&self) -> &TargetingEngine<R> {
        &self.engine
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.board.all_sunk()
    }

    /// Ask the engine for a shot, resolve it on the board and feed it back.
    pub fn step(&mut self) -> Result<ShotRecord, BoardError> {
        let coord = self
            .engine
            .next_shot(&self.board)
            .ok_or(BoardError::BoardExhausted)?;
        let result = self.board.guess(coord.row(), coord.col())?;
        self.engine.report_guess(coord, result);

        self.outcome.shots += 1;
        if result.is_hit() {
            self.outcome.hits += 1;
        }
        if let GuessResult::Sink(name) = result {
            self.outcome.sunk += 1;
            debug!("{} sunk at {} after {} shots", name, coord, self.outcome.shots);
        }
        Ok(ShotRecord { coord, result })
    }

    /// Play until every ship is sunk, giving up after `max_turns` shots.
    pub fn play_out(&mut self, max_turns: usize) -> Result<Outcome, BoardError> {
        while !self.is_over() {
            if self.outcome.shots >= max_turns {
                return Err(BoardError::TurnLimit(max_turns));
            }
            self.step()?;
        }
        Ok(self.outcome)
    }
}
