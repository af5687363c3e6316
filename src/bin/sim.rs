use anyhow::anyhow;
use broadside::{init_logging, Board, Fleet, Skirmish, TargetingEngine};
use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Play the targeting engine against random boards", long_about = None)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Give up on a game after this many shots.
    #[arg(long, default_value_t = 100)]
    max_turns: usize,
}

#[derive(Serialize)]
struct Summary {
    games: usize,
    seed: u64,
    mean_shots: f64,
    min_shots: usize,
    max_shots: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    if cli.games == 0 {
        return Err(anyhow!("--games must be at least 1"));
    }

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut shots = Vec::with_capacity(cli.games);

    for game in 0..cli.games {
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).map_err(|e| anyhow!(e))?;
        let engine = TargetingEngine::seeded(Fleet::standard(), rng.random());
        let outcome = Skirmish::new(board, engine)
            .play_out(cli.max_turns)
            .map_err(|e| anyhow!("game {}: {}", game, e))?;
        log::debug!("game {} finished in {} shots", game, outcome.shots);
        shots.push(outcome.shots);
    }

    let summary = Summary {
        games: cli.games,
        seed,
        mean_shots: shots.iter().sum::<usize>() as f64 / shots.len() as f64,
        min_shots: shots.iter().copied().min().unwrap_or(0),
        max_shots: shots.iter().copied().max().unwrap_or(0),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
