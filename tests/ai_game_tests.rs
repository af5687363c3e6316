use broadside::{
    Board, BoardError, Fleet, GuessLedger, Skirmish, TargetingEngine, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    board
}

#[test]
fn test_engine_sinks_every_ship() {
    for seed in 0..20 {
        let engine = TargetingEngine::seeded(Fleet::standard(), seed);
        let mut game = Skirmish::new(random_board(seed), engine);
        let outcome = game.play_out(100).unwrap();
        assert_eq!(outcome.sunk, NUM_SHIPS);
        assert_eq!(outcome.hits, TOTAL_SHIP_CELLS);
        assert!(outcome.shots <= 100);
        assert!(game.engine().fleet().all_sunk());
    }
}

#[test]
fn test_engine_beats_random_firing() {
    let games = 30;
    let total: usize = (0..games)
        .map(|seed| {
            let engine = TargetingEngine::seeded(Fleet::standard(), seed + 1000);
            Skirmish::new(random_board(seed), engine).play_out(100).unwrap().shots
        })
        .sum();
    let mean = total / games as usize;
    // Random firing needs about 96 shots on average.
    assert!(mean < 85, "mean shots {}", mean);
}

#[test]
fn test_turn_limit_is_reported() {
    let engine = TargetingEngine::seeded(Fleet::standard(), 1);
    let mut game = Skirmish::new(random_board(1), engine);
    assert_eq!(game.play_out(5).unwrap_err(), BoardError::TurnLimit(5));
    assert_eq!(game.outcome().shots, 5);
}

#[test]
fn test_engine_with_ledger_oracle() {
    let mut board = random_board(42);
    let mut ledger = GuessLedger::new();
    let mut engine = TargetingEngine::seeded(Fleet::standard(), 42);

    let mut turns = 0;
    while !board.all_sunk() {
        turns += 1;
        assert!(turns <= 100, "game took too many turns");
        let shot = engine.next_shot(&ledger).unwrap();
        let res = board.guess(shot.row(), shot.col()).unwrap();
        ledger.record(shot, res).unwrap();
        engine.report_guess(shot, res);
    }
    assert_eq!(ledger.hits, board.hits());
    assert_eq!(ledger.misses, board.misses());
    assert_eq!(engine.visited(), ledger.guessed());
}

#[test]
fn test_reset_allows_a_second_game() {
    let mut engine = TargetingEngine::seeded(Fleet::standard(), 8);
    let mut board = random_board(8);
    while !board.all_sunk() {
        let shot = engine.next_shot(&board).unwrap();
        let res = board.guess(shot.row(), shot.col()).unwrap();
        engine.report_guess(shot, res);
    }
    engine.reset();
    let outcome = Skirmish::new(random_board(9), engine).play_out(100).unwrap();
    assert_eq!(outcome.sunk, NUM_SHIPS);
}
