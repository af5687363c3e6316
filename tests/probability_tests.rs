use broadside::{
    calc_density, CellSet, Coord, Fleet, FleetEntry, GridOracle, GuessLedger, GuessResult,
    Orientation, Placement, ShipType, GRID_SIZE,
};
use proptest::prelude::*;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn single(length: usize, remaining: u8) -> Fleet {
    Fleet::new(vec![FleetEntry { ship: ShipType::new("Test", length), remaining }])
}

#[test]
fn test_center_beats_corners_for_single_cruiser() {
    let grid = calc_density(&GuessLedger::new(), &CellSet::new(), &single(3, 1));
    let corners = [c(0, 0), c(0, 9), c(9, 0), c(9, 9)];
    let center = [c(4, 4), c(4, 5), c(5, 4), c(5, 5)];
    for &m in &center {
        for &k in &corners {
            assert!(grid.get(m) > grid.get(k), "{} should outscore {}", m, k);
        }
    }
    // Corner: one horizontal and one vertical run; centre: three of each.
    assert_eq!(grid.get(c(0, 0)), 2);
    assert_eq!(grid.get(c(4, 4)), 6);
    assert_eq!(grid.get(c(0, 1)), 1 + 2);
}

#[test]
fn test_known_miss_removes_covering_placements() {
    let mut ledger = GuessLedger::new();
    ledger.record(c(0, 1), GuessResult::Miss).unwrap();
    let grid = calc_density(&ledger, &ledger.guessed(), &single(3, 1));
    // Only the vertical run from the corner survives.
    assert_eq!(grid.get(c(0, 0)), 1);
    assert_eq!(grid.get(c(0, 1)), 0);
}

#[test]
fn test_unvisited_miss_is_not_trusted() {
    let mut ledger = GuessLedger::new();
    ledger.record(c(0, 1), GuessResult::Miss).unwrap();
    let grid = calc_density(&ledger, &CellSet::new(), &single(3, 1));
    assert_eq!(grid.get(c(0, 0)), 2);
}

#[test]
fn test_hits_do_not_block_placements() {
    let mut ledger = GuessLedger::new();
    ledger.record(c(4, 4), GuessResult::Hit).unwrap();
    let grid = calc_density(&ledger, &ledger.guessed(), &single(3, 1));
    assert_eq!(grid.get(c(4, 4)), 6);
}

#[test]
fn test_sunk_and_oversized_types_contribute_nothing() {
    let visited = CellSet::new();
    assert_eq!(calc_density(&GuessLedger::new(), &visited, &single(3, 0)).total(), 0);
    assert_eq!(calc_density(&GuessLedger::new(), &visited, &single(GRID_SIZE + 1, 1)).total(), 0);
    assert_eq!(calc_density(&GuessLedger::new(), &visited, &single(0, 1)).total(), 0);
}

#[test]
fn test_full_width_ship_scores_every_cell_twice() {
    let grid = calc_density(&GuessLedger::new(), &CellSet::new(), &single(GRID_SIZE, 1));
    assert!(grid.iter().all(|(_, v)| v == 2));
}

#[test]
fn test_types_are_summed() {
    let fleet = Fleet::new(vec![
        FleetEntry { ship: ShipType::new("A", 2), remaining: 1 },
        FleetEntry { ship: ShipType::new("B", 3), remaining: 1 },
    ]);
    let oracle = GuessLedger::new();
    let visited = CellSet::new();
    let both = calc_density(&oracle, &visited, &fleet);
    let a = calc_density(&oracle, &visited, &single(2, 1));
    let b = calc_density(&oracle, &visited, &single(3, 1));
    for coord in Coord::all() {
        assert_eq!(both.get(coord), a.get(coord) + b.get(coord));
    }
}

/// Rejects the rightmost column, as a board with a blocked edge would.
struct NarrowOracle;

impl GridOracle for NarrowOracle {
    fn is_valid_cell(&self, row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE - 1
    }

    fn is_miss(&self, _coord: Coord) -> bool {
        false
    }
}

#[test]
fn test_oracle_validity_is_respected() {
    let grid = calc_density(&NarrowOracle, &CellSet::new(), &single(2, 1));
    for row in 0..GRID_SIZE {
        assert_eq!(grid.get(c(row, GRID_SIZE - 1)), 0);
    }
    assert!(grid.get(c(0, GRID_SIZE - 2)) > 0);
}

/// Count placements covering `target` by walking every anchor that could
/// reach it.
fn covering_placements(target: Coord, length: usize, ledger: &GuessLedger) -> u32 {
    let mut count = 0;
    for orientation in Orientation::BOTH {
        for back in 0..length {
            let (row, col) = match orientation {
                Orientation::Horizontal => (Some(target.row()), target.col().checked_sub(back)),
                Orientation::Vertical => (target.row().checked_sub(back), Some(target.col())),
            };
            let (Some(row), Some(col)) = (row, col) else { continue };
            let p = Placement::new(row, col, orientation, length);
            if p.fits() && p.cells().all(|(r, c)| !ledger.misses.get(r, c).unwrap()) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn density_matches_placement_count(
        misses in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE), 0..30),
        length in 1..=5usize,
    ) {
        let mut ledger = GuessLedger::new();
        for (r, col) in misses {
            let _ = ledger.record(c(r, col), GuessResult::Miss);
        }
        let grid = calc_density(&ledger, &ledger.guessed(), &single(length, 1));
        for coord in Coord::all() {
            prop_assert_eq!(grid.get(coord), covering_placements(coord, length, &ledger));
        }
    }

    #[test]
    fn extra_misses_never_raise_a_score(
        misses in prop::collection::vec((0..GRID_SIZE, 0..GRID_SIZE), 1..20),
    ) {
        let fleet = Fleet::standard();
        let before = calc_density(&GuessLedger::new(), &CellSet::new(), &fleet);
        let mut ledger = GuessLedger::new();
        for (r, col) in misses {
            let _ = ledger.record(c(r, col), GuessResult::Miss);
        }
        let after = calc_density(&ledger, &ledger.guessed(), &fleet);
        for coord in Coord::all() {
            prop_assert!(after.get(coord) <= before.get(coord));
        }
    }
}

#[test]
fn test_huge_placements_do_not_fit() {
    for orientation in Orientation::BOTH {
        assert!(!Placement::new(0, 0, orientation, usize::MAX).fits());
        assert!(!Placement::new(usize::MAX, usize::MAX, orientation, 2).fits());
        assert!(!Placement::new(0, 1, orientation, GRID_SIZE).fits());
        assert!(Placement::new(0, 0, orientation, GRID_SIZE).fits());
    }
}
