use broadside::{Coord, Fringe, HuntState};
use proptest::prelude::*;

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

fn hunting(hits: &[Coord]) -> HuntState {
    let mut fringe = Fringe::new(hits[0]);
    for &h in &hits[1..] {
        fringe.push(h);
    }
    HuntState::Hunt(fringe)
}

#[test]
fn test_hit_from_search_starts_hunt() {
    let state = HuntState::default().advance(c(2, 3), true, false);
    assert!(state.is_hunting());
    assert_eq!(state.fringe(), &[c(2, 3)]);
}

#[test]
fn test_further_hit_extends_fringe() {
    let state = hunting(&[c(2, 3)]).advance(c(2, 4), true, false);
    assert_eq!(state.fringe(), &[c(2, 3), c(2, 4)]);
}

#[test]
fn test_sink_always_returns_to_search() {
    assert_eq!(HuntState::Search.advance(c(0, 0), true, true), HuntState::Search);
    assert_eq!(
        hunting(&[c(2, 3), c(2, 4)]).advance(c(2, 5), true, true),
        HuntState::Search
    );
}

#[test]
fn test_miss_with_single_hit_gives_up() {
    assert_eq!(hunting(&[c(2, 3)]).advance(c(2, 4), false, false), HuntState::Search);
}

#[test]
fn test_miss_with_several_hits_keeps_fringe() {
    let before = hunting(&[c(2, 3), c(2, 4)]);
    let after = before.clone().advance(c(2, 5), false, false);
    assert_eq!(after, before);
}

#[test]
fn test_miss_while_searching_stays_searching() {
    assert_eq!(HuntState::Search.advance(c(7, 7), false, false), HuntState::Search);
}

proptest! {
    #[test]
    fn transitions_depend_only_on_state_and_result(
        shots in prop::collection::vec((0..10usize, 0..10usize, any::<bool>(), any::<bool>()), 1..40),
    ) {
        let mut state = HuntState::Search;
        for (r, col, hit, sunk) in shots {
            let coord = c(r, col);
            let before = state.fringe().to_vec();
            state = state.advance(coord, hit, sunk);
            match (hit, sunk) {
                (true, true) => prop_assert_eq!(&state, &HuntState::Search),
                (true, false) => {
                    prop_assert!(state.is_hunting());
                    prop_assert_eq!(state.fringe().last(), Some(&coord));
                    prop_assert_eq!(state.fringe().len(), before.len() + 1);
                }
                (false, _) if before.len() > 1 => prop_assert_eq!(state.fringe(), &before[..]),
                (false, _) => prop_assert_eq!(&state, &HuntState::Search),
            }
            // A hunt never carries an empty fringe.
            prop_assert_eq!(state.is_hunting(), !state.fringe().is_empty());
        }
    }
}
