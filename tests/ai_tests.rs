use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{choose_target, targeting_state, Bomb, BombResult, Coordinate, TargetingState};

fn sq(text: &str) -> Coordinate {
    text.parse().unwrap()
}

fn hit(text: &str) -> Bomb {
    Bomb {
        target: sq(text),
        result: BombResult::Hit,
    }
}

fn miss(text: &str) -> Bomb {
    Bomb {
        target: sq(text),
        result: BombResult::Miss,
    }
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(99)
}

fn fired(bombs: &[Bomb], square: Coordinate) -> bool {
    bombs.iter().any(|b| b.target == square)
}

#[test]
fn test_state_classification() {
    assert_eq!(targeting_state(&[], &[]), TargetingState::Search);
    assert_eq!(targeting_state(&[miss("A1")], &[]), TargetingState::Search);
    assert_eq!(
        targeting_state(&[hit("E5")], &[]),
        TargetingState::TargetSingle
    );
    assert_eq!(
        targeting_state(&[hit("D5"), hit("D6"), miss("D7")], &[]),
        TargetingState::TargetLine
    );
    assert_eq!(
        targeting_state(&[hit("D5"), hit("D6")], &[]),
        TargetingState::TargetDirectional
    );
    // Hits on a sunk ship no longer count as outstanding.
    assert_eq!(
        targeting_state(&[hit("A1")], &[sq("A1")]),
        TargetingState::Search
    );
}

#[test]
fn test_search_avoids_fired_squares() {
    let bombs: Vec<Bomb> = Coordinate::all()
        .take(99)
        .map(|target| Bomb {
            target,
            result: BombResult::Miss,
        })
        .collect();
    let shot = choose_target(&bombs, &[], &mut rng()).unwrap();
    assert_eq!(shot, sq("J10"));
}

#[test]
fn test_search_returns_none_on_a_full_grid() {
    let bombs: Vec<Bomb> = Coordinate::all()
        .map(|target| Bomb {
            target,
            result: BombResult::Miss,
        })
        .collect();
    assert_eq!(choose_target(&bombs, &[], &mut rng()), None);
}

#[test]
fn test_single_hit_probes_neighbors_in_priority_order() {
    assert_eq!(choose_target(&[hit("E5")], &[], &mut rng()), Some(sq("D5")));
    assert_eq!(
        choose_target(&[miss("D5"), hit("E5")], &[], &mut rng()),
        Some(sq("F5"))
    );
    assert_eq!(
        choose_target(&[miss("D5"), miss("F5"), hit("E5")], &[], &mut rng()),
        Some(sq("E4"))
    );
    assert_eq!(
        choose_target(&[miss("D5"), miss("F5"), miss("E4"), hit("E5")], &[], &mut rng()),
        Some(sq("E6"))
    );
}

#[test]
fn test_single_hit_skips_off_grid_neighbors() {
    // A1 has no top or left neighbor.
    assert_eq!(choose_target(&[hit("A1")], &[], &mut rng()), Some(sq("B1")));
}

#[test]
fn test_cornered_single_hit_falls_back_to_search() {
    let bombs = [hit("A1"), miss("B1"), miss("A2")];
    let shot = choose_target(&bombs, &[], &mut rng()).unwrap();
    assert!(!fired(&bombs, shot), "fell back on an already-fired square");
}

#[test]
fn test_line_after_miss_probes_the_other_end() {
    // Horizontal pair D5/D6, probe past D7 missed: work from D5 leftward.
    let bombs = [hit("D5"), hit("D6"), miss("D7")];
    assert_eq!(choose_target(&bombs, &[], &mut rng()), Some(sq("D4")));
}

#[test]
fn test_line_vertical_orientation_inferred() {
    let bombs = [hit("D5"), hit("E5"), miss("F5")];
    assert_eq!(choose_target(&bombs, &[], &mut rng()), Some(sq("C5")));
}

#[test]
fn test_line_skips_fired_end() {
    let bombs = [miss("D4"), hit("D5"), hit("D6"), miss("D7")];
    // Both D4 and D7 are gone; the horizontal pair around D5 only offers
    // D6 (fired) and D4 (fired), so the heuristic falls back to search.
    let shot = choose_target(&bombs, &[], &mut rng()).unwrap();
    assert!(!fired(&bombs, shot));
}

#[test]
fn test_directional_continues_away_from_second_latest() {
    // Outstanding hits D5 then D6, latest shot a hit: next must be D7.
    let bombs = [hit("D5"), hit("D6")];
    assert_eq!(choose_target(&bombs, &[], &mut rng()), Some(sq("D7")));
}

#[test]
fn test_directional_vertical_continuation() {
    let bombs = [hit("D5"), hit("E5")];
    assert_eq!(choose_target(&bombs, &[], &mut rng()), Some(sq("F5")));

    // Pursuit running upward: latest hit above the previous one.
    let bombs = [hit("E5"), hit("D5")];
    assert_eq!(choose_target(&bombs, &[], &mut rng()), Some(sq("C5")));
}

#[test]
fn test_directional_blocked_at_the_edge_falls_back() {
    // Continuation square would be D11.
    let bombs = [hit("D9"), hit("D10")];
    let shot = choose_target(&bombs, &[], &mut rng()).unwrap();
    assert!(!fired(&bombs, shot));
}

#[test]
fn test_sunk_ship_squares_release_the_pursuit() {
    // Both hits belong to a now-sunk destroyer: back to searching.
    let bombs = [hit("D5"), hit("D6")];
    let sunk = [sq("D5"), sq("D6")];
    assert_eq!(targeting_state(&bombs, &sunk), TargetingState::Search);
    let shot = choose_target(&bombs, &sunk, &mut rng()).unwrap();
    assert!(!fired(&bombs, shot));
}
