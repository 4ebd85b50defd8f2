//! Opponent targeting: a four-state hunt-and-target heuristic. The state
//! is derived fresh on every call from the firing side's own bomb history
//! and the defender's sunk ships; nothing here is stored between shots.

use log::debug;
use rand::Rng;

use crate::common::{Bomb, BombResult};
use crate::coord::Coordinate;

/// Phase of the pursuit, derived from the outstanding hits and the result
/// of the most recent shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingState {
    /// No ship under pursuit: fire at random.
    Search,
    /// One outstanding hit: probe its orthogonal neighbors.
    TargetSingle,
    /// Two or more outstanding hits, last shot missed: probe along the
    /// inferred orientation from the other end.
    TargetLine,
    /// Two or more outstanding hits, last shot hit: keep going in the
    /// same direction.
    TargetDirectional,
}

/// Classify the pursuit phase for the given history.
pub fn targeting_state(bombs: &[Bomb], sunk_squares: &[Coordinate]) -> TargetingState {
    match outstanding_hits(bombs, sunk_squares).len() {
        0 => TargetingState::Search,
        1 => TargetingState::TargetSingle,
        _ if last_was_hit(bombs) => TargetingState::TargetDirectional,
        _ => TargetingState::TargetLine,
    }
}

/// Pick the next square to bomb. `bombs` is the firing side's own history
/// and `sunk_squares` the squares of the defender's already-sunk ships.
/// When a pursuit state has no open candidate (a cornered ship), the
/// heuristic falls back to searching instead of skipping the shot.
/// Returns `None` only when every square has been fired at.
pub fn choose_target<R: Rng + ?Sized>(
    bombs: &[Bomb],
    sunk_squares: &[Coordinate],
    rng: &mut R,
) -> Option<Coordinate> {
    let outstanding = outstanding_hits(bombs, sunk_squares);
    let pursuit = match outstanding.as_slice() {
        [] => None,
        [hit] => first_open(&hit.neighbors(), bombs),
        [.., second_latest, latest] => {
            if last_was_hit(bombs) {
                directional_shot(*latest, *second_latest, bombs)
            } else {
                line_shot(*latest, *second_latest, bombs)
            }
        }
    };
    let target = pursuit.or_else(|| search_shot(bombs, rng));
    if let Some(square) = target {
        debug!(
            "{:?}: firing at {square}",
            targeting_state(bombs, sunk_squares)
        );
    }
    target
}

/// Hits in history order whose square is not on any sunk defender ship.
fn outstanding_hits(bombs: &[Bomb], sunk_squares: &[Coordinate]) -> Vec<Coordinate> {
    bombs
        .iter()
        .filter(|b| b.result == BombResult::Hit && !sunk_squares.contains(&b.target))
        .map(|b| b.target)
        .collect()
}

fn last_was_hit(bombs: &[Bomb]) -> bool {
    matches!(bombs.last(), Some(b) if b.result == BombResult::Hit)
}

fn already_fired(bombs: &[Bomb], square: Coordinate) -> bool {
    bombs.iter().any(|b| b.target == square)
}

/// First candidate that is on the grid and not yet fired at.
fn first_open(candidates: &[Option<Coordinate>], bombs: &[Bomb]) -> Option<Coordinate> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|&square| !already_fired(bombs, square))
}

/// The two latest hits fix the ship's orientation; the last probe missed,
/// so work outward from the earlier of the two hits along that line.
fn line_shot(latest: Coordinate, second_latest: Coordinate, bombs: &[Bomb]) -> Option<Coordinate> {
    let [top, bottom, left, right] = second_latest.neighbors();
    let pair = if latest.row() == second_latest.row() {
        [left, right]
    } else {
        [top, bottom]
    };
    first_open(&pair, bombs)
}

/// The last probe hit: continue past the latest hit, away from the
/// second-latest one. A single candidate, no sideways fallback.
fn directional_shot(
    latest: Coordinate,
    second_latest: Coordinate,
    bombs: &[Bomb],
) -> Option<Coordinate> {
    let [top, bottom, left, right] = latest.neighbors();
    let continuation = if latest.row() == second_latest.row() {
        if left == Some(second_latest) {
            right
        } else {
            left
        }
    } else if top == Some(second_latest) {
        bottom
    } else {
        top
    };
    first_open(&[continuation], bombs)
}

/// Uniform draw over the squares not yet fired at.
fn search_shot<R: Rng + ?Sized>(bombs: &[Bomb], rng: &mut R) -> Option<Coordinate> {
    let open: Vec<Coordinate> = Coordinate::all()
        .filter(|&square| !already_fired(bombs, square))
        .collect();
    if open.is_empty() {
        None
    } else {
        Some(open[rng.random_range(0..open.len())])
    }
}
