//! Fleet assembly: validation of player-submitted placements and random
//! generation for the automated side.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::config::{FLEET_COMPOSITION, FLEET_SIZE, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship, ShipType};

/// A single requested ship placement, as submitted at game creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub ship_type: ShipType,
    pub start: Coordinate,
    pub orientation: Orientation,
}

/// A complete, validated 10-ship fleet. Ships never move once placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Validate a player-submitted set of placements: composition first,
    /// then per-ship structure, then pairwise overlap. Ships on this path
    /// may legally touch side by side; the adjacency buffer only applies
    /// to generated fleets.
    pub fn from_placements(placements: &[Placement]) -> Result<Self, GameError> {
        check_composition(placements)?;
        let mut ships = Vec::with_capacity(FLEET_SIZE);
        for placement in placements {
            ships.push(Ship::new(
                placement.ship_type,
                placement.start,
                placement.orientation,
            )?);
        }
        check_overlap(&ships)?;
        Ok(Fleet { ships })
    }

    /// Generate a random fleet for the automated side: non-overlapping
    /// and with no two ships orthogonally adjacent (diagonal contact is
    /// allowed). Sampling is bounded; exhausting the retry budget is an
    /// engine fault.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut ships: Vec<Ship> = Vec::with_capacity(FLEET_SIZE);
        for (ship_type, count) in FLEET_COMPOSITION {
            for _ in 0..count {
                let ship = place_randomly(rng, ship_type, &ships)?;
                ships.push(ship);
            }
        }
        Ok(Fleet { ships })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }
}

fn check_composition(placements: &[Placement]) -> Result<(), GameError> {
    for (ship_type, required) in FLEET_COMPOSITION {
        let count = placements
            .iter()
            .filter(|p| p.ship_type == ship_type)
            .count();
        if count != required {
            let detail = if count > required {
                format!("too many {ship_type}s ({count}, {required} allowed)")
            } else {
                format!("too few {ship_type}s ({count} of {required} required)")
            };
            return Err(GameError::WrongFleetComposition(detail));
        }
    }
    Ok(())
}

fn check_overlap(ships: &[Ship]) -> Result<(), GameError> {
    for (i, first) in ships.iter().enumerate() {
        for second in &ships[i + 1..] {
            for square in first.squares() {
                if second.contains(square) {
                    return Err(GameError::ShipOverlap {
                        first: first.ship_type(),
                        second: second.ship_type(),
                        square,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Sample placements for one ship until a conflict-free one comes up.
/// Start bounds shrink by `length - 1` along the orientation, so every
/// sampled ship fits the grid without an out-of-bounds retry.
fn place_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    ship_type: ShipType,
    placed: &[Ship],
) -> Result<Ship, GameError> {
    let span = ship_type.length() - 1;
    for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let (row_limit, col_limit) = match orientation {
            Orientation::Vertical => (GRID_SIZE - span, GRID_SIZE),
            Orientation::Horizontal => (GRID_SIZE, GRID_SIZE - span),
        };
        let start = Coordinate::new(
            rng.random_range(1..=row_limit),
            rng.random_range(1..=col_limit),
        )?;
        let ship = Ship::new(ship_type, start, orientation)?;
        if placed.iter().any(|other| conflicts(&ship, other)) {
            continue;
        }
        if attempt > 0 {
            debug!("placed {ship_type} after {attempt} rejected samples");
        }
        return Ok(ship);
    }
    Err(GameError::PlacementExhausted { ship_type })
}

/// Overlap or orthogonal adjacency between two ships' squares. Diagonal
/// contact does not count.
fn conflicts(candidate: &Ship, placed: &Ship) -> bool {
    candidate.squares().any(|square| {
        placed.squares().any(|other| {
            let same_row = square.row() == other.row();
            let same_col = square.col() == other.col();
            (same_row && same_col)
                || (same_col && square.row().abs_diff(other.row()) == 1)
                || (same_row && square.col().abs_diff(other.col()) == 1)
        })
    })
}
