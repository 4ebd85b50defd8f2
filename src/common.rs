//! Shared engine types: bomb records and error reporting.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coord::Coordinate;
use crate::ship::ShipType;

/// Result of a single bomb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BombResult {
    Miss,
    Hit,
}

/// A fired bomb: target square plus its result, recorded permanently in
/// the firing side's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bomb {
    pub target: Coordinate,
    pub result: BombResult,
}

/// Errors surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate text does not name a square of the grid.
    InvalidCoordinate(String),
    /// Ship type name or code outside the four known types.
    InvalidShipType(String),
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds {
        ship_type: ShipType,
        start: Coordinate,
    },
    /// Per-type ship counts differ from the required 1/2/3/4.
    WrongFleetComposition(String),
    /// Two submitted ships share a square.
    ShipOverlap {
        first: ShipType,
        second: ShipType,
        square: Coordinate,
    },
    /// The firing side already dropped a bomb on this square.
    DuplicateTarget(Coordinate),
    /// No shots are accepted once a game is over.
    GameOver,
    /// Random placement exhausted its retry budget. Engine fault, not an
    /// input error.
    PlacementExhausted { ship_type: ShipType },
}

impl GameError {
    /// `true` for recoverable input errors, `false` for internal engine
    /// faults. Lets callers tell "your input is invalid" apart from "the
    /// engine failed to do its job".
    pub fn is_input(&self) -> bool {
        !matches!(self, GameError::PlacementExhausted { .. })
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate(text) => write!(
                f,
                "invalid coordinate '{text}': expected a row letter A-J \
                 followed by a column number 1-10"
            ),
            GameError::InvalidShipType(text) => write!(
                f,
                "invalid ship type '{text}': options are Battleship, \
                 Cruiser, Destroyer and Submarine"
            ),
            GameError::ShipOutOfBounds { ship_type, start } => {
                write!(f, "{ship_type} at {start} does not fit in the sea grid")
            }
            GameError::WrongFleetComposition(detail) => {
                write!(f, "wrong fleet composition: {detail}")
            }
            GameError::ShipOverlap {
                first,
                second,
                square,
            } => write!(f, "{first} overlapping {second} at {square}"),
            GameError::DuplicateTarget(square) => {
                write!(f, "that bomb has already been dropped at {square}")
            }
            GameError::GameOver => write!(f, "game already over"),
            GameError::PlacementExhausted { ship_type } => write!(
                f,
                "engine fault: unable to place {ship_type} after \
                 {MAX_PLACEMENT_ATTEMPTS} attempts"
            ),
        }
    }
}

impl std::error::Error for GameError {}
