//! Ship types, orientation and footprint geometry.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::coord::Coordinate;

/// The four vessel classes. Wire codes from the original API double as
/// lengths: Battleship=4, Cruiser=3, Destroyer=2, Submarine=1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
}

impl ShipType {
    /// Number of squares the ship occupies.
    pub fn length(self) -> u8 {
        match self {
            ShipType::Battleship => 4,
            ShipType::Cruiser => 3,
            ShipType::Destroyer => 2,
            ShipType::Submarine => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShipType::Battleship => "Battleship",
            ShipType::Cruiser => "Cruiser",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
        }
    }

    /// Numeric code used at API boundaries; equal to the length.
    pub fn code(self) -> u8 {
        self.length()
    }
}

impl TryFrom<u8> for ShipType {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            4 => Ok(ShipType::Battleship),
            3 => Ok(ShipType::Cruiser),
            2 => Ok(ShipType::Destroyer),
            1 => Ok(ShipType::Submarine),
            other => Err(GameError::InvalidShipType(other.to_string())),
        }
    }
}

impl FromStr for ShipType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "battleship" => Ok(ShipType::Battleship),
            "cruiser" => Ok(ShipType::Cruiser),
            "destroyer" => Ok(ShipType::Destroyer),
            "submarine" => Ok(ShipType::Submarine),
            _ => Err(GameError::InvalidShipType(s.to_string())),
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction a ship's footprint extends from its start square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Footprint extends by increasing row letter.
    Vertical,
    /// Footprint extends by increasing column number.
    Horizontal,
}

impl Orientation {
    /// Per-step (row, column) delta.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }

    /// Numeric code used at API boundaries: 1=Vertical, 2=Horizontal.
    pub fn from_code(code: u8) -> Option<Orientation> {
        match code {
            1 => Some(Orientation::Vertical),
            2 => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

/// A vessel identified by its start square, type and orientation. The
/// occupied footprint is derived on demand, never stored; sinking is
/// tracked by the owning side, not by the ship itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    start: Coordinate,
    orientation: Orientation,
}

impl Ship {
    /// Validate and build a ship. Fails with `ShipOutOfBounds` when the
    /// end square, `length - 1` steps from the start, leaves the grid.
    pub fn new(
        ship_type: ShipType,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        let span = (ship_type.length() - 1) as i8;
        let (d_row, d_col) = orientation.delta();
        if start.offset(d_row * span, d_col * span).is_none() {
            return Err(GameError::ShipOutOfBounds { ship_type, start });
        }
        Ok(Ship {
            ship_type,
            start,
            orientation,
        })
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Ordered footprint from start to end inclusive, recomputed on each
    /// call. Construction guarantees every step stays on the grid.
    pub fn squares(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (d_row, d_col) = self.orientation.delta();
        (0..self.ship_type.length() as i8)
            .filter_map(move |step| self.start.offset(d_row * step, d_col * step))
    }

    pub fn contains(&self, square: Coordinate) -> bool {
        self.squares().any(|s| s == square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_matches_length() {
        let start = "B2".parse().unwrap();
        let ship = Ship::new(ShipType::Cruiser, start, Orientation::Horizontal).unwrap();
        let squares: Vec<String> = ship.squares().map(|s| s.to_string()).collect();
        assert_eq!(squares, ["B2", "B3", "B4"]);
    }
}
