//! Grid coordinates: a row letter `A`–`J` followed by a column number
//! `1`–`10`, e.g. `A1` or `J10`. Invalid text is rejected, never clamped.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::GameError;
use crate::config::GRID_SIZE;

/// A single square of the 10x10 sea grid. Both components are always in
/// bounds; the only way to build one is through a validating constructor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate from 1-based row and column indices.
    pub fn new(row: u8, col: u8) -> Result<Self, GameError> {
        if (1..=GRID_SIZE).contains(&row) && (1..=GRID_SIZE).contains(&col) {
            Ok(Coordinate { row, col })
        } else {
            Err(GameError::InvalidCoordinate(format!(
                "row {row}, column {col}"
            )))
        }
    }

    /// 1-based row index (`A` = 1).
    pub fn row(self) -> u8 {
        self.row
    }

    /// 1-based column index.
    pub fn col(self) -> u8 {
        self.col
    }

    pub fn row_letter(self) -> char {
        (b'A' + self.row - 1) as char
    }

    /// The square `d_row`/`d_col` steps away, or `None` when it leaves the
    /// grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Coordinate> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (1..=GRID_SIZE as i8).contains(&row) && (1..=GRID_SIZE as i8).contains(&col) {
            Some(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Orthogonal neighbors in fixed top, bottom, left, right order.
    /// Off-grid entries are `None`; diagonals are not neighbors.
    pub fn neighbors(self) -> [Option<Coordinate>; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }

    /// Every square of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (1..=GRID_SIZE).flat_map(|row| (1..=GRID_SIZE).map(move |col| Coordinate { row, col }))
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());
        let (letter, digits) = match s.as_bytes() {
            [letter, digits @ ..] if (b'A'..b'A' + GRID_SIZE).contains(letter) => (*letter, digits),
            _ => return Err(invalid()),
        };
        // No separator, no leading zero, nothing after the column number.
        if digits.is_empty()
            || digits.len() > 2
            || digits[0] == b'0'
            || !digits.iter().all(u8::is_ascii_digit)
        {
            return Err(invalid());
        }
        let col = digits.iter().fold(0u8, |acc, d| acc * 10 + (d - b'0'));
        if !(1..=GRID_SIZE).contains(&col) {
            return Err(invalid());
        }
        Ok(Coordinate {
            row: letter - b'A' + 1,
            col,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.col)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl TryFrom<String> for Coordinate {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coordinate> for String {
    fn from(c: Coordinate) -> Self {
        c.to_string()
    }
}
