//! Turn-based naval combat engine: fleet placement, bomb resolution with
//! sunk/win detection, and a hunt-and-target automated opponent, all on a
//! 10x10 letter/number grid.

mod ai;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
mod logging;
mod ship;

pub use ai::{choose_target, targeting_state, TargetingState};
pub use common::{Bomb, BombResult, GameError};
pub use config::{
    FLEET_COMPOSITION, FLEET_SIZE, GRID_SIZE, MAX_PLACEMENT_ATTEMPTS, TOTAL_SHIP_SQUARES,
};
pub use coord::Coordinate;
pub use fleet::{Fleet, Placement};
pub use game::{Game, GameSnapshot, ShipSnapshot, ShotOutcome, Side, SideSnapshot, TurnOutcome};
pub use logging::init_logging;
pub use ship::{Orientation, Ship, ShipType};
