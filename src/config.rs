use crate::ship::ShipType;

pub const GRID_SIZE: u8 = 10;

/// Required number of ships per type, largest first. The composition is
/// fixed: 10 ships covering 20 squares per side.
pub const FLEET_COMPOSITION: [(ShipType, usize); 4] = [
    (ShipType::Battleship, 1),
    (ShipType::Cruiser, 2),
    (ShipType::Destroyer, 3),
    (ShipType::Submarine, 4),
];

pub const FLEET_SIZE: usize = 10;
pub const TOTAL_SHIP_SQUARES: usize = 20;

/// Cap on rejection-sampling retries per ship during random fleet
/// generation. Exceeding it is reported as an engine fault, never as an
/// input error.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
