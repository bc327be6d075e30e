pub const MAX_GRID_WIDTH: i32 = 20;
pub const MAX_GRID_HEIGHT: i32 = 20;

/// Number of cosmetic shade variants for floor and wall cells
pub const FLOOR_SHADES: u8 = 5;
pub const WALL_SHADES: u8 = 5;

/// A closing door may push its occupant out of the doorway at most this many nested times
pub const MAX_EVICTION_DEPTH: u8 = 1;

pub const LOG_FILE: &str = "exports/doublevision.log";
pub const EXPORT_FILE: &str = "exports/levels.json";
