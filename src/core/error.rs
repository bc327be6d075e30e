use thiserror::Error;

use crate::core::{Occupant, Vec2};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cell {pos} is outside the {width}x{height} grid")]
pub struct BoundsError {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
}

/// Authoring defects in level data. These are fatal when the catalog is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level catalog is empty")]
    EmptyCatalog,
    #[error("level '{level}' has no rows")]
    EmptyLevel { level: String },
    #[error("level '{level}' is {width}x{height}, larger than the {max_width}x{max_height} grid")]
    GridTooLarge {
        level: String,
        width: i32,
        height: i32,
        max_width: i32,
        max_height: i32,
    },
    #[error("level '{level}' has unknown tile '{glyph}' at {pos}")]
    UnknownTile { level: String, glyph: char, pos: Vec2 },
    #[error("level '{level}' has no {occupant:?}")]
    MissingTile { level: String, occupant: Occupant },
    #[error("level '{level}' has a second {occupant:?} at {second} (first at {first})")]
    DuplicateTile {
        level: String,
        occupant: Occupant,
        first: Vec2,
        second: Vec2,
    },
    #[error("level '{level}' declares a plate at {pos} but the tile there is {found:?}")]
    PlateNotOnSwitch { level: String, pos: Vec2, found: Option<Occupant> },
    #[error("level '{level}' declares two plates at {pos}")]
    DuplicatePlate { level: String, pos: Vec2 },
    #[error("level '{level}' plate at {pos} needs exactly one nonzero door length, got {length_x}x{length_y}")]
    BadDoorRun {
        level: String,
        pos: Vec2,
        length_x: i32,
        length_y: i32,
    },
    #[error("level '{level}' plate at {plate} expects a door at {door} but found {found:?}")]
    DoorCellNotDoor {
        level: String,
        plate: Vec2,
        door: Vec2,
        found: Option<Occupant>,
    },
    #[error("level '{level}' places a glyph outside the grid at {pos}")]
    GlyphOutOfBounds { level: String, pos: Vec2 },
}
