mod builtin;
mod catalog;
mod json_export;

use serde::{Deserialize, Serialize};

use crate::core::Vec2;

pub use builtin::builtin_levels;
pub use catalog::{Level, LevelCatalog};
pub use json_export::{definitions_from_json, definitions_to_json};

/// A level as authored: an ASCII layout plus the plate/door bindings that the layout
/// alone cannot express.
///
/// Layout legend: `#` wall, ` ` floor, `B`/`G` blue and green avatars, `b`/`g` their goals,
/// `$` box, `x` box switch, `1` blue switch, `2` green switch, `D` door.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub status: String,
    pub layout: Vec<String>,
    pub plates: Vec<PlateSpec>,
    #[serde(default)]
    pub glyphs: Vec<GlyphSpec>,
}

/// One plate and the door it holds open. Exactly one of the door lengths is nonzero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateSpec {
    pub x: i32,
    pub y: i32,
    pub door_x: i32,
    pub door_y: i32,
    pub door_length_x: i32,
    pub door_length_y: i32,
}

impl PlateSpec {
    pub fn horizontal(plate: (i32, i32), door: (i32, i32), length: i32) -> PlateSpec {
        PlateSpec {
            x: plate.0,
            y: plate.1,
            door_x: door.0,
            door_y: door.1,
            door_length_x: length,
            door_length_y: 0,
        }
    }

    pub fn vertical(plate: (i32, i32), door: (i32, i32), length: i32) -> PlateSpec {
        PlateSpec {
            x: plate.0,
            y: plate.1,
            door_x: door.0,
            door_y: door.1,
            door_length_x: 0,
            door_length_y: length,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn door_origin(&self) -> Vec2 {
        Vec2::new(self.door_x, self.door_y)
    }
}

/// A decorative overlay glyph drawn on top of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphSpec {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

impl GlyphSpec {
    pub fn new(at: (i32, i32), glyph: char) -> GlyphSpec {
        GlyphSpec { x: at.0, y: at.1, glyph }
    }
}

/// Splits a raw-string map into rows, dropping blank lines
pub fn layout(s: &str) -> Vec<String> {
    s.lines()
        .map(|line| line.trim_matches(|c| c == '\n' || c == '\r'))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

impl LevelDefinition {
    /// Parses a bare layout with no plates, handy for small scenarios
    pub fn from_layout(name: &str, map: &str) -> LevelDefinition {
        LevelDefinition {
            name: name.to_string(),
            status: name.to_string(),
            layout: layout(map),
            plates: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    pub fn with_plates(mut self, plates: Vec<PlateSpec>) -> LevelDefinition {
        self.plates = plates;
        self
    }

    pub fn width(&self) -> usize {
        self.layout.iter().map(|row| row.chars().count()).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.layout.len()
    }
}
