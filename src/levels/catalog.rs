use std::collections::HashMap;

use log::debug;

use crate::core::bounded_grid::BoundedGrid;
use crate::core::error::LevelError;
use crate::core::plates::{DoorRun, PlateRegistry, PressurePlate};
use crate::core::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH, Occupant, PlateKind, Vec2};
use crate::levels::{LevelDefinition, builtin_levels};

/// A validated level, ready to be drawn onto the board
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub status: String,
    pub tiles: BoundedGrid<Occupant>,
    pub plates: Vec<PressurePlate>,
    pub glyphs: Vec<(Vec2, char)>,
    pub blue_goal: Vec2,
    pub green_goal: Vec2,
    pub blue_start: Vec2,
    pub green_start: Vec2,
}

const SINGLETONS: [Occupant; 4] = [
    Occupant::BlueAvatar,
    Occupant::GreenAvatar,
    Occupant::BlueGoal,
    Occupant::GreenGoal,
];

impl Level {
    pub fn compile(definition: &LevelDefinition) -> Result<Level, LevelError> {
        let name = definition.name.clone();
        let width = definition.width() as i32;
        let height = definition.height() as i32;
        if width == 0 || height == 0 {
            return Err(LevelError::EmptyLevel { level: name });
        }
        if width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            return Err(LevelError::GridTooLarge {
                level: name,
                width,
                height,
                max_width: MAX_GRID_WIDTH,
                max_height: MAX_GRID_HEIGHT,
            });
        }

        let mut tiles = BoundedGrid::new_with_size(Vec2::new(width, height), Occupant::Floor);
        let mut singletons: HashMap<Occupant, Vec2> = HashMap::new();
        for (y, row) in definition.layout.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let pos = Vec2::new(x as i32, y as i32);
                let Some(occupant) = Occupant::from_char(glyph) else {
                    return Err(LevelError::UnknownTile { level: name, glyph, pos });
                };
                if SINGLETONS.contains(&occupant) {
                    if let Some(&first) = singletons.get(&occupant) {
                        return Err(LevelError::DuplicateTile {
                            level: name,
                            occupant,
                            first,
                            second: pos,
                        });
                    }
                    singletons.insert(occupant, pos);
                }
                tiles[&pos] = occupant;
            }
        }

        let find = |occupant: Occupant| {
            singletons
                .get(&occupant)
                .copied()
                .ok_or_else(|| LevelError::MissingTile { level: definition.name.clone(), occupant })
        };
        let blue_start = find(Occupant::BlueAvatar)?;
        let green_start = find(Occupant::GreenAvatar)?;
        let blue_goal = find(Occupant::BlueGoal)?;
        let green_goal = find(Occupant::GreenGoal)?;

        let mut registry = PlateRegistry::new();
        for spec in &definition.plates {
            let pos = spec.position();
            let found = tiles.get(&pos).copied();
            let Some(kind) = found.and_then(PlateKind::from_marker) else {
                return Err(LevelError::PlateNotOnSwitch { level: name, pos, found });
            };
            let Some(door) = DoorRun::from_lengths(spec.door_origin(), spec.door_length_x, spec.door_length_y)
            else {
                return Err(LevelError::BadDoorRun {
                    level: name,
                    pos,
                    length_x: spec.door_length_x,
                    length_y: spec.door_length_y,
                });
            };
            for door_cell in door.cells() {
                let found = tiles.get(&door_cell).copied();
                if found != Some(Occupant::Door) {
                    return Err(LevelError::DoorCellNotDoor {
                        level: name,
                        plate: pos,
                        door: door_cell,
                        found,
                    });
                }
            }
            if registry.register(PressurePlate { at: pos, kind, door }).is_none() {
                return Err(LevelError::DuplicatePlate { level: name, pos });
            }
        }

        let mut glyphs = Vec::with_capacity(definition.glyphs.len());
        for spec in &definition.glyphs {
            let pos = Vec2::new(spec.x, spec.y);
            if !tiles.contains(&pos) {
                return Err(LevelError::GlyphOutOfBounds { level: name, pos });
            }
            glyphs.push((pos, spec.glyph));
        }

        debug!("compiled level '{}' ({}x{}, {} plates)", name, width, height, registry.len());
        Ok(Level {
            name,
            status: definition.status.clone(),
            tiles,
            plates: registry.iter().copied().collect(),
            glyphs,
            blue_goal,
            green_goal,
            blue_start,
            green_start,
        })
    }

    pub fn size(&self) -> Vec2 {
        self.tiles.size().extent
    }
}

/// The ordered set of levels the game cycles through
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    pub fn compile(definitions: &[LevelDefinition]) -> Result<LevelCatalog, LevelError> {
        if definitions.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        let levels = definitions
            .iter()
            .map(Level::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(LevelCatalog { levels })
    }

    pub fn builtin() -> Result<LevelCatalog, LevelError> {
        LevelCatalog::compile(&builtin_levels())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Wraps around, so any index names a level
    pub fn level(&self, index: usize) -> &Level {
        &self.levels[index % self.levels.len()]
    }

    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::levels::PlateSpec;

    const SMALL: &str = r#"
#######
#B 1 G#
#b D g#
#######
"#;

    #[test]
    fn compiles_positions_and_plates() {
        let definition = LevelDefinition::from_layout("small", SMALL)
            .with_plates(vec![PlateSpec::vertical((3, 1), (3, 2), 1)]);
        let level = Level::compile(&definition).unwrap();

        assert_eq!(Vec2::new(7, 4), level.size());
        assert_eq!(Vec2::new(1, 1), level.blue_start);
        assert_eq!(Vec2::new(5, 1), level.green_start);
        assert_eq!(Vec2::new(1, 2), level.blue_goal);
        assert_eq!(Vec2::new(5, 2), level.green_goal);
        assert_eq!(1, level.plates.len());
        assert_eq!(PlateKind::Blue, level.plates[0].kind);
    }

    #[test]
    fn rejects_unknown_glyph() {
        let definition = LevelDefinition::from_layout("bad", "#B?Gbg#");
        let err = Level::compile(&definition).unwrap_err();
        assert_eq!(
            LevelError::UnknownTile { level: "bad".into(), glyph: '?', pos: Vec2::new(2, 0) },
            err
        );
    }

    #[test]
    fn rejects_missing_and_duplicate_avatars() {
        let missing = LevelDefinition::from_layout("missing", "#B bg#");
        assert!(matches!(
            Level::compile(&missing),
            Err(LevelError::MissingTile { occupant: Occupant::GreenAvatar, .. })
        ));

        let duplicate = LevelDefinition::from_layout("duplicate", "#BGbgB#");
        assert!(matches!(
            Level::compile(&duplicate),
            Err(LevelError::DuplicateTile { occupant: Occupant::BlueAvatar, .. })
        ));
    }

    #[test]
    fn rejects_plate_that_is_not_on_a_switch() {
        let definition = LevelDefinition::from_layout("small", SMALL)
            .with_plates(vec![PlateSpec::vertical((2, 1), (3, 2), 1)]);
        assert!(matches!(
            Level::compile(&definition),
            Err(LevelError::PlateNotOnSwitch { found: Some(Occupant::Floor), .. })
        ));
    }

    #[test]
    fn rejects_two_plates_on_one_cell() {
        let definition = LevelDefinition::from_layout("small", SMALL).with_plates(vec![
            PlateSpec::vertical((3, 1), (3, 2), 1),
            PlateSpec::horizontal((3, 1), (3, 2), 1),
        ]);
        assert!(matches!(
            Level::compile(&definition),
            Err(LevelError::DuplicatePlate { .. })
        ));
    }

    #[test]
    fn rejects_door_runs_that_miss_door_tiles_or_have_two_lengths() {
        let too_long = LevelDefinition::from_layout("small", SMALL)
            .with_plates(vec![PlateSpec::vertical((3, 1), (3, 2), 2)]);
        assert!(matches!(
            Level::compile(&too_long),
            Err(LevelError::DoorCellNotDoor { found: Some(Occupant::Wall), .. })
        ));

        let mut diagonal = PlateSpec::vertical((3, 1), (3, 2), 1);
        diagonal.door_length_x = 1;
        let definition = LevelDefinition::from_layout("small", SMALL).with_plates(vec![diagonal]);
        assert!(matches!(
            Level::compile(&definition),
            Err(LevelError::BadDoorRun { length_x: 1, length_y: 1, .. })
        ));
    }

    #[test]
    fn rejects_oversized_and_empty_levels() {
        let wide = "#".repeat(21);
        let definition = LevelDefinition::from_layout("wide", &format!("BGbg\n{}", wide));
        assert!(matches!(Level::compile(&definition), Err(LevelError::GridTooLarge { .. })));

        let empty = LevelDefinition::from_layout("empty", "\n\n");
        assert!(matches!(Level::compile(&empty), Err(LevelError::EmptyLevel { .. })));
        assert!(matches!(LevelCatalog::compile(&[]), Err(LevelError::EmptyCatalog)));
    }

    #[test]
    fn catalog_wraps_after_last_level() {
        let catalog = LevelCatalog::builtin().unwrap();
        assert_eq!(8, catalog.len());
        assert_eq!(1, catalog.next_index(0));
        assert_eq!(0, catalog.next_index(7));
        assert_eq!("Tutorial", catalog.level(8).name);
    }
}
