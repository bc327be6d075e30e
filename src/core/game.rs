use std::collections::HashMap;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::board::Board;
use crate::core::events::{Cue, GameEvent};
use crate::core::plates::PlateRegistry;
use crate::core::tutorial::TutorialProgress;
use crate::core::{AvatarColor, FLOOR_SHADES, Occupant, Vec2, WALL_SHADES};
use crate::levels::LevelCatalog;

/// All mutable state for one running game. Owned by the caller and handed to the
/// movement engine, goal evaluator and level lifecycle as `&mut self`.
pub struct Game {
    pub(crate) catalog: LevelCatalog,
    pub(crate) board: Board,
    pub(crate) plates: PlateRegistry,
    pub(crate) overlays: HashMap<Vec2, char>,
    pub(crate) blue_goal: Vec2,
    pub(crate) green_goal: Vec2,
    pub(crate) blue_avatar: Vec2,
    pub(crate) green_avatar: Vec2,
    pub(crate) controlling: AvatarColor,
    pub(crate) blue_on_goal: bool,
    pub(crate) green_on_goal: bool,
    pub(crate) current_level: usize,
    pub(crate) tutorial: TutorialProgress,
    pub(crate) status: String,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) eviction_depth: u8,
    rng: StdRng,
}

impl Game {
    pub fn new(catalog: LevelCatalog) -> Game {
        Game::with_rng(catalog, StdRng::from_os_rng())
    }

    /// Same shades on every run, for tests and benchmarks
    pub fn with_seed(catalog: LevelCatalog, seed: u64) -> Game {
        Game::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: LevelCatalog, rng: StdRng) -> Game {
        let size = catalog.level(0).size();
        let mut game = Game {
            catalog,
            board: Board::new(size),
            plates: PlateRegistry::new(),
            overlays: HashMap::new(),
            blue_goal: Vec2::default(),
            green_goal: Vec2::default(),
            blue_avatar: Vec2::default(),
            green_avatar: Vec2::default(),
            controlling: AvatarColor::Blue,
            blue_on_goal: false,
            green_on_goal: false,
            current_level: 0,
            tutorial: TutorialProgress::default(),
            status: String::new(),
            events: Vec::new(),
            eviction_depth: 0,
            rng,
        };
        game.load_level(0);
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn plates(&self) -> &PlateRegistry {
        &self.plates
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn avatar(&self, color: AvatarColor) -> Vec2 {
        match color {
            AvatarColor::Blue => self.blue_avatar,
            AvatarColor::Green => self.green_avatar,
        }
    }

    pub fn goal(&self, color: AvatarColor) -> Vec2 {
        match color {
            AvatarColor::Blue => self.blue_goal,
            AvatarColor::Green => self.green_goal,
        }
    }

    pub fn is_on_goal(&self, color: AvatarColor) -> bool {
        match color {
            AvatarColor::Blue => self.blue_on_goal,
            AvatarColor::Green => self.green_on_goal,
        }
    }

    pub fn controlling(&self) -> AvatarColor {
        self.controlling
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn level_name(&self) -> &str {
        &self.catalog.level(self.current_level).name
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn overlay(&self, pos: &Vec2) -> Option<char> {
        self.overlays.get(pos).copied()
    }

    /// Hands the accumulated host notifications over, leaving the outbox empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_avatar(&mut self, color: AvatarColor, pos: Vec2) {
        match color {
            AvatarColor::Blue => self.blue_avatar = pos,
            AvatarColor::Green => self.green_avatar = pos,
        }
    }

    pub(crate) fn set_on_goal(&mut self, color: AvatarColor, on_goal: bool) {
        match color {
            AvatarColor::Blue => self.blue_on_goal = on_goal,
            AvatarColor::Green => self.green_on_goal = on_goal,
        }
    }

    /// What a cell shows once whatever stood on it has left: the plate marker,
    /// else the goal, else plain floor.
    pub(crate) fn true_type(&self, pos: &Vec2) -> Occupant {
        if let Some(plate) = self.plates.find(pos).and_then(|id| self.plates.get(id)) {
            return plate.kind.marker();
        }
        if *pos == self.blue_goal {
            Occupant::BlueGoal
        } else if *pos == self.green_goal {
            Occupant::GreenGoal
        } else {
            Occupant::Floor
        }
    }

    /// Writes one cell and tells the host about it. Callers only pass positions
    /// that were bounds-checked already.
    pub(crate) fn write(&mut self, pos: Vec2, occupant: Occupant) {
        match self.board.set(&pos, occupant) {
            Ok(()) => self.events.push(GameEvent::CellChanged(pos)),
            Err(err) => {
                debug_assert!(false, "write outside the board: {}", err);
                warn!("dropped write of {:?}: {}", occupant, err);
            }
        }
    }

    /// Like `write`, but floor and wall cells get a fresh random shade
    pub(crate) fn paint(&mut self, pos: Vec2, occupant: Occupant) {
        let shade = match occupant {
            Occupant::Floor => self.rng.random_range(0..FLOOR_SHADES),
            Occupant::Wall => self.rng.random_range(0..WALL_SHADES),
            _ => 0,
        };
        if self.board.set_shade(&pos, shade).is_ok() {
            self.write(pos, occupant);
        }
    }

    pub(crate) fn cue(&mut self, cue: Cue) {
        self.events.push(GameEvent::Cue(cue));
    }

    pub(crate) fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.events.push(GameEvent::Status(self.status.clone()));
    }
}
