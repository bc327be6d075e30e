use log::{info, warn};

use crate::core::board::Board;
use crate::core::events::{Cue, GameEvent};
use crate::core::game::Game;
use crate::core::{AvatarColor, GameUpdate};

impl Game {
    /// Resets every cell to floor and forgets all plates and overlay glyphs
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.plates.clear();
        self.overlays.clear();
    }

    /// Rebuilds the board from the catalog. Indices past the end wrap around.
    pub fn load_level(&mut self, index: usize) {
        let index = index % self.catalog.len();
        let level = self.catalog.level(index).clone();

        self.clear_board();
        if self.board.bounds().extent != level.size() {
            self.board = Board::new(level.size());
        }
        for pos in level.tiles.size().iter_positions() {
            self.paint(pos, level.tiles[&pos]);
        }
        for plate in &level.plates {
            if self.plates.register(*plate).is_none() {
                warn!("level '{}' has a second plate at {}, ignoring it", level.name, plate.at);
            }
        }
        self.overlays.extend(level.glyphs.iter().copied());

        self.blue_goal = level.blue_goal;
        self.green_goal = level.green_goal;
        self.blue_avatar = level.blue_start;
        self.green_avatar = level.green_start;
        self.blue_on_goal = false;
        self.green_on_goal = false;
        self.controlling = AvatarColor::Blue;
        self.eviction_depth = 0;
        self.current_level = index;

        self.set_status(&level.status);
        self.events.push(GameEvent::LevelLoaded {
            index,
            name: level.name.clone(),
        });
        info!("loaded level {} '{}'", index, level.name);
    }

    pub fn restart(&mut self) -> GameUpdate {
        info!("restarting level {}", self.current_level);
        self.load_level(self.current_level);
        GameUpdate::LevelRestarted(self.current_level)
    }

    pub(crate) fn complete_level(&mut self) -> GameUpdate {
        let completed = self.current_level;
        let next = self.catalog.next_index(completed);
        info!("level {} complete, advancing to {}", completed, next);

        self.set_status("Level Complete!");
        self.cue(Cue::LevelComplete);
        self.load_level(next);
        GameUpdate::LevelCompleted { completed, next }
    }
}
