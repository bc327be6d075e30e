use log::info;

use crate::core::events::Cue;
use crate::core::game::Game;
use crate::core::{AvatarColor, GameUpdate, Vec2};

impl Game {
    /// Goals are identified by coordinate, whatever is drawn there right now
    pub fn is_goal_cell(&self, pos: &Vec2) -> bool {
        *pos == self.blue_goal || *pos == self.green_goal
    }

    /// Marks a goal as reached if the avatar standing on it has the goal's color.
    /// Returns the completion when this was the second goal.
    pub(crate) fn check_goals(&mut self, pos: Vec2) -> Option<GameUpdate> {
        let color = if pos == self.green_goal {
            AvatarColor::Green
        } else if pos == self.blue_goal {
            AvatarColor::Blue
        } else {
            return None;
        };
        if self.board.get(&pos) != Ok(color.avatar()) {
            return None;
        }

        self.set_on_goal(color, true);
        self.cue(Cue::GoalReached);
        info!("{} avatar reached its goal at {}", color, pos);

        if self.blue_on_goal && self.green_on_goal {
            return Some(self.complete_level());
        }
        None
    }

    pub fn is_won(&self) -> bool {
        self.blue_on_goal && self.green_on_goal
    }
}
