use log::debug;

use crate::core::plates::PlateOccupancy;
use crate::core::events::{Cue, GameEvent};
use crate::core::{AvatarColor, BlockReason, Direction, GameChangeType, GameUpdate, Occupant, UserAction, Vec2};
use crate::core::game::Game;

/// Applies one input to the game, start to finish
pub fn step(game: &mut Game, action: UserAction) -> GameUpdate {
    let update = match action {
        UserAction::Move(direction) => game.attempt_move(direction),
        UserAction::SwapControl => game.swap_control(),
        UserAction::Restart => game.restart(),
    };
    debug!("{:?} -> {:?}", action, update);
    update
}

impl Game {
    /// Moves whichever avatar the control token currently selects
    pub fn attempt_move(&mut self, direction: Direction) -> GameUpdate {
        self.note_first_move();
        self.move_avatar(self.controlling, direction)
    }

    pub(crate) fn move_avatar(&mut self, color: AvatarColor, direction: Direction) -> GameUpdate {
        let to = self.avatar(color) + direction.offset();
        if !self.board.contains(&to) {
            return GameUpdate::Blocked(BlockReason::OutOfBounds);
        }
        let Ok(target) = self.board.get(&to) else {
            return GameUpdate::Blocked(BlockReason::OutOfBounds);
        };

        match target {
            Occupant::Wall | Occupant::Door | Occupant::BlueAvatar | Occupant::GreenAvatar => {
                self.cue(Cue::Obstacle);
                GameUpdate::Blocked(BlockReason::Obstacle)
            }
            Occupant::Box => {
                if !self.push_box(to, direction) {
                    return GameUpdate::Blocked(BlockReason::BoxObstructed);
                }
                self.relocate(color, to);
                if self.is_goal_cell(&to) {
                    if let Some(completed) = self.check_goals(to) {
                        return completed;
                    }
                }
                // the box may have been hiding a switch of the pusher's own color
                if let PlateOccupancy::MatchingOccupant(id) = self.plates.occupancy(&to, color.avatar()) {
                    self.activate_plate(id);
                }
                GameUpdate::Moved(GameChangeType::PlayerAndBoxMove)
            }
            // goals are matched by coordinate, so they win over anything type-based
            _ if self.is_goal_cell(&to) => {
                self.relocate(color, to);
                if let Some(completed) = self.check_goals(to) {
                    return completed;
                }
                GameUpdate::Moved(GameChangeType::PlayerMove)
            }
            switch if switch == color.switch() => {
                if let Some(id) = self.plates.find(&to) {
                    if switch == Occupant::GreenSwitch {
                        self.note_green_switch();
                    }
                    self.activate_plate(id);
                }
                self.relocate(color, to);
                GameUpdate::Moved(GameChangeType::PlayerMove)
            }
            _ => {
                self.relocate(color, to);
                GameUpdate::Moved(GameChangeType::PlayerMove)
            }
        }
    }

    /// Pushes the box at `from` one cell along `direction`. Boxes never chain.
    pub fn push_box(&mut self, from: Vec2, direction: Direction) -> bool {
        let to = from + direction.offset();
        if !self.board.contains(&to) {
            self.cue(Cue::Obstacle);
            return false;
        }
        let Ok(target) = self.board.get(&to) else {
            self.cue(Cue::Obstacle);
            return false;
        };

        match target {
            Occupant::Wall | Occupant::Door | Occupant::BlueAvatar | Occupant::GreenAvatar | Occupant::Box => {
                self.cue(Cue::Obstacle);
                false
            }
            Occupant::BoxSwitch => {
                if let Some(id) = self.plates.find(&to) {
                    self.activate_plate(id);
                }
                self.place_box(from, to);
                true
            }
            _ => {
                self.place_box(from, to);
                true
            }
        }
    }

    fn place_box(&mut self, from: Vec2, to: Vec2) {
        let restored = self.true_type(&from);
        self.write(from, restored);
        self.overlays.remove(&to);
        self.write(to, Occupant::Box);
        self.cue(Cue::BoxPushed);

        if let PlateOccupancy::MatchingOccupant(id) = self.plates.occupancy(&from, Occupant::Box) {
            self.deactivate_plate(id);
        }
    }

    /// Moves an avatar without any rule checks: restores the cell it leaves,
    /// writes the one it enters and lets go of any plate it was holding down.
    pub(crate) fn relocate(&mut self, color: AvatarColor, to: Vec2) {
        let from = self.avatar(color);
        let restored = self.true_type(&from);
        self.write(from, restored);
        self.write(to, color.avatar());
        self.set_avatar(color, to);
        self.set_on_goal(color, false);

        if let PlateOccupancy::MatchingOccupant(id) = self.plates.occupancy(&from, color.avatar()) {
            self.deactivate_plate(id);
        }
    }

    pub fn swap_control(&mut self) -> GameUpdate {
        self.note_swap();
        self.controlling = self.controlling.other();
        self.cue(Cue::ControlSwap);
        self.events.push(GameEvent::ControlChanged(self.controlling));
        GameUpdate::ControlSwapped(self.controlling)
    }
}
