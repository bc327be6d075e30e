use log::{debug, warn};

use crate::core::events::Cue;
use crate::core::game::Game;
use crate::core::plates::{DoorRun, PlateId};
use crate::core::{MAX_EVICTION_DEPTH, Occupant, Vec2};

impl Game {
    /// Opens the plate's door. Door cells turn into floor; cells that are already
    /// open are left alone, so activating twice is the same as activating once.
    pub fn activate_plate(&mut self, id: PlateId) {
        let Some(plate) = self.plates.get(id).copied() else {
            return;
        };
        for cell in plate.door.cells() {
            if self.board.get(&cell) == Ok(Occupant::Door) {
                self.paint(cell, Occupant::Floor);
            }
        }
        self.cue(Cue::PlateActivate);
        self.note_plate_activated();
        debug!("plate at {} opened door at {}", plate.at, plate.door.origin);
    }

    /// Closes the plate's door. Anything standing in the doorway is first shoved one
    /// cell sideways onto open floor; if something is still in the way after that,
    /// the whole door stays open.
    pub fn deactivate_plate(&mut self, id: PlateId) {
        let Some(plate) = self.plates.get(id).copied() else {
            return;
        };
        self.cue(Cue::PlateDeactivate);

        let caught: Vec<(Vec2, Occupant)> = plate
            .door
            .cells()
            .filter_map(|cell| match self.board.get(&cell) {
                Ok(occupant) if occupant.is_movable() => Some((cell, occupant)),
                _ => None,
            })
            .collect();
        for (cell, occupant) in caught {
            if occupant.is_avatar() {
                self.cue(Cue::AvatarCaughtInDoor);
            }
            self.evict(&plate.door, cell, occupant);
        }

        if self.doorway_blocked(&plate.door) {
            warn!("door at {} cannot close, something is still in the doorway", plate.door.origin);
            return;
        }
        for cell in plate.door.cells() {
            if self.board.get(&cell) != Ok(Occupant::Door) {
                self.paint(cell, Occupant::Door);
            }
        }
        debug!("plate at {} closed door at {}", plate.at, plate.door.origin);
    }

    pub fn doorway_blocked(&self, door: &DoorRun) -> bool {
        door.cells()
            .any(|cell| self.board.get(&cell).is_ok_and(Occupant::is_movable))
    }

    /// Re-enters the movement engine to push one occupant out of a closing doorway.
    /// Only plain floor counts as somewhere to go.
    fn evict(&mut self, door: &DoorRun, cell: Vec2, occupant: Occupant) {
        if self.eviction_depth >= MAX_EVICTION_DEPTH {
            warn!("refusing nested eviction of {:?} at {}", occupant, cell);
            return;
        }
        let directions = match occupant {
            Occupant::Box => door.box_escape_directions(),
            _ => door.avatar_escape_directions(),
        };
        let Some(direction) = directions
            .into_iter()
            .find(|direction| self.board.get(&(cell + direction.offset())) == Ok(Occupant::Floor))
        else {
            return;
        };

        self.eviction_depth += 1;
        match occupant.avatar_color() {
            Some(color) => {
                self.move_avatar(color, direction);
            }
            None => {
                self.push_box(cell, direction);
            }
        }
        self.eviction_depth -= 1;
        debug!("evicted {:?} from {} towards {:?}", occupant, cell, direction);
    }
}
