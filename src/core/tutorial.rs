use crate::core::game::Game;

/// Which tutorial hints have been shown. Lives as long as the game, so each
/// hint appears once even if the tutorial is restarted.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialProgress {
    pub moved: bool,
    pub plate_opened: bool,
    pub swapped: bool,
    pub green_switch: bool,
}

impl Game {
    fn in_tutorial(&self) -> bool {
        self.current_level == 0
    }

    pub(crate) fn note_first_move(&mut self) {
        if self.in_tutorial() && !self.tutorial.moved {
            self.tutorial.moved = true;
            self.set_status("Push the box onto the grey switch");
        }
    }

    pub(crate) fn note_plate_activated(&mut self) {
        if self.in_tutorial() && !self.tutorial.plate_opened {
            self.tutorial.plate_opened = true;
            self.set_status("Switch to green by hitting space bar");
        }
    }

    pub(crate) fn note_swap(&mut self) {
        if self.in_tutorial() && !self.tutorial.swapped {
            self.tutorial.swapped = true;
            self.set_status("Move to the green switch to open door");
        }
    }

    pub(crate) fn note_green_switch(&mut self) {
        if self.in_tutorial() && !self.tutorial.green_switch {
            self.tutorial.green_switch = true;
            self.set_status("Move avatars to respective to gold beads");
        }
    }

    pub fn tutorial_progress(&self) -> TutorialProgress {
        self.tutorial
    }
}
