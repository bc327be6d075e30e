use crate::core::{AvatarColor, Vec2};

/// Named audio cues. The host decides how (and whether) to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Obstacle,
    BoxPushed,
    PlateActivate,
    PlateDeactivate,
    AvatarCaughtInDoor,
    GoalReached,
    LevelComplete,
    ControlSwap,
}

impl Cue {
    pub fn sound_name(self) -> &'static str {
        match self {
            Cue::Obstacle => "fx_hoot",
            Cue::BoxPushed => "fx_blast3",
            Cue::PlateActivate => "fx_blast4",
            Cue::PlateDeactivate => "fx_bang",
            Cue::AvatarCaughtInDoor => "fx_wilhelm",
            Cue::GoalReached => "fx_coin3",
            Cue::LevelComplete => "fanfare",
            Cue::ControlSwap => "fx_powerup5",
        }
    }
}

/// Notifications for the rendering/audio host, drained after each action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CellChanged(Vec2),
    Cue(Cue),
    Status(String),
    LevelLoaded { index: usize, name: String },
    ControlChanged(AvatarColor),
}
