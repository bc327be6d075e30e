mod model_helpers;
mod models;
mod update;
mod doors;
mod goals;
mod lifecycle;
mod tutorial;
mod game;
mod consts;
mod bounds;
pub mod board;
pub mod bounded_grid;
pub mod error;
pub mod events;
pub mod plates;

pub use models::{
    AvatarColor, BlockReason, Direction, GameChangeType, GameUpdate, Occupant, PlateKind, UserAction, Vec2,
};
pub use consts::*;
pub use bounds::BoundsOriginRoot;
pub use board::Board;
pub use error::{BoundsError, LevelError};
pub use events::{Cue, GameEvent};
pub use plates::{Axis, DoorRun, PlateId, PlateOccupancy, PlateRegistry, PressurePlate};
pub use game::Game;
pub use tutorial::TutorialProgress;
pub use update::step;
