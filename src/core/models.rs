/// The logical content of one grid cell
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Floor,
    Wall,
    BlueAvatar,
    GreenAvatar,
    BlueGoal,
    GreenGoal,
    Box,
    BoxSwitch,
    BlueSwitch,
    GreenSwitch,
    Door,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AvatarColor {
    Blue,
    Green,
}

/// What has to stand on a plate to hold its door open
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlateKind {
    Box,
    Blue,
    Green,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    SwapControl,
    Restart,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BlockReason {
    OutOfBounds,
    Obstacle,
    BoxObstructed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked(BlockReason),
    ControlSwapped(AvatarColor),
    LevelRestarted(usize),
    LevelCompleted { completed: usize, next: usize },
}
