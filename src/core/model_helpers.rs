use std::fmt;
use std::ops::Add;

use crate::core::{AvatarColor, Direction, Occupant, PlateKind, Vec2};

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    /// Screen coordinates: y grows downwards
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl AvatarColor {
    pub fn other(self) -> AvatarColor {
        match self {
            AvatarColor::Blue => AvatarColor::Green,
            AvatarColor::Green => AvatarColor::Blue,
        }
    }

    pub fn avatar(self) -> Occupant {
        match self {
            AvatarColor::Blue => Occupant::BlueAvatar,
            AvatarColor::Green => Occupant::GreenAvatar,
        }
    }

    pub fn goal(self) -> Occupant {
        match self {
            AvatarColor::Blue => Occupant::BlueGoal,
            AvatarColor::Green => Occupant::GreenGoal,
        }
    }

    pub fn switch(self) -> Occupant {
        match self {
            AvatarColor::Blue => Occupant::BlueSwitch,
            AvatarColor::Green => Occupant::GreenSwitch,
        }
    }
}

impl fmt::Display for AvatarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarColor::Blue => write!(f, "blue"),
            AvatarColor::Green => write!(f, "green"),
        }
    }
}

impl PlateKind {
    pub fn from_marker(occupant: Occupant) -> Option<PlateKind> {
        match occupant {
            Occupant::BoxSwitch => Some(PlateKind::Box),
            Occupant::BlueSwitch => Some(PlateKind::Blue),
            Occupant::GreenSwitch => Some(PlateKind::Green),
            _ => None,
        }
    }

    /// The tile shown while nothing holds the plate down
    pub fn marker(self) -> Occupant {
        match self {
            PlateKind::Box => Occupant::BoxSwitch,
            PlateKind::Blue => Occupant::BlueSwitch,
            PlateKind::Green => Occupant::GreenSwitch,
        }
    }

    pub fn activator(self) -> Occupant {
        match self {
            PlateKind::Box => Occupant::Box,
            PlateKind::Blue => Occupant::BlueAvatar,
            PlateKind::Green => Occupant::GreenAvatar,
        }
    }
}

impl Occupant {
    pub fn avatar_color(self) -> Option<AvatarColor> {
        match self {
            Occupant::BlueAvatar => Some(AvatarColor::Blue),
            Occupant::GreenAvatar => Some(AvatarColor::Green),
            _ => None,
        }
    }

    pub fn is_avatar(self) -> bool {
        self.avatar_color().is_some()
    }

    /// Anything that a closing door would crush
    pub fn is_movable(self) -> bool {
        self == Occupant::Box || self.is_avatar()
    }

    pub fn to_char(self) -> char {
        match self {
            Occupant::Floor => ' ',
            Occupant::Wall => '#',
            Occupant::BlueAvatar => 'B',
            Occupant::GreenAvatar => 'G',
            Occupant::BlueGoal => 'b',
            Occupant::GreenGoal => 'g',
            Occupant::Box => '$',
            Occupant::BoxSwitch => 'x',
            Occupant::BlueSwitch => '1',
            Occupant::GreenSwitch => '2',
            Occupant::Door => 'D',
        }
    }

    pub fn from_char(ch: char) -> Option<Occupant> {
        Some(match ch {
            ' ' => Occupant::Floor,
            '#' => Occupant::Wall,
            'B' => Occupant::BlueAvatar,
            'G' => Occupant::GreenAvatar,
            'b' => Occupant::BlueGoal,
            'g' => Occupant::GreenGoal,
            '$' => Occupant::Box,
            'x' => Occupant::BoxSwitch,
            '1' => Occupant::BlueSwitch,
            '2' => Occupant::GreenSwitch,
            'D' => Occupant::Door,
            _ => return None,
        })
    }
}
