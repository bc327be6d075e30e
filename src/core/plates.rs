use crate::core::{Direction, Occupant, PlateKind, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A straight run of door cells starting at `origin`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DoorRun {
    pub origin: Vec2,
    pub axis: Axis,
    pub length: i32,
}

impl DoorRun {
    /// Exactly one of the lengths must be positive and the other zero
    pub fn from_lengths(origin: Vec2, length_x: i32, length_y: i32) -> Option<DoorRun> {
        match (length_x, length_y) {
            (x, 0) if x > 0 => Some(DoorRun { origin, axis: Axis::Horizontal, length: x }),
            (0, y) if y > 0 => Some(DoorRun { origin, axis: Axis::Vertical, length: y }),
            _ => None,
        }
    }

    pub fn length_x(&self) -> i32 {
        match self.axis {
            Axis::Horizontal => self.length,
            Axis::Vertical => 0,
        }
    }

    pub fn length_y(&self) -> i32 {
        match self.axis {
            Axis::Horizontal => 0,
            Axis::Vertical => self.length,
        }
    }

    pub fn cells(self) -> impl Iterator<Item = Vec2> {
        let step = match self.axis {
            Axis::Horizontal => Vec2 { x: 1, y: 0 },
            Axis::Vertical => Vec2 { x: 0, y: 1 },
        };
        (0..self.length).map(move |i| Vec2 {
            x: self.origin.x + step.x * i,
            y: self.origin.y + step.y * i,
        })
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.cells().any(|cell| cell == *pos)
    }

    /// Where a closing door shoves an avatar standing in it, most preferred first
    pub fn avatar_escape_directions(&self) -> [Direction; 2] {
        match self.axis {
            Axis::Horizontal => [Direction::Down, Direction::Up],
            Axis::Vertical => [Direction::Right, Direction::Left],
        }
    }

    /// Where a closing door shoves a box standing in it, most preferred first
    pub fn box_escape_directions(&self) -> [Direction; 2] {
        match self.axis {
            Axis::Horizontal => [Direction::Up, Direction::Down],
            Axis::Vertical => [Direction::Left, Direction::Right],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PressurePlate {
    pub at: Vec2,
    pub kind: PlateKind,
    pub door: DoorRun,
}

impl PressurePlate {
    pub fn is_held_by(&self, occupant: Occupant) -> bool {
        occupant == self.kind.activator()
    }
}

pub type PlateId = usize;

/// What standing on a cell means for the plate registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlateOccupancy {
    NoPlate,
    MatchingOccupant(PlateId),
    NonMatchingOccupant(PlateId),
}

#[derive(Clone, Debug, Default)]
pub struct PlateRegistry {
    plates: Vec<PressurePlate>,
}

impl PlateRegistry {
    pub fn new() -> Self {
        PlateRegistry { plates: Vec::new() }
    }

    /// Returns `None` if a plate is already registered at the same coordinate
    pub fn register(&mut self, plate: PressurePlate) -> Option<PlateId> {
        if self.find(&plate.at).is_some() {
            return None;
        }
        self.plates.push(plate);
        Some(self.plates.len() - 1)
    }

    pub fn find(&self, pos: &Vec2) -> Option<PlateId> {
        self.plates.iter().position(|plate| plate.at == *pos)
    }

    pub fn get(&self, id: PlateId) -> Option<&PressurePlate> {
        self.plates.get(id)
    }

    pub fn occupancy(&self, pos: &Vec2, occupant: Occupant) -> PlateOccupancy {
        match self.find(pos) {
            None => PlateOccupancy::NoPlate,
            Some(id) if self.plates[id].is_held_by(occupant) => PlateOccupancy::MatchingOccupant(id),
            Some(id) => PlateOccupancy::NonMatchingOccupant(id),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PressurePlate> {
        self.plates.iter()
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    pub fn clear(&mut self) {
        self.plates.clear();
    }
}
