use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::error::BoundsError;
use crate::core::{Occupant, Vec2};

/// The grid state store: one logical occupant per cell, plus a cosmetic shade index
/// that the host uses to vary floor and wall colors.
#[derive(Clone, Debug)]
pub struct Board {
    occupants: BoundedGrid<Occupant>,
    shades: BoundedGrid<u8>,
}

impl Board {
    pub fn new(size: Vec2) -> Board {
        Board {
            occupants: BoundedGrid::new_with_size(size, Occupant::Floor),
            shades: BoundedGrid::new_with_size(size, 0),
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.occupants.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds().width()
    }

    pub fn height(&self) -> i32 {
        self.bounds().height()
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.occupants.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Result<Occupant, BoundsError> {
        self.occupants
            .get(pos)
            .copied()
            .ok_or_else(|| self.bounds_error(pos))
    }

    pub fn set(&mut self, pos: &Vec2, occupant: Occupant) -> Result<(), BoundsError> {
        let err = self.bounds_error(pos);
        let cell = self.occupants.get_mut(pos).ok_or(err)?;
        *cell = occupant;
        Ok(())
    }

    pub fn shade(&self, pos: &Vec2) -> Result<u8, BoundsError> {
        self.shades
            .get(pos)
            .copied()
            .ok_or_else(|| self.bounds_error(pos))
    }

    pub fn set_shade(&mut self, pos: &Vec2, shade: u8) -> Result<(), BoundsError> {
        let err = self.bounds_error(pos);
        let cell = self.shades.get_mut(pos).ok_or(err)?;
        *cell = shade;
        Ok(())
    }

    /// Every cell back to unshaded floor
    pub fn clear(&mut self) {
        self.occupants.fill(Occupant::Floor);
        self.shades.fill(0);
    }

    pub fn positions_of(&self, occupant: Occupant) -> Vec<Vec2> {
        self.bounds()
            .iter_positions()
            .filter(|pos| self.occupants[pos] == occupant)
            .collect()
    }

    pub fn count(&self, occupant: Occupant) -> usize {
        self.positions_of(occupant).len()
    }

    fn bounds_error(&self, pos: &Vec2) -> BoundsError {
        BoundsError {
            pos: *pos,
            width: self.width(),
            height: self.height(),
        }
    }
}
