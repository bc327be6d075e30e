use crate::core::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { x, y },
        }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    pub fn width(&self) -> i32 {
        self.extent.x
    }

    pub fn height(&self) -> i32 {
        self.extent.y
    }

    /// Row-major, top-left first
    pub fn iter_positions(self) -> impl Iterator<Item = Vec2> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| Vec2 { x, y }))
    }
}
