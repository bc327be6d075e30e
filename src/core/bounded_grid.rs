use crate::core::Vec2;
use crate::core::bounds::BoundsOriginRoot;

#[derive(Clone, Debug)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(size: Vec2, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(size.x, size.y);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &Vec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
