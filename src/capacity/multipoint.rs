/// A counter for the buffer sizes of a [`MultiPointArray`][crate::array::MultiPointArray].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiPointCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) geom_capacity: usize,
}

impl MultiPointCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(coord_capacity: usize, geom_capacity: usize) -> Self {
        Self {
            coord_capacity,
            geom_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(0, 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.coord_capacity == 0 && self.geom_capacity == 0
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add the capacity of the given MultiPoint
    #[inline]
    pub fn add_multi_point(&mut self, multi_point: &geo::MultiPoint) {
        self.geom_capacity += 1;
        self.coord_capacity += multi_point.0.len();
    }

    /// Create a capacity counter from an iterator of MultiPoints.
    pub fn from_multi_points<'a>(geoms: impl Iterator<Item = &'a geo::MultiPoint>) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_multi_point(geom);
        }
        counter
    }
}
