/// A counter for the buffer sizes of a [`LineStringArray`][crate::array::LineStringArray].
///
/// This can be used to reduce allocations by allocating once for exactly the array size you need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStringCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) geom_capacity: usize,
}

impl LineStringCapacity {
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

    /// The coordinate buffer capacity
    pub fn coord_capacity(&self) -> usize {
        self.coord_capacity
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add the capacity of the given LineString
    #[inline]
    pub fn add_line_string(&mut self, line_string: &geo::LineString) {
        self.geom_capacity += 1;
        self.coord_capacity += line_string.0.len();
    }

    /// Create a capacity counter from an iterator of LineStrings.
    pub fn from_line_strings<'a>(geoms: impl Iterator<Item = &'a geo::LineString>) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_line_string(geom);
        }
        counter
    }
}
