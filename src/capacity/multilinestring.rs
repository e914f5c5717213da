/// A counter for the buffer sizes of a
/// [`MultiLineStringArray`][crate::array::MultiLineStringArray].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiLineStringCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) ring_capacity: usize,
    pub(crate) geom_capacity: usize,
}

impl MultiLineStringCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(coord_capacity: usize, ring_capacity: usize, geom_capacity: usize) -> Self {
        Self {
            coord_capacity,
            ring_capacity,
            geom_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(0, 0, 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.coord_capacity == 0 && self.ring_capacity == 0 && self.geom_capacity == 0
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add the capacity of the given MultiLineString
    #[inline]
    pub fn add_multi_line_string(&mut self, multi_line_string: &geo::MultiLineString) {
        self.geom_capacity += 1;
        self.ring_capacity += multi_line_string.0.len();
        for line_string in multi_line_string {
            self.coord_capacity += line_string.0.len();
        }
    }

    /// Create a capacity counter from an iterator of MultiLineStrings.
    pub fn from_multi_line_strings<'a>(
        geoms: impl Iterator<Item = &'a geo::MultiLineString>,
    ) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_multi_line_string(geom);
        }
        counter
    }
}
