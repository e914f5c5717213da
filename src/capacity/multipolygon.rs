/// A counter for the buffer sizes of a [`MultiPolygonArray`][crate::array::MultiPolygonArray].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MultiPolygonCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) ring_capacity: usize,
    pub(crate) polygon_capacity: usize,
    pub(crate) geom_capacity: usize,
}

impl MultiPolygonCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(
        coord_capacity: usize,
        ring_capacity: usize,
        polygon_capacity: usize,
        geom_capacity: usize,
    ) -> Self {
        Self {
            coord_capacity,
            ring_capacity,
            polygon_capacity,
            geom_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.coord_capacity == 0
            && self.ring_capacity == 0
            && self.polygon_capacity == 0
            && self.geom_capacity == 0
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add the capacity of the given MultiPolygon
    #[inline]
    pub fn add_multi_polygon(&mut self, multi_polygon: &geo::MultiPolygon) {
        self.geom_capacity += 1;
        self.polygon_capacity += multi_polygon.0.len();
        for polygon in multi_polygon {
            self.ring_capacity += polygon.interiors().len() + 1;
            self.coord_capacity += polygon.exterior().0.len();
            for int_ring in polygon.interiors() {
                self.coord_capacity += int_ring.0.len();
            }
        }
    }

    /// Create a capacity counter from an iterator of MultiPolygons.
    pub fn from_multi_polygons<'a>(geoms: impl Iterator<Item = &'a geo::MultiPolygon>) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_multi_polygon(geom);
        }
        counter
    }
}
