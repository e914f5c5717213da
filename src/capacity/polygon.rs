/// A counter for the buffer sizes of a [`PolygonArray`][crate::array::PolygonArray].
///
/// This can be used to reduce allocations by allocating once for exactly the array size you need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolygonCapacity {
    pub(crate) coord_capacity: usize,
    pub(crate) ring_capacity: usize,
    pub(crate) geom_capacity: usize,
}

impl PolygonCapacity {
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

    /// The coordinate buffer capacity
    pub fn coord_capacity(&self) -> usize {
        self.coord_capacity
    }

    /// The ring offset buffer capacity
    pub fn ring_capacity(&self) -> usize {
        self.ring_capacity
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add the capacity of the given Polygon
    #[inline]
    pub fn add_polygon(&mut self, polygon: &geo::Polygon) {
        self.geom_capacity += 1;

        // The empty polygon has no rings at all
        if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() {
            return;
        }
        self.ring_capacity += polygon.interiors().len() + 1;
        self.coord_capacity += polygon.exterior().0.len();
        for int_ring in polygon.interiors() {
            self.coord_capacity += int_ring.0.len();
        }
    }

    /// Add the capacity of the given Rect, stored as a one-ring polygon with 5 coordinates.
    #[inline]
    pub fn add_rect(&mut self) {
        self.geom_capacity += 1;
        self.ring_capacity += 1;
        self.coord_capacity += 5;
    }

    /// Add the capacity of the given Triangle, stored as a one-ring polygon with 4 coordinates.
    #[inline]
    pub fn add_triangle(&mut self) {
        self.geom_capacity += 1;
        self.ring_capacity += 1;
        self.coord_capacity += 4;
    }

    /// Create a capacity counter from an iterator of Polygons.
    pub fn from_polygons<'a>(geoms: impl Iterator<Item = &'a geo::Polygon>) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_polygon(geom);
        }
        counter
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::polygon;

    #[test]
    fn counts_rings_and_coords() {
        let p = polygon!(
            exterior: [(x: 0., y: 0.), (x: 4., y: 0.), (x: 4., y: 4.), (x: 0., y: 4.)],
            interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 1., y: 2.)]],
        );
        let empty = geo::Polygon::new(geo::LineString::new(vec![]), vec![]);
        let capacity = PolygonCapacity::from_polygons([p, empty].iter());
        assert_eq!(capacity, PolygonCapacity::new(9, 2, 2));
    }
}
