use crate::capacity::MixedCapacity;

/// A counter for the buffer sizes of a
/// [`GeometryCollectionArray`][crate::array::GeometryCollectionArray].
///
/// This can be used to reduce allocations by allocating once for exactly the array size you need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeometryCollectionCapacity {
    pub(crate) mixed_capacity: MixedCapacity,
    pub(crate) geom_capacity: usize,
}

impl GeometryCollectionCapacity {
    /// Create a new capacity with known sizes.
    pub fn new(mixed_capacity: MixedCapacity, geom_capacity: usize) -> Self {
        Self {
            mixed_capacity,
            geom_capacity,
        }
    }

    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::new(MixedCapacity::new_empty(), 0)
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.mixed_capacity.is_empty() && self.geom_capacity == 0
    }

    /// The geometry offset buffer capacity
    pub fn geom_capacity(&self) -> usize {
        self.geom_capacity
    }

    /// Add a GeometryCollection, given as its parts, to this capacity counter.
    #[inline]
    pub fn add_geometry_collection(&mut self, geoms: &[geo::Geometry]) {
        for g in geoms {
            self.mixed_capacity.add_geometry(g);
        }
        self.geom_capacity += 1;
    }

    /// Create a capacity counter from an iterator of GeometryCollections, each given as its
    /// parts.
    pub fn from_geometry_collections<'a>(
        geoms: impl Iterator<Item = &'a [geo::Geometry]>,
    ) -> Self {
        let mut counter = Self::new_empty();
        for geom in geoms {
            counter.add_geometry_collection(geom);
        }
        counter
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::point;

    #[test]
    fn nested_collections_are_counted() {
        let inner = geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![
            geo::Geometry::Point(point!(x: 0., y: 0.)),
        ]));
        let outer = [geo::Geometry::Point(point!(x: 1., y: 1.)), inner];
        let capacity =
            GeometryCollectionCapacity::from_geometry_collections(std::iter::once(&outer[..]));
        assert_eq!(capacity.geom_capacity(), 1);
        assert_eq!(capacity.mixed_capacity.point, 1);
        assert_eq!(capacity.mixed_capacity.total_num_geoms(), 2);
        let nested = capacity.mixed_capacity.geometry_collection.unwrap();
        assert_eq!(nested.geom_capacity(), 1);
        assert_eq!(nested.mixed_capacity.point, 1);
    }
}
