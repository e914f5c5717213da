use crate::array::GeometryCollectionArray;
use crate::builder::{MixedGeometryBuilder, OffsetsBuilder};
use crate::capacity::GeometryCollectionCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<GeometryCollection>`: a mutable collection of
/// GeometryCollections.
///
/// Converting a [`GeometryCollectionBuilder`] into a [`GeometryCollectionArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct GeometryCollectionBuilder {
    pub(crate) geoms: MixedGeometryBuilder,

    pub(crate) geom_offsets: OffsetsBuilder,
}

impl GeometryCollectionBuilder {
    /// Creates a new empty [`GeometryCollectionBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty [`GeometryCollectionBuilder`] with the provided
    /// [capacity][GeometryCollectionCapacity].
    pub fn with_capacity(capacity: GeometryCollectionCapacity) -> Self {
        Self {
            geoms: MixedGeometryBuilder::with_capacity(capacity.mixed_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
        }
    }

    /// Reserves capacity for at least `additional` more GeometryCollections.
    pub fn reserve(&mut self, additional: usize) {
        self.geom_offsets.reserve(additional);
    }

    /// The number of collections in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no collections.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new collection made of `geoms`, in order, to the end of this builder.
    ///
    /// Each geometry becomes exactly one part; nested collections are kept nested.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while pushing a part. A builder that returned an
    /// error may hold a partially written collection and should be discarded.
    pub fn push_geometries(&mut self, geoms: &[geo::Geometry]) -> Result<()> {
        for geom in geoms {
            self.geoms.push_geometry(geom)?;
        }
        self.geom_offsets.try_push_usize(geoms.len())
    }

    /// Add a new GeometryCollection to the end of this builder.
    #[inline]
    pub fn push_geometry_collection(&mut self, value: &geo::GeometryCollection) -> Result<()> {
        self.push_geometries(&value.0)
    }

    /// Add a collection with no parts.
    #[inline]
    pub fn push_empty(&mut self) {
        self.geom_offsets.extend_constant(1);
    }

    /// Create this builder from a slice of GeometryCollections.
    pub fn from_geometry_collections(geoms: &[geo::GeometryCollection]) -> Result<Self> {
        let capacity =
            GeometryCollectionCapacity::from_geometry_collections(geoms.iter().map(|g| &g.0[..]));
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_geometry_collection(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`GeometryCollectionArray`].
    pub fn finish(self) -> GeometryCollectionArray {
        GeometryCollectionArray {
            array: self.geoms.finish(),
            geom_offsets: self.geom_offsets.finish(),
        }
    }
}

impl TryFrom<&[geo::GeometryCollection]> for GeometryCollectionArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::GeometryCollection]) -> Result<Self> {
        Ok(GeometryCollectionBuilder::from_geometry_collections(geoms)?.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trait_::ArrayAccessor;
    use geo::point;

    #[test]
    fn empty_rows() {
        let mut builder = GeometryCollectionBuilder::new();
        builder.push_empty();
        builder
            .push_geometries(&[geo::Geometry::Point(point!(x: 1., y: 2.))])
            .unwrap();
        builder.push_empty();
        assert_eq!(builder.len(), 3);
        let arr = builder.finish();
        assert_eq!(arr.geom_offsets.to_vec(), vec![0, 0, 1, 1]);
        assert_eq!(arr.parts().len(), 1);
    }
}
