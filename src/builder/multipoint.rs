use crate::array::MultiPointArray;
use crate::builder::coord::CoordBufferBuilder;
use crate::builder::OffsetsBuilder;
use crate::capacity::MultiPointCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<MultiPoint>`: a mutable collection of MultiPoints.
///
/// Converting a [`MultiPointBuilder`] into a [`MultiPointArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct MultiPointBuilder {
    coords: CoordBufferBuilder,

    /// Offsets into the coordinate array where each geometry starts
    geom_offsets: OffsetsBuilder,
}

impl MultiPointBuilder {
    /// Creates a new empty [`MultiPointBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`MultiPointBuilder`] with the provided [capacity][MultiPointCapacity].
    pub fn with_capacity(capacity: MultiPointCapacity) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity.coord_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
        }
    }

    /// The number of multi points in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no multi points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new MultiPoint to the end of this builder.
    #[inline]
    pub fn push_multi_point(&mut self, value: &geo::MultiPoint) -> Result<()> {
        for point in value {
            self.coords.push_coord(&point.0);
        }
        self.geom_offsets.try_push_usize(value.0.len())
    }

    /// Create this builder from a slice of MultiPoints.
    pub fn from_multi_points(geoms: &[geo::MultiPoint]) -> Result<Self> {
        let capacity = MultiPointCapacity::from_multi_points(geoms.iter());
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_multi_point(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`MultiPointArray`].
    pub fn finish(self) -> MultiPointArray {
        MultiPointArray {
            coords: self.coords.finish(),
            geom_offsets: self.geom_offsets.finish(),
        }
    }
}

impl TryFrom<&[geo::MultiPoint]> for MultiPointArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::MultiPoint]) -> Result<Self> {
        Ok(MultiPointBuilder::from_multi_points(geoms)?.finish())
    }
}
