use crate::array::MultiPolygonArray;
use crate::builder::coord::CoordBufferBuilder;
use crate::builder::polygon::validate_polygon;
use crate::builder::OffsetsBuilder;
use crate::capacity::MultiPolygonCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<MultiPolygon>`: a mutable collection of MultiPolygons.
///
/// Converting a [`MultiPolygonBuilder`] into a [`MultiPolygonArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct MultiPolygonBuilder {
    coords: CoordBufferBuilder,

    /// Offsets into the polygon array where each geometry starts
    geom_offsets: OffsetsBuilder,

    /// Offsets into the ring array where each polygon starts
    polygon_offsets: OffsetsBuilder,

    /// Offsets into the coordinate array where each ring starts
    ring_offsets: OffsetsBuilder,
}

impl MultiPolygonBuilder {
    /// Creates a new empty [`MultiPolygonBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`MultiPolygonBuilder`] with the provided
    /// [capacity][MultiPolygonCapacity].
    pub fn with_capacity(capacity: MultiPolygonCapacity) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity.coord_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
            polygon_offsets: OffsetsBuilder::with_capacity(capacity.polygon_capacity),
            ring_offsets: OffsetsBuilder::with_capacity(capacity.ring_capacity),
        }
    }

    /// The number of multi polygons in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no multi polygons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new MultiPolygon to the end of this builder.
    ///
    /// # Errors
    ///
    /// Every polygon is validated as in
    /// [`PolygonBuilder::push_polygon`][crate::builder::PolygonBuilder::push_polygon].
    #[inline]
    pub fn push_multi_polygon(&mut self, value: &geo::MultiPolygon) -> Result<()> {
        let empty = value
            .iter()
            .map(validate_polygon)
            .collect::<Result<Vec<_>>>()?;
        for (polygon, is_empty) in value.iter().zip(empty) {
            if is_empty {
                self.polygon_offsets.try_push_usize(0)?;
                continue;
            }
            for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
                for coord in &ring.0 {
                    self.coords.push_coord(coord);
                }
                self.ring_offsets.try_push_usize(ring.0.len())?;
            }
            self.polygon_offsets
                .try_push_usize(polygon.interiors().len() + 1)?;
        }
        self.geom_offsets.try_push_usize(value.0.len())
    }

    /// Create this builder from a slice of MultiPolygons.
    pub fn from_multi_polygons(geoms: &[geo::MultiPolygon]) -> Result<Self> {
        let capacity = MultiPolygonCapacity::from_multi_polygons(geoms.iter());
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_multi_polygon(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`MultiPolygonArray`].
    pub fn finish(self) -> MultiPolygonArray {
        MultiPolygonArray {
            coords: self.coords.finish(),
            geom_offsets: self.geom_offsets.finish(),
            polygon_offsets: self.polygon_offsets.finish(),
            ring_offsets: self.ring_offsets.finish(),
        }
    }
}

impl TryFrom<&[geo::MultiPolygon]> for MultiPolygonArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::MultiPolygon]) -> Result<Self> {
        Ok(MultiPolygonBuilder::from_multi_polygons(geoms)?.finish())
    }
}
