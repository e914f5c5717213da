use crate::array::PointArray;
use crate::builder::coord::CoordBufferBuilder;

/// The GeoArrow equivalent to `Vec<Point>`: a mutable collection of Points.
///
/// Converting a [`PointBuilder`] into a [`PointArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct PointBuilder {
    coords: CoordBufferBuilder,
}

impl PointBuilder {
    /// Creates a new empty [`PointBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`PointBuilder`] with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity),
        }
    }

    /// The number of points in this builder.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether this builder contains no points.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Add a new Point to the end of this builder.
    #[inline]
    pub fn push_point(&mut self, value: &geo::Point) {
        self.coords.push_coord(&value.0);
    }

    /// Add a valid but empty point to the end of this builder.
    #[inline]
    pub fn push_empty(&mut self) {
        self.coords.push_nan_coord();
    }

    /// Create this builder from a slice of Points.
    pub fn from_points(geoms: &[geo::Point]) -> Self {
        let mut array = Self::with_capacity(geoms.len());
        for geom in geoms {
            array.push_point(geom);
        }
        array
    }

    /// Consume the builder and convert to an immutable [`PointArray`].
    pub fn finish(self) -> PointArray {
        PointArray::new(self.coords.finish())
    }
}

impl From<&[geo::Point]> for PointArray {
    fn from(geoms: &[geo::Point]) -> Self {
        PointBuilder::from_points(geoms).finish()
    }
}
