use crate::array::LineStringArray;
use crate::builder::coord::CoordBufferBuilder;
use crate::builder::OffsetsBuilder;
use crate::capacity::LineStringCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<LineString>`: a mutable collection of LineStrings.
///
/// Converting a [`LineStringBuilder`] into a [`LineStringArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct LineStringBuilder {
    coords: CoordBufferBuilder,

    /// Offsets into the coordinate array where each geometry starts
    geom_offsets: OffsetsBuilder,
}

impl LineStringBuilder {
    /// Creates a new empty [`LineStringBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`LineStringBuilder`] with the provided [capacity][LineStringCapacity].
    pub fn with_capacity(capacity: LineStringCapacity) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity.coord_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
        }
    }

    /// The number of line strings in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no line strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new LineString to the end of this builder.
    ///
    /// # Errors
    ///
    /// - [`GeoArrowError::Construction`] if the line string has exactly one coordinate
    /// - [`GeoArrowError::Overflow`] if the coordinate offsets overflow
    #[inline]
    pub fn push_line_string(&mut self, value: &geo::LineString) -> Result<()> {
        validate_line_string(value)?;
        for coord in &value.0 {
            self.coords.push_coord(coord);
        }
        self.geom_offsets.try_push_usize(value.0.len())
    }

    /// Create this builder from a slice of LineStrings.
    pub fn from_line_strings(geoms: &[geo::LineString]) -> Result<Self> {
        let capacity = LineStringCapacity::from_line_strings(geoms.iter());
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_line_string(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`LineStringArray`].
    pub fn finish(self) -> LineStringArray {
        LineStringArray {
            coords: self.coords.finish(),
            geom_offsets: self.geom_offsets.finish(),
        }
    }
}

/// A line string is either empty or has at least two coordinates.
pub(crate) fn validate_line_string(value: &geo::LineString) -> Result<()> {
    if value.0.len() == 1 {
        return Err(GeoArrowError::Construction(
            "LineString must have zero or at least two coordinates, got one".to_string(),
        ));
    }
    Ok(())
}

impl TryFrom<&[geo::LineString]> for LineStringArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::LineString]) -> Result<Self> {
        Ok(LineStringBuilder::from_line_strings(geoms)?.finish())
    }
}
