use crate::array::MultiLineStringArray;
use crate::builder::coord::CoordBufferBuilder;
use crate::builder::linestring::validate_line_string;
use crate::builder::OffsetsBuilder;
use crate::capacity::MultiLineStringCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<MultiLineString>`: a mutable collection of
/// MultiLineStrings.
///
/// Converting a [`MultiLineStringBuilder`] into a [`MultiLineStringArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct MultiLineStringBuilder {
    coords: CoordBufferBuilder,

    /// Offsets into the ring array where each geometry starts
    geom_offsets: OffsetsBuilder,

    /// Offsets into the coordinate array where each ring starts
    ring_offsets: OffsetsBuilder,
}

impl MultiLineStringBuilder {
    /// Creates a new empty [`MultiLineStringBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`MultiLineStringBuilder`] with the provided
    /// [capacity][MultiLineStringCapacity].
    pub fn with_capacity(capacity: MultiLineStringCapacity) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity.coord_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
            ring_offsets: OffsetsBuilder::with_capacity(capacity.ring_capacity),
        }
    }

    /// The number of multi line strings in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no multi line strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new MultiLineString to the end of this builder.
    ///
    /// # Errors
    ///
    /// Every line string is validated as in
    /// [`LineStringBuilder::push_line_string`][crate::builder::LineStringBuilder::push_line_string].
    #[inline]
    pub fn push_multi_line_string(&mut self, value: &geo::MultiLineString) -> Result<()> {
        for line_string in value {
            validate_line_string(line_string)?;
        }
        for line_string in value {
            for coord in &line_string.0 {
                self.coords.push_coord(coord);
            }
            self.ring_offsets.try_push_usize(line_string.0.len())?;
        }
        self.geom_offsets.try_push_usize(value.0.len())
    }

    /// Create this builder from a slice of MultiLineStrings.
    pub fn from_multi_line_strings(geoms: &[geo::MultiLineString]) -> Result<Self> {
        let capacity = MultiLineStringCapacity::from_multi_line_strings(geoms.iter());
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_multi_line_string(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`MultiLineStringArray`].
    pub fn finish(self) -> MultiLineStringArray {
        MultiLineStringArray {
            coords: self.coords.finish(),
            geom_offsets: self.geom_offsets.finish(),
            ring_offsets: self.ring_offsets.finish(),
        }
    }
}

impl TryFrom<&[geo::MultiLineString]> for MultiLineStringArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::MultiLineString]) -> Result<Self> {
        Ok(MultiLineStringBuilder::from_multi_line_strings(geoms)?.finish())
    }
}
