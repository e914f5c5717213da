use std::sync::Arc;

use arrow_array::ListArray;
use arrow_buffer::OffsetBuffer;

use crate::array::{wrap_list, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::scalar::LineString;
use crate::trait_::{ArrayAccessor, IntoArrow};
use crate::util::OffsetBufferUtils;

/// An immutable array of LineString geometries using GeoArrow's in-memory representation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStringArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the coordinate array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,
}

impl LineStringArray {
    /// Create a new LineStringArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest geometry offset does not match the number of coordinates
    pub fn try_new(coords: CoordBuffer, geom_offsets: OffsetBuffer<i32>) -> Result<Self> {
        if geom_offsets.last_usize() != coords.len() {
            return Err(GeoArrowError::Construction(
                "largest geometry offset must match coords length".to_string(),
            ));
        }
        Ok(Self {
            coords,
            geom_offsets,
        })
    }
}

impl<'a> ArrayAccessor<'a> for LineStringArray {
    type Item = LineString<'a>;

    fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        LineString::new(&self.coords, &self.geom_offsets, index)
    }
}

impl IntoArrow for LineStringArray {
    type ArrowArray = ListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let vertices = Arc::new(self.coords.into_arrow()?);
        wrap_list("vertices", self.geom_offsets, vertices)
    }
}
