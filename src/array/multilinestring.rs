use std::sync::Arc;

use arrow_array::ListArray;
use arrow_buffer::OffsetBuffer;

use crate::array::{wrap_list, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::scalar::MultiLineString;
use crate::trait_::{ArrayAccessor, IntoArrow};
use crate::util::OffsetBufferUtils;

/// An immutable array of MultiLineString geometries using GeoArrow's in-memory representation.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineStringArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the line string array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each line string starts
    pub(crate) ring_offsets: OffsetBuffer<i32>,
}

impl MultiLineStringArray {
    /// Create a new MultiLineStringArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest line string offset does not match the number of coordinates
    /// - if the largest geometry offset does not match the size of line string offsets
    pub fn try_new(
        coords: CoordBuffer,
        geom_offsets: OffsetBuffer<i32>,
        ring_offsets: OffsetBuffer<i32>,
    ) -> Result<Self> {
        if ring_offsets.last_usize() != coords.len() {
            return Err(GeoArrowError::Construction(
                "largest line string offset must match coords length".to_string(),
            ));
        }
        if geom_offsets.last_usize() != ring_offsets.len_proxy() {
            return Err(GeoArrowError::Construction(
                "largest geometry offset must match line string offsets length".to_string(),
            ));
        }
        Ok(Self {
            coords,
            geom_offsets,
            ring_offsets,
        })
    }
}

impl<'a> ArrayAccessor<'a> for MultiLineStringArray {
    type Item = MultiLineString<'a>;

    fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        MultiLineString::new(&self.coords, &self.geom_offsets, &self.ring_offsets, index)
    }
}

impl IntoArrow for MultiLineStringArray {
    type ArrowArray = ListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let vertices = Arc::new(self.coords.into_arrow()?);
        let line_strings = Arc::new(wrap_list("vertices", self.ring_offsets, vertices)?);
        wrap_list("linestrings", self.geom_offsets, line_strings)
    }
}
