use std::sync::Arc;

use arrow_array::ListArray;
use arrow_buffer::OffsetBuffer;

use crate::array::{wrap_list, CoordBuffer};
use crate::error::{GeoArrowError, Result};
use crate::scalar::MultiPolygon;
use crate::trait_::{ArrayAccessor, IntoArrow};
use crate::util::OffsetBufferUtils;

/// An immutable array of MultiPolygon geometries using GeoArrow's in-memory representation.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygonArray {
    pub(crate) coords: CoordBuffer,

    /// Offsets into the polygon array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,

    /// Offsets into the ring array where each polygon starts
    pub(crate) polygon_offsets: OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each ring starts
    pub(crate) ring_offsets: OffsetBuffer<i32>,
}

impl MultiPolygonArray {
    /// Create a new MultiPolygonArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest ring offset does not match the number of coordinates
    /// - if the largest polygon offset does not match the size of ring offsets
    /// - if the largest geometry offset does not match the size of polygon offsets
    pub fn try_new(
        coords: CoordBuffer,
        geom_offsets: OffsetBuffer<i32>,
        polygon_offsets: OffsetBuffer<i32>,
        ring_offsets: OffsetBuffer<i32>,
    ) -> Result<Self> {
        if ring_offsets.last_usize() != coords.len() {
            return Err(GeoArrowError::Construction(
                "largest ring offset must match coords length".to_string(),
            ));
        }
        if polygon_offsets.last_usize() != ring_offsets.len_proxy() {
            return Err(GeoArrowError::Construction(
                "largest polygon offset must match ring offsets length".to_string(),
            ));
        }
        if geom_offsets.last_usize() != polygon_offsets.len_proxy() {
            return Err(GeoArrowError::Construction(
                "largest geometry offset must match polygon offsets length".to_string(),
            ));
        }
        Ok(Self {
            coords,
            geom_offsets,
            polygon_offsets,
            ring_offsets,
        })
    }
}

impl<'a> ArrayAccessor<'a> for MultiPolygonArray {
    type Item = MultiPolygon<'a>;

    fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        MultiPolygon::new(
            &self.coords,
            &self.geom_offsets,
            &self.polygon_offsets,
            &self.ring_offsets,
            index,
        )
    }
}

impl IntoArrow for MultiPolygonArray {
    type ArrowArray = ListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let vertices = Arc::new(self.coords.into_arrow()?);
        let rings = Arc::new(wrap_list("vertices", self.ring_offsets, vertices)?);
        let polygons = Arc::new(wrap_list("rings", self.polygon_offsets, rings)?);
        wrap_list("polygons", self.geom_offsets, polygons)
    }
}
