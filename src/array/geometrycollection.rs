use std::sync::Arc;

use arrow_array::ListArray;
use arrow_buffer::OffsetBuffer;

use crate::array::{wrap_list, MixedGeometryArray};
use crate::error::{GeoArrowError, Result};
use crate::scalar::GeometryCollection;
use crate::trait_::{ArrayAccessor, IntoArrow};
use crate::util::OffsetBufferUtils;

/// An immutable array of GeometryCollection geometries using GeoArrow's in-memory
/// representation.
///
/// The parts of every collection live in one shared [`MixedGeometryArray`]; `geom_offsets`
/// delimits the slots belonging to each collection.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollectionArray {
    pub(crate) array: MixedGeometryArray,

    /// Offsets into the mixed geometry array where each geometry starts
    pub(crate) geom_offsets: OffsetBuffer<i32>,
}

impl GeometryCollectionArray {
    /// Create a new GeometryCollectionArray from parts
    ///
    /// # Errors
    ///
    /// - if the largest geometry offset does not match the length of the mixed array
    pub fn try_new(array: MixedGeometryArray, geom_offsets: OffsetBuffer<i32>) -> Result<Self> {
        if geom_offsets.last_usize() != array.len() {
            return Err(GeoArrowError::Construction(
                "largest geometry offset must match mixed array length".to_string(),
            ));
        }
        Ok(Self {
            array,
            geom_offsets,
        })
    }

    /// The array holding the parts of every collection.
    pub fn parts(&self) -> &MixedGeometryArray {
        &self.array
    }
}

impl<'a> ArrayAccessor<'a> for GeometryCollectionArray {
    type Item = GeometryCollection<'a>;

    fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        GeometryCollection::new(&self.array, &self.geom_offsets, index)
    }
}

impl IntoArrow for GeometryCollectionArray {
    type ArrowArray = ListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let values = Arc::new(self.array.into_arrow()?);
        wrap_list("geometries", self.geom_offsets, values)
    }
}
