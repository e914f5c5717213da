use arrow_array::FixedSizeListArray;

use crate::array::CoordBuffer;
use crate::error::Result;
use crate::scalar::Point;
use crate::trait_::{ArrayAccessor, IntoArrow};

/// An immutable array of Point geometries using GeoArrow's in-memory representation.
#[derive(Debug, Clone, PartialEq)]
pub struct PointArray {
    pub(crate) coords: CoordBuffer,
}

impl PointArray {
    /// Create a new PointArray from parts
    ///
    /// # Implementation
    ///
    /// This function is `O(1)`.
    pub fn new(coords: CoordBuffer) -> Self {
        Self { coords }
    }
}

impl<'a> ArrayAccessor<'a> for PointArray {
    type Item = Point<'a>;

    fn len(&self) -> usize {
        self.coords.len()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        Point::new(&self.coords, index)
    }
}

impl IntoArrow for PointArray {
    type ArrowArray = FixedSizeListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        self.coords.into_arrow()
    }
}
