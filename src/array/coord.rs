use std::sync::Arc;

use arrow_array::{ArrayRef, FixedSizeListArray, Float64Array};
use arrow_buffer::ScalarBuffer;
use arrow_schema::{DataType, Field};

use crate::error::{GeoArrowError, Result};
use crate::scalar::Coord;
use crate::trait_::IntoArrow;

/// A buffer of interleaved XY coordinates: `[x0, y0, x1, y1, ...]`.
///
/// This is the only coordinate layout this crate produces.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordBuffer {
    pub(crate) coords: ScalarBuffer<f64>,
}

impl CoordBuffer {
    /// Construct a new CoordBuffer
    ///
    /// # Errors
    ///
    /// If the number of values is not a multiple of two.
    pub fn try_new(coords: ScalarBuffer<f64>) -> Result<Self> {
        if coords.len() % 2 != 0 {
            return Err(GeoArrowError::Construction(
                "interleaved XY coordinates must have an even number of values".to_string(),
            ));
        }
        Ok(Self { coords })
    }

    /// The number of coordinates in this buffer.
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Whether this buffer contains no coordinates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The coordinate at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn value(&self, i: usize) -> Coord<'_> {
        assert!(i < self.len());
        Coord::new(self, i)
    }

    pub(crate) fn get_x(&self, i: usize) -> f64 {
        self.coords[i * 2]
    }

    pub(crate) fn get_y(&self, i: usize) -> f64 {
        self.coords[i * 2 + 1]
    }

    pub(crate) fn values_field(&self) -> Arc<Field> {
        Field::new("xy", DataType::Float64, false).into()
    }
}

impl IntoArrow for CoordBuffer {
    type ArrowArray = FixedSizeListArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let field = self.values_field();
        let values: ArrayRef = Arc::new(Float64Array::new(self.coords, None));
        Ok(FixedSizeListArray::try_new(field, 2, values, None)?)
    }
}
