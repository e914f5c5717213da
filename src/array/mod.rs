//! Implementations of immutable GeoArrow arrays plus builders to more easily create arrays.
//!
//! These arrays are the native storage every scalar in [`crate::scalar`] borrows from. All
//! arrays use interleaved XY coordinates and `i32` offsets.

pub use coord::CoordBuffer;
pub use geometrycollection::GeometryCollectionArray;
pub use linestring::LineStringArray;
pub use mixed::MixedGeometryArray;
pub use multilinestring::MultiLineStringArray;
pub use multipoint::MultiPointArray;
pub use multipolygon::MultiPolygonArray;
pub use point::PointArray;
pub use polygon::PolygonArray;

mod coord;
mod geometrycollection;
mod linestring;
mod mixed;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::sync::Arc;

use arrow_array::{Array, ArrayRef, ListArray};
use arrow_buffer::OffsetBuffer;
use arrow_schema::Field;

use crate::error::Result;

/// Wrap `values` in a list array named `name`.
pub(crate) fn wrap_list(
    name: &str,
    offsets: OffsetBuffer<i32>,
    values: ArrayRef,
) -> Result<ListArray> {
    let field = Arc::new(Field::new(name, values.data_type().clone(), true));
    Ok(ListArray::try_new(field, offsets, values, None)?)
}
