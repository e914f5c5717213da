//! Mutable builders that copy [`geo`] geometries into fresh GeoArrow buffers.
//!
//! Every builder validates its input before writing it: line strings have zero or at least two
//! coordinates, and polygon rings have at least four coordinates and are closed. Coordinates are
//! stored as given, including NaN, which marks an empty point. Offsets are `i32`; exceeding
//! them is a [`GeoArrowError::Overflow`].
//!
//! [`GeoArrowError::Overflow`]: crate::error::GeoArrowError::Overflow

mod coord;
mod geometrycollection;
mod linestring;
mod mixed;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod offsets;
mod point;
mod polygon;

pub use coord::CoordBufferBuilder;
pub use geometrycollection::GeometryCollectionBuilder;
pub use linestring::LineStringBuilder;
pub use mixed::MixedGeometryBuilder;
pub use multilinestring::MultiLineStringBuilder;
pub use multipoint::MultiPointBuilder;
pub use multipolygon::MultiPolygonBuilder;
pub(crate) use offsets::OffsetsBuilder;
pub use point::PointBuilder;
pub use polygon::PolygonBuilder;
