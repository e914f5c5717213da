//! Counters for managing buffer lengths for each geometry array type.
//!
//! The most memory-efficient way to construct an array from a set of geometries is to make a
//! first pass over these geometries to count exactly how big each underlying buffer of the Arrow
//! array must be, allocate _once_ for exactly what you need, and then fill those buffers in a
//! second pass. Capacity counters help with this process.

mod geometrycollection;
mod linestring;
mod mixed;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod polygon;

pub use geometrycollection::GeometryCollectionCapacity;
pub use linestring::LineStringCapacity;
pub use mixed::MixedCapacity;
pub use multilinestring::MultiLineStringCapacity;
pub use multipoint::MultiPointCapacity;
pub use multipolygon::MultiPolygonCapacity;
pub use polygon::PolygonCapacity;
