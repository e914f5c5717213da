//! GeoArrow scalars: zero-copy views onto a single geometry of an array.
//!
//! A scalar borrows the buffers of the array it was read from, so it can never outlive that
//! array. Owned handles ([`OwnedGeometry`], [`OwnedGeometryCollection`]) wrap a one-row array
//! and hand out scalars borrowing from themselves.

/// Value equality (through the [`geo`] representation) and GeoJSON serialization for a scalar.
macro_rules! impl_scalar_traits {
    ($scalar:ident, $geo:ty) => {
        impl PartialEq for $scalar<'_> {
            fn eq(&self, other: &Self) -> bool {
                $crate::trait_::NativeScalar::to_geo(self)
                    == $crate::trait_::NativeScalar::to_geo(other)
            }
        }

        impl PartialEq<$geo> for $scalar<'_> {
            fn eq(&self, other: &$geo) -> bool {
                $crate::trait_::NativeScalar::to_geo(self) == *other
            }
        }

        impl serde::Serialize for $scalar<'_> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(
                    &$crate::trait_::NativeScalar::to_geojson(self),
                    serializer,
                )
            }
        }
    };
}

pub use coord::Coord;
pub use geometry::{Geometry, OwnedGeometry};
pub use geometrycollection::{
    CollectionInput, GeometryCollection, GeometryCollectionIterator, GeometrySequence,
    OwnedGeometryCollection,
};
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
