//! Contains helpers for working with GeoArrow type ids.
//!
//! Every native geometry variant is identified by a small integer tag. The tags match the 2D
//! geometry type ids defined in the GeoArrow specification (which in turn match ISO WKB):
//! <https://geoarrow.org/format.html#geometry>
//!
//! The set of variants is closed. Mapping a tag to the scalar type that wraps it happens in
//! [`MixedGeometryArray`][crate::array::MixedGeometryArray] with an exhaustive match over
//! [`GeometryTypeId`], so there is no registration step.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::{GeoArrowError, Result};

/// The GeoArrow type id of a geometry variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i8)]
pub enum GeometryTypeId {
    /// A single point.
    Point = 1,
    /// A sequence of two or more points.
    LineString = 2,
    /// An exterior ring with zero or more interior rings.
    Polygon = 3,
    /// A collection of points.
    MultiPoint = 4,
    /// A collection of line strings.
    MultiLineString = 5,
    /// A collection of polygons.
    MultiPolygon = 6,
    /// A heterogeneous collection of any of the above, including other collections.
    GeometryCollection = 7,
}

static TYPE_IDS_BY_NAME: phf::Map<&'static str, GeometryTypeId> = phf_map! {
    "Point" => GeometryTypeId::Point,
    "LineString" => GeometryTypeId::LineString,
    "Polygon" => GeometryTypeId::Polygon,
    "MultiPoint" => GeometryTypeId::MultiPoint,
    "MultiLineString" => GeometryTypeId::MultiLineString,
    "MultiPolygon" => GeometryTypeId::MultiPolygon,
    "GeometryCollection" => GeometryTypeId::GeometryCollection,
};

impl GeometryTypeId {
    /// All variants, in type id order.
    pub const ALL: [GeometryTypeId; 7] = [
        GeometryTypeId::Point,
        GeometryTypeId::LineString,
        GeometryTypeId::Polygon,
        GeometryTypeId::MultiPoint,
        GeometryTypeId::MultiLineString,
        GeometryTypeId::MultiPolygon,
        GeometryTypeId::GeometryCollection,
    ];

    /// Resolve a raw type id.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::UnknownVariant`] if `tag` is not one of the seven 2D type ids.
    pub fn try_from_tag(tag: i8) -> Result<Self> {
        Self::try_from(tag).map_err(|err| GeoArrowError::UnknownVariant(err.number))
    }

    /// The raw type id.
    pub fn tag(&self) -> i8 {
        (*self).into()
    }

    /// The name of this geometry type, as used by GeoJSON and the OGC simple features model.
    pub const fn name(&self) -> &'static str {
        match self {
            GeometryTypeId::Point => "Point",
            GeometryTypeId::LineString => "LineString",
            GeometryTypeId::Polygon => "Polygon",
            GeometryTypeId::MultiPoint => "MultiPoint",
            GeometryTypeId::MultiLineString => "MultiLineString",
            GeometryTypeId::MultiPolygon => "MultiPolygon",
            GeometryTypeId::GeometryCollection => "GeometryCollection",
        }
    }

    /// Look up a geometry type by its name. Matching is case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        TYPE_IDS_BY_NAME.get(name).copied()
    }

    /// Whether geometries of this type are made of parts.
    pub const fn is_multipart(&self) -> bool {
        matches!(
            self,
            GeometryTypeId::MultiPoint
                | GeometryTypeId::MultiLineString
                | GeometryTypeId::MultiPolygon
                | GeometryTypeId::GeometryCollection
        )
    }
}

impl std::fmt::Display for GeometryTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
