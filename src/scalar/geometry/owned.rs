use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array::MixedGeometryArray;
use crate::builder::MixedGeometryBuilder;
use crate::capacity::MixedCapacity;
use crate::error::{GeoArrowError, Result};
use crate::io::geojson::geometry_to_geo;
use crate::scalar::Geometry;
use crate::trait_::{ArrayAccessor, NativeScalar};
use crate::type_id::GeometryTypeId;

/// A single geometry of any variant that owns its buffers.
#[derive(Clone, Debug)]
pub struct OwnedGeometry {
    array: MixedGeometryArray,
    geom_index: usize,
}

impl OwnedGeometry {
    /// Copy a [`geo::Geometry`] into native buffers.
    ///
    /// `Line` is stored as a LineString; `Rect` and `Triangle` are stored as Polygons.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::Construction`] if the geometry has no valid native
    /// representation.
    pub fn try_from_geo(geom: &geo::Geometry) -> Result<Self> {
        let mut capacity = MixedCapacity::default();
        capacity.add_geometry(geom);
        let mut builder = MixedGeometryBuilder::with_capacity(capacity);
        builder.push_geometry(geom)?;
        Ok(Self {
            array: builder.finish(),
            geom_index: 0,
        })
    }

    /// A zero-copy view onto this geometry.
    pub fn value(&self) -> Geometry<'_> {
        unsafe { self.array.value_unchecked(self.geom_index) }
    }
}

impl TryFrom<&geo::Geometry> for OwnedGeometry {
    type Error = GeoArrowError;

    fn try_from(value: &geo::Geometry) -> Result<Self> {
        Self::try_from_geo(value)
    }
}

impl TryFrom<&geojson::Geometry> for OwnedGeometry {
    type Error = GeoArrowError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        Self::try_from_geo(&geometry_to_geo(value)?)
    }
}

impl NativeScalar for OwnedGeometry {
    type ScalarGeo = geo::Geometry;

    fn geometry_type(&self) -> GeometryTypeId {
        self.value().geometry_type()
    }

    fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.value().to_geo()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        self.to_geo()
    }

    fn to_geojson_value(&self) -> geojson::Value {
        self.value().to_geojson_value()
    }
}

impl PartialEq for OwnedGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl PartialEq<geo::Geometry> for OwnedGeometry {
    fn eq(&self, other: &geo::Geometry) -> bool {
        self.value() == *other
    }
}

impl Serialize for OwnedGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OwnedGeometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let geom = geojson::Geometry::deserialize(deserializer)?;
        Self::try_from(&geom).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{line_string, point, Rect};
    use serde_json::json;

    #[test]
    fn coerced_inputs() {
        let line = geo::Geometry::Line(geo::Line::new((0., 0.), (1., 1.)));
        let owned = OwnedGeometry::try_from_geo(&line).unwrap();
        assert_eq!(owned.geometry_type(), GeometryTypeId::LineString);
        assert_eq!(
            owned,
            geo::Geometry::LineString(line_string![(x: 0., y: 0.), (x: 1., y: 1.)])
        );

        let rect = geo::Geometry::Rect(Rect::new((0., 0.), (1., 1.)));
        let owned = OwnedGeometry::try_from(&rect).unwrap();
        assert_eq!(owned.geometry_type(), GeometryTypeId::Polygon);
        match owned.value() {
            Geometry::Polygon(p) => assert_eq!(p.exterior().unwrap().num_coords(), 5),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn serde_round_trip() {
        let owned = OwnedGeometry::try_from_geo(&point!(x: 51., y: -1.).into()).unwrap();
        let value = serde_json::to_value(&owned).unwrap();
        assert_eq!(value, json!({"type": "Point", "coordinates": [51.0, -1.0]}));
        let back: OwnedGeometry = serde_json::from_value(value).unwrap();
        assert_eq!(back, owned);
    }

    #[test]
    fn empty_geometries() {
        let empty = geo::Geometry::LineString(geo::LineString::new(vec![]));
        let owned = OwnedGeometry::try_from_geo(&empty).unwrap();
        assert!(owned.is_empty());

        let point = OwnedGeometry::try_from_geo(&point!(x: 0., y: 0.).into()).unwrap();
        assert!(!point.is_empty());
    }
}
