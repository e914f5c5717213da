use crate::scalar::*;
use crate::trait_::NativeScalar;
use crate::type_id::GeometryTypeId;

/// A Geometry is an enum over the various underlying _zero copy_ GeoArrow scalar types.
///
/// This is what a heterogeneous part of a [`GeometryCollection`] materializes into. The variant
/// always matches the type id stored for that part.
#[derive(Debug, Clone)]
pub enum Geometry<'a> {
    /// A Point
    Point(Point<'a>),
    /// A LineString
    LineString(LineString<'a>),
    /// A Polygon
    Polygon(Polygon<'a>),
    /// A MultiPoint
    MultiPoint(MultiPoint<'a>),
    /// A MultiLineString
    MultiLineString(MultiLineString<'a>),
    /// A MultiPolygon
    MultiPolygon(MultiPolygon<'a>),
    /// A nested GeometryCollection
    GeometryCollection(GeometryCollection<'a>),
}

impl<'a> Geometry<'a> {
    /// The nested collection, if this is one.
    pub fn as_geometry_collection(&self) -> Option<&GeometryCollection<'a>> {
        match self {
            Geometry::GeometryCollection(gc) => Some(gc),
            _ => None,
        }
    }
}

impl NativeScalar for Geometry<'_> {
    type ScalarGeo = geo::Geometry;

    fn geometry_type(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(g) => g.geometry_type(),
            Geometry::LineString(g) => g.geometry_type(),
            Geometry::Polygon(g) => g.geometry_type(),
            Geometry::MultiPoint(g) => g.geometry_type(),
            Geometry::MultiLineString(g) => g.geometry_type(),
            Geometry::MultiPolygon(g) => g.geometry_type(),
            Geometry::GeometryCollection(g) => g.geometry_type(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        match self {
            Geometry::Point(g) => g.to_geo_geometry(),
            Geometry::LineString(g) => g.to_geo_geometry(),
            Geometry::Polygon(g) => g.to_geo_geometry(),
            Geometry::MultiPoint(g) => g.to_geo_geometry(),
            Geometry::MultiLineString(g) => g.to_geo_geometry(),
            Geometry::MultiPolygon(g) => g.to_geo_geometry(),
            Geometry::GeometryCollection(g) => g.to_geo_geometry(),
        }
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        self.to_geo()
    }

    fn to_geojson_value(&self) -> geojson::Value {
        match self {
            Geometry::Point(g) => g.to_geojson_value(),
            Geometry::LineString(g) => g.to_geojson_value(),
            Geometry::Polygon(g) => g.to_geojson_value(),
            Geometry::MultiPoint(g) => g.to_geojson_value(),
            Geometry::MultiLineString(g) => g.to_geojson_value(),
            Geometry::MultiPolygon(g) => g.to_geojson_value(),
            Geometry::GeometryCollection(g) => g.to_geojson_value(),
        }
    }
}

impl_scalar_traits!(Geometry, geo::Geometry);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::mixed_array;
    use crate::trait_::ArrayAccessor;

    #[test]
    fn variants_follow_type_ids() {
        let arr = mixed_array();
        let types = arr
            .iter_values()
            .map(|g| g.geometry_type())
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![
                GeometryTypeId::Point,
                GeometryTypeId::LineString,
                GeometryTypeId::Polygon,
                GeometryTypeId::MultiPoint,
                GeometryTypeId::Point,
            ]
        );
        assert!(matches!(arr.value(1).unwrap(), Geometry::LineString(_)));
        assert!(arr.value(0).unwrap().as_geometry_collection().is_none());
    }

    #[test]
    fn equality_across_variants() {
        let arr = mixed_array();
        let point = arr.value(0).unwrap();
        assert_eq!(point, arr.value(4).unwrap());
        assert_ne!(point, arr.value(1).unwrap());
        assert_eq!(point, geo::Geometry::Point(geo::Point::new(51., -1.)));
    }
}
