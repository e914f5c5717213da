use crate::array::CoordBuffer;
use crate::scalar::Coord;
use crate::trait_::NativeScalar;
use crate::type_id::GeometryTypeId;

/// An Arrow equivalent of a Point
#[derive(Debug, Clone)]
pub struct Point<'a> {
    coords: &'a CoordBuffer,
    geom_index: usize,
}

impl<'a> Point<'a> {
    pub(crate) fn new(coords: &'a CoordBuffer, geom_index: usize) -> Self {
        Point { coords, geom_index }
    }

    /// The coordinate of this point.
    pub fn coord(&self) -> Coord<'a> {
        self.coords.value(self.geom_index)
    }

    /// The x component of this point.
    pub fn x(&self) -> f64 {
        self.coords.get_x(self.geom_index)
    }

    /// The y component of this point.
    pub fn y(&self) -> f64 {
        self.coords.get_y(self.geom_index)
    }
}

impl NativeScalar for Point<'_> {
    type ScalarGeo = geo::Point;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::Point
    }

    fn is_empty(&self) -> bool {
        self.x().is_nan() && self.y().is_nan()
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::Point::new(self.x(), self.y())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::Point(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        if self.is_empty() {
            geojson::Value::Point(vec![])
        } else {
            geojson::Value::Point(self.coord().to_position())
        }
    }
}

impl_scalar_traits!(Point, geo::Point);

#[cfg(test)]
mod test {
    use super::*;
    use crate::builder::PointBuilder;
    use crate::test::point::{p0, point_array};
    use crate::trait_::ArrayAccessor;

    #[test]
    fn values() {
        let arr = point_array();
        let point = arr.value(0).unwrap();
        assert_eq!(point.x(), 0.);
        assert_eq!(point.y(), 1.);
        assert_eq!(point.geometry_type(), GeometryTypeId::Point);
        assert!(!point.is_empty());
        assert_eq!(point, p0());
    }

    #[test]
    fn geojson() {
        let arr = point_array();
        let point = arr.value(1).unwrap();
        assert_eq!(point.to_geojson_value(), geojson::Value::Point(vec![1., 2.]));
    }

    #[test]
    fn empty_point() {
        let mut builder = PointBuilder::new();
        builder.push_point(&p0());
        builder.push_empty();
        builder.push_point(&geo::Point::new(f64::NAN, 1.));
        let arr = builder.finish();

        let empty = arr.value(1).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.to_geojson_value(), geojson::Value::Point(vec![]));

        // Only a point with both coordinates NaN is empty
        let half = arr.value(2).unwrap();
        assert!(!half.is_empty());
        assert!(!arr.value(0).unwrap().is_empty());
    }
}
