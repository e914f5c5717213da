//! Conversion from GeoJSON geometry objects into [`geo`] geometries.
//!
//! Export goes the other way through [`NativeScalar::to_geojson`][crate::trait_::NativeScalar].

use geojson::{Position, Value};

use crate::error::{GeoArrowError, Result};

/// The GeoJSON `type` member for a geometry value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Convert a GeoJSON geometry into a [`geo::Geometry`], recursing into collections.
///
/// An empty Point position becomes the empty point, with NaN coordinates.
///
/// # Errors
///
/// - [`GeoArrowError::IncorrectType`] if a position does not have exactly two values
/// - [`GeoArrowError::Construction`] if a polygon ring is not closed
pub(crate) fn geometry_to_geo(geom: &geojson::Geometry) -> Result<geo::Geometry> {
    value_to_geo(&geom.value)
}

fn value_to_geo(value: &Value) -> Result<geo::Geometry> {
    let geom = match value {
        Value::Point(position) if position.is_empty() => {
            geo::Geometry::Point(geo::Point::new(f64::NAN, f64::NAN))
        }
        Value::Point(position) => geo::Geometry::Point(to_coord(position)?.into()),
        Value::MultiPoint(positions) => geo::Geometry::MultiPoint(geo::MultiPoint::new(
            positions
                .iter()
                .map(|p| to_coord(p).map(geo::Point::from))
                .collect::<Result<_>>()?,
        )),
        Value::LineString(positions) => geo::Geometry::LineString(to_line_string(positions)?),
        Value::MultiLineString(lines) => geo::Geometry::MultiLineString(geo::MultiLineString::new(
            lines
                .iter()
                .map(|l| to_line_string(l))
                .collect::<Result<_>>()?,
        )),
        Value::Polygon(rings) => geo::Geometry::Polygon(to_polygon(rings)?),
        Value::MultiPolygon(polygons) => geo::Geometry::MultiPolygon(geo::MultiPolygon::new(
            polygons
                .iter()
                .map(|p| to_polygon(p))
                .collect::<Result<_>>()?,
        )),
        Value::GeometryCollection(geoms) => geo::Geometry::GeometryCollection(
            geo::GeometryCollection(
                geoms
                    .iter()
                    .map(geometry_to_geo)
                    .collect::<Result<_>>()?,
            ),
        ),
    };
    Ok(geom)
}

fn to_coord(position: &Position) -> Result<geo::Coord> {
    match position.as_slice() {
        [x, y] => Ok(geo::Coord { x: *x, y: *y }),
        other => Err(GeoArrowError::IncorrectType(
            format!("expected an XY position, got {} values", other.len()).into(),
        )),
    }
}

fn to_line_string(positions: &[Position]) -> Result<geo::LineString> {
    Ok(geo::LineString::new(
        positions.iter().map(to_coord).collect::<Result<_>>()?,
    ))
}

fn to_polygon(rings: &[Vec<Position>]) -> Result<geo::Polygon> {
    let mut rings = rings
        .iter()
        .map(|ring| {
            let ring = to_line_string(ring)?;
            if !ring.is_closed() {
                return Err(GeoArrowError::Construction(
                    "polygon ring is not closed".to_string(),
                ));
            }
            Ok(ring)
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter();
    let exterior = rings
        .next()
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    Ok(geo::Polygon::new(exterior, rings.collect()))
}
