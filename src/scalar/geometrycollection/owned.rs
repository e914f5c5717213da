use arrow_buffer::OffsetBuffer;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::array::{GeometryCollectionArray, MixedGeometryArray};
use crate::builder::GeometryCollectionBuilder;
use crate::capacity::GeometryCollectionCapacity;
use crate::error::{GeoArrowError, Result};
use crate::io::geojson::{geometry_to_geo, value_type_name};
use crate::scalar::{Geometry, GeometryCollection, GeometrySequence};
use crate::trait_::{MultipartGeometry, NativeScalar};
use crate::type_id::GeometryTypeId;

/// The input accepted when constructing an [`OwnedGeometryCollection`].
///
/// Conversions exist from `Option<&geo::Geometry>`, `&geo::Geometry` and slices or vectors of
/// geometries, so most callers pass their value directly to
/// [`OwnedGeometryCollection::try_new`].
#[derive(Debug, Clone, Copy)]
pub enum CollectionInput<'a> {
    /// No input at all. Produces the empty collection.
    Absent,
    /// A single geometry. Multipart geometries are split into their parts; an empty geometry
    /// gives the empty collection.
    Single(&'a geo::Geometry),
    /// An ordered list of geometries, each of which becomes exactly one part.
    Sequence(&'a [geo::Geometry]),
}

impl<'a> From<Option<&'a geo::Geometry>> for CollectionInput<'a> {
    fn from(value: Option<&'a geo::Geometry>) -> Self {
        match value {
            Some(geom) => Self::Single(geom),
            None => Self::Absent,
        }
    }
}

impl<'a> From<&'a geo::Geometry> for CollectionInput<'a> {
    fn from(value: &'a geo::Geometry) -> Self {
        Self::Single(value)
    }
}

impl<'a> From<&'a [geo::Geometry]> for CollectionInput<'a> {
    fn from(value: &'a [geo::Geometry]) -> Self {
        Self::Sequence(value)
    }
}

impl<'a> From<&'a Vec<geo::Geometry>> for CollectionInput<'a> {
    fn from(value: &'a Vec<geo::Geometry>) -> Self {
        Self::Sequence(value.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [geo::Geometry; N]> for CollectionInput<'a> {
    fn from(value: &'a [geo::Geometry; N]) -> Self {
        Self::Sequence(value.as_slice())
    }
}

/// A geometry collection that owns its buffers.
///
/// Cloning is cheap: the underlying Arrow buffers are reference counted and immutable, so
/// clones share them. The buffers are released when the last clone is dropped.
#[derive(Clone, Debug)]
pub struct OwnedGeometryCollection {
    array: MixedGeometryArray,

    /// Offsets into the geometry array where each geometry starts
    geom_offsets: OffsetBuffer<i32>,

    geom_index: usize,
}

impl OwnedGeometryCollection {
    fn from_array(array: GeometryCollectionArray) -> Self {
        Self {
            array: array.array,
            geom_offsets: array.geom_offsets,
            geom_index: 0,
        }
    }

    /// Create a new collection, normalizing the input.
    ///
    /// - absent input, or an empty list, gives the empty collection;
    /// - a single geometry is passed through [`split`][Self::split]: an empty geometry gives
    ///   the empty collection, a multipart geometry contributes its parts, anything else
    ///   becomes a one-part collection;
    /// - a non-empty list is used as is, one part per element, even when an element is itself
    ///   multipart.
    ///
    /// Parts are copied; the result never aliases the input.
    ///
    /// ```
    /// use geoarrow_collection::scalar::OwnedGeometryCollection;
    ///
    /// let multi = geo::Geometry::MultiPoint(vec![(0., 0.), (1., 1.)].into());
    /// let split = OwnedGeometryCollection::try_new(&multi).unwrap();
    /// assert_eq!(split.num_geometries(), 2);
    ///
    /// let kept = OwnedGeometryCollection::try_new(&vec![multi]).unwrap();
    /// assert_eq!(kept.num_geometries(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`GeoArrowError::Construction`] if any part has no valid native representation
    /// - [`GeoArrowError::Overflow`] if the parts do not fit in `i32` offsets
    pub fn try_new<'a>(input: impl Into<CollectionInput<'a>>) -> Result<Self> {
        match input.into() {
            CollectionInput::Absent => {
                debug!("absent input, building empty geometry collection");
                Ok(Self::empty())
            }
            CollectionInput::Sequence([]) => {
                debug!("empty input list, building empty geometry collection");
                Ok(Self::empty())
            }
            CollectionInput::Single(geom) => Self::split(geom),
            CollectionInput::Sequence(geoms) => Self::from_geometries(geoms),
        }
    }

    /// The collection with zero parts.
    pub fn empty() -> Self {
        let mut builder = GeometryCollectionBuilder::new();
        builder.push_empty();
        Self::from_array(builder.finish())
    }

    /// Create a collection from the parts of a single geometry.
    ///
    /// MultiPoint, MultiLineString, MultiPolygon and GeometryCollection inputs are split into
    /// their parts (one level only). Any other geometry becomes the sole part. An empty
    /// geometry gives the empty collection.
    pub fn split(geom: &geo::Geometry) -> Result<Self> {
        if is_empty_geometry(geom) {
            debug!("empty single geometry, building empty geometry collection");
            return Ok(Self::empty());
        }
        let parts: Vec<geo::Geometry> = match geom {
            geo::Geometry::MultiPoint(mp) => {
                mp.iter().map(|p| geo::Geometry::Point(*p)).collect()
            }
            geo::Geometry::MultiLineString(mls) => mls
                .iter()
                .map(|ls| geo::Geometry::LineString(ls.clone()))
                .collect(),
            geo::Geometry::MultiPolygon(mp) => mp
                .iter()
                .map(|p| geo::Geometry::Polygon(p.clone()))
                .collect(),
            geo::Geometry::GeometryCollection(gc) => {
                debug!("splitting geometry collection into {} parts", gc.0.len());
                return Self::from_geometries(&gc.0);
            }
            _ => {
                debug!("wrapping single-part geometry in a one-part collection");
                return Self::from_geometries(std::slice::from_ref(geom));
            }
        };
        debug!("splitting multipart geometry into {} parts", parts.len());
        Self::from_geometries(&parts)
    }

    /// Create a collection with one part per input geometry, in order. Nothing is flattened.
    pub fn from_geometries(geoms: &[geo::Geometry]) -> Result<Self> {
        let capacity = GeometryCollectionCapacity::from_geometry_collections(std::iter::once(geoms));
        let mut builder = GeometryCollectionBuilder::with_capacity(capacity);
        builder.push_geometries(geoms)?;
        debug!("built geometry collection with {} parts", geoms.len());
        Ok(Self::from_array(builder.finish()))
    }

    /// A zero-copy view onto this collection.
    pub fn as_scalar(&self) -> GeometryCollection<'_> {
        GeometryCollection::new(&self.array, &self.geom_offsets, self.geom_index)
    }

    /// The parts of this collection as a lazy sequence borrowing this handle.
    pub fn geoms(&self) -> GeometrySequence<'_> {
        self.as_scalar().geoms()
    }

    /// The number of parts.
    pub fn num_geometries(&self) -> usize {
        self.as_scalar().num_geometries()
    }

    /// The part at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if `index >= self.num_geometries()`.
    pub fn geometry(&self, index: usize) -> Result<Geometry<'_>> {
        self.geoms().get(index)
    }

    /// Serialize this collection to a GeoJSON geometry string.
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a collection from a GeoJSON geometry string.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IncorrectType`] if the string describes any other kind of
    /// geometry.
    pub fn from_geojson_str(s: &str) -> Result<Self> {
        let geom: geojson::Geometry = serde_json::from_str(s)?;
        Self::try_from(&geom)
    }
}

/// Whether a geometry has no coordinates. Multipart geometries are empty when every part is.
fn is_empty_geometry(geom: &geo::Geometry) -> bool {
    match geom {
        geo::Geometry::Point(p) => p.x().is_nan() && p.y().is_nan(),
        geo::Geometry::LineString(ls) => ls.0.is_empty(),
        geo::Geometry::Polygon(p) => p.exterior().0.is_empty() && p.interiors().is_empty(),
        geo::Geometry::MultiPoint(mp) => mp.iter().all(|p| p.x().is_nan() && p.y().is_nan()),
        geo::Geometry::MultiLineString(mls) => mls.iter().all(|ls| ls.0.is_empty()),
        geo::Geometry::MultiPolygon(mp) => mp
            .iter()
            .all(|p| p.exterior().0.is_empty() && p.interiors().is_empty()),
        geo::Geometry::GeometryCollection(gc) => gc.0.iter().all(is_empty_geometry),
        geo::Geometry::Line(_) | geo::Geometry::Rect(_) | geo::Geometry::Triangle(_) => false,
    }
}

impl Default for OwnedGeometryCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<GeometryCollection<'a>> for OwnedGeometryCollection {
    fn from(value: GeometryCollection<'a>) -> Self {
        Self {
            array: value.array.clone(),
            geom_offsets: value.geom_offsets.clone(),
            geom_index: value.geom_index,
        }
    }
}

impl TryFrom<&geo::GeometryCollection> for OwnedGeometryCollection {
    type Error = GeoArrowError;

    fn try_from(value: &geo::GeometryCollection) -> Result<Self> {
        Self::from_geometries(&value.0)
    }
}

impl TryFrom<&geojson::Geometry> for OwnedGeometryCollection {
    type Error = GeoArrowError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        match geometry_to_geo(value)? {
            geo::Geometry::GeometryCollection(gc) => Self::from_geometries(&gc.0),
            _ => Err(GeoArrowError::IncorrectType(
                format!(
                    "expected a GeometryCollection, got {}",
                    value_type_name(&value.value)
                )
                .into(),
            )),
        }
    }
}

impl NativeScalar for OwnedGeometryCollection {
    type ScalarGeo = geo::GeometryCollection;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::GeometryCollection
    }

    fn is_empty(&self) -> bool {
        self.num_geometries() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        self.as_scalar().to_geo()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        self.as_scalar().to_geo_geometry()
    }

    fn to_geojson_value(&self) -> geojson::Value {
        self.as_scalar().to_geojson_value()
    }
}

impl MultipartGeometry for OwnedGeometryCollection {
    type PartType<'b> = Geometry<'b>;

    fn num_parts(&self) -> usize {
        self.num_geometries()
    }

    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_> {
        self.as_scalar().part_unchecked(i)
    }
}

impl PartialEq for OwnedGeometryCollection {
    fn eq(&self, other: &Self) -> bool {
        self.as_scalar() == other.as_scalar()
    }
}

impl PartialEq<geo::GeometryCollection> for OwnedGeometryCollection {
    fn eq(&self, other: &geo::GeometryCollection) -> bool {
        self.as_scalar() == *other
    }
}

impl Serialize for OwnedGeometryCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.as_scalar().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OwnedGeometryCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let geom = geojson::Geometry::deserialize(deserializer)?;
        Self::try_from(&geom).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::OwnedGeometry;
    use crate::test::geometrycollection::{gc0, gc1};
    use geo::{line_string, point, polygon};
    use serde_json::json;

    fn example_parts() -> Vec<geo::Geometry> {
        vec![
            geo::Geometry::Point(point!(x: 51., y: -1.)),
            geo::Geometry::LineString(line_string![(x: 52., y: -1.), (x: 49., y: 2.)]),
        ]
    }

    #[test]
    fn parts_match_input() {
        let parts = example_parts();
        let gc = OwnedGeometryCollection::try_new(&parts).unwrap();
        assert_eq!(gc.geoms().len(), parts.len());
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(gc.geoms().get(i).unwrap(), *part);
        }
        assert_eq!(gc, gc0());
    }

    #[test]
    fn absent_and_empty_list_are_empty() {
        let absent = OwnedGeometryCollection::try_new(CollectionInput::Absent).unwrap();
        let none = OwnedGeometryCollection::try_new(None::<&geo::Geometry>).unwrap();
        let empty_list = OwnedGeometryCollection::try_new(&Vec::<geo::Geometry>::new()).unwrap();
        assert!(absent.is_empty());
        assert_eq!(absent.geoms().len(), 0);
        assert_eq!(absent, empty_list);
        assert_eq!(absent, none);
        assert_eq!(absent, OwnedGeometryCollection::empty());
        assert_eq!(absent, OwnedGeometryCollection::default());
        assert_eq!(absent.geometry_type(), GeometryTypeId::GeometryCollection);
    }

    #[test]
    fn single_multipart_is_split() {
        let lines = vec![
            line_string![(x: 0., y: 0.), (x: 1., y: 1.)],
            line_string![(x: 2., y: 2.), (x: 3., y: 3.)],
        ];
        let mls = geo::Geometry::MultiLineString(geo::MultiLineString::new(lines.clone()));
        let gc = OwnedGeometryCollection::try_new(&mls).unwrap();
        assert_eq!(gc.num_geometries(), 2);
        for (i, line) in lines.into_iter().enumerate() {
            assert_eq!(gc.geometry(i).unwrap(), geo::Geometry::LineString(line));
        }

        let nested = geo::Geometry::GeometryCollection(gc1());
        let gc = OwnedGeometryCollection::try_new(&nested).unwrap();
        assert_eq!(gc.num_geometries(), 3);
        assert_eq!(gc, gc1());
    }

    #[test]
    fn single_part_is_wrapped() {
        let point = geo::Geometry::Point(point!(x: 1., y: 2.));
        let gc = OwnedGeometryCollection::try_new(Some(&point)).unwrap();
        assert_eq!(gc.num_geometries(), 1);
        assert_eq!(gc.geometry(0).unwrap(), point);
    }

    #[test]
    fn single_empty_geometry_is_empty() {
        let empties = [
            geo::Geometry::LineString(geo::LineString::new(vec![])),
            geo::Geometry::Polygon(geo::Polygon::new(geo::LineString::new(vec![]), vec![])),
            geo::Geometry::Point(point!(x: f64::NAN, y: f64::NAN)),
            geo::Geometry::MultiPoint(geo::MultiPoint::new(vec![])),
            geo::Geometry::MultiLineString(geo::MultiLineString::new(vec![])),
            geo::Geometry::MultiPolygon(geo::MultiPolygon::new(vec![])),
            geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![])),
        ];
        for geom in &empties {
            let gc = OwnedGeometryCollection::try_new(geom).unwrap();
            assert!(gc.is_empty());
            assert_eq!(gc.num_geometries(), 0);
            assert_eq!(gc, OwnedGeometryCollection::empty());
        }

        // A list holding an empty geometry keeps it as a part
        let gc = OwnedGeometryCollection::try_new(&empties[..1]).unwrap();
        assert_eq!(gc.num_geometries(), 1);
        assert!(gc.geometry(0).unwrap().is_empty());
    }

    #[test]
    fn list_elements_are_not_flattened() {
        let mp = geo::Geometry::MultiPoint(vec![(0., 0.), (1., 1.), (2., 2.)].into());
        let gc = OwnedGeometryCollection::try_new(&[mp.clone()]).unwrap();
        assert_eq!(gc.num_geometries(), 1);
        let part = gc.geometry(0).unwrap();
        assert_eq!(part.geometry_type(), GeometryTypeId::MultiPoint);
        assert_eq!(part, mp);
    }

    #[test]
    fn out_of_range() {
        let empty = OwnedGeometryCollection::empty();
        assert!(matches!(
            empty.geoms().get(0).unwrap_err(),
            GeoArrowError::IndexOutOfRange { index: 0, len: 0 }
        ));

        let gc = OwnedGeometryCollection::try_new(&example_parts()).unwrap();
        assert!(matches!(
            gc.geoms().get(2).unwrap_err(),
            GeoArrowError::IndexOutOfRange { index: 2, len: 2 }
        ));
        assert!(gc.part(2).is_err());
    }

    #[test]
    fn repeated_access_is_stable() {
        let gc = OwnedGeometryCollection::try_new(&example_parts()).unwrap();
        assert_eq!(gc.is_empty(), gc.is_empty());
        let first = gc.geoms().iter().collect::<Vec<_>>();
        let second = gc.geoms().iter().collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn heterogeneous_parts() {
        let gc = OwnedGeometryCollection::try_new(&example_parts()).unwrap();
        assert!(matches!(gc.geometry(0).unwrap(), Geometry::Point(_)));
        assert!(matches!(gc.geometry(1).unwrap(), Geometry::LineString(_)));
        assert_ne!(
            gc.geometry(0).unwrap().geometry_type(),
            gc.geometry(1).unwrap().geometry_type()
        );

        let square = polygon![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.), (x: 0., y: 0.)];
        let parts = [
            geo::Geometry::Point(point!(x: 0., y: 0.)),
            geo::Geometry::Polygon(square.clone()),
        ];
        let gc = OwnedGeometryCollection::try_new(&parts).unwrap();
        let Geometry::Polygon(part) = gc.geometry(1).unwrap() else {
            panic!("expected a polygon");
        };
        assert_eq!(part, square);
        assert!(matches!(gc.geometry(0).unwrap(), Geometry::Point(_)));
        assert_eq!(gc.geometry(1).unwrap().geometry_type(), GeometryTypeId::Polygon);
    }

    #[test]
    fn geojson_interchange() {
        let gc = OwnedGeometryCollection::try_new(&example_parts()).unwrap();
        let expected = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [51.0, -1.0]},
                {"type": "LineString", "coordinates": [[52.0, -1.0], [49.0, 2.0]]}
            ]
        });
        assert_eq!(serde_json::to_value(&gc).unwrap(), expected);

        let s = gc.to_geojson_string().unwrap();
        let parsed = OwnedGeometryCollection::from_geojson_str(&s).unwrap();
        assert_eq!(parsed, gc);

        let from_value: OwnedGeometryCollection = serde_json::from_value(expected).unwrap();
        assert_eq!(from_value, gc);
    }

    #[test]
    fn geojson_rejects_other_types() {
        let err =
            OwnedGeometryCollection::from_geojson_str(r#"{"type": "Point", "coordinates": [1, 2]}"#)
                .unwrap_err();
        assert!(matches!(err, GeoArrowError::IncorrectType(_)));
    }

    #[test]
    fn construction_failure_propagates() {
        let bad = geo::Geometry::LineString(line_string![(x: 0., y: 0.)]);
        let err = OwnedGeometryCollection::try_new(&[bad]).unwrap_err();
        assert!(matches!(err, GeoArrowError::Construction(_)));

        let tiny = polygon![(x: 0., y: 0.), (x: 1., y: 0.)];
        let err = OwnedGeometryCollection::try_new(&geo::Geometry::Polygon(tiny)).unwrap_err();
        assert!(matches!(err, GeoArrowError::Construction(_)));
    }

    #[test]
    fn nan_points_are_stored() {
        let parts = [
            geo::Geometry::Point(point!(x: f64::NAN, y: f64::NAN)),
            geo::Geometry::Point(point!(x: 1., y: 2.)),
        ];
        let gc = OwnedGeometryCollection::try_new(&parts).unwrap();
        assert_eq!(gc.num_geometries(), 2);

        let empty = gc.geometry(0).unwrap();
        assert!(empty.is_empty());
        assert!(!gc.geometry(1).unwrap().is_empty());

        let expected = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": []},
                {"type": "Point", "coordinates": [1.0, 2.0]}
            ]
        });
        assert_eq!(serde_json::to_value(&gc).unwrap(), expected);

        let parsed = OwnedGeometryCollection::from_geojson_str(&gc.to_geojson_string().unwrap())
            .unwrap();
        assert_eq!(parsed.num_geometries(), 2);
        assert!(parsed.geometry(0).unwrap().is_empty());
        assert_eq!(parsed.geometry(1).unwrap(), parts[1]);
    }

    #[test]
    fn handles_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OwnedGeometryCollection>();
        assert_send_sync::<OwnedGeometry>();
        assert_send_sync::<GeometryCollectionArray>();
    }

    #[test]
    fn views_into_owned_and_back() {
        let gc = OwnedGeometryCollection::try_new(&example_parts()).unwrap();
        let copy = OwnedGeometryCollection::from(gc.as_scalar());
        assert_eq!(copy, gc);
        assert_eq!(copy.to_geo(), gc0());
        let clone = gc.clone();
        drop(gc);
        assert_eq!(clone.num_geometries(), 2);
    }
}
