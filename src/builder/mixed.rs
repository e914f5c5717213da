use std::sync::Arc;

use crate::array::MixedGeometryArray;
use crate::builder::{
    GeometryCollectionBuilder, LineStringBuilder, MultiLineStringBuilder, MultiPointBuilder,
    MultiPolygonBuilder, PointBuilder, PolygonBuilder,
};
use crate::capacity::MixedCapacity;
use crate::error::{GeoArrowError, Result};
use crate::type_id::GeometryTypeId;

/// The GeoArrow equivalent to a `Vec<Geometry>`: a mutable collection of geometries of any
/// variant, nested geometry collections included.
///
/// Converting a [`MixedGeometryBuilder`] into a [`MixedGeometryArray`] is `O(1)`.
///
/// # Invariants
///
/// - every item in `types` is a valid [`GeometryTypeId`] tag
/// - `offsets.len() == types.len()`
/// - every offset is in bounds of the child builder selected by its type
#[derive(Debug, Clone, Default)]
pub struct MixedGeometryBuilder {
    types: Vec<i8>,

    points: PointBuilder,
    line_strings: LineStringBuilder,
    polygons: PolygonBuilder,
    multi_points: MultiPointBuilder,
    multi_line_strings: MultiLineStringBuilder,
    multi_polygons: MultiPolygonBuilder,

    /// Created on the first nested collection.
    geometry_collections: Option<Box<GeometryCollectionBuilder>>,

    offsets: Vec<i32>,
}

impl MixedGeometryBuilder {
    /// Creates a new empty [`MixedGeometryBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`MixedGeometryBuilder`] with the provided [capacity][MixedCapacity].
    pub fn with_capacity(capacity: MixedCapacity) -> Self {
        let total_num_geoms = capacity.total_num_geoms();
        Self {
            types: Vec::with_capacity(total_num_geoms),
            points: PointBuilder::with_capacity(capacity.point),
            line_strings: LineStringBuilder::with_capacity(capacity.line_string),
            polygons: PolygonBuilder::with_capacity(capacity.polygon),
            multi_points: MultiPointBuilder::with_capacity(capacity.multi_point),
            multi_line_strings: MultiLineStringBuilder::with_capacity(capacity.multi_line_string),
            multi_polygons: MultiPolygonBuilder::with_capacity(capacity.multi_polygon),
            geometry_collections: capacity
                .geometry_collection
                .map(|c| Box::new(GeometryCollectionBuilder::with_capacity(*c))),
            offsets: Vec::with_capacity(total_num_geoms),
        }
    }

    /// The number of geometries in this builder.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether this builder contains no geometries.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Add a new geometry to the end of this builder.
    ///
    /// `Line` is stored as a LineString; `Rect` and `Triangle` are stored as Polygons.
    ///
    /// # Errors
    ///
    /// Propagates the error of the child builder the geometry is routed to. A builder that
    /// returned an error may hold a partially written geometry and should be discarded.
    pub fn push_geometry(&mut self, geom: &geo::Geometry) -> Result<()> {
        let (type_id, offset) = match geom {
            geo::Geometry::Point(g) => {
                let offset = child_offset(self.points.len())?;
                self.points.push_point(g);
                (GeometryTypeId::Point, offset)
            }
            geo::Geometry::Line(l) => {
                let offset = child_offset(self.line_strings.len())?;
                self.line_strings
                    .push_line_string(&geo::LineString::new(vec![l.start, l.end]))?;
                (GeometryTypeId::LineString, offset)
            }
            geo::Geometry::LineString(g) => {
                let offset = child_offset(self.line_strings.len())?;
                self.line_strings.push_line_string(g)?;
                (GeometryTypeId::LineString, offset)
            }
            geo::Geometry::Polygon(g) => {
                let offset = child_offset(self.polygons.len())?;
                self.polygons.push_polygon(g)?;
                (GeometryTypeId::Polygon, offset)
            }
            geo::Geometry::Rect(r) => {
                let offset = child_offset(self.polygons.len())?;
                self.polygons.push_polygon(&r.to_polygon())?;
                (GeometryTypeId::Polygon, offset)
            }
            geo::Geometry::Triangle(t) => {
                let offset = child_offset(self.polygons.len())?;
                self.polygons.push_polygon(&t.to_polygon())?;
                (GeometryTypeId::Polygon, offset)
            }
            geo::Geometry::MultiPoint(g) => {
                let offset = child_offset(self.multi_points.len())?;
                self.multi_points.push_multi_point(g)?;
                (GeometryTypeId::MultiPoint, offset)
            }
            geo::Geometry::MultiLineString(g) => {
                let offset = child_offset(self.multi_line_strings.len())?;
                self.multi_line_strings.push_multi_line_string(g)?;
                (GeometryTypeId::MultiLineString, offset)
            }
            geo::Geometry::MultiPolygon(g) => {
                let offset = child_offset(self.multi_polygons.len())?;
                self.multi_polygons.push_multi_polygon(g)?;
                (GeometryTypeId::MultiPolygon, offset)
            }
            geo::Geometry::GeometryCollection(g) => {
                let nested = self.geometry_collections.get_or_insert_with(Default::default);
                let offset = child_offset(nested.len())?;
                nested.push_geometry_collection(g)?;
                (GeometryTypeId::GeometryCollection, offset)
            }
        };
        self.types.push(type_id.into());
        self.offsets.push(offset);
        Ok(())
    }

    /// Consume the builder and convert to an immutable [`MixedGeometryArray`].
    pub fn finish(self) -> MixedGeometryArray {
        MixedGeometryArray {
            type_ids: self.types.into(),
            offsets: self.offsets.into(),
            points: self.points.finish(),
            line_strings: self.line_strings.finish(),
            polygons: self.polygons.finish(),
            multi_points: self.multi_points.finish(),
            multi_line_strings: self.multi_line_strings.finish(),
            multi_polygons: self.multi_polygons.finish(),
            geometry_collections: self
                .geometry_collections
                .map(|builder| Arc::new(builder.finish())),
        }
    }
}

fn child_offset(len: usize) -> Result<i32> {
    i32::try_from(len).map_err(|_| GeoArrowError::Overflow)
}

impl TryFrom<&[geo::Geometry]> for MixedGeometryArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::Geometry]) -> Result<Self> {
        let mut capacity = MixedCapacity::new_empty();
        geoms.iter().for_each(|g| capacity.add_geometry(g));
        let mut builder = MixedGeometryBuilder::with_capacity(capacity);
        for geom in geoms {
            builder.push_geometry(geom)?;
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trait_::ArrayAccessor;
    use geo::{line_string, point};

    #[test]
    fn offsets_index_into_children() {
        let geoms = vec![
            geo::Geometry::Point(point!(x: 0., y: 0.)),
            geo::Geometry::LineString(line_string![(x: 0., y: 0.), (x: 1., y: 1.)]),
            geo::Geometry::Point(point!(x: 1., y: 1.)),
            geo::Geometry::GeometryCollection(geo::GeometryCollection(vec![])),
        ];
        let arr = MixedGeometryArray::try_from(geoms.as_slice()).unwrap();
        assert_eq!(arr.type_ids.to_vec(), vec![1, 2, 1, 7]);
        assert_eq!(arr.offsets.to_vec(), vec![0, 0, 1, 0]);
        assert_eq!(arr.len(), 4);
        assert!(arr.has_type(GeometryTypeId::GeometryCollection));
        assert!(!arr.has_type(GeometryTypeId::Polygon));
    }

    #[test]
    fn no_nested_child_without_collections() {
        let geoms = vec![geo::Geometry::Point(point!(x: 0., y: 0.))];
        let arr = MixedGeometryArray::try_from(geoms.as_slice()).unwrap();
        assert!(arr.geometry_collections.is_none());
    }

    #[test]
    fn error_does_not_record_type() {
        let mut builder = MixedGeometryBuilder::new();
        let bad = geo::Geometry::LineString(line_string![(x: 0., y: 0.)]);
        assert!(builder.push_geometry(&bad).is_err());
        assert!(builder.is_empty());
    }
}
