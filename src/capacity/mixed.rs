use crate::capacity::{
    GeometryCollectionCapacity, LineStringCapacity, MultiLineStringCapacity, MultiPointCapacity,
    MultiPolygonCapacity, PolygonCapacity,
};

/// A counter for the buffer sizes of a [`MixedGeometryArray`][crate::array::MixedGeometryArray].
///
/// This can be used to reduce allocations by allocating once for exactly the array size you need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixedCapacity {
    /// Simple: just the total number of points
    pub(crate) point: usize,
    pub(crate) line_string: LineStringCapacity,
    pub(crate) polygon: PolygonCapacity,
    pub(crate) multi_point: MultiPointCapacity,
    pub(crate) multi_line_string: MultiLineStringCapacity,
    pub(crate) multi_polygon: MultiPolygonCapacity,
    /// Nested collections, if any were counted
    pub(crate) geometry_collection: Option<Box<GeometryCollectionCapacity>>,
}

impl MixedCapacity {
    /// Create a new empty capacity.
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Return `true` if the capacity is empty.
    pub fn is_empty(&self) -> bool {
        self.point == 0
            && self.line_string.is_empty()
            && self.polygon.is_empty()
            && self.multi_point.is_empty()
            && self.multi_line_string.is_empty()
            && self.multi_polygon.is_empty()
            && self.geometry_collection.is_none()
    }

    /// The total number of geometries counted, not descending into nested collections.
    pub fn total_num_geoms(&self) -> usize {
        let mut total = 0;
        total += self.point;
        total += self.line_string.geom_capacity();
        total += self.polygon.geom_capacity();
        total += self.multi_point.geom_capacity();
        total += self.multi_line_string.geom_capacity();
        total += self.multi_polygon.geom_capacity();
        if let Some(gc) = &self.geometry_collection {
            total += gc.geom_capacity();
        }
        total
    }

    /// Add a Geometry to this capacity counter.
    ///
    /// Lines count as LineStrings, Rects and Triangles as Polygons.
    pub fn add_geometry(&mut self, geom: &geo::Geometry) {
        match geom {
            geo::Geometry::Point(_) => self.point += 1,
            geo::Geometry::Line(_) => {
                self.line_string.geom_capacity += 1;
                self.line_string.coord_capacity += 2;
            }
            geo::Geometry::LineString(g) => self.line_string.add_line_string(g),
            geo::Geometry::Polygon(g) => self.polygon.add_polygon(g),
            geo::Geometry::Rect(_) => self.polygon.add_rect(),
            geo::Geometry::Triangle(_) => self.polygon.add_triangle(),
            geo::Geometry::MultiPoint(g) => self.multi_point.add_multi_point(g),
            geo::Geometry::MultiLineString(g) => self.multi_line_string.add_multi_line_string(g),
            geo::Geometry::MultiPolygon(g) => self.multi_polygon.add_multi_polygon(g),
            geo::Geometry::GeometryCollection(g) => self
                .geometry_collection
                .get_or_insert_with(Default::default)
                .add_geometry_collection(&g.0),
        }
    }
}
