use arrow_buffer::OffsetBuffer;

use crate::array::CoordBuffer;
use crate::scalar::LineString;
use crate::trait_::NativeScalar;
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a Polygon
#[derive(Debug, Clone)]
pub struct Polygon<'a> {
    pub(crate) coords: &'a CoordBuffer,

    /// Offsets into the ring array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each ring starts
    pub(crate) ring_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
    end_offset: usize,
}

impl<'a> Polygon<'a> {
    pub(crate) fn new(
        coords: &'a CoordBuffer,
        geom_offsets: &'a OffsetBuffer<i32>,
        ring_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, end_offset) = geom_offsets.start_end(geom_index);
        Self {
            coords,
            geom_offsets,
            ring_offsets,
            geom_index,
            start_offset,
            end_offset,
        }
    }

    /// The number of rings, exterior included. Zero for the empty polygon.
    pub fn num_rings(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// The exterior ring, or `None` for the empty polygon.
    pub fn exterior(&self) -> Option<LineString<'a>> {
        if self.num_rings() == 0 {
            return None;
        }
        Some(LineString::new(
            self.coords,
            self.ring_offsets,
            self.start_offset,
        ))
    }

    /// The number of interior rings.
    pub fn num_interiors(&self) -> usize {
        self.num_rings().saturating_sub(1)
    }

    /// The interior ring at `i`, or `None` if `i` is out of bounds.
    pub fn interior(&self, i: usize) -> Option<LineString<'a>> {
        if i >= self.num_interiors() {
            return None;
        }
        Some(LineString::new(
            self.coords,
            self.ring_offsets,
            self.start_offset + 1 + i,
        ))
    }

    /// An iterator over the interior rings.
    pub fn interiors(&self) -> impl ExactSizeIterator<Item = LineString<'a>> + 'a {
        let (coords, ring_offsets) = (self.coords, self.ring_offsets);
        let start = (self.start_offset + 1).min(self.end_offset);
        (start..self.end_offset).map(move |i| LineString::new(coords, ring_offsets, i))
    }

    pub(crate) fn to_rings(&self) -> Vec<Vec<geojson::Position>> {
        self.exterior()
            .into_iter()
            .chain(self.interiors())
            .map(|ring| ring.to_positions())
            .collect()
    }
}

impl NativeScalar for Polygon<'_> {
    type ScalarGeo = geo::Polygon;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::Polygon
    }

    fn is_empty(&self) -> bool {
        self.num_rings() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        let exterior = self
            .exterior()
            .map(|ring| ring.to_geo())
            .unwrap_or_else(|| geo::LineString::new(vec![]));
        let interiors = self.interiors().map(|ring| ring.to_geo()).collect();
        geo::Polygon::new(exterior, interiors)
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::Polygon(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::Polygon(self.to_rings())
    }
}

impl_scalar_traits!(Polygon, geo::Polygon);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{p0, p1, polygon_array};
    use crate::trait_::ArrayAccessor;

    #[test]
    fn rings() {
        let arr = polygon_array();
        let polygon = arr.value(1).unwrap();
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(polygon.exterior().unwrap().num_coords(), 5);
        assert_eq!(polygon.interior(0).unwrap().num_coords(), 4);
        assert!(polygon.interior(1).is_none());
        assert_eq!(polygon, p1());
        assert_eq!(arr.value(0).unwrap(), p0());
    }

    #[test]
    fn empty() {
        let arr = polygon_array();
        let polygon = arr.value(2).unwrap();
        assert!(polygon.is_empty());
        assert!(polygon.exterior().is_none());
        assert_eq!(polygon.interiors().len(), 0);
        assert_eq!(polygon.to_geojson_value(), geojson::Value::Polygon(vec![]));
    }
}
