use arrow_buffer::OffsetBuffer;

use crate::array::CoordBuffer;
use crate::scalar::Coord;
use crate::trait_::NativeScalar;
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a LineString
///
/// Also used for the rings of polygons and the parts of multi line strings, which share the
/// same layout.
#[derive(Debug, Clone)]
pub struct LineString<'a> {
    pub(crate) coords: &'a CoordBuffer,

    /// Offsets into the coordinate array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
    end_offset: usize,
}

impl<'a> LineString<'a> {
    pub(crate) fn new(
        coords: &'a CoordBuffer,
        geom_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, end_offset) = geom_offsets.start_end(geom_index);
        Self {
            coords,
            geom_offsets,
            geom_index,
            start_offset,
            end_offset,
        }
    }

    /// The number of coordinates in this line string.
    pub fn num_coords(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// The coordinate at `i`, or `None` if `i` is out of bounds.
    pub fn coord(&self, i: usize) -> Option<Coord<'a>> {
        if i >= self.num_coords() {
            return None;
        }
        Some(self.coords.value(self.start_offset + i))
    }

    /// An iterator over the coordinates of this line string.
    pub fn coords(&self) -> impl ExactSizeIterator<Item = Coord<'a>> + DoubleEndedIterator + 'a {
        let coords = self.coords;
        (self.start_offset..self.end_offset).map(move |i| coords.value(i))
    }

    pub(crate) fn to_positions(&self) -> Vec<geojson::Position> {
        self.coords().map(|c| c.to_position()).collect()
    }
}

impl NativeScalar for LineString<'_> {
    type ScalarGeo = geo::LineString;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::LineString
    }

    fn is_empty(&self) -> bool {
        self.num_coords() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::LineString::new(self.coords().map(geo::Coord::from).collect())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::LineString(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::LineString(self.to_positions())
    }
}

impl_scalar_traits!(LineString, geo::LineString);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::{ls0, ls_array};
    use crate::trait_::ArrayAccessor;

    #[test]
    fn coords() {
        let arr = ls_array();
        let ls = arr.value(0).unwrap();
        assert_eq!(ls.num_coords(), 2);
        assert_eq!(ls.coord(1).unwrap().x_y(), (1., 2.));
        assert!(ls.coord(2).is_none());
        assert_eq!(ls.coords().rev().next().unwrap().x_y(), (1., 2.));
        assert_eq!(ls, ls0());
    }

    #[test]
    fn empty() {
        let arr = ls_array();
        let ls = arr.value(2).unwrap();
        assert!(ls.is_empty());
        assert_eq!(ls.to_geojson_value(), geojson::Value::LineString(vec![]));
    }
}
