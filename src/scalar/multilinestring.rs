use arrow_buffer::OffsetBuffer;

use crate::array::CoordBuffer;
use crate::scalar::LineString;
use crate::trait_::{MultipartGeometry, NativeScalar};
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a MultiLineString
#[derive(Debug, Clone)]
pub struct MultiLineString<'a> {
    pub(crate) coords: &'a CoordBuffer,

    /// Offsets into the line string array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each line string starts
    pub(crate) ring_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
}

impl<'a> MultiLineString<'a> {
    pub(crate) fn new(
        coords: &'a CoordBuffer,
        geom_offsets: &'a OffsetBuffer<i32>,
        ring_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, _) = geom_offsets.start_end(geom_index);
        Self {
            coords,
            geom_offsets,
            ring_offsets,
            geom_index,
            start_offset,
        }
    }
}

impl<'a> MultipartGeometry for MultiLineString<'a> {
    type PartType<'b> = LineString<'a> where Self: 'b;

    fn num_parts(&self) -> usize {
        let (start, end) = self.geom_offsets.start_end(self.geom_index);
        end - start
    }

    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_> {
        LineString::new(self.coords, self.ring_offsets, self.start_offset + i)
    }
}

impl NativeScalar for MultiLineString<'_> {
    type ScalarGeo = geo::MultiLineString;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::MultiLineString
    }

    fn is_empty(&self) -> bool {
        self.num_parts() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::MultiLineString::new(self.parts().map(|ls| ls.to_geo()).collect())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::MultiLineString(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::MultiLineString(self.parts().map(|ls| ls.to_positions()).collect())
    }
}

impl_scalar_traits!(MultiLineString, geo::MultiLineString);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::multilinestring::{ml0, ml1, ml_array};
    use crate::trait_::ArrayAccessor;

    #[test]
    fn parts() {
        let arr = ml_array();
        let ml = arr.value(1).unwrap();
        assert_eq!(ml.num_parts(), 2);
        assert_eq!(ml.part(0).unwrap().num_coords(), 3);
        assert_eq!(ml, ml1());
        assert_eq!(arr.value(0).unwrap(), ml0());
    }

    #[test]
    fn geojson() {
        let arr = ml_array();
        let ml = arr.value(0).unwrap();
        assert_eq!(
            ml.to_geojson_value(),
            geojson::Value::MultiLineString(vec![vec![vec![-111., 45.], vec![-111., 41.]]])
        );
    }
}
