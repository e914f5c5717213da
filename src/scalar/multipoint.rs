use arrow_buffer::OffsetBuffer;

use crate::array::CoordBuffer;
use crate::scalar::Point;
use crate::trait_::{MultipartGeometry, NativeScalar};
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a MultiPoint
#[derive(Debug, Clone)]
pub struct MultiPoint<'a> {
    pub(crate) coords: &'a CoordBuffer,

    /// Offsets into the coordinate array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
}

impl<'a> MultiPoint<'a> {
    pub(crate) fn new(
        coords: &'a CoordBuffer,
        geom_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, _) = geom_offsets.start_end(geom_index);
        Self {
            coords,
            geom_offsets,
            geom_index,
            start_offset,
        }
    }
}

impl<'a> MultipartGeometry for MultiPoint<'a> {
    type PartType<'b> = Point<'a> where Self: 'b;

    fn num_parts(&self) -> usize {
        let (start, end) = self.geom_offsets.start_end(self.geom_index);
        end - start
    }

    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_> {
        Point::new(self.coords, self.start_offset + i)
    }
}

impl NativeScalar for MultiPoint<'_> {
    type ScalarGeo = geo::MultiPoint;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::MultiPoint
    }

    fn is_empty(&self) -> bool {
        self.num_parts() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::MultiPoint::new(self.parts().map(|p| p.to_geo()).collect())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::MultiPoint(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::MultiPoint(self.parts().map(|p| p.coord().to_position()).collect())
    }
}

impl_scalar_traits!(MultiPoint, geo::MultiPoint);
