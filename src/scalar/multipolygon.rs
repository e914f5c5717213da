use arrow_buffer::OffsetBuffer;

use crate::array::CoordBuffer;
use crate::scalar::Polygon;
use crate::trait_::{MultipartGeometry, NativeScalar};
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a MultiPolygon
#[derive(Debug, Clone)]
pub struct MultiPolygon<'a> {
    pub(crate) coords: &'a CoordBuffer,

    /// Offsets into the polygon array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    /// Offsets into the ring array where each polygon starts
    pub(crate) polygon_offsets: &'a OffsetBuffer<i32>,

    /// Offsets into the coordinate array where each ring starts
    pub(crate) ring_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
}

impl<'a> MultiPolygon<'a> {
    pub(crate) fn new(
        coords: &'a CoordBuffer,
        geom_offsets: &'a OffsetBuffer<i32>,
        polygon_offsets: &'a OffsetBuffer<i32>,
        ring_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, _) = geom_offsets.start_end(geom_index);
        Self {
            coords,
            geom_offsets,
            polygon_offsets,
            ring_offsets,
            geom_index,
            start_offset,
        }
    }
}

impl<'a> MultipartGeometry for MultiPolygon<'a> {
    type PartType<'b> = Polygon<'a> where Self: 'b;

    fn num_parts(&self) -> usize {
        let (start, end) = self.geom_offsets.start_end(self.geom_index);
        end - start
    }

    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_> {
        Polygon::new(
            self.coords,
            self.polygon_offsets,
            self.ring_offsets,
            self.start_offset + i,
        )
    }
}

impl NativeScalar for MultiPolygon<'_> {
    type ScalarGeo = geo::MultiPolygon;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::MultiPolygon
    }

    fn is_empty(&self) -> bool {
        self.num_parts() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::MultiPolygon::new(self.parts().map(|p| p.to_geo()).collect())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::MultiPolygon(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::MultiPolygon(self.parts().map(|p| p.to_rings()).collect())
    }
}

impl_scalar_traits!(MultiPolygon, geo::MultiPolygon);
