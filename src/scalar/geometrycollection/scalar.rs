use arrow_buffer::OffsetBuffer;

use crate::array::MixedGeometryArray;
use crate::scalar::{Geometry, GeometrySequence};
use crate::trait_::{ArrayAccessor, MultipartGeometry, NativeScalar};
use crate::type_id::GeometryTypeId;
use crate::util::OffsetBufferUtils;

/// An Arrow equivalent of a GeometryCollection
///
/// The parts are heterogeneous: each one is stored in whichever child of the
/// [`MixedGeometryArray`] matches its type, and is materialized as a [`Geometry`] on access.
#[derive(Debug, Clone)]
pub struct GeometryCollection<'a> {
    pub(crate) array: &'a MixedGeometryArray,

    /// Offsets into the geometry array where each geometry starts
    pub(crate) geom_offsets: &'a OffsetBuffer<i32>,

    pub(crate) geom_index: usize,

    start_offset: usize,
    end_offset: usize,
}

impl<'a> GeometryCollection<'a> {
    pub(crate) fn new(
        array: &'a MixedGeometryArray,
        geom_offsets: &'a OffsetBuffer<i32>,
        geom_index: usize,
    ) -> Self {
        let (start_offset, end_offset) = geom_offsets.start_end(geom_index);
        Self {
            array,
            geom_offsets,
            geom_index,
            start_offset,
            end_offset,
        }
    }

    /// The number of geometries in this collection.
    pub fn num_geometries(&self) -> usize {
        self.end_offset - self.start_offset
    }

    /// The parts of this collection as a lazy sequence.
    ///
    /// Nothing is materialized until an element is accessed, and every access builds a fresh
    /// view from the underlying buffers.
    pub fn geoms(&self) -> GeometrySequence<'a> {
        GeometrySequence::new(self.array, self.start_offset, self.num_geometries())
    }
}

impl<'a> MultipartGeometry for GeometryCollection<'a> {
    type PartType<'b> = Geometry<'a> where Self: 'b;

    fn num_parts(&self) -> usize {
        self.num_geometries()
    }

    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_> {
        self.array.value_unchecked(self.start_offset + i)
    }
}

impl NativeScalar for GeometryCollection<'_> {
    type ScalarGeo = geo::GeometryCollection;

    fn geometry_type(&self) -> GeometryTypeId {
        GeometryTypeId::GeometryCollection
    }

    fn is_empty(&self) -> bool {
        self.num_geometries() == 0
    }

    fn to_geo(&self) -> Self::ScalarGeo {
        geo::GeometryCollection(self.parts().map(|g| g.to_geo()).collect())
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::GeometryCollection(self.to_geo())
    }

    fn to_geojson_value(&self) -> geojson::Value {
        geojson::Value::GeometryCollection(self.parts().map(|g| g.to_geojson()).collect())
    }
}

impl_scalar_traits!(GeometryCollection, geo::GeometryCollection);

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoArrowError;
    use crate::test::geometrycollection::{gc0, gc1, gc2, gc_array};

    #[test]
    fn parts_dispatch_by_type() {
        let arr = gc_array();
        let gc = arr.value(0).unwrap();
        assert_eq!(gc.num_parts(), 2);
        assert!(matches!(gc.part(0).unwrap(), Geometry::Point(_)));
        assert!(matches!(gc.part(1).unwrap(), Geometry::LineString(_)));
        assert_eq!(gc, gc0());
        assert_eq!(arr.value(1).unwrap(), gc1());
    }

    #[test]
    fn empty_collection() {
        let arr = gc_array();
        let gc = arr.value(2).unwrap();
        assert_eq!(gc, gc2());
        assert!(gc.is_empty());
        assert_eq!(gc.num_parts(), 0);
        assert!(gc.geoms().is_empty());
        let err = gc.part(0).unwrap_err();
        assert!(matches!(
            err,
            GeoArrowError::IndexOutOfRange { index: 0, len: 0 }
        ));
    }

    #[test]
    fn nested_collection() {
        let arr = gc_array();
        let gc = arr.value(1).unwrap();
        let inner = gc.part(2).unwrap();
        let inner = inner.as_geometry_collection().unwrap();
        assert_eq!(inner.num_parts(), 2);
        assert!(matches!(inner.part(1).unwrap(), Geometry::Polygon(_)));
    }

    #[test]
    fn geojson_is_recursive() {
        let arr = gc_array();
        let gc = arr.value(1).unwrap();
        let value = serde_json::to_value(&gc).unwrap();
        assert_eq!(value["type"], "GeometryCollection");
        assert_eq!(value["geometries"].as_array().unwrap().len(), 3);
        assert_eq!(value["geometries"][2]["type"], "GeometryCollection");
        assert_eq!(value["geometries"][2]["geometries"][1]["type"], "Polygon");
    }
}
