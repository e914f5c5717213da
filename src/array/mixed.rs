use std::sync::Arc;

use arrow_array::{Array, ArrayRef, UnionArray};
use arrow_buffer::ScalarBuffer;
use arrow_schema::{Field, UnionFields};
use log::trace;

use crate::array::{
    GeometryCollectionArray, LineStringArray, MultiLineStringArray, MultiPointArray,
    MultiPolygonArray, PointArray, PolygonArray,
};
use crate::error::{GeoArrowError, Result};
use crate::scalar::Geometry;
use crate::trait_::{ArrayAccessor, IntoArrow};
use crate::type_id::GeometryTypeId;

/// A dense union of every geometry variant, storing heterogeneous geometries in one array.
///
/// Each slot is identified by a `(type_id, offset)` pair: the type id selects the child array
/// and the offset selects the geometry within it.
///
/// # Invariants
///
/// - `type_ids.len() == offsets.len()`
/// - Every item in `type_ids` is a valid [`GeometryTypeId`]
/// - Every item in `offsets` is in bounds of the child selected by the matching type id
///
/// - 1: Point
/// - 2: LineString
/// - 3: Polygon
/// - 4: MultiPoint
/// - 5: MultiLineString
/// - 6: MultiPolygon
/// - 7: GeometryCollection
#[derive(Debug, Clone, PartialEq)]
pub struct MixedGeometryArray {
    pub(crate) type_ids: ScalarBuffer<i8>,

    pub(crate) offsets: ScalarBuffer<i32>,

    pub(crate) points: PointArray,
    pub(crate) line_strings: LineStringArray,
    pub(crate) polygons: PolygonArray,
    pub(crate) multi_points: MultiPointArray,
    pub(crate) multi_line_strings: MultiLineStringArray,
    pub(crate) multi_polygons: MultiPolygonArray,

    /// Nested collections. `None` when no slot refers to a nested collection.
    pub(crate) geometry_collections: Option<Arc<GeometryCollectionArray>>,
}

impl MixedGeometryArray {
    /// Create a new MixedGeometryArray from parts
    ///
    /// # Implementation
    ///
    /// This function is `O(N)` in the number of slots, because every type id and offset is
    /// validated.
    ///
    /// # Errors
    ///
    /// - [`GeoArrowError::UnknownVariant`] if any type id is not a known geometry type
    /// - [`GeoArrowError::Construction`] if `type_ids` and `offsets` differ in length, or an
    ///   offset is out of bounds of its child array
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        type_ids: ScalarBuffer<i8>,
        offsets: ScalarBuffer<i32>,
        points: PointArray,
        line_strings: LineStringArray,
        polygons: PolygonArray,
        multi_points: MultiPointArray,
        multi_line_strings: MultiLineStringArray,
        multi_polygons: MultiPolygonArray,
        geometry_collections: Option<Arc<GeometryCollectionArray>>,
    ) -> Result<Self> {
        if type_ids.len() != offsets.len() {
            return Err(GeoArrowError::Construction(format!(
                "type_ids has length {} but offsets has length {}",
                type_ids.len(),
                offsets.len()
            )));
        }

        let array = Self {
            type_ids,
            offsets,
            points,
            line_strings,
            polygons,
            multi_points,
            multi_line_strings,
            multi_polygons,
            geometry_collections,
        };

        for (tag, offset) in array.type_ids.iter().zip(array.offsets.iter()) {
            let type_id = GeometryTypeId::try_from_tag(*tag)?;
            let child_len = array.child_len(type_id);
            if *offset < 0 || *offset as usize >= child_len {
                return Err(GeoArrowError::Construction(format!(
                    "offset {offset} out of bounds for {type_id} child with length {child_len}"
                )));
            }
        }

        Ok(array)
    }

    /// The number of geometries stored in the child array for `type_id`.
    pub fn child_len(&self, type_id: GeometryTypeId) -> usize {
        match type_id {
            GeometryTypeId::Point => self.points.len(),
            GeometryTypeId::LineString => self.line_strings.len(),
            GeometryTypeId::Polygon => self.polygons.len(),
            GeometryTypeId::MultiPoint => self.multi_points.len(),
            GeometryTypeId::MultiLineString => self.multi_line_strings.len(),
            GeometryTypeId::MultiPolygon => self.multi_polygons.len(),
            GeometryTypeId::GeometryCollection => self
                .geometry_collections
                .as_ref()
                .map(|gcs| gcs.len())
                .unwrap_or(0),
        }
    }

    /// The raw `(type_id, child offset)` pair stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn raw_part(&self, index: usize) -> Result<(i8, usize)> {
        let len = self.len();
        if index >= len {
            return Err(GeoArrowError::IndexOutOfRange { index, len });
        }
        Ok((self.type_ids[index], self.offsets[index] as usize))
    }

    /// Materialize the geometry identified by a raw type id and child offset.
    ///
    /// # Errors
    ///
    /// - [`GeoArrowError::UnknownVariant`] if `tag` is not a known geometry type
    /// - [`GeoArrowError::IndexOutOfRange`] if `offset` is out of bounds of the child array
    pub fn resolve(&self, tag: i8, offset: usize) -> Result<Geometry<'_>> {
        let type_id = GeometryTypeId::try_from_tag(tag)?;
        let len = self.child_len(type_id);
        if offset >= len {
            return Err(GeoArrowError::IndexOutOfRange { index: offset, len });
        }
        Ok(self.dispatch(type_id, offset))
    }

    /// Construct the scalar for `type_id` at `offset` in the matching child array.
    ///
    /// `offset` must be in bounds of that child.
    fn dispatch(&self, type_id: GeometryTypeId, offset: usize) -> Geometry<'_> {
        trace!("materializing {type_id} at child offset {offset}");
        unsafe {
            match type_id {
                GeometryTypeId::Point => Geometry::Point(self.points.value_unchecked(offset)),
                GeometryTypeId::LineString => {
                    Geometry::LineString(self.line_strings.value_unchecked(offset))
                }
                GeometryTypeId::Polygon => {
                    Geometry::Polygon(self.polygons.value_unchecked(offset))
                }
                GeometryTypeId::MultiPoint => {
                    Geometry::MultiPoint(self.multi_points.value_unchecked(offset))
                }
                GeometryTypeId::MultiLineString => {
                    Geometry::MultiLineString(self.multi_line_strings.value_unchecked(offset))
                }
                GeometryTypeId::MultiPolygon => {
                    Geometry::MultiPolygon(self.multi_polygons.value_unchecked(offset))
                }
                GeometryTypeId::GeometryCollection => match &self.geometry_collections {
                    Some(gcs) => Geometry::GeometryCollection(gcs.value_unchecked(offset)),
                    None => unreachable!("validated offset into missing geometry collections"),
                },
            }
        }
    }

    /// Whether any slot holds a geometry of `type_id`.
    pub fn has_type(&self, type_id: GeometryTypeId) -> bool {
        let tag = type_id.tag();
        self.type_ids.iter().any(|t| *t == tag)
    }
}

impl<'a> ArrayAccessor<'a> for MixedGeometryArray {
    type Item = Geometry<'a>;

    fn len(&self) -> usize {
        self.type_ids.len()
    }

    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item {
        let tag = self.type_ids[index];
        let offset = self.offsets[index] as usize;
        match GeometryTypeId::try_from(tag) {
            Ok(type_id) => self.dispatch(type_id, offset),
            Err(_) => unreachable!("unknown type_id {tag}"),
        }
    }
}

impl IntoArrow for MixedGeometryArray {
    type ArrowArray = UnionArray;

    fn into_arrow(self) -> Result<Self::ArrowArray> {
        let mut type_ids: Vec<i8> = GeometryTypeId::ALL[..6].iter().map(|t| t.tag()).collect();
        let mut children: Vec<ArrayRef> = vec![
            Arc::new(self.points.into_arrow()?),
            Arc::new(self.line_strings.into_arrow()?),
            Arc::new(self.polygons.into_arrow()?),
            Arc::new(self.multi_points.into_arrow()?),
            Arc::new(self.multi_line_strings.into_arrow()?),
            Arc::new(self.multi_polygons.into_arrow()?),
        ];
        if let Some(gcs) = self.geometry_collections {
            let gcs = Arc::try_unwrap(gcs).unwrap_or_else(|shared| shared.as_ref().clone());
            type_ids.push(GeometryTypeId::GeometryCollection.tag());
            children.push(Arc::new(gcs.into_arrow()?));
        }

        let fields = type_ids
            .iter()
            .zip(children.iter())
            .map(|(tag, child)| {
                let name = GeometryTypeId::try_from_tag(*tag)?.name();
                Ok(Field::new(name, child.data_type().clone(), true))
            })
            .collect::<Result<Vec<_>>>()?;
        let union_fields = UnionFields::new(type_ids, fields);

        Ok(UnionArray::try_new(
            union_fields,
            self.type_ids,
            Some(self.offsets),
            children,
        )?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::{gc_array, mixed_array};
    use crate::trait_::NativeScalar;

    #[test]
    fn raw_parts_resolve() {
        let arr = mixed_array();
        let (tag, offset) = arr.raw_part(4).unwrap();
        assert_eq!((tag, offset), (1, 1));
        let geom = arr.resolve(tag, offset).unwrap();
        assert_eq!(geom.geometry_type(), GeometryTypeId::Point);
        assert!(matches!(
            arr.raw_part(5),
            Err(GeoArrowError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn unknown_tags_are_rejected() {
        let arr = mixed_array();
        assert!(matches!(
            arr.resolve(8, 0),
            Err(GeoArrowError::UnknownVariant(8))
        ));
        assert!(matches!(
            arr.resolve(GeometryTypeId::GeometryCollection.tag(), 0),
            Err(GeoArrowError::IndexOutOfRange { index: 0, len: 0 })
        ));

        let err = MixedGeometryArray::try_new(
            vec![1, 0].into(),
            vec![0, 0].into(),
            arr.points.clone(),
            arr.line_strings.clone(),
            arr.polygons.clone(),
            arr.multi_points.clone(),
            arr.multi_line_strings.clone(),
            arr.multi_polygons.clone(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, GeoArrowError::UnknownVariant(0)));
    }

    #[test]
    fn try_new_checks_offsets() {
        let arr = mixed_array();
        let mismatched = MixedGeometryArray::try_new(
            vec![1, 1].into(),
            vec![0].into(),
            arr.points.clone(),
            arr.line_strings.clone(),
            arr.polygons.clone(),
            arr.multi_points.clone(),
            arr.multi_line_strings.clone(),
            arr.multi_polygons.clone(),
            None,
        );
        assert!(matches!(mismatched, Err(GeoArrowError::Construction(_))));

        let out_of_bounds = MixedGeometryArray::try_new(
            vec![3].into(),
            vec![1].into(),
            arr.points.clone(),
            arr.line_strings.clone(),
            arr.polygons.clone(),
            arr.multi_points.clone(),
            arr.multi_line_strings.clone(),
            arr.multi_polygons.clone(),
            None,
        );
        assert!(matches!(out_of_bounds, Err(GeoArrowError::Construction(_))));

        let valid = MixedGeometryArray::try_new(
            vec![2, 1].into(),
            vec![0, 1].into(),
            arr.points.clone(),
            arr.line_strings.clone(),
            arr.polygons.clone(),
            arr.multi_points.clone(),
            arr.multi_line_strings.clone(),
            arr.multi_polygons.clone(),
            None,
        )
        .unwrap();
        assert_eq!(valid.len(), 2);
        assert_eq!(valid.value(1).unwrap(), arr.value(4).unwrap());
    }

    #[test]
    fn into_arrow_union() {
        let arr = mixed_array();
        let union = arr.into_arrow().unwrap();
        assert_eq!(union.len(), 5);
        assert_eq!(union.type_id(2), 3);
        assert_eq!(union.value_offset(4), 1);

        let nested = gc_array().parts().clone();
        assert!(nested.has_type(GeometryTypeId::GeometryCollection));
        let union = nested.into_arrow().unwrap();
        assert_eq!(union.len(), 5);
        assert_eq!(union.type_ids().to_vec(), vec![1, 2, 4, 3, 7]);
    }
}
