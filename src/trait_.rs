//! Traits shared by all native geometry arrays and scalars.

use crate::error::{GeoArrowError, Result};
use crate::type_id::GeometryTypeId;

/// Convert GeoArrow arrays into their respective [arrow][arrow_array] arrays.
pub trait IntoArrow {
    /// The type of arrow array that this geoarrow array can be converted into.
    type ArrowArray: arrow_array::Array;

    /// Converts this geoarrow array into an arrow array.
    ///
    /// This is `O(1)` for every array except the union-backed
    /// [`MixedGeometryArray`][crate::array::MixedGeometryArray], which validates its children.
    fn into_arrow(self) -> Result<Self::ArrowArray>;
}

/// A trait for accessing the values of a native geometry array.
///
/// Accessing a geometry is always constant-time and zero-copy: the returned scalar borrows the
/// array's buffers.
pub trait ArrayAccessor<'a> {
    /// The [geoarrow scalar object][crate::scalar] for this geometry array type.
    type Item: NativeScalar;

    /// The number of geometries contained in this array.
    fn len(&self) -> usize;

    /// Returns `true` if the array contains no geometries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if `index >= self.len()`.
    fn value(&'a self, index: usize) -> Result<Self::Item> {
        let len = self.len();
        if index >= len {
            return Err(GeoArrowError::IndexOutOfRange { index, len });
        }
        Ok(unsafe { self.value_unchecked(index) })
    }

    /// Returns the element at index `i`, without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller is responsible for ensuring that the index is within the bounds of the array
    unsafe fn value_unchecked(&'a self, index: usize) -> Self::Item;

    /// Iterator over geoarrow scalar values.
    fn iter_values(&'a self) -> impl ExactSizeIterator<Item = Self::Item> + 'a {
        (0..self.len()).map(move |i| unsafe { self.value_unchecked(i) })
    }
}

/// The capability every geometry value provides, whatever its variant.
pub trait NativeScalar {
    /// The [`geo`] type this scalar converts into.
    type ScalarGeo;

    /// The variant of this geometry.
    fn geometry_type(&self) -> GeometryTypeId;

    /// Whether this is the empty geometry of its variant.
    ///
    /// For multipart geometries this coincides with having zero parts.
    fn is_empty(&self) -> bool;

    /// Copy this geometry out into its [`geo`] representation.
    fn to_geo(&self) -> Self::ScalarGeo;

    /// Copy this geometry out into a [`geo::Geometry`].
    fn to_geo_geometry(&self) -> geo::Geometry;

    /// The GeoJSON geometry value describing this geometry.
    fn to_geojson_value(&self) -> geojson::Value;

    /// The structural interchange record for this geometry: a GeoJSON geometry object.
    ///
    /// Collections produce `{"type": "GeometryCollection", "geometries": [...]}` with every
    /// part described recursively, in order.
    fn to_geojson(&self) -> geojson::Geometry {
        geojson::Geometry::new(self.to_geojson_value())
    }
}

/// A geometry made of an ordered sequence of parts.
pub trait MultipartGeometry: NativeScalar {
    /// The scalar type of each part.
    type PartType<'b>: NativeScalar
    where
        Self: 'b;

    /// The number of parts. This is `O(1)`.
    fn num_parts(&self) -> usize;

    /// Access the part at index `i`, without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller is responsible for ensuring that `i < self.num_parts()`
    unsafe fn part_unchecked(&self, i: usize) -> Self::PartType<'_>;

    /// Access the part at index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if `i >= self.num_parts()`.
    fn part(&self, i: usize) -> Result<Self::PartType<'_>> {
        let len = self.num_parts();
        if i >= len {
            return Err(GeoArrowError::IndexOutOfRange { index: i, len });
        }
        Ok(unsafe { self.part_unchecked(i) })
    }

    /// An iterator over all parts, in order.
    fn parts(&self) -> impl ExactSizeIterator<Item = Self::PartType<'_>> {
        (0..self.num_parts()).map(move |i| unsafe { self.part_unchecked(i) })
    }
}
