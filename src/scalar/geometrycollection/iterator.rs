use crate::array::MixedGeometryArray;
use crate::error::{GeoArrowError, Result};
use crate::scalar::{Geometry, OwnedGeometryCollection};
use crate::trait_::{ArrayAccessor, NativeScalar};

/// The parts of a geometry collection, as a lazy, read-only sequence.
///
/// This is a plain descriptor over the collection's buffers: it holds no materialized parts
/// and can be iterated any number of times. It borrows the collection it came from, so the
/// collection always outlives it.
#[derive(Debug, Clone, Copy)]
pub struct GeometrySequence<'a> {
    array: &'a MixedGeometryArray,
    start: usize,
    len: usize,
}

impl<'a> GeometrySequence<'a> {
    pub(crate) fn new(array: &'a MixedGeometryArray, start: usize, len: usize) -> Self {
        Self { array, start, len }
    }

    /// The number of parts.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no parts.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The part at `index`, dispatched to the scalar type matching its stored type id.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<Geometry<'a>> {
        if index >= self.len {
            return Err(GeoArrowError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let (tag, offset) = self.array.raw_part(self.start + index)?;
        self.array.resolve(tag, offset)
    }

    /// An iterator over the parts, in order.
    pub fn iter(&self) -> GeometryCollectionIterator<'a> {
        GeometryCollectionIterator::new(self.array, self.start, self.start + self.len)
    }

    /// A zero-copy subsequence of `length` parts starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`GeoArrowError::IndexOutOfRange`] if the range extends past the end.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self> {
        match offset.checked_add(length) {
            Some(end) if end <= self.len => Ok(Self::new(self.array, self.start + offset, length)),
            _ => Err(GeoArrowError::IndexOutOfRange {
                index: offset.saturating_add(length),
                len: self.len,
            }),
        }
    }

    /// Copy the parts of this sequence into a new collection.
    pub fn to_collection(&self) -> Result<OwnedGeometryCollection> {
        let geoms = self.iter().map(|g| g.to_geo()).collect::<Vec<_>>();
        OwnedGeometryCollection::from_geometries(&geoms)
    }
}

impl<'a> IntoIterator for GeometrySequence<'a> {
    type Item = Geometry<'a>;
    type IntoIter = GeometryCollectionIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &GeometrySequence<'a> {
    type Item = Geometry<'a>;
    type IntoIter = GeometryCollectionIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the parts of a geometry collection
#[derive(Clone, Debug)]
pub struct GeometryCollectionIterator<'a> {
    array: &'a MixedGeometryArray,
    index: usize,
    end: usize,
}

impl<'a> GeometryCollectionIterator<'a> {
    #[inline]
    fn new(array: &'a MixedGeometryArray, index: usize, end: usize) -> Self {
        Self { array, index, end }
    }
}

impl<'a> Iterator for GeometryCollectionIterator<'a> {
    type Item = Geometry<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let old = self.index;
        self.index += 1;
        Some(unsafe { self.array.value_unchecked(old) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.end - self.index, Some(self.end - self.index))
    }
}

impl ExactSizeIterator for GeometryCollectionIterator<'_> {}

impl DoubleEndedIterator for GeometryCollectionIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            None
        } else {
            self.end -= 1;
            Some(unsafe { self.array.value_unchecked(self.end) })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometrycollection::{gc0, gc_array};
    use crate::type_id::GeometryTypeId;

    #[test]
    fn sequence_matches_parts() {
        let arr = gc_array();
        let gc = arr.value(1).unwrap();
        let geoms = gc.geoms();
        assert_eq!(geoms.len(), 3);
        assert_eq!(geoms.iter().len(), 3);
        for (i, g) in geoms.iter().enumerate() {
            assert_eq!(g, geoms.get(i).unwrap());
        }
        let err = geoms.get(3).unwrap_err();
        assert!(matches!(
            err,
            GeoArrowError::IndexOutOfRange { index: 3, len: 3 }
        ));
    }

    #[test]
    fn restartable_and_reversible() {
        let arr = gc_array();
        let geoms = arr.value(1).unwrap().geoms();
        let forward = geoms.iter().map(|g| g.geometry_type()).collect::<Vec<_>>();
        let again = (&geoms)
            .into_iter()
            .map(|g| g.geometry_type())
            .collect::<Vec<_>>();
        let mut backward = geoms.iter().rev().map(|g| g.geometry_type()).collect::<Vec<_>>();
        backward.reverse();
        assert_eq!(forward, again);
        assert_eq!(forward, backward);
        assert_eq!(
            forward,
            vec![
                GeometryTypeId::MultiPoint,
                GeometryTypeId::Polygon,
                GeometryTypeId::GeometryCollection
            ]
        );
    }

    #[test]
    fn slicing() {
        let arr = gc_array();
        let geoms = arr.value(1).unwrap().geoms();
        let tail = geoms.slice(1, 2).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail.get(0).unwrap(), geoms.get(1).unwrap());
        assert!(geoms.slice(2, 2).is_err());
        assert!(geoms.slice(usize::MAX, 2).is_err());
        assert!(geoms.slice(3, 0).unwrap().is_empty());
    }

    #[test]
    fn to_collection_copies_selected_parts() {
        let arr = gc_array();
        let geoms = arr.value(0).unwrap().geoms();
        let copy = geoms.to_collection().unwrap();
        assert_eq!(copy, gc0());

        let head = geoms.slice(0, 1).unwrap().to_collection().unwrap();
        assert_eq!(head.num_geometries(), 1);
        assert_eq!(head.geometry(0).unwrap(), gc0().0[0]);
    }
}
