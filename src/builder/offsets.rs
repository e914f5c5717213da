//! This was originally copied from arrow2.

use arrow_buffer::OffsetBuffer;

use crate::error::{GeoArrowError, Result};

/// A wrapper type of [`Vec<i32>`] representing the invariants of Arrow's offsets.
/// It is guaranteed to (sound to assume that):
/// * every element is `>= 0`
/// * element at position `i` is >= than element at position `i-1`.
/// * it is never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OffsetsBuilder(Vec<i32>);

impl Default for OffsetsBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetsBuilder {
    /// Returns an empty [`OffsetsBuilder`] (i.e. with a single element, the zero)
    #[inline]
    pub(crate) fn new() -> Self {
        Self(vec![0])
    }

    /// Returns a new [`OffsetsBuilder`] with a capacity, allocating at least `capacity + 1`
    /// entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut offsets = Vec::with_capacity(capacity + 1);
        offsets.push(0);
        Self(offsets)
    }

    /// Reserves `additional` entries.
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.0.reserve(additional);
    }

    /// Pushes a new element with a given length.
    ///
    /// # Error
    ///
    /// This function errors iff the new last item is larger than what `i32` supports.
    #[inline]
    pub(crate) fn try_push_usize(&mut self, length: usize) -> Result<()> {
        let length = i32::try_from(length).map_err(|_| GeoArrowError::Overflow)?;
        let new_length = self
            .last()
            .checked_add(length)
            .ok_or(GeoArrowError::Overflow)?;
        self.0.push(new_length);
        Ok(())
    }

    /// Returns the last offset of this container.
    #[inline]
    pub(crate) fn last(&self) -> i32 {
        self.0.last().copied().unwrap_or(0)
    }

    /// Returns the length an array with these offsets would be.
    #[inline]
    pub(crate) fn len_proxy(&self) -> usize {
        self.0.len() - 1
    }

    /// Extends itself with `additional` elements equal to the last offset.
    /// This is useful to extend offsets with empty values.
    #[inline]
    pub(crate) fn extend_constant(&mut self, additional: usize) {
        let offset = self.last();
        if additional == 1 {
            self.0.push(offset)
        } else {
            self.0.resize(self.0.len() + additional, offset)
        }
    }

    pub(crate) fn finish(self) -> OffsetBuffer<i32> {
        OffsetBuffer::new(self.0.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_and_finish() {
        let mut offsets = OffsetsBuilder::with_capacity(3);
        offsets.try_push_usize(2).unwrap();
        offsets.extend_constant(1);
        offsets.try_push_usize(3).unwrap();
        assert_eq!(offsets.len_proxy(), 3);
        assert_eq!(offsets.finish().to_vec(), vec![0, 2, 2, 5]);
    }

    #[test]
    fn overflow() {
        let mut offsets = OffsetsBuilder::new();
        offsets.try_push_usize(i32::MAX as usize).unwrap();
        assert!(matches!(
            offsets.try_push_usize(1),
            Err(GeoArrowError::Overflow)
        ));
        assert!(matches!(
            OffsetsBuilder::new().try_push_usize(usize::MAX),
            Err(GeoArrowError::Overflow)
        ));
    }
}
