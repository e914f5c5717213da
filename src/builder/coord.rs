use crate::array::CoordBuffer;

/// The GeoArrow equivalent to `Vec<Coord>`: a mutable collection of interleaved XY coordinates.
#[derive(Debug, Clone, Default)]
pub struct CoordBufferBuilder {
    coords: Vec<f64>,
}

impl CoordBufferBuilder {
    /// Create a new builder with the capacity for `capacity` coordinates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity * 2),
        }
    }

    /// Reserves capacity for at least `additional` more coordinates.
    pub fn reserve(&mut self, additional: usize) {
        self.coords.reserve(additional * 2);
    }

    /// The number of coordinates in this builder.
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    /// Whether this builder contains no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Push a coordinate onto the end of this builder.
    #[inline]
    pub fn push_coord(&mut self, coord: &geo::Coord) {
        self.coords.push(coord.x);
        self.coords.push(coord.y);
    }

    /// Push a coordinate with NaN for both components, the representation of an empty point.
    #[inline]
    pub fn push_nan_coord(&mut self) {
        self.coords.push(f64::NAN);
        self.coords.push(f64::NAN);
    }

    /// Consume the builder and convert to an immutable [`CoordBuffer`].
    pub fn finish(self) -> CoordBuffer {
        CoordBuffer {
            coords: self.coords.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn interleaves() {
        let mut builder = CoordBufferBuilder::with_capacity(2);
        builder.push_coord(&geo::Coord { x: 1., y: 2. });
        builder.push_coord(&geo::Coord { x: 3., y: 4. });
        assert_eq!(builder.len(), 2);
        let coords = builder.finish();
        assert_eq!(coords.value(1).x_y(), (3., 4.));
    }

    #[test]
    fn non_finite_values_are_stored() {
        let mut builder = CoordBufferBuilder::default();
        builder.push_coord(&geo::Coord { x: 0., y: f64::INFINITY });
        builder.push_nan_coord();
        let coords = builder.finish();
        assert_eq!(coords.value(0).x_y(), (0., f64::INFINITY));
        let (x, y) = coords.value(1).x_y();
        assert!(x.is_nan() && y.is_nan());
    }
}
