use crate::array::PolygonArray;
use crate::builder::coord::CoordBufferBuilder;
use crate::builder::OffsetsBuilder;
use crate::capacity::PolygonCapacity;
use crate::error::{GeoArrowError, Result};

/// The GeoArrow equivalent to `Vec<Polygon>`: a mutable collection of Polygons.
///
/// Converting a [`PolygonBuilder`] into a [`PolygonArray`] is `O(1)`.
#[derive(Debug, Clone, Default)]
pub struct PolygonBuilder {
    coords: CoordBufferBuilder,

    /// Offsets into the ring array where each geometry starts
    geom_offsets: OffsetsBuilder,

    /// Offsets into the coordinate array where each ring starts
    ring_offsets: OffsetsBuilder,
}

impl PolygonBuilder {
    /// Creates a new empty [`PolygonBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`PolygonBuilder`] with the provided [capacity][PolygonCapacity].
    pub fn with_capacity(capacity: PolygonCapacity) -> Self {
        Self {
            coords: CoordBufferBuilder::with_capacity(capacity.coord_capacity),
            geom_offsets: OffsetsBuilder::with_capacity(capacity.geom_capacity),
            ring_offsets: OffsetsBuilder::with_capacity(capacity.ring_capacity),
        }
    }

    /// The number of polygons in this builder.
    pub fn len(&self) -> usize {
        self.geom_offsets.len_proxy()
    }

    /// Whether this builder contains no polygons.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a new Polygon to the end of this builder.
    ///
    /// A polygon with an empty exterior and no interiors is stored as the empty polygon.
    ///
    /// # Errors
    ///
    /// - [`GeoArrowError::Construction`] if a ring has fewer than four coordinates or is not
    ///   closed, or if the exterior is empty but interiors are not
    /// - [`GeoArrowError::Overflow`] if the offsets overflow
    #[inline]
    pub fn push_polygon(&mut self, value: &geo::Polygon) -> Result<()> {
        if validate_polygon(value)? {
            return self.geom_offsets.try_push_usize(0);
        }
        self.push_rings(value)?;
        self.geom_offsets.try_push_usize(value.interiors().len() + 1)
    }

    fn push_rings(&mut self, value: &geo::Polygon) -> Result<()> {
        for ring in std::iter::once(value.exterior()).chain(value.interiors()) {
            for coord in &ring.0 {
                self.coords.push_coord(coord);
            }
            self.ring_offsets.try_push_usize(ring.0.len())?;
        }
        Ok(())
    }

    /// Create this builder from a slice of Polygons.
    pub fn from_polygons(geoms: &[geo::Polygon]) -> Result<Self> {
        let capacity = PolygonCapacity::from_polygons(geoms.iter());
        let mut array = Self::with_capacity(capacity);
        for geom in geoms {
            array.push_polygon(geom)?;
        }
        Ok(array)
    }

    /// Consume the builder and convert to an immutable [`PolygonArray`].
    pub fn finish(self) -> PolygonArray {
        PolygonArray {
            coords: self.coords.finish(),
            geom_offsets: self.geom_offsets.finish(),
            ring_offsets: self.ring_offsets.finish(),
        }
    }
}

/// Validate a polygon's rings, returning whether it is the empty polygon.
pub(crate) fn validate_polygon(value: &geo::Polygon) -> Result<bool> {
    if value.exterior().0.is_empty() {
        if value.interiors().is_empty() {
            return Ok(true);
        }
        return Err(GeoArrowError::Construction(
            "Polygon with an empty exterior cannot have interior rings".to_string(),
        ));
    }
    for ring in std::iter::once(value.exterior()).chain(value.interiors()) {
        if ring.0.len() < 4 {
            return Err(GeoArrowError::Construction(format!(
                "Polygon ring must have at least four coordinates, got {}",
                ring.0.len()
            )));
        }
        if !ring.is_closed() {
            return Err(GeoArrowError::Construction(
                "Polygon ring is not closed".to_string(),
            ));
        }
    }
    Ok(false)
}

impl TryFrom<&[geo::Polygon]> for PolygonArray {
    type Error = GeoArrowError;

    fn try_from(geoms: &[geo::Polygon]) -> Result<Self> {
        Ok(PolygonBuilder::from_polygons(geoms)?.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::{line_string, polygon};

    #[test]
    fn short_ring_is_rejected() {
        let triangle_ish = polygon![(x: 0., y: 0.), (x: 1., y: 1.)];
        let err = PolygonBuilder::new().push_polygon(&triangle_ish).unwrap_err();
        assert!(matches!(err, GeoArrowError::Construction(_)));
    }

    #[test]
    fn empty_exterior_with_interiors_is_rejected() {
        let polygon = geo::Polygon::new(
            geo::LineString::new(vec![]),
            vec![line_string![
                (x: 0., y: 0.),
                (x: 1., y: 0.),
                (x: 1., y: 1.),
                (x: 0., y: 0.)
            ]],
        );
        assert!(validate_polygon(&polygon).is_err());
    }

    #[test]
    fn empty_polygon_has_no_rings() {
        let empty = geo::Polygon::new(geo::LineString::new(vec![]), vec![]);
        let arr = PolygonArray::try_from([empty].as_slice()).unwrap();
        assert_eq!(arr.geom_offsets.to_vec(), vec![0, 0]);
        assert_eq!(arr.ring_offsets.to_vec(), vec![0]);
    }
}
