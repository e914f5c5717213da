use crate::array::CoordBuffer;

/// An Arrow equivalent of a Coord
#[derive(Debug, Clone, Copy)]
pub struct Coord<'a> {
    buffer: &'a CoordBuffer,
    i: usize,
}

impl<'a> Coord<'a> {
    pub(crate) fn new(buffer: &'a CoordBuffer, i: usize) -> Self {
        Self { buffer, i }
    }

    /// The x component of this coordinate.
    pub fn x(&self) -> f64 {
        self.buffer.get_x(self.i)
    }

    /// The y component of this coordinate.
    pub fn y(&self) -> f64 {
        self.buffer.get_y(self.i)
    }

    /// The x and y components of this coordinate.
    pub fn x_y(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    pub(crate) fn to_position(self) -> geojson::Position {
        vec![self.x(), self.y()]
    }
}

impl From<Coord<'_>> for geo::Coord {
    fn from(value: Coord<'_>) -> Self {
        geo::Coord {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl PartialEq for Coord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.x_y() == other.x_y()
    }
}
