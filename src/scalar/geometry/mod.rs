mod owned;
mod scalar;

pub use owned::OwnedGeometry;
pub use scalar::Geometry;
