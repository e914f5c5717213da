mod iterator;
mod owned;
mod scalar;

pub use iterator::{GeometryCollectionIterator, GeometrySequence};
pub use owned::{CollectionInput, OwnedGeometryCollection};
pub use scalar::GeometryCollection;
