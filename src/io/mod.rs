//! Reading and writing to and from interchange formats.

pub(crate) mod geojson;
