pub(crate) mod linestring;
pub(crate) mod multipoint;
pub(crate) mod multipolygon;
pub(crate) mod polygon;
