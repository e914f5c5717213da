use geo::MultiPolygon;

use crate::array::MultiPolygonArray;
use crate::test::polygon::{p0, p1};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![p0()])
}

pub(crate) fn mp1() -> MultiPolygon {
    MultiPolygon::new(vec![p0(), p1()])
}

pub(crate) fn mp_array() -> MultiPolygonArray {
    vec![mp0(), mp1()].as_slice().try_into().unwrap()
}
