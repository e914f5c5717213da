use geo::{point, MultiPoint};

use crate::array::MultiPointArray;

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::new(vec![point!(
        x: 0., y: 1.
    )])
}

pub(crate) fn mp1() -> MultiPoint {
    MultiPoint::new(vec![
        point!(
            x: 1., y: 2.
        ),
        point!(
            x: 3., y: 4.
        ),
    ])
}

pub(crate) fn mp_array() -> MultiPointArray {
    vec![mp0(), mp1()].as_slice().try_into().unwrap()
}
