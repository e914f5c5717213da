use geo::{polygon, Polygon};

use crate::array::PolygonArray;

pub(crate) fn p0() -> Polygon {
    polygon![
        (x: -111., y: 45.),
        (x: -111., y: 41.),
        (x: -104., y: 41.),
        (x: -104., y: 45.),
    ]
}

pub(crate) fn p1() -> Polygon {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 10., y: 0.),
            (x: 10., y: 10.),
            (x: 0., y: 10.),
        ],
        interiors: [
            [
                (x: 1., y: 1.),
                (x: 2., y: 1.),
                (x: 1., y: 2.),
            ],
        ],
    )
}

pub(crate) fn polygon_array() -> PolygonArray {
    let empty = Polygon::new(geo::LineString::new(vec![]), vec![]);
    vec![p0(), p1(), empty].as_slice().try_into().unwrap()
}
