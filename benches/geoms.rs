use geo::{line_string, point, polygon};

use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_collection::scalar::OwnedGeometryCollection;
use geoarrow_collection::NativeScalar;

fn create_data() -> Vec<geo::Geometry> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    let line = line_string![(x: 52., y: -1.), (x: 49., y: 2.)];
    (0..1000)
        .map(|i| match i % 3 {
            0 => geo::Geometry::Point(point!(x: i as f64, y: -1.)),
            1 => geo::Geometry::LineString(line.clone()),
            _ => geo::Geometry::Polygon(poly.clone()),
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();

    c.bench_function("build GeometryCollection from 1000 mixed parts", |b| {
        b.iter(|| OwnedGeometryCollection::from_geometries(&data).unwrap())
    });

    let gc = OwnedGeometryCollection::from_geometries(&data).unwrap();
    c.bench_function("iterate GeometryCollection parts", |b| {
        b.iter(|| gc.geoms().iter().filter(|g| !g.is_empty()).count())
    });

    c.bench_function("GeometryCollection to GeoJSON", |b| {
        b.iter(|| gc.to_geojson_string().unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
