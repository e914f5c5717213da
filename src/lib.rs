//! Heterogeneous geometry collections over [GeoArrow](https://github.com/geoarrow/geoarrow)
//! buffers.
//!
//! A [`GeometryCollection`][scalar::GeometryCollection] aggregates an ordered sequence of
//! geometries of any kind (points, line strings, polygons, their multi-part forms, or other
//! collections) behind a single value. Its parts live in a
//! [`MixedGeometryArray`][array::MixedGeometryArray], a dense union keyed by
//! [`GeometryTypeId`][type_id::GeometryTypeId], and are materialized lazily as zero-copy
//! [`Geometry`][scalar::Geometry] views.
//!
//! ```
//! use geoarrow_collection::scalar::{Geometry, OwnedGeometryCollection};
//! use geoarrow_collection::trait_::NativeScalar;
//!
//! let parts = vec![
//!     geo::Geometry::Point(geo::Point::new(51., -1.)),
//!     geo::Geometry::LineString(vec![(52., -1.), (49., 2.)].into()),
//! ];
//! let gc = OwnedGeometryCollection::try_new(&parts).unwrap();
//! assert_eq!(gc.geoms().len(), 2);
//! assert!(matches!(gc.geoms().get(1).unwrap(), Geometry::LineString(_)));
//! assert!(!gc.is_empty());
//! ```

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod array;
pub mod builder;
pub mod capacity;
pub mod error;
mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
pub mod type_id;
pub(crate) mod util;

pub use error::{GeoArrowError, Result};
pub use scalar::{CollectionInput, OwnedGeometryCollection};
pub use trait_::{ArrayAccessor, IntoArrow, MultipartGeometry, NativeScalar};
pub use type_id::GeometryTypeId;
