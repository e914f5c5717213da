//! Defines [`GeoArrowError`], representing all errors returned by this crate.

use arrow_schema::ArrowError;
use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoArrowError {
    /// A geometry could not be written into a native buffer.
    ///
    /// Raised by the builders when an input part has no valid native representation, for
    /// example a LineString with a single coordinate or a Polygon ring with fewer than four
    /// coordinates.
    #[error("Failed to construct geometry: {0}")]
    Construction(String),

    /// A part index outside of `0..len` was requested.
    #[error("Index {index} out of range for geometry with {len} parts")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of parts available.
        len: usize,
    },

    /// A geometry type id that has no corresponding geometry variant.
    #[error("Unknown geometry type id: {0}")]
    UnknownVariant(i8),

    /// Incorrect type was passed to an operation.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// Whenever pushing to a container fails because it does not support more entries.
    ///
    /// The solution is usually to split the input into several collections.
    #[error("Overflow")]
    Overflow,

    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoArrowError>;
