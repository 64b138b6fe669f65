//! Defines [`Error`], the errors returned by the conversion functions.

use thiserror::Error;

/// Errors raised while turning bounding box input into a polygon feature.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A corner (or the bounding box holding it) is neither a `[lng, lat]`
    /// pair nor a record with numeric `lng` and `lat` fields.
    #[error("Invalid LngLatLike object: {0}")]
    InvalidInputShape(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
