use crate::error::Result;
use crate::models::lnglat::{LngLat, LngLatLike};
use serde_json::Value;

/// Canonical pair for a typed corner. Pairs are trusted to be `[lng, lat]`.
pub fn normalize(point: &LngLatLike) -> LngLat {
    match *point {
        LngLatLike::Pair([lng, lat]) => LngLat(lng, lat),
        LngLatLike::Named { lng, lat } => LngLat(lng, lat),
    }
}

/// Canonical pair for an untyped corner, failing with
/// [`Error::InvalidInputShape`](crate::Error::InvalidInputShape) when it is
/// neither shape.
pub fn normalize_value(value: &Value) -> Result<LngLat> {
    LngLatLike::try_from(value).map(|point| normalize(&point))
}

impl From<LngLatLike> for LngLat {
    fn from(point: LngLatLike) -> Self {
        normalize(&point)
    }
}
