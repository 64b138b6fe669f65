use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical `[longitude, latitude]` pair. Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat(pub f64, pub f64);

impl LngLat {
    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

impl From<LngLat> for Vec<f64> {
    fn from(point: LngLat) -> Self {
        vec![point.0, point.1]
    }
}

/// A corner as callers hand it to us: either `[lng, lat]` or `{ lng, lat }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LngLatLike {
    Pair([f64; 2]),
    Named { lng: f64, lat: f64 },
}

impl From<[f64; 2]> for LngLatLike {
    fn from(pair: [f64; 2]) -> Self {
        LngLatLike::Pair(pair)
    }
}

impl From<(f64, f64)> for LngLatLike {
    fn from((lng, lat): (f64, f64)) -> Self {
        LngLatLike::Pair([lng, lat])
    }
}

impl From<LngLat> for LngLatLike {
    fn from(point: LngLat) -> Self {
        LngLatLike::Pair([point.0, point.1])
    }
}

/// Shape check for untyped input.
///
/// Arrays need two leading numbers; anything after them (an altitude, say) is
/// dropped. Objects need numeric `lng` and `lat`; other keys are ignored.
impl TryFrom<&Value> for LngLatLike {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => {
                let lng = items.first().and_then(Value::as_f64);
                let lat = items.get(1).and_then(Value::as_f64);
                match (lng, lat) {
                    (Some(lng), Some(lat)) => Ok(LngLatLike::Pair([lng, lat])),
                    _ => Err(Error::InvalidInputShape(format!(
                        "expected [lng, lat] with two numbers, got {}",
                        value
                    ))),
                }
            }
            Value::Object(fields) => {
                let lng = fields.get("lng").and_then(Value::as_f64);
                let lat = fields.get("lat").and_then(Value::as_f64);
                match (lng, lat) {
                    (Some(lng), Some(lat)) => Ok(LngLatLike::Named { lng, lat }),
                    _ => Err(Error::InvalidInputShape(format!(
                        "expected numeric `lng` and `lat` fields, got {}",
                        value
                    ))),
                }
            }
            other => Err(Error::InvalidInputShape(format!(
                "expected [lng, lat] or {{ lng, lat }}, got {}",
                other
            ))),
        }
    }
}

// Routed through `Value` so serde input and untyped input accept the same shapes.
impl<'de> Deserialize<'de> for LngLatLike {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        LngLatLike::try_from(&value).map_err(serde::de::Error::custom)
    }
}
