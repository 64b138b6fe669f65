use crate::error::Error;
use crate::models::lnglat::LngLatLike;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rectangle given by its northeast and southwest corners. Each corner keeps
/// the shape it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub ne: LngLatLike,
    pub sw: LngLatLike,
}

impl BoundingBox {
    pub fn new(ne: impl Into<LngLatLike>, sw: impl Into<LngLatLike>) -> Self {
        BoundingBox {
            ne: ne.into(),
            sw: sw.into(),
        }
    }
}

/// Borrow the `(sw, ne)` corner values out of an untyped bounding box.
pub(crate) fn corners(value: &Value) -> Result<(&Value, &Value), Error> {
    let fields = value.as_object().ok_or_else(|| {
        Error::InvalidInputShape(format!("expected a {{ ne, sw }} bounding box, got {}", value))
    })?;
    let corner = |name: &str| {
        fields.get(name).ok_or_else(|| {
            Error::InvalidInputShape(format!("bounding box is missing `{}`", name))
        })
    };
    Ok((corner("sw")?, corner("ne")?))
}

impl TryFrom<&Value> for BoundingBox {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let (sw, ne) = corners(value)?;
        let sw = LngLatLike::try_from(sw)?;
        let ne = LngLatLike::try_from(ne)?;
        Ok(BoundingBox { ne, sw })
    }
}
