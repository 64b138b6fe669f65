use crate::error::Result;
use crate::geometry::normalize::{normalize, normalize_value};
use crate::models::bbox::{BoundingBox, corners};
use crate::models::feature::{PolygonFeature, Ring};
use crate::models::lnglat::LngLat;
use serde_json::Value;

/// Rectangle ring for the given corners: SW, NW, NE, SE, SW.
///
/// No min/max reordering and no dateline handling; the corners are used as
/// given.
pub fn ring(sw: LngLat, ne: LngLat) -> Ring {
    [
        sw,
        LngLat(sw.lng(), ne.lat()),
        ne,
        LngLat(ne.lng(), sw.lat()),
        sw,
    ]
}

/// Convert a bounding box into a GeoJSON polygon feature.
pub fn to_polygon_feature(bbox: &BoundingBox) -> PolygonFeature {
    let sw = normalize(&bbox.sw);
    let ne = normalize(&bbox.ne);
    PolygonFeature::new(ring(sw, ne))
}

/// Same as [`to_polygon_feature`] for an untyped `{ ne, sw }` value. Corner
/// errors come back exactly as the normalizer raised them.
pub fn value_to_polygon_feature(value: &Value) -> Result<PolygonFeature> {
    let (sw, ne) = corners(value)?;
    let sw = normalize_value(sw)?;
    let ne = normalize_value(ne)?;
    Ok(PolygonFeature::new(ring(sw, ne)))
}

/// Parse JSON text holding a single bounding box and convert it.
pub fn str_to_polygon_feature(input: &str) -> Result<PolygonFeature> {
    let value: Value = serde_json::from_str(input)?;
    value_to_polygon_feature(&value)
}

impl BoundingBox {
    pub fn to_polygon_feature(&self) -> PolygonFeature {
        to_polygon_feature(self)
    }
}
