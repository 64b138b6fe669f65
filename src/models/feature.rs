use crate::models::lnglat::LngLat;
use serde::Serialize;
use serde_json::{Map, Value};

/// Closed ring: SW, NW, NE, SE and SW again.
pub type Ring = [LngLat; 5];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Polygon")]
pub struct PolygonGeometry {
    pub coordinates: [Ring; 1],
}

/// GeoJSON `Feature` holding a single rectangular polygon.
///
/// Serializes as
/// `{"type":"Feature","geometry":{"type":"Polygon","coordinates":[ring]},"properties":{}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct PolygonFeature {
    pub geometry: PolygonGeometry,
    pub properties: Map<String, Value>,
}

impl PolygonFeature {
    pub fn new(ring: Ring) -> Self {
        PolygonFeature {
            geometry: PolygonGeometry {
                coordinates: [ring],
            },
            properties: Map::new(),
        }
    }

    pub fn ring(&self) -> &Ring {
        &self.geometry.coordinates[0]
    }
}

impl From<PolygonFeature> for geojson::Feature {
    fn from(feature: PolygonFeature) -> Self {
        let [ring] = feature.geometry.coordinates;
        let ring: Vec<Vec<f64>> = ring.into_iter().map(Vec::from).collect();
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::Polygon(vec![ring]))),
            id: None,
            properties: Some(feature.properties),
            foreign_members: None,
        }
    }
}

/// Collect features, in order, into a GeoJSON `FeatureCollection`.
pub fn feature_collection(features: Vec<PolygonFeature>) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: features.into_iter().map(geojson::Feature::from).collect(),
        foreign_members: None,
    }
}
