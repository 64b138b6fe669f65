use crate::config::Config;
use crate::geometry::envelope::value_to_polygon_feature;
use crate::models::feature::{PolygonFeature, feature_collection};
use crate::reader::read_source;
use crate::utils::status::print_feature_summary;
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

/// Result of converting one input document.
#[derive(Debug, Clone, PartialEq)]
pub enum Converted {
    /// A single `{ ne, sw }` object.
    Single(PolygonFeature),
    /// A JSON array of bounding boxes, in input order.
    Batch(Vec<PolygonFeature>),
}

impl Converted {
    pub fn features(&self) -> &[PolygonFeature] {
        match self {
            Converted::Single(feature) => std::slice::from_ref(feature),
            Converted::Batch(features) => features,
        }
    }
}

/// Objects become one feature, arrays become a batch. The first bad element
/// stops a batch.
pub fn convert_value(value: &Value) -> anyhow::Result<Converted> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                value_to_polygon_feature(item)
                    .with_context(|| format!("Bounding box #{} is invalid", idx))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(Converted::Batch),
        _ => Ok(Converted::Single(value_to_polygon_feature(value)?)),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Read, convert and serialize. Batches come out as a `FeatureCollection`.
    pub fn convert(&self) -> anyhow::Result<String> {
        let input = read_source(&self.config.source)?;
        let value: Value =
            serde_json::from_str(&input).context("Input is not valid JSON")?;

        let converted = convert_value(&value)?;
        tracing::info!(count = converted.features().len(), "converted bounding boxes");

        if self.config.summary {
            print_feature_summary(converted.features());
        }

        let output = match converted {
            Converted::Single(feature) => to_json(&feature, self.config.pretty)?,
            Converted::Batch(features) => {
                to_json(&feature_collection(features), self.config.pretty)?
            }
        };
        Ok(output)
    }

    pub fn run(self) -> anyhow::Result<()> {
        let output = self.convert()?;
        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Source;
    use crate::error::Error;
    use crate::models::lnglat::LngLat;
    use serde_json::json;

    fn inline(json: &str) -> Converter {
        Converter::new(Config {
            source: Source::Inline(json.to_string()),
            ..Config::default()
        })
    }

    #[test]
    fn test_single_bbox_output() {
        let output = inline(r#"{"sw":[10,20],"ne":{"lng":30,"lat":40}}"#)
            .convert()
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[10.0, 20.0], [10.0, 40.0], [30.0, 40.0], [30.0, 20.0], [10.0, 20.0]]],
                },
                "properties": {},
            })
        );
    }

    #[test]
    fn test_batch_becomes_feature_collection() {
        let output = inline(
            r#"[{"sw":[0,0],"ne":[1,1]},{"sw":{"lng":-5,"lat":-5},"ne":[5,5]}]"#,
        )
        .convert()
        .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[1]["geometry"]["coordinates"][0][1], json!([-5.0, 5.0]));
        assert_eq!(features[1]["properties"], json!({}));
    }

    #[test]
    fn test_batch_error_names_index() {
        let err = convert_value(&json!([{"sw": [0, 0], "ne": [1, 1]}, {"sw": {"lng": 0}, "ne": [1, 1]}]))
            .unwrap_err();
        assert!(err.to_string().contains("#1"));
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidInputShape(_))
        ));
    }

    #[test]
    fn test_scalar_input_rejected() {
        let err = convert_value(&json!(42)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidInputShape(_))
        ));
    }

    #[test]
    fn test_invalid_json_reported() {
        let err = inline("{not json").convert().unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let converter = Converter::new(Config {
            source: Source::Inline(r#"{"sw":[10,20],"ne":[30,40]}"#.to_string()),
            pretty: true,
            summary: false,
        });
        let output = converter.convert().unwrap();
        assert!(output.contains('\n'));
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "Feature");
    }

    #[test]
    fn test_features_view() {
        let converted = convert_value(&json!({"sw": [10, 20], "ne": [30, 40]})).unwrap();
        assert_eq!(converted.features().len(), 1);
        assert_eq!(converted.features()[0].ring()[2], LngLat(30.0, 40.0));
    }
}
