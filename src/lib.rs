pub mod config;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod models;
pub mod reader;
pub mod utils;

pub use config::{Cli, Config, Source};
pub use converter::{Converted, Converter};
pub use error::{Error, Result};
pub use geometry::envelope::{str_to_polygon_feature, to_polygon_feature, value_to_polygon_feature};
pub use geometry::normalize::{normalize, normalize_value};
pub use models::bbox::BoundingBox;
pub use models::feature::{PolygonFeature, PolygonGeometry, Ring, feature_collection};
pub use models::lnglat::{LngLat, LngLatLike};
