#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Country boundary loading for the choropleth map.
//!
//! Accepts either a `TopoJSON` `Topology` or a plain `GeoJSON`
//! `FeatureCollection`, from a local path or an `http(s)` URL, and turns it
//! into a list of [`CountryBoundary`] values keyed the same way listing
//! countries are.

pub mod fetch;
pub mod normalize;
pub mod topology;

use airbnb_dashboard_geography_models::{BoundaryFieldMapping, CountryBoundary};
use thiserror::Error;

/// Errors that can occur while loading boundaries.
#[derive(Debug, Error)]
pub enum GeographyError {
    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

/// Loads country boundaries from `location` (path or URL).
///
/// # Errors
///
/// Returns [`GeographyError`] if the file cannot be fetched or is neither a
/// valid `TopoJSON` topology nor a `GeoJSON` feature collection.
pub async fn load_boundaries(
    location: &str,
    mapping: &BoundaryFieldMapping,
) -> Result<Vec<CountryBoundary>, GeographyError> {
    log::info!("Loading country boundaries from {location}");
    let bytes = fetch::read_location(location).await?;
    let boundaries = parse_boundaries(&bytes, mapping)?;
    log::info!("Loaded {} country boundaries", boundaries.len());
    Ok(boundaries)
}

/// Parses boundary data, detecting the format from its top-level `type`.
///
/// # Errors
///
/// Returns [`GeographyError`] if the data is not valid JSON, has an
/// unsupported top-level type, or references arcs that do not exist.
pub fn parse_boundaries(
    bytes: &[u8],
    mapping: &BoundaryFieldMapping,
) -> Result<Vec<CountryBoundary>, GeographyError> {
    let json: serde_json::Value = serde_json::from_slice(bytes)?;

    let features = match json.get("type").and_then(serde_json::Value::as_str) {
        Some("Topology") => {
            let topology: topology::Topology = serde_json::from_value(json)?;
            topology.features(mapping.object.as_deref())?
        }
        Some("FeatureCollection") => {
            let collection: geojson::FeatureCollection = serde_json::from_value(json)?;
            collection.features
        }
        other => {
            return Err(GeographyError::Conversion {
                message: format!(
                    "Unsupported boundary data type {other:?}: expected Topology or FeatureCollection"
                ),
            });
        }
    };

    Ok(normalize::normalize_features(
        &features,
        &mapping.name_property,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_collection() {
        let json = serde_json::json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "NAME": "Portugal" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }]
        });
        let bytes = serde_json::to_vec(&json).unwrap();
        let boundaries = parse_boundaries(&bytes, &BoundaryFieldMapping::default()).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].name, "Portugal");
        assert_eq!(boundaries[0].key, "portugal");
    }

    #[test]
    fn rejects_unknown_type() {
        let bytes = br#"{"type": "Point", "coordinates": [0, 0]}"#;
        let err = parse_boundaries(bytes, &BoundaryFieldMapping::default()).unwrap_err();
        assert!(matches!(err, GeographyError::Conversion { .. }));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_boundaries(b"not json", &BoundaryFieldMapping::default()).unwrap_err();
        assert!(matches!(err, GeographyError::Json(_)));
    }
}
