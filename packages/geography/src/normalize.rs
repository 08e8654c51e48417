//! Normalizes `GeoJSON` features into [`CountryBoundary`] values.

use airbnb_dashboard_geography_models::CountryBoundary;
use geojson::Feature;

/// Normalizes a list of features into country boundaries.
///
/// Skips features with a missing or blank name and features whose geometry
/// is absent or not polygonal.
#[must_use]
pub fn normalize_features(features: &[Feature], name_property: &str) -> Vec<CountryBoundary> {
    let boundaries: Vec<CountryBoundary> = features
        .iter()
        .filter_map(|feature| normalize_feature(feature, name_property))
        .collect();

    let skipped = features.len() - boundaries.len();
    if skipped > 0 {
        log::warn!("Skipped {skipped} boundary features without a name or polygon geometry");
    }

    boundaries
}

fn normalize_feature(feature: &Feature, name_property: &str) -> Option<CountryBoundary> {
    let name = feature
        .property(name_property)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.trim().is_empty())?
        .to_string();

    let geometry = feature.geometry.as_ref()?;
    if !matches!(
        geometry.value,
        geojson::Value::Polygon(_) | geojson::Value::MultiPolygon(_)
    ) {
        return None;
    }

    Some(CountryBoundary {
        key: boundary_key(&name),
        name,
        geometry: geometry.clone(),
    })
}

/// Join key for a boundary name: trimmed and lowercased, the same
/// normalization listing countries receive at load time.
#[must_use]
pub fn boundary_key(name: &str) -> String {
    name.trim().to_lowercase()
}
