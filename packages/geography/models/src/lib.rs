#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Country boundary types.
//!
//! These types describe the polygons drawn by the choropleth map. They are
//! independent of the listing data; the two are joined on
//! [`CountryBoundary::key`].

use geojson::Geometry;
use serde::{Deserialize, Serialize};

/// A country polygon decoded from the boundary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryBoundary {
    /// Display name exactly as it appears in the boundary file.
    pub name: String,
    /// Trimmed, lowercased name used to join with listing countries.
    pub key: String,
    /// `Polygon` or `MultiPolygon` outline.
    pub geometry: Geometry,
}

/// How to find country features inside a boundary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryFieldMapping {
    /// `TopoJSON` object holding the country geometries. Falls back to the
    /// first object when absent or not found. Ignored for `GeoJSON` input.
    pub object: Option<String>,
    /// Feature property holding the country name.
    pub name_property: String,
}

impl Default for BoundaryFieldMapping {
    fn default() -> Self {
        Self {
            object: Some("europe".to_string()),
            name_property: "NAME".to_string(),
        }
    }
}
