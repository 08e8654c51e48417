//! Dashboard configuration.
//!
//! Every field has a default, so a TOML file only needs to name what it
//! overrides.

use airbnb_dashboard_analytics_models::TopNLimits;
use airbnb_dashboard_geography_models::BoundaryFieldMapping;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where the input files live.
    pub data: DataSources,
    /// How to read the boundary file.
    pub boundaries: BoundaryFieldMapping,
    /// Chart sizing.
    pub charts: ChartSettings,
}

/// Locations of the two input files. Each is a local path or an
/// `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    /// Listings CSV.
    pub listings: String,
    /// Country boundaries (`TopoJSON` or `GeoJSON`).
    pub boundaries: String,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            listings: "data/airbnb_listings.csv".to_string(),
            boundaries: "data/europe.topojson".to_string(),
        }
    }
}

/// How many items each chart shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Bars per revenue bar chart, per level.
    pub top_n: TopNLimits,
    /// Bubbles on the review bubble chart.
    pub bubble_top: usize,
    /// Initial bar count of the circular bar plot.
    pub radial_bars: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            top_n: TopNLimits::default(),
            bubble_top: 10,
            radial_bars: 20,
        }
    }
}
