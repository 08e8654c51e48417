#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Cross-filter dashboard over Airbnb listings.
//!
//! The [`Coordinator`] owns the listing store and the shared
//! [`Selection`](airbnb_dashboard_models::Selection). Raw gestures are
//! routed to the chart that owns them; the resulting event updates the
//! selection and every chart is re-rendered from it. Views are written
//! out through a [`Sink`](sink::Sink).

pub mod charts;
pub mod config;
pub mod coordinator;
pub mod format;
pub mod load;
pub mod sink;

pub use coordinator::Coordinator;
pub use load::{DashboardData, load};

use airbnb_dashboard_geography::GeographyError;
use airbnb_dashboard_listing::ListingError;
use thiserror::Error;

/// Errors that can occur while starting or rendering the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Loading the listings failed.
    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    /// Loading the country boundaries failed.
    #[error("Geography error: {0}")]
    Geography(#[from] GeographyError),

    /// The configuration file is not valid TOML or has wrong field types.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading the configuration or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing views or reading scripted gestures failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
