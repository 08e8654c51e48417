#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Listing store for the Airbnb dashboard.
//!
//! Loads the listings CSV from a local path or an `http(s)` URL, normalizes
//! every row into a [`Listing`](airbnb_dashboard_listing_models::Listing)
//! and keeps the result in a read-only [`ListingStore`](store::ListingStore).

pub mod fetch;
pub mod store;

pub use store::ListingStore;

use thiserror::Error;

/// Errors that can occur while loading listings.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
