#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine behind every dashboard chart.
//!
//! All functions are pure and synchronous: they take a slice of listings
//! plus filters and return freshly built results. Group order is the order
//! in which labels first appear in the input, and every sort is stable, so
//! equal inputs always produce identical outputs.

pub mod aggregate;
pub mod ranking;

pub use aggregate::{aggregate, aggregate_by, country_stats, value_domain};
pub use ranking::{rank, sorted_by_revenue, top_reviews};
