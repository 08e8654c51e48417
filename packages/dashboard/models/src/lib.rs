#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared dashboard types.
//!
//! The cross-filter [`Selection`](selection::Selection), the events that
//! change it, the raw gestures chart adapters translate into events, the
//! per-chart view snapshots handed to renderers, and the dashboard
//! configuration.

pub mod config;
pub mod event;
pub mod selection;
pub mod view;

pub use config::DashboardConfig;
pub use event::{ChartKind, DashboardEvent, Gesture};
pub use selection::Selection;
