//! Loads [`DashboardConfig`] from TOML.

use std::path::Path;

use airbnb_dashboard_models::DashboardConfig;

use crate::DashboardError;

/// Configuration compiled into the binary.
const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Parses a TOML configuration. Missing fields take their defaults.
///
/// # Errors
///
/// Returns [`DashboardError::Config`] if the TOML is malformed or a field
/// has the wrong type.
pub fn parse_config(toml_str: &str) -> Result<DashboardConfig, DashboardError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// The embedded default configuration.
///
/// # Errors
///
/// Returns [`DashboardError::Config`] if the embedded file does not parse.
pub fn default_config() -> Result<DashboardConfig, DashboardError> {
    parse_config(DEFAULT_CONFIG)
}

/// Reads the configuration at `path`, or the embedded default when `path`
/// is `None`.
///
/// # Errors
///
/// Returns [`DashboardError`] if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, DashboardError> {
    match path {
        Some(path) => {
            log::info!("Reading configuration from {}", path.display());
            parse_config(&std::fs::read_to_string(path)?)
        }
        None => default_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_matches_type_defaults() {
        assert_eq!(default_config().unwrap(), DashboardConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [data]
            listings = "https://example.com/listings.csv"

            [charts.top_n]
            city = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.data.listings, "https://example.com/listings.csv");
        assert_eq!(config.data.boundaries, "data/europe.topojson");
        assert_eq!(config.charts.top_n.city, 3);
        assert_eq!(config.charts.top_n.country, 10);
        assert_eq!(config.charts.radial_bars, 20);
        assert_eq!(config.boundaries.name_property, "NAME");
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let err = parse_config("[charts]\nbubble_top = \"ten\"").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)), "got {err}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/dashboard.toml"))).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)), "got {err}");
    }
}
