//! Startup loading of listings and country boundaries.

use airbnb_dashboard_geography::load_boundaries;
use airbnb_dashboard_geography_models::CountryBoundary;
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::DashboardConfig;

use crate::DashboardError;

/// Everything the dashboard reads at startup.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Normalized listings.
    pub store: ListingStore,
    /// Country polygons for the map.
    pub boundaries: Vec<CountryBoundary>,
}

/// Loads the listings and the boundaries concurrently.
///
/// # Errors
///
/// Returns [`DashboardError`] if either input cannot be fetched or parsed.
/// Nothing is rendered in that case.
pub async fn load(config: &DashboardConfig) -> Result<DashboardData, DashboardError> {
    let (store, boundaries) = tokio::try_join!(
        async {
            ListingStore::load(&config.data.listings)
                .await
                .map_err(DashboardError::from)
        },
        async {
            load_boundaries(&config.data.boundaries, &config.boundaries)
                .await
                .map_err(DashboardError::from)
        },
    )?;

    if store.is_empty() {
        log::warn!("No listings loaded; every chart will be empty");
    }

    Ok(DashboardData { store, boundaries })
}
