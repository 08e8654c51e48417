//! Choropleth map of revenue per country.

use airbnb_dashboard_analytics::{country_stats, value_domain};
use airbnb_dashboard_analytics_models::{CountryStats, ValueDomain};
use airbnb_dashboard_geography::normalize::boundary_key;
use airbnb_dashboard_geography_models::CountryBoundary;
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{ChartView, MapLegend, MapRegion, MapView, Tooltip, TooltipLine},
};

use super::ChartAdapter;
use crate::format;

/// Choropleth map. Statistics always cover every listing; the selection
/// only moves the highlight.
#[derive(Debug, Clone)]
pub struct RegionMap {
    boundaries: Vec<CountryBoundary>,
    title: String,
    regions: Vec<MapRegion>,
    domain: Option<ValueDomain>,
}

impl RegionMap {
    /// Creates a map over the given country boundaries.
    #[must_use]
    pub const fn new(boundaries: Vec<CountryBoundary>) -> Self {
        Self {
            boundaries,
            title: String::new(),
            regions: Vec::new(),
            domain: None,
        }
    }

    fn region_tooltip(name: &str, stats: Option<&CountryStats>) -> Tooltip {
        let lines = match stats {
            Some(stats) => vec![
                TooltipLine::new("Total Revenue", format::dollars(stats.revenue)),
                TooltipLine::new("Total Listings", format::count(stats.listings)),
                TooltipLine::new("Avg Room Price", format::dollars_fixed(stats.avg_room_price)),
                TooltipLine::new("Avg Revenue", format::dollars(stats.avg_revenue)),
            ],
            None => vec![TooltipLine::new("Revenue", "No data available")],
        };
        Tooltip {
            heading: name.to_string(),
            lines,
        }
    }

    fn shade(&self, revenue: f64) -> Option<f64> {
        let domain = self.domain?;
        let span = domain.max - domain.min;
        Some(if span > 0.0 {
            ((revenue - domain.min) / span).clamp(0.0, 1.0)
        } else {
            0.5
        })
    }
}

impl ChartAdapter for RegionMap {
    fn kind(&self) -> ChartKind {
        ChartKind::Map
    }

    fn render(&mut self, selection: &Selection, store: &ListingStore) {
        let stats = country_stats(store.listings());
        self.domain = value_domain(stats.values().map(|s| s.revenue));
        self.title = "Total Revenue by Country".to_string();

        let selected = selection.country();
        self.regions = self
            .boundaries
            .iter()
            .map(|boundary| {
                let stats = stats
                    .get(&boundary.key)
                    .filter(|s| s.revenue > 0.0)
                    .copied();
                MapRegion {
                    name: boundary.name.clone(),
                    key: boundary.key.clone(),
                    geometry: boundary.geometry.clone(),
                    shade: stats.and_then(|s| self.shade(s.revenue)),
                    highlighted: selected.is_some_and(|c| c.to_lowercase() == boundary.key),
                    tooltip: Self::region_tooltip(&boundary.name, stats.as_ref()),
                    stats,
                }
            })
            .collect();

        let with_data = self.regions.iter().filter(|r| r.has_data()).count();
        log::debug!(
            "Map has {} regions, {with_data} with revenue data",
            self.regions.len()
        );
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn view(&self) -> ChartView {
        ChartView::Map(MapView {
            title: self.title.clone(),
            regions: self.regions.clone(),
            domain: self.domain,
            legend: self.domain.map(|d| MapLegend {
                min_label: format::abbreviate(d.min),
                max_label: format::abbreviate(d.max),
            }),
        })
    }

    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        let Gesture::ClickRegion { name } = gesture else {
            return None;
        };
        let key = boundary_key(name);
        let region = self.regions.iter().find(|r| r.key == key)?;
        if !region.has_data() {
            log::debug!("Ignoring click on '{}' (no data)", region.name);
            return None;
        }
        Some(DashboardEvent::RegionClicked { country: key })
    }

    fn tooltip(&self, label: &str) -> Option<Tooltip> {
        let key = boundary_key(label);
        self.regions
            .iter()
            .find(|r| r.key == key)
            .map(|r| r.tooltip.clone())
    }
}
