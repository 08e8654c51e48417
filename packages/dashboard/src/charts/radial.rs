//! Circular bar plot of revenue with a bar-count slider.

use airbnb_dashboard_analytics::{aggregate_by, sorted_by_revenue};
use airbnb_dashboard_analytics_models::{GroupEntry, LevelPolicy, ViewLevel};
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{ChartView, RadialBar, RadialView, SliderState, Tooltip, TooltipLine},
};

use super::ChartAdapter;
use crate::format;

/// Circular bar plot. Shows the highest-revenue groups at the current
/// level, as many as the slider allows.
#[derive(Debug, Clone)]
pub struct RadialBarPlot {
    default_bars: usize,
    level: ViewLevel,
    title: String,
    groups: Vec<GroupEntry>,
    max_bars: usize,
    interactive: bool,
}

impl RadialBarPlot {
    /// Creates an empty plot whose slider starts at `default_bars` after
    /// every update.
    #[must_use]
    pub const fn new(default_bars: usize) -> Self {
        Self {
            default_bars,
            level: ViewLevel::Country,
            title: String::new(),
            groups: Vec::new(),
            max_bars: 0,
            interactive: true,
        }
    }

    /// Slider bounds and position.
    #[must_use]
    pub fn slider(&self) -> SliderState {
        SliderState {
            min: 1,
            max: self.groups.len(),
            value: self.max_bars,
        }
    }

    /// Shows `count` bars, clamped to the slider range. Returns the count
    /// actually applied.
    pub fn set_bar_count(&mut self, count: usize) -> usize {
        self.max_bars = count.clamp(1, self.groups.len().max(1)).min(self.groups.len());
        self.max_bars
    }

    fn visible(&self) -> &[GroupEntry] {
        &self.groups[..self.max_bars.min(self.groups.len())]
    }

    fn bar_tooltip(entry: &GroupEntry) -> Tooltip {
        Tooltip {
            heading: entry.label.clone(),
            lines: vec![
                TooltipLine::new("Total Revenue", format::dollars(entry.stats.total_revenue)),
                TooltipLine::new("Total Listings", format::count(entry.stats.listing_count)),
                TooltipLine::new(
                    "Avg Room Price",
                    format::dollars_fixed(entry.stats.avg_room_price),
                ),
            ],
        }
    }
}

impl ChartAdapter for RadialBarPlot {
    fn kind(&self) -> ChartKind {
        ChartKind::Radial
    }

    fn render(&mut self, selection: &Selection, store: &ListingStore) {
        let scope = selection.scope();
        self.level = LevelPolicy::ByLevelAndLocation.resolve(scope);

        let summary = aggregate_by(
            store.listings(),
            self.level.group_key(),
            &scope.filters(selection.room_type()),
        );
        self.groups = sorted_by_revenue(&summary);
        self.max_bars = self.default_bars.min(self.groups.len());

        let location = scope.location.unwrap_or_default();
        self.title = match self.level {
            ViewLevel::Country => "Revenue by Country".to_string(),
            ViewLevel::City | ViewLevel::Neighbourhood => {
                format!("Revenue by {} in {location}", self.level.singular())
            }
        };

        log::debug!(
            "Radial plot has {} groups at {} level, showing {}",
            self.groups.len(),
            self.level,
            self.max_bars
        );
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn view(&self) -> ChartView {
        ChartView::Radial(RadialView {
            title: self.title.clone(),
            level: self.level,
            bars: self
                .visible()
                .iter()
                .map(|entry| RadialBar {
                    label: entry.label.clone(),
                    revenue: entry.stats.total_revenue,
                    tooltip: Self::bar_tooltip(entry),
                })
                .collect(),
            slider: self.slider(),
            interactive: self.interactive,
        })
    }

    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        match gesture {
            Gesture::ClickRadial { label } => {
                if !self.interactive || !self.visible().iter().any(|e| &e.label == label) {
                    return None;
                }
                Some(DashboardEvent::RadialClicked {
                    label: label.clone(),
                })
            }
            Gesture::MoveSlider { value } => {
                if self.groups.is_empty() {
                    return None;
                }
                let count = self.set_bar_count(*value);
                Some(DashboardEvent::BarCountChanged { count })
            }
            _ => None,
        }
    }

    fn tooltip(&self, label: &str) -> Option<Tooltip> {
        self.visible()
            .iter()
            .find(|e| e.label == label)
            .map(Self::bar_tooltip)
    }
}
