//! Top-N and bottom-N revenue bar charts.

use airbnb_dashboard_analytics::{aggregate_by, rank};
use airbnb_dashboard_analytics_models::{
    GroupEntry, LevelPolicy, RankMode, TopNLimits, ViewLevel,
};
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{AxisLabels, Bar, BarView, ChartView, Tooltip, TooltipLine},
};

use super::ChartAdapter;
use crate::format;

/// Revenue bar chart showing one end of the revenue ranking at the
/// current drill-down level.
#[derive(Debug, Clone)]
pub struct RevenueBarChart {
    mode: RankMode,
    limits: TopNLimits,
    level: ViewLevel,
    title: String,
    axis: AxisLabels,
    bars: Vec<GroupEntry>,
    selected_label: Option<String>,
    interactive: bool,
}

impl RevenueBarChart {
    /// Creates an empty chart for one ranking end.
    #[must_use]
    pub fn new(mode: RankMode, limits: TopNLimits) -> Self {
        Self {
            mode,
            limits,
            level: ViewLevel::Country,
            title: String::new(),
            axis: AxisLabels {
                x: ViewLevel::Country.axis_label().to_string(),
                y: "Revenue".to_string(),
            },
            bars: Vec::new(),
            selected_label: None,
            interactive: true,
        }
    }

    /// Sets the axis titles.
    pub fn set_axis_labels(&mut self, x: impl Into<String>, y: impl Into<String>) {
        self.axis = AxisLabels {
            x: x.into(),
            y: y.into(),
        };
    }

    /// Label of the last bar clicked, if any.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    fn title_for(&self, location: &str) -> String {
        let end = match self.mode {
            RankMode::High => "Top",
            RankMode::Low => "Bottom",
        };
        let subject = match self.level {
            ViewLevel::Country => self.level.plural().to_string(),
            ViewLevel::City | ViewLevel::Neighbourhood => {
                format!("{} in {location}", self.level.plural())
            }
        };
        format!("Revenue: {end} {} {subject}", self.bars.len())
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

impl ChartAdapter for RevenueBarChart {
    fn kind(&self) -> ChartKind {
        match self.mode {
            RankMode::High => ChartKind::BarHigh,
            RankMode::Low => ChartKind::BarLow,
        }
    }

    fn render(&mut self, selection: &Selection, store: &ListingStore) {
        let scope = selection.scope();
        self.level = LevelPolicy::ByLocation.resolve(scope);

        let summary = aggregate_by(
            store.listings(),
            self.level.group_key(),
            &scope.filters(selection.room_type()),
        );
        self.bars = rank(&summary, self.mode, self.limits.for_level(self.level));

        self.title = self.title_for(scope.location.unwrap_or_default());
        self.set_axis_labels(self.level.axis_label(), "Revenue");

        log::debug!(
            "{} rendered {} bars at {} level",
            self.kind(),
            self.bars.len(),
            self.level
        );
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn clear_selection(&mut self) {
        self.selected_label = None;
    }

    fn view(&self) -> ChartView {
        ChartView::Bar(BarView {
            kind: self.kind(),
            mode: self.mode,
            level: self.level,
            title: self.title.clone(),
            axis: self.axis.clone(),
            bars: self
                .bars
                .iter()
                .map(|entry| Bar {
                    label: entry.label.clone(),
                    stats: entry.stats,
                    selected: self.selected_label.as_deref() == Some(entry.label.as_str()),
                    tooltip: Self::bar_tooltip(entry),
                })
                .collect(),
            interactive: self.interactive,
        })
    }

    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        let Gesture::ClickBar { chart, label } = gesture else {
            return None;
        };
        if *chart != self.kind() || !self.interactive {
            return None;
        }
        if !self.bars.iter().any(|b| &b.label == label) {
            log::debug!("{} has no bar labelled '{label}'", self.kind());
            return None;
        }

        self.selected_label = Some(label.clone());
        Some(DashboardEvent::BarClicked {
            label: label.clone(),
        })
    }

    fn tooltip(&self, label: &str) -> Option<Tooltip> {
        self.bars
            .iter()
            .find(|b| b.label == label)
            .map(Self::bar_tooltip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::test_support::store;

    fn labels(chart: &RevenueBarChart) -> Vec<String> {
        let ChartView::Bar(view) = chart.view() else {
            panic!("bar chart produced a non-bar view");
        };
        view.bars.into_iter().map(|b| b.label).collect()
    }

    fn selection(country: Option<&str>, city: Option<&str>) -> Selection {
        let mut selection = Selection::default();
        selection.drill(country.map(str::to_string), city.map(str::to_string));
        selection
    }

    #[test]
    fn ranks_countries_without_selection() {
        let store = store();
        let mut high = RevenueBarChart::new(RankMode::High, TopNLimits::default());
        let mut low = RevenueBarChart::new(RankMode::Low, TopNLimits::default());
        high.render(&Selection::default(), &store);
        low.render(&Selection::default(), &store);

        assert_eq!(labels(&high), vec!["france", "spain"]);
        assert_eq!(labels(&low), vec!["spain", "france"]);
        assert_eq!(high.view().title(), "Revenue: Top 2 Countries");
        assert_eq!(low.view().title(), "Revenue: Bottom 2 Countries");
    }

    #[test]
    fn drills_to_cities_and_neighbourhoods() {
        let store = store();
        let mut chart = RevenueBarChart::new(RankMode::High, TopNLimits::default());

        chart.render(&selection(Some("france"), None), &store);
        assert_eq!(labels(&chart), vec!["Paris", "Lyon"]);
        assert_eq!(chart.view().title(), "Revenue: Top 2 Cities in france");

        chart.render(&selection(Some("france"), Some("Paris")), &store);
        assert_eq!(labels(&chart), vec!["Marais", "Bastille"]);
        assert_eq!(chart.view().title(), "Revenue: Top 2 Neighborhoods in Paris");

        let ChartView::Bar(view) = chart.view() else {
            unreachable!()
        };
        assert_eq!(view.axis.x, "Neighbourhood");
        assert_eq!(view.axis.y, "Revenue");
    }

    #[test]
    fn room_type_narrows_bars() {
        let store = store();
        let mut chart = RevenueBarChart::new(RankMode::High, TopNLimits::default());
        let mut selection = selection(Some("france"), None);
        selection.toggle_room_type("Private room".to_string());
        chart.render(&selection, &store);
        assert_eq!(labels(&chart), vec!["Lyon", "Paris"]);
    }

    #[test]
    fn limits_depend_on_level() {
        let store = store();
        let limits = TopNLimits {
            country: 1,
            city: 5,
            neighbourhood: 10,
        };
        let mut chart = RevenueBarChart::new(RankMode::High, limits);
        chart.render(&Selection::default(), &store);
        assert_eq!(labels(&chart), vec!["france"]);
    }

    #[test]
    fn click_emits_event_and_marks_bar() {
        let store = store();
        let mut chart = RevenueBarChart::new(RankMode::High, TopNLimits::default());
        chart.render(&Selection::default(), &store);

        let event = chart.interact(&Gesture::ClickBar {
            chart: ChartKind::BarHigh,
            label: "spain".to_string(),
        });
        assert_eq!(
            event,
            Some(DashboardEvent::BarClicked {
                label: "spain".to_string()
            })
        );
        assert_eq!(chart.selected_label(), Some("spain"));

        chart.clear_selection();
        assert_eq!(chart.selected_label(), None);
    }

    #[test]
    fn ignores_clicks_for_other_charts_or_when_disabled() {
        let store = store();
        let mut chart = RevenueBarChart::new(RankMode::High, TopNLimits::default());
        chart.render(&Selection::default(), &store);

        let other = Gesture::ClickBar {
            chart: ChartKind::BarLow,
            label: "spain".to_string(),
        };
        assert_eq!(chart.interact(&other), None);

        let missing = Gesture::ClickBar {
            chart: ChartKind::BarHigh,
            label: "italy".to_string(),
        };
        assert_eq!(chart.interact(&missing), None);

        chart.set_interactive(false);
        let click = Gesture::ClickBar {
            chart: ChartKind::BarHigh,
            label: "spain".to_string(),
        };
        assert_eq!(chart.interact(&click), None);
        assert_eq!(chart.selected_label(), None);
    }

    #[test]
    fn tooltip_lists_revenue_listings_and_price() {
        let store = store();
        let mut chart = RevenueBarChart::new(RankMode::High, TopNLimits::default());
        chart.render(&selection(Some("france"), None), &store);

        let tooltip = chart.tooltip("Paris").unwrap();
        assert_eq!(tooltip.heading, "Paris");
        assert_eq!(tooltip.lines[0].value, "$140");
        assert_eq!(tooltip.lines[1].value, "2");
        assert_eq!(tooltip.lines[2].value, "$7.00");
        assert!(chart.tooltip("Madrid").is_none());
    }

    #[test]
    fn empty_store_renders_no_bars() {
        let mut chart = RevenueBarChart::new(RankMode::Low, TopNLimits::default());
        chart.render(&Selection::default(), &ListingStore::default());
        assert!(labels(&chart).is_empty());
        assert_eq!(chart.view().title(), "Revenue: Bottom 0 Countries");
    }
}
