//! Owns the selection and keeps every chart in sync with it.

use airbnb_dashboard_analytics_models::RankMode;
use airbnb_dashboard_geography_models::CountryBoundary;
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_listing_models::normalize_country;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    config::ChartSettings,
    view::{ChartView, DashboardSnapshot, DropdownView, Tooltip},
};

use crate::charts::{
    ChartAdapter, RadialBarPlot, RegionMap, RevenueBarChart, ReviewBubbleChart, RoomTypeDonut,
};
use crate::load::DashboardData;

/// The dashboard's single writer.
///
/// Gestures go in through [`Coordinator::handle`], events through
/// [`Coordinator::apply`]. After every selection event all six charts are
/// re-rendered before either method returns.
pub struct Coordinator {
    store: ListingStore,
    countries: Vec<String>,
    selection: Selection,
    map: RegionMap,
    radial: RadialBarPlot,
    donut: RoomTypeDonut,
    bar_high: RevenueBarChart,
    bar_low: RevenueBarChart,
    bubble: ReviewBubbleChart,
}

impl Coordinator {
    /// Builds every chart and renders the initial, unselected state.
    #[must_use]
    pub fn new(
        store: ListingStore,
        boundaries: Vec<CountryBoundary>,
        settings: &ChartSettings,
    ) -> Self {
        let countries = store.countries().into_iter().map(str::to_string).collect();

        let mut coordinator = Self {
            store,
            countries,
            selection: Selection::default(),
            map: RegionMap::new(boundaries),
            radial: RadialBarPlot::new(settings.radial_bars),
            donut: RoomTypeDonut::new(),
            bar_high: RevenueBarChart::new(RankMode::High, settings.top_n),
            bar_low: RevenueBarChart::new(RankMode::Low, settings.top_n),
            bubble: ReviewBubbleChart::new(settings.bubble_top),
        };
        coordinator.update_charts();
        coordinator
    }

    /// [`Coordinator::new`] from loaded startup data.
    #[must_use]
    pub fn from_data(data: DashboardData, settings: &ChartSettings) -> Self {
        Self::new(data.store, data.boundaries, settings)
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Countries offered by the dropdown, in first-seen order.
    #[must_use]
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Listing store the charts are computed from.
    #[must_use]
    pub const fn store(&self) -> &ListingStore {
        &self.store
    }

    /// Routes a gesture to the chart or control that owns it and applies
    /// the resulting event.
    ///
    /// Returns the event, or `None` if the gesture was ignored.
    pub fn handle(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        let event = match gesture {
            Gesture::ChooseCountry { value } => Some(DashboardEvent::CountryChosen {
                country: Some(normalize_country(value)).filter(|v| !v.is_empty()),
            }),
            Gesture::Reset => Some(DashboardEvent::Reset),
            _ => self
                .adapters_mut()
                .into_iter()
                .find_map(|adapter| adapter.interact(gesture)),
        };

        match &event {
            Some(event) => {
                self.apply(event);
            }
            None => log::debug!("Ignored gesture {gesture:?}"),
        }
        event
    }

    /// Applies an event to the selection and re-renders every chart.
    ///
    /// [`DashboardEvent::BarCountChanged`] only resizes the circular bar
    /// plot. Returns `true` if the selection changed.
    pub fn apply(&mut self, event: &DashboardEvent) -> bool {
        if let DashboardEvent::BarCountChanged { count } = event {
            let applied = self.radial.set_bar_count(*count);
            log::debug!("Radial plot now shows {applied} bars");
            return false;
        }

        let changed = self.selection.apply(event);
        if matches!(event, DashboardEvent::Reset) {
            self.donut.clear_selection();
        }
        log::debug!(
            "Applied {event:?}: country={:?} city={:?} room_type={:?}",
            self.selection.country(),
            self.selection.city(),
            self.selection.room_type()
        );

        self.update_charts();
        changed
    }

    /// Re-renders every chart from the current selection.
    pub fn update_charts(&mut self) {
        let selection = self.selection.clone();
        let store = &self.store;

        for adapter in [
            &mut self.map as &mut dyn ChartAdapter,
            &mut self.bubble,
            &mut self.donut,
            &mut self.radial,
            &mut self.bar_high,
            &mut self.bar_low,
        ] {
            adapter.render(&selection, store);
        }

        let interactive = selection.city().is_none();
        self.bar_high.set_interactive(interactive);
        self.bar_low.set_interactive(interactive);
        self.radial.set_interactive(interactive);

        if selection.country().is_none() {
            self.bar_high.clear_selection();
            self.bar_low.clear_selection();
        }
    }

    /// View of one chart.
    #[must_use]
    pub fn view(&self, kind: ChartKind) -> ChartView {
        self.adapter(kind).view()
    }

    /// Hover text for an item of one chart.
    #[must_use]
    pub fn tooltip(&self, kind: ChartKind, label: &str) -> Option<Tooltip> {
        self.adapter(kind).tooltip(label)
    }

    /// The dropdown's options and current value.
    #[must_use]
    pub fn dropdown(&self) -> DropdownView {
        DropdownView {
            options: self.countries.clone(),
            value: self.selection.country().unwrap_or_default().to_string(),
        }
    }

    /// Every view, in layout order.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            selection: self.selection.clone(),
            dropdown: self.dropdown(),
            charts: self.adapters().iter().map(|a| a.view()).collect(),
        }
    }

    fn adapter(&self, kind: ChartKind) -> &dyn ChartAdapter {
        match kind {
            ChartKind::Map => &self.map,
            ChartKind::Radial => &self.radial,
            ChartKind::Donut => &self.donut,
            ChartKind::BarHigh => &self.bar_high,
            ChartKind::BarLow => &self.bar_low,
            ChartKind::Bubble => &self.bubble,
        }
    }

    fn adapters(&self) -> [&dyn ChartAdapter; 6] {
        [
            &self.map,
            &self.radial,
            &self.donut,
            &self.bar_high,
            &self.bar_low,
            &self.bubble,
        ]
    }

    fn adapters_mut(&mut self) -> [&mut dyn ChartAdapter; 6] {
        [
            &mut self.map,
            &mut self.radial,
            &mut self.donut,
            &mut self.bar_high,
            &mut self.bar_low,
            &mut self.bubble,
        ]
    }
}
