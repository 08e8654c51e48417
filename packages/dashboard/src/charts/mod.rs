//! Chart adapters.
//!
//! An adapter turns the shared [`Selection`] and the listing store into one
//! chart's [`ChartView`], and turns raw gestures on that chart into
//! [`DashboardEvent`]s. Adapters never modify the selection themselves.

pub mod bar;
pub mod bubble;
pub mod donut;
pub mod map;
pub mod radial;

use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{ChartView, Tooltip},
};

pub use bar::RevenueBarChart;
pub use bubble::ReviewBubbleChart;
pub use donut::RoomTypeDonut;
pub use map::RegionMap;
pub use radial::RadialBarPlot;

/// One chart on the dashboard.
pub trait ChartAdapter {
    /// Which chart this is.
    fn kind(&self) -> ChartKind;

    /// Recomputes the chart for `selection`, replacing the previous view.
    ///
    /// Rendering the same selection twice yields the same view.
    fn render(&mut self, selection: &Selection, store: &ListingStore);

    /// Replaces the title until the next render.
    fn set_title(&mut self, title: String);

    /// Enables or disables click handling. Charts that are always
    /// interactive ignore this.
    fn set_interactive(&mut self, _interactive: bool) {}

    /// Forgets any item highlighted by a previous click.
    fn clear_selection(&mut self) {}

    /// Current view.
    fn view(&self) -> ChartView;

    /// Translates a gesture into at most one event.
    ///
    /// Gestures aimed at other charts, at items that are not drawn, or at
    /// a chart that is not interactive yield `None`.
    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent>;

    /// Hover text for the item labelled `label`, if it is drawn.
    fn tooltip(&self, label: &str) -> Option<Tooltip>;
}
