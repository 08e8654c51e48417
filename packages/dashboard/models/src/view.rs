//! Renderer-facing chart snapshots.
//!
//! Each chart adapter produces one of these views after every update. A
//! view holds everything a renderer needs to draw the chart (titles,
//! labels, values, highlight state, tooltips) and nothing it has to
//! compute itself.

use airbnb_dashboard_analytics_models::{
    CountryStats, GroupStats, RankMode, ValueDomain, ViewLevel,
};
use geojson::Geometry;
use serde::{Deserialize, Serialize};

use crate::{event::ChartKind, selection::Selection};

/// Hover text for one chart item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Bold first line.
    pub heading: String,
    /// Label/value lines below the heading.
    pub lines: Vec<TooltipLine>,
}

/// One `label: value` line of a [`Tooltip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipLine {
    /// Line label.
    pub label: String,
    /// Formatted value.
    pub value: String,
}

impl TooltipLine {
    /// Creates a line.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One country polygon on the choropleth map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    /// Name as it appears in the boundary file.
    pub name: String,
    /// Join key (trimmed, lowercased name).
    pub key: String,
    /// Country outline, in boundary file coordinates.
    pub geometry: Geometry,
    /// Statistics, `None` when the country has no revenue.
    pub stats: Option<CountryStats>,
    /// Position of the revenue inside the colour domain, `0.0..=1.0`.
    /// `None` for regions drawn in the neutral "no data" style.
    pub shade: Option<f64>,
    /// Whether this is the selected country.
    pub highlighted: bool,
    /// Hover text.
    pub tooltip: Tooltip,
}

impl MapRegion {
    /// Regions without data are drawn greyed out and ignore clicks.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.stats.is_some()
    }
}

/// Colour legend of the choropleth map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLegend {
    /// Abbreviated minimum revenue.
    pub min_label: String,
    /// Abbreviated maximum revenue.
    pub max_label: String,
}

/// Choropleth map of revenue per country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    /// Chart title.
    pub title: String,
    /// Every boundary region, in boundary file order.
    pub regions: Vec<MapRegion>,
    /// Revenue colour domain, `None` without any data.
    pub domain: Option<ValueDomain>,
    /// Legend, `None` without any data.
    pub legend: Option<MapLegend>,
}

/// One donut slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutSlice {
    /// Room type.
    pub room_type: String,
    /// Revenue of the room type.
    pub revenue: f64,
    /// Share of total revenue, `0.0..=1.0`.
    pub share: f64,
    /// Label drawn next to the slice.
    pub label: String,
    /// Whether this room type is selected.
    pub selected: bool,
}

/// Donut chart of revenue per room type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutView {
    /// Chart title.
    pub title: String,
    /// Revenue across all slices.
    pub total_revenue: f64,
    /// Slices in grouping order.
    pub slices: Vec<DonutSlice>,
}

/// Axis titles of a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    /// Category axis.
    pub x: String,
    /// Value axis.
    pub y: String,
}

/// One bar of a revenue bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Group label.
    pub label: String,
    /// Group statistics.
    pub stats: GroupStats,
    /// Whether this bar was the last one clicked.
    pub selected: bool,
    /// Hover text.
    pub tooltip: Tooltip,
}

/// Top-N or bottom-N revenue bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarView {
    /// Which of the two bar charts.
    pub kind: ChartKind,
    /// Ranking end.
    pub mode: RankMode,
    /// Level the bars are grouped at.
    pub level: ViewLevel,
    /// Chart title.
    pub title: String,
    /// Axis titles.
    pub axis: AxisLabels,
    /// Bars in display order.
    pub bars: Vec<Bar>,
    /// Whether clicks are accepted.
    pub interactive: bool,
}

/// State of the circular bar plot's bar-count slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderState {
    /// Smallest value.
    pub min: usize,
    /// Largest value (number of groups).
    pub max: usize,
    /// Current value.
    pub value: usize,
}

/// One bar of the circular bar plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialBar {
    /// Group label.
    pub label: String,
    /// Group revenue.
    pub revenue: f64,
    /// Hover text.
    pub tooltip: Tooltip,
}

/// Circular bar plot of revenue per group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialView {
    /// Chart title.
    pub title: String,
    /// Level the bars are grouped at.
    pub level: ViewLevel,
    /// Bars, highest revenue first.
    pub bars: Vec<RadialBar>,
    /// Bar-count slider.
    pub slider: SliderState,
    /// Whether clicks are accepted.
    pub interactive: bool,
}

/// One bubble of the review bubble chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bubble {
    /// Group label.
    pub label: String,
    /// Label drawn inside the bubble.
    pub caption: String,
    /// Total reviews.
    pub reviews: u64,
    /// Hover text.
    pub tooltip: Tooltip,
}

/// Bubble chart of review counts with its own drill-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BubbleView {
    /// Chart title (empty when there is no data).
    pub title: String,
    /// Level the bubbles are grouped at.
    pub level: ViewLevel,
    /// Country being shown below the country level.
    pub country: Option<String>,
    /// City being shown at the neighbourhood level.
    pub city: Option<String>,
    /// Bubbles, most reviews first.
    pub bubbles: Vec<Bubble>,
    /// Whether the back button is shown.
    pub back_visible: bool,
    /// Message shown instead of bubbles when there is no data.
    pub placeholder: Option<String>,
}

/// Snapshot of any chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartView {
    /// Choropleth map.
    Map(MapView),
    /// Room type donut.
    Donut(DonutView),
    /// Revenue bar chart.
    Bar(BarView),
    /// Circular bar plot.
    Radial(RadialView),
    /// Review bubble chart.
    Bubble(BubbleView),
}

impl ChartView {
    /// Title of the chart.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Map(view) => &view.title,
            Self::Donut(view) => &view.title,
            Self::Bar(view) => &view.title,
            Self::Radial(view) => &view.title,
            Self::Bubble(view) => &view.title,
        }
    }
}

/// The country dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownView {
    /// Every listing country, in first-seen order.
    pub options: Vec<String>,
    /// Selected country, empty for none.
    pub value: String,
}

/// Everything on the dashboard after one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Current selection.
    pub selection: Selection,
    /// Country dropdown.
    pub dropdown: DropdownView,
    /// Chart views in layout order.
    pub charts: Vec<ChartView>,
}
