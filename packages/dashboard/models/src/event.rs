//! Dashboard events and the raw gestures that produce them.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Identifies one chart on the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChartKind {
    /// Choropleth map of revenue per country.
    Map,
    /// Donut chart of revenue per room type.
    Donut,
    /// Bar chart of the highest-revenue groups.
    BarHigh,
    /// Bar chart of the lowest-revenue groups.
    BarLow,
    /// Circular bar plot of revenue per group.
    Radial,
    /// Bubble chart of review counts.
    Bubble,
}

/// A request to change the dashboard selection (or, for
/// [`DashboardEvent::BarCountChanged`], a chart's presentation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A map region with data was clicked.
    RegionClicked {
        /// Normalized country key of the region.
        country: String,
    },
    /// A country was picked from the dropdown.
    CountryChosen {
        /// Picked country, `None` (or blank) for no country.
        country: Option<String>,
    },
    /// A donut slice was clicked.
    RoomTypeClicked {
        /// Room type of the slice.
        room_type: String,
    },
    /// A bar on either revenue bar chart was clicked.
    BarClicked {
        /// Label of the bar.
        label: String,
    },
    /// A bar on the circular bar plot was clicked.
    RadialClicked {
        /// Label of the bar.
        label: String,
    },
    /// The bubble chart navigated to a new level.
    BubbleDrill {
        /// Country to show, `None` for the country overview.
        country: Option<String>,
        /// City to show, `None` for the country's cities.
        city: Option<String>,
    },
    /// The circular bar plot's slider moved.
    BarCountChanged {
        /// Requested number of bars.
        count: usize,
    },
    /// The reset button was pressed.
    Reset,
}

/// A raw user gesture, before any chart has decided what it means.
///
/// Scripted sessions are lists of gestures in JSON, for example
/// `{"gesture": "click_bar", "chart": "bar_high", "label": "france"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Click on a map region.
    ClickRegion {
        /// Region name as shown on the map (any case or padding).
        name: String,
    },
    /// Change of the country dropdown. An empty value means no country.
    ChooseCountry {
        /// Dropdown value.
        value: String,
    },
    /// Click on a donut slice.
    ClickSlice {
        /// Room type of the slice.
        room_type: String,
    },
    /// Click on a bar of one of the revenue bar charts.
    ClickBar {
        /// Which bar chart.
        chart: ChartKind,
        /// Bar label.
        label: String,
    },
    /// Click on a bar of the circular bar plot.
    ClickRadial {
        /// Bar label.
        label: String,
    },
    /// Click on a bubble.
    ClickBubble {
        /// Bubble label.
        label: String,
    },
    /// The bubble chart's back button.
    BubbleBack,
    /// Move of the circular bar plot's slider.
    MoveSlider {
        /// Slider value.
        value: usize,
    },
    /// The reset button.
    Reset,
}
