//! Bubble chart of review counts with its own drill-down and back button.

use airbnb_dashboard_analytics::top_reviews;
use airbnb_dashboard_analytics_models::{GroupKey, ReviewTotal, ViewLevel};
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_listing_models::Listing;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{Bubble, BubbleView, ChartView, Tooltip, TooltipLine},
};

use super::ChartAdapter;
use crate::format;

const NO_DATA: &str = "No data available";

/// Review bubble chart.
///
/// Countries and cities are matched case-insensitively. The chart's level
/// follows the selection: countries, then the selected country's cities,
/// then the selected city's neighbourhoods.
#[derive(Debug, Clone)]
pub struct ReviewBubbleChart {
    top: usize,
    level: ViewLevel,
    country: Option<String>,
    city: Option<String>,
    title: String,
    totals: Vec<ReviewTotal>,
}

impl ReviewBubbleChart {
    /// Creates an empty chart showing the `top` groups with the most
    /// reviews.
    #[must_use]
    pub const fn new(top: usize) -> Self {
        Self {
            top,
            level: ViewLevel::Country,
            country: None,
            city: None,
            title: String::new(),
            totals: Vec::new(),
        }
    }

    /// Level currently shown.
    #[must_use]
    pub const fn level(&self) -> ViewLevel {
        self.level
    }

    fn title_for(&self) -> String {
        let place = match self.level {
            ViewLevel::Country => None,
            ViewLevel::City => self.country.as_deref(),
            ViewLevel::Neighbourhood => self.city.as_deref(),
        };
        match place {
            Some(place) => format!(
                "Reviews: Top {} {} in {}",
                self.top,
                self.level.plural(),
                format::capitalize(place)
            ),
            None => format!("Reviews: Top {} {}", self.top, self.level.plural()),
        }
    }

    fn caption(label: &str) -> String {
        if label.is_empty() {
            "Unknown".to_string()
        } else {
            format::capitalize(label)
        }
    }

    fn bubble_tooltip(&self, total: &ReviewTotal) -> Tooltip {
        let upper = |s: Option<&str>| s.map_or_else(|| "N/A".to_string(), str::to_uppercase);
        let mut lines = Vec::new();
        if self.level == ViewLevel::Neighbourhood {
            lines.push(TooltipLine::new("City", upper(self.city.as_deref())));
        }
        if self.level != ViewLevel::Country {
            lines.push(TooltipLine::new("Country", upper(self.country.as_deref())));
        }
        lines.push(TooltipLine::new("Reviews", format::count(total.reviews)));

        Tooltip {
            heading: Self::caption(&total.label).to_uppercase(),
            lines,
        }
    }

    fn drill_event(&self, label: &str) -> Option<DashboardEvent> {
        match self.level {
            ViewLevel::Country => Some(DashboardEvent::BubbleDrill {
                country: Some(label.to_string()),
                city: None,
            }),
            ViewLevel::City => Some(DashboardEvent::BubbleDrill {
                country: self.country.clone(),
                city: Some(label.to_string()),
            }),
            ViewLevel::Neighbourhood => None,
        }
    }

    fn back_event(&self) -> Option<DashboardEvent> {
        match self.level {
            ViewLevel::Country => None,
            ViewLevel::City => Some(DashboardEvent::BubbleDrill {
                country: None,
                city: None,
            }),
            ViewLevel::Neighbourhood => Some(DashboardEvent::BubbleDrill {
                country: self.country.clone(),
                city: None,
            }),
        }
    }
}

fn same(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl ChartAdapter for ReviewBubbleChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bubble
    }

    fn render(&mut self, selection: &Selection, store: &ListingStore) {
        let room_type = selection.room_type();
        let of_room_type = |l: &Listing| room_type.is_none_or(|rt| l.room_type == rt);

        self.country = selection.country().map(str::to_string);
        self.city = selection.city().map(str::to_string);

        self.totals = match (selection.country(), selection.city()) {
            (Some(country), Some(city)) => {
                self.level = ViewLevel::Neighbourhood;
                top_reviews(
                    store.listings(),
                    |l| of_room_type(l) && same(&l.country, country) && same(&l.city, city),
                    GroupKey::Neighbourhood,
                    self.top,
                )
            }
            (Some(country), None) => {
                self.level = ViewLevel::City;
                top_reviews(
                    store.listings(),
                    |l| of_room_type(l) && same(&l.country, country),
                    GroupKey::City,
                    self.top,
                )
            }
            _ => {
                self.level = ViewLevel::Country;
                top_reviews(store.listings(), of_room_type, GroupKey::Country, self.top)
            }
        };

        self.title = if self.totals.is_empty() {
            String::new()
        } else {
            self.title_for()
        };

        log::debug!(
            "Bubble chart shows {} {} groups",
            self.totals.len(),
            self.level
        );
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn view(&self) -> ChartView {
        ChartView::Bubble(BubbleView {
            title: self.title.clone(),
            level: self.level,
            country: self.country.clone(),
            city: self.city.clone(),
            bubbles: self
                .totals
                .iter()
                .map(|total| Bubble {
                    label: total.label.clone(),
                    caption: Self::caption(&total.label),
                    reviews: total.reviews,
                    tooltip: self.bubble_tooltip(total),
                })
                .collect(),
            back_visible: self.level != ViewLevel::Country,
            placeholder: self.totals.is_empty().then(|| NO_DATA.to_string()),
        })
    }

    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        match gesture {
            Gesture::ClickBubble { label } => {
                if !self.totals.iter().any(|t| &t.label == label) {
                    return None;
                }
                self.drill_event(label)
            }
            Gesture::BubbleBack => self.back_event(),
            _ => None,
        }
    }

    fn tooltip(&self, label: &str) -> Option<Tooltip> {
        self.totals
            .iter()
            .find(|t| t.label == label)
            .map(|t| self.bubble_tooltip(t))
    }
}
