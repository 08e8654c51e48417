//! Donut chart of revenue per room type.

use airbnb_dashboard_analytics::aggregate_by;
use airbnb_dashboard_analytics_models::{GroupEntry, GroupKey};
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, Selection,
    view::{ChartView, DonutSlice, DonutView, Tooltip, TooltipLine},
};

use super::ChartAdapter;
use crate::format;

/// Room type donut. Filtered by location only, so every room type stays
/// clickable while one is selected.
#[derive(Debug, Clone, Default)]
pub struct RoomTypeDonut {
    title: String,
    slices: Vec<GroupEntry>,
    total: f64,
    selected: Option<String>,
}

impl RoomTypeDonut {
    /// Creates an empty donut.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn share(&self, revenue: f64) -> f64 {
        if self.total > 0.0 {
            revenue / self.total
        } else {
            0.0
        }
    }
}

impl ChartAdapter for RoomTypeDonut {
    fn kind(&self) -> ChartKind {
        ChartKind::Donut
    }

    fn render(&mut self, selection: &Selection, store: &ListingStore) {
        let scope = selection.scope();
        let summary = aggregate_by(store.listings(), GroupKey::RoomType, &scope.filters(None));

        self.total = summary.total_revenue();
        self.slices = summary.into_entries();
        self.selected = selection.room_type().map(str::to_string);
        self.title = format!(
            "Revenue by Room Type in {}",
            scope.location.unwrap_or("All Countries")
        );
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }

    fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn view(&self) -> ChartView {
        ChartView::Donut(DonutView {
            title: self.title.clone(),
            total_revenue: self.total,
            slices: self
                .slices
                .iter()
                .map(|entry| {
                    let share = self.share(entry.stats.total_revenue);
                    DonutSlice {
                        room_type: entry.label.clone(),
                        revenue: entry.stats.total_revenue,
                        share,
                        label: format!("{} - {}", entry.label, format::percent(share)),
                        selected: self.selected.as_deref() == Some(entry.label.as_str()),
                    }
                })
                .collect(),
        })
    }

    fn interact(&mut self, gesture: &Gesture) -> Option<DashboardEvent> {
        let Gesture::ClickSlice { room_type } = gesture else {
            return None;
        };
        if !self.slices.iter().any(|s| &s.label == room_type) {
            return None;
        }
        Some(DashboardEvent::RoomTypeClicked {
            room_type: room_type.clone(),
        })
    }

    fn tooltip(&self, label: &str) -> Option<Tooltip> {
        let entry = self.slices.iter().find(|s| s.label == label)?;
        Some(Tooltip {
            heading: entry.label.clone(),
            lines: vec![
                TooltipLine::new("Revenue", format::dollars(entry.stats.total_revenue)),
                TooltipLine::new("Share", format::percent(self.share(entry.stats.total_revenue))),
            ],
        })
    }
}
