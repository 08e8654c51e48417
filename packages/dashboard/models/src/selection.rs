//! Cross-filter selection state.

use airbnb_dashboard_analytics_models::Scope;
use serde::Serialize;

use crate::event::DashboardEvent;

/// Country, city and room type currently selected on the dashboard.
///
/// Fields are private: every mutation goes through methods that keep a
/// city from being selected without a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    country: Option<String>,
    city: Option<String>,
    room_type: Option<String>,
}

impl Selection {
    /// Selected (normalized) country.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Selected city.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Selected room type.
    #[must_use]
    pub fn room_type(&self) -> Option<&str> {
        self.room_type.as_deref()
    }

    /// Filter scope derived from the location part of the selection.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(self.country(), self.city())
    }

    /// Whether nothing is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.country.is_none() && self.city.is_none() && self.room_type.is_none()
    }

    /// Selects `country` (or none) and clears the city. Blank names count
    /// as none.
    pub fn set_country(&mut self, country: Option<String>) {
        self.country = country.filter(|c| !c.trim().is_empty());
        self.city = None;
    }

    /// Selects `city` inside the current country.
    ///
    /// Returns `false` and leaves the selection unchanged when no country
    /// is selected or `city` is blank.
    pub fn set_city(&mut self, city: String) -> bool {
        if self.country.is_none() || city.trim().is_empty() {
            return false;
        }
        self.city = Some(city);
        true
    }

    /// Sets country and city together. A city without a country clears
    /// both.
    pub fn drill(&mut self, country: Option<String>, city: Option<String>) {
        self.set_country(country);
        if let Some(city) = city {
            self.set_city(city);
        }
    }

    /// Selects `room_type`, or deselects it if it is already selected.
    pub fn toggle_room_type(&mut self, room_type: String) {
        if self.room_type.as_deref() == Some(room_type.as_str()) {
            self.room_type = None;
        } else {
            self.room_type = Some(room_type);
        }
    }

    /// Clears every selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies one dashboard event.
    ///
    /// Returns `true` if the selection changed.
    pub fn apply(&mut self, event: &DashboardEvent) -> bool {
        let before = self.clone();

        match event {
            DashboardEvent::RegionClicked { country } => {
                if self.country.as_deref() == Some(country.as_str()) {
                    self.set_country(None);
                } else {
                    self.set_country(Some(country.clone()));
                }
            }
            DashboardEvent::CountryChosen { country } => self.set_country(country.clone()),
            DashboardEvent::RoomTypeClicked { room_type } => {
                self.toggle_room_type(room_type.clone());
            }
            DashboardEvent::BarClicked { label } => self.drill_into(label),
            DashboardEvent::RadialClicked { label } => {
                if self.city.is_none() {
                    self.drill_into(label);
                }
            }
            DashboardEvent::BubbleDrill { country, city } => {
                self.drill(country.clone(), city.clone());
            }
            DashboardEvent::Reset => self.clear(),
            DashboardEvent::BarCountChanged { .. } => {}
        }

        *self != before
    }

    /// Country when none is selected, otherwise city.
    fn drill_into(&mut self, label: &str) {
        if self.country.is_none() {
            self.set_country(Some(label.to_string()));
        } else {
            self.set_city(label.to_string());
        }
    }
}
