#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation result types and drill-down level definitions.
//!
//! Defines the filters an aggregation runs under, the grouping level a
//! chart shows ([`ViewLevel`]), the per-group statistics it produces
//! ([`GroupSummary`]) and the named policies charts use to pick a level
//! from the current scope ([`LevelPolicy`]).

use airbnb_dashboard_listing_models::Listing;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Field a listing is bucketed by.
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
pub enum GroupKey {
    /// Normalized country name.
    Country,
    /// City name.
    City,
    /// Neighbourhood name.
    Neighbourhood,
    /// Room type.
    RoomType,
}

impl GroupKey {
    /// Returns the value of this key for `listing`.
    #[must_use]
    pub fn of(self, listing: &Listing) -> &str {
        match self {
            Self::Country => &listing.country,
            Self::City => &listing.city,
            Self::Neighbourhood => &listing.neighbourhood,
            Self::RoomType => &listing.room_type,
        }
    }
}

/// Grouping level a chart is showing.
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
pub enum ViewLevel {
    /// One entry per country.
    Country,
    /// One entry per city within a country.
    City,
    /// One entry per neighbourhood within a city.
    Neighbourhood,
}

impl ViewLevel {
    /// The listing field entries at this level are grouped by.
    #[must_use]
    pub const fn group_key(self) -> GroupKey {
        match self {
            Self::Country => GroupKey::Country,
            Self::City => GroupKey::City,
            Self::Neighbourhood => GroupKey::Neighbourhood,
        }
    }

    /// Category axis label for bar charts.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::City => "City",
            Self::Neighbourhood => "Neighbourhood",
        }
    }

    /// Plural noun used in chart titles.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Country => "Countries",
            Self::City => "Cities",
            Self::Neighbourhood => "Neighborhoods",
        }
    }

    /// Singular noun used in chart titles.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::City => "City",
            Self::Neighbourhood => "Neighborhood",
        }
    }
}

/// Filter scope a chart is updated with: a city when one is selected,
/// otherwise the selected country (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    /// Scoped to a country, or to everything when there is no location.
    Country,
    /// Scoped to a single city.
    City,
}

/// A chart's filter scope: its level plus the location it is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    /// Scope level.
    pub level: ScopeLevel,
    /// Selected city at [`ScopeLevel::City`], selected country (or none)
    /// at [`ScopeLevel::Country`].
    pub location: Option<&'a str>,
}

impl<'a> Scope<'a> {
    /// Derives the scope from a country/city selection.
    #[must_use]
    pub const fn new(country: Option<&'a str>, city: Option<&'a str>) -> Self {
        match city {
            Some(city) => Self {
                level: ScopeLevel::City,
                location: Some(city),
            },
            None => Self {
                level: ScopeLevel::Country,
                location: country,
            },
        }
    }

    /// Filters matching this scope, optionally restricted to a room type.
    #[must_use]
    pub const fn filters(self, room_type: Option<&'a str>) -> Filters<'a> {
        match self.level {
            ScopeLevel::City => Filters {
                country: None,
                city: self.location,
                room_type,
            },
            ScopeLevel::Country => Filters {
                country: self.location,
                city: None,
                room_type,
            },
        }
    }
}

/// Named rules for choosing a chart's [`ViewLevel`] from its [`Scope`].
///
/// The bar charts and the radial bar plot were specified with different
/// conditions for the "country selected, no city yet" case. Both are kept
/// as separate policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelPolicy {
    /// Bar charts: a city scope shows neighbourhoods; otherwise any
    /// location shows its cities; otherwise countries.
    ByLocation,
    /// Radial bar plot: a city scope shows neighbourhoods; a country scope
    /// with a location shows cities; otherwise countries.
    ByLevelAndLocation,
}

impl LevelPolicy {
    /// Resolves the level a chart following this policy shows for `scope`.
    #[must_use]
    pub const fn resolve(self, scope: Scope<'_>) -> ViewLevel {
        match self {
            Self::ByLocation => match (scope.level, scope.location) {
                (ScopeLevel::City, _) => ViewLevel::Neighbourhood,
                (_, Some(_)) => ViewLevel::City,
                (_, None) => ViewLevel::Country,
            },
            Self::ByLevelAndLocation => match scope.level {
                ScopeLevel::City => ViewLevel::Neighbourhood,
                ScopeLevel::Country if scope.location.is_some() => ViewLevel::City,
                ScopeLevel::Country => ViewLevel::Country,
            },
        }
    }
}

/// Listing filters for an aggregation. Unset fields match everything.
///
/// When `city` is set, `country` is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters<'a> {
    /// Normalized country name.
    pub country: Option<&'a str>,
    /// City name.
    pub city: Option<&'a str>,
    /// Room type.
    pub room_type: Option<&'a str>,
}

impl Filters<'_> {
    /// Returns `true` if `listing` passes these filters.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        let location = match (self.city, self.country) {
            (Some(city), _) => listing.city == city,
            (None, Some(country)) => listing.country == country,
            (None, None) => true,
        };
        location && self.room_type.is_none_or(|rt| listing.room_type == rt)
    }
}

/// Summary statistics for one group of listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    /// Sum of prospective revenue.
    pub total_revenue: f64,
    /// Number of listings.
    pub listing_count: u64,
    /// Mean room price over listings with a known price, `0.0` if none.
    pub avg_room_price: f64,
    /// Sum of review counts.
    pub total_reviews: u64,
}

/// One labelled group in a [`GroupSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    /// Group label (the value of the group key).
    pub label: String,
    /// Statistics for the group.
    pub stats: GroupStats,
}

/// Result of an aggregation: groups in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSummary {
    entries: Vec<GroupEntry>,
}

impl GroupSummary {
    /// Wraps already-built entries.
    #[must_use]
    pub const fn new(entries: Vec<GroupEntry>) -> Self {
        Self { entries }
    }

    /// All entries in grouping order.
    #[must_use]
    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    /// Consumes the summary, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<GroupEntry> {
        self.entries
    }

    /// Statistics for `label`, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&GroupStats> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.stats)
    }

    /// Number of groups.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no groups.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of revenue across all groups.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.entries.iter().map(|e| e.stats.total_revenue).sum()
    }
}

/// Which end of a revenue ranking to take.
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
pub enum RankMode {
    /// Highest revenue first.
    High,
    /// Lowest revenue first.
    Low,
}

/// Number of entries a ranked chart shows, per [`ViewLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopNLimits {
    /// Limit when showing countries.
    pub country: usize,
    /// Limit when showing the cities of one country.
    pub city: usize,
    /// Limit when showing the neighbourhoods of one city.
    pub neighbourhood: usize,
}

impl Default for TopNLimits {
    fn default() -> Self {
        Self {
            country: 10,
            city: 5,
            neighbourhood: 10,
        }
    }
}

impl TopNLimits {
    /// Limit for `level`.
    #[must_use]
    pub const fn for_level(&self, level: ViewLevel) -> usize {
        match level {
            ViewLevel::Country => self.country,
            ViewLevel::City => self.city,
            ViewLevel::Neighbourhood => self.neighbourhood,
        }
    }
}

/// Total number of reviews for one group (bubble chart datum).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewTotal {
    /// Group label.
    pub label: String,
    /// Sum of review counts.
    pub reviews: u64,
}

/// Per-country statistics shown on the choropleth map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    /// Sum of prospective revenue.
    pub revenue: f64,
    /// Number of listings.
    pub listings: u64,
    /// Mean room price.
    pub avg_room_price: f64,
    /// Mean revenue per listing.
    pub avg_revenue: f64,
}

/// Minimum and maximum of a set of values (colour-scale domain).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}
