#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Airbnb listing record types.
//!
//! [`RawListingRow`] mirrors one row of the listings CSV exactly as it
//! appears on disk (every cell a string). [`Listing`] is the normalized,
//! immutable record the rest of the dashboard works with. Conversion
//! between the two lives in [`Listing::from_row`].

use serde::{Deserialize, Serialize};

/// One row of the listings CSV, before any type coercion.
///
/// Column names match the published dataset, including its misspelled
/// `Availibility` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListingRow {
    /// `Room_ID` column.
    #[serde(rename = "Room_ID", default)]
    pub room_id: String,
    /// `Name` column.
    #[serde(rename = "Name", default)]
    pub name: String,
    /// `Host_ID` column.
    #[serde(rename = "Host_ID", default)]
    pub host_id: String,
    /// `Neighbourhood` column.
    #[serde(rename = "Neighbourhood", default)]
    pub neighbourhood: String,
    /// `Room_type` column.
    #[serde(rename = "Room_type", default)]
    pub room_type: String,
    /// `Room_Price` column.
    #[serde(rename = "Room_Price", default)]
    pub room_price: String,
    /// `Number_of_reviews` column.
    #[serde(rename = "Number_of_reviews", default)]
    pub number_of_reviews: String,
    /// `Rooms_rent_by_the_host` column.
    #[serde(rename = "Rooms_rent_by_the_host", default)]
    pub rooms_by_host: String,
    /// `Availibility` column.
    #[serde(rename = "Availibility", default)]
    pub availability: String,
    /// `City` column.
    #[serde(rename = "City", default)]
    pub city: String,
    /// `Country` column.
    #[serde(rename = "Country", default)]
    pub country: String,
    /// `Prospective_Revenue` column.
    #[serde(rename = "Prospective_Revenue", default)]
    pub prospective_revenue: String,
}

/// A normalized Airbnb listing.
///
/// Never mutated after load. `country` is always trimmed, lowercased and
/// non-empty; `prospective_revenue` is never `NaN`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Listing identifier.
    pub room_id: String,
    /// Listing title.
    pub name: String,
    /// Host identifier.
    pub host_id: String,
    /// Neighbourhood name as published (may be empty).
    pub neighbourhood: String,
    /// Room type (e.g. "Entire home/apt", "Private room").
    pub room_type: String,
    /// Nightly price, `None` when the cell was unparseable.
    pub room_price: Option<f64>,
    /// Number of reviews.
    pub number_of_reviews: u64,
    /// Number of rooms the host rents out.
    pub rooms_by_host: u64,
    /// Availability, `None` when the cell was unparseable.
    pub availability: Option<f64>,
    /// City name as published.
    pub city: String,
    /// Normalized (trimmed, lowercase) country name.
    pub country: String,
    /// Prospective revenue, `0.0` when the cell was unparseable.
    pub prospective_revenue: f64,
}

impl Listing {
    /// Normalizes a raw CSV row into a [`Listing`].
    ///
    /// Returns `None` if the row has no country, since every listing must
    /// belong to a country for the dashboard's drill-down to work.
    #[must_use]
    pub fn from_row(row: RawListingRow) -> Option<Self> {
        let country = normalize_country(&row.country);
        if country.is_empty() {
            return None;
        }

        Some(Self {
            room_id: row.room_id,
            name: row.name,
            host_id: row.host_id,
            neighbourhood: row.neighbourhood,
            room_type: row.room_type,
            room_price: coerce_number(&row.room_price),
            number_of_reviews: coerce_count(&row.number_of_reviews),
            rooms_by_host: coerce_count(&row.rooms_by_host),
            availability: coerce_number(&row.availability),
            city: row.city,
            country,
            prospective_revenue: coerce_number(&row.prospective_revenue)
                .filter(|v| *v >= 0.0)
                .unwrap_or(0.0),
        })
    }
}

/// Trims and lowercases a country name.
///
/// Boundary feature names go through the same normalization so that map
/// regions and listings can be joined on it.
#[must_use]
pub fn normalize_country(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Coerces a CSV cell to a number.
///
/// A blank cell is `0.0`. Anything that does not parse as a finite number
/// is `None`.
#[must_use]
pub fn coerce_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(0.0);
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerces a CSV cell to a non-negative count, defaulting to `0`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn coerce_count(cell: &str) -> u64 {
    match coerce_number(cell) {
        Some(v) if v > 0.0 && v < u64::MAX as f64 => v.trunc() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, revenue: &str) -> RawListingRow {
        RawListingRow {
            room_id: "1".to_string(),
            city: "Paris".to_string(),
            country: country.to_string(),
            prospective_revenue: revenue.to_string(),
            room_price: "120.5".to_string(),
            number_of_reviews: "14".to_string(),
            ..RawListingRow::default()
        }
    }

    #[test]
    fn normalizes_country_name() {
        let listing = Listing::from_row(row("  France ", "100")).unwrap();
        assert_eq!(listing.country, "france");
        assert_eq!(listing.city, "Paris");
    }

    #[test]
    fn skips_rows_without_country() {
        assert!(Listing::from_row(row("   ", "100")).is_none());
    }

    #[test]
    fn unparseable_revenue_is_zero() {
        let listing = Listing::from_row(row("spain", "n/a")).unwrap();
        assert!(listing.prospective_revenue.abs() < f64::EPSILON);
        assert!(!listing.prospective_revenue.is_nan());
    }

    #[test]
    fn blank_cells_coerce_to_zero() {
        assert_eq!(coerce_number(""), Some(0.0));
        assert_eq!(coerce_number("  "), Some(0.0));
        assert_eq!(coerce_count(""), 0);
    }

    #[test]
    fn garbage_cells_are_missing() {
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("inf"), None);
    }

    #[test]
    fn parses_numeric_fields() {
        let listing = Listing::from_row(row("italy", "2500.75")).unwrap();
        assert!((listing.prospective_revenue - 2500.75).abs() < f64::EPSILON);
        assert_eq!(listing.room_price, Some(120.5));
        assert_eq!(listing.number_of_reviews, 14);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(coerce_count("-3"), 0);
        assert_eq!(coerce_count("7.9"), 7);
    }
}
