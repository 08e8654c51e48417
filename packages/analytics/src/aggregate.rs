//! Group-by aggregation over listings.

use std::collections::BTreeMap;

use airbnb_dashboard_analytics_models::{
    CountryStats, Filters, GroupEntry, GroupKey, GroupStats, GroupSummary, ValueDomain,
};
use airbnb_dashboard_listing_models::Listing;

/// Running totals for one group.
#[derive(Default)]
struct Accumulator {
    revenue: f64,
    count: u64,
    price_sum: f64,
    price_count: u64,
    reviews: u64,
}

impl Accumulator {
    fn add(&mut self, listing: &Listing) {
        self.revenue += listing.prospective_revenue;
        self.count += 1;
        if let Some(price) = listing.room_price {
            self.price_sum += price;
            self.price_count += 1;
        }
        self.reviews += listing.number_of_reviews;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self) -> GroupStats {
        GroupStats {
            total_revenue: self.revenue,
            listing_count: self.count,
            avg_room_price: if self.price_count == 0 {
                0.0
            } else {
                self.price_sum / self.price_count as f64
            },
            total_reviews: self.reviews,
        }
    }
}

/// Groups the listings that pass `filters` by `group_key` and reduces each
/// group to its [`GroupStats`].
///
/// Groups appear in the order their label is first seen. An empty or fully
/// filtered-out input yields an empty summary.
#[must_use]
pub fn aggregate<F>(listings: &[Listing], group_key: F, filters: &Filters<'_>) -> GroupSummary
where
    F: Fn(&Listing) -> &str,
{
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut groups: Vec<(&str, Accumulator)> = Vec::new();

    for listing in listings.iter().filter(|l| filters.matches(l)) {
        let label = group_key(listing);
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push((label, Accumulator::default()));
            groups.len() - 1
        });
        groups[slot].1.add(listing);
    }

    log::trace!(
        "Aggregated {} listings into {} groups ({filters:?})",
        listings.len(),
        groups.len()
    );

    GroupSummary::new(
        groups
            .into_iter()
            .map(|(label, acc)| GroupEntry {
                label: label.to_string(),
                stats: acc.finish(),
            })
            .collect(),
    )
}

/// [`aggregate`] with one of the standard [`GroupKey`]s.
#[must_use]
pub fn aggregate_by(listings: &[Listing], key: GroupKey, filters: &Filters<'_>) -> GroupSummary {
    aggregate(listings, |l| key.of(l), filters)
}

/// Revenue, listing count and averages for every country, unfiltered.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn country_stats(listings: &[Listing]) -> BTreeMap<String, CountryStats> {
    aggregate_by(listings, GroupKey::Country, &Filters::default())
        .into_entries()
        .into_iter()
        .map(|entry| {
            let stats = entry.stats;
            let avg_revenue = if stats.listing_count == 0 {
                0.0
            } else {
                stats.total_revenue / stats.listing_count as f64
            };
            (
                entry.label,
                CountryStats {
                    revenue: stats.total_revenue,
                    listings: stats.listing_count,
                    avg_room_price: stats.avg_room_price,
                    avg_revenue,
                },
            )
        })
        .collect()
}

/// Minimum and maximum of `values`, or `None` when there are none.
#[must_use]
pub fn value_domain(values: impl IntoIterator<Item = f64>) -> Option<ValueDomain> {
    values.into_iter().fold(None, |domain, v| {
        Some(match domain {
            None => ValueDomain { min: v, max: v },
            Some(d) => ValueDomain {
                min: d.min.min(v),
                max: d.max.max(v),
            },
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(country: &str, city: &str, revenue: f64, price: Option<f64>) -> Listing {
        Listing {
            country: country.to_string(),
            city: city.to_string(),
            prospective_revenue: revenue,
            room_price: price,
            number_of_reviews: 2,
            room_type: "Entire home/apt".to_string(),
            ..Listing::default()
        }
    }

    fn sample() -> Vec<Listing> {
        vec![
            listing("france", "Paris", 100.0, Some(80.0)),
            listing("france", "Lyon", 50.0, Some(40.0)),
            listing("spain", "Madrid", 30.0, Some(60.0)),
        ]
    }

    #[test]
    fn aggregates_by_country() {
        let summary = aggregate_by(&sample(), GroupKey::Country, &Filters::default());
        assert_eq!(summary.len(), 2);

        let france = summary.get("france").unwrap();
        assert!((france.total_revenue - 150.0).abs() < f64::EPSILON);
        assert_eq!(france.listing_count, 2);
        assert!((france.avg_room_price - 60.0).abs() < f64::EPSILON);
        assert_eq!(france.total_reviews, 4);

        let spain = summary.get("spain").unwrap();
        assert!((spain.total_revenue - 30.0).abs() < f64::EPSILON);
        assert_eq!(spain.listing_count, 1);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let summary = aggregate_by(&sample(), GroupKey::City, &Filters::default());
        let labels: Vec<&str> = summary.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Paris", "Lyon", "Madrid"]);
    }

    #[test]
    fn revenue_is_conserved_under_filters() {
        let listings = sample();
        let filter_sets = [
            Filters::default(),
            Filters {
                country: Some("france"),
                ..Filters::default()
            },
            Filters {
                city: Some("Madrid"),
                ..Filters::default()
            },
            Filters {
                room_type: Some("Private room"),
                ..Filters::default()
            },
        ];

        for filters in &filter_sets {
            for key in [GroupKey::Country, GroupKey::City, GroupKey::RoomType] {
                let summary = aggregate_by(&listings, key, filters);
                let expected: f64 = listings
                    .iter()
                    .filter(|l| filters.matches(l))
                    .map(|l| l.prospective_revenue)
                    .sum();
                assert!(
                    (summary.total_revenue() - expected).abs() < 1e-9,
                    "revenue mismatch for {filters:?} grouped by {key}"
                );
            }
        }
    }

    #[test]
    fn aggregation_is_idempotent() {
        let listings = sample();
        let filters = Filters {
            country: Some("france"),
            ..Filters::default()
        };
        let a = aggregate_by(&listings, GroupKey::City, &filters);
        let b = aggregate_by(&listings, GroupKey::City, &filters);
        assert_eq!(a, b);
        for (x, y) in a.entries().iter().zip(b.entries()) {
            assert_eq!(x.stats.total_revenue.to_bits(), y.stats.total_revenue.to_bits());
        }
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = aggregate_by(&[], GroupKey::Country, &Filters::default());
        assert!(summary.is_empty());
    }

    #[test]
    fn missing_prices_are_excluded_from_mean() {
        let listings = vec![
            listing("italy", "Rome", 10.0, Some(100.0)),
            listing("italy", "Rome", 10.0, None),
        ];
        let summary = aggregate_by(&listings, GroupKey::City, &Filters::default());
        let rome = summary.get("Rome").unwrap();
        assert!((rome.avg_room_price - 100.0).abs() < f64::EPSILON);

        let listings = vec![listing("italy", "Rome", 10.0, None)];
        let summary = aggregate_by(&listings, GroupKey::City, &Filters::default());
        assert!(summary.get("Rome").unwrap().avg_room_price.abs() < f64::EPSILON);
    }

    #[test]
    fn custom_key_function() {
        let summary = aggregate(
            &sample(),
            |l| {
                if l.prospective_revenue >= 50.0 {
                    "big"
                } else {
                    "small"
                }
            },
            &Filters::default(),
        );
        assert_eq!(summary.get("big").unwrap().listing_count, 2);
        assert_eq!(summary.get("small").unwrap().listing_count, 1);
    }

    #[test]
    fn country_stats_include_averages() {
        let stats = country_stats(&sample());
        let france = stats["france"];
        assert_eq!(france.listings, 2);
        assert!((france.avg_revenue - 75.0).abs() < f64::EPSILON);
        assert!((france.avg_room_price - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn value_domain_bounds() {
        assert_eq!(value_domain(std::iter::empty()), None);
        let domain = value_domain([3.0, 1.0, 7.0]).unwrap();
        assert!((domain.min - 1.0).abs() < f64::EPSILON);
        assert!((domain.max - 7.0).abs() < f64::EPSILON);
    }
}
