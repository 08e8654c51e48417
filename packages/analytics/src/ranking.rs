//! Top-N selection by revenue and by review count.

use std::collections::BTreeMap;

use airbnb_dashboard_analytics_models::{GroupEntry, GroupKey, GroupSummary, RankMode, ReviewTotal};
use airbnb_dashboard_listing_models::Listing;

/// Entries of `summary` sorted by total revenue, highest first.
///
/// The sort is stable: groups with equal revenue keep their grouping order.
#[must_use]
pub fn sorted_by_revenue(summary: &GroupSummary) -> Vec<GroupEntry> {
    let mut entries = summary.entries().to_vec();
    entries.sort_by(|a, b| b.stats.total_revenue.total_cmp(&a.stats.total_revenue));
    entries
}

/// Takes `n` entries from one end of the revenue ranking.
///
/// [`RankMode::High`] returns the first `n` entries, highest first.
/// [`RankMode::Low`] returns the last `n` entries reversed, so the lowest
/// comes first. Groups with an empty label never rank.
#[must_use]
pub fn rank(summary: &GroupSummary, mode: RankMode, n: usize) -> Vec<GroupEntry> {
    let sorted: Vec<GroupEntry> = sorted_by_revenue(summary)
        .into_iter()
        .filter(|e| !e.label.is_empty())
        .collect();

    match mode {
        RankMode::High => sorted.into_iter().take(n).collect(),
        RankMode::Low => sorted.into_iter().rev().take(n).collect(),
    }
}

/// Sums reviews of the listings passing `filter` per `key` and returns the
/// `n` largest totals, highest first.
///
/// Neighbourhood groups with a blank label are dropped before ranking.
#[must_use]
pub fn top_reviews<F>(listings: &[Listing], filter: F, key: GroupKey, n: usize) -> Vec<ReviewTotal>
where
    F: Fn(&Listing) -> bool,
{
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut totals: Vec<ReviewTotal> = Vec::new();

    for listing in listings.iter().filter(|&l| filter(l)) {
        let label = key.of(listing);
        let slot = *index.entry(label).or_insert_with(|| {
            totals.push(ReviewTotal {
                label: label.to_string(),
                reviews: 0,
            });
            totals.len() - 1
        });
        totals[slot].reviews += listing.number_of_reviews;
    }

    if key == GroupKey::Neighbourhood {
        totals.retain(|t| !t.label.trim().is_empty());
    }

    totals.sort_by(|a, b| b.reviews.cmp(&a.reviews));
    totals.truncate(n);
    totals
}

#[cfg(test)]
mod tests {
    use airbnb_dashboard_analytics_models::Filters;

    use super::*;
    use crate::aggregate_by;

    fn listing(city: &str, neighbourhood: &str, revenue: f64, reviews: u64) -> Listing {
        Listing {
            country: "france".to_string(),
            city: city.to_string(),
            neighbourhood: neighbourhood.to_string(),
            prospective_revenue: revenue,
            number_of_reviews: reviews,
            ..Listing::default()
        }
    }

    fn cities(revenues: &[(&str, f64)]) -> GroupSummary {
        let listings: Vec<Listing> = revenues
            .iter()
            .map(|(city, rev)| listing(city, "", *rev, 0))
            .collect();
        aggregate_by(&listings, GroupKey::City, &Filters::default())
    }

    fn labels(entries: &[GroupEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn high_is_descending_and_low_is_ascending() {
        let summary = cities(&[
            ("A", 5.0),
            ("B", 50.0),
            ("C", 20.0),
            ("D", 1.0),
            ("E", 35.0),
        ]);

        let high = rank(&summary, RankMode::High, 2);
        assert_eq!(labels(&high), vec!["B", "E"]);

        let low = rank(&summary, RankMode::Low, 2);
        assert_eq!(labels(&low), vec!["D", "A"]);

        for pair in high.windows(2) {
            assert!(pair[0].stats.total_revenue >= pair[1].stats.total_revenue);
        }
        for pair in low.windows(2) {
            assert!(pair[0].stats.total_revenue <= pair[1].stats.total_revenue);
        }
    }

    #[test]
    fn high_and_low_overlap_only_when_groups_are_few() {
        for total in 1..=12usize {
            let names: Vec<String> = (0..total).map(|i| format!("city-{i}")).collect();
            let revenues: Vec<(&str, f64)> = names
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), f64::from(u32::try_from(i).unwrap()) * 10.0))
                .collect();
            let summary = cities(&revenues);

            let n = 5;
            let high = rank(&summary, RankMode::High, n);
            let low = rank(&summary, RankMode::Low, n);
            let overlap = high
                .iter()
                .filter(|h| low.iter().any(|l| l.label == h.label))
                .count();

            assert_eq!(high.len(), total.min(n));
            assert_eq!(low.len(), total.min(n));
            assert_eq!(
                overlap,
                (2 * total.min(n)).saturating_sub(total),
                "unexpected overlap with {total} groups"
            );
        }
    }

    #[test]
    fn ties_keep_grouping_order() {
        let summary = cities(&[("X", 10.0), ("Y", 10.0), ("Z", 10.0)]);
        assert_eq!(labels(&rank(&summary, RankMode::High, 3)), vec!["X", "Y", "Z"]);
        assert_eq!(labels(&rank(&summary, RankMode::Low, 3)), vec!["Z", "Y", "X"]);
    }

    #[test]
    fn unlabelled_groups_never_rank() {
        let summary = cities(&[("", 1000.0), ("Nice", 10.0)]);
        assert_eq!(labels(&rank(&summary, RankMode::High, 10)), vec!["Nice"]);
    }

    #[test]
    fn empty_summary_ranks_empty() {
        assert!(rank(&GroupSummary::default(), RankMode::High, 10).is_empty());
        assert!(rank(&GroupSummary::default(), RankMode::Low, 10).is_empty());
    }

    #[test]
    fn top_reviews_sums_and_truncates() {
        let listings = vec![
            listing("Paris", "Marais", 0.0, 10),
            listing("Lyon", "Presqu'ile", 0.0, 3),
            listing("Paris", "Bastille", 0.0, 5),
            listing("Nice", "Port", 0.0, 12),
        ];
        let top = top_reviews(&listings, |_| true, GroupKey::City, 2);
        assert_eq!(
            top,
            vec![
                ReviewTotal {
                    label: "Paris".to_string(),
                    reviews: 15
                },
                ReviewTotal {
                    label: "Nice".to_string(),
                    reviews: 12
                },
            ]
        );
    }

    #[test]
    fn top_reviews_drops_blank_neighbourhoods() {
        let listings = vec![
            listing("Paris", "  ", 0.0, 100),
            listing("Paris", "Marais", 0.0, 1),
        ];
        let top = top_reviews(&listings, |l| l.city == "Paris", GroupKey::Neighbourhood, 10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].label, "Marais");
    }
}
