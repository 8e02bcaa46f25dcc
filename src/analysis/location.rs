//! Group-by-location aggregation.

use std::collections::HashMap;

use crate::analysis::types::{LocationStats, MostPollutedLocation};
use crate::analysis::utility::{mean, round_to};

/// Decimal places kept on per-location means.
const MEAN_DECIMALS: i32 = 2;

/// Groups measurements by location, in first-encountered order.
///
/// Rows with a missing location form no group. Missing measurements are
/// skipped within a group; a group whose readings are all missing keeps
/// `mean: None` and `count: 0`.
pub fn group_by_location<'a>(
    locations: impl IntoIterator<Item = Option<&'a str>>,
    values: &[Option<f64>],
) -> Vec<LocationStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut readings: HashMap<&str, Vec<f64>> = HashMap::new();

    for (location, value) in locations.into_iter().zip(values) {
        let Some(location) = location else {
            continue;
        };

        let series = readings.entry(location).or_insert_with(|| {
            order.push(location);
            Vec::new()
        });
        if let Some(v) = value {
            series.push(*v);
        }
    }

    order
        .into_iter()
        .map(|name| {
            let series = &readings[name];
            LocationStats {
                name: name.to_string(),
                mean: mean(series).map(|m| round_to(m, MEAN_DECIMALS)),
                count: series.len(),
            }
        })
        .collect()
}

/// Picks the group with the highest mean. Earlier groups win ties.
pub fn most_polluted(groups: &[LocationStats]) -> Option<MostPollutedLocation> {
    let mut best: Option<(&str, f64)> = None;

    for group in groups {
        let Some(group_mean) = group.mean else {
            continue;
        };
        if best.is_none_or(|(_, best_mean)| group_mean > best_mean) {
            best = Some((group.name.as_str(), group_mean));
        }
    }

    best.map(|(name, mean_pm25)| MostPollutedLocation {
        name: name.to_string(),
        mean_pm25,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_means_and_winner() {
        let groups = group_by_location(
            [Some("A"), Some("A"), Some("B")],
            &[Some(10.0), Some(20.0), Some(5.0)],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].mean, Some(15.0));
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].mean, Some(5.0));

        let winner = most_polluted(&groups).unwrap();
        assert_eq!(winner.name, "A");
        assert_eq!(winner.mean_pm25, 15.0);
    }

    #[test]
    fn test_missing_locations_are_excluded() {
        let groups = group_by_location([None, Some("B"), None], &[Some(99.0), Some(4.0), Some(80.0)]);

        assert_eq!(groups.len(), 1);
        assert_eq!(most_polluted(&groups).unwrap().name, "B");
    }

    #[test]
    fn test_tie_goes_to_first_encountered() {
        let groups = group_by_location(
            [Some("Z"), Some("A"), Some("Z")],
            &[Some(12.0), Some(12.0), Some(12.0)],
        );

        assert_eq!(most_polluted(&groups).unwrap().name, "Z");
    }

    #[test]
    fn test_tie_after_rounding() {
        let groups = group_by_location([Some("first"), Some("second")], &[Some(10.001), Some(10.004)]);

        assert_eq!(groups[0].mean, Some(10.0));
        assert_eq!(groups[1].mean, Some(10.0));
        assert_eq!(most_polluted(&groups).unwrap().name, "first");
    }

    #[test]
    fn test_mean_half_rounds_to_even() {
        let groups = group_by_location([Some("X"), Some("X")], &[Some(10.0), Some(10.25)]);

        let winner = most_polluted(&groups).unwrap();
        assert_eq!(winner.name, "X");
        assert_eq!(winner.mean_pm25, 10.12);
    }

    #[test]
    fn test_group_with_only_missing_readings_cannot_win() {
        let groups = group_by_location([Some("dead"), Some("live")], &[None, Some(3.0)]);

        assert_eq!(groups[0].mean, None);
        assert_eq!(groups[0].count, 0);
        assert_eq!(most_polluted(&groups).unwrap().name, "live");
    }

    #[test]
    fn test_no_groups() {
        let groups = group_by_location([None, None], &[Some(1.0), Some(2.0)]);

        assert!(groups.is_empty());
        assert_eq!(most_polluted(&groups), None);
    }
}
