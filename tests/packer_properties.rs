//! Structural properties of daily packing and route ordering.

use proptest::prelude::*;

use itinerary_planner::haversine::DistanceMatrix;
use itinerary_planner::packer::{DailyPacker, bucket_hours};
use itinerary_planner::route::order_route;

fn line_matrix(positions: &[f64]) -> DistanceMatrix {
    DistanceMatrix::new(
        positions
            .iter()
            .map(|a| positions.iter().map(|b| (a - b).abs()).collect())
            .collect(),
    )
}

fn sorted(mut values: Vec<usize>) -> Vec<usize> {
    values.sort_unstable();
    values
}

#[test]
fn test_overflow_spreads_to_lightest_day() {
    let packer = DailyPacker::new(4.0, 0.8);
    let durations = [3.5, 3.5, 1.0];
    let buckets = packer.pack(&durations, &[0.9, 0.8, 0.1], 2);

    assert_eq!(buckets.len(), 2);
    let hours: Vec<f64> = buckets.iter().map(|b| bucket_hours(b, &durations)).collect();
    assert_eq!(hours, vec![4.5, 3.5]);
}

proptest! {
    #[test]
    fn prop_pack_yields_exactly_num_days(
        durations in prop::collection::vec(0.5f64..6.0, 0..15),
        num_days in 1usize..6,
        hours_per_day in 4.0f64..12.0,
    ) {
        let scores: Vec<f64> = durations.iter().map(|d| 1.0 / d).collect();
        let buckets = DailyPacker::new(hours_per_day, 0.8).pack(&durations, &scores, num_days);
        prop_assert_eq!(buckets.len(), num_days);
    }

    #[test]
    fn prop_every_attraction_packed_once(
        durations in prop::collection::vec(0.5f64..10.0, 0..15),
        num_days in 1usize..6,
    ) {
        let scores: Vec<f64> = (0..durations.len()).map(|i| (i % 4) as f64).collect();
        let buckets = DailyPacker::new(8.0, 0.8).pack(&durations, &scores, num_days);

        let packed = sorted(buckets.into_iter().flatten().collect());
        let expected: Vec<usize> = (0..durations.len()).collect();
        prop_assert_eq!(packed, expected);
    }

    #[test]
    fn prop_route_is_permutation(
        positions in prop::collection::vec(-50.0f64..50.0, 1..12),
    ) {
        let matrix = line_matrix(&positions);
        let subset: Vec<usize> = (0..positions.len()).rev().collect();
        let route = order_route(&subset, Some(&matrix));

        prop_assert_eq!(route[0], subset[0]);
        prop_assert_eq!(sorted(route), sorted(subset));
    }

    #[test]
    fn prop_short_routes_unchanged(a in 0usize..10, b in 0usize..10) {
        let matrix = line_matrix(&[0.0; 10]);
        prop_assert_eq!(order_route(&[a, b], Some(&matrix)), vec![a, b]);
        prop_assert_eq!(order_route(&[a], Some(&matrix)), vec![a]);
    }
}
