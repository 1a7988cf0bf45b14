//! Day allocation across cities.
//!
//! Turns per-city scores into whole-day stays under a fixed day budget.
//! Travel between the chosen cities is charged against the budget before
//! surplus days are handed out or a deficit is clawed back.

use tracing::{debug, warn};

use crate::config::PlannerOptions;
use crate::model::City;
use crate::scoring::PreferenceScorer;
use crate::traits::TravelEstimator;

/// Whole days per city, in descending score order.
///
/// Cities that received no days are absent; there is never a zero entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityAllocation {
    entries: Vec<(usize, u32)>,
}

impl CityAllocation {
    pub fn new(entries: Vec<(usize, u32)>) -> Self {
        Self {
            entries: entries.into_iter().filter(|&(_, days)| days > 0).collect(),
        }
    }

    /// Days allocated to the city at `city_index`, if it was selected.
    pub fn days_for(&self, city_index: usize) -> Option<u32> {
        self.entries
            .iter()
            .find(|(idx, _)| *idx == city_index)
            .map(|&(_, days)| days)
    }

    /// `(city_index, days)` pairs in allocation order.
    pub fn entries(&self) -> &[(usize, u32)] {
        &self.entries
    }

    pub fn total_days(&self) -> u32 {
        self.entries.iter().map(|&(_, days)| days).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct DayAllocator<'a, T> {
    cities: &'a [City],
    travel: &'a T,
    options: &'a PlannerOptions,
}

impl<'a, T: TravelEstimator> DayAllocator<'a, T> {
    pub fn new(cities: &'a [City], travel: &'a T, options: &'a PlannerOptions) -> Self {
        Self {
            cities,
            travel,
            options,
        }
    }

    /// Allocate `total_days` using one score per city (same order as `cities`).
    pub fn allocate(&self, scores: &[f64], total_days: u32) -> CityAllocation {
        let candidates = self.fractional_days(scores, total_days);

        let mut remaining = i64::from(total_days);
        let mut entries: Vec<(usize, u32)> = Vec::with_capacity(candidates.len());

        for &(city_index, fractional) in &candidates {
            let min_days = (fractional.floor() as u32).max(1);
            if i64::from(min_days) > remaining {
                debug!(
                    city = %self.cities[city_index].name,
                    min_days,
                    remaining,
                    "skipping city, not enough days left"
                );
                continue;
            }
            entries.push((city_index, min_days));
            remaining -= i64::from(min_days);
        }

        let sequence: Vec<usize> = entries.iter().map(|&(idx, _)| idx).collect();
        let travel_days = self.travel_days(&sequence);
        let mut remaining = remaining as f64 - travel_days;
        debug!(travel_days, remaining, "charged travel days");

        if entries.is_empty() {
            return CityAllocation::new(entries);
        }

        // Hand out surplus days, best cities first. A half-day remainder
        // still buys a day; the deficit pass below settles the overdraft.
        let mut cursor = 0;
        while remaining > 0.0 {
            entries[cursor].1 += 1;
            remaining -= 1.0;
            cursor = (cursor + 1) % entries.len();
        }

        // Claw back a deficit from the least important cities first.
        while remaining < 0.0 {
            let mut reduced = false;
            for entry in entries.iter_mut().rev() {
                if entry.1 > 1 {
                    entry.1 -= 1;
                    remaining += 1.0;
                    reduced = true;
                    if remaining >= 0.0 {
                        break;
                    }
                }
            }
            if !reduced {
                warn!(deficit = -remaining, "day budget overdrawn with every city at one day");
                break;
            }
        }

        CityAllocation::new(entries)
    }

    /// Days spent travelling along `sequence`, rounded up to half days.
    pub fn travel_days(&self, sequence: &[usize]) -> f64 {
        if sequence.len() <= 1 {
            return 0.0;
        }

        let total: f64 = sequence
            .windows(2)
            .map(|pair| {
                let from = &self.cities[pair[0]];
                let to = &self.cities[pair[1]];
                let distance = self.travel.distance_km(from, to);
                let (hours, _) = self.travel.travel_time_and_mode(distance);
                hours / self.options.travel_hours_per_day
            })
            .sum();

        (total * 2.0).ceil() / 2.0
    }

    /// Cities worth more than the minimum share, sorted by fractional days.
    fn fractional_days(&self, scores: &[f64], total_days: u32) -> Vec<(usize, f64)> {
        let n = self.cities.len().min(scores.len());
        if n == 0 {
            return Vec::new();
        }

        let total_score: f64 = scores[..n].iter().sum();
        let proportions: Vec<f64> = if total_score == 0.0 {
            warn!("all city scores are zero, distributing days uniformly");
            vec![1.0 / n as f64; n]
        } else {
            scores[..n].iter().map(|s| s / total_score).collect()
        };

        let mut candidates: Vec<(usize, f64)> = proportions
            .iter()
            .map(|p| p * f64::from(total_days))
            .enumerate()
            .filter(|&(_, days)| days > self.options.min_city_days)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates
    }
}

/// Score cities against `preferences` and allocate `total_days` among them.
pub fn allocate_days<T: TravelEstimator>(
    cities: &[City],
    preferences: &[String],
    total_days: u32,
    travel: &T,
    options: &PlannerOptions,
) -> CityAllocation {
    let scores = PreferenceScorer::new(preferences).city_scores(cities);
    DayAllocator::new(cities, travel, options).allocate(&scores, total_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel::TravelMode;

    /// Every leg takes a fixed number of hours.
    struct FixedTravel(f64);

    impl TravelEstimator for FixedTravel {
        fn distance_km(&self, _from: &City, _to: &City) -> f64 {
            0.0
        }

        fn travel_time_and_mode(&self, _distance_km: f64) -> (f64, TravelMode) {
            (self.0, TravelMode::Train)
        }
    }

    fn cities(n: usize) -> Vec<City> {
        (0..n).map(|i| City::new(format!("C{}", i), "X")).collect()
    }

    #[test]
    fn test_uniform_fallback_on_zero_scores() {
        let cities = cities(3);
        let options = PlannerOptions::default();
        let travel = FixedTravel(0.0);
        let allocation =
            DayAllocator::new(&cities, &travel, &options).allocate(&[0.0, 0.0, 0.0], 6);

        assert_eq!(allocation.entries(), &[(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_single_city_has_no_travel() {
        let cities = cities(1);
        let options = PlannerOptions::default();
        let travel = FixedTravel(100.0);
        let allocation = DayAllocator::new(&cities, &travel, &options).allocate(&[0.7], 5);

        assert_eq!(allocation.entries(), &[(0, 5)]);
    }

    #[test]
    fn test_travel_days_round_up_to_half() {
        let cities = cities(3);
        let options = PlannerOptions::default();
        let travel = FixedTravel(3.0);
        let allocator = DayAllocator::new(&cities, &travel, &options);

        // 2 legs * 3h / 8h = 0.75 -> 1.0
        assert_eq!(allocator.travel_days(&[0, 1, 2]), 1.0);
        assert_eq!(allocator.travel_days(&[0, 1]), 0.5);
        assert_eq!(allocator.travel_days(&[0]), 0.0);
    }

    #[test]
    fn test_small_share_is_dropped() {
        let cities = cities(2);
        let options = PlannerOptions::default();
        let travel = FixedTravel(0.0);
        // 0.05 / 1.0 * 4 days = 0.2 days
        let allocation = DayAllocator::new(&cities, &travel, &options).allocate(&[0.95, 0.05], 4);

        assert_eq!(allocation.entries(), &[(0, 4)]);
        assert_eq!(allocation.days_for(1), None);
    }

    #[test]
    fn test_deficit_taken_from_least_important() {
        let cities = cities(2);
        let options = PlannerOptions::default();
        // One leg of 8h = 1 travel day
        let travel = FixedTravel(8.0);
        let allocation = DayAllocator::new(&cities, &travel, &options).allocate(&[0.6, 0.4], 5);

        // fractional 3.0 / 2.0 -> 3 + 2 = 5, travel 1 -> second city gives one back
        assert_eq!(allocation.entries(), &[(0, 3), (1, 1)]);
    }

    #[test]
    fn test_half_day_remainder_goes_to_top_city_then_settles() {
        let cities = cities(2);
        let options = PlannerOptions::default();
        // One leg of 4h = half a travel day
        let travel = FixedTravel(4.0);
        let allocation = DayAllocator::new(&cities, &travel, &options).allocate(&[0.5, 0.5], 5);

        // 2 + 2 leaves 0.5: the top city takes a day, the other gives one back
        assert_eq!(allocation.entries(), &[(0, 3), (1, 1)]);
    }

    #[test]
    fn test_city_skipped_when_minimum_does_not_fit() {
        let cities = cities(4);
        let options = PlannerOptions::default();
        let travel = FixedTravel(0.0);
        // 0.75 days each, rounded up to one: the fourth city no longer fits
        let allocation =
            DayAllocator::new(&cities, &travel, &options).allocate(&[1.0, 1.0, 1.0, 1.0], 3);

        assert_eq!(allocation.entries(), &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(allocation.days_for(3), None);
    }

    #[test]
    fn test_empty_cities() {
        let cities: Vec<City> = Vec::new();
        let options = PlannerOptions::default();
        let travel = FixedTravel(0.0);
        assert!(DayAllocator::new(&cities, &travel, &options).allocate(&[], 5).is_empty());
    }

    #[test]
    fn test_allocation_drops_zero_entries() {
        let allocation = CityAllocation::new(vec![(0, 2), (1, 0)]);
        assert_eq!(allocation.len(), 1);
        assert_eq!(allocation.total_days(), 2);
    }
}
