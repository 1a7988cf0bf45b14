//! Packing a city's attractions into day-sized buckets.
//!
//! Buckets are filled first-fit in score order under an hour ceiling. Once
//! the day count is reached, leftover attractions are spread onto the
//! lightest buckets, which may push a day past the ceiling.

use tracing::{debug, warn};

use crate::config::PlannerOptions;
use crate::model::Pace;

#[derive(Debug, Clone)]
pub struct DailyPacker {
    /// Hour ceiling for the greedy fill of one day.
    pub hours_per_day: f64,
    /// A bucket at or above this share of the ceiling is closed.
    pub close_ratio: f64,
}

impl DailyPacker {
    pub fn new(hours_per_day: f64, close_ratio: f64) -> Self {
        Self {
            hours_per_day,
            close_ratio,
        }
    }

    pub fn from_options(options: &PlannerOptions, pace: Pace) -> Self {
        Self::new(options.hours_per_day(pace), options.bucket_close_ratio)
    }

    /// Group attraction indices into exactly `num_days` buckets.
    ///
    /// `durations` and `scores` are indexed by attraction. Every index
    /// appears in exactly one bucket; trailing buckets may be empty.
    /// Buckets come back in fill order; overflow never reorders them.
    pub fn pack(&self, durations: &[f64], scores: &[f64], num_days: usize) -> Vec<Vec<usize>> {
        if num_days == 0 {
            if !durations.is_empty() {
                warn!(attractions = durations.len(), "no days to pack attractions into");
            }
            return Vec::new();
        }

        let mut remaining: Vec<usize> = (0..durations.len()).collect();
        remaining.sort_by(|&a, &b| score_of(scores, b).total_cmp(&score_of(scores, a)));

        let mut buckets: Vec<Vec<usize>> = Vec::with_capacity(num_days);
        let mut current: Vec<usize> = Vec::new();
        let mut current_hours = 0.0;

        while !remaining.is_empty() && buckets.len() < num_days {
            let fit = remaining
                .iter()
                .position(|&idx| current_hours + durations[idx] <= self.hours_per_day);

            if let Some(pos) = fit {
                let idx = remaining.remove(pos);
                current.push(idx);
                current_hours += durations[idx];
            }

            if fit.is_none() || current_hours >= self.hours_per_day * self.close_ratio {
                if !current.is_empty() {
                    buckets.push(std::mem::take(&mut current));
                    current_hours = 0.0;
                } else if let Some(idx) = take_shortest(&mut remaining, durations) {
                    debug!(
                        attraction = idx,
                        hours = durations[idx],
                        "forcing oversized attraction into its own day"
                    );
                    buckets.push(vec![idx]);
                }
            }
        }

        if !current.is_empty() {
            buckets.push(current);
        }

        while let Some(idx) = take_shortest(&mut remaining, durations) {
            if buckets.len() < num_days {
                buckets.push(vec![idx]);
            } else {
                let target = lightest(&buckets, durations);
                debug!(attraction = idx, bucket = target, "overflow onto lightest day");
                buckets[target].push(idx);
            }
        }

        buckets.resize_with(num_days, Vec::new);
        buckets
    }
}

/// Total hours in a bucket.
pub fn bucket_hours(bucket: &[usize], durations: &[f64]) -> f64 {
    bucket.iter().map(|&idx| durations[idx]).sum()
}

fn score_of(scores: &[f64], idx: usize) -> f64 {
    scores.get(idx).copied().unwrap_or(0.0)
}

/// Remove and return the shortest remaining attraction (first on ties).
fn take_shortest(remaining: &mut Vec<usize>, durations: &[f64]) -> Option<usize> {
    let pos = remaining
        .iter()
        .enumerate()
        .min_by(|a, b| durations[*a.1].total_cmp(&durations[*b.1]))
        .map(|(pos, _)| pos)?;
    Some(remaining.remove(pos))
}

/// Index of the bucket with the smallest total duration (first on ties).
fn lightest(buckets: &[Vec<usize>], durations: &[f64]) -> usize {
    let mut best = 0;
    let mut best_hours = f64::INFINITY;
    for (i, bucket) in buckets.iter().enumerate() {
        let hours = bucket_hours(bucket, durations);
        if hours < best_hours {
            best = i;
            best_hours = hours;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer() -> DailyPacker {
        DailyPacker::new(8.0, 0.8)
    }

    #[test]
    fn test_single_day_takes_everything_that_fits() {
        let durations = [1.0; 5];
        let buckets = packer().pack(&durations, &[0.5; 5], 1);
        assert_eq!(buckets, vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn test_score_order_drives_fill() {
        let durations = [4.0, 4.0, 4.0];
        let scores = [0.1, 0.9, 0.5];
        let buckets = packer().pack(&durations, &scores, 2);
        // Bucket 1 reaches 8h (>= 6.4) with the two best attractions.
        assert_eq!(buckets[0], vec![1, 2]);
        assert_eq!(buckets[1], vec![0]);
    }

    #[test]
    fn test_oversized_attraction_forced_alone() {
        let durations = [10.0, 2.0];
        let scores = [0.9, 0.1];
        let buckets = packer().pack(&durations, &scores, 2);
        // 10h never fits; the 2h one opens day 1, then the 10h is forced.
        assert_eq!(buckets, vec![vec![1], vec![0]]);
    }

    #[test]
    fn test_overflow_goes_to_lightest_bucket() {
        let durations = [5.0, 5.0, 1.0];
        let scores = [0.9, 0.8, 0.1];
        let buckets = packer().pack(&durations, &scores, 1);
        // Day 1: 5h + 1h = 6h, the second 5h overflows onto the only day.
        assert_eq!(buckets, vec![vec![0, 2, 1]]);
        assert!(bucket_hours(&buckets[0], &durations) > 8.0);
    }

    #[test]
    fn test_leftovers_open_new_days_while_available() {
        let durations = [7.0, 7.0, 7.0];
        let scores = [0.3, 0.2, 0.1];
        let buckets = packer().pack(&durations, &scores, 3);
        assert_eq!(buckets, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_pads_with_free_days() {
        let buckets = packer().pack(&[2.0], &[0.5], 3);
        assert_eq!(buckets, vec![vec![0], vec![], vec![]]);
    }

    #[test]
    fn test_no_attractions() {
        assert_eq!(packer().pack(&[], &[], 2), vec![Vec::<usize>::new(), Vec::new()]);
    }

    #[test]
    fn test_zero_days() {
        assert!(packer().pack(&[1.0], &[0.5], 0).is_empty());
    }

    #[test]
    fn test_pace_changes_ceiling() {
        let options = PlannerOptions::default();
        let relaxed = DailyPacker::from_options(&options, Pace::Relaxed);
        assert!((relaxed.hours_per_day - 5.6).abs() < 1e-9);
    }
}
