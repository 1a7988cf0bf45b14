//! Visiting order and clock times for one day.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::haversine::DistanceMatrix;
use crate::itinerary::ScheduledVisit;
use crate::model::Attraction;

/// Time of day as fractional hours since midnight.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ClockTime(f64);

impl ClockTime {
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Whole hour component.
    pub fn hour(&self) -> u32 {
        self.0.trunc().max(0.0) as u32
    }

    /// Whole minutes past the hour, truncated.
    pub fn minute(&self) -> u32 {
        ((self.0 - self.0.trunc()) * 60.0).trunc().max(0.0) as u32
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Order one day's attractions with a nearest-neighbor walk.
///
/// Starts at the first item of `subset` and repeatedly moves to the
/// closest unvisited item, breaking ties by position in `subset`. Subsets
/// of two or fewer items, or a missing matrix, are returned unchanged.
pub fn order_route(subset: &[usize], distances: Option<&DistanceMatrix>) -> Vec<usize> {
    let matrix = match distances {
        Some(matrix) if subset.len() > 2 => matrix,
        _ => return subset.to_vec(),
    };

    let n = subset.len();
    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    route.push(subset[0]);

    while route.len() < n {
        let mut next = None;
        let mut best = f64::INFINITY;
        for candidate in (0..n).filter(|&pos| !visited[pos]) {
            let distance = matrix
                .get(subset[current], subset[candidate])
                .unwrap_or(f64::INFINITY);
            if next.is_none() || distance < best {
                next = Some(candidate);
                best = distance;
            }
        }

        // `route.len() < n` guarantees an unvisited candidate.
        let Some(next) = next else { break };
        visited[next] = true;
        route.push(subset[next]);
        current = next;
    }

    route
}

/// Assign back-to-back visit times starting at `start_hour`, with
/// `buffer_hours` between the end of one visit and the start of the next.
pub fn schedule_visits(
    route: &[usize],
    attractions: &[Attraction],
    start_hour: f64,
    buffer_hours: f64,
) -> Vec<ScheduledVisit> {
    let mut clock = start_hour;
    route
        .iter()
        .map(|&idx| {
            let attraction = &attractions[idx];
            let start = clock;
            let end = start + attraction.duration_hours;
            clock = end + buffer_hours;
            ScheduledVisit {
                attraction: attraction.clone(),
                start_time: ClockTime::from_hours(start),
                end_time: ClockTime::from_hours(end),
            }
        })
        .collect()
}
