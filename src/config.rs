//! Planner policy knobs.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::Pace;

/// Multipliers applied to the daily hour budget for each pace.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaceMultipliers {
    pub relaxed: f64,
    pub moderate: f64,
    pub fast: f64,
}

impl Default for PaceMultipliers {
    fn default() -> Self {
        Self {
            relaxed: 0.7,
            moderate: 1.0,
            fast: 1.3,
        }
    }
}

impl PaceMultipliers {
    pub fn for_pace(&self, pace: Pace) -> f64 {
        match pace {
            Pace::Relaxed => self.relaxed,
            Pace::Moderate => self.moderate,
            Pace::Fast => self.fast,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Sightseeing hours in a day at moderate pace.
    pub hours_per_day_base: f64,
    /// Rest/transit gap between consecutive attractions (hours).
    pub transition_buffer_hours: f64,
    /// Share of preference relevance blended into attraction similarity.
    pub preference_blend_weight: f64,
    /// Clock hour the first attraction of a day starts at.
    pub day_start_hour: f64,
    /// Effective travel hours that make up one travel day.
    pub travel_hours_per_day: f64,
    /// Cities whose fractional share is at or below this are dropped.
    pub min_city_days: f64,
    /// A bucket filled to this share of the daily hours is closed.
    pub bucket_close_ratio: f64,
    /// Used when attraction coordinates are missing or invalid (km).
    pub default_attraction_distance_km: f64,
    pub pace: PaceMultipliers,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            hours_per_day_base: 8.0,
            transition_buffer_hours: 0.5,
            preference_blend_weight: 0.5,
            day_start_hour: 9.0,
            travel_hours_per_day: 8.0,
            min_city_days: 0.5,
            bucket_close_ratio: 0.8,
            default_attraction_distance_km: 2.0,
            pace: PaceMultipliers::default(),
        }
    }
}

impl PlannerOptions {
    /// Load options from a JSON file; absent fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Hour ceiling for one day of sightseeing at `pace`.
    pub fn hours_per_day(&self, pace: Pace) -> f64 {
        self.hours_per_day_base * self.pace.for_pace(pace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_per_day_scales_with_pace() {
        let options = PlannerOptions::default();
        assert!((options.hours_per_day(Pace::Relaxed) - 5.6).abs() < 1e-9);
        assert!((options.hours_per_day(Pace::Moderate) - 8.0).abs() < 1e-9);
        assert!((options.hours_per_day(Pace::Fast) - 10.4).abs() < 1e-9);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let options: PlannerOptions =
            serde_json::from_str(r#"{"day_start_hour": 10.0, "pace": {"fast": 1.5}}"#).unwrap();
        assert_eq!(options.day_start_hour, 10.0);
        assert_eq!(options.pace.fast, 1.5);
        assert_eq!(options.pace.relaxed, 0.7);
        assert_eq!(options.hours_per_day_base, 8.0);
    }
}
