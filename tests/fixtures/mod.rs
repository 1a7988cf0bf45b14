//! Test fixtures for itinerary-planner.
//!
//! Provides:
//! - Real European cities and attractions with coordinates
//! - Deterministic stand-ins for the embedding and travel collaborators

#![allow(dead_code)]

pub mod european_cities;

pub use european_cities::*;

use itinerary_planner::error::EmbeddingError;
use itinerary_planner::model::City;
use itinerary_planner::traits::{EmbeddingProvider, TravelEstimator};
use itinerary_planner::travel::{TravelMode, estimate_travel};

/// Counts a fixed keyword list; identical input always gives identical output.
pub struct KeywordEmbedder;

const KEYWORDS: &[&str] = &["art", "museum", "history", "food", "landmark", "park", "church"];

impl EmbeddingProvider for KeywordEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                KEYWORDS
                    .iter()
                    .map(|k| lower.matches(k).count() as f32)
                    .collect()
            })
            .collect())
    }
}

/// Every pair of cities is the same distance apart.
pub struct FixedDistance(pub f64);

impl TravelEstimator for FixedDistance {
    fn distance_km(&self, _from: &City, _to: &City) -> f64 {
        self.0
    }

    fn travel_time_and_mode(&self, distance_km: f64) -> (f64, TravelMode) {
        estimate_travel(distance_km)
    }
}

/// Travel that costs nothing, to isolate allocation arithmetic.
pub struct Teleport;

impl TravelEstimator for Teleport {
    fn distance_km(&self, _from: &City, _to: &City) -> f64 {
        0.0
    }

    fn travel_time_and_mode(&self, _distance_km: f64) -> (f64, TravelMode) {
        (0.0, TravelMode::Bus)
    }
}

pub fn prefs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
