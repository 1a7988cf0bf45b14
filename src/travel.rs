//! Inter-city travel estimation.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::haversine::haversine_km;
use crate::model::{City, Location};
use crate::traits::TravelEstimator;

const FLIGHT_MIN_KM: f64 = 800.0;
const TRAIN_MIN_KM: f64 = 300.0;
const REGIONAL_TRAIN_MIN_KM: f64 = 100.0;

/// Representative coordinates for cities without an explicit location.
const KNOWN_CITIES: &[(&str, f64, f64)] = &[
    ("Paris", 48.8566, 2.3522),
    ("Barcelona", 41.3851, 2.1734),
    ("Rome", 41.9028, 12.4964),
    ("Amsterdam", 52.3676, 4.9041),
    ("London", 51.5074, -0.1278),
    ("Berlin", 52.5200, 13.4050),
    ("Prague", 50.0755, 14.4378),
    ("Vienna", 48.2082, 16.3738),
    ("Budapest", 47.4979, 19.0402),
    ("Athens", 37.9838, 23.7275),
    ("Madrid", 40.4168, -3.7038),
    ("Lisbon", 38.7223, -9.1393),
    ("Dublin", 53.3498, -6.2603),
    ("Stockholm", 59.3293, 18.0686),
    ("Copenhagen", 55.6761, 12.5683),
    ("Oslo", 59.9139, 10.7522),
    ("Helsinki", 60.1699, 24.9384),
    ("Warsaw", 52.2297, 21.0122),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Flight,
    Train,
    Bus,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TravelMode::Flight => "flight",
            TravelMode::Train => "train",
            TravelMode::Bus => "bus",
        };
        f.write_str(name)
    }
}

/// Travel hours (rounded to 0.1) and mode for a distance in km.
pub fn estimate_travel(distance_km: f64) -> (f64, TravelMode) {
    let (hours, mode) = if distance_km > FLIGHT_MIN_KM {
        (2.0 + distance_km / 800.0, TravelMode::Flight)
    } else if distance_km > TRAIN_MIN_KM {
        (1.0 + distance_km / 150.0, TravelMode::Train)
    } else {
        let mode = if distance_km > REGIONAL_TRAIN_MIN_KM {
            TravelMode::Train
        } else {
            TravelMode::Bus
        };
        (0.5 + distance_km / 100.0, mode)
    };

    (round_to(hours, 1), mode)
}

/// Advice for a transition day.
pub fn travel_tips(from: &City, to: &City, mode: TravelMode) -> Vec<String> {
    let mut tips = vec![format!(
        "Plan to check out of your accommodation in {} early.",
        from.name
    )];

    match mode {
        TravelMode::Flight => {
            tips.push("Arrive at the airport at least 2 hours before your flight.".to_string());
            tips.push("Consider booking a direct flight to save time.".to_string());
        }
        TravelMode::Train => {
            tips.push(
                "Train stations are usually in the city center, making transfers convenient."
                    .to_string(),
            );
            tips.push("Book your train tickets in advance for better prices.".to_string());
        }
        TravelMode::Bus => {
            tips.push(format!(
                "Bus travel offers a scenic route between {} and {}.",
                from.name, to.name
            ));
            tips.push(
                "Buses may have less frequent schedules, so check timetables carefully."
                    .to_string(),
            );
        }
    }

    tips.push(format!(
        "Upon arrival in {}, head to your accommodation to drop off luggage.",
        to.name
    ));
    tips
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Great-circle travel estimator.
///
/// Uses a city's own location when present, then the built-in table of
/// European capitals, then the origin.
#[derive(Debug, Clone, Default)]
pub struct GreatCircleTravel;

impl GreatCircleTravel {
    pub fn new() -> Self {
        Self
    }

    fn city_location(&self, city: &City) -> Location {
        if let Some(location) = city.location.filter(Location::is_valid) {
            return location;
        }

        KNOWN_CITIES
            .iter()
            .find(|(name, _, _)| *name == city.name)
            .map(|&(_, lat, lng)| Location::new(lat, lng))
            .unwrap_or_else(|| {
                warn!(city = %city.name, "no coordinates for city, using origin");
                Location::new(0.0, 0.0)
            })
    }
}

impl TravelEstimator for GreatCircleTravel {
    fn distance_km(&self, from: &City, to: &City) -> f64 {
        haversine_km(self.city_location(from), self.city_location(to))
    }

    fn travel_time_and_mode(&self, distance_km: f64) -> (f64, TravelMode) {
        estimate_travel(distance_km)
    }
}
