//! Itinerary output types.

use serde::Serialize;

use crate::model::Attraction;
use crate::route::ClockTime;
use crate::travel::TravelMode;

/// An attraction placed on the clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledVisit {
    #[serde(flatten)]
    pub attraction: Attraction,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub time: ClockTime,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
}

/// A sightseeing day in one city. May have no attractions (free day).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityDay {
    pub day: u32,
    #[serde(skip)]
    pub city_index: usize,
    pub city: String,
    pub country: String,
    pub attractions: Vec<ScheduledVisit>,
    pub meals: Meals,
}

/// A day spent moving between two cities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionDay {
    pub day: u32,
    pub from_city: String,
    pub from_country: String,
    pub to_city: String,
    pub to_country: String,
    pub travel_mode: TravelMode,
    pub travel_time_hours: f64,
    pub distance_km: f64,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DailyPlan {
    City(CityDay),
    Transition(TransitionDay),
}

impl DailyPlan {
    pub fn day(&self) -> u32 {
        match self {
            DailyPlan::City(plan) => plan.day,
            DailyPlan::Transition(plan) => plan.day,
        }
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, DailyPlan::Transition(_))
    }

    pub fn as_city(&self) -> Option<&CityDay> {
        match self {
            DailyPlan::City(plan) => Some(plan),
            DailyPlan::Transition(_) => None,
        }
    }

    pub fn as_transition(&self) -> Option<&TransitionDay> {
        match self {
            DailyPlan::Transition(plan) => Some(plan),
            DailyPlan::City(_) => None,
        }
    }
}

/// Day plans numbered contiguously from 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Itinerary {
    days: Vec<DailyPlan>,
}

impl Itinerary {
    pub fn new(days: Vec<DailyPlan>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DailyPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn city_days(&self) -> impl Iterator<Item = &CityDay> {
        self.days.iter().filter_map(DailyPlan::as_city)
    }

    pub fn transitions(&self) -> impl Iterator<Item = &TransitionDay> {
        self.days.iter().filter_map(DailyPlan::as_transition)
    }

    /// Number of attractions scheduled across all days.
    pub fn attraction_count(&self) -> usize {
        self.city_days().map(|day| day.attractions.len()).sum()
    }
}
