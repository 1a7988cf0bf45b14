//! Presentation document for a finished itinerary.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::itinerary::{DailyPlan, Itinerary, Meals};
use crate::model::Pace;
use crate::travel::TravelMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryReport {
    pub itinerary_summary: Summary,
    pub daily_plans: Vec<DayReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_days: usize,
    pub cities_visited: Vec<String>,
    pub countries_visited: Vec<String>,
    pub total_attractions: usize,
    pub preferences: Vec<String>,
    pub pace: Pace,
    pub generated_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day_number: u32,
    /// Filled in by the traveller.
    pub date: Option<String>,
    pub is_transition_day: bool,
    #[serde(flatten)]
    pub details: DayDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DayDetails {
    Transition {
        from_city: String,
        from_country: String,
        to_city: String,
        to_country: String,
        travel_details: TravelDetails,
        travel_tips: Vec<String>,
    },
    City {
        city: String,
        country: String,
        attractions: Vec<AttractionReport>,
        meals: Meals,
        #[serde(skip_serializing_if = "Option::is_none")]
        city_tips: Option<Vec<String>>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelDetails {
    pub mode: TravelMode,
    pub duration_hours: f64,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionReport {
    pub name: String,
    pub category: Vec<String>,
    pub duration_hours: f64,
    pub start_time: String,
    pub end_time: String,
    pub cost: String,
    pub description: String,
}

impl ItineraryReport {
    pub fn build(
        itinerary: &Itinerary,
        preferences: &[String],
        pace: Pace,
        generated_date: NaiveDate,
    ) -> Self {
        let mut cities = Vec::new();
        let mut countries = Vec::new();
        for plan in itinerary.days() {
            match plan {
                DailyPlan::City(day) => {
                    push_unique(&mut cities, &day.city);
                    push_unique(&mut countries, &day.country);
                }
                DailyPlan::Transition(day) => {
                    push_unique(&mut cities, &day.from_city);
                    push_unique(&mut cities, &day.to_city);
                    push_unique(&mut countries, &day.from_country);
                    push_unique(&mut countries, &day.to_country);
                }
            }
        }

        let summary = Summary {
            total_days: itinerary.len(),
            cities_visited: cities,
            countries_visited: countries,
            total_attractions: itinerary.attraction_count(),
            preferences: preferences.to_vec(),
            pace,
            generated_date: generated_date.format("%Y-%m-%d").to_string(),
        };

        let mut previous_city: Option<&str> = None;
        let daily_plans = itinerary
            .days()
            .iter()
            .map(|plan| {
                let report = day_report(plan, previous_city);
                previous_city = plan.as_city().map(|day| day.city.as_str());
                report
            })
            .collect();

        Self {
            itinerary_summary: summary,
            daily_plans,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty JSON to `path`, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn day_report(plan: &DailyPlan, previous_city: Option<&str>) -> DayReport {
    let details = match plan {
        DailyPlan::Transition(day) => DayDetails::Transition {
            from_city: day.from_city.clone(),
            from_country: day.from_country.clone(),
            to_city: day.to_city.clone(),
            to_country: day.to_country.clone(),
            travel_details: TravelDetails {
                mode: day.travel_mode,
                duration_hours: day.travel_time_hours,
                distance_km: day.distance_km,
            },
            travel_tips: day.tips.clone(),
        },
        DailyPlan::City(day) => {
            let first_day_in_city = previous_city != Some(day.city.as_str());
            DayDetails::City {
                city: day.city.clone(),
                country: day.country.clone(),
                attractions: day
                    .attractions
                    .iter()
                    .map(|visit| AttractionReport {
                        name: visit.attraction.name.clone(),
                        category: visit.attraction.categories.clone(),
                        duration_hours: visit.attraction.duration_hours,
                        start_time: visit.start_time.to_string(),
                        end_time: visit.end_time.to_string(),
                        cost: visit.attraction.cost.clone(),
                        description: visit.attraction.description.clone(),
                    })
                    .collect(),
                meals: day.meals.clone(),
                city_tips: first_day_in_city.then(|| city_tips(&day.city, &day.country)),
            }
        }
    };

    DayReport {
        day_number: plan.day(),
        date: None,
        is_transition_day: plan.is_transition(),
        details,
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Practical tips for a city, generic when the city is not known.
pub fn city_tips(city: &str, country: &str) -> Vec<String> {
    let known: &[&str] = match city {
        "Paris" => &[
            "Paris Metro tickets can be purchased in books of 10 ('carnet') for a discount.",
            "Many museums are free on the first Sunday of each month.",
            "The Paris Museum Pass gives access to over 50 museums and monuments.",
            "Locals often picnic along the Seine River in the evening.",
        ],
        "Barcelona" => &[
            "The Barcelona Card includes free public transport and discounts at many attractions.",
            "Be aware of pickpockets, especially on Las Ramblas and in crowded tourist areas.",
            "Many shops close for a few hours in the afternoon for siesta.",
            "Tapas bars are typically busiest after 9 PM.",
        ],
        "Rome" => &[
            "Drinking from Rome's public fountains ('nasoni') is safe and the water is refreshing.",
            "Many museums require reservations, especially the Vatican Museums.",
            "Dress code for churches requires covered shoulders and knees.",
            "Avoid driving in the historic center - use public transportation instead.",
        ],
        "Amsterdam" => &[
            "The I Amsterdam City Card includes free public transport and entry to many museums.",
            "Bike rental is the most popular way to get around the city.",
            "Watch out for bike lanes - pedestrians should stay on the sidewalks.",
            "Many museums and attractions require advance online booking.",
        ],
        _ => {
            return vec![
                format!("Public transportation is a convenient way to explore {}.", city),
                format!("Learn a few basic phrases in the local language of {}.", country),
                "Keep a copy of your hotel address and contact information with you.".to_string(),
                "Check opening hours for attractions as they may vary by season.".to_string(),
            ];
        }
    };

    known.iter().map(|tip| tip.to_string()).collect()
}
