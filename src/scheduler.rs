//! Day-by-day itinerary assembly.
//!
//! Walks the allocated cities (longest stay first), packs each city's
//! attractions into its days, orders and times each day, and inserts a
//! transition day between consecutive cities.

use tracing::{debug, info};

use crate::allocator::CityAllocation;
use crate::config::PlannerOptions;
use crate::haversine::DistanceMatrix;
use crate::itinerary::{CityDay, DailyPlan, Itinerary, Meal, Meals, ScheduledVisit, TransitionDay};
use crate::model::{City, Pace};
use crate::packer::DailyPacker;
use crate::route::{ClockTime, order_route, schedule_visits};
use crate::scoring::PreferenceScorer;
use crate::travel::{round_to, travel_tips};
use crate::traits::TravelEstimator;

const FOOD_CATEGORY: &str = "food";
const LUNCH_HOURS: std::ops::RangeInclusive<u32> = 11..=14;
const DINNER_FROM_HOUR: u32 = 17;

pub struct Scheduler<'a, T> {
    cities: &'a [City],
    /// One matrix per city, indexed like `cities`.
    distances: &'a [DistanceMatrix],
    travel: &'a T,
    options: &'a PlannerOptions,
}

impl<'a, T: TravelEstimator> Scheduler<'a, T> {
    pub fn new(
        cities: &'a [City],
        distances: &'a [DistanceMatrix],
        travel: &'a T,
        options: &'a PlannerOptions,
    ) -> Self {
        Self {
            cities,
            distances,
            travel,
            options,
        }
    }

    /// Build the full itinerary for an allocation.
    pub fn build_itinerary(
        &self,
        allocation: &CityAllocation,
        preferences: &[String],
        pace: Pace,
    ) -> Itinerary {
        let scorer = PreferenceScorer::new(preferences);
        let packer = DailyPacker::from_options(self.options, pace);

        let mut order = allocation.entries().to_vec();
        order.sort_by(|a, b| b.1.cmp(&a.1));

        let mut days = Vec::new();
        let mut day_number = 1;
        let mut previous: Option<usize> = None;

        for (city_index, num_days) in order {
            if let Some(prev) = previous.filter(|&prev| prev != city_index) {
                days.push(DailyPlan::Transition(self.transition_day(day_number, prev, city_index)));
                day_number += 1;
            }

            info!(city = %self.cities[city_index].name, days = num_days, "planning city");
            for mut plan in self.plan_city_days(city_index, num_days as usize, &scorer, &packer) {
                plan.day = day_number;
                days.push(DailyPlan::City(plan));
                day_number += 1;
            }

            previous = Some(city_index);
        }

        Itinerary::new(days)
    }

    /// Plans for `num_days` in one city. Day numbers are left at zero.
    pub fn plan_city_days(
        &self,
        city_index: usize,
        num_days: usize,
        scorer: &PreferenceScorer,
        packer: &DailyPacker,
    ) -> Vec<CityDay> {
        let city = &self.cities[city_index];
        if city.attractions.is_empty() {
            return (0..num_days).map(|_| self.city_day(city_index, Vec::new())).collect();
        }

        let scores = scorer.attraction_scores(city);
        let durations: Vec<f64> = city.attractions.iter().map(|a| a.duration_hours).collect();
        let buckets = packer.pack(&durations, &scores, num_days);
        let matrix = self.distances.get(city_index).filter(|m| !m.is_empty());

        buckets
            .iter()
            .map(|bucket| {
                let route = order_route(bucket, matrix);
                debug!(city = %city.name, ?route, "ordered day");
                let visits = schedule_visits(
                    &route,
                    &city.attractions,
                    self.options.day_start_hour,
                    self.options.transition_buffer_hours,
                );
                self.city_day(city_index, visits)
            })
            .collect()
    }

    fn city_day(&self, city_index: usize, visits: Vec<ScheduledVisit>) -> CityDay {
        let city = &self.cities[city_index];
        CityDay {
            day: 0,
            city_index,
            city: city.name.clone(),
            country: city.country.clone(),
            meals: suggest_meals(city, &visits),
            attractions: visits,
        }
    }

    fn transition_day(&self, day: u32, from_index: usize, to_index: usize) -> TransitionDay {
        let from = &self.cities[from_index];
        let to = &self.cities[to_index];
        let distance = self.travel.distance_km(from, to);
        let (hours, mode) = self.travel.travel_time_and_mode(distance);

        TransitionDay {
            day,
            from_city: from.name.clone(),
            from_country: from.country.clone(),
            to_city: to.name.clone(),
            to_country: to.country.clone(),
            travel_mode: mode,
            travel_time_hours: hours,
            distance_km: round_to(distance, 1),
            tips: travel_tips(from, to, mode),
        }
    }
}

/// Default meals, with food attractions taking over lunch or dinner.
///
/// A food attraction starting between 11:00 and 14:59 becomes lunch; one
/// starting at 17:00 or later becomes dinner. Later visits win.
pub fn suggest_meals(city: &City, visits: &[ScheduledVisit]) -> Meals {
    let mut meals = Meals {
        breakfast: Meal {
            time: ClockTime::from_hours(8.0),
            suggestion: format!("Local breakfast in {}", city.name),
        },
        lunch: Meal {
            time: ClockTime::from_hours(13.0),
            suggestion: format!("Lunch near attractions in {}", city.name),
        },
        dinner: Meal {
            time: ClockTime::from_hours(19.0),
            suggestion: format!("Traditional {} cuisine for dinner", city.country),
        },
    };

    for visit in visits.iter().filter(|v| v.attraction.has_category(FOOD_CATEGORY)) {
        let hour = visit.start_time.hour();
        let meal = Meal {
            time: visit.start_time,
            suggestion: format!("Enjoy {}", visit.attraction.name),
        };

        if LUNCH_HOURS.contains(&hour) {
            meals.lunch = meal;
        } else if hour >= DINNER_FROM_HOUR {
            meals.dinner = meal;
        }
    }

    meals
}
