//! Preference scoring for cities and attractions.
//!
//! Preferences match categories by case-insensitive equality. Composite
//! scores blend a 1-5 rating with the preference match fraction.

use crate::model::{Attraction, City};

const RATING_WEIGHT: f64 = 0.4;
const PREFERENCE_WEIGHT: f64 = 0.6;
const RATING_SCALE: f64 = 5.0;

/// Score used when there is nothing to match against.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Scores items against a fixed set of free-text preference tags.
#[derive(Debug, Clone, Default)]
pub struct PreferenceScorer {
    preferences: Vec<String>,
}

impl PreferenceScorer {
    pub fn new(preferences: &[String]) -> Self {
        Self {
            preferences: preferences.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Fraction of preferences found among `categories`, capped at 1.0.
    ///
    /// Normalized by the number of preferences, so matching every
    /// preference yields 1.0 however many categories go unmatched.
    pub fn match_fraction(&self, categories: &[String]) -> f64 {
        if categories.is_empty() || self.preferences.is_empty() {
            return NEUTRAL_SCORE;
        }

        let matches = self
            .preferences
            .iter()
            .filter(|pref| categories.iter().any(|c| c.to_lowercase() == **pref))
            .count();

        (matches as f64 / self.preferences.len() as f64).min(1.0)
    }

    /// Fraction of a city's attractions matching at least one preference.
    pub fn city_match_fraction(&self, city: &City) -> f64 {
        if city.attractions.is_empty() || self.preferences.is_empty() {
            return NEUTRAL_SCORE;
        }

        let matching = city
            .attractions
            .iter()
            .filter(|attraction| self.matches_any(attraction))
            .count();

        matching as f64 / city.attractions.len() as f64
    }

    /// `0.4 * popularity/5 + 0.6 * match_fraction`.
    pub fn attraction_score(&self, attraction: &Attraction) -> f64 {
        RATING_WEIGHT * (attraction.popularity / RATING_SCALE)
            + PREFERENCE_WEIGHT * self.match_fraction(&attraction.categories)
    }

    /// `0.4 * importance/5 + 0.6 * city_match_fraction`.
    pub fn city_score(&self, city: &City) -> f64 {
        RATING_WEIGHT * (city.importance / RATING_SCALE)
            + PREFERENCE_WEIGHT * self.city_match_fraction(city)
    }

    pub fn city_scores(&self, cities: &[City]) -> Vec<f64> {
        cities.iter().map(|city| self.city_score(city)).collect()
    }

    pub fn attraction_scores(&self, city: &City) -> Vec<f64> {
        city.attractions
            .iter()
            .map(|attraction| self.attraction_score(attraction))
            .collect()
    }

    fn matches_any(&self, attraction: &Attraction) -> bool {
        attraction
            .categories
            .iter()
            .any(|c| self.preferences.iter().any(|p| c.to_lowercase() == *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn cats(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_neutral_when_nothing_to_match() {
        let scorer = PreferenceScorer::new(&[]);
        assert_eq!(scorer.match_fraction(&cats(&["art"])), NEUTRAL_SCORE);

        let scorer = PreferenceScorer::new(&prefs(&["art"]));
        assert_eq!(scorer.match_fraction(&[]), NEUTRAL_SCORE);
    }

    #[test]
    fn test_case_insensitive_exact_match() {
        let scorer = PreferenceScorer::new(&prefs(&["ART", "food"]));
        assert_eq!(scorer.match_fraction(&cats(&["art", "history"])), 0.5);
        assert_eq!(scorer.match_fraction(&cats(&["artisan"])), 0.0);
    }

    #[test]
    fn test_normalized_by_preference_count() {
        let scorer = PreferenceScorer::new(&prefs(&["art"]));
        let fraction = scorer.match_fraction(&cats(&["art", "history", "museum", "park"]));
        assert_eq!(fraction, 1.0);
    }

    #[test]
    fn test_city_fraction_counts_each_attraction_once() {
        let city = City::new("Paris", "France")
            .with_attraction(Attraction::new("Louvre", "", 3.0, ["art", "museum"]))
            .with_attraction(Attraction::new("Tower", "", 2.0, ["landmark"]));
        let scorer = PreferenceScorer::new(&prefs(&["art", "museum"]));

        assert_eq!(scorer.city_match_fraction(&city), 0.5);
    }

    #[test]
    fn test_composite_scores() {
        let city = City::new("Paris", "France")
            .with_importance(5.0)
            .with_attraction(Attraction::new("Louvre", "", 3.0, ["art"]).with_popularity(5.0));
        let scorer = PreferenceScorer::new(&prefs(&["art"]));

        assert!((scorer.city_score(&city) - 1.0).abs() < 1e-12);
        assert!((scorer.attraction_score(&city.attractions[0]) - 1.0).abs() < 1e-12);
    }
}
