//! Loading and validating city/attraction data.
//!
//! Input is a JSON document of the form `{"cities": [...]}`. Validation
//! happens once here; the optimization stages assume well-formed data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::model::{Attraction, City, DEFAULT_IMPORTANCE, DEFAULT_POPULARITY, Location};

/// A validated set of candidate cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    cities: Vec<City>,
}

impl Dataset {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&raw)?;
        info!(path = %path.display(), cities = dataset.cities.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RawDocument = serde_json::from_str(json)?;
        let raw_cities = document
            .cities
            .ok_or_else(|| PlannerError::data("document", "'cities' key not found"))?;

        let cities = raw_cities
            .into_iter()
            .map(RawCity::validate)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    cities: Option<Vec<RawCity>>,
}

#[derive(Debug, Deserialize)]
struct RawCity {
    name: Option<String>,
    country: Option<String>,
    importance: Option<f64>,
    location: Option<Location>,
    #[serde(default, deserialize_with = "present")]
    attractions: Option<Option<Vec<RawAttraction>>>,
}

#[derive(Debug, Deserialize)]
struct RawAttraction {
    name: Option<String>,
    description: Option<String>,
    duration_hours: Option<f64>,
    categories: Option<RawList>,
    popularity: Option<f64>,
    cost: Option<String>,
    best_time: Option<RawList>,
    location: Option<Location>,
}

/// A list given either as a JSON array or a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawList {
    Items(Vec<String>),
    Text(String),
}

impl RawList {
    fn into_items(self) -> Vec<String> {
        match self {
            RawList::Items(items) => items,
            RawList::Text(text) => text.split(',').map(|s| s.trim().to_string()).collect(),
        }
    }
}

/// Distinguishes a present-but-null field from a missing one.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl RawCity {
    fn validate(self) -> Result<City> {
        let display_name = self.name.clone().unwrap_or_else(|| "Unknown".to_string());
        let context = format!("city '{}'", display_name);

        let name = self.name.ok_or_else(|| missing(&context, "name"))?;
        let country = self.country.ok_or_else(|| missing(&context, "country"))?;
        let attractions = self.attractions.ok_or_else(|| missing(&context, "attractions"))?;

        let importance = self.importance.unwrap_or(DEFAULT_IMPORTANCE);
        check_rating(&context, "importance", importance)?;

        let attractions = attractions
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(idx, raw)| raw.validate(idx, &name))
            .collect::<Result<Vec<_>>>()?;

        Ok(City {
            name,
            country,
            importance,
            location: self.location,
            attractions,
        })
    }
}

impl RawAttraction {
    fn validate(self, idx: usize, city: &str) -> Result<Attraction> {
        let label = self
            .name
            .clone()
            .unwrap_or_else(|| format!("Unknown (index {})", idx));
        let context = format!("attraction '{}' in {}", label, city);

        let name = self.name.ok_or_else(|| missing(&context, "name"))?;
        let description = self.description.ok_or_else(|| missing(&context, "description"))?;
        let duration_hours = self
            .duration_hours
            .ok_or_else(|| missing(&context, "duration_hours"))?;
        let categories = self
            .categories
            .ok_or_else(|| missing(&context, "categories"))?
            .into_items();

        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(PlannerError::data(
                context,
                format!("duration_hours must be positive, got {}", duration_hours),
            ));
        }

        let popularity = self.popularity.unwrap_or(DEFAULT_POPULARITY);
        check_rating(&context, "popularity", popularity)?;

        let mut attraction = Attraction::new(name, description, duration_hours, categories)
            .with_popularity(popularity);
        if let Some(cost) = self.cost {
            attraction = attraction.with_cost(cost);
        }
        if let Some(best_time) = self.best_time {
            attraction = attraction.with_best_time(best_time.into_items());
        }
        attraction.location = self.location;

        Ok(attraction)
    }
}

fn missing(context: &str, field: &str) -> PlannerError {
    PlannerError::data(context, format!("missing required field '{}'", field))
}

fn check_rating(context: &str, field: &str, value: f64) -> Result<()> {
    if (1.0..=5.0).contains(&value) {
        Ok(())
    } else {
        Err(PlannerError::data(
            context,
            format!("{} must be within [1, 5], got {}", field, value),
        ))
    }
}
