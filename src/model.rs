//! Domain model: cities, attractions and travel pace.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_IMPORTANCE: f64 = 3.0;
pub const DEFAULT_POPULARITY: f64 = 3.0;
pub const DEFAULT_COST: &str = "€€";

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are finite and within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A single thing to do in a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attraction {
    pub name: String,
    pub description: String,
    /// Visit duration in hours, always positive.
    pub duration_hours: f64,
    /// Lowercased, trimmed category tags.
    pub categories: Vec<String>,
    /// Popularity in `[1, 5]`.
    pub popularity: f64,
    pub cost: String,
    pub best_time: Vec<String>,
    pub location: Option<Location>,
    /// Text fed to the embedding provider.
    #[serde(skip)]
    pub embedding_text: String,
}

impl Attraction {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        duration_hours: f64,
        categories: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        let name = name.into().trim().to_string();
        let description = description.into().trim().to_string();
        let categories = normalize_categories(categories);
        let embedding_text = embedding_text(&name, &description, &categories);

        Self {
            name,
            description,
            duration_hours,
            categories,
            popularity: DEFAULT_POPULARITY,
            cost: DEFAULT_COST.to_string(),
            best_time: vec!["morning".to_string(), "afternoon".to_string()],
            location: None,
            embedding_text,
        }
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(Location::new(lat, lng));
        self
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = cost.into();
        self
    }

    pub fn with_best_time(mut self, best_time: Vec<String>) -> Self {
        self.best_time = best_time;
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// A candidate destination with its attractions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub name: String,
    pub country: String,
    /// Importance in `[1, 5]`.
    pub importance: f64,
    pub location: Option<Location>,
    pub attractions: Vec<Attraction>,
}

impl City {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            importance: DEFAULT_IMPORTANCE,
            location: None,
            attractions: Vec::new(),
        }
    }

    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(Location::new(lat, lng));
        self
    }

    pub fn with_attraction(mut self, attraction: Attraction) -> Self {
        self.attractions.push(attraction);
        self
    }

    pub fn with_attractions(mut self, attractions: Vec<Attraction>) -> Self {
        self.attractions = attractions;
        self
    }
}

/// Qualitative travel speed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Fast,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pace::Relaxed => "relaxed",
            Pace::Moderate => "moderate",
            Pace::Fast => "fast",
        };
        f.write_str(name)
    }
}

/// Lowercase and trim category tags, dropping empty ones.
pub fn normalize_categories(categories: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    categories
        .into_iter()
        .map(|c| c.as_ref().trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}

fn embedding_text(name: &str, description: &str, categories: &[String]) -> String {
    format!(
        "{}. {} Categories: {}",
        name,
        description,
        categories.join(", ")
    )
}
