//! Collaborator traits for the itinerary planner.
//!
//! The engine only talks to embedding models and geographic estimators
//! through these seams. Concrete implementations live in `embedding`,
//! `embedding_service`, `haversine` and `travel`; tests plug in mocks.

use crate::error::EmbeddingError;
use crate::haversine::DistanceMatrix;
use crate::model::{Attraction, City};
use crate::travel::TravelMode;

/// Produces one embedding vector per input text.
///
/// Implementations must preserve input order and be deterministic for a
/// fixed input and model.
pub trait EmbeddingProvider {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for &T {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed(texts)
    }
}

impl<T: EmbeddingProvider + ?Sized> EmbeddingProvider for Box<T> {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed(texts)
    }
}

/// Provides a pairwise distance matrix (km) between a city's attractions.
///
/// The matrix is indexed by the provided attraction order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, attractions: &[Attraction]) -> DistanceMatrix;
}

/// Estimates inter-city distances and the resulting travel leg.
pub trait TravelEstimator {
    /// Distance between two cities in kilometers.
    fn distance_km(&self, from: &City, to: &City) -> f64;

    /// Travel time in hours and the mode used to cover `distance_km`.
    fn travel_time_and_mode(&self, distance_km: f64) -> (f64, TravelMode);
}
