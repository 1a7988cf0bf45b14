//! End-to-end planning pipeline.

use tracing::info;

use crate::allocator::{CityAllocation, allocate_days};
use crate::config::PlannerOptions;
use crate::dataset::Dataset;
use crate::error::{PlannerError, Result};
use crate::haversine::DistanceMatrix;
use crate::itinerary::Itinerary;
use crate::model::{City, Pace};
use crate::scheduler::Scheduler;
use crate::similarity::{SimilarityMatrix, SimilarityWeighter};
use crate::traits::{DistanceMatrixProvider, EmbeddingProvider, TravelEstimator};

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub total_days: u32,
    pub preferences: Vec<String>,
    pub pace: Pace,
}

impl PlanRequest {
    pub fn new(total_days: u32, preferences: Vec<String>, pace: Pace) -> Self {
        Self {
            total_days,
            preferences,
            pace,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// Preference-weighted similarity per city; `None` for cities without attractions.
    pub similarity: Vec<Option<SimilarityMatrix>>,
    pub allocation: CityAllocation,
    pub itinerary: Itinerary,
}

/// Ties the optimization stages to their external collaborators.
pub struct Planner<E, D, T> {
    embedder: E,
    distances: D,
    travel: T,
    options: PlannerOptions,
}

impl<E, D, T> Planner<E, D, T>
where
    E: EmbeddingProvider,
    D: DistanceMatrixProvider,
    T: TravelEstimator,
{
    pub fn new(embedder: E, distances: D, travel: T, options: PlannerOptions) -> Self {
        Self {
            embedder,
            distances,
            travel,
            options,
        }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Run the whole pipeline. Either a complete itinerary or an error.
    pub fn plan(&self, dataset: &Dataset, request: &PlanRequest) -> Result<PlanOutcome> {
        if request.total_days == 0 {
            return Err(PlannerError::InvalidRequest(
                "total_days must be at least 1".to_string(),
            ));
        }

        let cities = dataset.cities();
        info!(
            cities = cities.len(),
            days = request.total_days,
            pace = %request.pace,
            "planning itinerary"
        );

        let similarity = self.similarity_matrices(cities, &request.preferences)?;
        let distances = self.distance_matrices(cities);

        let allocation = self.allocate_days(cities, &request.preferences, request.total_days);
        info!(cities = allocation.len(), days = allocation.total_days(), "allocated days");

        let itinerary = self.build_itinerary(
            cities,
            &distances,
            &allocation,
            &request.preferences,
            request.pace,
        );
        info!(
            days = itinerary.len(),
            attractions = itinerary.attraction_count(),
            "built itinerary"
        );

        Ok(PlanOutcome {
            similarity,
            allocation,
            itinerary,
        })
    }

    pub fn similarity_matrices(
        &self,
        cities: &[City],
        preferences: &[String],
    ) -> Result<Vec<Option<SimilarityMatrix>>> {
        let weighter = SimilarityWeighter::new(self.options.preference_blend_weight);
        Ok(weighter.for_cities(cities, preferences, &self.embedder)?)
    }

    /// One matrix per city; empty for cities without attractions.
    pub fn distance_matrices(&self, cities: &[City]) -> Vec<DistanceMatrix> {
        cities
            .iter()
            .map(|city| {
                if city.attractions.is_empty() {
                    DistanceMatrix::default()
                } else {
                    self.distances.matrix_for(&city.attractions)
                }
            })
            .collect()
    }

    pub fn allocate_days(
        &self,
        cities: &[City],
        preferences: &[String],
        total_days: u32,
    ) -> CityAllocation {
        allocate_days(cities, preferences, total_days, &self.travel, &self.options)
    }

    pub fn build_itinerary(
        &self,
        cities: &[City],
        distances: &[DistanceMatrix],
        allocation: &CityAllocation,
        preferences: &[String],
        pace: Pace,
    ) -> Itinerary {
        Scheduler::new(cities, distances, &self.travel, &self.options)
            .build_itinerary(allocation, preferences, pace)
    }
}
