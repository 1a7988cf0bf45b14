//! Great-circle distances between attractions.
//!
//! Straight-line distance ignores streets but needs nothing beyond the
//! coordinates already in the dataset.

use crate::model::{Attraction, Location};
use crate::traits::DistanceMatrixProvider;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance used when an attraction has no usable coordinates.
pub const DEFAULT_DISTANCE_KM: f64 = 2.0;

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Location, to: Location) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Symmetric pairwise distance matrix (km) with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance between items `i` and `j`, if both are in range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }
}

/// Haversine-based attraction distance provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Distance assumed for pairs with missing or invalid coordinates.
    pub default_distance_km: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self {
            default_distance_km: DEFAULT_DISTANCE_KM,
        }
    }
}

impl HaversineMatrix {
    pub fn new(default_distance_km: f64) -> Self {
        Self { default_distance_km }
    }

    fn pair_distance(&self, from: Option<Location>, to: Option<Location>) -> f64 {
        match (from, to) {
            (Some(a), Some(b)) if a.is_valid() && b.is_valid() => haversine_km(a, b),
            _ => self.default_distance_km,
        }
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, attractions: &[Attraction]) -> DistanceMatrix {
        let n = attractions.len();
        let mut rows = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i + 1..n {
                let km = self.pair_distance(attractions[i].location, attractions[j].location);
                rows[i][j] = km;
                rows[j][i] = km;
            }
        }

        DistanceMatrix::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Attraction {
        Attraction::new("a", "", 1.0, ["x"]).with_location(lat, lng)
    }

    #[test]
    fn test_haversine_same_point() {
        let p = Location::new(48.8566, 2.3522);
        assert!(haversine_km(p, p) < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Paris to Rome is ~1105 km
        let dist = haversine_km(Location::new(48.8566, 2.3522), Location::new(41.9028, 12.4964));
        assert!(dist > 1080.0 && dist < 1130.0, "Paris to Rome should be ~1105km, got {}", dist);
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let provider = HaversineMatrix::default();
        let attractions = vec![at(48.86, 2.33), at(48.85, 2.29), at(48.88, 2.34)];
        let matrix = provider.matrix_for(&attractions);

        for i in 0..attractions.len() {
            assert_eq!(matrix.get(i, i), Some(0.0), "Diagonal should be zero");
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let provider = HaversineMatrix::default();
        let matrix = provider.matrix_for(&[at(48.86, 2.33), at(48.85, 2.29)]);
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0), "Matrix should be symmetric");
    }

    #[test]
    fn test_missing_or_invalid_coordinates_use_default() {
        let provider = HaversineMatrix::default();
        let no_location = Attraction::new("b", "", 1.0, ["x"]);
        let matrix = provider.matrix_for(&[at(48.86, 2.33), no_location, at(123.0, 2.0)]);

        assert_eq!(matrix.get(0, 1), Some(DEFAULT_DISTANCE_KM));
        assert_eq!(matrix.get(0, 2), Some(DEFAULT_DISTANCE_KM));
        assert_eq!(matrix.get(1, 2), Some(DEFAULT_DISTANCE_KM));
    }
}
