//! Preference-weighted attraction similarity.
//!
//! Each city gets a symmetric matrix of cosine similarities between its
//! attractions' embeddings. When a preference embedding is available the
//! matrix is blended with the pair's mean preference relevance.

use tracing::debug;

use crate::error::EmbeddingError;
use crate::model::City;
use crate::traits::EmbeddingProvider;

/// Symmetric similarity matrix over a city's attraction indices.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Cosine similarity between every pair of embeddings.
    ///
    /// Zero vectors are left as-is rather than normalized, so they have zero
    /// similarity with everything.
    pub fn cosine(embeddings: &[Vec<f32>]) -> Result<Self, EmbeddingError> {
        check_dimensions(embeddings, None)?;

        let normalized: Vec<Vec<f64>> = embeddings.iter().map(|v| normalize(v)).collect();
        let n = normalized.len();
        let mut rows = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in i..n {
                let value = dot(&normalized[i], &normalized[j]);
                rows[i][j] = value;
                rows[j][i] = value;
            }
        }

        Ok(Self { rows })
    }

    /// Blend with preference relevance, producing a new matrix.
    ///
    /// `weighted[i][j] = (1 - w) * self[i][j] + w * (pref[i] + pref[j]) / 2`
    pub fn blended(&self, preference_scores: &[f64], weight: f64) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &value)| {
                        let pref_factor = (preference_scores[i] + preference_scores[j]) / 2.0;
                        (1.0 - weight) * value + weight * pref_factor
                    })
                    .collect()
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }
}

/// Cosine similarity of each embedding to `preference`, rescaled to `[0, 1]`.
pub fn preference_scores(
    embeddings: &[Vec<f32>],
    preference: &[f32],
) -> Result<Vec<f64>, EmbeddingError> {
    check_dimensions(embeddings, Some(preference.len()))?;

    let preference = normalize(preference);
    Ok(embeddings
        .iter()
        .map(|v| (dot(&normalize(v), &preference) + 1.0) / 2.0)
        .collect())
}

/// Builds per-city similarity matrices.
#[derive(Debug, Clone)]
pub struct SimilarityWeighter {
    pub blend_weight: f64,
}

impl SimilarityWeighter {
    pub fn new(blend_weight: f64) -> Self {
        Self { blend_weight }
    }

    /// Similarity for one city's embeddings, optionally preference-weighted.
    pub fn build(
        &self,
        embeddings: &[Vec<f32>],
        preference: Option<&[f32]>,
    ) -> Result<SimilarityMatrix, EmbeddingError> {
        let matrix = SimilarityMatrix::cosine(embeddings)?;
        match preference {
            Some(preference) => {
                let scores = preference_scores(embeddings, preference)?;
                Ok(matrix.blended(&scores, self.blend_weight))
            }
            None => Ok(matrix),
        }
    }

    /// One entry per city; `None` for cities without attractions.
    pub fn for_cities<E: EmbeddingProvider>(
        &self,
        cities: &[City],
        preferences: &[String],
        embedder: &E,
    ) -> Result<Vec<Option<SimilarityMatrix>>, EmbeddingError> {
        let preference_embedding = if preferences.is_empty() {
            None
        } else {
            embedder.embed(&[preferences.join(" ")])?.into_iter().next()
        };

        cities
            .iter()
            .map(|city| {
                if city.attractions.is_empty() {
                    return Ok(None);
                }

                let texts: Vec<String> = city
                    .attractions
                    .iter()
                    .map(|a| a.embedding_text.clone())
                    .collect();
                let embeddings = embedder.embed(&texts)?;
                if embeddings.len() != texts.len() {
                    return Err(EmbeddingError::Response(format!(
                        "expected {} embeddings for {}, got {}",
                        texts.len(),
                        city.name,
                        embeddings.len()
                    )));
                }

                debug!(city = %city.name, attractions = texts.len(), "built similarity matrix");
                self.build(&embeddings, preference_embedding.as_deref()).map(Some)
            })
            .collect()
    }
}

fn check_dimensions(
    embeddings: &[Vec<f32>],
    expected: Option<usize>,
) -> Result<(), EmbeddingError> {
    let expected = match expected.or_else(|| embeddings.first().map(Vec::len)) {
        Some(expected) => expected,
        None => return Ok(()),
    };

    match embeddings.iter().find(|v| v.len() != expected) {
        Some(v) => Err(EmbeddingError::Dimension {
            expected,
            found: v.len(),
        }),
        None => Ok(()),
    }
}

fn normalize(vector: &[f32]) -> Vec<f64> {
    let norm = vector.iter().map(|&v| f64::from(v) * f64::from(v)).sum::<f64>().sqrt();
    let norm = if norm == 0.0 { 1.0 } else { norm };
    vector.iter().map(|&v| f64::from(v) / norm).collect()
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
