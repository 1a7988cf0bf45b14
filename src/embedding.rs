//! Local embedding providers.
//!
//! [`HashedTfIdfEmbedder`] is a frequency-based model that needs no
//! external service. [`FallbackEmbedder`] wraps a primary provider and
//! switches to a secondary one when the primary fails.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use rayon::prelude::*;
use rustc_hash::FxHasher;
use tracing::warn;

use crate::error::EmbeddingError;
use crate::traits::EmbeddingProvider;

pub const DEFAULT_DIMENSION: usize = 100;

const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "for", "from", "had", "has", "have", "he", "her", "his", "if", "in",
    "into", "is", "it", "its", "more", "most", "not", "of", "on", "one", "or", "other", "our",
    "she", "so", "some", "such", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "to", "up", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "will", "with", "you", "your",
];

/// TF-IDF over unigrams and bigrams, hashed into a fixed dimension.
///
/// IDF is computed over each batch passed to [`EmbeddingProvider::embed`].
/// Hashing keeps every vector in the same space, so vectors from separate
/// calls remain comparable.
#[derive(Debug, Clone)]
pub struct HashedTfIdfEmbedder {
    dimension: usize,
}

impl Default for HashedTfIdfEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl HashedTfIdfEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f32> {
        let tokens = tokenize(text);
        let mut counts = HashMap::new();

        let bigrams = tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1]));
        for term in tokens.iter().cloned().chain(bigrams) {
            *counts.entry(self.bucket(&term)).or_insert(0.0) += 1.0;
        }

        counts
    }

    fn bucket(&self, term: &str) -> usize {
        let mut hasher = FxHasher::default();
        term.hash(&mut hasher);
        (hasher.finish() % self.dimension as u64) as usize
    }
}

impl EmbeddingProvider for HashedTfIdfEmbedder {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let counts: Vec<HashMap<usize, f32>> =
            texts.par_iter().map(|text| self.term_counts(text)).collect();

        let mut document_frequency = vec![0usize; self.dimension];
        for doc in &counts {
            for &feature in doc.keys() {
                document_frequency[feature] += 1;
            }
        }

        let n = counts.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors = counts
            .par_iter()
            .map(|doc| {
                let mut vector = vec![0.0f32; self.dimension];
                for (&feature, &tf) in doc {
                    vector[feature] = tf * idf[feature];
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Ok(vectors)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|token| token.chars().count() >= 2 && !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

/// Uses `primary` and falls back to `fallback` when it returns an error.
#[derive(Debug, Clone)]
pub struct FallbackEmbedder<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackEmbedder<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> EmbeddingProvider for FallbackEmbedder<P, F>
where
    P: EmbeddingProvider,
    F: EmbeddingProvider,
{
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        match self.primary.embed(texts) {
            Ok(vectors) => Ok(vectors),
            Err(err) => {
                warn!(error = %err, "primary embedding provider failed, using fallback");
                self.fallback.embed(texts)
            }
        }
    }
}
