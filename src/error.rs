//! Error taxonomy for the planner.

use std::io;

use thiserror::Error;

/// Errors raised by an embedding provider.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("embedding service returned an unusable response: {0}")]
    Response(String),

    #[error("embedding dimension mismatch: expected {expected}, found {found}")]
    Dimension { expected: usize, found: usize },
}

/// Top-level error for loading data and running the planner.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Malformed input data. Raised while loading, never while optimizing.
    #[error("data error in {context}: {message}")]
    Data { context: String, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn data(context: impl Into<String>, message: impl Into<String>) -> Self {
        PlannerError::Data {
            context: context.into(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = PlannerError> = std::result::Result<T, E>;
