//! HTTP adapter for a transformer embedding service.
//!
//! Sends `{"model": ..., "texts": [...]}` to `{base_url}/embed` and expects
//! `{"embeddings": [[...], ...]}` back, one row per text.

use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::traits::EmbeddingProvider;

#[derive(Debug, Clone)]
pub struct EmbeddingServiceConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for EmbeddingServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            model: "all-MiniLM-L6-v2".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddingServiceClient {
    config: EmbeddingServiceConfig,
    client: reqwest::blocking::Client,
}

impl EmbeddingServiceClient {
    pub fn new(config: EmbeddingServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/embed", self.config.base_url.trim_end_matches('/'))
    }
}

impl EmbeddingProvider for EmbeddingServiceClient {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbedRequest {
            model: &self.config.model,
            texts,
        };

        let body = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<EmbedResponse>())?;

        if body.embeddings.len() != texts.len() {
            return Err(EmbeddingError::Response(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                body.embeddings.len()
            )));
        }

        Ok(body.embeddings)
    }
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    texts: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}
