//! OpenAI embeddings provider

use std::time::Duration;

use async_trait::async_trait;
use finrag_retrieval::{DenseEmbedder, EmbeddingError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::ProviderError;

/// Dense embedder backed by the OpenAI embeddings endpoint.
pub struct OpenAiEmbedder {
    api_key: String,
    client: Client,
    base_url: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        dimension: usize,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::ConfigError(
                "OpenAI API key is required".to_string(),
            ));
        }
        if dimension == 0 {
            return Err(ProviderError::ConfigError(
                "embedding dimension must be greater than 0".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::ConfigError(e.to_string()))?;

        Ok(Self {
            api_key,
            client,
            base_url,
            model,
            dimension,
        })
    }

    async fn request_embedding(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: vec![text.to_string()],
        };

        debug!(model = %self.model, "sending embedding request");

        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI embedding request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI embeddings error ({}): {}", status, error_text);
            return match status.as_u16() {
                401 => Err(ProviderError::AuthError),
                429 => Err(ProviderError::RateLimited(60)),
                _ => Err(ProviderError::Provider(format!(
                    "OpenAI API error: {}",
                    status
                ))),
            };
        }

        let body: EmbeddingResponse = response.json().await?;
        let vector = body
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or_else(|| ProviderError::Provider("No embedding in response".to_string()))?;

        if vector.len() != self.dimension {
            warn!(
                expected = self.dimension,
                actual = vector.len(),
                "embedding dimension differs from configuration"
            );
        }
        Ok(vector)
    }
}

#[async_trait]
impl DenseEmbedder for OpenAiEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.request_embedding(text)
            .await
            .map_err(|e| EmbeddingError(e.to_string()))
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}
