//! Web-search provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ProviderError;

/// One result from the web-search provider, already ranked by it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WebSearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// External web search: ordered results in, no ranking of our own.
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<WebSearchResult>, ProviderError>;
}

/// Tavily-backed web search.
pub struct TavilyClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl TavilyClient {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::ConfigError(
                "Tavily API key is required".to_string(),
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
        })
    }
}

#[async_trait]
impl WebSearchProvider for TavilyClient {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<WebSearchResult>, ProviderError> {
        let request = TavilySearchRequest {
            query: query.to_string(),
            max_results,
        };

        debug!(max_results, "sending Tavily search request");

        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Tavily search request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Tavily API error ({}): {}", status, error_text);
            return match status.as_u16() {
                401 => Err(ProviderError::AuthError),
                429 => Err(ProviderError::RateLimited(60)),
                _ => Err(ProviderError::Provider(format!(
                    "Tavily API error: {}",
                    status
                ))),
            };
        }

        let body: TavilySearchResponse = response.json().await?;
        Ok(body.results)
    }
}

#[derive(Debug, Serialize)]
struct TavilySearchRequest {
    query: String,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilySearchResponse {
    #[serde(default)]
    results: Vec<WebSearchResult>,
}
