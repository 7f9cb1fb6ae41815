//! Configuration types

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level FinRAG configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinragConfig {
    pub openai: OpenAiSection,
    pub tavily: TavilySection,
    pub qdrant: QdrantSection,
    pub retrieval: RetrievalSection,
    pub timeouts: TimeoutSection,
}

/// OpenAI chat + embeddings settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSection {
    /// API key; also read from `OPENAI_API_KEY`
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    /// Embedding dimension D; must match the collection schema
    pub dimension: usize,
}

impl Default for OpenAiSection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            dimension: 1536,
        }
    }
}

/// Tavily web-search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TavilySection {
    /// API key; also read from `TAVILY_API_KEY`
    pub api_key: String,
    pub base_url: String,
}

impl Default for TavilySection {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.tavily.com".to_string(),
        }
    }
}

/// Qdrant vector-store settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QdrantSection {
    /// Also read from `QDRANT_URL`
    pub url: String,
    /// Also read from `QDRANT_API_KEY`
    pub api_key: Option<String>,
    pub collection: String,
}

impl Default for QdrantSection {
    fn default() -> Self {
        Self {
            url: "http://localhost:6334".to_string(),
            api_key: None,
            collection: "financial_documents".to_string(),
        }
    }
}

/// Retrieval limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalSection {
    /// Fused results returned per knowledge/summary lookup
    pub search_limit: usize,
    /// Results requested from the web-search provider
    pub web_results: usize,
}

impl Default for RetrievalSection {
    fn default() -> Self {
        Self {
            search_limit: 5,
            web_results: 10,
        }
    }
}

/// Timeouts applied to every external call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutSection {
    pub request_secs: u64,
}

impl Default for TimeoutSection {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

impl FinragConfig {
    /// Validate required fields, naming the offending field in the error.
    pub fn validate(&self) -> Result<()> {
        if self.openai.api_key.is_empty() {
            return Err(ConfigError::Validation(
                "openai.api_key must not be empty".to_string(),
            ));
        }
        if self.openai.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "openai.base_url must not be empty".to_string(),
            ));
        }
        if self.openai.dimension == 0 {
            return Err(ConfigError::Validation(
                "openai.dimension must be greater than 0".to_string(),
            ));
        }
        if self.qdrant.url.is_empty() {
            return Err(ConfigError::Validation(
                "qdrant.url must not be empty".to_string(),
            ));
        }
        if self.qdrant.collection.is_empty() {
            return Err(ConfigError::Validation(
                "qdrant.collection must not be empty".to_string(),
            ));
        }
        if self.retrieval.search_limit == 0 {
            return Err(ConfigError::Validation(
                "retrieval.search_limit must be greater than 0".to_string(),
            ));
        }
        if self.timeouts.request_secs == 0 {
            return Err(ConfigError::Validation(
                "timeouts.request_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// A copy with credentials masked, safe to print or log.
    pub fn redacted(&self) -> FinragConfig {
        let mut copy = self.clone();
        if !copy.openai.api_key.is_empty() {
            copy.openai.api_key = "****".to_string();
        }
        if !copy.tavily.api_key.is_empty() {
            copy.tavily.api_key = "****".to_string();
        }
        if copy.qdrant.api_key.is_some() {
            copy.qdrant.api_key = Some("****".to_string());
        }
        copy
    }
}
