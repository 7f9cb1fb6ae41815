//! Dependency wiring
//!
//! All external service handles are constructed here, once, and passed
//! into the pipeline explicitly. No ambient globals: concurrent requests
//! and test isolation both depend on that.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use finrag_config::{ConfigLoader, FinragConfig};
use finrag_pipeline::Pipeline;
use finrag_providers::{OpenAiChat, OpenAiEmbedder, TavilyClient};
use finrag_retrieval::{Bm25QueryEncoder, HybridSearchEngine, QdrantStore};
use tracing::{debug, warn};

pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<FinragConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("failed to load configuration")
}

/// Build the fully wired pipeline from configuration.
pub fn build_pipeline(config: &FinragConfig) -> anyhow::Result<Pipeline> {
    let timeout = Duration::from_secs(config.timeouts.request_secs);

    let chat = Arc::new(
        OpenAiChat::new(
            config.openai.api_key.clone(),
            config.openai.base_url.clone(),
            config.openai.chat_model.clone(),
            timeout,
        )
        .context("failed to construct chat provider")?,
    );

    let embedder = Arc::new(
        OpenAiEmbedder::new(
            config.openai.api_key.clone(),
            config.openai.base_url.clone(),
            config.openai.embedding_model.clone(),
            config.openai.dimension,
            timeout,
        )
        .context("failed to construct embedding provider")?,
    );

    let web = Arc::new(
        TavilyClient::new(
            config.tavily.api_key.clone(),
            config.tavily.base_url.clone(),
            timeout,
        )
        .context("failed to construct web-search provider")?,
    );

    let store = Arc::new(
        QdrantStore::connect(
            &config.qdrant.url,
            config.qdrant.api_key.clone(),
            config.qdrant.collection.clone(),
            timeout,
        )
        .context("failed to connect to Qdrant")?,
    );

    let engine = Arc::new(HybridSearchEngine::new(
        embedder,
        Arc::new(Bm25QueryEncoder::new()),
        store,
    ));

    debug!(
        chat_model = %config.openai.chat_model,
        embedding_model = %config.openai.embedding_model,
        collection = %config.qdrant.collection,
        "pipeline wired"
    );

    Ok(Pipeline::new(
        engine,
        web,
        chat.clone(),
        chat,
        config.retrieval.search_limit,
        config.retrieval.web_results,
    ))
}

/// Per-dependency health results for `finrag health`.
pub struct HealthReport {
    pub qdrant: Result<bool, String>,
    pub chat: Result<bool, String>,
}

impl HealthReport {
    pub fn healthy(&self) -> bool {
        matches!(self.qdrant, Ok(true)) && matches!(self.chat, Ok(true))
    }
}

pub async fn health_check(config: &FinragConfig) -> HealthReport {
    let timeout = Duration::from_secs(config.timeouts.request_secs);

    let qdrant = match QdrantStore::connect(
        &config.qdrant.url,
        config.qdrant.api_key.clone(),
        config.qdrant.collection.clone(),
        timeout,
    ) {
        Ok(store) => store.collection_exists().await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    let chat = match OpenAiChat::new(
        config.openai.api_key.clone(),
        config.openai.base_url.clone(),
        config.openai.chat_model.clone(),
        timeout,
    ) {
        Ok(chat) => chat.health_check().await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    if let Err(reason) = &qdrant {
        warn!(reason = %reason, "qdrant health check failed");
    }
    if let Err(reason) = &chat {
        warn!(reason = %reason, "chat provider health check failed");
    }

    HealthReport { qdrant, chat }
}
