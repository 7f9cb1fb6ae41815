//! FinRAG Providers
//!
//! Thin wrappers around the remote collaborators the pipeline consumes:
//! the chat-completion oracle (classification and synthesis), the dense
//! embedding service, and the web-search provider. Each wrapper owns its
//! transport, timeout, and error mapping; none of them retries — retry and
//! backoff policy belong to the caller of the pipeline, not the core.

pub mod chat;
pub mod embeddings;
pub mod error;
pub mod web_search;

pub use chat::{ChatCompletion, OpenAiChat};
pub use embeddings::OpenAiEmbedder;
pub use error::ProviderError;
pub use web_search::{TavilyClient, WebSearchProvider, WebSearchResult};
