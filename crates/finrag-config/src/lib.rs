//! FinRAG Configuration
//!
//! Layered configuration loading: serde defaults, then an optional TOML
//! file, then `FINRAG_*` environment variables, then the conventional
//! provider variables (`OPENAI_API_KEY`, `TAVILY_API_KEY`, `QDRANT_URL`,
//! `QDRANT_API_KEY`) as direct fallbacks for their fields.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use types::{
    FinragConfig, OpenAiSection, QdrantSection, RetrievalSection, TavilySection, TimeoutSection,
};
