//! Retrieval error types

use thiserror::Error;

/// Failure of an embedding provider. The engine never retries; retry
/// policy belongs to the provider wrapper.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("embedding provider error: {0}")]
pub struct EmbeddingError(pub String);

/// Failures of the hybrid search path, surfaced to the caller rather than
/// degraded into an empty result set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RetrievalError {
    #[error("embedding failed: {0}")]
    Embedding(String),

    #[error("vector store failed: {0}")]
    Store(String),
}

impl From<EmbeddingError> for RetrievalError {
    fn from(err: EmbeddingError) -> Self {
        RetrievalError::Embedding(err.0)
    }
}
