//! Pipeline error taxonomy
//!
//! Every variant is an external-dependency failure surfaced to the caller
//! with the failed stage in its message. Routing ambiguity is deliberately
//! absent: an unmapped classifier label is recovered locally with the
//! default path and never becomes an error.

use finrag_retrieval::RetrievalError;
use thiserror::Error;

/// A request failure, naming the stage that failed. No partial or
/// empty-context answer is ever returned in place of one of these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    #[error("embedding service unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("retrieval unavailable: {0}")]
    RetrievalUnavailable(String),

    #[error("web search unavailable: {0}")]
    WebSearchUnavailable(String),

    #[error("answer synthesis unavailable: {0}")]
    SynthesisUnavailable(String),
}

impl From<RetrievalError> for PipelineError {
    fn from(err: RetrievalError) -> Self {
        match err {
            RetrievalError::Embedding(msg) => PipelineError::EmbeddingUnavailable(msg),
            RetrievalError::Store(msg) => PipelineError::RetrievalUnavailable(msg),
        }
    }
}
