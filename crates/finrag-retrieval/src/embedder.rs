//! Embedding adapter traits
//!
//! Both embedders are opaque text-to-vector functions from the engine's
//! point of view: deterministic for the same text within a session and
//! side-effect free. Network transport, if any, is the implementation's
//! concern and is covered by its own timeout.

use async_trait::async_trait;
use finrag_domain::SparseVector;

use crate::error::EmbeddingError;

/// Dense embedder: text to a fixed-dimension float vector.
#[async_trait]
pub trait DenseEmbedder: Send + Sync {
    /// The fixed output dimension D.
    fn dimension(&self) -> usize;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Sparse embedder: text to a weighted term vector.
#[async_trait]
pub trait SparseEmbedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<SparseVector, EmbeddingError>;
}
