//! Vector-store abstraction

use async_trait::async_trait;
use finrag_domain::{DocumentPayload, MetadataFilter, SparseVector};

use crate::error::RetrievalError;

/// One ranked hit from a store query; rank is the position in the returned
/// list (1-based when consumed by fusion).
#[derive(Debug, Clone, PartialEq)]
pub struct StorePoint {
    pub id: String,
    pub payload: DocumentPayload,
}

/// The two query modes the engine needs from a vector store. Both apply
/// the optional filter as a hard server-side predicate: non-matching
/// candidates are excluded from consideration, not re-ranked.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Nearest neighbors by cosine similarity over the dense vector.
    async fn dense_search(
        &self,
        vector: &[f32],
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError>;

    /// Weighted term-overlap search over the sparse vector.
    async fn sparse_search(
        &self,
        sparse: &SparseVector,
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError>;
}
