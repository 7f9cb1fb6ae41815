//! Hybrid search engine

use std::sync::Arc;

use finrag_domain::{FusedResult, MetadataFilter};
use tracing::debug;

use crate::{
    embedder::{DenseEmbedder, SparseEmbedder},
    error::RetrievalError,
    fusion::fuse,
    store::VectorStore,
};

/// Candidate depth requested from each retrieval arm before fusion.
pub const PREFETCH_LIMIT: usize = 10;

/// Issues dense and sparse retrievals concurrently, fuses them with
/// reciprocal rank fusion, and returns the top fused candidates with full
/// payloads. Store or embedding failures surface as errors; they are never
/// degraded into an empty result, since an empty context fed to synthesis
/// produces a confidently wrong answer.
pub struct HybridSearchEngine {
    dense: Arc<dyn DenseEmbedder>,
    sparse: Arc<dyn SparseEmbedder>,
    store: Arc<dyn VectorStore>,
}

impl HybridSearchEngine {
    pub fn new(
        dense: Arc<dyn DenseEmbedder>,
        sparse: Arc<dyn SparseEmbedder>,
        store: Arc<dyn VectorStore>,
    ) -> Self {
        Self {
            dense,
            sparse,
            store,
        }
    }

    /// Run a hybrid search. The filter, when present, is a hard predicate
    /// on both arms. `limit` bounds the fused output, not the per-arm
    /// prefetch depth.
    pub async fn search(
        &self,
        query: &str,
        filter: Option<&MetadataFilter>,
        limit: usize,
    ) -> Result<FusedResult, RetrievalError> {
        let (dense_vector, sparse_vector) = tokio::try_join!(
            async {
                self.dense
                    .embed(query)
                    .await
                    .map_err(RetrievalError::from)
            },
            async {
                self.sparse
                    .embed(query)
                    .await
                    .map_err(RetrievalError::from)
            },
        )?;

        // A query of only stopwords/short tokens encodes to nothing; the
        // store rejects empty sparse vectors, so serve it dense-only
        // rather than failing a request the dense arm can answer.
        let (dense_hits, sparse_hits) = if sparse_vector.is_empty() {
            debug!("sparse encoding is empty, searching dense arm only");
            let dense_hits = self
                .store
                .dense_search(&dense_vector, PREFETCH_LIMIT, filter)
                .await?;
            (dense_hits, Vec::new())
        } else {
            tokio::try_join!(
                self.store.dense_search(&dense_vector, PREFETCH_LIMIT, filter),
                self.store
                    .sparse_search(&sparse_vector, PREFETCH_LIMIT, filter),
            )?
        };

        debug!(
            dense_hits = dense_hits.len(),
            sparse_hits = sparse_hits.len(),
            limit,
            filtered = filter.is_some(),
            "fusing retrieval arms"
        );

        Ok(fuse(dense_hits, sparse_hits, limit))
    }
}
