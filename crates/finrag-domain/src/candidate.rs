//! Retrieval candidates, fused results, and metadata filters

use serde::{Deserialize, Serialize};

/// The payload stored with every indexed chunk.
///
/// This is the only contract the retrieval engine has with the ingestion
/// job: every point in the vector store must carry these fields under the
/// keys `content`, `source`, `document_type`, `page`, `chunk_tags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub content: String,
    pub source: String,
    pub document_type: String,
    pub page: i64,
    pub chunk_tags: String,
}

/// A candidate surfaced by one or both retrieval arms.
///
/// Ranks are 1-based positions within the dense and sparse result lists; a
/// candidate may appear in only one list, in which case the other rank is
/// `None`. Fusion handles all three cases.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalCandidate {
    /// Opaque point id from the vector store.
    pub id: String,
    pub dense_rank: Option<usize>,
    pub sparse_rank: Option<usize>,
    pub payload: DocumentPayload,
}

/// A candidate with its reciprocal-rank-fusion score attached.
#[derive(Debug, Clone, PartialEq)]
pub struct FusedCandidate {
    pub candidate: RetrievalCandidate,
    pub score: f64,
}

/// Fused, rank-ordered retrieval output, truncated to the caller's limit.
///
/// Order is the contract: downstream context assembly preserves it.
pub type FusedResult = Vec<FusedCandidate>;

/// Single-field equality predicate on `document_type`.
///
/// `Option<MetadataFilter>` everywhere; `None` means unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataFilter {
    pub document_type: String,
}

impl MetadataFilter {
    pub fn document_type(value: impl Into<String>) -> Self {
        Self {
            document_type: value.into(),
        }
    }
}

/// A sparse query vector: parallel `indices`/`values` arrays mapping term
/// ids to weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

impl SparseVector {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
