//! FinRAG Hybrid Retrieval
//!
//! The retrieval half of the pipeline: embedder traits, the local BM25
//! query encoder, the vector-store abstraction with its Qdrant backend,
//! the keyword-driven metadata filter builder, reciprocal rank fusion,
//! and the hybrid search engine that ties them together.

pub mod embedder;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fusion;
pub mod qdrant;
pub mod sparse;
pub mod store;

pub use embedder::{DenseEmbedder, SparseEmbedder};
pub use engine::{HybridSearchEngine, PREFETCH_LIMIT};
pub use error::{EmbeddingError, RetrievalError};
pub use filter::FilterBuilder;
pub use fusion::{fuse, RRF_K};
pub use qdrant::QdrantStore;
pub use sparse::Bm25QueryEncoder;
pub use store::{StorePoint, VectorStore};
