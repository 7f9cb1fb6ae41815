//! FinRAG Data Model
//!
//! Shared types for the query routing pipeline and the hybrid retrieval
//! engine: route decisions, retrieval candidates, metadata filters, and the
//! per-request context bundle. All of these live and die within a single
//! query; the vector store is the only persistent entity and is external.

pub mod candidate;
pub mod context;
pub mod route;

pub use candidate::{
    DocumentPayload, FusedCandidate, FusedResult, MetadataFilter, RetrievalCandidate, SparseVector,
};
pub use context::{ContextBundle, RoutedAnswer};
pub use route::RouteDecision;
