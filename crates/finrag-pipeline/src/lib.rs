//! FinRAG Pipeline
//!
//! The routing state machine: classify the query, dispatch exactly one
//! path executor, hand the gathered context to answer synthesis. One
//! pipeline instance serves concurrent requests; all per-request state
//! lives in the [`finrag_domain::ContextBundle`].

pub mod error;
pub mod executors;
pub mod pipeline;
pub mod prompts;
pub mod router;

pub use error::PipelineError;
pub use executors::PathExecutors;
pub use pipeline::Pipeline;
pub use router::Router;
