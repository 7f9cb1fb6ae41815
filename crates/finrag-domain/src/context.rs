//! Per-request state threaded through the routing pipeline

use serde::{Deserialize, Serialize};

use crate::route::RouteDecision;

/// The state accumulated while a single query moves through the pipeline.
///
/// Request-scoped: built once per query, each field written exactly once,
/// never shared across concurrent requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextBundle {
    pub question: String,
    pub path: RouteDecision,
    pub context: String,
}

impl ContextBundle {
    pub fn new(question: impl Into<String>, path: RouteDecision) -> Self {
        Self {
            question: question.into(),
            path,
            context: String::new(),
        }
    }
}

/// The public result of answering a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedAnswer {
    pub path_used: RouteDecision,
    pub response: String,
}
