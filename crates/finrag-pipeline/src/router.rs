//! Query router

use std::sync::Arc;

use finrag_domain::RouteDecision;
use finrag_providers::ChatCompletion;
use tracing::{debug, warn};

use crate::prompts::ROUTING_INSTRUCTIONS;

/// Classifies a query into one of the three execution paths.
///
/// `route()` is total by policy: the state machine must always produce
/// exactly one outgoing edge. An unmapped label or a transport failure of
/// the classification call resolves to [`RouteDecision::Knowledge`], the
/// richest-context path, with a warning. The knowledge path's own failures
/// still surface loudly downstream.
pub struct Router {
    oracle: Arc<dyn ChatCompletion>,
}

impl Router {
    pub fn new(oracle: Arc<dyn ChatCompletion>) -> Self {
        Self { oracle }
    }

    pub async fn route(&self, query: &str) -> RouteDecision {
        let reply = match self.oracle.complete(ROUTING_INSTRUCTIONS, query).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "classification oracle failed, defaulting to knowledge path");
                return RouteDecision::Knowledge;
            }
        };

        match RouteDecision::parse_label(&reply) {
            Some(decision) => {
                debug!(path = %decision, "query routed");
                decision
            }
            None => {
                warn!(label = %reply, "unmapped route label, defaulting to knowledge path");
                RouteDecision::Knowledge
            }
        }
    }
}
