//! Request orchestrator

use std::sync::Arc;

use finrag_domain::{ContextBundle, RoutedAnswer};
use finrag_providers::{ChatCompletion, WebSearchProvider};
use finrag_retrieval::HybridSearchEngine;
use tracing::{debug, warn};

use crate::{
    error::PipelineError,
    executors::PathExecutors,
    prompts::{self, SYNTHESIS_INSTRUCTIONS},
    router::Router,
};

/// The linear routing pipeline: route, execute one path, synthesize.
///
/// Holds only `Arc`s of its collaborators, so one instance serves
/// concurrent requests with no shared mutable state. Stages within a
/// request are strictly sequential; no path is executed speculatively.
pub struct Pipeline {
    router: Router,
    executors: PathExecutors,
    synthesis: Arc<dyn ChatCompletion>,
}

impl Pipeline {
    /// Wire a pipeline from its collaborators. The same oracle may serve
    /// both classification and synthesis.
    pub fn new(
        engine: Arc<HybridSearchEngine>,
        web: Arc<dyn WebSearchProvider>,
        classifier: Arc<dyn ChatCompletion>,
        synthesis: Arc<dyn ChatCompletion>,
        search_limit: usize,
        web_results: usize,
    ) -> Self {
        Self {
            router: Router::new(classifier),
            executors: PathExecutors::new(engine, web, search_limit, web_results),
            synthesis,
        }
    }

    /// Answer one question. Fails with a typed error naming the stage when
    /// any external call errors or times out; never returns an answer
    /// synthesized from silently missing context.
    pub async fn answer(&self, question: &str) -> Result<RoutedAnswer, PipelineError> {
        let question = question.trim();

        let path = self.router.route(question).await;
        let mut bundle = ContextBundle::new(question, path);

        self.executors.execute(&mut bundle).await?;

        if bundle.context.trim().is_empty() {
            // Retrieval succeeded but found nothing; the prompt carries an
            // explicit marker so synthesis cannot mistake this for support.
            warn!(path = %path, "executor returned empty context");
        }

        let user = prompts::user_prompt(&bundle);
        let response = self
            .synthesis
            .complete(SYNTHESIS_INSTRUCTIONS, &user)
            .await
            .map_err(|e| PipelineError::SynthesisUnavailable(e.to_string()))?;

        debug!(path = %path, "request answered");
        Ok(RoutedAnswer {
            path_used: path,
            response,
        })
    }
}
