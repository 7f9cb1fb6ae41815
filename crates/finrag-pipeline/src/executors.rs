//! Path executors
//!
//! One executor per route; each one's sole observable effect is filling
//! the `context` field of the bundle. Dispatch is an exhaustive match on
//! the route decision.

use std::sync::Arc;

use finrag_domain::{ContextBundle, FusedCandidate, RouteDecision};
use finrag_providers::WebSearchProvider;
use finrag_retrieval::{FilterBuilder, HybridSearchEngine};
use tracing::debug;

use crate::error::PipelineError;

/// The three evidence-gathering branches behind the router.
pub struct PathExecutors {
    engine: Arc<HybridSearchEngine>,
    web: Arc<dyn WebSearchProvider>,
    filters: FilterBuilder,
    search_limit: usize,
    web_results: usize,
}

impl PathExecutors {
    pub fn new(
        engine: Arc<HybridSearchEngine>,
        web: Arc<dyn WebSearchProvider>,
        search_limit: usize,
        web_results: usize,
    ) -> Self {
        Self {
            engine,
            web,
            filters: FilterBuilder::new(),
            search_limit,
            web_results,
        }
    }

    /// Run the executor selected by the bundle's route and populate its
    /// context. Every decision maps to exactly one branch.
    pub async fn execute(&self, bundle: &mut ContextBundle) -> Result<(), PipelineError> {
        bundle.context = match bundle.path {
            RouteDecision::Knowledge => self.knowledge_context(&bundle.question).await?,
            RouteDecision::WebSearch => self.web_context(&bundle.question).await?,
            RouteDecision::Summary => self.summary_context(&bundle.question).await?,
        };
        Ok(())
    }

    /// Unfiltered corpus lookup with full citation metadata per block.
    async fn knowledge_context(&self, question: &str) -> Result<String, PipelineError> {
        let results = self
            .engine
            .search(question, None, self.search_limit)
            .await?;
        debug!(results = results.len(), "knowledge executor done");
        Ok(results
            .iter()
            .map(citation_block)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Provider-ordered web results, title and content concatenated; no
    /// ranking of our own.
    async fn web_context(&self, question: &str) -> Result<String, PipelineError> {
        let results = self
            .web
            .search(question, self.web_results)
            .await
            .map_err(|e| PipelineError::WebSearchUnavailable(e.to_string()))?;
        debug!(results = results.len(), "web executor done");
        Ok(results
            .iter()
            .map(|r| format!("{} {}", r.title, r.content))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Filtered corpus lookup; raw content only, since the output is a
    /// synthesized summary rather than a cited answer.
    async fn summary_context(&self, question: &str) -> Result<String, PipelineError> {
        let filter = self.filters.build(question);
        debug!(filter = ?filter, "summary executor filter");
        let results = self
            .engine
            .search(question, filter.as_ref(), self.search_limit)
            .await?;
        Ok(results
            .iter()
            .map(|f| f.candidate.payload.content.clone())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Citation block for the knowledge path. Field order is fixed: downstream
/// citation formatting depends on it.
fn citation_block(fused: &FusedCandidate) -> String {
    let p = &fused.candidate.payload;
    format!(
        "Content: {}\nSource: {}\nDocType: {}\nPage: {}\nTags: {}",
        p.content, p.source, p.document_type, p.page, p.chunk_tags
    )
}
