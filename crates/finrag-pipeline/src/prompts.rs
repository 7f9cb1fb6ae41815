//! Fixed instruction sets and per-path user templates

use finrag_domain::{ContextBundle, RouteDecision};

/// Instruction set for the classification oracle. The reply must be one
/// bare label; anything else falls back to the knowledge path.
pub const ROUTING_INSTRUCTIONS: &str = "\
You are a query router for a financial document assistant. Classify the \
user's question into exactly one of these paths and reply with only the \
label, nothing else:\n\
- knowledge: the question can be answered from the indexed corpus of SEC \
filings, shareholder letters, and financial documents (grounded QA).\n\
- search: the question needs live or recent information from the web.\n\
- summary: the question asks for a thematic summary of one or more \
documents.\n";

/// Instruction set for the answer-synthesis oracle.
pub const SYNTHESIS_INSTRUCTIONS: &str = "\
You are a financial research analyst. Answer using only the supplied \
context. If the context does not support an answer, say so explicitly \
rather than speculating.";

/// Inserted in place of evidence when an executor legitimately returned
/// nothing, so synthesis never mistakes absence for support.
pub const EMPTY_CONTEXT_MARKER: &str = "(no supporting context was retrieved)";

/// Render the per-path user message for the synthesis oracle.
pub fn user_prompt(bundle: &ContextBundle) -> String {
    let context: &str = if bundle.context.trim().is_empty() {
        EMPTY_CONTEXT_MARKER
    } else {
        &bundle.context
    };

    match bundle.path {
        RouteDecision::Knowledge => format!(
            "Answer the question using the evidence below. Cite the source \
             and page for every claim.\n\nQuestion: {}\n\nEvidence:\n{}",
            bundle.question, context
        ),
        RouteDecision::Summary => format!(
            "Write a structured summary addressing the request below, based \
             only on the excerpts.\n\nRequest: {}\n\nExcerpts:\n{}",
            bundle.question, context
        ),
        RouteDecision::WebSearch => format!(
            "Answer the question using the web results below. Note that the \
             results may be partial or out of date.\n\nQuestion: {}\n\nWeb \
             results:\n{}",
            bundle.question, context
        ),
    }
}
