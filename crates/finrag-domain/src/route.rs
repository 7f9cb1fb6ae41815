//! Route decisions for the three-way query dispatch

use std::fmt;

use serde::{Deserialize, Serialize};

/// The execution path chosen for a query.
///
/// This is a closed enumeration dispatched through exhaustive matches:
/// adding a fourth path is a compile-time-checked change, never a silently
/// ignored runtime gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Grounded question answering over the document corpus.
    Knowledge,
    /// Live web lookup via the external search provider.
    #[serde(rename = "search")]
    WebSearch,
    /// Thematic summarization over a filtered slice of the corpus.
    Summary,
}

impl RouteDecision {
    /// The canonical label set the classification oracle is asked to emit.
    pub fn label(&self) -> &'static str {
        match self {
            RouteDecision::Knowledge => "knowledge",
            RouteDecision::WebSearch => "search",
            RouteDecision::Summary => "summary",
        }
    }

    /// Tolerant, deterministic parse of an oracle reply into a decision.
    ///
    /// Trims whitespace, strips wrapping quotes/backticks and trailing
    /// periods, lowercases, then matches exactly. The `knowledge_base` and
    /// `web_search` aliases are accepted alongside the canonical labels.
    /// Returns `None` for anything else; the caller owns the fallback
    /// policy.
    pub fn parse_label(raw: &str) -> Option<RouteDecision> {
        let cleaned = raw
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'' || c == '`' || c == '.')
            .trim()
            .to_ascii_lowercase();

        match cleaned.as_str() {
            "knowledge" | "knowledge_base" => Some(RouteDecision::Knowledge),
            "search" | "web_search" => Some(RouteDecision::WebSearch),
            "summary" => Some(RouteDecision::Summary),
            _ => None,
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
