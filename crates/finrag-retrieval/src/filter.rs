//! Keyword-driven metadata filter builder

use finrag_domain::MetadataFilter;

/// Fixed keyword table, scanned in declaration order. The first entry
/// whose keyword is a substring of the lowercased query wins; query-text
/// order and match length are irrelevant. This first-match substring
/// policy is preserved for compatibility with the existing index and is
/// documented as a known sharp edge ("10-k" can match inside an unrelated
/// token).
const KEYWORD_TABLE: &[(&str, &str)] = &[
    ("10-k", "10-K Filing"),
    ("10k", "10-K Filing"),
    ("annual", "10-K Filing"),
    ("10-q", "10-Q Filing"),
    ("10q", "10-Q Filing"),
    ("quarterly", "10-Q Filing"),
    ("8-k", "8-K Filing"),
    ("8k", "8-K Filing"),
    ("shareholder", "Shareholder Letter"),
    ("letter", "Shareholder Letter"),
];

/// Maps a query to an optional `document_type` equality filter.
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder;

impl FilterBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Deterministic, side-effect free. `None` when no keyword matches.
    pub fn build(&self, query: &str) -> Option<MetadataFilter> {
        let lowered = query.to_ascii_lowercase();
        KEYWORD_TABLE
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, document_type)| MetadataFilter::document_type(*document_type))
    }
}
