//! Local BM25 query-side encoder
//!
//! Produces the sparse query vector entirely locally: term ids are 32-bit
//! hashes of lowercased tokens, weights are BM25 term-frequency saturation.
//! IDF is applied by the store at scoring time, not here.

use std::collections::BTreeMap;

use async_trait::async_trait;
use finrag_domain::SparseVector;

use crate::{embedder::SparseEmbedder, error::EmbeddingError};

const K1: f32 = 1.2;
const B: f32 = 0.75;
/// Assumed average document length, matching the indexing side.
const AVG_LEN: f32 = 256.0;

/// Tokens shorter than this are dropped.
const MIN_TOKEN_LEN: usize = 2;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "in",
    "is", "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "what",
    "when", "which", "will", "with",
];

/// Deterministic sparse encoder for queries.
#[derive(Debug, Clone, Default)]
pub struct Bm25QueryEncoder;

impl Bm25QueryEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a query into a sparse vector with ascending term-id order.
    pub fn encode(&self, text: &str) -> SparseVector {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .map(|t| t.to_ascii_lowercase())
            .filter(|t| t.len() >= MIN_TOKEN_LEN && !STOPWORDS.contains(&t.as_str()))
            .collect();

        let len = tokens.len() as f32;
        // BTreeMap keeps indices ascending without a separate sort.
        let mut counts: BTreeMap<u32, f32> = BTreeMap::new();
        for token in &tokens {
            *counts.entry(fxhash::hash32(token.as_bytes())).or_insert(0.0) += 1.0;
        }

        let mut indices = Vec::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());
        for (term_id, tf) in counts {
            let weight = tf * (K1 + 1.0) / (tf + K1 * (1.0 - B + B * len / AVG_LEN));
            indices.push(term_id);
            values.push(weight);
        }

        SparseVector { indices, values }
    }
}

#[async_trait]
impl SparseEmbedder for Bm25QueryEncoder {
    async fn embed(&self, text: &str) -> Result<SparseVector, EmbeddingError> {
        Ok(self.encode(text))
    }
}
