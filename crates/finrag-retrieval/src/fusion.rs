//! Reciprocal rank fusion

use std::cmp::Ordering;
use std::collections::HashMap;

use finrag_domain::{FusedCandidate, FusedResult, RetrievalCandidate};

use crate::store::StorePoint;

/// RRF smoothing constant. Fixed, not tunable per call: the conventional
/// k=60 keeps low-rank hits from dominating while still rewarding presence
/// in both lists.
pub const RRF_K: f64 = 60.0;

/// Fuse the dense and sparse ranked lists into one ordering.
///
/// Each candidate scores the sum of `1/(k + rank)` over the lists it
/// appears in, rank 1-based; absence from a list contributes 0. Ties break
/// deterministically: dense-rank-present first, then lower dense rank,
/// then lower sparse rank, then insertion order (dense list first, sparse
/// newcomers after). The result is truncated to `limit`.
pub fn fuse(dense: Vec<StorePoint>, sparse: Vec<StorePoint>, limit: usize) -> FusedResult {
    let mut order: Vec<String> = Vec::with_capacity(dense.len() + sparse.len());
    let mut by_id: HashMap<String, RetrievalCandidate> = HashMap::new();

    for (i, point) in dense.into_iter().enumerate() {
        order.push(point.id.clone());
        by_id.insert(
            point.id.clone(),
            RetrievalCandidate {
                id: point.id,
                dense_rank: Some(i + 1),
                sparse_rank: None,
                payload: point.payload,
            },
        );
    }

    for (i, point) in sparse.into_iter().enumerate() {
        match by_id.get_mut(&point.id) {
            Some(existing) => existing.sparse_rank = Some(i + 1),
            None => {
                order.push(point.id.clone());
                by_id.insert(
                    point.id.clone(),
                    RetrievalCandidate {
                        id: point.id,
                        dense_rank: None,
                        sparse_rank: Some(i + 1),
                        payload: point.payload,
                    },
                );
            }
        }
    }

    let mut fused: Vec<FusedCandidate> = order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .map(|candidate| {
            let score = rrf_score(candidate.dense_rank) + rrf_score(candidate.sparse_rank);
            FusedCandidate { candidate, score }
        })
        .collect();

    // Stable sort keeps insertion order as the final tie-break.
    fused.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| tie_key(&a.candidate).cmp(&tie_key(&b.candidate)))
    });
    fused.truncate(limit);
    fused
}

fn rrf_score(rank: Option<usize>) -> f64 {
    match rank {
        Some(r) => 1.0 / (RRF_K + r as f64),
        None => 0.0,
    }
}

fn tie_key(c: &RetrievalCandidate) -> (bool, usize, usize) {
    (
        c.dense_rank.is_none(),
        c.dense_rank.unwrap_or(usize::MAX),
        c.sparse_rank.unwrap_or(usize::MAX),
    )
}

#[cfg(test)]
mod tests {
    use finrag_domain::DocumentPayload;

    use super::*;

    fn point(id: &str) -> StorePoint {
        StorePoint {
            id: id.to_string(),
            payload: DocumentPayload {
                content: format!("content for {id}"),
                ..Default::default()
            },
        }
    }

    #[test]
    fn candidate_in_both_lists_outranks_single_list_hits() {
        let dense = vec![point("a"), point("b")];
        let sparse = vec![point("b"), point("c")];
        let fused = fuse(dense, sparse, 10);

        // b: 1/62 + 1/61 beats a (1/61) and c (1/62)
        assert_eq!(fused[0].candidate.id, "b");
        assert_eq!(fused[0].candidate.dense_rank, Some(2));
        assert_eq!(fused[0].candidate.sparse_rank, Some(1));
        assert_eq!(fused[1].candidate.id, "a");
        assert_eq!(fused[2].candidate.id, "c");
    }

    #[test]
    fn equal_scores_break_dense_first() {
        // A at dense rank 1 only, B at sparse rank 1 only: both 1/61.
        let fused = fuse(vec![point("a")], vec![point("b")], 10);
        assert_eq!(fused.len(), 2);
        assert!((fused[0].score - fused[1].score).abs() < 1e-12);
        assert_eq!(fused[0].candidate.id, "a");
        assert_eq!(fused[1].candidate.id, "b");
    }

    #[test]
    fn scores_use_k_60() {
        let fused = fuse(vec![point("a")], vec![], 10);
        assert!((fused[0].score - 1.0 / 61.0).abs() < 1e-12);
    }

    #[test]
    fn truncates_to_limit() {
        let dense: Vec<StorePoint> = (0..10).map(|i| point(&format!("d{i}"))).collect();
        let sparse: Vec<StorePoint> = (0..10).map(|i| point(&format!("s{i}"))).collect();
        let fused = fuse(dense, sparse, 3);
        assert_eq!(fused.len(), 3);
    }

    #[test]
    fn fusion_is_deterministic() {
        let make = || {
            (
                vec![point("a"), point("b"), point("c")],
                vec![point("c"), point("d"), point("a")],
            )
        };
        let (d1, s1) = make();
        let (d2, s2) = make();
        let first: Vec<String> = fuse(d1, s1, 5)
            .into_iter()
            .map(|f| f.candidate.id)
            .collect();
        let second: Vec<String> = fuse(d2, s2, 5)
            .into_iter()
            .map(|f| f.candidate.id)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn payload_survives_fusion() {
        let fused = fuse(vec![point("a")], vec![], 5);
        assert_eq!(fused[0].candidate.payload.content, "content for a");
    }
}
