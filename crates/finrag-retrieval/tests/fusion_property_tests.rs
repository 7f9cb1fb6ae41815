//! Property tests for reciprocal rank fusion

use finrag_domain::DocumentPayload;
use finrag_retrieval::{fuse, StorePoint};
use proptest::prelude::*;

fn points(ids: &[String]) -> Vec<StorePoint> {
    ids.iter()
        .map(|id| StorePoint {
            id: id.clone(),
            payload: DocumentPayload::default(),
        })
        .collect()
}

fn id_list() -> impl Strategy<Value = Vec<String>> {
    // Distinct ids within a list, as a real ranked result would have
    prop::collection::btree_set("[a-z]{1,4}", 0..8)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn output_never_exceeds_limit(
        dense in id_list(),
        sparse in id_list(),
        limit in 0usize..6,
    ) {
        let fused = fuse(points(&dense), points(&sparse), limit);
        prop_assert!(fused.len() <= limit);
    }

    #[test]
    fn every_input_candidate_appears_once_without_truncation(
        dense in id_list(),
        sparse in id_list(),
    ) {
        let fused = fuse(points(&dense), points(&sparse), usize::MAX);
        let mut ids: Vec<&str> = fused.iter().map(|f| f.candidate.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);

        let mut expected: Vec<&str> = dense
            .iter()
            .chain(sparse.iter())
            .map(|s| s.as_str())
            .collect();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(total, expected.len());
    }

    #[test]
    fn scores_are_monotonically_nonincreasing(
        dense in id_list(),
        sparse in id_list(),
    ) {
        let fused = fuse(points(&dense), points(&sparse), usize::MAX);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn fusion_is_a_pure_function(
        dense in id_list(),
        sparse in id_list(),
        limit in 0usize..6,
    ) {
        let first = fuse(points(&dense), points(&sparse), limit);
        let second = fuse(points(&dense), points(&sparse), limit);
        prop_assert_eq!(first, second);
    }
}
