//! Property: routing is total — any oracle output resolves to exactly one
//! valid decision without panicking.

use std::sync::Arc;

use async_trait::async_trait;
use finrag_domain::RouteDecision;
use finrag_pipeline::Router;
use finrag_providers::{ChatCompletion, ProviderError};
use proptest::prelude::*;

struct ArbitraryOracle(String);

#[async_trait]
impl ChatCompletion for ArbitraryOracle {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ProviderError> {
        Ok(self.0.clone())
    }
}

proptest! {
    #[test]
    fn any_oracle_reply_resolves_to_one_decision(reply in ".*") {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let router = Router::new(Arc::new(ArbitraryOracle(reply)));
        let decision = runtime.block_on(router.route("any question"));
        prop_assert!(matches!(
            decision,
            RouteDecision::Knowledge | RouteDecision::WebSearch | RouteDecision::Summary
        ));
    }

    #[test]
    fn canonical_labels_survive_whitespace_and_quoting(
        label in prop::sample::select(vec!["knowledge", "search", "summary"]),
        pad_left in " {0,3}",
        pad_right in " {0,3}",
    ) {
        let decorated = format!("{pad_left}\"{label}\"{pad_right}");
        let parsed = RouteDecision::parse_label(&decorated);
        prop_assert_eq!(parsed.map(|d| d.label()), Some(label));
    }

    #[test]
    fn parse_label_never_invents_a_decision(raw in "[a-z ]{0,20}") {
        // Anything parse_label accepts must round-trip through the label
        // set or a documented alias.
        if let Some(decision) = RouteDecision::parse_label(&raw) {
            let cleaned = raw.trim();
            let known = [
                "knowledge", "knowledge_base", "search", "web_search", "summary",
            ];
            prop_assert!(known.contains(&cleaned), "{:?} parsed as {}", raw, decision);
        }
    }
}
