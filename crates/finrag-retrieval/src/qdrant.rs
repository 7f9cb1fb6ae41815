//! Qdrant vector-store backend
//!
//! One collection with two named vectors per point: `dense` (cosine) and
//! `sparse` (weighted term overlap). Payload keys follow the ingestion
//! contract in `finrag_domain::DocumentPayload`.

use std::time::Duration;

use async_trait::async_trait;
use finrag_domain::{DocumentPayload, MetadataFilter, SparseVector};
use qdrant_client::{
    qdrant::{
        self, value::Kind, Condition, Filter, SearchPoints, SparseIndices, Value,
    },
    Qdrant,
};
use tracing::debug;

use crate::{
    error::RetrievalError,
    store::{StorePoint, VectorStore},
};

const DENSE_VECTOR_NAME: &str = "dense";
const SPARSE_VECTOR_NAME: &str = "sparse";

/// Qdrant-backed implementation of [`VectorStore`].
pub struct QdrantStore {
    client: Qdrant,
    collection: String,
}

impl QdrantStore {
    /// Connect to Qdrant. `timeout` bounds every store call; on expiry the
    /// call fails and the error propagates (no internal retry).
    pub fn connect(
        url: &str,
        api_key: Option<String>,
        collection: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RetrievalError> {
        let mut builder = Qdrant::from_url(url).timeout(timeout);
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        let client = builder
            .build()
            .map_err(|e| RetrievalError::Store(e.to_string()))?;
        Ok(Self {
            client,
            collection: collection.into(),
        })
    }

    /// Whether the configured collection exists; used by health checks.
    pub async fn collection_exists(&self) -> Result<bool, RetrievalError> {
        self.client
            .collection_exists(&self.collection)
            .await
            .map_err(|e| RetrievalError::Store(e.to_string()))
    }

    fn build_filter(filter: Option<&MetadataFilter>) -> Option<Filter> {
        filter.map(|f| Filter {
            must: vec![Condition::matches(
                "document_type",
                f.document_type.clone(),
            )],
            ..Default::default()
        })
    }

    async fn run_search(&self, request: SearchPoints) -> Result<Vec<StorePoint>, RetrievalError> {
        let response = self
            .client
            .search_points(request)
            .await
            .map_err(|e| RetrievalError::Store(e.to_string()))?;

        let mut hits = Vec::with_capacity(response.result.len());
        for point in response.result {
            let id = point
                .id
                .as_ref()
                .and_then(|point_id| point_id.point_id_options.as_ref())
                .map(|inner| match inner {
                    qdrant::point_id::PointIdOptions::Num(num) => num.to_string(),
                    qdrant::point_id::PointIdOptions::Uuid(uuid) => uuid.clone(),
                })
                .unwrap_or_default();
            let payload = &point.payload;
            hits.push(StorePoint {
                id,
                payload: DocumentPayload {
                    content: payload_to_string(payload.get("content")).unwrap_or_default(),
                    source: payload_to_string(payload.get("source")).unwrap_or_default(),
                    document_type: payload_to_string(payload.get("document_type"))
                        .unwrap_or_default(),
                    page: payload_to_i64(payload.get("page")).unwrap_or_default(),
                    chunk_tags: payload_to_string(payload.get("chunk_tags")).unwrap_or_default(),
                },
            });
        }
        Ok(hits)
    }
}

#[async_trait]
impl VectorStore for QdrantStore {
    async fn dense_search(
        &self,
        vector: &[f32],
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        debug!(limit, filtered = filter.is_some(), "dense search");
        self.run_search(SearchPoints {
            collection_name: self.collection.clone(),
            vector: vector.to_vec(),
            vector_name: Some(DENSE_VECTOR_NAME.to_string()),
            limit: limit as u64,
            filter: Self::build_filter(filter),
            with_payload: Some(qdrant::WithPayloadSelector {
                selector_options: Some(qdrant::with_payload_selector::SelectorOptions::Enable(
                    true,
                )),
            }),
            ..Default::default()
        })
        .await
    }

    async fn sparse_search(
        &self,
        sparse: &SparseVector,
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        debug!(
            limit,
            terms = sparse.indices.len(),
            filtered = filter.is_some(),
            "sparse search"
        );
        self.run_search(SearchPoints {
            collection_name: self.collection.clone(),
            vector: sparse.values.clone(),
            sparse_indices: Some(SparseIndices {
                data: sparse.indices.clone(),
            }),
            vector_name: Some(SPARSE_VECTOR_NAME.to_string()),
            limit: limit as u64,
            filter: Self::build_filter(filter),
            with_payload: Some(qdrant::WithPayloadSelector {
                selector_options: Some(qdrant::with_payload_selector::SelectorOptions::Enable(
                    true,
                )),
            }),
            ..Default::default()
        })
        .await
    }
}

fn payload_to_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|value| value.kind.as_ref())
        .and_then(|kind| match kind {
            Kind::StringValue(text) => Some(text.clone()),
            _ => None,
        })
}

fn payload_to_i64(value: Option<&Value>) -> Option<i64> {
    value
        .and_then(|value| value.kind.as_ref())
        .and_then(|kind| match kind {
            Kind::IntegerValue(val) => Some(*val),
            Kind::DoubleValue(val) => Some(*val as i64),
            _ => None,
        })
}
