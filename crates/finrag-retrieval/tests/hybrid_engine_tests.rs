//! Integration tests for the hybrid search engine over stub collaborators

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use finrag_domain::{DocumentPayload, MetadataFilter, SparseVector};
use finrag_retrieval::{
    Bm25QueryEncoder, DenseEmbedder, EmbeddingError, HybridSearchEngine, RetrievalError,
    SparseEmbedder, StorePoint, VectorStore, PREFETCH_LIMIT,
};

struct StubDense;

#[async_trait]
impl DenseEmbedder for StubDense {
    fn dimension(&self) -> usize {
        4
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![0.1, 0.2, 0.3, 0.4])
    }
}

struct FailingDense;

#[async_trait]
impl DenseEmbedder for FailingDense {
    fn dimension(&self) -> usize {
        4
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError("provider offline".to_string()))
    }
}

/// Canned store that records the filters and limits it was asked for.
#[derive(Default)]
struct RecordingStore {
    dense_points: Vec<StorePoint>,
    sparse_points: Vec<StorePoint>,
    seen_filters: Mutex<Vec<Option<MetadataFilter>>>,
    seen_limits: Mutex<Vec<usize>>,
}

#[async_trait]
impl VectorStore for RecordingStore {
    async fn dense_search(
        &self,
        _vector: &[f32],
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        self.seen_filters.lock().unwrap().push(filter.cloned());
        self.seen_limits.lock().unwrap().push(limit);
        Ok(self.dense_points.clone())
    }

    async fn sparse_search(
        &self,
        _sparse: &SparseVector,
        limit: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        self.seen_filters.lock().unwrap().push(filter.cloned());
        self.seen_limits.lock().unwrap().push(limit);
        Ok(self.sparse_points.clone())
    }
}

struct FailingStore {
    calls: AtomicUsize,
}

#[async_trait]
impl VectorStore for FailingStore {
    async fn dense_search(
        &self,
        _vector: &[f32],
        _limit: usize,
        _filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RetrievalError::Store("qdrant unreachable".to_string()))
    }

    async fn sparse_search(
        &self,
        _sparse: &SparseVector,
        _limit: usize,
        _filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RetrievalError::Store("qdrant unreachable".to_string()))
    }
}

fn point(id: &str, content: &str) -> StorePoint {
    StorePoint {
        id: id.to_string(),
        payload: DocumentPayload {
            content: content.to_string(),
            source: "netflix-10k.pdf".to_string(),
            document_type: "10-K Filing".to_string(),
            page: 3,
            chunk_tags: "subscribers growth".to_string(),
        },
    }
}

fn engine(store: Arc<dyn VectorStore>) -> HybridSearchEngine {
    HybridSearchEngine::new(
        Arc::new(StubDense),
        Arc::new(Bm25QueryEncoder::new()),
        store,
    )
}

#[tokio::test]
async fn search_fuses_both_arms_and_preserves_payload() {
    let store = Arc::new(RecordingStore {
        dense_points: vec![point("a", "dense hit"), point("b", "shared hit")],
        sparse_points: vec![point("b", "shared hit"), point("c", "sparse hit")],
        ..Default::default()
    });
    let engine = engine(store.clone());

    let results = engine
        .search("netflix subscriber growth", None, 5)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].candidate.id, "b");
    assert_eq!(results[0].candidate.payload.source, "netflix-10k.pdf");
    assert_eq!(results[0].candidate.payload.page, 3);
}

#[tokio::test]
async fn both_arms_receive_the_filter_and_prefetch_limit() {
    let store = Arc::new(RecordingStore {
        dense_points: vec![point("a", "x")],
        sparse_points: vec![point("a", "x")],
        ..Default::default()
    });
    let engine = engine(store.clone());

    let filter = MetadataFilter::document_type("Shareholder Letter");
    engine
        .search("summarize the letter", Some(&filter), 5)
        .await
        .unwrap();

    let filters = store.seen_filters.lock().unwrap();
    assert_eq!(filters.len(), 2);
    assert!(filters.iter().all(|f| f.as_ref() == Some(&filter)));

    let limits = store.seen_limits.lock().unwrap();
    assert!(limits.iter().all(|&l| l == PREFETCH_LIMIT));
}

#[tokio::test]
async fn limit_truncates_fused_output() {
    let store = Arc::new(RecordingStore {
        dense_points: (0..10).map(|i| point(&format!("d{i}"), "x")).collect(),
        sparse_points: (0..10).map(|i| point(&format!("s{i}"), "x")).collect(),
        ..Default::default()
    });
    let engine = engine(store);

    let results = engine.search("anything", None, 3).await.unwrap();
    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn repeated_searches_are_idempotent() {
    let store = Arc::new(RecordingStore {
        dense_points: vec![point("a", "x"), point("b", "y"), point("c", "z")],
        sparse_points: vec![point("c", "z"), point("d", "w")],
        ..Default::default()
    });
    let engine = engine(store);

    let first: Vec<String> = engine
        .search("same query", None, 5)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.candidate.id)
        .collect();
    let second: Vec<String> = engine
        .search("same query", None, 5)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.candidate.id)
        .collect();
    assert_eq!(first, second);
}

#[tokio::test]
async fn store_failure_surfaces_as_store_error() {
    let store = Arc::new(FailingStore {
        calls: AtomicUsize::new(0),
    });
    let engine = engine(store.clone());

    let err = engine.search("anything", None, 5).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Store(_)));
    // No internal retry: at most one attempt per arm
    assert!(store.calls.load(Ordering::SeqCst) <= 2);
}

/// Store that serves the dense arm but rejects every sparse query, the
/// way Qdrant rejects an empty sparse vector.
struct SparseRejectingStore {
    dense_points: Vec<StorePoint>,
    sparse_calls: AtomicUsize,
}

#[async_trait]
impl VectorStore for SparseRejectingStore {
    async fn dense_search(
        &self,
        _vector: &[f32],
        _limit: usize,
        _filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        Ok(self.dense_points.clone())
    }

    async fn sparse_search(
        &self,
        _sparse: &SparseVector,
        _limit: usize,
        _filter: Option<&MetadataFilter>,
    ) -> Result<Vec<StorePoint>, RetrievalError> {
        self.sparse_calls.fetch_add(1, Ordering::SeqCst);
        Err(RetrievalError::Store("empty sparse vector".to_string()))
    }
}

#[tokio::test]
async fn stopword_only_query_is_served_by_the_dense_arm_alone() {
    let store = Arc::new(SparseRejectingStore {
        dense_points: vec![point("a", "dense hit"), point("b", "another hit")],
        sparse_calls: AtomicUsize::new(0),
    });
    let engine = engine(store.clone());

    // Every token is a stopword, so the sparse encoding is empty and the
    // sparse arm must not be consulted at all.
    let results = engine.search("What is it?", None, 5).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].candidate.id, "a");
    assert!(results.iter().all(|f| f.candidate.sparse_rank.is_none()));
    assert_eq!(store.sparse_calls.load(Ordering::SeqCst), 0);

    // A query with real terms still reaches the sparse arm, and its
    // failure still surfaces.
    let err = engine
        .search("netflix subscriber growth", None, 5)
        .await
        .unwrap_err();
    assert!(matches!(err, RetrievalError::Store(_)));
    assert_eq!(store.sparse_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn embedding_failure_surfaces_as_embedding_error() {
    let store = Arc::new(RecordingStore::default());
    let engine = HybridSearchEngine::new(
        Arc::new(FailingDense),
        Arc::new(Bm25QueryEncoder::new()),
        store.clone(),
    );

    let err = engine.search("anything", None, 5).await.unwrap_err();
    assert!(matches!(err, RetrievalError::Embedding(_)));
    // The store is never consulted when embedding fails
    assert!(store.seen_limits.lock().unwrap().is_empty());
}
