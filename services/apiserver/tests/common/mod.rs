use apiserver::app::{AppState, build_router, seed_demo_data};
use apiserver::store::memory::InMemoryStore;
use axum::Router;
use std::sync::Arc;

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

/// Router over a freshly seeded in-memory store, plus the state behind it.
pub async fn seeded_app() -> (Router, AppState) {
    let store = Arc::new(InMemoryStore::new());
    seed_demo_data(store.as_ref()).await.expect("seed");
    let state = AppState::new(store);
    (build_router(state.clone()), state)
}
