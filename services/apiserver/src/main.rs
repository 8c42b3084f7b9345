//! Household API server entry point.
//!
//! # Purpose
//! Loads configuration, installs the role registry, wires storage and the HTTP
//! router, then serves until Ctrl-C.
use anyhow::Context;
use apiserver::app::{AppState, build_router, seed_demo_data};
use apiserver::config::ApiServerConfig;
use apiserver::observability;
use apiserver::store::ApiStore;
use apiserver::store::memory::InMemoryStore;
use std::future::Future;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiServerConfig::from_env_or_yaml().context("api server config")?;
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: ApiServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability();
    // The grant table is fixed before the first request is accepted.
    let registry = larder_authz::init_roles();
    tracing::info!(roles = ?registry.role_names(), "role registry ready");

    let state = build_state(&config).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);
    let addr = config.bind_addr;
    tracing::info!(%addr, "api server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: &ApiServerConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn ApiStore> = Arc::new(InMemoryStore::new());
    if config.seed_demo_sessions {
        seed_demo_data(store.as_ref()).await?;
    }
    tracing::info!(backend = store.backend_name(), "store ready");
    Ok(AppState::new(store))
}
