//! Shared application state.
//!
//! The store connection is acquired once at startup and shared by every
//! request handler through this state; nothing here is a module-level
//! singleton. The backend is selected at compile time via the `memory` /
//! `redis` features (see `store/mod.rs` for the guards).

use std::sync::Arc;

use pokecache_core::store::KeyValueStore;
use pokecache_core::upstream::UpstreamApi;

use crate::config::Config;
use crate::controller::CacheAsideController;
use crate::render::{AskamaRenderer, Renderer};
use crate::upstream::PokeApiClient;

/// Shared application state, cloned per request handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<CacheAsideController>,
}

impl AppState {
    /// Builds state from explicit collaborators. Used by tests to inject
    /// mock backends.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        upstream: Arc<dyn UpstreamApi>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            controller: Arc::new(CacheAsideController::new(store, upstream, renderer)),
        }
    }

    /// Builds production state: feature-selected store backend, HTTP
    /// upstream client, askama renderer.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = build_store(config).await?;
        let upstream: Arc<dyn UpstreamApi> = Arc::new(PokeApiClient::new(
            config.upstream_base_url.clone(),
            config.request_timeout(),
        ));
        let renderer: Arc<dyn Renderer> = Arc::new(AskamaRenderer::new());
        Ok(Self::new(store, upstream, renderer))
    }
}

#[cfg(feature = "memory")]
async fn build_store(_config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    tracing::info!("Using in-memory store backend");
    Ok(Arc::new(crate::store::MemoryStore::new()))
}

#[cfg(feature = "redis")]
async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    tracing::info!(url = %config.redis_url, "Connecting to Redis store backend");
    let store = crate::store::RedisStore::new(&config.redis_url).await?;
    Ok(Arc::new(store))
}
