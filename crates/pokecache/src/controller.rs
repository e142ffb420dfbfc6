//! Cache-aside orchestration.
//!
//! One controller instance is shared by all request handlers. Every public
//! method returns a [`Page`]; failures along the pipeline are rendered into
//! error artifacts here, so the HTTP layer never has to map errors itself.
//!
//! Failure policy:
//! - Store errors on the read side degrade to a cache miss (the upstream
//!   still gets consulted), logged at `warn`.
//! - Store errors on the write-back are logged and the already-rendered
//!   artifact is still returned.
//! - Upstream errors become uncached 404/500 error pages.
//! - Render errors fall back to a minimal inline page.

use std::sync::Arc;

use axum::http::StatusCode;

use pokecache_core::resource::{parse_resource_id, ResourceRecord, ResourceType};
use pokecache_core::store::{
    data_key, deserialize_record, homepage_key, is_complete_artifact, page_key, record_to_value,
    KeyValueStore, Result as StoreResult, StoreError, ROOT_PATH,
};
use pokecache_core::upstream::UpstreamApi;

use crate::history::{RecencyHistory, HISTORY_CAP};
use crate::render::{CollectionView, DetailView, HistoryView, Renderer};

/// A fully resolved response artifact.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub html: String,
}

impl Page {
    fn ok(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            html,
        }
    }

    fn with_status(status: u16, html: String) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            html,
        }
    }
}

/// Executes the read-through caching protocol per resource type and access
/// pattern, orchestrating store, upstream, renderer, and history.
pub struct CacheAsideController {
    store: Arc<dyn KeyValueStore>,
    upstream: Arc<dyn UpstreamApi>,
    renderer: Arc<dyn Renderer>,
    history: RecencyHistory,
}

impl CacheAsideController {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        upstream: Arc<dyn UpstreamApi>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let history = RecencyHistory::new(store.clone());
        Self {
            store,
            upstream,
            renderer,
            history,
        }
    }

    /// Collection read: `GET /{type}`.
    pub async fn collection_page(&self, resource: ResourceType) -> Page {
        let key = homepage_key(resource);

        match self.cached_collection(&key).await {
            Ok(Some(html)) => {
                tracing::debug!(key = %key, "Serving collection from cache");
                return Page::ok(html);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Store read failed; treating as cache miss");
            }
        }

        tracing::debug!(resource = %resource, "Collection not cached; fetching upstream");
        let entries = match self.upstream.fetch_collection(resource).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!(resource = %resource, error = %err, "Upstream collection fetch failed");
                let status = err.status_code();
                return self
                    .render_collection_view(&CollectionView::error(resource, status), status)
                    .await;
            }
        };

        let view = CollectionView::new(resource, entries);
        let html = match self.renderer.render_collection(&view).await {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(resource = %resource, error = %err, "Collection rendering failed");
                return fallback_page(500);
            }
        };

        // A failed write-back must not fail the response
        if let Err(err) = self.store.set(&key, &html).await {
            tracing::warn!(key = %key, error = %err, "Failed to cache collection artifact");
        } else {
            tracing::debug!(key = %key, "Cached collection artifact");
        }

        Page::ok(html)
    }

    /// Item read: `GET /{type}/{id}`.
    pub async fn detail_page(&self, resource: ResourceType, raw_id: &str) -> Page {
        // Fail fast on malformed identifiers, before any store or upstream call
        let Some(id) = parse_resource_id(raw_id) else {
            tracing::debug!(resource = %resource, raw_id, "Rejected malformed identifier");
            return self
                .error_page(400, "Invalid ID. ID must be a positive integer.")
                .await;
        };

        match self.cached_detail(resource, id).await {
            Ok(Some(html)) => {
                tracing::debug!(resource = %resource, id, "Serving detail from cache");
                return Page::ok(html);
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(resource = %resource, id, error = %err, "Store read failed; treating as cache miss");
            }
        }

        tracing::debug!(resource = %resource, id, "Detail not cached; fetching upstream");
        let record = match self.upstream.fetch_item(resource, id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(resource = %resource, id, error = %err, "Upstream item fetch failed");
                let status = err.status_code();
                return self
                    .render_detail_view(&DetailView::error(resource, status), status)
                    .await;
            }
        };

        // Persist the raw payload and record the access before rendering.
        // The renderer consumes the just-fetched record, never a re-read one.
        match record_to_value(&record) {
            Ok(value) => {
                let key = data_key(resource, id);
                if let Err(err) = self.store.json_set(&key, ROOT_PATH, &value).await {
                    tracing::warn!(key = %key, error = %err, "Failed to cache raw payload");
                }
            }
            Err(err) => {
                tracing::warn!(resource = %resource, id, error = %err, "Failed to serialize raw payload");
            }
        }
        if resource.history_tracked() {
            if let Err(err) = self.record_access(&record).await {
                tracing::warn!(resource = %resource, id, error = %err, "Failed to record history access");
            }
        }

        let view = DetailView::new(resource, record);
        let html = match self.renderer.render_detail(&view).await {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(resource = %resource, id, error = %err, "Detail rendering failed");
                return fallback_page(500);
            }
        };

        let key = page_key(resource, id);
        if let Err(err) = self.store.set(&key, &html).await {
            tracing::warn!(key = %key, error = %err, "Failed to cache detail artifact");
        } else {
            tracing::debug!(key = %key, "Cached detail artifact");
        }

        Page::ok(html)
    }

    /// History read: `GET /pokemon/history`. Never writes to any cache.
    pub async fn history_page(&self) -> Page {
        let (view, status) = match self.history.recent(HISTORY_CAP).await {
            Ok(records) => (HistoryView::new(records), 200),
            Err(err) => {
                tracing::error!(error = %err, "Failed to read history");
                (HistoryView::error(500), 500)
            }
        };

        match self.renderer.render_history(&view).await {
            Ok(html) => Page::with_status(status, html),
            Err(err) => {
                tracing::error!(error = %err, "History rendering failed");
                fallback_page(500)
            }
        }
    }

    /// Checks the rendered-artifact tier for a collection page, validating
    /// the structural marker. An incomplete artifact is reported as a miss
    /// so the caller refetches and overwrites it.
    async fn cached_collection(&self, key: &str) -> StoreResult<Option<String>> {
        if !self.store.exists(key).await? {
            return Ok(None);
        }
        match self.store.get(key).await? {
            Some(html) if is_complete_artifact(&html) => Ok(Some(html)),
            Some(_) => {
                tracing::warn!(key = %key, "Cached collection artifact incomplete; refetching");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Checks both cache tiers for a detail page. For history-tracked types
    /// the raw payload must also be present, and the access is recorded even
    /// though it is a hit.
    async fn cached_detail(&self, resource: ResourceType, id: u64) -> StoreResult<Option<String>> {
        let page_key = page_key(resource, id);
        if !self.store.exists(&page_key).await? {
            return Ok(None);
        }

        if resource.history_tracked() {
            let data_key = data_key(resource, id);
            if !self.store.exists(&data_key).await? {
                return Ok(None);
            }
            let Some(raw) = self.store.json_get(&data_key, ROOT_PATH).await? else {
                return Ok(None);
            };
            let record =
                deserialize_record(raw).map_err(|e| StoreError::Serialization(e.to_string()))?;
            self.record_access(&record).await?;
        }

        self.store.get(&page_key).await
    }

    async fn record_access(&self, record: &ResourceRecord) -> StoreResult<()> {
        self.history.ensure_initialized().await?;
        self.history.append(record).await
    }

    /// Renders a collection view (used for upstream-error pages, which are
    /// never cached), falling back to the minimal page if rendering fails.
    async fn render_collection_view(&self, view: &CollectionView, status: u16) -> Page {
        match self.renderer.render_collection(view).await {
            Ok(html) => Page::with_status(status, html),
            Err(err) => {
                tracing::error!(error = %err, "Error page rendering failed");
                fallback_page(500)
            }
        }
    }

    async fn render_detail_view(&self, view: &DetailView, status: u16) -> Page {
        match self.renderer.render_detail(view).await {
            Ok(html) => Page::with_status(status, html),
            Err(err) => {
                tracing::error!(error = %err, "Error page rendering failed");
                fallback_page(500)
            }
        }
    }

    async fn error_page(&self, status: u16, message: &str) -> Page {
        match self.renderer.render_error(status, message).await {
            Ok(html) => Page::with_status(status, html),
            Err(err) => {
                tracing::error!(error = %err, "Error page rendering failed");
                fallback_page(status)
            }
        }
    }
}

/// Minimal inline page used when template rendering itself fails.
fn fallback_page(status: u16) -> Page {
    Page::with_status(
        status,
        format!("<!DOCTYPE html><html><body><h1>Error {status}</h1></body></html>"),
    )
}
