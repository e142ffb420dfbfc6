//! Askama-backed renderer.

use askama::Template;
use async_trait::async_trait;

use pokecache_core::resource::ResourceRecord;

use super::{CollectionView, DetailView, HistoryView, RenderError, Renderer, Result};

/// Extracts a resource identifier from an upstream listing URL.
///
/// Upstream URLs end with `/{id}/` (e.g. `.../api/v2/pokemon/25/`); entries
/// whose URL does not match are rendered without a link.
fn extract_id_from_url(url: &str) -> Option<u64> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// One linkable entry of a collection listing.
struct EntryLink {
    name: String,
    id: Option<u64>,
}

#[derive(Template)]
#[template(path = "collection.html")]
struct CollectionTemplate<'a> {
    title: &'a str,
    resource: &'a str,
    entries: Vec<EntryLink>,
    has_error: bool,
    error_status: Option<&'a str>,
}

/// Detail payload with its raw JSON pretty-printed for display.
struct DetailData {
    name: String,
    id: u64,
    json: String,
}

#[derive(Template)]
#[template(path = "detail.html")]
struct DetailTemplate<'a> {
    title: &'a str,
    record: Option<DetailData>,
    has_error: bool,
    error_status: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "history.html")]
struct HistoryTemplate<'a> {
    records: &'a [ResourceRecord],
    has_error: bool,
    error_status: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    status: u16,
    message: &'a str,
}

/// Index page listing the available collections.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Production renderer backed by compiled askama templates.
#[derive(Debug, Clone, Default)]
pub struct AskamaRenderer;

impl AskamaRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Renderer for AskamaRenderer {
    async fn render_collection(&self, view: &CollectionView) -> Result<String> {
        let entries = view
            .entries
            .iter()
            .map(|entry| EntryLink {
                name: entry.name.clone(),
                id: extract_id_from_url(&entry.url),
            })
            .collect();

        let template = CollectionTemplate {
            title: view.resource.label(),
            resource: view.resource.as_str(),
            entries,
            has_error: view.has_error,
            error_status: view.error_status.as_deref(),
        };
        Ok(template.render()?)
    }

    async fn render_detail(&self, view: &DetailView) -> Result<String> {
        let record = view
            .record
            .as_ref()
            .map(|record| {
                let json = serde_json::to_string_pretty(record)
                    .map_err(|e| RenderError::Data(e.to_string()))?;
                Ok::<_, RenderError>(DetailData {
                    name: record.name.clone(),
                    id: record.id,
                    json,
                })
            })
            .transpose()?;

        let template = DetailTemplate {
            title: view.resource.label(),
            record,
            has_error: view.has_error,
            error_status: view.error_status.as_deref(),
        };
        Ok(template.render()?)
    }

    async fn render_history(&self, view: &HistoryView) -> Result<String> {
        let template = HistoryTemplate {
            records: &view.records,
            has_error: view.has_error,
            error_status: view.error_status.as_deref(),
        };
        Ok(template.render()?)
    }

    async fn render_error(&self, status: u16, message: &str) -> Result<String> {
        let template = ErrorTemplate { status, message };
        Ok(template.render()?)
    }
}
