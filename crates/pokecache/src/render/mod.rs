//! Rendering boundary.
//!
//! The controller talks to a `Renderer` trait so the cache-aside pipeline can
//! be tested without touching templates; `AskamaRenderer` is the production
//! implementation. Rendering is side-effect free; persisting the produced
//! artifact is the controller's job.

mod engine;
mod views;

use async_trait::async_trait;
use thiserror::Error;

pub use engine::{AskamaRenderer, IndexTemplate};
pub use views::{error_status_line, CollectionView, DetailView, HistoryView};

/// Errors that can occur while producing an artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),
    #[error("Render data error: {0}")]
    Data(String),
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Produces textual artifacts from view data.
///
/// Every view carries the conventional `{data, has_error, error_status}`
/// shape; error pages for a resource render through the same template as the
/// success page, with the error banner populated.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn render_collection(&self, view: &CollectionView) -> Result<String>;
    async fn render_detail(&self, view: &DetailView) -> Result<String>;
    async fn render_history(&self, view: &HistoryView) -> Result<String>;
    async fn render_error(&self, status: u16, message: &str) -> Result<String>;
}
