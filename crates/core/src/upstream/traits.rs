use async_trait::async_trait;

use crate::resource::{ResourceRecord, ResourceSummary, ResourceType};

use super::Result;

/// Contract for the remote read-only data provider.
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Fetches the ordered collection listing for a resource type.
    async fn fetch_collection(&self, resource: ResourceType) -> Result<Vec<ResourceSummary>>;

    /// Fetches one resource by identifier.
    async fn fetch_item(&self, resource: ResourceType, id: u64) -> Result<ResourceRecord>;
}
