//! HTTP client for the upstream provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use pokecache_core::resource::{ResourceRecord, ResourceSummary, ResourceType};
use pokecache_core::upstream::{Result, UpstreamApi, UpstreamError};

/// Envelope of a collection listing response.
#[derive(Debug, Deserialize)]
struct CollectionEnvelope {
    results: Vec<ResourceSummary>,
}

/// Read-only HTTP client for the upstream data provider.
///
/// A 404 response maps to `UpstreamError::NotFound`; any other non-2xx
/// status, transport failure, or malformed body maps to
/// `UpstreamError::ServiceFailure`. No retries are performed.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a new client with the given base URL and per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify the response status, then decode the body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::ServiceFailure(e.to_string()))
        } else if status.as_u16() == 404 {
            Err(UpstreamError::NotFound)
        } else {
            Err(UpstreamError::ServiceFailure(format!(
                "upstream returned status {}",
                status.as_u16()
            )))
        }
    }
}

#[async_trait]
impl UpstreamApi for PokeApiClient {
    async fn fetch_collection(&self, resource: ResourceType) -> Result<Vec<ResourceSummary>> {
        let response = self
            .client
            .get(self.url(&format!("/{}/", resource.as_str())))
            .send()
            .await
            .map_err(|e| UpstreamError::ServiceFailure(e.to_string()))?;

        let envelope: CollectionEnvelope = self.handle_response(response).await?;
        Ok(envelope.results)
    }

    async fn fetch_item(&self, resource: ResourceType, id: u64) -> Result<ResourceRecord> {
        let response = self
            .client
            .get(self.url(&format!("/{}/{}", resource.as_str(), id)))
            .send()
            .await
            .map_err(|e| UpstreamError::ServiceFailure(e.to_string()))?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2", Duration::from_secs(10));
        assert_eq!(
            client.url("/pokemon/25"),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
        assert_eq!(client.url("/item/"), "https://pokeapi.co/api/v2/item/");
    }

    #[test]
    fn test_collection_envelope_decoding() {
        let envelope: CollectionEnvelope = serde_json::from_value(serde_json::json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}
            ]
        }))
        .unwrap();

        assert_eq!(envelope.results.len(), 1);
        assert_eq!(envelope.results[0].name, "bulbasaur");
    }
}
