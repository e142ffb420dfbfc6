use std::time::Duration;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        pages::index,
        resources::{
            item_collection, item_detail, move_collection, move_detail, pokemon_collection,
            pokemon_detail, pokemon_history,
        },
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// `/pokemon/history` is a static segment, so axum matches it ahead of the
/// `/pokemon/{id}` capture.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pokemon", get(pokemon_collection))
        .route("/pokemon/history", get(pokemon_history))
        .route("/pokemon/{id}", get(pokemon_detail))
        .route("/move", get(move_collection))
        .route("/move/{id}", get(move_detail))
        .route("/item", get(item_collection))
        .route("/item/{id}", get(item_detail))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

/// Catch-all for unknown paths.
async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "Route not valid"})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use pokecache_core::resource::{ResourceRecord, ResourceSummary, ResourceType};
    use pokecache_core::upstream::{Result as UpstreamResult, UpstreamApi, UpstreamError};

    use crate::render::AskamaRenderer;
    use crate::store::MemoryStore;

    struct MockUpstream {
        collection: Vec<ResourceSummary>,
        items: HashMap<u64, ResourceRecord>,
    }

    #[async_trait]
    impl UpstreamApi for MockUpstream {
        async fn fetch_collection(
            &self,
            _resource: ResourceType,
        ) -> UpstreamResult<Vec<ResourceSummary>> {
            Ok(self.collection.clone())
        }

        async fn fetch_item(
            &self,
            _resource: ResourceType,
            id: u64,
        ) -> UpstreamResult<ResourceRecord> {
            self.items.get(&id).cloned().ok_or(UpstreamError::NotFound)
        }
    }

    fn test_state() -> AppState {
        let mut items = HashMap::new();
        items.insert(
            25,
            serde_json::from_value(serde_json::json!({"id": 25, "name": "pikachu"})).unwrap(),
        );
        let upstream = MockUpstream {
            collection: vec![ResourceSummary {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            }],
            items,
        };

        AppState::new(
            Arc::new(MemoryStore::new()),
            Arc::new(upstream),
            Arc::new(AskamaRenderer::new()),
        )
    }

    async fn get_body(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_page() {
        let app = create_app(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = get_body(response).await;
        assert!(html.contains("pokecache"));
        assert!(html.contains("/pokemon"));
    }

    #[tokio::test]
    async fn test_collection_route() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pokemon")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = get_body(response).await;
        assert!(html.contains("bulbasaur"));
    }

    #[tokio::test]
    async fn test_detail_route() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pokemon/25")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = get_body(response).await;
        assert!(html.contains("pikachu"));
    }

    #[tokio::test]
    async fn test_malformed_id_returns_400() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pokemon/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_item_returns_404() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/move/9001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_route_beats_id_capture() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/pokemon/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Served by the history handler, not rejected as a malformed id
        assert_eq!(response.status(), StatusCode::OK);
        let html = get_body(response).await;
        assert!(html.contains("Recently viewed"));
    }

    #[tokio::test]
    async fn test_fallback_route() {
        let app = create_app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonsense")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = get_body(response).await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Route not valid");
    }
}
