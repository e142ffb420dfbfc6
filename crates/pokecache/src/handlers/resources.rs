//! Route handlers mapping the HTTP surface onto the controller.
//!
//! Handlers are infallible: the controller resolves every request into a
//! [`Page`] carrying the status and rendered artifact.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};

use pokecache_core::resource::ResourceType;

use crate::{controller::Page, state::AppState};

fn page_response(page: Page) -> impl IntoResponse {
    (page.status, Html(page.html))
}

/// GET /pokemon
pub async fn pokemon_collection(State(state): State<AppState>) -> impl IntoResponse {
    page_response(state.controller.collection_page(ResourceType::Pokemon).await)
}

/// GET /pokemon/{id}
pub async fn pokemon_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    page_response(
        state
            .controller
            .detail_page(ResourceType::Pokemon, &id)
            .await,
    )
}

/// GET /pokemon/history
pub async fn pokemon_history(State(state): State<AppState>) -> impl IntoResponse {
    page_response(state.controller.history_page().await)
}

/// GET /move
pub async fn move_collection(State(state): State<AppState>) -> impl IntoResponse {
    page_response(state.controller.collection_page(ResourceType::Move).await)
}

/// GET /move/{id}
pub async fn move_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    page_response(state.controller.detail_page(ResourceType::Move, &id).await)
}

/// GET /item
pub async fn item_collection(State(state): State<AppState>) -> impl IntoResponse {
    page_response(state.controller.collection_page(ResourceType::Item).await)
}

/// GET /item/{id}
pub async fn item_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    page_response(state.controller.detail_page(ResourceType::Item, &id).await)
}
