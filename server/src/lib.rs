use std::sync::Arc;

use anyhow::{ensure, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use sift_core::rank::{search_index, SearchResult};
use sift_core::TermFreqIndex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    index: Arc<TermFreqIndex>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Fixed response vocabulary for the search API. Internal failures never
/// leak through this shape.
#[derive(Serialize)]
pub struct ApiResponse {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SearchResult>>,
}

/// Assemble the router over a fully loaded index. The index is read-only
/// from here on and shared across concurrent requests.
pub fn build_app(index: TermFreqIndex) -> Result<Router> {
    ensure!(!index.is_empty(), "index cannot be empty");

    let state = AppState {
        index: Arc::new(index),
    };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/search",
            get(search_handler).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

async fn method_not_allowed() -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiResponse {
            msg: "invalid request method".into(),
            data: None,
        }),
    )
}

async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<ApiResponse>) {
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse {
                    msg: "q query param is required".into(),
                    data: None,
                }),
            )
        }
    };

    let results = search_index(query, &state.index);
    let msg = format!("Close match in {} files", results.len());
    (
        StatusCode::OK,
        Json(ApiResponse {
            msg,
            data: Some(results),
        }),
    )
}
