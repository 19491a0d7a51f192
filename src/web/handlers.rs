//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::search::{SearchRequest, SearchResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// Search endpoint
///
/// Answers CORS preflight, rejects anything but POST, then validates the
/// body and runs the search. The body is read raw so that a missing or
/// malformed payload reports the same validation error as an empty one.
pub async fn search(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        return ApiError::MethodNotAllowed.into_response();
    }

    let request_id = Uuid::new_v4();
    match handle_search(&state, &body)
        .instrument(info_span!("search", %request_id))
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_search(state: &AppState, body: &[u8]) -> Result<SearchResponse, ApiError> {
    let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

    let request = SearchRequest::from_json(&payload)
        .map_err(|e| ApiError::from_search(e, state.expose_errors()))?;

    if !state.search.is_configured() {
        error!("SERPER_API_KEY not found in settings or environment");
        return Err(ApiError::NotConfigured);
    }

    info!(
        "Search '{}' type={} num={}",
        request.trimmed_query(),
        request.search_type.as_str(),
        request.num_results
    );

    state.search.execute(&request).await.map_err(|e| {
        error!("Search function error: {}", e);
        ApiError::from_search(e, state.expose_errors())
    })
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
