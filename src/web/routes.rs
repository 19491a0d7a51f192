//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{
    http::{header, HeaderName, HeaderValue},
    routing::{any, get},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub const ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Create the application router with all routes
///
/// CORS headers are stamped on every response. `CorsLayer` refuses to pair
/// `Allow-Credentials: true` with a wildcard origin, so they are set directly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", any(handlers::search))
        .route("/health", get(handlers::health))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            "true",
        ))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            ALLOW_METHODS,
        ))
        .layer(cors_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            ALLOW_HEADERS,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}
