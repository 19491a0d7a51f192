//! Web server module
//!
//! Provides the HTTP API for evidence-search.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{create_router, ALLOW_HEADERS, ALLOW_METHODS};
pub use state::AppState;
