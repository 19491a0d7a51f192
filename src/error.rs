//! Error types shared by the search pipeline

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SearchError>;

/// Everything that can go wrong between receiving a request and shaping results
#[derive(Debug, Error)]
pub enum SearchError {
    /// Client input was missing or malformed
    #[error("{0}")]
    Validation(&'static str),

    /// The upstream API key is not configured
    #[error("search service not configured")]
    NotConfigured,

    /// The upstream provider answered with a non-2xx status
    #[error("Serper API error: {status}")]
    Upstream { status: u16 },

    /// Transport failure talking to the upstream provider
    #[error("request to search provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream body was not the JSON we expected
    #[error("failed to parse search provider response: {0}")]
    Json(#[from] serde_json::Error),

    /// A result link could not be parsed while deriving its source hostname
    #[error("invalid result link: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
