//! evidence-search: a search proxy in front of the Serper API
//!
//! Accepts JSON search requests, optionally fans a query out into several
//! evidence-oriented sub-queries, and returns deduplicated results in a
//! stable JSON shape.

pub mod config;
pub mod engines;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use engines::Engine;
pub use error::{Result, SearchError};
pub use search::{Search, SearchRequest, SearchResponse};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
