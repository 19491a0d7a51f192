//! Result handling module
//!
//! Upstream result shapes, client-facing formatting and link deduplication.

mod merge;
mod types;

pub use merge::{dedup_by_key, dedup_by_link, merge_results};
pub use types::*;
