//! Search orchestration module
//!
//! Validates requests, runs general or evidence searches against the
//! upstream engine, and shapes the merged results.

mod executor;
mod models;

pub use executor::Search;
pub use models::*;
