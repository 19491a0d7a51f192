//! Search engine implementations
//!
//! An engine turns request parameters into an HTTP request and parses the
//! provider's answer into organic results.

mod serper;
mod traits;

pub use serper::Serper;
pub use traits::*;
