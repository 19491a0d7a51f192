//! Engine traits and types

use crate::error::Result;
use crate::results::UpstreamResult;
use std::collections::HashMap;

/// Parameters for building a search request
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// Search query string
    pub query: String,
    /// Number of results requested
    pub num_results: usize,
}

impl RequestParams {
    /// Create new request parameters
    pub fn new(query: impl Into<String>, num_results: usize) -> Self {
        Self {
            query: query.into(),
            num_results,
        }
    }
}

/// HTTP request to be made on behalf of an engine
#[derive(Debug, Clone)]
pub struct EngineRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl EngineRequest {
    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add JSON body
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// HTTP response from an engine request
#[derive(Debug)]
pub struct EngineResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl EngineResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A search provider: knows how to phrase a request and read the answer
pub trait Engine: Send + Sync {
    /// Engine name
    fn name(&self) -> &str;

    /// Whether credentials needed by the provider are present
    fn is_configured(&self) -> bool {
        true
    }

    /// Build the HTTP request for a search
    fn request(&self, params: &RequestParams) -> Result<EngineRequest>;

    /// Parse the HTTP response into organic results
    fn response(&self, response: EngineResponse) -> Result<Vec<UpstreamResult>>;
}
