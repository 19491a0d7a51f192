//! Search request and response models

use crate::error::{Result, SearchError};
use crate::query::{is_js_space, SearchType};
use crate::results::FormattedResult;
use serde::Serialize;
use serde_json::Value;

/// Results returned when the client does not ask for a specific count
pub const DEFAULT_NUM_RESULTS: usize = 10;

pub const QUERY_REQUIRED: &str = "Query is required and must be a non-empty string";
pub const INVALID_NUM_RESULTS: &str = "numResults must be a non-negative integer";

/// A validated search request
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Query exactly as sent by the client
    pub query: String,
    pub search_type: SearchType,
    pub num_results: usize,
}

impl SearchRequest {
    /// Create a general search with the default result count
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_type: SearchType::General,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = search_type;
        self
    }

    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Validate and extract a request from a JSON body
    ///
    /// A non-object body is treated as an empty one.
    pub fn from_json(body: &Value) -> Result<Self> {
        let query = match body.get("query") {
            Some(Value::String(q)) if !trim_query(q).is_empty() => q.clone(),
            _ => return Err(SearchError::Validation(QUERY_REQUIRED)),
        };

        let search_type = body
            .get("searchType")
            .and_then(Value::as_str)
            .map(SearchType::from_name)
            .unwrap_or_default();

        let num_results = match body.get("numResults") {
            None | Some(Value::Null) => DEFAULT_NUM_RESULTS,
            Some(value) => {
                parse_count(value).ok_or(SearchError::Validation(INVALID_NUM_RESULTS))?
            }
        };

        Ok(Self {
            query,
            search_type,
            num_results,
        })
    }

    /// The query with surrounding whitespace removed
    pub fn trimmed_query(&self) -> &str {
        trim_query(&self.query)
    }
}

/// Successful search response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<FormattedResult>,
    pub total_results: usize,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, results: Vec<FormattedResult>) -> Self {
        Self {
            success: true,
            query: query.into(),
            total_results: results.len(),
            results,
        }
    }
}

/// Trim whitespace the way a JavaScript client would
fn trim_query(query: &str) -> &str {
    query.trim_matches(is_js_space)
}

/// Accept integral JSON numbers, including `10.0`
fn parse_count(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= usize::MAX as f64)
        .map(|f| f as usize)
}
