//! Serper (Google Search API) engine implementation

use super::traits::*;
use crate::config::UpstreamSettings;
use crate::error::{Result, SearchError};
use crate::results::UpstreamResult;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Option<Vec<UpstreamResult>>,
}

/// Serper web search engine
pub struct Serper {
    url: String,
    api_key: Option<String>,
    country: String,
    language: String,
}

impl Serper {
    pub fn new(settings: &UpstreamSettings) -> Self {
        Self {
            url: settings.url.clone(),
            api_key: settings.api_key().map(str::to_string),
            country: settings.country.clone(),
            language: settings.language.clone(),
        }
    }
}

impl Default for Serper {
    fn default() -> Self {
        Self::new(&UpstreamSettings::default())
    }
}

impl Engine for Serper {
    fn name(&self) -> &str {
        "serper"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn request(&self, params: &RequestParams) -> Result<EngineRequest> {
        let api_key = self.api_key.as_deref().ok_or(SearchError::NotConfigured)?;

        Ok(EngineRequest::post(&self.url)
            .header("X-API-KEY", api_key)
            .header("Content-Type", "application/json")
            .json(json!({
                "q": params.query,
                "num": params.num_results,
                "gl": self.country,
                "hl": self.language,
            })))
    }

    fn response(&self, response: EngineResponse) -> Result<Vec<UpstreamResult>> {
        if !response.is_success() {
            return Err(SearchError::Upstream {
                status: response.status,
            });
        }

        let data: SerperResponse = response.json()?;
        Ok(data.organic.unwrap_or_default())
    }
}
