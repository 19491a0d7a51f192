//! HTTP client for making requests to the search provider

use crate::config::OutgoingSettings;
use crate::engines::{EngineRequest, EngineResponse};
use crate::error::Result;
use reqwest::{Client, Response};

/// HTTP client wrapper configured from outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = settings.timeout()? {
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: format!("evidence-search/{}", crate::VERSION),
        })
    }

    /// Execute an engine request
    pub async fn execute(&self, request: EngineRequest) -> Result<EngineResponse> {
        let mut req_builder = self
            .client
            .post(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.json(&body);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into EngineResponse
    async fn parse_response(response: Response) -> Result<EngineResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(EngineResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
