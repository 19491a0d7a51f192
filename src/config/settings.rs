//! Settings structures for evidence-search configuration

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Serper search endpoint
pub const SERPER_API_URL: &str = "https://google.serper.dev/search";

/// Main settings structure, loaded from settings.yml and the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that parse but cannot be used
    pub fn validate(&self) -> Result<()> {
        self.outgoing.timeout()?;
        Ok(())
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SERPER_API_KEY") {
            self.upstream.api_key = Some(val);
        }
        if let Some(val) = lookup("SERPER_API_URL") {
            self.upstream.url = val;
        }
        if let Some(val) = lookup("NODE_ENV") {
            self.general.environment = val;
        }
        if let Some(val) = lookup("SEARCH_PROXY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("SEARCH_PROXY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Deployment mode; "development" exposes error details to clients
    pub environment: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
        }
    }
}

impl GeneralSettings {
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Upstream search provider settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Search endpoint
    pub url: String,
    /// API key sent as X-API-KEY
    pub api_key: Option<String>,
    /// Country code (gl)
    pub country: String,
    /// Interface language (hl)
    pub language: String,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            url: SERPER_API_URL.to_string(),
            api_key: None,
            country: "us".to_string(),
            language: "en".to_string(),
        }
    }
}

impl UpstreamSettings {
    /// The configured key, treating an empty value as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("url", &self.url)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("country", &self.country)
            .field("language", &self.language)
            .finish()
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds (none = transport default)
    pub request_timeout: Option<f64>,
    /// Max idle connections kept per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl OutgoingSettings {
    /// Request timeout as a `Duration`
    ///
    /// The value must be a finite, positive number of seconds.
    pub fn timeout(&self) -> Result<Option<Duration>> {
        let Some(secs) = self.request_timeout else {
            return Ok(None);
        };
        ensure!(
            secs.is_finite() && secs > 0.0,
            "outgoing.request_timeout must be a positive number of seconds, got {}",
            secs
        );
        Ok(Some(Duration::try_from_secs_f64(secs)?))
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.upstream.url, SERPER_API_URL);
        assert!(settings.upstream.api_key().is_none());
        assert!(!settings.general.is_development());
        assert!(settings.outgoing.request_timeout.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            "server:\n  port: 8080\nupstream:\n  country: gb\n",
        )
        .unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.upstream.country, "gb");
        assert_eq!(settings.upstream.language, "en");
    }

    #[test]
    fn test_request_timeout() {
        let settings = Settings::from_yaml("outgoing:\n  request_timeout: 2.5\n").unwrap();
        assert_eq!(
            settings.outgoing.timeout().unwrap(),
            Some(Duration::from_millis(2500))
        );
        assert_eq!(Settings::default().outgoing.timeout().unwrap(), None);
    }

    #[test]
    fn test_unusable_request_timeout_is_rejected() {
        for value in ["-1", "0", ".nan", ".inf"] {
            let yaml = format!("outgoing:\n  request_timeout: {}\n", value);
            let err = Settings::from_yaml(&yaml).unwrap_err();
            assert!(
                err.to_string().contains("request_timeout"),
                "{} gave {}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("SERPER_API_KEY", "secret"),
            ("NODE_ENV", "development"),
            ("SEARCH_PROXY_PORT", "9000"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(settings.upstream.api_key(), Some("secret"));
        assert!(settings.general.is_development());
        assert_eq!(settings.server.port, 9000);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let mut settings = Settings::default();
        settings.merge_vars(|k| (k == "SERPER_API_KEY").then(String::new));
        assert!(settings.upstream.api_key().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut settings = Settings::default();
        settings.upstream.api_key = Some("super-secret".to_string());
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
