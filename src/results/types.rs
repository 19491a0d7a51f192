//! Result type definitions

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

pub const NO_TITLE: &str = "No title";
pub const NO_DESCRIPTION: &str = "No description available";

/// A single organic hit as returned by the upstream provider
///
/// Fields holding anything other than a string are read as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub snippet: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display_link: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl UpstreamResult {
    /// Link if present and non-empty
    pub fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }
}

/// A result shaped for the client, every field populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: String,
}

impl FormattedResult {
    /// Apply field fallbacks to an upstream result
    ///
    /// `source` prefers `displayLink`; otherwise the hostname is parsed from
    /// `link`, which fails when the link is absent or not an absolute URL.
    pub fn from_upstream(result: UpstreamResult) -> Result<Self> {
        let source = match non_empty(&result.display_link) {
            Some(display) => display.to_string(),
            None => hostname(result.link().unwrap_or_default())?,
        };

        Ok(Self {
            title: or_default(result.title, NO_TITLE),
            link: result.link.unwrap_or_default(),
            snippet: or_default(result.snippet, NO_DESCRIPTION),
            source,
        })
    }
}

/// Hostname of an absolute URL, empty for URLs without a host
fn hostname(link: &str) -> Result<String> {
    let url = Url::parse(link)?;
    Ok(url.host_str().unwrap_or_default().to_string())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
