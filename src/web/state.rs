//! Application state shared across handlers

use crate::config::Settings;
use crate::engines::Serper;
use crate::network::HttpClient;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        let engine = Arc::new(Serper::new(&settings.upstream));
        let search = Arc::new(Search::new(client, engine));

        Ok(Self {
            settings: Arc::new(settings),
            search,
        })
    }

    /// Whether error details may be shown to clients
    pub fn expose_errors(&self) -> bool {
        self.settings.general.is_development()
    }
}
