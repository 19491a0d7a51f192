//! Configuration module for evidence-search
//!
//! Settings are loaded once at startup from a YAML file (if any) and the
//! environment, then handed to the web state. Nothing reads the environment
//! at request time.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Load settings from the first file found, falling back to defaults,
/// then apply environment overrides
pub fn load() -> Result<Settings> {
    let mut settings = match settings_path() {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn settings_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SEARCH_PROXY_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let mut candidates = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("evidence-search/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}
