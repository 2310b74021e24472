//! Application settings loaded from config.toml
//!
//! Every field is optional so a missing or partial file still yields a working
//! configuration. The browse section holds the starting selections of the menu
//! screen and the policy for cuisine ids the static list does not know.

use crate::core::cuisine::{ALL_CUISINES, CuisineMatcher, UnknownCuisinePolicy};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Default settings file location.
pub const DEFAULT_SETTINGS_PATH: &str = "config.toml";

/// Top-level settings structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Database URL, overridden by the `DATABASE_URL` environment variable
    #[serde(default)]
    pub database_url: Option<String>,
    /// Menu seed file standing in for a successful remote fetch
    #[serde(default)]
    pub menu_path: Option<PathBuf>,
    /// Simulate lost connectivity
    #[serde(default)]
    pub offline: bool,
    /// Menu browsing options
    #[serde(default)]
    pub browse: BrowseSettings,
}

/// Menu browsing options
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseSettings {
    /// How unknown cuisine ids are matched
    #[serde(default)]
    pub unknown_cuisine: UnknownCuisinePolicy,
    /// Initial category selection ("all", "wine", "beer", ...)
    #[serde(default = "default_selection")]
    pub category: String,
    /// Initial cuisine selection
    #[serde(default = "default_selection")]
    pub cuisine: String,
}

fn default_selection() -> String {
    ALL_CUISINES.to_string()
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            unknown_cuisine: UnknownCuisinePolicy::default(),
            category: default_selection(),
            cuisine: default_selection(),
        }
    }
}

impl Settings {
    /// A matcher honoring the configured unknown-cuisine policy.
    #[must_use]
    pub const fn cuisine_matcher(&self) -> CuisineMatcher {
        CuisineMatcher::new(self.browse.unknown_cuisine)
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)
        .inspect_err(|e| error!("Failed to read settings file {:?}: {}", path_ref, e))?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings file {path_ref:?}: {e}"),
    })
}

/// Loads settings, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Result<Settings> {
    if path.as_ref().exists() {
        load_settings(path)
    } else {
        info!(
            "No settings file at {:?}, using defaults",
            path.as_ref()
        );
        Ok(Settings::default())
    }
}
