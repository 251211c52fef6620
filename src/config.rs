//! Application settings.
//!
//! Settings live in an optional JSON file at
//! `<config dir>/portfolio/settings.json`:
//! - Linux: ~/.config/portfolio/settings.json
//! - macOS: ~/Library/Application Support/portfolio/settings.json
//! - Windows: %APPDATA%\portfolio\settings.json
//!
//! A missing file means defaults. Unknown keys are ignored and absent keys
//! fall back to their default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::logging::Verbosity;

const APP_DIR_NAME: &str = "portfolio";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Upper bound on the simulated submission delay.
const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Smallest window edge we accept.
const MIN_WINDOW_EDGE: f32 = 320.0;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    pub fn to_theme(self) -> iced::Theme {
        match self {
            Self::Dark => iced::Theme::Dark,
            Self::Light => iced::Theme::Light,
        }
    }
}

/// Everything the user can tune without touching the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    pub verbosity: Verbosity,
    /// How long the contact form pretends to send, in milliseconds.
    pub submit_delay_ms: u64,
    /// Maximum number of projects on the home page.
    pub featured_limit: usize,
    pub window_width: f32,
    pub window_height: f32,
    /// Root that catalog asset references are resolved against.
    /// `None` shows placeholders instead of images.
    pub assets_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            verbosity: Verbosity::Normal,
            submit_delay_ms: 1_000,
            featured_limit: 4,
            window_width: 1280.0,
            window_height: 860.0,
            assets_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory on this platform, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// `<config dir>/portfolio/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR_NAME);
        path.push(SETTINGS_FILE_NAME);
        Some(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.featured_limit == 0 {
            return Err(Error::config_validation("featured_limit must be at least 1"));
        }
        if self.submit_delay_ms > MAX_SUBMIT_DELAY_MS {
            return Err(Error::config_validation(format!(
                "submit_delay_ms must be at most {MAX_SUBMIT_DELAY_MS}"
            )));
        }
        if self.window_width < MIN_WINDOW_EDGE || self.window_height < MIN_WINDOW_EDGE {
            return Err(Error::config_validation(format!(
                "window dimensions must be at least {MIN_WINDOW_EDGE}"
            )));
        }
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Resolve a catalog asset reference against `assets_dir`.
    ///
    /// References are opaque; the only transformation is dropping a leading
    /// `/` so site-absolute paths join under the root.
    pub fn resolve_asset(&self, reference: &str) -> Option<PathBuf> {
        let root = self.assets_dir.as_ref()?;
        Some(root.join(reference.trim_start_matches('/')))
    }
}
