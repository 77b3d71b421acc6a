//! Add-on settings for the host integration.
//!
//! Wraps the rule configuration from `folly_core::config::FollyConfig` with
//! the host-side concerns: where the content pack and translations live and
//! how logging is set up.

use std::path::{Path, PathBuf};

use folly_core::FollyConfig;
use serde::{Deserialize, Serialize};

/// Settings loaded once at host startup from `easter-folly.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonSettings {
    /// Rule configuration.
    #[serde(default)]
    pub rules: FollyConfig,
    /// Content pack handed to the asset catalog, relative to the add-on dir.
    #[serde(default = "default_asset_pack")]
    pub asset_pack: PathBuf,
    /// Translation file, relative to the add-on dir.
    #[serde(default = "default_translations")]
    pub translations: PathBuf,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json_logs: bool,
}

impl AddonSettings {
    /// Load settings from a TOML string.
    ///
    /// # Errors
    /// Returns `FollyError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> folly_core::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| folly_core::FollyError::Config(e.to_string()))
    }

    /// Load settings from a TOML file, falling back to defaults if the file
    /// does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> folly_core::error::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Content pack path resolved against the add-on directory.
    #[must_use]
    pub fn asset_pack_in(&self, addon_dir: &Path) -> PathBuf {
        addon_dir.join(&self.asset_pack)
    }

    /// Translation file path resolved against the add-on directory.
    #[must_use]
    pub fn translations_in(&self, addon_dir: &Path) -> PathBuf {
        addon_dir.join(&self.translations)
    }
}

impl Default for AddonSettings {
    fn default() -> Self {
        Self {
            rules: FollyConfig::default(),
            asset_pack: default_asset_pack(),
            translations: default_translations(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_asset_pack() -> PathBuf {
    Path::new("assets").join("EasterPack")
}
fn default_translations() -> PathBuf {
    Path::new("i18n").join("default.json")
}
fn default_log_level() -> String {
    "info".to_string()
}
