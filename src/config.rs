// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Persisted as JSON under the platform config directory. Loading never
//! fails outward: a missing or unreadable file falls back to defaults.

use crate::constants::{PHOTO_QUALITY, ResolutionTier};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Resolution tier preselected when the capture screen opens
    pub default_resolution: ResolutionTier,
    /// Compression factor for still photos, clamped to 0.0 - 1.0 at capture
    pub photo_quality: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_resolution: ResolutionTier::default(),
            photo_quality: PHOTO_QUALITY,
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists on this platform
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("camera-view").join("config.json"))
    }

    /// Load the configuration from disk, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, path = %path.display(), "Invalid config file, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the configuration to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(&path, raw)
    }
}
