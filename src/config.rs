//! Plugin-wide settings
//!
//! Loaded from a TOML file next to the plugin. Every field has a default, so
//! an empty file (or no file) yields the stock behavior:
//!
//! ```toml
//! [layout]
//! rows = 6
//! columns = 5
//!
//! [mounts]
//! fast_mount_ids = [71, 318]
//!
//! [actions]
//! normal_roulette = 9
//! flying_roulette = 24
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_FAST_MOUNT_IDS;
use crate::error::{Result, RouletteError};
use crate::listing::PageLayout;

/// Mount data overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountSettings {
    /// Mounts tagged as fast for speed-tier narrowing
    pub fast_mount_ids: Vec<u32>,
}

impl Default for MountSettings {
    fn default() -> Self {
        Self {
            fast_mount_ids: DEFAULT_FAST_MOUNT_IDS.to_vec(),
        }
    }
}

/// General action ids that are intercepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionSettings {
    pub normal_roulette: u32,
    pub flying_roulette: u32,
}

impl Default for ActionSettings {
    fn default() -> Self {
        Self {
            normal_roulette: 9,
            flying_roulette: 24,
        }
    }
}

/// All plugin-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteSettings {
    pub layout: PageLayout,
    pub mounts: MountSettings,
    pub actions: ActionSettings,
}

impl RouletteSettings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RouletteError::Config(e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        log::info!("Loaded roulette settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| RouletteError::Config(e.to_string()))
    }
}
