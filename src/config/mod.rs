// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config::{self, Config};
//!
//! // Load existing configuration (falls back to defaults)
//! let mut config = config::load().unwrap_or_default();
//!
//! // Bound the active collection
//! config.max_active = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::diagnostics::LogCapacity;
use crate::error::Result;
use crate::notifications::Timing;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastQueue";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display duration in milliseconds before a toast starts closing.
    #[serde(default)]
    pub display_duration_ms: Option<u64>,
    /// Exit-transition grace period in milliseconds.
    #[serde(default)]
    pub exit_grace_ms: Option<u64>,
    /// Maximum number of active toasts; `None` means unbounded.
    /// When bounded, the oldest toast is evicted on overflow.
    #[serde(default)]
    pub max_active: Option<usize>,
    /// Diagnostics event-log capacity.
    #[serde(default)]
    pub event_log_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_duration_ms: Some(DEFAULT_DISPLAY_DURATION_MS),
            exit_grace_ms: Some(DEFAULT_EXIT_GRACE_MS),
            max_active: None,
            event_log_capacity: Some(DEFAULT_EVENT_LOG_CAPACITY),
        }
    }
}

impl Config {
    /// Resolves the timing values consumed by the toast service,
    /// substituting defaults for unset fields.
    #[must_use]
    pub fn timing(&self) -> Timing {
        Timing {
            display: Duration::from_millis(
                self.display_duration_ms
                    .unwrap_or(DEFAULT_DISPLAY_DURATION_MS),
            ),
            grace: Duration::from_millis(self.exit_grace_ms.unwrap_or(DEFAULT_EXIT_GRACE_MS)),
            max_active: self.max_active,
        }
    }

    /// Resolves the diagnostics event-log capacity.
    #[must_use]
    pub fn log_capacity(&self) -> LogCapacity {
        LogCapacity::new(
            self.event_log_capacity
                .unwrap_or(DEFAULT_EVENT_LOG_CAPACITY),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
