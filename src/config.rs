// src/config.rs
//! Local configuration from `lintpost.toml`.
//!
//! A missing file means defaults. A malformed file is logged and ignored;
//! report generation proceeds with defaults.

use crate::reporting::DEFAULT_FIX_COMMAND;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "lintpost.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
}

/// The `[report]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Append the FAQ section to composed comments.
    pub faq: bool,
    /// Command suggested in the auto-fix footer.
    pub fix_command: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            faq: true,
            fix_command: DEFAULT_FIX_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Loads `lintpost.toml` from `root`, falling back to defaults.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }
}
