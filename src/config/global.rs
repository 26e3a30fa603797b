//! # Global Configuration
//!
//! Handles the global user configuration stored at `~/.config/ulidgen/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    codec::CaseMode,
    constants::{DEFAULT_MAX_COUNT, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME},
};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["case_mode", "output", "max_count", "log_level"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that are not recognized and are ignored on load
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if the file contains anything worth reporting.
    pub fn has_issues(&self) -> bool {
        !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per result
    #[default]
    Text,
    /// A pretty-printed JSON array
    Json,
}

/// Global configuration stored at ~/.config/ulidgen/config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Letter case handling when parsing
    #[serde(default)]
    pub case_mode: CaseMode,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Largest batch a single command may produce
    #[serde(default = "default_max_count")]
    pub max_count: usize,

    /// Tracing filter directive (e.g., "debug", "ulidgen=trace")
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            case_mode: CaseMode::default(),
            output: OutputFormat::default(),
            max_count: DEFAULT_MAX_COUNT,
            log_level: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_max_count() -> usize {
    DEFAULT_MAX_COUNT
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/ulidgen/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/ulidgen)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Creates the global config with default values and comments.
    /// Used by `ulid setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Saves config with detailed comments for all options.
    ///
    /// `log_level` is shown as a commented example when not set.
    fn save_with_comments(path: &PathBuf, config: &Self) -> Result<()> {
        let case_mode = match config.case_mode {
            CaseMode::Strict => "strict",
            CaseMode::Insensitive => "insensitive",
        };
        let output = match config.output {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        let log_level_line = config.log_level.as_ref().map_or_else(
            || "# log_level = \"debug\"".to_string(),
            |level| format!("log_level = \"{level}\""),
        );

        let content = format!(
            r#"# ulidgen Global Configuration
# Location: ~/.config/ulidgen/config

# How letter case is treated when parsing ULIDs.
#   "insensitive"  Lower-case input is upper-cased before decoding (default)
#   "strict"       Only the upper-case alphabet is accepted
# Look-alike characters (I, L, O, U) are rejected in both modes.
case_mode = "{case_mode}"

# Default output format: "text" (one result per line) or "json".
# The --json flag always forces JSON.
output = "{output}"

# Largest number of ULIDs a single command may generate (--count).
max_count = {max_count}

# Tracing filter for diagnostics written to stderr.
# The ULIDGEN_LOG environment variable takes precedence.
{log_level_line}
"#,
            max_count = config.max_count,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Validates the global config file and returns any issues found.
    ///
    /// Unknown fields are ignored by [`Self::load`]; this reports them.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            return Ok(ConfigValidation::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))?;

        let invalid = table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();

        Ok(ConfigValidation { invalid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.case_mode, CaseMode::Insensitive);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: GlobalConfig = toml::from_str("output = \"json\"").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.case_mode, CaseMode::Insensitive);
        assert_eq!(config.max_count, DEFAULT_MAX_COUNT);
    }

    #[test]
    fn test_full_file() {
        let config: GlobalConfig = toml::from_str(
            "case_mode = \"strict\"\noutput = \"text\"\nmax_count = 5\nlog_level = \"debug\"",
        )
        .unwrap();
        assert_eq!(config.case_mode, CaseMode::Strict);
        assert_eq!(config.max_count, 5);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_unknown_case_mode() {
        assert!(toml::from_str::<GlobalConfig>("case_mode = \"crockford\"").is_err());
    }
}
