//! # Logging
//!
//! Tracing subscriber setup for the `ulid` binary. Diagnostics go to stderr
//! so stdout stays scriptable.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::constants::{LOG_ENV_VAR, LOG_JSON_ENV_VAR};

/// Builds the filter: `ULIDGEN_LOG` if set, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} filter: {directives}")),
        _ => level_filter(default_level),
    }
}

/// Parses a `log_level` value from the config file.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log_level in config: {level}"))
}

/// Installs the global subscriber.
///
/// Human-readable by default, JSON lines when `ULIDGEN_LOG_JSON=1`.
pub fn init(default_level: &str) -> Result<()> {
    let filter = env_filter(default_level)?;
    let json = std::env::var(LOG_JSON_ENV_VAR).is_ok_and(|value| value == "1");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_level() {
        assert!(EnvFilter::try_new("ulidgen=notalevel").is_err());
    }

    #[test]
    fn test_level_filter_names_bad_value() {
        let err = level_filter("ulidgen=bogus").unwrap_err();
        assert!(err.to_string().contains("ulidgen=bogus"));
    }

    #[test]
    fn test_accepts_config_levels() {
        for level in ["warn", "debug", "ulidgen=trace"] {
            assert!(EnvFilter::try_new(level).is_ok(), "{level} should parse");
        }
    }
}
