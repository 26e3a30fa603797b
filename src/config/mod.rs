//! # Configuration
//!
//! Resolved settings: the global config file plus hard limits.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::Result;

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig, OutputFormat};
use crate::{
    codec::CaseMode,
    constants::{DEFAULT_LOG_LEVEL, MAX_COUNT_LIMIT},
};

/// Effective configuration for a command run
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
}

impl Config {
    /// Loads configuration from the global config file
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
        })
    }

    /// Returns the case handling used when parsing
    pub const fn case_mode(&self) -> CaseMode {
        self.global.case_mode
    }

    /// Returns the default output format
    pub const fn output(&self) -> OutputFormat {
        self.global.output
    }

    /// Returns the batch cap, clamped to `1..=MAX_COUNT_LIMIT`
    pub fn max_count(&self) -> usize {
        self.global.max_count.clamp(1, MAX_COUNT_LIMIT)
    }

    /// Returns the tracing filter used when `ULIDGEN_LOG` is unset
    pub fn log_level(&self) -> &str {
        self.global
            .log_level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
