//! # Setup Command
//!
//! One-time setup for ulidgen: creates the global config and reports
//! unrecognized fields in an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::{config::GlobalConfig, logging};

/// Executes the setup command.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created global config: {}", "✓".green(), path.display());
    } else {
        eprintln!(
            "{} Global config already exists: {}",
            "✓".green(),
            path.display()
        );
    }

    let validation = GlobalConfig::validate()?;
    for field in &validation.invalid {
        eprintln!("{} Unknown config field ignored: {field}", "!".yellow());
    }

    // Wrong value types and bad filters would otherwise only show up on the
    // next generate or parse call
    let config = GlobalConfig::load()?;
    if let Some(level) = &config.log_level {
        logging::level_filter(level)?;
    }

    Ok(())
}
