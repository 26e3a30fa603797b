//! # Generate Commands
//!
//! Batch generation for `ulid new`, `ulid seeded` and `ulid monotonic`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::{Config, OutputFormat},
    ui,
    ulid::{self, GenerationResult},
};

/// Which generation entry point a command uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Current time, fresh randomness
    Standard,
    /// Seed time (or now), fresh randomness
    Seeded,
    /// Process-wide monotonic sequencer
    Monotonic,
}

/// Arguments for the generate commands
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub mode: GenerationMode,
    /// Ignored in `Standard` mode
    pub seed_time: Option<i64>,
    pub count: usize,
    pub json: bool,
}

/// Generates `count` ULIDs, one facade call each.
///
/// Fails without producing anything if `count` is zero or above `max_count`.
pub fn generate_batch(
    mode: GenerationMode,
    seed_time: Option<i64>,
    count: usize,
    max_count: usize,
) -> Result<Vec<GenerationResult>> {
    if count == 0 {
        anyhow::bail!("Count must be at least 1");
    }
    if count > max_count {
        anyhow::bail!("Count {count} exceeds the maximum of {max_count} (see max_count in config)");
    }

    debug!(?mode, ?seed_time, count, "generating batch");

    (0..count)
        .map(|_| {
            let result = match mode {
                GenerationMode::Standard => ulid::generate_standard(),
                GenerationMode::Seeded => ulid::generate_seeded(seed_time),
                GenerationMode::Monotonic => ulid::generate_monotonic(seed_time),
            };
            result.context("Failed to generate ULID")
        })
        .collect()
}

/// Renders a batch in the resolved output format.
pub fn render(args: &GenerateArgs, config: &Config) -> Result<String> {
    let results = generate_batch(args.mode, args.seed_time, args.count, config.max_count())?;

    match ui::resolve_format(args.json, config.output()) {
        OutputFormat::Text => Ok(ui::render_generated(&results)),
        OutputFormat::Json => ui::render_json(&results),
    }
}

/// Executes a generate command.
pub fn execute(args: &GenerateArgs, config: &Config) -> Result<()> {
    println!("{}", render(args, config)?);
    Ok(())
}
