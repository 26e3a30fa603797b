//! # Parse Command
//!
//! Decomposes ULIDs into their time and random fields.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    codec::CaseMode,
    config::{Config, OutputFormat},
    ui,
    ulid::{self, ParseResult},
};

/// Arguments for the parse command
#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub ulids: Vec<String>,
    /// Force `CaseMode::Strict` regardless of config
    pub strict: bool,
    pub json: bool,
}

/// Parses every input, stopping at the first failure.
pub fn parse_all(inputs: &[String], mode: CaseMode) -> Result<Vec<ParseResult>> {
    inputs
        .iter()
        .map(|input| {
            ulid::parse_with(input, mode).with_context(|| format!("Cannot parse '{input}'"))
        })
        .collect()
}

/// Renders parse results in the resolved output format.
pub fn render(args: &ParseArgs, config: &Config) -> Result<String> {
    let mode = if args.strict {
        CaseMode::Strict
    } else {
        config.case_mode()
    };
    let results = parse_all(&args.ulids, mode)?;

    match ui::resolve_format(args.json, config.output()) {
        OutputFormat::Text => Ok(ui::render_parsed(&results)),
        OutputFormat::Json => ui::render_json(&results),
    }
}

/// Executes the parse command.
pub fn execute(args: &ParseArgs, config: &Config) -> Result<()> {
    println!("{}", render(args, config)?);
    Ok(())
}
