//! # UI Utilities
//!
//! Formatting of command results for stdout. Text output is plain and
//! line-separated so it can be piped into other tools.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::{
    config::OutputFormat,
    ulid::{GenerationResult, ParseResult},
};

/// Resolves the output format: `--json` wins, otherwise the config default.
pub const fn resolve_format(json_flag: bool, configured: OutputFormat) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        configured
    }
}

/// One ULID per line.
pub fn render_generated(results: &[GenerationResult]) -> String {
    results
        .iter()
        .map(|result| result.ulid.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per ULID: `ULID  TIMESTAMP  DATE`.
pub fn render_parsed(results: &[ParseResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "{}  {}  {}",
                result.ulid,
                result.timestamp,
                result.date.to_rfc3339_opts(SecondsFormat::Millis, true)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}
