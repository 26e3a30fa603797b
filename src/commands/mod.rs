//! # Commands
//!
//! CLI command implementations for ulidgen.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod generate;
pub mod parse;
pub mod setup;

pub use self::{
    completions::execute as completions,
    generate::{execute as generate, generate_batch, GenerateArgs, GenerationMode},
    parse::{execute as parse, parse_all, ParseArgs},
    setup::execute as setup,
};
