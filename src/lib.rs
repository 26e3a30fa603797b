//! # ulidgen
//!
//! Generation and parsing of ULIDs (Universally Unique Lexicographically
//! Sortable Identifiers): 26 Crockford Base32 characters holding a 48-bit
//! millisecond timestamp followed by 80 bits of randomness.
//!
//! ## Features
//!
//! - **Standard and seeded generation**: fresh randomness on every call
//! - **Monotonic generation**: strictly increasing ULIDs within a millisecond,
//!   via an owned [`MonotonicGenerator`] or the shared process-wide sequencer
//! - **Parsing**: timestamp and date extraction with configurable case handling
//! - **Codec primitives**: fixed-width Base32 integers and counter increment
//!
//! ```
//! use ulidgen::{generate_seeded, parse, MonotonicGenerator};
//!
//! let id = generate_seeded(Some(1_640_995_200_000)).unwrap();
//! assert_eq!(id.ulid.time_part(), "01FR9EZ700");
//!
//! let mut generator = MonotonicGenerator::new();
//! let a = generator.generate(Some(1_640_995_200_000)).unwrap();
//! let b = generator.generate(Some(1_640_995_200_000)).unwrap();
//! assert!(a.ulid < b.ulid);
//!
//! let parsed = parse("01FR9EZ700RPB9GR0NVWG3MYFY").unwrap();
//! assert_eq!(parsed.timestamp, 1_640_995_200_000);
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod monotonic;
pub mod ui;
pub mod ulid;

pub use codec::CaseMode;
pub use config::{set_home_override, Config};
pub use error::UlidError;
pub use monotonic::{MonotonicGenerator, MonotonicState, SharedGenerator};
pub use ulid::{
    generate_monotonic, generate_seeded, generate_standard, parse, parse_with, reset_monotonic,
    GenerationResult, ParseResult, Ulid,
};
