//! # Constants
//!
//! Centralized constants for magic values used throughout ulidgen.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// ULID Format
// =============================================================================

/// Crockford's Base32 alphabet (excludes I, L, O, U for readability).
pub const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Number of bits carried by one Base32 symbol.
pub const BITS_PER_SYMBOL: usize = 5;

/// Total length of an encoded ULID.
pub const ULID_LEN: usize = 26;

/// Length of the encoded timestamp field.
pub const TIME_LEN: usize = 10;

/// Length of the encoded randomness field (80 bits).
pub const RANDOM_LEN: usize = 16;

/// Largest timestamp a ULID can carry: 2^48 - 1 milliseconds.
pub const MAX_TIME: u64 = (1 << 48) - 1;

// =============================================================================
// Batch Generation
// =============================================================================

/// Default upper bound for the `--count` flag.
pub const DEFAULT_MAX_COUNT: usize = 100;

/// Hard ceiling for `max_count`, regardless of configuration.
pub const MAX_COUNT_LIMIT: usize = 10_000;

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "ulidgen";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "ULIDGEN_LOG";

/// Environment variable that switches log output to JSON lines when set to `1`.
pub const LOG_JSON_ENV_VAR: &str = "ULIDGEN_LOG_JSON";

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
