//! # Errors
//!
//! Error kinds reported by the ULID codec, generators and parser.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

/// Errors returned by the codec and generator operations.
///
/// Every error is local to the call that produced it; none of them leave a
/// sequencer in a modified state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UlidError {
    /// Timestamp outside `[0, 2^48 - 1]`.
    #[error("timestamp {timestamp} is outside the ULID range [0, 281474976710655]")]
    TimeRange { timestamp: i64 },

    /// Input does not have the required number of characters.
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character outside the Crockford Base32 alphabet.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Integer too large for the requested number of Base32 digits.
    #[error("value does not fit in {width} base32 digits")]
    Range { width: usize },
}

/// Result alias for ULID operations.
pub type Result<T> = std::result::Result<T, UlidError>;
