//! # Codec
//!
//! Text codecs underlying ULID generation and parsing: the Crockford Base32
//! primitives, the timestamp field and the randomness field.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base32;
pub mod random;
pub mod time;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub use self::{
    base32::{checked_increment, decode, encode, increment},
    random::encode_random,
    time::{decode_time, encode_time, now_millis, validate_time},
};

/// How letter case is treated when decoding ULID text.
///
/// Neither mode remaps look-alike characters such as `O` or `L`; those are
/// rejected as invalid in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Only the upper-case alphabet is accepted.
    Strict,
    /// ASCII letters are upper-cased before lookup.
    #[default]
    Insensitive,
}

/// Prepares text for the strict Base32 decoder according to `mode`.
pub fn normalize(input: &str, mode: CaseMode) -> Cow<'_, str> {
    match mode {
        CaseMode::Insensitive if input.bytes().any(|b| b.is_ascii_lowercase()) => {
            Cow::Owned(input.to_ascii_uppercase())
        }
        _ => Cow::Borrowed(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_insensitive() {
        assert_eq!(normalize("01fr9ez700", CaseMode::Insensitive), "01FR9EZ700");
        assert!(matches!(
            normalize("01FR9EZ700", CaseMode::Insensitive),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_normalize_strict_keeps_input() {
        assert_eq!(normalize("01fr9ez700", CaseMode::Strict), "01fr9ez700");
    }

    #[test]
    fn test_normalize_does_not_remap_lookalikes() {
        assert_eq!(normalize("o1l", CaseMode::Insensitive), "O1L");
    }

    #[test]
    fn test_case_mode_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: CaseMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"strict\"").unwrap();
        assert_eq!(parsed.mode, CaseMode::Strict);
    }
}
