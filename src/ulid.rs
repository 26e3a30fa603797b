//! # ULID
//!
//! The [`Ulid`] value type, the generation and parse result records, and the
//! four entry points callers use: standard, seeded and monotonic generation
//! plus parsing.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    codec::{self, base32, random, time, CaseMode},
    constants::{RANDOM_LEN, TIME_LEN, ULID_LEN},
    error::{Result, UlidError},
    monotonic,
};

/// A 26-character ULID: a 10-symbol time field followed by a 16-symbol
/// random field, all in upper-case Crockford Base32.
///
/// Ordering is the lexicographic order of the text, which for generated
/// values is creation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ulid {
    text: String,
    timestamp: u64,
}

impl Ulid {
    /// Parses ULID text, folding case according to `mode`.
    ///
    /// Only length and alphabet membership are checked.
    pub fn parse_with(input: &str, mode: CaseMode) -> Result<Self> {
        let normalized = codec::normalize(input, mode);

        let actual = normalized.chars().count();
        if actual != ULID_LEN {
            return Err(UlidError::InvalidLength {
                expected: ULID_LEN,
                actual,
            });
        }
        base32::validate(&normalized)?;

        // All symbols are ASCII past this point, so byte slicing is safe
        let timestamp = time::decode_time(&normalized[..TIME_LEN])?;

        Ok(Self {
            text: normalized.into_owned(),
            timestamp,
        })
    }

    /// Returns the full ULID text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the 10-character time field.
    pub fn time_part(&self) -> &str {
        &self.text[..TIME_LEN]
    }

    /// Returns the 16-character random field.
    pub fn random_part(&self) -> &str {
        &self.text[TIME_LEN..]
    }

    /// Returns the decoded time field in Unix milliseconds.
    pub const fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Returns the time field as a UTC date.
    ///
    /// `None` only if the timestamp is beyond what chrono can represent.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Ulid {
    type Err = UlidError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, CaseMode::default())
    }
}

impl AsRef<str> for Ulid {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for Ulid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Outcome of every generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    /// The generated identifier
    pub ulid: Ulid,
    /// Milliseconds encoded in `ulid.time_part()`
    pub timestamp: u64,
    /// Exactly `ulid.random_part()`
    pub randomness: String,
}

/// Read-only decomposition of a parsed ULID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub ulid: Ulid,
    pub timestamp_part: String,
    pub randomness_part: String,
    pub timestamp: u64,
    pub date: DateTime<Utc>,
}

/// Joins an already validated timestamp with a random field.
pub(crate) fn compose(timestamp: u64, randomness: String) -> Result<GenerationResult> {
    let time_part = base32::encode(u128::from(timestamp), TIME_LEN)?;
    let ulid = Ulid {
        text: format!("{time_part}{randomness}"),
        timestamp,
    };

    Ok(GenerationResult {
        ulid,
        timestamp,
        randomness,
    })
}

/// Generates a ULID for the current time with fresh randomness.
pub fn generate_standard() -> Result<GenerationResult> {
    generate_seeded(None)
}

/// Generates a ULID for `seed_time` (or now) with fresh randomness.
///
/// Calls sharing a seed time differ in their random field but have no
/// ordering relative to each other.
pub fn generate_seeded(seed_time: Option<i64>) -> Result<GenerationResult> {
    let timestamp = time::validate_time(seed_time.unwrap_or_else(time::now_millis))?;
    compose(timestamp, random::encode_random(RANDOM_LEN))
}

/// Generates a ULID from the process-wide monotonic sequencer.
///
/// All callers of this function share one monotonicity domain. Use a
/// dedicated [`monotonic::MonotonicGenerator`] for an isolated sequence.
pub fn generate_monotonic(seed_time: Option<i64>) -> Result<GenerationResult> {
    monotonic::default_generator().generate(seed_time)
}

/// Resets the process-wide monotonic sequencer.
pub fn reset_monotonic(seed_time: Option<i64>) {
    monotonic::default_generator().reset(seed_time);
}

/// Parses ULID text using the default [`CaseMode`].
pub fn parse(input: &str) -> Result<ParseResult> {
    parse_with(input, CaseMode::default())
}

/// Parses ULID text using an explicit [`CaseMode`].
pub fn parse_with(input: &str, mode: CaseMode) -> Result<ParseResult> {
    let ulid = Ulid::parse_with(input, mode)?;
    let date = ulid.datetime().ok_or(UlidError::Range { width: TIME_LEN })?;

    Ok(ParseResult {
        timestamp_part: ulid.time_part().to_string(),
        randomness_part: ulid.random_part().to_string(),
        timestamp: ulid.timestamp(),
        date,
        ulid,
    })
}
