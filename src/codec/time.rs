//! # Timestamp Field
//!
//! Converts 48-bit Unix millisecond timestamps to and from the 10-character
//! time field at the front of every ULID.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::Utc;

use super::base32;
use crate::{
    constants::{MAX_TIME, TIME_LEN},
    error::{Result, UlidError},
};

/// Returns the current wall-clock time in Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Checks that `ms` lies in `[0, 2^48 - 1]`.
pub fn validate_time(ms: i64) -> Result<u64> {
    u64::try_from(ms)
        .ok()
        .filter(|t| *t <= MAX_TIME)
        .ok_or(UlidError::TimeRange { timestamp: ms })
}

/// Encodes a millisecond timestamp as a 10-character Base32 field.
pub fn encode_time(ms: i64) -> Result<String> {
    let timestamp = validate_time(ms)?;
    base32::encode(u128::from(timestamp), TIME_LEN)
}

/// Decodes a 10-character time field back to milliseconds.
///
/// Values above `2^48 - 1` (first symbol greater than `7`) are returned as-is;
/// only length and alphabet membership are checked.
pub fn decode_time(s: &str) -> Result<u64> {
    let actual = s.chars().count();
    if actual != TIME_LEN {
        return Err(UlidError::InvalidLength {
            expected: TIME_LEN,
            actual,
        });
    }

    // Ten symbols carry at most 50 bits
    u64::try_from(base32::decode(s)?).map_err(|_| UlidError::Range { width: TIME_LEN })
}
