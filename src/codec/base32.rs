//! # Base32 Encoding
//!
//! Crockford's Base32 encoding for human-readable, URL-safe identifiers.
//! Uses alphabet: 0-9, A-Z excluding I, L, O, U (32 characters).
//!
//! Lookups are strict: only the upper-case symbols of the alphabet decode.
//! Case folding is applied by callers through [`super::normalize`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;
use tracing::warn;

use super::random;
use crate::{
    constants::{BITS_PER_SYMBOL, CROCKFORD_ALPHABET},
    error::{Result, UlidError},
};

/// Marks bytes in [`DECODE_TABLE`] that are not part of the alphabet.
const INVALID: u8 = u8::MAX;

/// Index of the highest symbol (`Z`).
const MAX_DIGIT: u8 = 31;

/// ASCII byte to symbol index.
const DECODE_TABLE: [u8; 128] = build_decode_table();

#[allow(clippy::cast_possible_truncation)] // alphabet has 32 entries
const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < CROCKFORD_ALPHABET.len() {
        table[CROCKFORD_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the alphabet index of `c`, or `None` if it is not a symbol.
pub fn symbol_index(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        idx => Some(idx),
    }
}

/// Returns the symbol for an alphabet index (0-31).
fn symbol(idx: u8) -> char {
    CROCKFORD_ALPHABET[usize::from(idx & MAX_DIGIT)] as char
}

/// Returns true if `value` can be written with `width` Base32 digits.
pub fn fits(value: u128, width: usize) -> bool {
    let bits = width.saturating_mul(BITS_PER_SYMBOL);
    bits >= 128 || value >> bits == 0
}

/// Encodes a value into a fixed-width Crockford Base32 string.
///
/// # Arguments
/// * `value` - The number to encode
/// * `width` - The desired output width (left-padded with '0')
///
/// # Errors
/// [`UlidError::Range`] if `value` needs more than `width` digits.
#[allow(clippy::cast_possible_truncation)] // remainder is always < 32
pub fn encode(mut value: u128, width: usize) -> Result<String> {
    if !fits(value, width) {
        return Err(UlidError::Range { width });
    }

    let mut result = Vec::with_capacity(width);

    for _ in 0..width {
        result.push(symbol((value % 32) as u8));
        value /= 32;
    }

    Ok(result.into_iter().rev().collect())
}

/// Decodes a Crockford Base32 string into an integer.
///
/// # Errors
/// * [`UlidError::InvalidCharacter`] for the first symbol outside the alphabet
/// * [`UlidError::Range`] if the value does not fit in 128 bits
pub fn decode(s: &str) -> Result<u128> {
    s.chars()
        .enumerate()
        .try_fold(0u128, |acc, (position, character)| {
            let idx = symbol_index(character).ok_or(UlidError::InvalidCharacter {
                character,
                position,
            })?;
            acc.checked_mul(32)
                .and_then(|acc| acc.checked_add(u128::from(idx)))
                .ok_or_else(|| UlidError::Range {
                    width: s.chars().count(),
                })
        })
}

/// Checks that every character of `s` belongs to the alphabet.
pub fn validate(s: &str) -> Result<()> {
    match s
        .chars()
        .enumerate()
        .find(|(_, c)| symbol_index(*c).is_none())
    {
        Some((position, character)) => Err(UlidError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Adds one to a big-endian Base32 counter.
///
/// Returns `Ok(None)` when every digit is `Z`, i.e. the counter would need an
/// extra digit to hold the result.
pub fn checked_increment(digits: &str) -> Result<Option<String>> {
    let mut indices = digits
        .chars()
        .enumerate()
        .map(|(position, character)| {
            symbol_index(character).ok_or(UlidError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    // Rightmost digit that can absorb the carry; everything after it wraps to 0
    let Some(pos) = indices.iter().rposition(|&idx| idx < MAX_DIGIT) else {
        return Ok(None);
    };
    indices[pos] += 1;
    indices[pos + 1..].fill(0);

    Ok(Some(indices.into_iter().map(symbol).collect()))
}

/// Adds one to a big-endian Base32 counter, reseeding on overflow.
///
/// Overflow recovery: when every digit is already `Z` there is no larger
/// value of the same width, so a fresh random string of that width is
/// returned instead of an error. Ordering against the previous value is lost
/// in that case.
pub fn increment(digits: &str) -> Result<String> {
    increment_with(&mut rand::rng(), digits)
}

/// Like [`increment`], drawing overflow randomness from `rng`.
pub fn increment_with<R: Rng>(rng: &mut R, digits: &str) -> Result<String> {
    if let Some(next) = checked_increment(digits)? {
        return Ok(next);
    }

    let width = digits.len();
    warn!(width, "base32 counter overflowed, substituting fresh randomness");
    Ok(random::encode_random_with(rng, width))
}
