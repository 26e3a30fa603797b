//! # Randomness Field
//!
//! Draws the 80-bit random field of a ULID.
//!
//! Each symbol is an independent uniform draw over the 32-symbol alphabet.
//! The default source is `rand::rng()`, a ChaCha-based CSPRNG seeded from the
//! operating system; there is no non-secure fallback.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;

use crate::constants::CROCKFORD_ALPHABET;

/// Returns `width` random Base32 symbols from the thread-local CSPRNG.
pub fn encode_random(width: usize) -> String {
    encode_random_with(&mut rand::rng(), width)
}

/// Returns `width` random Base32 symbols drawn from `rng`.
pub fn encode_random_with<R: Rng>(rng: &mut R, width: usize) -> String {
    (0..width)
        .map(|_| CROCKFORD_ALPHABET[rng.random_range(0..CROCKFORD_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::base32;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_length() {
        assert_eq!(encode_random(0).len(), 0);
        assert_eq!(encode_random(1).len(), 1);
        assert_eq!(encode_random(16).len(), 16);
    }

    #[test]
    fn test_random_uses_alphabet() {
        for _ in 0..100 {
            assert!(base32::validate(&encode_random(16)).is_ok());
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = encode_random_with(&mut StdRng::seed_from_u64(42), 16);
        let b = encode_random_with(&mut StdRng::seed_from_u64(42), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_draws_cover_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let sample = encode_random_with(&mut rng, 4096);
        for symbol in CROCKFORD_ALPHABET {
            assert!(sample.contains(*symbol as char));
        }
    }
}
