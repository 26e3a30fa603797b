//! # Monotonic Generation
//!
//! A sequencer that keeps ULIDs minted within the same millisecond strictly
//! increasing by treating the random field as a Base32 counter.
//!
//! [`MonotonicGenerator`] is single-owner (`&mut self`). [`SharedGenerator`]
//! puts one behind a mutex so that the read-modify-write of its state is a
//! single critical section; the process-wide default used by
//! [`crate::generate_monotonic`] is a `SharedGenerator`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    codec::{base32, random, time},
    constants::RANDOM_LEN,
    error::Result,
    ulid::{compose, GenerationResult},
};

/// Process-wide sequencer shared by every caller of [`default_generator`].
static DEFAULT_GENERATOR: SharedGenerator = SharedGenerator::new();

/// Returns the process-wide sequencer.
///
/// Everything that generates through it shares a single monotonicity domain.
pub fn default_generator() -> &'static SharedGenerator {
    &DEFAULT_GENERATOR
}

/// The last emission of a sequencer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonotonicState {
    /// Timestamp of the last ULID, in milliseconds
    pub last_time: u64,
    /// Random field of the last ULID
    pub last_random: String,
}

/// Stateful monotonic ULID generator.
///
/// Starts fresh (no state). A call whose timestamp equals the previous one
/// increments the previous random field; any other timestamp draws fresh
/// randomness.
#[derive(Debug, Default)]
pub struct MonotonicGenerator {
    state: Option<MonotonicState>,
    default_seed: Option<i64>,
}

impl MonotonicGenerator {
    /// Creates a fresh generator that uses the wall clock by default.
    pub const fn new() -> Self {
        Self {
            state: None,
            default_seed: None,
        }
    }

    /// Creates a fresh generator whose parameterless calls use `seed_time`.
    pub const fn with_seed(seed_time: i64) -> Self {
        Self {
            state: None,
            default_seed: Some(seed_time),
        }
    }

    /// Generates the next ULID.
    ///
    /// The timestamp is `seed_time`, else the default seed set through
    /// [`Self::reset`], else the wall clock. An out-of-range timestamp fails
    /// with [`crate::UlidError::TimeRange`] and leaves the state untouched.
    pub fn generate(&mut self, seed_time: Option<i64>) -> Result<GenerationResult> {
        self.generate_with(&mut rand::rng(), seed_time)
    }

    /// Like [`Self::generate`], drawing randomness from `rng`.
    pub fn generate_with<R: Rng>(
        &mut self,
        rng: &mut R,
        seed_time: Option<i64>,
    ) -> Result<GenerationResult> {
        let requested = seed_time
            .or(self.default_seed)
            .unwrap_or_else(time::now_millis);
        let timestamp = time::validate_time(requested)?;

        let randomness = match &self.state {
            Some(state) if state.last_time == timestamp => {
                debug!(timestamp, "same millisecond, incrementing random field");
                base32::increment_with(rng, &state.last_random)?
            }
            previous => {
                if let Some(state) = previous.as_ref().filter(|s| timestamp < s.last_time) {
                    warn!(
                        timestamp,
                        last_time = state.last_time,
                        "timestamp moved backwards, ordering not preserved"
                    );
                }
                debug!(timestamp, "new millisecond, reseeding random field");
                random::encode_random_with(rng, RANDOM_LEN)
            }
        };

        let result = compose(timestamp, randomness)?;
        self.state = Some(MonotonicState {
            last_time: timestamp,
            last_random: result.randomness.clone(),
        });

        Ok(result)
    }

    /// Returns to the fresh state and replaces the default seed time.
    ///
    /// `None` restores the wall clock for parameterless calls. The seed is
    /// not validated here; an out-of-range value surfaces on the next
    /// parameterless [`Self::generate`].
    pub fn reset(&mut self, seed_time: Option<i64>) {
        debug!(?seed_time, "resetting monotonic generator");
        self.state = None;
        self.default_seed = seed_time;
    }

    /// Returns the last emission, or `None` when fresh.
    pub const fn state(&self) -> Option<&MonotonicState> {
        self.state.as_ref()
    }

    /// Returns the seed time used by parameterless calls, if any.
    pub const fn default_seed(&self) -> Option<i64> {
        self.default_seed
    }
}

/// A [`MonotonicGenerator`] guarded by a mutex, safe to share across threads.
#[derive(Debug, Default)]
pub struct SharedGenerator {
    inner: Mutex<MonotonicGenerator>,
}

impl SharedGenerator {
    /// Creates a shared generator in the fresh state.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(MonotonicGenerator::new()),
        }
    }

    /// Generates the next ULID while holding the lock.
    pub fn generate(&self, seed_time: Option<i64>) -> Result<GenerationResult> {
        self.lock().generate(seed_time)
    }

    /// Resets the inner generator while holding the lock.
    pub fn reset(&self, seed_time: Option<i64>) {
        self.lock().reset(seed_time);
    }

    /// Returns a snapshot of the last emission.
    pub fn state(&self) -> Option<MonotonicState> {
        self.lock().state().cloned()
    }

    // State is written in one assignment, so a poisoned lock still holds a
    // consistent generator.
    fn lock(&self) -> MutexGuard<'_, MonotonicGenerator> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{constants::MAX_TIME, error::UlidError};

    const SEED: i64 = 1_640_995_200_000;

    #[test]
    fn test_same_timestamp_is_strictly_increasing() {
        let mut generator = MonotonicGenerator::new();
        let results: Vec<_> = (0..5)
            .map(|_| generator.generate(Some(SEED)).unwrap())
            .collect();

        for pair in results.windows(2) {
            assert!(pair[0].ulid < pair[1].ulid);
            assert!(pair[0].ulid.as_str() < pair[1].ulid.as_str());
            assert_eq!(pair[0].ulid.time_part(), pair[1].ulid.time_part());
        }
    }

    #[test]
    fn test_same_timestamp_increments_by_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut generator = MonotonicGenerator::new();
        let first = generator.generate_with(&mut rng, Some(SEED)).unwrap();
        let second = generator.generate_with(&mut rng, Some(SEED)).unwrap();

        let expected = base32::checked_increment(&first.randomness).unwrap();
        assert_eq!(Some(second.randomness), expected);
    }

    #[test]
    fn test_new_timestamp_reseeds() {
        let mut generator = MonotonicGenerator::new();
        generator.generate(Some(SEED)).unwrap();
        generator.generate(Some(SEED)).unwrap();

        let later = generator.generate(Some(SEED + 1000)).unwrap();
        assert_eq!(later.timestamp, (SEED + 1000) as u64);
        assert_eq!(generator.state().unwrap().last_time, (SEED + 1000) as u64);
    }

    #[test]
    fn test_earlier_timestamp_reseeds() {
        let mut generator = MonotonicGenerator::new();
        generator.generate(Some(SEED)).unwrap();
        let earlier = generator.generate(Some(SEED - 1)).unwrap();
        assert_eq!(earlier.timestamp, (SEED - 1) as u64);
    }

    #[test]
    fn test_timestamp_zero_from_fresh_state() {
        let mut generator = MonotonicGenerator::new();
        let first = generator.generate(Some(0)).unwrap();
        let second = generator.generate(Some(0)).unwrap();
        assert_eq!(first.ulid.time_part(), "0000000000");
        assert!(first.ulid < second.ulid);
    }

    #[test]
    fn test_rejected_seed_keeps_state() {
        let mut generator = MonotonicGenerator::new();
        generator.generate(Some(SEED)).unwrap();
        let before = generator.state().cloned();

        assert_eq!(
            generator.generate(Some(-1)).unwrap_err(),
            UlidError::TimeRange { timestamp: -1 }
        );
        assert!(generator.generate(Some(MAX_TIME as i64 + 1)).is_err());
        assert_eq!(generator.state().cloned(), before);
    }

    #[test]
    fn test_overflow_recovers_with_fresh_randomness() {
        let mut generator = MonotonicGenerator::new();
        generator.state = Some(MonotonicState {
            last_time: SEED as u64,
            last_random: "Z".repeat(16),
        });

        let result = generator.generate(Some(SEED)).unwrap();
        assert_eq!(result.timestamp, SEED as u64);
        assert_eq!(result.randomness.len(), 16);
        assert_ne!(result.randomness, "Z".repeat(16));
    }

    #[test]
    fn test_reset_clears_state_and_sets_default_seed() {
        let mut generator = MonotonicGenerator::new();
        generator.generate(Some(SEED)).unwrap();

        generator.reset(Some(SEED + 5));
        assert!(generator.state().is_none());
        assert_eq!(generator.default_seed(), Some(SEED + 5));

        let a = generator.generate(None).unwrap();
        let b = generator.generate(None).unwrap();
        assert_eq!(a.timestamp, (SEED + 5) as u64);
        assert!(a.ulid < b.ulid);

        generator.reset(None);
        assert_eq!(generator.default_seed(), None);
    }

    #[test]
    fn test_reset_with_invalid_seed_fails_later() {
        let mut generator = MonotonicGenerator::with_seed(-5);
        assert!(generator.generate(None).is_err());
        assert!(generator.generate(Some(SEED)).is_ok());
    }

    #[test]
    fn test_explicit_seed_overrides_default() {
        let mut generator = MonotonicGenerator::with_seed(SEED);
        let result = generator.generate(Some(7)).unwrap();
        assert_eq!(result.timestamp, 7);
    }

    #[test]
    fn test_shared_generator_across_threads() {
        let shared = Arc::new(SharedGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    (0..50)
                        .map(|_| shared.generate(Some(SEED)).unwrap().ulid)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all = Vec::new();
        for handle in handles {
            let ids = handle.join().unwrap();
            // Each thread observes its own results in increasing order
            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
            all.extend(ids);
        }

        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), 400);
        assert_eq!(shared.state().unwrap().last_time, SEED as u64);
    }
}
