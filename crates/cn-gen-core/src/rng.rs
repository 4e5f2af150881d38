//! Random source abstractions.
//!
//! Entropy comes from an `EntropySource`; everything that maps entropy into
//! typed values draws through a `ChoiceSource` so the draws can be recorded
//! and replayed.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Abstraction over the raw pseudo-random generator.
pub trait EntropySource {
    /// Deterministically reinitializes the generator state.
    fn reseed(&mut self, seed: u64);

    /// Produces the next raw 64-bit word.
    fn next_word(&mut self) -> u64;
}

impl EntropySource for StdRng {
    fn reseed(&mut self, seed: u64) {
        *self = StdRng::seed_from_u64(seed);
    }

    fn next_word(&mut self) -> u64 {
        self.next_u64()
    }
}

/// The "current size" seen by size-biased samplers.
///
/// Recursive generators lower `current` as they descend so that generated
/// structures stay finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBudget {
    /// Size available at the current point of generation.
    pub current: u64,
    /// Size at the top of generation.
    pub max: u64,
}

impl SizeBudget {
    /// Creates a budget, clamping `current` to `max`.
    #[must_use]
    pub fn new(current: u64, max: u64) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    /// Scales `bound` by `current / max`.
    ///
    /// The result never exceeds `bound`. A zero `max` scales everything to
    /// zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn scale(&self, bound: u64) -> u64 {
        if self.max == 0 {
            return 0;
        }
        let current = u128::from(self.current.min(self.max));
        // current <= max, so the quotient is <= bound and fits in u64.
        (u128::from(bound) * current / u128::from(self.max)) as u64
    }
}

/// A stream of recorded choices that samplers draw from.
pub trait ChoiceSource {
    /// Returns the next raw choice.
    fn rand(&mut self) -> u64 {
        self.rand_accepted(&mut |_| true)
    }

    /// Draws raw words until `accept` returns `true` and returns that word.
    ///
    /// Only the accepted word is recorded as a choice. Rejected words are
    /// not part of the replayable history.
    fn rand_accepted(&mut self, accept: &mut dyn FnMut(u64) -> bool) -> u64;

    /// Increments and returns the retry counter.
    fn rand_retry(&mut self) -> u64;

    /// Returns the size budget used by size-biased samplers.
    fn size(&self) -> SizeBudget;
}
