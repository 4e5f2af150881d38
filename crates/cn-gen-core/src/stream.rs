//! The recorded choice stream.
//!
//! A `Stream` behaves like a single pseudo-random generator to callers that
//! never touch checkpoints. Every accepted raw draw is appended to a
//! `Timeline`; after a `restore` the same draws are handed back in order
//! before fresh entropy is used again.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use crate::config::GenConfig;
use crate::error::GenError;
use crate::rng::{ChoiceSource, EntropySource, SizeBudget};
use crate::timeline::{Checkpoint, ReplayTrace, Timeline};

/// A seedable, checkpointable stream of raw choices.
#[derive(Debug, Clone)]
pub struct Stream<E: EntropySource = StdRng> {
    entropy: E,
    config: GenConfig,
    timeline: Timeline,
    retries: u64,
    size: SizeBudget,
}

impl Stream<StdRng> {
    /// Creates a stream backed by `StdRng` and seeded from `config`.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Config` if `config` is invalid.
    pub fn new(config: GenConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self::from_parts(StdRng::seed_from_u64(config.seed), config))
    }

    /// Creates a stream with default configuration and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let config = GenConfig {
            seed,
            ..GenConfig::default()
        };
        Self::from_parts(StdRng::seed_from_u64(seed), config)
    }
}

impl<E: EntropySource> Stream<E> {
    /// Creates a stream over a caller-provided entropy source, reseeding it
    /// with `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Config` if `config` is invalid.
    pub fn with_entropy(mut entropy: E, config: GenConfig) -> Result<Self, GenError> {
        config.validate()?;
        entropy.reseed(config.seed);
        Ok(Self::from_parts(entropy, config))
    }

    /// `entropy` must already be seeded with `config.seed`.
    fn from_parts(entropy: E, config: GenConfig) -> Self {
        Self {
            entropy,
            config,
            timeline: Timeline::new(),
            retries: 0,
            size: SizeBudget::new(config.initial_size, config.max_size),
        }
    }

    /// Reinitializes the entropy source and clears the timeline, cursor and
    /// retry counter. Every earlier checkpoint becomes invalid.
    pub fn srand(&mut self, seed: u64) {
        debug!(seed, discarded = self.timeline.len(), "reseeding choice stream");
        self.entropy.reseed(seed);
        self.config.seed = seed;
        self.timeline.reset();
        self.retries = 0;
    }

    /// Returns the next raw choice, replaying history when available.
    pub fn rand(&mut self) -> u64 {
        ChoiceSource::rand(self)
    }

    /// Increments and returns the retry counter.
    pub fn rand_retry(&mut self) -> u64 {
        ChoiceSource::rand_retry(self)
    }

    /// Current value of the retry counter.
    #[must_use]
    pub fn retries(&self) -> u64 {
        self.retries
    }

    /// Returns `true` once the retry counter has reached `max_retries`.
    #[must_use]
    pub fn retries_exhausted(&self) -> bool {
        self.retries >= self.config.max_retries
    }

    /// Returns a checkpoint at the current cursor.
    #[must_use]
    pub fn save(&self) -> Checkpoint {
        self.timeline.checkpoint()
    }

    /// Rewinds (or fast-forwards) the cursor to `checkpoint`. Subsequent
    /// draws replay the recorded choices before going live again.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded
    /// by a `replace` or `srand`.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), GenError> {
        self.timeline.seek(checkpoint)?;
        debug!(
            position = checkpoint.position(),
            recorded = self.timeline.len(),
            "restored choice stream"
        );
        Ok(())
    }

    /// Rewinds to `checkpoint` and discards every later choice, so the next
    /// draw is fresh.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded
    /// by a `replace` or `srand`.
    pub fn replace(&mut self, checkpoint: Checkpoint) -> Result<(), GenError> {
        let discarded = self.timeline.truncate(checkpoint)?;
        debug!(
            position = checkpoint.position(),
            discarded, "replaced choice stream tail"
        );
        Ok(())
    }

    /// Serializes the choices before `checkpoint` as comma-separated
    /// lowercase hexadecimal.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded.
    pub fn to_str(&self, checkpoint: Checkpoint) -> Result<String, GenError> {
        Ok(self.trace(checkpoint)?.to_string())
    }

    /// Returns the choices before `checkpoint`.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded.
    pub fn trace(&self, checkpoint: Checkpoint) -> Result<ReplayTrace, GenError> {
        self.timeline.trace(checkpoint)
    }

    /// Sets the current size, clamped to the configured maximum.
    pub fn set_size(&mut self, current: u64) {
        self.size = SizeBudget::new(current, self.config.max_size);
    }

    /// Seed the stream was last initialized with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Number of recorded choices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    /// Returns `true` if no choice has been recorded since the last seed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    /// Position of the next choice to read or generate.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.timeline.cursor()
    }

    /// Returns `true` while recorded choices remain ahead of the cursor.
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.timeline.is_replaying()
    }
}

impl<E: EntropySource> ChoiceSource for Stream<E> {
    fn rand_accepted(&mut self, accept: &mut dyn FnMut(u64) -> bool) -> u64 {
        // A replayed word rejected under a different request is consumed.
        while let Some(word) = self.timeline.replay_next() {
            if accept(word) {
                return word;
            }
        }
        loop {
            let word = self.entropy.next_word();
            if accept(word) {
                self.timeline.record(word);
                trace!(position = self.timeline.len() - 1, word, "recorded choice");
                return word;
            }
        }
    }

    fn rand_retry(&mut self) -> u64 {
        self.retries += 1;
        if self.retries == self.config.max_retries {
            warn!(
                retries = self.retries,
                cursor = self.timeline.cursor(),
                "generation reached the retry limit"
            );
        }
        self.retries
    }

    fn size(&self) -> SizeBudget {
        self.size
    }
}
