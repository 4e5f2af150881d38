//! Test sources — deterministic `ChoiceSource` and `EntropySource`
//! implementations for tests.

use cn_gen_core::rng::{ChoiceSource, EntropySource, SizeBudget};

/// A choice source that hands out words from a predetermined sequence.
/// Panics if the sequence is exhausted. Used in tests that need to pin the
/// exact raw words a sampler sees, including ones it must reject.
#[derive(Debug)]
pub struct ScriptedSource {
    words: Vec<u64>,
    index: usize,
    accepted: Vec<u64>,
    retries: u64,
    size: SizeBudget,
}

impl ScriptedSource {
    /// Create a new `ScriptedSource` with the given words and a full size
    /// budget.
    #[must_use]
    pub fn new(words: Vec<u64>) -> Self {
        Self {
            words,
            index: 0,
            accepted: Vec::new(),
            retries: 0,
            size: SizeBudget::new(100, 100),
        }
    }

    /// Replaces the size budget reported to size-biased samplers.
    #[must_use]
    pub fn with_size(mut self, current: u64, max: u64) -> Self {
        self.size = SizeBudget::new(current, max);
        self
    }

    /// Number of scripted words handed out so far, accepted or not.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// The words that were accepted, in order.
    #[must_use]
    pub fn accepted(&self) -> &[u64] {
        &self.accepted
    }
}

impl ChoiceSource for ScriptedSource {
    fn rand_accepted(&mut self, accept: &mut dyn FnMut(u64) -> bool) -> u64 {
        loop {
            let word = self.words[self.index];
            self.index += 1;
            if accept(word) {
                self.accepted.push(word);
                return word;
            }
        }
    }

    fn rand_retry(&mut self) -> u64 {
        self.retries += 1;
        self.retries
    }

    fn size(&self) -> SizeBudget {
        self.size
    }
}

/// An entropy source that always produces the same word, whatever the seed.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn reseed(&mut self, _seed: u64) {}

    fn next_word(&mut self) -> u64 {
        self.0
    }
}

/// An entropy source that counts up from its seed. Makes every fresh draw
/// distinguishable from a replayed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingEntropy {
    next: u64,
}

impl EntropySource for CountingEntropy {
    fn reseed(&mut self, seed: u64) {
        self.next = seed;
    }

    fn next_word(&mut self) -> u64 {
        let word = self.next;
        self.next = self.next.wrapping_add(1);
        word
    }
}
