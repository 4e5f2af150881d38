//! cn-gen sampling — typed values drawn from a recorded choice stream.
//!
//! Bounded integer samplers (uniform, size-biased, ranged, one-sided,
//! multiple-of) over every fixed-width integer type, plus in-place
//! shuffling and fair budget splitting. Everything draws through
//! `ChoiceSource`, so every value replays when the stream is restored.

pub mod bounded;
pub mod int;
pub mod sample;
pub mod structure;
pub mod uniform;

pub use bounded::{ge, lt, mult, mult_range, range};
pub use int::GenInt;
pub use sample::Sample;
pub use structure::{shuffle, shuffle_bytes, split};
pub use uniform::{draw_span, uniform, uniform_sized};
