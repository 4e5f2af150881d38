//! Generation error types.

use thiserror::Error;

/// Top-level error type for the choice stream and the samplers built on it.
///
/// Bounds are carried as `i128` so one variant covers every integer width
/// and signedness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// `min > max` was requested.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// The requested lower bound.
        min: i128,
        /// The requested upper bound.
        max: i128,
    },

    /// No value of the type is strictly less than the bound.
    #[error("empty range: no value is less than {bound}")]
    EmptyRange {
        /// The requested exclusive upper bound.
        bound: i128,
    },

    /// A multiplier of zero was requested.
    #[error("multiplier must be non-zero")]
    ZeroMultiple,

    /// The range holds no multiple of the requested multiplier.
    #[error("no multiple of {mult} in [{min}, {max}]")]
    NoMultipleInRange {
        /// The requested lower bound.
        min: i128,
        /// The requested upper bound.
        max: i128,
        /// The requested multiplier.
        mult: i128,
    },

    /// A budget split was requested into zero shares.
    #[error("cannot split a budget into zero shares")]
    NoShares,

    /// A raw element buffer does not divide into whole elements.
    #[error("invalid layout: buffer of {len} bytes with element size {element_size}")]
    InvalidLayout {
        /// Length of the buffer in bytes.
        len: usize,
        /// Size of a single element in bytes.
        element_size: usize,
    },

    /// The checkpoint's timeline position was discarded by a `replace`
    /// or a reseed.
    #[error("invalid checkpoint at position {position}: timeline has {len} choices")]
    InvalidCheckpoint {
        /// Position the checkpoint refers to.
        position: usize,
        /// Current timeline length.
        len: usize,
    },

    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),
}
