//! cn-gen core — the recorded choice stream behind randomized test
//! generation.
//!
//! This crate owns the raw entropy, the timeline of recorded choices and
//! the checkpoint operations (save, restore, replace, serialize). Typed
//! sampling lives in `cn-gen-sampling` and draws through `ChoiceSource`.

pub mod config;
pub mod error;
pub mod rng;
pub mod stream;
pub mod timeline;

pub use config::GenConfig;
pub use error::GenError;
pub use rng::{ChoiceSource, EntropySource, SizeBudget};
pub use stream::Stream;
pub use timeline::{Checkpoint, ReplayTrace};
