//! Shared test doubles and utilities for the cn-gen crates.

mod logging;
mod rng;

pub use logging::init_tracing;
pub use rng::{CountingEntropy, FixedEntropy, ScriptedSource};
