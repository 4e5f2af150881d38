//! Shared helpers for the sampling integration tests.

use cn_gen_core::{GenConfig, Stream};

/// Build a `StdRng`-backed stream for `seed` with tracing installed.
pub fn seeded_stream(seed: u64) -> Stream {
    cn_gen_test_support::init_tracing();
    Stream::new(GenConfig {
        seed,
        ..GenConfig::default()
    })
    .expect("default config is valid")
}
