//! Uniform sampling without modulo bias.
//!
//! Every sampler reduces to `draw_span`: mask a raw word down to the
//! smallest power-of-two range covering the span, and reject words that
//! land above it. Only the accepted word is recorded, so replaying a
//! checkpoint reproduces the value with a single draw.

use cn_gen_core::rng::ChoiceSource;

use crate::int::GenInt;

/// Returns a value uniformly distributed over `[0, span]`.
///
/// Always consumes at least one choice, even for `span == 0`.
pub fn draw_span<S: ChoiceSource + ?Sized>(src: &mut S, span: u64) -> u64 {
    let mask = u64::MAX.checked_shr(span.leading_zeros()).unwrap_or(0);
    src.rand_accepted(&mut |word| word & mask <= span) & mask
}

/// Uniform over `[0, bound]` for unsigned types, or over the centered
/// range `[-ceil(bound / 2), floor(bound / 2)]` for signed types.
pub fn uniform<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, bound: T::Bound) -> T {
    uniform_span(src, T::widen_bound(bound))
}

/// Like `uniform`, but scales `bound` by the source's size budget
/// (`bound * current / max`) before drawing.
pub fn uniform_sized<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, bound: T::Bound) -> T {
    let span = src.size().scale(T::widen_bound(bound));
    uniform_span(src, span)
}

fn uniform_span<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, span: u64) -> T {
    let drawn = i128::from(draw_span(src, span));
    if T::SIGNED {
        T::from_i128(drawn - i128::from(span - span / 2))
    } else {
        T::from_i128(drawn)
    }
}
