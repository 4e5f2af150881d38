//! Range-constrained and multiple-of samplers.

use cn_gen_core::error::GenError;
use cn_gen_core::rng::ChoiceSource;

use crate::int::GenInt;
use crate::uniform::draw_span;

/// Uniform over `[min, max]` inclusive.
///
/// # Errors
///
/// Returns `GenError::InvalidRange` if `min > max`.
pub fn range<T: GenInt, S: ChoiceSource + ?Sized>(
    src: &mut S,
    min: T,
    max: T,
) -> Result<T, GenError> {
    if min > max {
        return Err(GenError::InvalidRange {
            min: min.to_i128(),
            max: max.to_i128(),
        });
    }
    Ok(between(src, min.to_i128(), max.to_i128()))
}

/// Uniform over values strictly less than `bound`.
///
/// # Errors
///
/// Returns `GenError::EmptyRange` if `bound` is the type's minimum.
pub fn lt<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, bound: T) -> Result<T, GenError> {
    if bound == T::MIN {
        return Err(GenError::EmptyRange {
            bound: bound.to_i128(),
        });
    }
    Ok(between(src, T::MIN.to_i128(), bound.to_i128() - 1))
}

/// Uniform over values greater than or equal to `bound`.
pub fn ge<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, bound: T) -> T {
    between(src, bound.to_i128(), T::MAX.to_i128())
}

/// Uniform over the multiples of `mult` in `[min, max]`. A negative `mult`
/// is treated as its magnitude.
///
/// # Errors
///
/// Returns `GenError::ZeroMultiple` if `mult` is zero,
/// `GenError::InvalidRange` if `min > max`, and
/// `GenError::NoMultipleInRange` if no multiple lies in the range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mult_range<T: GenInt, S: ChoiceSource + ?Sized>(
    src: &mut S,
    min: T,
    max: T,
    mult: T,
) -> Result<T, GenError> {
    let step = mult.to_i128().abs();
    if step == 0 {
        return Err(GenError::ZeroMultiple);
    }
    let (lo, hi) = (min.to_i128(), max.to_i128());
    if lo > hi {
        return Err(GenError::InvalidRange { min: lo, max: hi });
    }

    let first = -((-lo).div_euclid(step)) * step;
    let last = hi.div_euclid(step) * step;
    if first > last {
        return Err(GenError::NoMultipleInRange {
            min: lo,
            max: hi,
            mult: mult.to_i128(),
        });
    }

    // (last - first) / step < 2^64 since both ends lie within one 64-bit type.
    let count = ((last - first) / step) as u64;
    let k = i128::from(draw_span(src, count));
    Ok(T::from_i128(first + k * step))
}

/// Uniform over the multiples of `mult` across the whole type.
///
/// # Errors
///
/// Returns `GenError::ZeroMultiple` if `mult` is zero.
pub fn mult<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, mult: T) -> Result<T, GenError> {
    mult_range(src, T::MIN, T::MAX, mult)
}

/// Uniform over `[lo, hi]`, which the caller guarantees is non-empty and
/// within `T`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn between<T: GenInt, S: ChoiceSource + ?Sized>(src: &mut S, lo: i128, hi: i128) -> T {
    // The distance between two values of a 64-bit type fits in u64.
    let span = (hi - lo) as u64;
    T::from_i128(lo + i128::from(draw_span(src, span)))
}
