//! Structural randomization: shuffling and budget splitting.

use std::iter;

use cn_gen_core::error::GenError;
use cn_gen_core::rng::ChoiceSource;

use crate::uniform::uniform;

/// Permutes `items` in place, uniformly over all permutations
/// (Fisher–Yates, from the last position down).
pub fn shuffle<T, S: ChoiceSource + ?Sized>(src: &mut S, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform::<usize, _>(src, i);
        items.swap(i, j);
    }
}

/// Permutes the `element_size`-byte elements of `buf` in place.
///
/// Draws exactly as `shuffle` does for `buf.len() / element_size` items.
///
/// # Errors
///
/// Returns `GenError::InvalidLayout` if `element_size` is zero or does not
/// divide `buf.len()`.
pub fn shuffle_bytes<S: ChoiceSource + ?Sized>(
    src: &mut S,
    buf: &mut [u8],
    element_size: usize,
) -> Result<(), GenError> {
    if element_size == 0 || !buf.len().is_multiple_of(element_size) {
        return Err(GenError::InvalidLayout {
            len: buf.len(),
            element_size,
        });
    }

    let count = buf.len() / element_size;
    for i in (1..count).rev() {
        let j = uniform::<usize, _>(src, i);
        if j != i {
            let (head, tail) = buf.split_at_mut(i * element_size);
            head[j * element_size..(j + 1) * element_size]
                .swap_with_slice(&mut tail[..element_size]);
        }
    }
    Ok(())
}

/// Splits the budget `n` into `shares.len()` non-negative parts summing to
/// `n`.
///
/// Draws `shares.len() - 1` cut points uniformly from `[0, n]` and writes
/// the gaps between consecutive sorted cuts. The cuts are exchangeable, so
/// no share position is favored.
///
/// # Errors
///
/// Returns `GenError::NoShares` if `shares` is empty.
pub fn split<S: ChoiceSource + ?Sized>(
    src: &mut S,
    n: usize,
    shares: &mut [usize],
) -> Result<(), GenError> {
    if shares.is_empty() {
        return Err(GenError::NoShares);
    }

    let mut cuts: Vec<usize> = (1..shares.len())
        .map(|_| uniform::<usize, _>(src, n))
        .collect();
    cuts.sort_unstable();

    let mut prev = 0;
    for (share, cut) in shares.iter_mut().zip(cuts.into_iter().chain(iter::once(n))) {
        *share = cut - prev;
        prev = cut;
    }
    Ok(())
}
