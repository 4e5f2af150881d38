//! Method-call access to the samplers for any `ChoiceSource`.

use cn_gen_core::error::GenError;
use cn_gen_core::rng::ChoiceSource;

use crate::int::GenInt;
use crate::{bounded, structure, uniform};

/// Extension trait exposing every sampler as a method.
///
/// Implemented for all choice sources, including `dyn ChoiceSource`.
pub trait Sample: ChoiceSource {
    /// See [`uniform::uniform`].
    fn uniform<T: GenInt>(&mut self, bound: T::Bound) -> T {
        uniform::uniform(self, bound)
    }

    /// See [`uniform::uniform_sized`].
    fn uniform_sized<T: GenInt>(&mut self, bound: T::Bound) -> T {
        uniform::uniform_sized(self, bound)
    }

    /// See [`bounded::range`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidRange` if `min > max`.
    fn range<T: GenInt>(&mut self, min: T, max: T) -> Result<T, GenError> {
        bounded::range(self, min, max)
    }

    /// See [`bounded::lt`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::EmptyRange` if `bound` is the type's minimum.
    fn lt<T: GenInt>(&mut self, bound: T) -> Result<T, GenError> {
        bounded::lt(self, bound)
    }

    /// See [`bounded::ge`].
    fn ge<T: GenInt>(&mut self, bound: T) -> T {
        bounded::ge(self, bound)
    }

    /// See [`bounded::mult_range`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::ZeroMultiple`, `GenError::InvalidRange` or
    /// `GenError::NoMultipleInRange`.
    fn mult_range<T: GenInt>(&mut self, min: T, max: T, mult: T) -> Result<T, GenError> {
        bounded::mult_range(self, min, max, mult)
    }

    /// See [`bounded::mult`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::ZeroMultiple` if `mult` is zero.
    fn mult<T: GenInt>(&mut self, mult: T) -> Result<T, GenError> {
        bounded::mult(self, mult)
    }

    /// See [`structure::shuffle`].
    fn shuffle<T>(&mut self, items: &mut [T]) {
        structure::shuffle(self, items);
    }

    /// See [`structure::shuffle_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidLayout` if `element_size` does not divide
    /// the buffer.
    fn shuffle_bytes(&mut self, buf: &mut [u8], element_size: usize) -> Result<(), GenError> {
        structure::shuffle_bytes(self, buf, element_size)
    }

    /// See [`structure::split`].
    ///
    /// # Errors
    ///
    /// Returns `GenError::NoShares` if `shares` is empty.
    fn split(&mut self, n: usize, shares: &mut [usize]) -> Result<(), GenError> {
        structure::split(self, n, shares)
    }
}

impl<S: ChoiceSource + ?Sized> Sample for S {}
