//! Integer widths the samplers are generic over.

use std::fmt::Debug;

/// A fixed-width integer that can be sampled.
///
/// All arithmetic on bounds happens in `i128`, which holds every value of
/// every implementing type as well as the distance between any two of them.
pub trait GenInt: Copy + Ord + Debug + 'static {
    /// Type of the bound accepted by `uniform`: the unsigned type of the
    /// same width.
    type Bound: Copy;

    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Whether the type is signed.
    const SIGNED: bool;

    /// Widens the value losslessly.
    fn to_i128(self) -> i128;

    /// Narrows `value`, which the caller guarantees to be in range.
    fn from_i128(value: i128) -> Self;

    /// Widens a `uniform` bound.
    fn widen_bound(bound: Self::Bound) -> u64;
}

macro_rules! impl_gen_int {
    ($($ty:ty => $bound:ty, $signed:expr;)*) => {
        $(
            impl GenInt for $ty {
                type Bound = $bound;

                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;
                const SIGNED: bool = $signed;

                #[allow(clippy::cast_lossless)]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_i128(value: i128) -> Self {
                    debug_assert!(
                        value >= Self::MIN.to_i128() && value <= Self::MAX.to_i128(),
                        "{value} out of range for {}",
                        stringify!($ty)
                    );
                    value as $ty
                }

                #[allow(clippy::cast_lossless)]
                fn widen_bound(bound: Self::Bound) -> u64 {
                    bound as u64
                }
            }
        )*
    };
}

impl_gen_int! {
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
    u64 => u64, false;
    usize => usize, false;
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
    i64 => u64, true;
    isize => usize, true;
}
