//! Unsigned integer widths that can back a flag set
//!
//! Only the unsigned primitive integers implement [`Flag`]. The trait is
//! sealed, so the restriction holds at compile time for every caller.

use bytemuck::Pod;
use core::fmt::{Binary, Debug, Display};
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Trait for unsigned integer types that can hold a set of flags
///
/// Every implementor is `Pod`, so an all-zero value is always a valid
/// empty mask. All operations are total and never panic.
pub trait Flag:
    Copy + Eq + Ord + Hash + Debug + Display + Binary + Pod + sealed::Sealed
{
    /// The empty mask
    const ZERO: Self;

    /// Width of the type in bits
    const BITS: u32;

    /// Bitwise OR
    fn union(self, other: Self) -> Self;

    /// Bitwise AND
    fn intersection(self, other: Self) -> Self;

    /// Bitwise AND-NOT: the bits of `self` that are not in `other`
    fn difference(self, other: Self) -> Self;

    /// Isolate the least-significant set bit (`x & -x`)
    fn lowest_bit(self) -> Self;

    /// Clear the least-significant set bit (`x & (x - 1)`)
    fn without_lowest_bit(self) -> Self;

    /// Isolate the most-significant set bit, or zero
    fn highest_bit(self) -> Self;

    /// Number of set bits
    fn count_ones(self) -> u32;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Lossless conversion used for diagnostics
    fn widen(self) -> u128;
}

macro_rules! impl_flag {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Flag for $ty {
                const ZERO: Self = 0;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn union(self, other: Self) -> Self {
                    self | other
                }

                #[inline]
                fn intersection(self, other: Self) -> Self {
                    self & other
                }

                #[inline]
                fn difference(self, other: Self) -> Self {
                    self & !other
                }

                #[inline]
                fn lowest_bit(self) -> Self {
                    self & self.wrapping_neg()
                }

                #[inline]
                fn without_lowest_bit(self) -> Self {
                    self & self.wrapping_sub(1)
                }

                #[inline]
                fn highest_bit(self) -> Self {
                    if self == 0 {
                        0
                    } else {
                        1 << (<$ty>::BITS - 1 - self.leading_zeros())
                    }
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn widen(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_flag!(u8, u16, u32, u64, u128, usize);
