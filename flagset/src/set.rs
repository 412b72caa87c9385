//! The flag set container
//!
//! [`FlagSet`] wraps a single unsigned integer holding the union of every
//! flag currently set. Methods that take single-flag arguments (`add`,
//! `clear`, `has`, `has_all`) run them through
//! [`check_flag`](crate::validation::check_flag); methods that work on an
//! already-formed mask never validate.

use crate::iter::Iter;
use crate::validation::check_flag;
use bytemuck::{Pod, Zeroable};
use flagset_core::Flag;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// A set of power-of-two flags backed by an unsigned integer
///
/// The zero value is the empty set and is ready to use.
///
/// ```
/// use flagset::FlagSet;
///
/// const READ: u8 = 1 << 0;
/// const WRITE: u8 = 1 << 1;
/// const EXEC: u8 = 1 << 2;
///
/// let mut perms = FlagSet::new(READ, &[]);
/// perms.add(EXEC, &[]);
///
/// assert!(perms.has(READ));
/// assert!(!perms.has(WRITE));
/// assert_eq!(perms.all().collect::<Vec<_>>(), [READ, EXEC]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FlagSet<T: Flag> {
    current: T,
}

// SAFETY: `FlagSet<T>` is a transparent wrapper around a `Pod` integer and
// every bit pattern is a valid mask.
unsafe impl<T: Flag> Zeroable for FlagSet<T> {}
unsafe impl<T: Flag> Pod for FlagSet<T> {}

impl<T: Flag> FlagSet<T> {
    /// Create an empty set
    pub const fn empty() -> Self {
        Self { current: T::ZERO }
    }

    /// Create a set holding `flag` and every flag in `extra`
    ///
    /// Equivalent to [`FlagSet::empty`] followed by [`FlagSet::add`], so the
    /// arguments are validated the same way.
    pub fn new(flag: T, extra: &[T]) -> Self {
        let mut set = Self::empty();
        set.add(flag, extra);
        set
    }

    /// Wrap an already-combined mask without validation
    pub const fn from_bits(bits: T) -> Self {
        Self { current: bits }
    }

    /// The raw mask
    pub const fn bits(&self) -> T {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_zero()
    }

    /// Number of flags currently set
    pub fn len(&self) -> usize {
        self.current.count_ones() as usize
    }

    /// Union of both sets as a new value; neither operand changes
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            current: self.current.union(other.current),
        }
    }

    /// Add one or more flags to the set
    ///
    /// # Panics
    ///
    /// With validation enabled, panics if any argument is not a single flag.
    pub fn add(&mut self, flag: T, extra: &[T]) {
        check_flag(flag);
        self.current = self.current.union(flag);
        for &flag in extra {
            check_flag(flag);
            self.current = self.current.union(flag);
        }
    }

    /// Clear one or more flags from the set
    ///
    /// Clearing a flag that is not set does nothing.
    ///
    /// # Panics
    ///
    /// With validation enabled, panics if any argument is not a single flag.
    pub fn clear(&mut self, flag: T, extra: &[T]) {
        check_flag(flag);
        self.current = self.current.difference(flag);
        for &flag in extra {
            check_flag(flag);
            self.current = self.current.difference(flag);
        }
    }

    /// Has the flag been set?
    ///
    /// Without validation a combined mask is accepted and tested as a subset.
    ///
    /// # Panics
    ///
    /// With validation enabled, panics if `flag` is not a single flag.
    pub fn has(&self, flag: T) -> bool {
        check_flag(flag);
        self.current.intersection(flag) == flag
    }

    /// Returns true if every provided flag is set
    ///
    /// Stops at the first missing flag; arguments after it are not checked.
    pub fn has_all(&self, flag: T, extra: &[T]) -> bool {
        if !self.has(flag) {
            return false;
        }
        extra.iter().all(|&flag| self.has(flag))
    }

    /// Iterate the set flags from least to most significant
    ///
    /// The iterator works on a copy of the mask, so calling `all` again
    /// yields the same sequence.
    pub fn all(&self) -> Iter<T> {
        Iter::new(self.current)
    }
}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> BitOr for FlagSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl<T: Flag> BitOrAssign for FlagSet<T> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.merge(rhs);
    }
}

impl<T: Flag> Extend<T> for FlagSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for flag in iter {
            self.add(flag, &[]);
        }
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<T: Flag> IntoIterator for FlagSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.all()
    }
}

impl<T: Flag> IntoIterator for &FlagSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.all()
    }
}

impl<T: Flag> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FlagSet(")?;
        f.debug_list().entries(self.all()).finish()?;
        f.write_str(")")
    }
}

impl<T: Flag> fmt::Binary for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.current, f)
    }
}
