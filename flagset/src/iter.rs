//! Iteration over the flags of a set

use flagset_core::Flag;
use std::iter::FusedIterator;

/// Yields each set flag of a mask, least significant first
///
/// Holds its own copy of the mask: the source set is never consumed, and
/// dropping the iterator early needs no cleanup.
#[derive(Debug, Clone)]
pub struct Iter<T: Flag> {
    remaining: T,
}

impl<T: Flag> Iter<T> {
    pub(crate) fn new(mask: T) -> Self {
        Self { remaining: mask }
    }
}

impl<T: Flag> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining.is_zero() {
            return None;
        }
        let flag = self.remaining.lowest_bit();
        self.remaining = self.remaining.without_lowest_bit();
        Some(flag)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.count_ones() as usize;
        (count, Some(count))
    }

    fn count(self) -> usize {
        self.remaining.count_ones() as usize
    }
}

impl<T: Flag> DoubleEndedIterator for Iter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.remaining.is_zero() {
            return None;
        }
        let flag = self.remaining.highest_bit();
        self.remaining = self.remaining.difference(flag);
        Some(flag)
    }
}

impl<T: Flag> ExactSizeIterator for Iter<T> {}

impl<T: Flag> FusedIterator for Iter<T> {}
