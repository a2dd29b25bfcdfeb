//! Lazy enumeration of the subsets of a [`Set`].

use crate::prelude::*;
use std::iter::FusedIterator;

/// Increments a little-endian binary counter.
///
/// Returns `false` when the counter wraps around from all ones back to zero.
fn increment(counter: &mut BitSlice) -> bool {
    if let Some(idx) = counter.first_zero() {
        counter[..idx].fill(false);
        counter.set(idx, true);
        true
    } else {
        counter.fill(false);
        false
    }
}

/// An iterator over all subsets of a [`Set`].
///
/// The elements of the set are laid out in a fixed order when the iterator is built. Each subset
/// then corresponds to a bitmask over that order, and the bitmask is counted up from all zeros (the
/// empty set) to all ones (the full set). See [`Set::subsets`].
///
/// The count isn't bounded by the size of a `usize`, so the first few subsets of a large set can
/// be taken lazily.
#[derive(Clone)]
pub struct Subsets<'a, T> {
    /// The elements of the set, in the order the bitmask refers to.
    elements: SmallVec<&'a T>,
    /// The bitmask for the next subset.
    counter: BitVec,
    /// Whether every subset has been returned.
    done: bool,
}

impl<'a, T> Subsets<'a, T> {
    /// Initializes the iterator over the subsets of a set.
    fn new(set: &'a Set<T>) -> Self {
        let elements: SmallVec<_> = set.iter().collect();
        let n = elements.len();
        tracing::trace!(card = n, "enumerating subsets");

        Self {
            elements,
            counter: bitvec![0; n],
            done: false,
        }
    }

    /// The number of subsets yet to be returned, or `None` if it doesn't fit in a `usize`.
    fn remaining(&self) -> Option<usize> {
        if self.done {
            return Some(0);
        }

        let total = u32::try_from(self.counter.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))?;
        let passed = self.counter.iter_ones().map(|idx| 1 << idx).sum::<usize>();
        Some(total - passed)
    }
}

impl<T: Clone + Eq + Hash> Iterator for Subsets<'_, T> {
    type Item = Set<T>;

    fn next(&mut self) -> Option<Set<T>> {
        if self.done {
            return None;
        }

        let subset = self
            .counter
            .iter_ones()
            .map(|idx| self.elements[idx].clone())
            .collect();
        self.done = !increment(&mut self.counter);
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone + Eq + Hash> FusedIterator for Subsets<'_, T> {}

impl<T> Set<T> {
    /// Lazily iterates over all subsets of the set.
    ///
    /// The first subset returned is the empty set and the last is the full set. For a set with n
    /// elements, exactly 2<sup>n</sup> distinct subsets are returned.
    pub fn subsets(&self) -> Subsets<'_, T> {
        Subsets::new(self)
    }
}
