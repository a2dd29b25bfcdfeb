//! Algebraic constructions on [`Set`].
//!
//! Every construction here borrows its operands and builds a new set. None of them mutate their
//! arguments.

use crate::prelude::*;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

impl<T: Clone + Eq + Hash> Set<T> {
    /// Set specification {x ∈ A : P(x)}.
    #[must_use]
    pub fn select<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self {
        self.iter().filter(|el| pred(*el)).cloned().collect()
    }

    /// Union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut union = other.clone();
        union.add(self.iter().cloned());
        union
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.select(|el| other.contains(el))
    }

    /// Complement U \ x, relative to a universe U.
    ///
    /// There is no implicit universal set. Elements of `self` outside of `universe` are ignored.
    #[must_use]
    pub fn complement(&self, universe: &Self) -> Self {
        let mut complement = universe.clone();
        complement.remove(self);
        complement
    }

    /// Relative complement x \ y, i.e. the elements of `self` that are not in `other`.
    ///
    /// This is the complement of `other` within the universe `self`.
    #[must_use]
    pub fn relative_complement(&self, other: &Self) -> Self {
        other.complement(self)
    }

    /// Symmetric difference x △ y = (x ∪ y) \ (x ∩ y).
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other).relative_complement(&self.intersect(other))
    }

    /// Cartesian product x × y, as a set of ordered pairs.
    ///
    /// Pairs are ordered: `(a, b)` and `(b, a)` are distinct elements.
    #[must_use]
    pub fn cross_product<U: Clone + Eq + Hash>(&self, other: &Set<U>) -> Set<(T, U)> {
        let mut prod = Set::with_capacity(self.card().saturating_mul(other.card()));
        for fst in self {
            for snd in other {
                prod.insert_mut((fst.clone(), snd.clone()));
            }
        }

        prod
    }

    /// Powerset P(x).
    ///
    /// The output has 2<sup>n</sup> elements for a set with n elements. See [`Set::subsets`] for a
    /// lazy version.
    #[must_use]
    pub fn power_set(&self) -> Set<Self> {
        tracing::debug!(card = self.card(), "building power set");
        self.subsets().collect()
    }
}

impl<T: Clone + Eq + Hash> Set<Set<T>> {
    /// Union ∪x over a set of sets.
    #[must_use]
    pub fn big_union(&self) -> Set<T> {
        self.iter().flatten().cloned().collect()
    }
}

/// Implements a binary operator on set references in terms of a set construction.
macro_rules! impl_op {
    ($tr: ident, $op: ident, $method: ident) => {
        impl<T: Clone + Eq + Hash> $tr<&Set<T>> for &Set<T> {
            type Output = Set<T>;

            fn $op(self, rhs: &Set<T>) -> Set<T> {
                self.$method(rhs)
            }
        }
    };
}

impl_op!(BitOr, bitor, union);
impl_op!(BitAnd, bitand, intersect);
impl_op!(Sub, sub, relative_complement);
impl_op!(BitXor, bitxor, symmetric_difference);
