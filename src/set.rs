//! Finite sets [`Set`].

use crate::prelude::*;

/// A finite set of elements of type `T`.
///
/// Elements are compared through their [`Eq`] implementation, and stored in a hash table keyed by
/// their [`Hash`] implementation. Iteration order is unspecified and carries no meaning: two sets
/// with the same elements are equal no matter how they were built.
///
/// ## Invariants
///
/// Every two elements in a [`Set`] are distinct. Inserting an element already in the set does
/// nothing.
#[derive(Clone)]
pub struct Set<T>(HashSet<T>);

// -------------------- Basic traits -------------------- //

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hashbrown::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hashbrown::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self(HashSet::default())
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Eq + Hash> From<Vec<T>> for Set<T> {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self).finish()
    }
}

/// Displays a set in canonical roster notation.
///
/// The elements are sorted by their string representation, so that equal sets are always
/// displayed the same.
///
/// Elements are written as they display, without quoting. Parsing the output back only recovers
/// the set when no element displays as blank or contains a comma or bracket outside of balanced
/// nesting. For instance, a set holding the empty string displays as `{}`.
impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut els: Vec<_> = self.iter().map(ToString::to_string).collect();
        els.sort_unstable();

        f.write_char('{')?;
        let mut iter = els.iter();
        if let Some(fst) = iter.next() {
            f.write_str(fst)?;
        }
        for el in iter {
            f.write_str(", ")?;
            f.write_str(el)?;
        }
        f.write_char('}')
    }
}

// -------------------- Structural identity -------------------- //

/// Two sets are equal when they have the same elements.
impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.card() == other.card() && self.iter().all(|el| other.contains(el))
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

/// Hashes a set by value.
///
/// The element hashes are combined with a commutative operation, so the result does not depend on
/// the iteration order.
impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let build = self.0.hasher();
        let sum = self
            .iter()
            .fold(0u64, |acc, el| acc.wrapping_add(build.hash_one(el)));

        state.write_usize(self.card());
        state.write_u64(sum);
    }
}

/// Sets are partially ordered by inclusion.
impl<T: Eq + Hash> PartialOrd for Set<T> {
    fn le(&self, other: &Self) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    fn lt(&self, other: &Self) -> bool {
        self.card() < other.card() && self.le(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let cmp = self.card().cmp(&other.card());
        let test = match cmp {
            Ordering::Equal => self.eq(other),
            Ordering::Less => self.le(other),
            Ordering::Greater => self.ge(other),
        };

        if test {
            Some(cmp)
        } else {
            None
        }
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Set<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The empty set, with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashSet::with_capacity_and_hasher(capacity, FxBuildHasher))
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Set cardinality. Alias for [`Set::card`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.card()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set.
    ///
    /// Every call starts a new traversal. The order is unspecified.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T: Eq + Hash> Set<T> {
    /// Set membership ∈.
    pub fn contains<Q: Eq + Hash + ?Sized>(&self, el: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.0.contains(el)
    }

    /// Set equality. Equivalent to `==`.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Subset relation ⊆.
    #[must_use]
    pub fn subset(&self, other: &Self) -> bool {
        self.card() <= other.card() && self.iter().all(|el| other.contains(el))
    }

    /// Strict subset relation ⊂.
    #[must_use]
    pub fn ssubset(&self, other: &Self) -> bool {
        self < other
    }

    /// Superset relation ⊇.
    #[must_use]
    pub fn superset(&self, other: &Self) -> bool {
        other.subset(self)
    }

    /// Whether the sets have no elements in common.
    #[must_use]
    pub fn disjoint(&self, other: &Self) -> bool {
        let (small, large) = if self.card() <= other.card() {
            (self, other)
        } else {
            (other, self)
        };
        !small.iter().any(|el| large.contains(el))
    }

    // -------------------- Mutation -------------------- //

    /// In-place set insertion x ∪ {y}.
    ///
    /// Returns whether the element was not already in the set.
    pub fn insert_mut(&mut self, el: T) -> bool {
        self.0.insert(el)
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, el: T) -> Self {
        self.insert_mut(el);
        self
    }

    /// Inserts every element from an iterator. Elements already in the set are skipped.
    pub fn add<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }

    /// In-place set removal x \ {y}.
    ///
    /// Returns whether the element was in the set. Removing an absent element does nothing.
    pub fn remove_mut<Q: Eq + Hash + ?Sized>(&mut self, el: &Q) -> bool
    where
        T: Borrow<Q>,
    {
        self.0.remove(el)
    }

    /// Removes every element from an iterator. Absent elements are skipped.
    pub fn remove<'a, Q, I>(&mut self, iter: I)
    where
        Q: Eq + Hash + ?Sized + 'a,
        T: Borrow<Q>,
        I: IntoIterator<Item = &'a Q>,
    {
        for el in iter {
            self.remove_mut(el);
        }
    }
}
