//! # Finite set algebra
//!
//! A [`Set`] is a finite collection of distinct elements of any type with a well-behaved [`Eq`]
//! and [`Hash`] implementation. Besides the basic operations of insertion, removal and membership,
//! sets support the usual algebraic constructions:
//!
//! - union x ∪ y, intersection x ∩ y,
//! - complement U \ x relative to a universe U, relative complement x \ y,
//! - symmetric difference x △ y,
//! - Cartesian product x × y,
//! - powerset P(x).
//!
//! Every construction returns a fresh set and leaves its operands untouched. Since sets hash and
//! compare by value, sets of sets work exactly as one would expect.
//!
//! ```
//! use finset::prelude::*;
//!
//! let a = Set::from([1, 2, 3, 4]);
//! let b = Set::from([3, 4, 5, 6]);
//!
//! assert_eq!(a.relative_complement(&b), Set::from([1, 2]));
//! assert_eq!(a.symmetric_difference(&b), Set::from([1, 2, 5, 6]));
//! assert_eq!(a.power_set().card(), 16);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod algebra;
pub mod parse;
pub mod prelude;
pub mod set;
pub mod subsets;

mod tests;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;

/// The hash set backing a [`Set`](prelude::Set).
///
/// The hasher is deterministic, so that hashes of equal sets agree across instances.
type HashSet<T> = hashbrown::HashSet<T, rustc_hash::FxBuildHasher>;
