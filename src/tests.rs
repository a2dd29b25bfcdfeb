//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// Creates analogous tests for integer, string, and set elements.
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = int, $name {
                #[test]
                fn fn_name() {
                    <i32 as Suite>::$name();
                }
            });

            concat_idents!(fn_name = string, $name {
                #[test]
                fn fn_name() {
                    <String as Suite>::$name();
                }
            });

            concat_idents!(fn_name = nested, $name {
                #[test]
                fn fn_name() {
                    <Set<u8> as Suite>::$name();
                }
            });
        )*
    };
}

/// The sets in our suite, as indices into [`Suite::elements`].
///
/// Every two sets in the list must be distinct.
const SHAPES: &[&[usize]] = &[
    &[],
    &[0],
    &[1],
    &[0, 1],
    &[1, 2, 3],
    &[3, 4],
    &[0, 2, 4, 5],
    &[0, 1, 2, 3, 4, 5],
];

trait Suite: Clone + Debug + Eq + Hash + Sized {
    /// Six distinct elements.
    fn elements() -> [Self; 6];

    /// Builds the set with the elements at the given indices.
    fn build(shape: &[usize]) -> Set<Self> {
        let elements = Self::elements();
        shape.iter().map(|&i| elements[i].clone()).collect()
    }

    /// The sets described by [`SHAPES`].
    fn suite() -> impl Iterator<Item = Set<Self>> {
        SHAPES.iter().map(|shape| Self::build(shape))
    }

    /// Pairs of sets from our [`suite`](Suite::suite).
    fn pairs() -> impl Iterator<Item = (Set<Self>, Set<Self>)> {
        Self::suite().flat_map(|set_1| Self::suite().map(move |set_2| (set_1.clone(), set_2)))
    }

    /// Test that building from a list with repeats is the same as without.
    fn _dedup() {
        let elements = Self::elements();
        for shape in SHAPES {
            let twice: Set<Self> = shape
                .iter()
                .chain(shape.iter().rev())
                .map(|&i| elements[i].clone())
                .collect();
            assert_eq!(twice, Self::build(shape));
            assert_eq!(twice.card(), shape.len());
        }
    }

    /// Test [`Set::eq`] and the [`Hash`] implementation.
    fn _eq() {
        let build = FxBuildHasher;
        for (i, set_1) in Self::suite().enumerate() {
            for (j, set_2) in Self::suite().enumerate() {
                assert_eq!(
                    i == j,
                    set_1 == set_2,
                    "set equality fail at {i}, {j}: {set_1:?} | {set_2:?}"
                );
            }

            // Build the same set in reverse order.
            let rev: Set<Self> = {
                let mut vec: Vec<Self> = set_1.clone().into();
                vec.reverse();
                vec.into()
            };
            assert!(set_1.equal(&rev) && rev.equal(&set_1));
            assert_eq!(build.hash_one(&set_1), build.hash_one(&rev));
        }
    }

    /// Test [`Set::union`].
    fn _union() {
        for (set_1, set_2) in Self::pairs() {
            let union = set_1.union(&set_2);
            assert_eq!(union, set_2.union(&set_1));
            assert!(set_1.subset(&union) && set_2.subset(&union));
            assert!(union.iter().all(|el| set_1.contains(el) || set_2.contains(el)));
        }
    }

    /// Test [`Set::intersect`].
    fn _intersect() {
        for (set_1, set_2) in Self::pairs() {
            let inter = set_1.intersect(&set_2);
            assert_eq!(inter, set_2.intersect(&set_1));
            assert!(inter.subset(&set_1) && inter.subset(&set_2));
            assert!(set_1.iter().all(|el| inter.contains(el) == set_2.contains(el)));
        }
    }

    /// Test [`Set::complement`].
    fn _complement() {
        let universe = Self::build(&[0, 1, 2, 3, 4, 5]);
        for set in Self::suite() {
            let complement = set.complement(&universe);
            assert!(complement.disjoint(&set));
            assert_eq!(complement.union(&set), universe);
            assert_eq!(complement.complement(&universe), set);
        }
    }

    /// Test [`Set::relative_complement`].
    fn _relative_complement() {
        for (set_1, set_2) in Self::pairs() {
            let diff = set_1.relative_complement(&set_2);
            assert!(diff.subset(&set_1) && diff.disjoint(&set_2));
            assert_eq!(diff.union(&set_1.intersect(&set_2)), set_1);
        }
    }

    /// Test [`Set::symmetric_difference`].
    fn _symmetric_difference() {
        for (set_1, set_2) in Self::pairs() {
            let diff = set_1.symmetric_difference(&set_2);
            assert_eq!(diff, set_2.symmetric_difference(&set_1));
            assert_eq!(
                diff,
                (&set_1 - &set_2).union(&(&set_2 - &set_1)),
                "symmetric difference fail: {set_1:?} | {set_2:?}"
            );
        }
    }

    /// Test [`Set::cross_product`].
    fn _cross_product() {
        for (set_1, set_2) in Self::pairs() {
            let prod = set_1.cross_product(&set_2);
            assert_eq!(prod.card(), set_1.card() * set_2.card());
            for fst in &set_1 {
                for snd in &set_2 {
                    assert!(prod.contains(&(fst.clone(), snd.clone())));
                }
            }
        }
    }

    /// Test [`Set::power_set`].
    fn _power_set() {
        for set in Self::suite() {
            let power = set.power_set();
            assert_eq!(power.card(), 1 << set.card());
            assert!(power.contains(&Set::new()) && power.contains(&set));
            assert!(power.iter().all(|subset| subset.subset(&set)));
        }
    }

    /// Test that clones are independent of the original.
    fn _clone() {
        let [fst, .., lst] = Self::elements();
        for shape in SHAPES {
            let set = Self::build(shape);
            let mut other = set.clone();
            assert!(set.equal(&other));

            other.insert_mut(fst.clone());
            other.remove_mut(&lst);
            assert_eq!(set, Self::build(shape), "mutating a clone changed {set:?}");
        }
    }
}

impl Suite for i32 {
    fn elements() -> [Self; 6] {
        [1, 2, 3, 4, 5, 6]
    }
}

impl Suite for String {
    fn elements() -> [Self; 6] {
        ["TOAST", "EGGS", "BACON", "", "toast", "🍳"].map(String::from)
    }
}

impl Suite for Set<u8> {
    fn elements() -> [Self; 6] {
        [
            Set::new(),
            Set::from([1]),
            Set::from([2]),
            Set::from([1, 2]),
            Set::from([3]),
            Set::from([1, 2, 3]),
        ]
    }
}

test!(
    _dedup,
    _eq,
    _union,
    _intersect,
    _complement,
    _relative_complement,
    _symmetric_difference,
    _cross_product,
    _power_set,
    _clone
);
