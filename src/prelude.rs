//! Crate prelude.

// The actual prelude.
pub use crate::{parse::SetError, set::Set, subsets::Subsets};

// Convenient imports within the crate.
pub(crate) use crate::{HashSet, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use rustc_hash::FxBuildHasher;
pub(crate) use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::{BuildHasher, Hash, Hasher},
    str::FromStr,
};
