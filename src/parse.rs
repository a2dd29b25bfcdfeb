//! Parsing sets from roster notation.

use crate::prelude::*;

/// Error in parsing a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetError<E> {
    /// The outer braces are missing, or some brackets are mismatched.
    Brackets,
    /// An element could not be parsed.
    Element(E),
}

impl<E: Display> Display for SetError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Brackets => f.write_str("mismatched brackets"),
            Self::Element(err) => write!(f, "invalid element: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SetError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Brackets => None,
            Self::Element(err) => Some(err),
        }
    }
}

/// Splits a list of elements at the commas that aren't enclosed in any brackets.
///
/// Each of `{}`, `()` and `[]` counts as a bracket pair.
fn split_elements<E>(str: &str) -> Result<SmallVec<&str>, SetError<E>> {
    let mut stack = SmallVec::new();
    let mut elements = SmallVec::new();
    let mut start = 0;

    for (idx, c) in str.char_indices() {
        match c {
            '{' => stack.push('}'),
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '}' | ')' | ']' => {
                if stack.pop() != Some(c) {
                    return Err(SetError::Brackets);
                }
            }
            ',' if stack.is_empty() => {
                elements.push(&str[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SetError::Brackets);
    }
    elements.push(&str[start..]);
    Ok(elements)
}

/// Sets are parsed from their roster notation `{a, b, c}`.
///
/// Whitespace around each element is ignored. Commas within nested brackets don't separate
/// elements, so that sets of sets or sets of tuples can be parsed. Repeated elements are
/// deduplicated.
///
/// Elements are not quoted, so blank elements and unbalanced brackets or top-level commas inside an
/// element can't be expressed: `{}` is always the empty set, and `{a,b}` always has two elements.
impl<T: FromStr + Eq + Hash> FromStr for Set<T> {
    type Err = SetError<T::Err>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(SetError::Brackets)?;

        let mut set = Self::new();
        if inner.trim().is_empty() {
            return Ok(set);
        }

        for el in split_elements(inner)? {
            set.insert_mut(el.trim().parse().map_err(SetError::Element)?);
        }
        Ok(set)
    }
}
