//! Helpers shared by the containers' trait implementations.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Writes `items` in the parenthesized text form: `( 1, 2, 3 )`, or `( )`
/// when there is nothing to write.
pub(crate) fn write_parenthesized<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("(")?;
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        write!(f, " {first}")?;
        for item in items {
            write!(f, ", {item}")?;
        }
    }
    f.write_str(" )")
}

/// Feeds every item and then the item count into `state`, so that lists
/// splitting the same items differently hash differently.
pub(crate) fn hash_sequence<I, H>(items: I, state: &mut H)
where
    I: IntoIterator,
    I::Item: Hash,
    H: Hasher,
{
    let mut len = 0_usize;
    for item in items {
        item.hash(state);
        len += 1;
    }
    len.hash(state);
}
