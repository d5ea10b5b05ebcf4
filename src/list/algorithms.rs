use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::algorithms::{hash_sequence, write_parenthesized};
use crate::list::NodeList;
use crate::node::{Element, Link};

impl<N: Link + Element> PartialEq for NodeList<N>
where
    N::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<N: Link + Element> Eq for NodeList<N> where N::Item: Eq {}

impl<N: Link + Element> PartialOrd for NodeList<N>
where
    N::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<N: Link + Element> Ord for NodeList<N>
where
    N::Item: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<N: Link + Element> Clone for NodeList<N>
where
    N::Item: Clone,
{
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        while self.len() > other.len() {
            self.remove_first();
        }
        let mut others = other.iter();
        for (elem, elem_other) in self.iter_mut().zip(&mut others) {
            elem.clone_from(elem_other);
        }
        self.extend(others.cloned());
    }
}

impl<N: Link + Element> Hash for NodeList<N>
where
    N::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

/// Renders the elements as `( 1, 2, 3 )`; an empty list renders as `( )`.
impl<N: Link + Element> fmt::Display for NodeList<N>
where
    N::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parenthesized(f, self)
    }
}

impl<N: Link + Element> NodeList<N> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    ///
    /// list.append(0);
    /// list.append(1);
    /// list.append(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &N::Item) -> bool
    where
        N::Item: PartialEq,
    {
        self.iter().any(|e| e == x)
    }
}
