use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::algorithms::{hash_sequence, write_parenthesized};
use crate::sentinel::SentinelList;

impl<T: PartialEq> PartialEq for SentinelList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for SentinelList<T> {}

impl<T: PartialOrd> PartialOrd for SentinelList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for SentinelList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for SentinelList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for SentinelList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<T: fmt::Display> fmt::Display for SentinelList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parenthesized(f, self)
    }
}

impl<T> SentinelList<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value. Sentinels are never compared.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let list = SentinelList::from([0, 1, 2]);
    /// assert!(list.contains(&1));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }
}
