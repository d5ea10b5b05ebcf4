//! A value-type singly linked list: each list is an optional first element
//! followed by the rest of the list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::algorithms::{hash_sequence, write_parenthesized};

struct Cell<T> {
    element: T,
    rest: ConsList<T>,
}

/// A persistent-style cons list.
///
/// Elements are added and removed at the front only. Unlike the node lists
/// there are no handles and no cached length: [`len`](ConsList::len) walks
/// the list.
///
/// # Examples
///
/// ```
/// use linked_nodes::ConsList;
///
/// let list = ConsList::new().cons(3).cons(2).cons(1);
/// assert_eq!(list.first(), Some(&1));
/// assert_eq!(list.rest().and_then(ConsList::first), Some(&2));
/// assert_eq!(list.to_string(), "( 1, 2, 3 )");
/// ```
pub struct ConsList<T> {
    head: Option<Box<Cell<T>>>,
}

impl<T> ConsList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns the list with `element` in front of `self`.
    #[must_use]
    pub fn cons(mut self, element: T) -> Self {
        self.push_front(element);
        self
    }

    pub fn push_front(&mut self, element: T) {
        let rest = ConsList {
            head: self.head.take(),
        };
        self.head = Some(Box::new(Cell { element, rest }));
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let cell = self.head.take()?;
        let Cell { element, mut rest } = *cell;
        self.head = rest.head.take();
        Some(element)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head.as_ref().map(|cell| &cell.element)
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|cell| &mut cell.element)
    }

    /// The list after the first element, or `None` if the list is empty.
    #[inline]
    pub fn rest(&self) -> Option<&ConsList<T>> {
        self.head.as_ref().map(|cell| &cell.rest)
    }

    /// Reverses the list without reallocating its cells.
    #[must_use]
    pub fn reversed(mut self) -> Self {
        let mut reversed = ConsList::new();
        while let Some(mut cell) = self.head.take() {
            self.head = cell.rest.head.take();
            cell.rest = reversed;
            reversed = ConsList { head: Some(cell) };
        }
        reversed
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self }
    }
}

impl<T> Drop for ConsList<T> {
    fn drop(&mut self) {
        // Unlink cell by cell so that dropping a long list does not recurse.
        let mut head = self.head.take();
        while let Some(mut cell) = head {
            head = cell.rest.head.take();
        }
    }
}

impl<T> Default for ConsList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the elements of a [`ConsList`], front to back.
pub struct Iter<'a, T> {
    list: &'a ConsList<T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { list: self.list }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.list.head.as_deref()?;
        self.list = &cell.rest;
        Some(&cell.element)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a [`ConsList`].
pub struct IntoIter<T> {
    list: ConsList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for ConsList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a ConsList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The first item of the iterator becomes the first element of the list.
impl<T> FromIterator<T> for ConsList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(ConsList::new(), ConsList::cons)
    }
}

impl<T, const M: usize> From<[T; M]> for ConsList<T> {
    fn from(array: [T; M]) -> Self {
        Self::from_iter(array)
    }
}

impl<T: Clone> Clone for ConsList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ConsList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for ConsList<T> {}

impl<T: Hash> Hash for ConsList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ConsList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parenthesized(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::ConsList;

    #[test]
    fn push_and_pop_at_the_front() {
        let mut list = ConsList::new();
        assert!(list.is_empty());
        list.push_front(2);
        list.push_front(1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn from_iter_keeps_order() {
        let list = ConsList::from([1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    }

    #[test]
    fn rest_shares_the_tail() {
        let list = ConsList::from(['a', 'b']);
        let rest = list.rest().unwrap();
        assert_eq!(rest.first(), Some(&'b'));
        assert!(rest.rest().unwrap().is_empty());
        assert_eq!(ConsList::<char>::new().rest(), None);
    }

    #[test]
    fn reversed_and_equality() {
        let list = ConsList::from([1, 2, 3]);
        assert_eq!(list.clone().reversed(), ConsList::from([3, 2, 1]));
        assert_eq!(list.clone().reversed().reversed(), list);
        assert_ne!(list, ConsList::from([1, 2]));
        assert_eq!(ConsList::<i32>::new().to_string(), "( )");
    }

    #[test]
    fn dropping_a_long_list_does_not_overflow() {
        let list: ConsList<u32> = (0..200_000).collect();
        assert_eq!(list.first(), Some(&0));
        drop(list);
    }
}
