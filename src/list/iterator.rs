//! Owning iterators and the collection traits of [`NodeList`].

use std::fmt;
use std::iter::FusedIterator;

use crate::iterator::{Iter, IterMut};
use crate::list::NodeList;
use crate::node::{BackLink, Element, Link};

/// An owning iterator over the elements of a [`NodeList`].
///
/// This `struct` is created by the `into_iter` method on [`NodeList`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<N> {
    list: NodeList<N>,
}

impl<N: Link + Element> fmt::Debug for IntoIter<N>
where
    N::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<N: Link + Element> Iterator for IntoIter<N> {
    type Item = N::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<N: BackLink + Element> DoubleEndedIterator for IntoIter<N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<N: Link + Element> ExactSizeIterator for IntoIter<N> {}

impl<N: Link + Element> FusedIterator for IntoIter<N> {}

/// A draining iterator over the elements of a [`NodeList`].
///
/// This `struct` is created by [`NodeList::drain`]. The list is empty once
/// the iterator is dropped, whether or not it was consumed.
pub struct Drain<'a, N: Link + Element> {
    list: &'a mut NodeList<N>,
}

impl<N: Link + Element> Iterator for Drain<'_, N> {
    type Item = N::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl<N: BackLink + Element> DoubleEndedIterator for Drain<'_, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<N: Link + Element> ExactSizeIterator for Drain<'_, N> {}

impl<N: Link + Element> FusedIterator for Drain<'_, N> {}

impl<N: Link + Element> Drop for Drain<'_, N> {
    fn drop(&mut self) {
        self.list.remove_all();
    }
}

impl<N: Link + Element> fmt::Debug for Drain<'_, N>
where
    N::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&*self.list).finish()
    }
}

impl<N: Link + Element> NodeList<N> {
    /// Removes every element, yielding them front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let mut drain = list.drain();
    /// assert_eq!(drain.next(), Some(1));
    /// assert_eq!(drain.next_back(), Some(3));
    /// drop(drain);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, N> {
        Drain { list: self }
    }
}

impl<N: Link + Element> IntoIterator for NodeList<N> {
    type Item = N::Item;
    type IntoIter = IntoIter<N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, N: Link + Element> IntoIterator for &'a NodeList<N> {
    type Item = &'a N::Item;
    type IntoIter = Iter<'a, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, N: Link + Element> IntoIterator for &'a mut NodeList<N> {
    type Item = &'a mut N::Item;
    type IntoIter = IterMut<'a, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Builds a list in iteration order: the first item becomes the head.
impl<N: Link + Element> FromIterator<N::Item> for NodeList<N> {
    fn from_iter<I: IntoIterator<Item = N::Item>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = NodeList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<N: Link + Element> Extend<N::Item> for NodeList<N> {
    fn extend<I: IntoIterator<Item = N::Item>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.append(item);
        });
    }
}

impl<N: Link + Element, const M: usize> From<[N::Item; M]> for NodeList<N> {
    fn from(array: [N::Item; M]) -> Self {
        Self::from_iter(array)
    }
}
