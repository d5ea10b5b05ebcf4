//! Owning iterators and the collection traits of [`SentinelList`].

use std::fmt;
use std::iter::FusedIterator;

use crate::iterator::{Iter, IterMut};
use crate::node::SentinelNode;
use crate::sentinel::SentinelList;

/// An owning iterator over the elements of a [`SentinelList`].
pub struct IntoIter<T> {
    list: SentinelList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining iterator over the elements of a [`SentinelList`].
///
/// The list is empty once the iterator is dropped.
pub struct Drain<'a, T: 'a> {
    list: &'a mut SentinelList<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

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

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_last()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.list.remove_all();
    }
}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&*self.list).finish()
    }
}

impl<T> SentinelList<T> {
    /// Removes every element, yielding them front to back.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { list: self }
    }
}

impl<T> IntoIterator for SentinelList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SentinelList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, SentinelNode<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SentinelList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, SentinelNode<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for SentinelList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = SentinelList::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SentinelList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| {
            self.append(item);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for SentinelList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const M: usize> From<[T; M]> for SentinelList<T> {
    fn from(array: [T; M]) -> Self {
        Self::from_iter(array)
    }
}

#[cfg(test)]
mod tests {
    use crate::SentinelList;

    #[test]
    fn into_iter_from_both_ends() {
        let mut iter = SentinelList::from([1, 2, 3]).into_iter();
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.last(), Some(2));
    }

    #[test]
    fn round_trip_through_a_vec() {
        for input in [vec![], vec![1], vec![1, 2, 3, 4, 5]] {
            let list = SentinelList::from_iter(input.clone());
            let back: Vec<_> = list.clone().into_iter().collect();
            assert_eq!(back, input);
            assert_eq!(SentinelList::from_iter(back), list);
        }
    }

    #[test]
    fn extend_with_copied_references() {
        let mut list = SentinelList::from([1]);
        list.extend(&[2, 3]);
        assert_eq!(list.to_string(), "( 1, 2, 3 )");
    }

    #[test]
    fn drain_keeps_sentinels_linked() {
        let mut list = SentinelList::from([1, 2, 3]);
        assert_eq!(list.drain().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(list.is_empty());
        let head_sentinel = list.node(list.head_sentinel()).unwrap();
        assert_eq!(head_sentinel.next(), Some(list.tail_sentinel()));
    }
}
