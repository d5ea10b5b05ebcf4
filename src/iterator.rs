//! Iterators over a chain of nodes, shared by both list kinds.
//!
//! An iterator walks the half-open run of `len` nodes starting at `front`
//! (and, from the other side, ending at `back`). Because the run is bounded
//! by a count, the walk never reaches a sentinel or follows a link past the
//! last node, and a double-ended walk stops where the two sides meet.
//!
//! Each call to `iter` creates a fresh, independent iterator; an iterator
//! itself is single pass. [`IterMut`] collects its node borrows when it is
//! created and hands them out from either end.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{BackLink, Element, Link, NodeId, NodePool};

/// An iterator over the elements of a list.
///
/// Backward iteration (`rev`, `next_back`) is available for node kinds
/// with a [`BackLink`].
///
/// # Examples
///
/// ```compile_fail
/// use linked_nodes::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, N> {
    nodes: &'a NodePool<N>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<'a, N> Iter<'a, N> {
    pub(crate) fn new(
        nodes: &'a NodePool<N>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            front,
            back,
            len,
        }
    }
}

impl<N> Clone for Iter<'_, N> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, N: Link + Element> fmt::Debug for Iter<'a, N>
where
    N::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, N: Link + Element> Iterator for Iter<'a, N> {
    type Item = &'a N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next();
        self.len -= 1;
        Some(node.element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, N: BackLink + Element> DoubleEndedIterator for Iter<'a, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.previous();
        self.len -= 1;
        Some(node.element())
    }
}

impl<'a, N: Link + Element> ExactSizeIterator for Iter<'a, N> {}

impl<'a, N: Link + Element> FusedIterator for Iter<'a, N> {}

/// A mutable iterator over the elements of a list.
///
/// It changes elements only, never the links between nodes.
///
/// # Examples
///
/// `List` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use linked_nodes::LinkedList;
///
/// let mut list = LinkedList::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.last());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, N> {
    nodes: std::vec::IntoIter<&'a mut N>,
}

impl<'a, N: Link> IterMut<'a, N> {
    /// Borrows the `len` nodes from `front` up front, so the borrows are
    /// disjoint without any unchecked access.
    pub(crate) fn new(nodes: &'a mut NodePool<N>, front: Option<NodeId>, len: usize) -> Self {
        Self {
            nodes: nodes.chain_mut(front, len).into_iter(),
        }
    }
}

impl<'a, N: Link + Element> Iterator for IterMut<'a, N> {
    type Item = &'a mut N::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Element::element_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a, N: BackLink + Element> DoubleEndedIterator for IterMut<'a, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.nodes.next_back().map(Element::element_mut)
    }
}

impl<'a, N: Link + Element> ExactSizeIterator for IterMut<'a, N> {}

impl<'a, N: Link + Element> FusedIterator for IterMut<'a, N> {}

impl<N> fmt::Debug for IterMut<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("len", &self.nodes.len()).finish()
    }
}
