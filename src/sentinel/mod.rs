//! A doubly linked list bounded by two payload-less sentinel nodes.
//!
//! ```text
//!  head sentinel                                             tail sentinel
//!  ┌───────────┐      ┌───────────┐             ┌───────────┐      ┌───────────┐
//!  │   next    │ ───→ │   next    │ ───→ ┄┄ ──→ │   next    │ ───→ │   next    │ ─→ ∅
//!  ├───────────┤      ├───────────┤             ├───────────┤      ├───────────┤
//!  │   prev    │ ←─── │   prev    │ ←─── ┄┄ ←── │   prev    │ ←─── │   prev    │
//!  ├───────────┤      ├───────────┤             ├───────────┤      ├───────────┤
//!  ┊No payload ┊      │ payload T │             │ payload T │      ┊No payload ┊
//!  └╌╌╌╌╌╌╌╌╌╌╌┘      └───────────┘             └───────────┘      └╌╌╌╌╌╌╌╌╌╌╌┘
//!        ↑                 head                      tail                ↑
//! ```
//!
//! Both sentinels live for as long as the list. In an empty list they are
//! linked directly to each other; otherwise the head sentinel links to the
//! first element and the tail sentinel to the last. Every insertion and
//! removal therefore happens between two existing nodes, and none of them
//! special-cases the empty list.
//!
//! Walking the raw links (through [`SentinelList::node`]) reaches the
//! sentinels at both ends; check [`SentinelNode::is_sentinel`] before reading
//! a payload there.

use std::fmt::{Debug, Formatter};
use std::ops::{self, Range};

use crate::error::ListError;
use crate::index::{Depths, NodeIndex};
use crate::iterator::{Iter, IterMut};
use crate::node::{Element, Link, NodeId, NodePool, SentinelNode};

pub mod iterator;

mod algorithms;

/// A doubly linked list with a head and a tail sentinel.
///
/// It offers the same operations as [`LinkedList`](crate::LinkedList).
/// Positions next to a sentinel are accepted where they make sense:
/// inserting after the head sentinel inserts at the front and inserting
/// before the tail sentinel appends. Removing a sentinel, or reading its
/// payload, fails with [`ListError::SentinelNode`] and
/// [`ListError::EmptyAccess`] respectively.
///
/// # Examples
///
/// ```
/// use linked_nodes::SentinelList;
///
/// let mut list = SentinelList::new();
/// list.insert_as_first(0);
/// list.append(1);
/// assert_eq!(list.to_string(), "( 0, 1 )");
///
/// list.remove_first();
/// list.remove_last();
/// let head_sentinel = list.node(list.head_sentinel()).unwrap();
/// assert_eq!(head_sentinel.next(), Some(list.tail_sentinel()));
/// ```
pub struct SentinelList<T> {
    nodes: NodePool<SentinelNode<T>>,
    head_sentinel: NodeId,
    tail_sentinel: NodeId,
    depths: Depths,
}

/// Checks that `previous` and `next` are linked to each other.
#[cfg(debug_assertions)]
fn assert_adjacent<T>(nodes: &NodePool<SentinelNode<T>>, previous: NodeId, next: NodeId) {
    assert_eq!(nodes[previous].next(), Some(next));
    assert_eq!(nodes[next].previous(), Some(previous));
}

// private methods
impl<T> SentinelList<T> {
    #[inline]
    fn connect(&mut self, previous: NodeId, next: NodeId) {
        self.nodes.link_next(previous, Some(next));
    }

    /// Links `node` in between the adjacent nodes `previous` and `next`,
    /// without touching the depths.
    fn attach(&mut self, previous: NodeId, next: NodeId, mut node: SentinelNode<T>) -> NodeId {
        #[cfg(debug_assertions)]
        assert_adjacent(&self.nodes, previous, next);
        node.set_next(None);
        node.set_previous(None);
        let id = self.nodes.insert(node);
        self.connect(previous, id);
        self.connect(id, next);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(&self.nodes, previous, id);
            assert_adjacent(&self.nodes, id, next);
        }
        id
    }

    /// Takes the element node `id` out of the chain, without touching the
    /// depths.
    fn detach(&mut self, id: NodeId) -> SentinelNode<T> {
        self.nodes.unlink(id);
        self.nodes.take(id)
    }

    /// Checks that `id` is a live element node of this list.
    fn check_element_node(&self, id: NodeId) -> Result<(), ListError> {
        if self.nodes.try_get(id)?.is_sentinel() {
            Err(ListError::SentinelNode(id))
        } else {
            Ok(())
        }
    }

    fn check_index(&self, index: &NodeIndex) -> Result<(), ListError> {
        if index.owner() == self.nodes.id() {
            Ok(())
        } else {
            Err(ListError::ForeignIndex)
        }
    }

    /// The neighbour of a real node or sentinel, which exists on every
    /// side facing the inside of the list.
    #[track_caller]
    fn next_of(&self, id: NodeId) -> NodeId {
        match self.nodes[id].next() {
            Some(next) => next,
            None => ListError::SentinelNode(id).raise(),
        }
    }

    #[track_caller]
    fn previous_of(&self, id: NodeId) -> NodeId {
        match self.nodes[id].previous() {
            Some(previous) => previous,
            None => ListError::SentinelNode(id).raise(),
        }
    }

    /// Maps a sentinel to `None` and an element node to itself.
    #[inline]
    fn element_node(&self, id: NodeId) -> Option<NodeId> {
        (id != self.head_sentinel && id != self.tail_sentinel).then_some(id)
    }
}

impl<T> SentinelList<T> {
    /// Creates an empty list: the two sentinels linked to each other.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements besides the
    /// sentinels.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = NodePool::with_capacity(capacity + 2);
        let head_sentinel = nodes.insert(SentinelNode::sentinel());
        let tail_sentinel = nodes.insert(SentinelNode::sentinel());
        nodes.link_next(head_sentinel, Some(tail_sentinel));
        Self {
            nodes,
            head_sentinel,
            tail_sentinel,
            depths: Depths::default(),
        }
    }

    /// Returns `true` if the sentinels are linked to each other.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes[self.head_sentinel].next() == Some(self.tail_sentinel)
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// The handle of the head sentinel. It never changes.
    #[inline]
    pub fn head_sentinel(&self) -> NodeId {
        self.head_sentinel
    }

    /// The handle of the tail sentinel. It never changes.
    #[inline]
    pub fn tail_sentinel(&self) -> NodeId {
        self.tail_sentinel
    }

    /// Returns `true` if `id` is one of this list's sentinels.
    #[inline]
    pub fn is_sentinel(&self, id: NodeId) -> bool {
        id == self.head_sentinel || id == self.tail_sentinel
    }

    /// The first element node: the head sentinel's successor, unless that is
    /// the tail sentinel.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.element_node(self.next_of(self.head_sentinel))
    }

    /// The last element node: the tail sentinel's predecessor, unless that
    /// is the head sentinel.
    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.element_node(self.previous_of(self.tail_sentinel))
    }

    /// Looks up a node of this list, sentinels included.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SentinelNode<T>> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` denotes an element node currently in this
    /// list.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.check_element_node(id).is_ok()
    }

    /// The element node after `id`, or `None` if `id` is the tail.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list, or is the tail sentinel.
    #[track_caller]
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.element_node(self.next_of(id))
    }

    /// The element node before `id`, or `None` if `id` is the head.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list, or is the head sentinel.
    #[track_caller]
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.element_node(self.previous_of(id))
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head().map(|head| self.nodes[head].element())
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        let head = self.head()?;
        Some(self.nodes[head].element_mut())
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tail().map(|tail| self.nodes[tail].element())
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail()?;
        Some(self.nodes[tail].element_mut())
    }

    /// Returns the element of node `id`, or `None` for a sentinel or a stale
    /// or foreign handle.
    #[inline]
    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id)?.try_element().ok()
    }

    #[inline]
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.check_element_node(id).ok()?;
        self.nodes.get_mut(id).map(Element::element_mut)
    }

    /// Links `node` in between the head sentinel and the current head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_node_as_head(&mut self, node: SentinelNode<T>) -> NodeId {
        let next = self.next_of(self.head_sentinel);
        let id = self.attach(self.head_sentinel, next, node);
        self.depths.grow_head();
        id
    }

    /// Adds an element first in the list and returns its handle.
    pub fn insert_as_first(&mut self, element: T) -> NodeId {
        self.insert_node_as_head(SentinelNode::new(element))
    }

    /// Links `node` in between the current tail and the tail sentinel.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append_node(&mut self, node: SentinelNode<T>) -> NodeId {
        let previous = self.previous_of(self.tail_sentinel);
        let id = self.attach(previous, self.tail_sentinel, node);
        self.depths.grow_tail();
        id
    }

    /// Appends an element and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let mut list = SentinelList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&2, &1]);
    /// ```
    pub fn append(&mut self, element: T) -> NodeId {
        self.append_node(SentinelNode::new(element))
    }

    /// Links `node` in right after `after`, which may be the head sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a node of this list, or is the tail
    /// sentinel.
    #[track_caller]
    pub fn insert_node_after(&mut self, node: SentinelNode<T>, after: NodeId) -> NodeId {
        if after == self.head_sentinel {
            return self.insert_node_as_head(node);
        }
        if let Err(err) = self.check_element_node(after) {
            err.raise();
        }
        let next = self.next_of(after);
        let id = self.attach(after, next, node);
        self.depths.grow_tail();
        id
    }

    #[track_caller]
    pub fn insert_after(&mut self, after: NodeId, element: T) -> NodeId {
        self.insert_node_after(SentinelNode::new(element), after)
    }

    /// Links `node` in right before `before`, which may be the tail
    /// sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a node of this list, or is the head
    /// sentinel.
    #[track_caller]
    pub fn insert_node_before(&mut self, node: SentinelNode<T>, before: NodeId) -> NodeId {
        if before == self.tail_sentinel {
            return self.append_node(node);
        }
        if let Err(err) = self.check_element_node(before) {
            err.raise();
        }
        let previous = self.previous_of(before);
        if previous == self.head_sentinel {
            return self.insert_node_as_head(node);
        }
        let id = self.attach(previous, before, node);
        self.depths.grow_tail();
        id
    }

    /// Inserts an element right before `before` and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let mut list = SentinelList::from([1, 3]);
    /// let three = list.tail().unwrap();
    /// list.insert_before(three, 2);
    /// list.insert_before(list.tail_sentinel(), 4);
    /// assert_eq!(list.to_string(), "( 1, 2, 3, 4 )");
    /// ```
    #[track_caller]
    pub fn insert_before(&mut self, before: NodeId, element: T) -> NodeId {
        self.insert_node_before(SentinelNode::new(element), before)
    }

    /// Unlinks the first element node and returns it with its links
    /// cleared, or `None` if the list is empty.
    pub fn pop_first_node(&mut self) -> Option<SentinelNode<T>> {
        let head = self.head()?;
        let node = self.detach(head);
        self.depths.shrink_head();
        Some(node)
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_first_node(&mut self) -> SentinelNode<T> {
        self.pop_first_node()
            .unwrap_or_else(|| ListError::Empty.raise())
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.pop_first_node().map(SentinelNode::into_element)
    }

    /// Removes the first element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_first(&mut self) -> T {
        self.remove_first_node().into_element()
    }

    /// Unlinks the last element node and returns it with its links cleared,
    /// or `None` if the list is empty.
    pub fn pop_last_node(&mut self) -> Option<SentinelNode<T>> {
        let tail = self.tail()?;
        let node = self.detach(tail);
        self.depths.shrink_tail();
        Some(node)
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_last_node(&mut self) -> SentinelNode<T> {
        self.pop_last_node()
            .unwrap_or_else(|| ListError::Empty.raise())
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.pop_last_node().map(SentinelNode::into_element)
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_last(&mut self) -> T {
        self.remove_last_node().into_element()
    }

    /// Unlinks the element node `id` and returns it with its links cleared.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an element node of this list.
    #[track_caller]
    pub fn remove_node(&mut self, id: NodeId) -> SentinelNode<T> {
        self.try_remove_node(id).unwrap_or_else(|err| err.raise())
    }

    /// Like [`remove_node`](SentinelList::remove_node), but reports a bad
    /// handle instead of panicking.
    pub fn try_remove_node(&mut self, id: NodeId) -> Result<SentinelNode<T>, ListError> {
        self.check_element_node(id)?;
        let at_head = self.previous_of(id) == self.head_sentinel;
        let node = self.detach(id);
        if at_head {
            self.depths.shrink_head();
        } else {
            self.depths.shrink_tail();
        }
        Ok(node)
    }

    #[track_caller]
    pub fn remove(&mut self, id: NodeId) -> T {
        self.remove_node(id).into_element()
    }

    /// Removes the element node `id` and returns its element.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::{ListError, SentinelList};
    ///
    /// let mut list = SentinelList::from([1]);
    /// let sentinel = list.head_sentinel();
    /// assert_eq!(list.try_remove(sentinel), Err(ListError::SentinelNode(sentinel)));
    /// let one = list.head().unwrap();
    /// assert_eq!(list.try_remove(one), Ok(1));
    /// ```
    pub fn try_remove(&mut self, id: NodeId) -> Result<T, ListError> {
        self.try_remove_node(id).map(SentinelNode::into_element)
    }

    /// Links the head sentinel directly to the tail sentinel, then frees
    /// the nodes that were between them.
    pub fn remove_all(&mut self) {
        crate::trace!(len = self.len(), "removing all nodes");
        let mut current = self.next_of(self.head_sentinel);
        self.connect(self.head_sentinel, self.tail_sentinel);
        while current != self.tail_sentinel {
            let node = self.nodes.take(current);
            current = match node.next() {
                Some(next) => next,
                None => break,
            };
        }
        self.depths.reset();
    }

    /// Reverses the order of the elements in place. The sentinels stay at
    /// their ends: the former last element becomes the head sentinel's
    /// successor and the former first element the tail sentinel's
    /// predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let mut list = SentinelList::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.to_string(), "( 3, 2, 1 )");
    /// assert_eq!(list.node(list.head_sentinel()).unwrap().next(), list.head());
    /// ```
    pub fn reverse(&mut self) {
        let (Some(first), Some(last)) = (self.head(), self.tail()) else {
            return;
        };
        crate::trace!(len = self.len(), "reversing list");
        let tail_sentinel = self.tail_sentinel;
        let mut current = first;
        while current != tail_sentinel {
            let node = &mut self.nodes[current];
            let (previous, next) = (node.previous(), node.next());
            node.set_next(previous);
            node.set_previous(next);
            current = match next {
                Some(next) => next,
                None => break,
            };
        }
        self.connect(self.head_sentinel, last);
        self.connect(first, tail_sentinel);
        #[cfg(debug_assertions)]
        {
            assert_adjacent(&self.nodes, self.head_sentinel, last);
            assert_adjacent(&self.nodes, first, tail_sentinel);
        }
    }

    /// Replaces the elements in `range` with `elements`, as
    /// [`LinkedList::replace_subrange`](crate::NodeList::replace_subrange)
    /// does.
    ///
    /// # Panics
    ///
    /// Panics if either bound was produced by another list, if a bound node
    /// has been removed, or if `range.end` does not follow `range.start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let mut list = SentinelList::from([1, 2, 3, 4]);
    /// let all = list.start_index()..list.end_index();
    /// list.replace_subrange(all, [9, 9]);
    /// assert_eq!(list.to_string(), "( 9, 9 )");
    /// assert_eq!(list.len(), 2);
    /// ```
    #[track_caller]
    pub fn replace_subrange<I>(&mut self, range: Range<NodeIndex>, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.try_replace_subrange(range, elements) {
            err.raise();
        }
    }

    /// Like [`replace_subrange`](SentinelList::replace_subrange), but
    /// reports an invalid range instead of panicking. The list is unchanged
    /// on error.
    pub fn try_replace_subrange<I>(
        &mut self,
        range: Range<NodeIndex>,
        elements: I,
    ) -> Result<(), ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let removed = self.nodes_in(&range)?;
        let successor = range.end.node().unwrap_or(self.tail_sentinel);
        let previous = match range.start.node() {
            Some(start) => self.previous_of(start),
            None => self.previous_of(self.tail_sentinel),
        };
        let elements: Vec<T> = elements.into_iter().collect();
        crate::trace!(
            removed = removed.len(),
            inserted = elements.len(),
            "replacing subrange"
        );

        self.connect(previous, successor);
        for &id in &removed {
            self.nodes.take(id);
        }
        let inserted = elements.len();
        let mut after = previous;
        for element in elements {
            after = self.attach(after, successor, SentinelNode::new(element));
        }

        if previous == self.head_sentinel {
            self.depths.replace_at_head(removed.len(), inserted);
        } else {
            self.depths.replace_at_tail(removed.len(), inserted);
        }
        Ok(())
    }

    /// Collects the element nodes of `range` in order, validating both
    /// bounds.
    fn nodes_in(&self, range: &Range<NodeIndex>) -> Result<Vec<NodeId>, ListError> {
        self.check_index(&range.start)?;
        self.check_index(&range.end)?;
        for bound in [range.start.node(), range.end.node()].into_iter().flatten() {
            self.check_element_node(bound)?;
        }
        let end = range.end.node().unwrap_or(self.tail_sentinel);
        let mut nodes = Vec::new();
        let mut current = range.start.node().unwrap_or(self.tail_sentinel);
        while current != end {
            if current == self.tail_sentinel {
                return Err(ListError::InvalidRange);
            }
            nodes.push(current);
            current = self.next_of(current);
        }
        Ok(nodes)
    }

    /// The index of the first position (the end index if the list is empty).
    #[inline]
    pub fn start_index(&self) -> NodeIndex {
        NodeIndex::new(self.nodes.id(), self.depths.head(), self.head())
    }

    /// The index one past the last element.
    #[inline]
    pub fn end_index(&self) -> NodeIndex {
        NodeIndex::new(self.nodes.id(), self.depths.tail(), None)
    }

    /// The index following `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the end index, or does not denote a position in
    /// this list.
    #[track_caller]
    pub fn index_after(&self, index: NodeIndex) -> NodeIndex {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        match index.node() {
            Some(id) => index.step_forward(self.successor(id)),
            None => panic!("cannot advance past the end index"),
        }
    }

    /// The index preceding `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is the start index, or does not denote a position
    /// in this list.
    #[track_caller]
    pub fn index_before(&self, index: NodeIndex) -> NodeIndex {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        let previous = match index.node() {
            Some(id) => self.predecessor(id),
            None => self.tail(),
        };
        match previous {
            Some(previous) => index.step_backward(previous),
            None => panic!("cannot step back from the start index"),
        }
    }

    /// The index of the position `offset` steps from the start.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len`.
    #[track_caller]
    pub fn index_at(&self, offset: usize) -> NodeIndex {
        assert!(
            offset <= self.len(),
            "Cannot create an index at a nonexistent position"
        );
        (0..offset).fold(self.start_index(), |index, _| self.index_after(index))
    }

    /// Finds the index of the element node `id` by walking from the head.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.check_element_node(id).ok()?;
        let mut index = self.start_index();
        while let Some(current) = index.node() {
            if current == id {
                return Some(index);
            }
            index = index.step_forward(self.successor(current));
        }
        None
    }

    /// Returns the element at `index`, or `None` for the end index, a
    /// removed node, or an index of another list.
    pub fn get(&self, index: NodeIndex) -> Option<&T> {
        self.check_index(&index).ok()?;
        self.element(index.node()?)
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut T> {
        self.check_index(&index).ok()?;
        self.element_mut(index.node()?)
    }

    /// Provides a double-ended iterator that never visits the sentinels.
    #[inline]
    pub fn iter(&self) -> Iter<'_, SentinelNode<T>> {
        Iter::new(&self.nodes, self.head(), self.tail(), self.len())
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, SentinelNode<T>> {
        let (head, len) = (self.head(), self.len());
        IterMut::new(&mut self.nodes, head, len)
    }
}

impl<T> ops::Index<NodeIndex> for SentinelList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: NodeIndex) -> &T {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        match index.node() {
            Some(id) => self.nodes[id].element(),
            None => panic!("the end index has no element"),
        }
    }
}

impl<T> ops::IndexMut<NodeIndex> for SentinelList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: NodeIndex) -> &mut T {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        match index.node() {
            Some(id) => self.nodes[id].element_mut(),
            None => panic!("the end index has no element"),
        }
    }
}

impl<T: Debug> Debug for SentinelList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for SentinelList<T> {
    fn default() -> Self {
        Self::new()
    }
}
