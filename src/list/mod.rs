use std::fmt::{Debug, Formatter};
use std::ops;

use crate::error::ListError;
use crate::index::{Depths, NodeIndex};
use crate::iterator::{Iter, IterMut};
use crate::node::{BackLink, Element, ForwardNode, Link, Node, NodeId, NodePool};

pub mod iterator;

mod algorithms;
mod replace;

/// A singly linked [`NodeList`]: no backward iteration, no *O*(1) removal
/// at the tail.
pub type ForwardList<T> = NodeList<ForwardNode<T>>;

/// A doubly linked [`NodeList`].
pub type LinkedList<T> = NodeList<Node<T>>;

/// A linked list with `head` and `tail` handles and no sentinels.
///
/// The list owns its nodes through a [`NodePool`]. The chain of forward
/// links from `head` visits every node exactly once and ends at `tail`;
/// `tail` is only a shortcut for *O*(1) appends. With [`BackLink`] nodes
/// the backward links visit the same nodes in reverse.
///
/// The length is kept by depth counting (see [`NodeIndex`]), so
/// [`len`](NodeList::len) is *O*(1).
///
/// Operations that take a [`NodeId`] panic if the handle does not denote
/// a node currently in this list.
///
/// # Examples
///
/// ```
/// use linked_nodes::LinkedList;
///
/// let mut list = LinkedList::new();
/// let two = list.append(2);
/// list.insert_as_first(1);
/// list.insert_after(two, 3);
/// assert_eq!(list.to_string(), "( 1, 2, 3 )");
///
/// assert_eq!(list.remove(two), 2);
/// assert_eq!(list.len(), 2);
/// ```
pub struct NodeList<N> {
    nodes: NodePool<N>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    depths: Depths,
}

// private methods
impl<N: Link + Element> NodeList<N> {
    /// Checks that `index` was produced by this list.
    fn check_index(&self, index: &NodeIndex) -> Result<(), ListError> {
        if index.owner() == self.nodes.id() {
            Ok(())
        } else {
            Err(ListError::ForeignIndex)
        }
    }

    /// Stores `node` with both links cleared.
    fn store(&mut self, mut node: N) -> NodeId {
        node.set_next(None);
        node.set_previous(None);
        self.nodes.insert(node)
    }

    /// Removes a node that has already been taken out of the chain.
    fn release(&mut self, id: NodeId) -> N {
        let mut node = self.nodes.take(id);
        node.set_next(None);
        node.set_previous(None);
        node
    }

    /// Splices `id` in right after `previous`, or at the head if `previous`
    /// is `None`, without touching the depths.
    fn attach_after(&mut self, previous: Option<NodeId>, id: NodeId) {
        let next = match previous {
            Some(previous) => self.nodes[previous].next(),
            None => self.head,
        };
        self.nodes.link_next(id, next);
        match previous {
            Some(previous) => self.nodes.link_next(previous, Some(id)),
            None => {
                self.nodes[id].set_previous(None);
                self.head = Some(id);
            }
        }
        if next.is_none() {
            self.tail = Some(id);
        }
    }

    /// Takes `id` out of the chain given its predecessor, without touching
    /// the depths.
    fn detach_after(&mut self, previous: Option<NodeId>, id: NodeId) -> N {
        match previous {
            Some(previous) => {
                self.nodes.unlink_next(previous);
            }
            None => {
                let next = self.nodes[id].next();
                self.head = next;
                if let Some(next) = next {
                    self.nodes[next].set_previous(None);
                }
            }
        }
        if self.tail == Some(id) {
            self.tail = previous;
        }
        self.release(id)
    }
}

impl<N: Link + Element> NodeList<N> {
    /// Creates an empty list.
    ///
    /// # Examples
    /// ```
    /// use linked_nodes::ForwardList;
    /// let list: ForwardList<u32> = ForwardList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list whose pool holds `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodePool::with_capacity(capacity),
            head: None,
            tail: None,
            depths: Depths::default(),
        }
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// list.insert_as_first(2);
    /// list.append(3);
    /// list.insert_as_first(1);
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.iter().count(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// The handle of the first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// The handle of the last node, or `None` if the list is empty.
    #[inline]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Looks up a node of this list.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(id)
    }

    /// Returns `true` if `id` denotes a node currently in this list.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// The handle of the node after `id`, or `None` if `id` is the tail.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    #[track_caller]
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].next()
    }

    /// Provides a reference to the first element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn first(&self) -> Option<&N::Item> {
        self.head.map(|head| self.nodes[head].element())
    }

    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut N::Item> {
        let head = self.head?;
        Some(self.nodes[head].element_mut())
    }

    /// Provides a reference to the last element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn last(&self) -> Option<&N::Item> {
        self.tail.map(|tail| self.nodes[tail].element())
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut N::Item> {
        let tail = self.tail?;
        Some(self.nodes[tail].element_mut())
    }

    /// Returns the element of node `id`, or `None` if the handle is stale
    /// or foreign.
    #[inline]
    pub fn element(&self, id: NodeId) -> Option<&N::Item> {
        self.nodes.get(id).map(Element::element)
    }

    #[inline]
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut N::Item> {
        self.nodes.get_mut(id).map(Element::element_mut)
    }

    /// Links `node` in as the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_node_as_head(&mut self, node: N) -> NodeId {
        let id = self.store(node);
        self.attach_after(None, id);
        self.depths.grow_head();
        id
    }

    /// Adds an element first in the list and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// list.insert_as_first(2);
    /// list.insert_as_first(1);
    /// assert_eq!(list.first(), Some(&1));
    /// assert_eq!(list.last(), Some(&2));
    /// ```
    pub fn insert_as_first(&mut self, element: N::Item) -> NodeId {
        self.insert_node_as_head(N::from_element(element))
    }

    /// Links `node` in as the new tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn append_node(&mut self, node: N) -> NodeId {
        let id = self.store(node);
        self.attach_after(self.tail, id);
        self.depths.grow_tail();
        id
    }

    /// Appends an element to the back of the list and returns its handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// list.append(1);
    /// list.append(2);
    /// list.append(3);
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn append(&mut self, element: N::Item) -> NodeId {
        self.append_node(N::from_element(element))
    }

    /// Links `node` in right after the node `after`. Inserting after the
    /// tail is an append.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a node of this list.
    #[track_caller]
    pub fn insert_node_after(&mut self, node: N, after: NodeId) -> NodeId {
        if let Err(err) = self.nodes.try_get(after) {
            err.raise();
        }
        let id = self.store(node);
        self.attach_after(Some(after), id);
        self.depths.grow_tail();
        id
    }

    /// Inserts an element right after the node `after` and returns its
    /// handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 3]);
    /// let one = list.head().unwrap();
    /// list.insert_after(one, 2);
    /// assert_eq!(list.to_string(), "( 1, 2, 3 )");
    /// ```
    #[track_caller]
    pub fn insert_after(&mut self, after: NodeId, element: N::Item) -> NodeId {
        self.insert_node_after(N::from_element(element), after)
    }

    /// Unlinks the head node and returns it with its links cleared, or
    /// `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_first_node(&mut self) -> Option<N> {
        let head = self.head?;
        let node = self.detach_after(None, head);
        self.depths.shrink_head();
        Some(node)
    }

    /// Like [`pop_first_node`](NodeList::pop_first_node), for a list known
    /// to be non-empty.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_first_node(&mut self) -> N {
        self.pop_first_node()
            .unwrap_or_else(|| ListError::Empty.raise())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// assert_eq!(list.pop_first(), None);
    ///
    /// list.insert_as_first(1);
    /// list.insert_as_first(3);
    /// assert_eq!(list.pop_first(), Some(3));
    /// assert_eq!(list.pop_first(), Some(1));
    /// assert_eq!(list.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<N::Item> {
        self.pop_first_node().map(Element::into_element)
    }

    /// Removes the first element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty; use [`pop_first`](NodeList::pop_first)
    /// when that is not known.
    #[track_caller]
    pub fn remove_first(&mut self) -> N::Item {
        self.remove_first_node().into_element()
    }

    /// Unlinks node `id` and returns it with its links cleared.
    ///
    /// # Complexity
    ///
    /// *O*(1) for the head, and for any node of a [`BackLink`] kind.
    /// Otherwise the predecessor is searched from the head in *O*(*n*).
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    #[track_caller]
    pub fn remove_node(&mut self, id: NodeId) -> N {
        self.try_remove_node(id).unwrap_or_else(|err| err.raise())
    }

    /// Like [`remove_node`](NodeList::remove_node), but reports a bad handle
    /// instead of panicking. The list is unchanged on error.
    pub fn try_remove_node(&mut self, id: NodeId) -> Result<N, ListError> {
        self.nodes.try_get(id)?;
        if Some(id) == self.head {
            return Ok(self.remove_first_node());
        }
        let previous = N::predecessor(&self.nodes, self.head, id);
        debug_assert!(previous.is_some(), "a non-head node has a predecessor");
        let node = self.detach_after(previous, id);
        self.depths.shrink_tail();
        Ok(node)
    }

    /// Removes node `id` and returns its element.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    #[track_caller]
    pub fn remove(&mut self, id: NodeId) -> N::Item {
        self.remove_node(id).into_element()
    }

    /// Like [`remove`](NodeList::remove), but reports a bad handle instead
    /// of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::from([1, 2]);
    /// let one = list.head().unwrap();
    /// assert_eq!(list.try_remove(one), Ok(1));
    /// assert_eq!(list.try_remove(one), Err(ListError::StaleNode(one)));
    /// ```
    pub fn try_remove(&mut self, id: NodeId) -> Result<N::Item, ListError> {
        self.try_remove_node(id).map(Element::into_element)
    }

    /// Removes every element and resets the depth counters. Handles of the
    /// removed nodes become stale.
    ///
    /// # Complexity
    ///
    /// The list is detached in *O*(1); dropping the elements is *O*(*n*) in
    /// the live nodes only.
    pub fn remove_all(&mut self) {
        crate::trace!(len = self.len(), "removing all nodes");
        let mut current = self.head.take();
        self.tail = None;
        self.depths.reset();
        while let Some(id) = current {
            current = self.nodes.take(id).next();
        }
    }

    /// Reverses the order of the elements in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let mut list = ForwardList::from([1, 2, 3, 4]);
    /// list.reverse();
    /// assert_eq!(list.to_string(), "( 4, 3, 2, 1 )");
    /// ```
    pub fn reverse(&mut self) {
        crate::trace!(len = self.len(), "reversing list");
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            let next = node.next();
            node.set_next(previous);
            node.set_previous(next);
            previous = Some(id);
            current = next;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// The index of the first position (the end index if the list is empty).
    #[inline]
    pub fn start_index(&self) -> NodeIndex {
        NodeIndex::new(self.nodes.id(), self.depths.head(), self.head)
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
            Some(id) => index.step_forward(self.nodes[id].next()),
            None => panic!("cannot advance past the end index"),
        }
    }

    /// The index of the position `offset` steps from the start.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
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

    /// Finds the index of node `id` by walking from the head, or `None` if
    /// `id` is not in this list.
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        if !self.nodes.contains(id) {
            return None;
        }
        let mut index = self.start_index();
        while let Some(current) = index.node() {
            if current == id {
                return Some(index);
            }
            index = index.step_forward(self.nodes[current].next());
        }
        None
    }

    /// Returns the element at `index`, or `None` for the end index, a
    /// removed node, or an index of another list.
    pub fn get(&self, index: NodeIndex) -> Option<&N::Item> {
        self.check_index(&index).ok()?;
        self.element(index.node()?)
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut N::Item> {
        self.check_index(&index).ok()?;
        self.element_mut(index.node()?)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::ForwardList;
    ///
    /// let list = ForwardList::from([0, 1, 2]);
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(&self.nodes, self.head, self.tail, self.len())
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Complexity
    ///
    /// Creating the iterator walks the list once, *O*(*n*) in time and
    /// space; each step after that is *O*(1).
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, N> {
        let len = self.len();
        IterMut::new(&mut self.nodes, self.head, len)
    }
}

impl<N: BackLink + Element> NodeList<N> {
    /// The handle of the node before `id`, or `None` if `id` is the head.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this list.
    #[track_caller]
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].previous()
    }

    /// Links `node` in right before the node `before`. Inserting before the
    /// head makes `node` the new head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a node of this list.
    #[track_caller]
    pub fn insert_node_before(&mut self, node: N, before: NodeId) -> NodeId {
        match self.nodes[before].previous() {
            Some(previous) => self.insert_node_after(node, previous),
            None => self.insert_node_as_head(node),
        }
    }

    /// Inserts an element right before the node `before` and returns its
    /// handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 3]);
    /// let three = list.tail().unwrap();
    /// list.insert_before(three, 2);
    /// let one = list.head().unwrap();
    /// list.insert_before(one, 0);
    /// assert_eq!(list.to_string(), "( 0, 1, 2, 3 )");
    /// ```
    #[track_caller]
    pub fn insert_before(&mut self, before: NodeId, element: N::Item) -> NodeId {
        self.insert_node_before(N::from_element(element), before)
    }

    /// Unlinks the tail node and returns it with its links cleared, or
    /// `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_last_node(&mut self) -> Option<N> {
        let tail = self.tail?;
        let previous = self.nodes[tail].previous();
        let node = self.detach_after(previous, tail);
        self.depths.shrink_tail();
        Some(node)
    }

    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_last_node(&mut self) -> N {
        self.pop_last_node()
            .unwrap_or_else(|| ListError::Empty.raise())
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop_last(), None);
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.pop_last(), Some(3));
    /// ```
    pub fn pop_last(&mut self) -> Option<N::Item> {
        self.pop_last_node().map(Element::into_element)
    }

    /// Removes the last element and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_last(&mut self) -> N::Item {
        self.remove_last_node().into_element()
    }

    /// The index preceding `index`. The index before the end index is the
    /// tail, one level shallower than the tail depth.
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
            Some(id) => self.nodes[id].previous(),
            None => self.tail,
        };
        match previous {
            Some(previous) => index.step_backward(previous),
            None => panic!("cannot step back from the start index"),
        }
    }
}

impl<N: Link + Element> ops::Index<NodeIndex> for NodeList<N> {
    type Output = N::Item;

    #[track_caller]
    fn index(&self, index: NodeIndex) -> &N::Item {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        match index.node() {
            Some(id) => self.nodes[id].element(),
            None => panic!("the end index has no element"),
        }
    }
}

impl<N: Link + Element> ops::IndexMut<NodeIndex> for NodeList<N> {
    #[track_caller]
    fn index_mut(&mut self, index: NodeIndex) -> &mut N::Item {
        if let Err(err) = self.check_index(&index) {
            err.raise();
        }
        match index.node() {
            Some(id) => self.nodes[id].element_mut(),
            None => panic!("the end index has no element"),
        }
    }
}

impl<N: Link + Element> Debug for NodeList<N>
where
    N::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<N: Link + Element> Default for NodeList<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{ForwardList, LinkedList, NodeList};
    use crate::node::{BackLink, Element, Link, Node};
    use crate::ListError;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::iter::successors;

    /// Counts nodes by following forward links from the head, without
    /// consulting the depth counters.
    fn linked_len<N: Link + Element>(list: &NodeList<N>) -> usize {
        successors(list.head(), |&id| list.successor(id)).count()
    }

    fn back_linked_len<N: BackLink + Element>(list: &NodeList<N>) -> usize {
        successors(list.tail(), |&id| list.predecessor(id)).count()
    }

    #[test]
    fn list_create() {
        let mut list = LinkedList::<i32>::new();
        assert!(list.is_empty());
        list.append(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_last(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = ForwardList::new();
        list.append(DropChecker::new(1, &dropped));
        list.append(DropChecker::new(2, &dropped));
        list.append(DropChecker::new(3, &dropped));
        drop(list.pop_first());
        assert_eq!(dropped.borrow().as_slice(), &[1]);
        list.remove_all();
        let mut dropped = dropped.borrow().clone();
        dropped.sort_unstable();
        assert_eq!(dropped, vec![1, 2, 3]);
    }

    #[test]
    fn append_three() {
        let mut list = ForwardList::new();
        list.append(1);
        list.append(2);
        list.append(3);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_first_until_empty() {
        let mut list = ForwardList::from([1, 2, 3, 4, 5]);
        let mut removed = Vec::new();
        while !list.is_empty() {
            removed.push(list.remove_first());
        }
        assert_eq!(removed, vec![1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    #[should_panic(expected = "the list is empty")]
    fn remove_first_on_empty_panics() {
        ForwardList::<i32>::new().remove_first();
    }

    #[test]
    #[should_panic(expected = "the list is empty")]
    fn remove_last_on_empty_panics() {
        LinkedList::<i32>::new().remove_last();
    }

    #[test]
    fn reverse_is_an_involution() {
        fn check(mut list: ForwardList<i32>, expected: &[i32]) {
            let original = Vec::from_iter(list.iter().copied());
            let len = list.len();
            list.reverse();
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            list.reverse();
            assert_eq!(Vec::from_iter(list.iter().copied()), original);
            assert_eq!(list.len(), len);
        }
        check(ForwardList::from([1, 2, 3, 4]), &[4, 3, 2, 1]);
        check(ForwardList::from([1]), &[1]);
        check(ForwardList::new(), &[]);
    }

    #[test]
    fn reverse_keeps_back_links() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        list.reverse();
        assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec![1, 2, 3, 4]);
        assert_eq!(list.pop_last(), Some(1));
        assert_eq!(list.pop_first(), Some(4));
        assert_eq!(list.to_string(), "( 3, 2 )");
    }

    #[test]
    fn remove_all_is_idempotent() {
        let mut list = LinkedList::from([1, 2, 3]);
        let head = list.head().unwrap();
        list.remove_all();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.remove_all();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!list.contains_node(head));
        assert_eq!(list.start_index(), list.end_index());
    }

    #[test]
    fn remove_all_frees_the_live_chain() {
        let mut list = ForwardList::new();
        let ids: Vec<_> = (0..64).map(|i| list.append(i)).collect();
        for &id in &ids[..60] {
            list.remove(id);
        }
        list.remove_all();
        assert_eq!(list.nodes.len(), 0);
        assert!(ids.iter().all(|&id| !list.contains_node(id)));

        let fresh = list.append(7);
        assert!(list.contains_node(fresh));
        assert_eq!((list.first(), list.last()), (Some(&7), Some(&7)));
        assert_eq!(linked_len(&list), 1);
    }

    #[test]
    fn pop_and_reinsert_head_node() {
        let mut list = LinkedList::from([1, 2, 3]);
        let node = list.pop_first_node().unwrap();
        assert!(node.is_first() && node.is_last());
        assert_eq!(list.len(), 2);
        list.insert_node_as_head(node);
        assert_eq!(list.first(), Some(&1));
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec![3, 2, 1]);

        let mut list = ForwardList::from([4, 5]);
        let node = list.remove_first_node();
        list.insert_node_as_head(node);
        assert_eq!(list.first(), Some(&4));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_after_and_before() {
        let mut list = LinkedList::new();
        let b = list.append('b');
        let d = list.insert_after(b, 'd');
        assert_eq!(list.tail(), Some(d));
        list.insert_after(b, 'c');
        list.insert_before(b, 'a');
        let e = list.insert_after(d, 'e');
        assert_eq!(list.to_string(), "( a, b, c, d, e )");
        assert_eq!(list.tail(), Some(e));
        assert_eq!(list.len(), 5);
        assert_eq!(list.predecessor(b), list.head());
        assert_eq!(list.successor(d), Some(e));
        assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec!['e', 'd', 'c', 'b', 'a']);
    }

    #[test]
    fn remove_nodes_anywhere() {
        fn check<F>(mut list: ForwardList<i32>, pick: F, expected: &[i32])
        where
            F: Fn(&ForwardList<i32>) -> crate::NodeId,
        {
            let id = pick(&list);
            list.remove(id);
            assert_eq!(Vec::from_iter(list.iter().copied()), expected);
            assert_eq!(list.len(), expected.len());
            assert_eq!(list.last(), expected.last());
            assert!(!list.contains_node(id));
        }
        check(ForwardList::from([1, 2, 3]), |l| l.head().unwrap(), &[2, 3]);
        check(ForwardList::from([1, 2, 3]), |l| l.tail().unwrap(), &[1, 2]);
        check(
            ForwardList::from([1, 2, 3]),
            |l| l.successor(l.head().unwrap()).unwrap(),
            &[1, 3],
        );
        check(ForwardList::from([1]), |l| l.head().unwrap(), &[]);

        let mut list = LinkedList::from([1, 2, 3]);
        let two = list.successor(list.head().unwrap()).unwrap();
        assert_eq!(list.remove(two), 2);
        assert_eq!(Vec::from_iter(list.iter().rev().copied()), vec![3, 1]);
        let three = list.tail().unwrap();
        assert_eq!(list.remove(three), 3);
        assert_eq!(list.tail(), list.head());
    }

    #[test]
    fn stale_and_foreign_handles() {
        let mut list = LinkedList::from([1, 2]);
        let other = LinkedList::from([1, 2]);
        let one = list.head().unwrap();
        let foreign = other.head().unwrap();

        assert_eq!(list.try_remove(foreign), Err(ListError::ForeignNode(foreign)));
        assert_eq!(list.try_remove(one), Ok(1));
        assert_eq!(list.try_remove(one), Err(ListError::StaleNode(one)));
        assert_eq!(list.element(one), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    #[should_panic(expected = "no longer linked")]
    fn insert_after_stale_node_panics() {
        let mut list = ForwardList::from([1, 2]);
        let one = list.head().unwrap();
        list.remove(one);
        list.insert_after(one, 3);
    }

    #[test]
    fn indices() {
        let mut list = LinkedList::from([10, 20, 30]);
        list.insert_as_first(0);
        let start = list.start_index();
        let end = list.end_index();
        assert_eq!(start.depth(), -1);
        assert_eq!(end.depth(), 3);
        assert_eq!((end.depth() - start.depth()) as usize, list.len());

        let second = list.index_at(2);
        assert_eq!(list[second], 20);
        assert_eq!(list.index_before(end), list.index_at(3));
        assert_eq!(list.index_before(end).depth(), end.depth() - 1);
        assert_eq!(list.index_before(list.index_after(second)), second);
        assert_eq!(list.index_of(list.tail().unwrap()), Some(list.index_at(3)));
        assert_eq!(list.get(end), None);

        list[second] += 5;
        assert_eq!(list.get(second), Some(&25));
        if let Some(x) = list.get_mut(start) {
            *x = -1;
        }
        assert_eq!(list.first(), Some(&-1));
    }

    #[test]
    fn indices_of_other_lists_are_rejected() {
        let list = ForwardList::from([1]);
        let other = ForwardList::from([1]);
        assert_eq!(list.get(other.start_index()), None);
        assert_ne!(list.start_index(), other.start_index());
    }

    #[test]
    #[should_panic(expected = "belongs to another list")]
    fn indexing_with_a_foreign_index_panics() {
        let list = ForwardList::from([1]);
        let other = ForwardList::from([1]);
        let _ = list[other.start_index()];
    }

    #[test]
    #[should_panic(expected = "cannot advance past the end index")]
    fn index_after_end_panics() {
        let list = ForwardList::from([1]);
        list.index_after(list.end_index());
    }

    #[test]
    fn linked_len_sees_past_the_cached_count() {
        let mut list = LinkedList::from([1, 2, 3]);
        list.depths.shrink_tail();
        assert_eq!(list.len(), 2);
        // Iteration is bounded by the count, so only the links reveal the
        // third node.
        assert_eq!(list.iter().count(), 2);
        assert_eq!(linked_len(&list), 3);
        assert_eq!(back_linked_len(&list), 3);
    }

    #[test]
    fn count_matches_traversal_under_random_operations() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();
        for step in 0..2_000 {
            match rng.random_range(0..100) {
                0..=22 => {
                    list.append(step);
                    model.push_back(step);
                }
                23..=40 => {
                    list.insert_as_first(step);
                    model.push_front(step);
                }
                41..=54 => assert_eq!(list.pop_first(), model.pop_front()),
                55..=68 => assert_eq!(list.pop_last(), model.pop_back()),
                69..=80 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    let id = list.index_at(at).node().unwrap();
                    list.insert_after(id, step);
                    model.insert(at + 1, step);
                }
                81..=89 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    let id = list.index_at(at).node().unwrap();
                    assert_eq!(Some(list.remove(id)), model.remove(at));
                }
                90..=97 => {
                    let lower = rng.random_range(0..=model.len());
                    let upper = rng.random_range(lower..=model.len());
                    let count = rng.random_range(0..3);
                    let inserted: Vec<_> = (0..count).map(|k| step * 10 + k).collect();
                    let range = list.index_at(lower)..list.index_at(upper);
                    list.replace_subrange(range, inserted.iter().copied());
                    let rest = model.split_off(upper);
                    model.truncate(lower);
                    model.extend(inserted);
                    model.extend(rest);
                }
                98 => {
                    list.reverse();
                    model.make_contiguous().reverse();
                }
                99 => {
                    list.remove_all();
                    model.clear();
                }
                _ => {}
            }
            assert_eq!(list.len(), model.len());
            assert_eq!(linked_len(&list), model.len());
            assert_eq!(back_linked_len(&list), model.len());
            assert_eq!(list.end_index().depth() - list.start_index().depth(), model.len() as isize);
            assert_eq!(list.first(), model.front());
            assert_eq!(list.last(), model.back());
        }
        assert!(list.iter().eq(model.iter()));
    }

    #[test]
    fn forward_count_matches_traversal_under_random_operations() {
        let mut rng = SmallRng::seed_from_u64(0xf0);
        let mut list = ForwardList::new();
        let mut model = VecDeque::new();
        for step in 0..1_000 {
            match rng.random_range(0..10) {
                0..=2 => {
                    list.append(step);
                    model.push_back(step);
                }
                3 | 4 => {
                    list.insert_as_first(step);
                    model.push_front(step);
                }
                5 => assert_eq!(list.pop_first(), model.pop_front()),
                6 if !model.is_empty() => {
                    let at = rng.random_range(0..model.len());
                    let id = list.index_at(at).node().unwrap();
                    assert_eq!(Some(list.remove(id)), model.remove(at));
                }
                7 | 8 => {
                    let lower = rng.random_range(0..=model.len());
                    let upper = rng.random_range(lower..=model.len());
                    let range = list.index_at(lower)..list.index_at(upper);
                    list.replace_subrange(range, [step]);
                    let rest = model.split_off(upper);
                    model.truncate(lower);
                    model.push_back(step);
                    model.extend(rest);
                }
                9 => {
                    list.reverse();
                    model.make_contiguous().reverse();
                }
                _ => {}
            }
            assert_eq!(list.len(), model.len());
            assert_eq!(linked_len(&list), model.len());
            assert_eq!(list.last(), model.back());
        }
        assert!(list.iter().eq(model.iter()));
    }

    #[test]
    fn node_handles_stay_valid_across_unrelated_removals() {
        let mut list = LinkedList::new();
        let ids: Vec<_> = (0..5).map(|i| list.append(i)).collect();
        list.remove(ids[1]);
        list.remove(ids[3]);
        assert_eq!(list.element(ids[2]), Some(&2));
        assert_eq!(list.node(ids[4]).map(Node::element), Some(&4));
    }
}
