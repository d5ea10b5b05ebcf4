//! Depth counting.
//!
//! A list keeps two integers, `head` and `tail`. Insertions at the head
//! move `head` down, removals at the head move it up; everything else
//! (appends, removals at the tail, and insertions or removals in the
//! middle, which cannot tell in *O*(1) whether they are nearer the head)
//! moves `tail`. The length is always `tail - head`.
//!
//! A [`NodeIndex`] is the depth of a position together with the node at
//! that position. The first node sits at depth `head`, each successor one
//! deeper, and the end position sits at depth `tail`.
//!
//! # Stale indices
//!
//! An index taken before an insertion or removal in the middle of the list
//! may describe a different depth than a freshly produced index for the same
//! node; comparing the two is meaningless. Indices whose node was removed are
//! detected when dereferenced, since node handles are generation-checked.

use std::cmp::Ordering;

use crate::node::NodeId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Depths {
    head: isize,
    tail: isize,
}

impl Depths {
    #[inline]
    pub(crate) fn head(&self) -> isize {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> isize {
        self.tail
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        debug_assert!(self.tail >= self.head);
        (self.tail - self.head) as usize
    }

    #[inline]
    pub(crate) fn grow_head(&mut self) {
        self.head -= 1;
    }

    #[inline]
    pub(crate) fn shrink_head(&mut self) {
        self.head += 1;
    }

    #[inline]
    pub(crate) fn grow_tail(&mut self) {
        self.tail += 1;
    }

    #[inline]
    pub(crate) fn shrink_tail(&mut self) {
        self.tail -= 1;
    }

    /// Accounts for `removed` nodes replaced by `inserted` ones at the head.
    pub(crate) fn replace_at_head(&mut self, removed: usize, inserted: usize) {
        self.head += removed as isize - inserted as isize;
    }

    /// Accounts for `removed` nodes replaced by `inserted` ones anywhere else.
    pub(crate) fn replace_at_tail(&mut self, removed: usize, inserted: usize) {
        self.tail += inserted as isize - removed as isize;
    }

    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A position in one list, comparable in *O*(1).
///
/// Produced by the list (`start_index`, `end_index`, `index_after`, ...),
/// never stored by it. The first node sits at the list's head depth and the
/// end position at its tail depth; an index taken before an insertion or
/// removal in the middle of the list is stale and must not be compared with
/// fresh ones.
///
/// Indices remember which list produced them: indices from different lists
/// are never equal and have no ordering.
///
/// # Examples
///
/// ```
/// use linked_nodes::LinkedList;
///
/// let list = LinkedList::from([1, 2, 3]);
/// let start = list.start_index();
/// let second = list.index_after(start);
/// assert!(start < second);
/// assert_eq!(list[second], 2);
/// assert_eq!(list.index_after(list.index_after(second)), list.end_index());
///
/// let other = LinkedList::from([1, 2, 3]);
/// assert_ne!(other.start_index(), start);
/// assert_eq!(other.start_index().partial_cmp(&start), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NodeIndex {
    owner: u32,
    depth: isize,
    node: Option<NodeId>,
}

impl NodeIndex {
    #[inline]
    pub(crate) fn new(owner: u32, depth: isize, node: Option<NodeId>) -> Self {
        Self { owner, depth, node }
    }

    #[inline]
    pub(crate) fn owner(&self) -> u32 {
        self.owner
    }

    /// The depth of this position.
    #[inline]
    pub fn depth(&self) -> isize {
        self.depth
    }

    /// The node at this position, or `None` for the end position.
    #[inline]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The position one step forward, given the successor of this position.
    #[inline]
    pub(crate) fn step_forward(self, next: Option<NodeId>) -> Self {
        Self::new(self.owner, self.depth + 1, next)
    }

    /// The position one step backward, given the predecessor of this position.
    #[inline]
    pub(crate) fn step_backward(self, previous: NodeId) -> Self {
        Self::new(self.owner, self.depth - 1, Some(previous))
    }

    fn same_position(&self, other: &Self) -> bool {
        (self.node.is_some() && self.node == other.node) || self.depth == other.depth
    }
}

impl PartialEq for NodeIndex {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.same_position(other)
    }
}

impl PartialOrd for NodeIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.owner != other.owner {
            return None;
        }
        if self.same_position(other) {
            return Some(Ordering::Equal);
        }
        Some(self.depth.cmp(&other.depth))
    }
}
