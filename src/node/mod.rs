//! Linkable nodes.
//!
//! A node knows its forward link and, depending on its kind, its backward
//! link. Links are [`NodeId`]s into the [`NodePool`] that owns the node, so
//! a link never keeps a node alive on its own: a node lives exactly as long
//! as its list keeps it in the pool.
//!
//! The capabilities are split into traits so that list algorithms can be
//! written once and composed per node kind:
//! - [`Link`]: a forward link, plus the hook that records a back-reference;
//! - [`BackLink`]: a readable backward link, enabling *O*(1) removal of the
//!   last node and backward iteration;
//! - [`Element`]: a payload.

use std::fmt;

use crate::error::ListError;

pub use pool::NodePool;

pub mod pool;

/// A generation-checked handle to a node in a [`NodePool`].
///
/// A handle stays valid until its node is removed. Afterwards every lookup
/// through it fails with [`ListError::StaleNode`], even if the slot has been
/// reused by a newer node. Handles from another pool fail with
/// [`ListError::ForeignNode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) pool: u32,
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(pool: u32, slot: u32, generation: u32) -> Self {
        Self {
            pool,
            slot,
            generation,
        }
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{}@{})", self.pool, self.slot, self.generation)
    }
}

/// A node with a forward link.
pub trait Link: Sized {
    /// Returns the successor, or `None` at the end of the chain.
    fn next(&self) -> Option<NodeId>;

    /// Replaces the forward link.
    fn set_next(&mut self, next: Option<NodeId>);

    /// Records the node that now links forward to this one. Nodes that keep
    /// no back-reference ignore it.
    fn set_previous(&mut self, previous: Option<NodeId>);

    /// Finds the node whose forward link is `id`, in the chain starting at
    /// `head`.
    ///
    /// Returns `None` when `id` is the head.
    fn predecessor(nodes: &NodePool<Self>, head: Option<NodeId>, id: NodeId) -> Option<NodeId>;

    /// Returns `true` if there is no successor.
    #[inline]
    fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// A node that can also be followed backward.
pub trait BackLink: Link {
    /// Returns the predecessor, or `None` at the start of the chain.
    fn previous(&self) -> Option<NodeId>;

    /// Returns `true` if there is no predecessor.
    #[inline]
    fn is_first(&self) -> bool {
        self.previous().is_none()
    }
}

/// A node carrying a payload.
pub trait Element: Sized {
    /// The payload type.
    type Item;

    /// Creates an unlinked node holding `item`.
    fn from_element(item: Self::Item) -> Self;

    fn element(&self) -> &Self::Item;

    fn element_mut(&mut self) -> &mut Self::Item;

    fn into_element(self) -> Self::Item;
}

/// A singly linked node: it only knows its successor.
///
/// # Examples
///
/// ```
/// use linked_nodes::{ForwardList, ForwardNode};
///
/// let mut list = ForwardList::new();
/// list.append_node(ForwardNode::new(1));
/// let node = list.pop_first_node().unwrap();
/// assert_eq!(node.into_element(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ForwardNode<T> {
    next: Option<NodeId>,
    element: T,
}

impl<T> ForwardNode<T> {
    pub fn new(element: T) -> Self {
        Self {
            next: None,
            element,
        }
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> Link for ForwardNode<T> {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    #[inline]
    fn set_previous(&mut self, _previous: Option<NodeId>) {}

    /// Walks forward from `head`: *O*(*n*).
    fn predecessor(nodes: &NodePool<Self>, head: Option<NodeId>, id: NodeId) -> Option<NodeId> {
        let mut current = head;
        while let Some(candidate) = current {
            let next = nodes[candidate].next;
            if next == Some(id) {
                return Some(candidate);
            }
            current = next;
        }
        None
    }
}

impl<T> Element for ForwardNode<T> {
    type Item = T;

    #[inline]
    fn from_element(item: T) -> Self {
        Self::new(item)
    }

    #[inline]
    fn element(&self) -> &T {
        &self.element
    }

    #[inline]
    fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    #[inline]
    fn into_element(self) -> T {
        self.element
    }
}

/// A doubly linked node. The backward link is a plain handle and never
/// owns its target.
#[derive(Debug, Clone)]
pub struct Node<T> {
    next: Option<NodeId>,
    previous: Option<NodeId>,
    element: T,
}

impl<T> Node<T> {
    pub fn new(element: T) -> Self {
        Self {
            next: None,
            previous: None,
            element,
        }
    }

    pub fn element(&self) -> &T {
        &self.element
    }

    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    #[inline]
    fn set_previous(&mut self, previous: Option<NodeId>) {
        self.previous = previous;
    }

    #[inline]
    fn predecessor(nodes: &NodePool<Self>, _head: Option<NodeId>, id: NodeId) -> Option<NodeId> {
        nodes[id].previous
    }
}

impl<T> BackLink for Node<T> {
    #[inline]
    fn previous(&self) -> Option<NodeId> {
        self.previous
    }
}

impl<T> Element for Node<T> {
    type Item = T;

    #[inline]
    fn from_element(item: T) -> Self {
        Self::new(item)
    }

    #[inline]
    fn element(&self) -> &T {
        &self.element
    }

    #[inline]
    fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    #[inline]
    fn into_element(self) -> T {
        self.element
    }
}

/// A doubly linked node that is either an element holder or a payload-less
/// sentinel bounding a [`SentinelList`](crate::SentinelList).
///
/// Reading the payload of a sentinel is a programming error: [`element`]
/// panics with [`ListError::EmptyAccess`], [`try_element`] reports it.
///
/// [`element`]: SentinelNode::element
/// [`try_element`]: SentinelNode::try_element
#[derive(Debug, Clone)]
pub struct SentinelNode<T> {
    next: Option<NodeId>,
    previous: Option<NodeId>,
    element: Option<T>,
}

impl<T> SentinelNode<T> {
    pub fn new(element: T) -> Self {
        Self {
            next: None,
            previous: None,
            element: Some(element),
        }
    }

    pub(crate) fn sentinel() -> Self {
        Self {
            next: None,
            previous: None,
            element: None,
        }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.element.is_none()
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ListError::EmptyAccess`] if this is a sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::SentinelList;
    ///
    /// let list = SentinelList::from([7]);
    /// let head = list.head().unwrap();
    /// assert_eq!(list.node(head).unwrap().element(), &7);
    /// ```
    #[track_caller]
    pub fn element(&self) -> &T {
        match &self.element {
            Some(element) => element,
            None => ListError::EmptyAccess.raise(),
        }
    }

    /// Returns the payload, or [`ListError::EmptyAccess`] for a sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::{ListError, SentinelList};
    ///
    /// let list = SentinelList::<i32>::new();
    /// let sentinel = list.node(list.head_sentinel()).unwrap();
    /// assert_eq!(sentinel.try_element(), Err(ListError::EmptyAccess));
    /// ```
    pub fn try_element(&self) -> Result<&T, ListError> {
        self.element.as_ref().ok_or(ListError::EmptyAccess)
    }

    /// Consumes the node and returns its payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ListError::EmptyAccess`] if this is a sentinel.
    #[track_caller]
    pub fn into_element(self) -> T {
        match self.element {
            Some(element) => element,
            None => ListError::EmptyAccess.raise(),
        }
    }

    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }
}

impl<T> Link for SentinelNode<T> {
    #[inline]
    fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }

    #[inline]
    fn set_previous(&mut self, previous: Option<NodeId>) {
        self.previous = previous;
    }

    #[inline]
    fn predecessor(nodes: &NodePool<Self>, _head: Option<NodeId>, id: NodeId) -> Option<NodeId> {
        nodes[id].previous
    }
}

impl<T> BackLink for SentinelNode<T> {
    #[inline]
    fn previous(&self) -> Option<NodeId> {
        self.previous
    }
}

impl<T> Element for SentinelNode<T> {
    type Item = T;

    #[inline]
    fn from_element(item: T) -> Self {
        Self::new(item)
    }

    #[track_caller]
    fn element(&self) -> &T {
        SentinelNode::element(self)
    }

    #[track_caller]
    fn element_mut(&mut self) -> &mut T {
        match &mut self.element {
            Some(element) => element,
            None => ListError::EmptyAccess.raise(),
        }
    }

    #[track_caller]
    fn into_element(self) -> T {
        SentinelNode::into_element(self)
    }
}
