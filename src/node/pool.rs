//! Slot storage for list nodes.
//!
//! Every list owns one pool: a [`Slab`] of nodes plus one generation per
//! slab key. Keys are reused after removal, and a key's generation is bumped
//! whenever its node leaves, which is what lets a [`NodeId`] detect that it
//! went stale.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU32, Ordering};

use slab::Slab;

use crate::error::ListError;
use crate::node::{BackLink, Link, NodeId};

static NEXT_POOL_ID: AtomicU32 = AtomicU32::new(0);

/// Generation-checked storage for the nodes of one list.
///
/// # Examples
///
/// ```
/// use linked_nodes::{Link, Node, NodePool};
///
/// let mut pool = NodePool::new();
/// let a = pool.insert(Node::new(1));
/// let b = pool.insert(Node::new(2));
/// pool.link_next(a, Some(b));
/// assert_eq!(pool[a].next(), Some(b));
///
/// assert_eq!(pool.unlink_next(a), Some(b));
/// assert!(pool.is_last(a));
///
/// pool.remove(b);
/// assert!(pool.get(b).is_none());
/// ```
pub struct NodePool<N> {
    id: u32,
    slots: Slab<N>,
    // Indexed by slab key; never shrinks, so a key keeps its generation
    // while vacant.
    generations: Vec<u32>,
}

impl<N> NodePool<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed),
            slots: Slab::with_capacity(capacity),
            generations: Vec::with_capacity(capacity),
        }
    }

    /// Identifies this pool inside [`NodeId`]s and list indices.
    #[inline]
    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of nodes the pool can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node` and returns its handle. Vacant slots are reused first.
    ///
    /// # Panics
    ///
    /// Panics if the pool would exceed `u32::MAX` slots.
    pub fn insert(&mut self, node: N) -> NodeId {
        let key = self.slots.vacant_key();
        let slot = match u32::try_from(key) {
            Ok(slot) if slot != u32::MAX => slot,
            _ => panic!("node pool exhausted"),
        };
        if key == self.generations.len() {
            self.generations.push(0);
        }
        if self.slots.len() == self.slots.capacity() {
            crate::trace!(pool = self.id, slots = self.slots.len(), "node pool growing");
        }
        self.slots.insert(node);
        NodeId::new(self.id, slot, self.generations[key])
    }

    /// Maps a handle to its slab key if it names a live node of this pool.
    fn key(&self, id: NodeId) -> Result<usize, ListError> {
        if id.pool != self.id {
            return Err(ListError::ForeignNode(id));
        }
        let key = id.slot as usize;
        match self.generations.get(key) {
            Some(&generation) if generation == id.generation && self.slots.contains(key) => Ok(key),
            _ => Err(ListError::StaleNode(id)),
        }
    }

    /// Looks up a node, reporting why the handle is unusable if it is.
    pub fn try_get(&self, id: NodeId) -> Result<&N, ListError> {
        let key = self.key(id)?;
        self.slots.get(key).ok_or(ListError::StaleNode(id))
    }

    pub fn try_get_mut(&mut self, id: NodeId) -> Result<&mut N, ListError> {
        let key = self.key(id)?;
        self.slots.get_mut(key).ok_or(ListError::StaleNode(id))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.try_get(id).ok()
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        self.try_get_mut(id).ok()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.key(id).is_ok()
    }

    /// Removes a node and returns it, leaving its links as they were.
    pub fn try_remove(&mut self, id: NodeId) -> Result<N, ListError> {
        let key = self.key(id)?;
        let node = self.slots.try_remove(key).ok_or(ListError::StaleNode(id))?;
        self.generations[key] = id.generation.wrapping_add(1);
        Ok(node)
    }

    #[inline]
    pub fn remove(&mut self, id: NodeId) -> Option<N> {
        self.try_remove(id).ok()
    }

    /// Like [`NodePool::try_remove`], but a bad handle is a precondition
    /// violation.
    #[track_caller]
    pub(crate) fn take(&mut self, id: NodeId) -> N {
        self.try_remove(id).unwrap_or_else(|err| err.raise())
    }

    /// Drops every node. Generations survive, so handles taken before the
    /// call stay detectably stale.
    ///
    /// # Complexity
    ///
    /// *O*(*s*), where *s* is the largest number of slots the pool has ever
    /// held. Lists free their own chains node by node instead.
    pub fn clear(&mut self) {
        for (key, _) in self.slots.iter() {
            self.generations[key] = self.generations[key].wrapping_add(1);
        }
        self.slots.clear();
    }
}

impl<N: Link> NodePool<N> {
    /// Points `node` forward at `next`, replacing (not merging) its current
    /// forward link, and records `node` as the back-reference of `next`.
    ///
    /// A successor that was linked before becomes unreachable from `node`;
    /// unlinking it first is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale or foreign.
    #[track_caller]
    pub fn link_next(&mut self, node: NodeId, next: Option<NodeId>) {
        self[node].set_next(next);
        if let Some(next) = next {
            self[next].set_previous(Some(node));
        }
    }

    /// Takes the successor of `node` out of the chain, linking `node` to the
    /// successor's own successor, and clears the removed node's links.
    ///
    /// Returns the removed successor, or `None` (and does nothing) if `node`
    /// is the last one.
    #[track_caller]
    pub fn unlink_next(&mut self, node: NodeId) -> Option<NodeId> {
        let removed = self[node].next()?;
        let after = self[removed].next();
        self.link_next(node, after);
        let removed_node = &mut self[removed];
        removed_node.set_next(None);
        removed_node.set_previous(None);
        Some(removed)
    }

    #[inline]
    #[track_caller]
    pub fn is_last(&self, node: NodeId) -> bool {
        self[node].is_last()
    }

    /// Mutable borrows of the (at most) `len` nodes reachable forward from
    /// `front`, in chain order.
    ///
    /// # Complexity
    ///
    /// *O*(*len* + *s*), where *s* is the number of slots.
    pub(crate) fn chain_mut(&mut self, front: Option<NodeId>, len: usize) -> Vec<&mut N> {
        let mut keys = Vec::with_capacity(len);
        let mut current = front;
        while keys.len() < len {
            let Some(id) = current else { break };
            current = self[id].next();
            keys.push(id.slot as usize);
        }

        let mut by_key: Vec<Option<&mut N>> = Vec::new();
        by_key.resize_with(self.generations.len(), || None);
        for (key, node) in self.slots.iter_mut() {
            by_key[key] = Some(node);
        }
        keys.into_iter()
            .filter_map(|key| by_key[key].take())
            .collect()
    }
}

impl<N: BackLink> NodePool<N> {
    /// Takes `node` out of whatever chain it sits in, reconnecting its
    /// neighbours to each other, then clears its own links. Either neighbour
    /// may be absent.
    #[track_caller]
    pub fn unlink(&mut self, node: NodeId) {
        let (previous, next) = {
            let node = &self[node];
            (node.previous(), node.next())
        };
        match previous {
            Some(previous) => self.link_next(previous, next),
            None => {
                if let Some(next) = next {
                    self[next].set_previous(None);
                }
            }
        }
        let node = &mut self[node];
        node.set_next(None);
        node.set_previous(None);
    }

    #[inline]
    #[track_caller]
    pub fn is_first(&self, node: NodeId) -> bool {
        self[node].is_first()
    }
}

impl<N> Default for NodePool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for NodePool<N> {
    type Output = N;

    #[track_caller]
    fn index(&self, id: NodeId) -> &N {
        self.try_get(id).unwrap_or_else(|err| err.raise())
    }
}

impl<N> IndexMut<NodeId> for NodePool<N> {
    #[track_caller]
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.try_get_mut(id).unwrap_or_else(|err| err.raise())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ForwardNode, Node};

    #[test]
    fn insert_get_remove() {
        let mut pool = NodePool::new();
        let a = pool.insert(Node::new(10));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(a).map(|node| *node.element()), Some(10));
        assert_eq!(pool.remove(a).map(Node::into_element), Some(10));
        assert!(pool.is_empty());
        assert!(pool.remove(a).is_none());
    }

    #[test]
    fn stale_handles_are_detected_after_slot_reuse() {
        let mut pool = NodePool::new();
        let a = pool.insert(Node::new(1));
        pool.remove(a);
        let b = pool.insert(Node::new(2));
        assert_eq!(a.slot, b.slot);
        assert_eq!(pool.try_get(a).err(), Some(ListError::StaleNode(a)));
        assert_eq!(pool[b].element(), &2);
    }

    #[test]
    fn foreign_handles_are_detected() {
        let mut one = NodePool::new();
        let two = NodePool::<Node<i32>>::new();
        let a = one.insert(Node::new(1));
        assert_eq!(two.try_get(a).err(), Some(ListError::ForeignNode(a)));
    }

    #[test]
    fn clear_keeps_generations() {
        let mut pool = NodePool::new();
        let ids: Vec<_> = (0..4).map(|i| pool.insert(Node::new(i))).collect();
        pool.clear();
        assert!(pool.is_empty());
        let fresh = pool.insert(Node::new(9));
        assert_eq!(fresh.slot, 0);
        assert!(ids.iter().all(|id| !pool.contains(*id)));
    }

    #[test]
    fn link_and_unlink_doubly() {
        let mut pool = NodePool::new();
        let a = pool.insert(Node::new('a'));
        let b = pool.insert(Node::new('b'));
        let c = pool.insert(Node::new('c'));
        pool.link_next(a, Some(b));
        pool.link_next(b, Some(c));
        assert!(pool.is_first(a));
        assert!(pool.is_last(c));
        assert_eq!(pool[c].previous(), Some(b));

        pool.unlink(b);
        assert_eq!(pool[a].next(), Some(c));
        assert_eq!(pool[c].previous(), Some(a));
        assert!(pool.is_first(b) && pool.is_last(b));

        // Unlinking the ends leaves the neighbour without a link on that side.
        pool.unlink(a);
        assert!(pool.is_first(c));
        pool.unlink(c);
        assert!(pool.is_first(c) && pool.is_last(c));
    }

    #[test]
    fn unlink_next_is_a_no_op_at_the_end() {
        let mut pool = NodePool::new();
        let a = pool.insert(ForwardNode::new(1));
        let b = pool.insert(ForwardNode::new(2));
        let c = pool.insert(ForwardNode::new(3));
        pool.link_next(a, Some(b));
        pool.link_next(b, Some(c));

        assert_eq!(pool.unlink_next(a), Some(b));
        assert_eq!(pool[a].next(), Some(c));
        assert!(pool.is_last(b));

        assert_eq!(pool.unlink_next(a), Some(c));
        assert!(pool.is_last(a));
        assert_eq!(pool.unlink_next(a), None);
    }

    #[test]
    fn generations_follow_each_reused_slot() {
        let mut pool = NodePool::new();
        let a = pool.insert(Node::new(1));
        let b = pool.insert(Node::new(2));
        pool.remove(a);
        pool.remove(b);

        // The most recently freed slot is handed out first.
        let c = pool.insert(Node::new(3));
        let d = pool.insert(Node::new(4));
        assert_eq!((c.slot, c.generation), (b.slot, 1));
        assert_eq!((d.slot, d.generation), (a.slot, 1));

        pool.remove(c);
        let e = pool.insert(Node::new(5));
        assert_eq!((e.slot, e.generation), (b.slot, 2));
        assert!(!pool.contains(b) && !pool.contains(c));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn chain_mut_follows_links_not_slots() {
        let mut pool = NodePool::new();
        let a = pool.insert(ForwardNode::new(1));
        let b = pool.insert(ForwardNode::new(2));
        let c = pool.insert(ForwardNode::new(3));
        pool.link_next(c, Some(a));
        pool.link_next(a, Some(b));

        let chain = pool.chain_mut(Some(c), 3);
        let order: Vec<_> = chain.iter().map(|node| *node.element()).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(pool.chain_mut(Some(c), 2).len(), 2);
        assert!(pool.chain_mut(None, 3).is_empty());
    }

    #[test]
    #[should_panic(expected = "no longer linked")]
    fn indexing_a_stale_handle_panics() {
        let mut pool = NodePool::new();
        let a = pool.insert(Node::new(1));
        pool.remove(a);
        let _ = &pool[a];
    }
}
