//! Linked lists built from explicit, linkable nodes.
//!
//! The crate provides two containers over the same node abstraction:
//!
//! - [`NodeList`]: a list with `head` and `tail` handles, either singly
//!   linked ([`ForwardList`]) or doubly linked ([`LinkedList`]);
//! - [`SentinelList`]: a doubly linked list bounded by two permanent,
//!   payload-less sentinel nodes, so no operation special-cases the empty
//!   list.
//!
//! Both count their elements by depth, giving an *O*(1) length and
//! comparable positions ([`NodeIndex`]). [`Stack`], [`Queue`] and [`Deque`]
//! put the usual faces on them, and [`ConsList`] is a value-type list for
//! when no handles are needed.
//!
//! Here is a quick example showing how the lists work.
//!
//! ```
//! use linked_nodes::LinkedList;
//!
//! let mut list = LinkedList::from_iter([1, 2, 4]);
//!
//! let four = list.tail().unwrap();
//! list.insert_before(four, 3); // insert 3 right before 4
//! list.insert_as_first(0);
//! assert_eq!(list.to_string(), "( 0, 1, 2, 3, 4 )");
//!
//! let two = list.index_at(2); // position 2, and remove it
//! assert_eq!(list.remove(two.node().unwrap()), 2);
//! assert_eq!(list.len(), 4);
//!
//! list.reverse();
//! assert_eq!(Vec::from_iter(list), vec![4, 3, 1, 0]);
//! ```
//!
//! # Memory Layout
//!
//! Every list owns a [`NodePool`], a [`slab`] of node slots. Links are
//! [`NodeId`] handles into that arena rather than pointers:
//! ```text
//!   NodePool slots                                  NodeList
//! ┌────────────────┬────────────────┬───────────┐   ╔═══════════╗
//! │ Node 0         │ Node 1         │ (free)    │   ║   head    ║ ──→ slot 1
//! │  next ──→ ∅    │  next ──→ 0    │  gen 3    │   ╟───────────╢
//! │  prev ──→ 1    │  prev ──→ ∅    │           │   ║   tail    ║ ──→ slot 0
//! │  payload T     │  payload T     │           │   ╟───────────╢
//! │  gen 0         │  gen 1         │           │   ║  depths   ║
//! └────────────────┴────────────────┴───────────┘   ╚═══════════╝
//! ```
//! A node is alive while it is in the arena and reachable from the head;
//! backward links and the `tail` handle never keep anything alive. Freeing a
//! slot bumps its generation, so a [`NodeId`] kept past the removal of its
//! node is detected on the next lookup instead of reaching whatever reuses
//! the slot.
//!
//! The list carries two depth counters, `head` and `tail`. Inserting at the
//! head decrements `head`, every other insertion increments `tail`, and
//! removals do the opposite, so the length is `tail - head` at all times.
//!
//! # Errors
//!
//! Operations with a precondition (a non-empty list, a live handle of this
//! list, a non-sentinel node) panic when it does not hold. The `pop_*`
//! methods return `Option` instead, and `try_*` methods return a
//! [`ListError`].
//!
//! # Features
//!
//! - `tracing` (default): emits `trace` events for bulk structural
//!   operations through the [`tracing`](https://docs.rs/tracing) crate.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

pub(crate) use trace;

mod algorithms;
pub mod cons;
mod error;
pub mod facade;
mod index;
pub mod iterator;
pub mod list;
pub mod node;
pub mod sentinel;

pub use cons::ConsList;
pub use error::ListError;
pub use facade::{Deque, Queue, Stack};
pub use index::NodeIndex;
pub use iterator::{Iter, IterMut};
pub use list::{ForwardList, LinkedList, NodeList};
pub use node::{BackLink, Element, ForwardNode, Link, Node, NodeId, NodePool, SentinelNode};
pub use sentinel::SentinelList;
