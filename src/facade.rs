//! Stack, queue and double-ended queue behaviour over the lists.
//!
//! The traits add no invariants of their own: every method forwards to one
//! operation of the underlying container. A linked stack works at the head
//! (`insert_as_first`, `pop_first`, `first`); an array-backed stack works at
//! the end of the array, where removal is cheap. A queue appends at the tail
//! and removes at the head.
//!
//! The `remove_*` methods are the panicking counterparts of the `Option`
//! returning ones, for callers that know the container is not empty.

use std::collections::VecDeque;

use crate::cons::ConsList;
use crate::error::ListError;
use crate::list::NodeList;
use crate::node::{BackLink, Element, Link};
use crate::sentinel::SentinelList;

/// Last in, first out.
///
/// # Examples
///
/// ```
/// use linked_nodes::{ForwardList, Stack};
///
/// fn drain_stack<S: Stack<Item = i32>>(mut stack: S) -> Vec<i32> {
///     stack.push(1);
///     stack.push(2);
///     stack.push(3);
///     assert_eq!(stack.top(), Some(&3));
///     std::iter::from_fn(|| stack.pop()).collect()
/// }
///
/// assert_eq!(drain_stack(ForwardList::new()), vec![3, 2, 1]);
/// assert_eq!(drain_stack(Vec::new()), vec![3, 2, 1]);
/// ```
pub trait Stack {
    type Item;

    fn push(&mut self, item: Self::Item);

    /// Removes the most recently pushed item, or returns `None` if the stack
    /// is empty.
    fn pop(&mut self) -> Option<Self::Item>;

    fn top(&self) -> Option<&Self::Item>;

    /// Removes the most recently pushed item.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.
    #[track_caller]
    fn remove_top(&mut self) -> Self::Item {
        self.pop().unwrap_or_else(|| ListError::Empty.raise())
    }
}

/// First in, first out.
///
/// # Examples
///
/// ```
/// use linked_nodes::{Queue, SentinelList};
///
/// let mut queue = SentinelList::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.remove_front(), 'b');
/// assert_eq!(queue.dequeue(), None);
/// ```
pub trait Queue {
    type Item;

    fn enqueue(&mut self, item: Self::Item);

    /// Removes the oldest item, or returns `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<Self::Item>;

    fn front(&self) -> Option<&Self::Item>;

    /// Removes the oldest item.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[track_caller]
    fn remove_front(&mut self) -> Self::Item {
        self.dequeue().unwrap_or_else(|| ListError::Empty.raise())
    }
}

/// Insertion and removal at both ends.
pub trait Deque {
    type Item;

    fn push_first(&mut self, item: Self::Item);

    fn push_last(&mut self, item: Self::Item);

    fn pop_first(&mut self) -> Option<Self::Item>;

    fn pop_last(&mut self) -> Option<Self::Item>;

    fn first(&self) -> Option<&Self::Item>;

    fn last(&self) -> Option<&Self::Item>;
}

impl<N: Link + Element> Stack for NodeList<N> {
    type Item = N::Item;

    #[inline]
    fn push(&mut self, item: N::Item) {
        self.insert_as_first(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<N::Item> {
        NodeList::pop_first(self)
    }

    #[inline]
    fn top(&self) -> Option<&N::Item> {
        NodeList::first(self)
    }
}

impl<N: Link + Element> Queue for NodeList<N> {
    type Item = N::Item;

    #[inline]
    fn enqueue(&mut self, item: N::Item) {
        self.append(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<N::Item> {
        NodeList::pop_first(self)
    }

    #[inline]
    fn front(&self) -> Option<&N::Item> {
        NodeList::first(self)
    }
}

impl<N: BackLink + Element> Deque for NodeList<N> {
    type Item = N::Item;

    fn push_first(&mut self, item: N::Item) {
        self.insert_as_first(item);
    }

    fn push_last(&mut self, item: N::Item) {
        self.append(item);
    }

    fn pop_first(&mut self) -> Option<N::Item> {
        NodeList::pop_first(self)
    }

    fn pop_last(&mut self) -> Option<N::Item> {
        NodeList::pop_last(self)
    }

    fn first(&self) -> Option<&N::Item> {
        NodeList::first(self)
    }

    fn last(&self) -> Option<&N::Item> {
        NodeList::last(self)
    }
}

impl<T> Stack for SentinelList<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.insert_as_first(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        SentinelList::pop_first(self)
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        SentinelList::first(self)
    }
}

impl<T> Queue for SentinelList<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) {
        self.append(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        SentinelList::pop_first(self)
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        SentinelList::first(self)
    }
}

impl<T> Deque for SentinelList<T> {
    type Item = T;

    fn push_first(&mut self, item: T) {
        self.insert_as_first(item);
    }

    fn push_last(&mut self, item: T) {
        self.append(item);
    }

    fn pop_first(&mut self) -> Option<T> {
        SentinelList::pop_first(self)
    }

    fn pop_last(&mut self) -> Option<T> {
        SentinelList::pop_last(self)
    }

    fn first(&self) -> Option<&T> {
        SentinelList::first(self)
    }

    fn last(&self) -> Option<&T> {
        SentinelList::last(self)
    }
}

impl<T> Stack for ConsList<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        self.push_front(item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        ConsList::first(self)
    }
}

/// An array-backed stack grows and shrinks at the end.
impl<T> Stack for Vec<T> {
    type Item = T;

    #[inline]
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn top(&self) -> Option<&T> {
        <[T]>::last(self)
    }
}

impl<T> Queue for VecDeque<T> {
    type Item = T;

    #[inline]
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    #[inline]
    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }
}

impl<T> Deque for VecDeque<T> {
    type Item = T;

    fn push_first(&mut self, item: T) {
        self.push_front(item);
    }

    fn push_last(&mut self, item: T) {
        self.push_back(item);
    }

    fn pop_first(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn pop_last(&mut self) -> Option<T> {
        self.pop_back()
    }

    fn first(&self) -> Option<&T> {
        self.front()
    }

    fn last(&self) -> Option<&T> {
        self.back()
    }
}

#[cfg(test)]
mod tests {
    use super::{Deque, Queue, Stack};
    use crate::{ConsList, ForwardList, LinkedList, SentinelList};
    use std::collections::VecDeque;

    fn lifo<S: Stack<Item = u32>>(mut stack: S) {
        assert_eq!(stack.pop(), None);
        for item in 1..=4 {
            stack.push(item);
        }
        assert_eq!(stack.top(), Some(&4));
        assert_eq!(stack.remove_top(), 4);
        assert_eq!(stack.pop(), Some(3));
        stack.push(5);
        let rest: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(rest, vec![5, 2, 1]);
        assert_eq!(stack.top(), None);
    }

    fn fifo<Q: Queue<Item = u32>>(mut queue: Q) {
        assert_eq!(queue.dequeue(), None);
        for item in 1..=4 {
            queue.enqueue(item);
        }
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.remove_front(), 1);
        queue.enqueue(5);
        let rest: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
        assert_eq!(rest, vec![2, 3, 4, 5]);
    }

    fn both_ends<D: Deque<Item = u32>>(mut deque: D) {
        deque.push_last(2);
        deque.push_first(1);
        deque.push_last(3);
        assert_eq!((deque.first(), deque.last()), (Some(&1), Some(&3)));
        assert_eq!(deque.pop_last(), Some(3));
        assert_eq!(deque.pop_first(), Some(1));
        assert_eq!(deque.pop_first(), Some(2));
        assert_eq!(deque.pop_last(), None);
    }

    #[test]
    fn stacks() {
        lifo(ForwardList::new());
        lifo(LinkedList::new());
        lifo(SentinelList::new());
        lifo(ConsList::new());
        lifo(Vec::new());
    }

    #[test]
    fn queues() {
        fifo(ForwardList::new());
        fifo(LinkedList::new());
        fifo(SentinelList::new());
        fifo(VecDeque::new());
    }

    #[test]
    fn deques() {
        both_ends(LinkedList::new());
        both_ends(SentinelList::new());
        both_ends(VecDeque::new());
    }

    #[test]
    #[should_panic(expected = "the list is empty")]
    fn remove_top_on_empty_stack_panics() {
        Stack::remove_top(&mut ConsList::<u8>::new());
    }

    #[test]
    #[should_panic(expected = "the list is empty")]
    fn remove_front_on_empty_queue_panics() {
        Queue::remove_front(&mut VecDeque::<u8>::new());
    }
}
