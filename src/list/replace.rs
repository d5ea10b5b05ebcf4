use std::ops::Range;

use crate::error::ListError;
use crate::index::NodeIndex;
use crate::list::NodeList;
use crate::node::{Element, Link, NodeId};

impl<N: Link + Element> NodeList<N> {
    /// Replaces the elements in `range` with `elements`.
    ///
    /// Every node from `range.start` up to, but not including, `range.end`
    /// is removed, and the new elements are linked in at that position in
    /// iteration order. An empty range (`start == end`) only inserts, right
    /// before `range.end`.
    ///
    /// Handles of the removed nodes become stale; every other handle stays
    /// valid.
    ///
    /// # Complexity
    ///
    /// *O*(*r* + *m*) for *r* removed and *m* inserted elements, plus the
    /// predecessor search of the node kind when `range.start` is neither the
    /// head nor the end of the list.
    ///
    /// # Panics
    ///
    /// Panics if either bound was produced by another list, if a bound node
    /// has been removed, or if `range.end` does not follow `range.start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3, 4]);
    /// let range = list.index_at(1)..list.index_at(3);
    /// list.replace_subrange(range, [7, 8, 9]);
    /// assert_eq!(list.to_string(), "( 1, 7, 8, 9, 4 )");
    ///
    /// let all = list.start_index()..list.end_index();
    /// list.replace_subrange(all, [0]);
    /// assert_eq!(list.to_string(), "( 0 )");
    /// ```
    #[track_caller]
    pub fn replace_subrange<I>(&mut self, range: Range<NodeIndex>, elements: I)
    where
        I: IntoIterator<Item = N::Item>,
    {
        if let Err(err) = self.try_replace_subrange(range, elements) {
            err.raise();
        }
    }

    /// Like [`replace_subrange`](NodeList::replace_subrange), but reports
    /// an invalid range instead of panicking. The list is unchanged on
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_nodes::{ForwardList, ListError};
    ///
    /// let mut list = ForwardList::from([1, 2, 3]);
    /// let backwards = list.end_index()..list.start_index();
    /// assert_eq!(
    ///     list.try_replace_subrange(backwards, [0]),
    ///     Err(ListError::InvalidRange),
    /// );
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn try_replace_subrange<I>(
        &mut self,
        range: Range<NodeIndex>,
        elements: I,
    ) -> Result<(), ListError>
    where
        I: IntoIterator<Item = N::Item>,
    {
        let removed = self.nodes_in(&range)?;
        let previous = match range.start.node() {
            Some(start) if Some(start) == self.head => None,
            Some(start) => N::predecessor(&self.nodes, self.head, start),
            None => self.tail,
        };
        let successor = range.end.node();
        let elements: Vec<N::Item> = elements.into_iter().collect();
        crate::trace!(
            removed = removed.len(),
            inserted = elements.len(),
            "replacing subrange"
        );

        // Close the gap first, then free the removed nodes.
        match previous {
            Some(previous) => self.nodes.link_next(previous, successor),
            None => {
                self.head = successor;
                if let Some(successor) = successor {
                    self.nodes[successor].set_previous(None);
                }
            }
        }
        if successor.is_none() {
            self.tail = previous;
        }
        for &id in &removed {
            self.nodes.take(id);
        }

        let inserted = elements.len();
        let mut after = previous;
        for element in elements {
            let id = self.store(N::from_element(element));
            self.attach_after(after, id);
            after = Some(id);
        }

        if previous.is_none() {
            self.depths.replace_at_head(removed.len(), inserted);
        } else {
            self.depths.replace_at_tail(removed.len(), inserted);
        }
        Ok(())
    }

    /// Collects the nodes of `range` in order, validating both bounds.
    fn nodes_in(&self, range: &Range<NodeIndex>) -> Result<Vec<NodeId>, ListError> {
        self.check_index(&range.start)?;
        self.check_index(&range.end)?;
        for bound in [range.start.node(), range.end.node()].into_iter().flatten() {
            self.nodes.try_get(bound)?;
        }
        let mut nodes = Vec::new();
        let mut current = range.start.node();
        while current != range.end.node() {
            let id = current.ok_or(ListError::InvalidRange)?;
            nodes.push(id);
            current = self.nodes[id].next();
        }
        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ForwardList, LinkedList, ListError};

    fn contents<N>(list: &crate::NodeList<N>) -> Vec<i32>
    where
        N: crate::Link + crate::Element<Item = i32>,
    {
        list.iter().copied().collect()
    }

    #[test]
    fn replace_whole_list() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        let range = list.start_index()..list.end_index();
        list.replace_subrange(range, [9, 9]);
        assert_eq!(contents(&list), vec![9, 9]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().rev().count(), 2);
    }

    #[test]
    fn replace_with_nothing_empties() {
        let mut list = ForwardList::from([1, 2, 3]);
        let range = list.start_index()..list.end_index();
        list.replace_subrange(range, []);
        assert!(list.is_empty());
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        list.append(5);
        assert_eq!(contents(&list), vec![5]);
    }

    #[test]
    fn replace_prefix() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        let range = list.start_index()..list.index_at(2);
        list.replace_subrange(range, [7]);
        assert_eq!(contents(&list), vec![7, 3, 4]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.first(), Some(&7));
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 7]);
    }

    #[test]
    fn replace_forward_prefix_moves_the_head() {
        let mut list = ForwardList::from([1, 2, 3, 4]);
        let tail = list.tail().unwrap();
        let range = list.index_at(0)..list.index_at(2);
        list.replace_subrange(range, [5, 6, 7]);
        assert_eq!(contents(&list), vec![5, 6, 7, 3, 4]);
        assert_eq!(list.tail(), Some(tail));
        assert_eq!(list.first(), Some(&5));
        assert_eq!(list.end_index().depth() - list.start_index().depth(), 5);
        assert_eq!(list.start_index().depth(), -1);
    }

    #[test]
    fn replace_suffix() {
        let mut list = ForwardList::from([1, 2, 3, 4]);
        let range = list.index_at(1)..list.end_index();
        list.replace_subrange(range, [5, 6, 7, 8]);
        assert_eq!(contents(&list), vec![1, 5, 6, 7, 8]);
        assert_eq!(list.last(), Some(&8));
        list.append(9);
        assert_eq!(list.len(), 6);
        assert_eq!(list.iter().count(), 6);
    }

    #[test]
    fn empty_range_inserts() {
        let mut list = LinkedList::from([1, 4]);
        let at = list.index_at(1);
        list.replace_subrange(at..at, [2, 3]);
        assert_eq!(contents(&list), vec![1, 2, 3, 4]);

        let start = list.start_index();
        list.replace_subrange(start..start, [0]);
        let end = list.end_index();
        list.replace_subrange(end..end, [5]);
        assert_eq!(contents(&list), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 6);
        assert_eq!(list.end_index().depth() - list.start_index().depth(), 6);

        let mut empty = ForwardList::new();
        let end = empty.end_index();
        empty.replace_subrange(end..end, [1, 2]);
        assert_eq!(contents(&empty), vec![1, 2]);
    }

    #[test]
    fn removed_handles_become_stale() {
        let mut list = LinkedList::from([1, 2, 3]);
        let two = list.index_at(1);
        let three = list.tail().unwrap();
        list.replace_subrange(two..list.index_at(2), [20]);
        assert_eq!(list.get(two), None);
        assert_eq!(list.element(three), Some(&3));
        assert_eq!(list.predecessor(three).and_then(|id| list.element(id)), Some(&20));
    }

    #[test]
    fn invalid_ranges_leave_the_list_unchanged() {
        let mut list = LinkedList::from([1, 2, 3]);
        let other = LinkedList::from([1, 2, 3]);

        let backwards = list.index_at(2)..list.index_at(1);
        assert_eq!(
            list.try_replace_subrange(backwards, [0]),
            Err(ListError::InvalidRange)
        );
        let foreign = other.start_index()..list.end_index();
        assert_eq!(
            list.try_replace_subrange(foreign, [0]),
            Err(ListError::ForeignIndex)
        );
        assert_eq!(contents(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    #[should_panic(expected = "does not follow its lower bound")]
    fn backwards_range_panics() {
        let mut list = ForwardList::from([1, 2]);
        let range = list.end_index()..list.start_index();
        list.replace_subrange(range, [0]);
    }
}
