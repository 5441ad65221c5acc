//! Doubly-linked list with sentinel nodes and arena-backed storage.
//!
//! Two permanent sentinels bracket the elements: `head` before the first,
//! `tail` after the last (and serving as [`end()`](DoublyLinkedList::end)).
//! Every insert and erase is the same splice between two existing nodes,
//! with no empty-list special case.
//!
//! Positions are [`NodeRef`] handles. A handle keeps denoting its element
//! until that element is erased; after that it is stale and every operation
//! reports [`Error::InvalidPosition`] for it.
//!
//! # Example
//!
//! ```
//! use nexus_linear::{DoublyLinkedList, Error};
//!
//! let mut list = DoublyLinkedList::new();
//! let a = list.push_back(1).unwrap();
//! let b = list.push_back(2).unwrap();
//! let c = list.push_back(3).unwrap();
//!
//! // Remove from middle - O(1)
//! assert_eq!(list.remove(b), Ok(2));
//! assert_eq!(list.get(b), Err(Error::InvalidPosition));
//!
//! // Neighbours are untouched
//! assert_eq!(list.get(a), Ok(&1));
//! assert_eq!(list.get(c), Ok(&3));
//!
//! list.insert_as_next(a, 9).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 3]);
//! ```
//!
//! # Sorting
//!
//! [`sort_by`](DoublyLinkedList::sort_by) relinks nodes and never moves a
//! payload, so positions keep denoting the same values across a sort.

use core::fmt;

use tracing::debug;

use crate::arena::RawValues;
use crate::cursor::Iter;
use crate::linear::{Bidirectional, LinearList, NodeList};
use crate::node::BiNode;
use crate::sort::LARGE_SORT;
use crate::{Arena, Error, NodeRef, Result};

/// A doubly-linked list owning its nodes.
pub struct DoublyLinkedList<T> {
    nodes: Arena<BiNode<T>>,
    head: NodeRef,
    tail: NodeRef,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        let mut nodes = Arena::with_capacity(2);
        let head = nodes
            .insert(BiNode::sentinel())
            .expect("capacity reserved for sentinels");
        let tail = nodes
            .insert(BiNode::sentinel())
            .expect("capacity reserved for sentinels");
        // Safety: both sentinels were just inserted
        unsafe {
            nodes.get_unchecked_mut(head).next = tail;
            nodes.get_unchecked_mut(tail).prev = head;
        }
        Self {
            nodes,
            head,
            tail,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the first element, `end()` when empty.
    #[inline]
    pub fn begin(&self) -> NodeRef {
        // Safety: head sentinel is always live
        unsafe { self.nodes.get_unchecked(self.head) }.next
    }

    /// Past-the-end position (the tail sentinel).
    #[inline]
    pub fn end(&self) -> NodeRef {
        self.tail
    }

    // ========================================================================
    // Validation and raw access
    // ========================================================================

    /// Returns the node at `pos` if it is a live element (not a sentinel).
    #[inline]
    fn element(&self, pos: NodeRef) -> Result<&BiNode<T>> {
        if pos == self.head || pos == self.tail {
            return Err(Error::InvalidPosition);
        }
        self.nodes.get(pos)
    }

    #[inline]
    fn link(&self, key: NodeRef) -> &BiNode<T> {
        // Safety: key was reached through links of live nodes (list invariant)
        unsafe { self.nodes.get_unchecked(key) }
    }

    #[inline]
    fn link_mut(&mut self, key: NodeRef) -> &mut BiNode<T> {
        // Safety: key was reached through links of live nodes (list invariant)
        unsafe { self.nodes.get_unchecked_mut(key) }
    }

    #[inline]
    fn value(&self, key: NodeRef) -> &T {
        self.link(key)
            .data
            .as_ref()
            .expect("sentinel has no payload")
    }

    // ========================================================================
    // Link operations (just relink, no alloc/dealloc)
    // ========================================================================

    /// Allocates a node for `value` and splices it between `prev` and its
    /// successor.
    fn splice_after(&mut self, prev: NodeRef, value: T) -> Result<NodeRef> {
        let next = self.link(prev).next;
        let key = self.nodes.insert(BiNode::new(value, prev, next))?;
        self.link_mut(prev).next = key;
        self.link_mut(next).prev = key;
        self.len += 1;
        Ok(key)
    }

    /// Detaches `key` from its neighbours without freeing it.
    fn unlink(&mut self, key: NodeRef) {
        let BiNode { prev, next, .. } = *self.link(key);
        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
    }

    /// Re-attaches a detached `key` immediately before `before`.
    fn link_before(&mut self, before: NodeRef, key: NodeRef) {
        let prev = self.link(before).prev;
        let node = self.link_mut(key);
        node.prev = prev;
        node.next = before;
        self.link_mut(prev).next = key;
        self.link_mut(before).prev = key;
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` right after `pos`, returning the new position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is `end()` or stale.
    pub fn insert_as_next(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        self.element(pos)?;
        self.splice_after(pos, value)
    }

    /// Inserts `value` right before `pos` (`end()` appends), returning the
    /// new position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is stale.
    pub fn insert_as_prev(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        if pos != self.tail {
            self.element(pos)?;
        }
        let prev = self.link(pos).prev;
        self.splice_after(prev, value)
    }

    /// Inserts `value` at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<NodeRef> {
        self.splice_after(self.head, value)
    }

    /// Inserts `value` at the back.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<NodeRef> {
        let last = self.link(self.tail).prev;
        self.splice_after(last, value)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the element at `pos`, returning it and the former successor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] for sentinels and stale handles.
    pub fn take(&mut self, pos: NodeRef) -> Result<(T, NodeRef)> {
        let next = self.element(pos)?.next;
        self.unlink(pos);
        self.len -= 1;
        let node = self.nodes.remove(pos)?;
        let value = node.data.expect("sentinel has no payload");
        Ok((value, next))
    }

    /// Removes the element at `pos`, returning the former successor.
    #[inline]
    pub fn erase(&mut self, pos: NodeRef) -> Result<NodeRef> {
        self.take(pos).map(|(_, next)| next)
    }

    /// Removes and returns the element at `pos`.
    #[inline]
    pub fn remove(&mut self, pos: NodeRef) -> Result<T> {
        self.take(pos).map(|(value, _)| value)
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.remove(self.begin())
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.remove(self.link(self.tail).prev)
    }

    /// Removes all elements. The sentinels survive, so `end()` is unchanged.
    pub fn clear(&mut self) {
        let mut key = self.begin();
        while key != self.tail {
            let next = self.link(key).next;
            let _ = self.nodes.remove(key);
            key = next;
        }
        let (head, tail) = (self.head, self.tail);
        self.link_mut(head).next = tail;
        self.link_mut(tail).prev = head;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element at `pos`.
    #[inline]
    pub fn get(&self, pos: NodeRef) -> Result<&T> {
        self.element(pos)?
            .data
            .as_ref()
            .ok_or(Error::InvalidPosition)
    }

    /// Returns the element at `pos` mutably.
    #[inline]
    pub fn get_mut(&mut self, pos: NodeRef) -> Result<&mut T> {
        self.element(pos)?;
        self.link_mut(pos)
            .data
            .as_mut()
            .ok_or(Error::InvalidPosition)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.value(self.begin()))
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.value(self.link(self.tail).prev))
    }

    /// Position after `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] at `end()` or for stale handles.
    #[inline]
    pub fn succ(&self, pos: NodeRef) -> Result<NodeRef> {
        Ok(self.element(pos)?.next)
    }

    /// Position before `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] at the first element or for stale handles.
    pub fn pred(&self, pos: NodeRef) -> Result<NodeRef> {
        let prev = if pos == self.tail {
            self.link(pos).prev
        } else {
            self.element(pos)?.prev
        };
        if prev == self.head {
            return Err(Error::InvalidPosition);
        }
        Ok(prev)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Reverses the list by relinking. Positions keep their values.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let first = self.begin();
        let last = self.link(self.tail).prev;

        let mut key = first;
        while key != self.tail {
            let node = self.link_mut(key);
            core::mem::swap(&mut node.prev, &mut node.next);
            // old next
            key = node.prev;
        }

        let (head, tail) = (self.head, self.tail);
        self.link_mut(first).next = tail;
        self.link_mut(last).prev = head;
        self.link_mut(head).next = last;
        self.link_mut(tail).prev = first;
    }

    /// Removes consecutive equal elements, returning how many were removed.
    pub fn dedup(&mut self) -> usize
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return 0;
        }
        let before = self.len;
        let mut keep = self.begin();
        let mut key = self.link(keep).next;
        while key != self.tail {
            let next = self.link(key).next;
            if self.value(key) == self.value(keep) {
                let _ = self.remove(key);
            } else {
                keep = key;
            }
            key = next;
        }
        before - self.len
    }

    /// Sorts the list in ascending order. Stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a < b);
    }

    /// Stable merge sort by relinking nodes.
    ///
    /// `less(a, b)` must return `true` iff `a` is strictly ordered before `b`.
    /// The midpoint of each run is found by walking half its length; merging
    /// detaches a node from the right run and relinks it before the current
    /// node of the left run. No payload is moved.
    pub fn sort_by<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let n = self.len;
        if n >= LARGE_SORT {
            debug!(len = n, "splicing merge sort");
        }
        let mut start = self.begin();
        self.merge_sort(&mut start, n, &mut less);
    }

    /// Sorts the `n` nodes starting at `start`; on return `start` is the
    /// first node of the sorted run.
    fn merge_sort<F>(&mut self, start: &mut NodeRef, n: usize, less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if n < 2 {
            return;
        }
        let m = n / 2;
        let mut right = *start;
        for _ in 0..m {
            right = self.link(right).next;
        }
        self.merge_sort(start, m, less);
        self.merge_sort(&mut right, n - m, less);
        self.merge(start, m, right, n - m, less);
    }

    /// Merges the sorted run of `n` nodes at `left` with the sorted run of
    /// `m` nodes at `right`, which must follow it directly.
    fn merge<F>(
        &mut self,
        left: &mut NodeRef,
        mut n: usize,
        mut right: NodeRef,
        mut m: usize,
        less: &mut F,
    ) where
        F: FnMut(&T, &T) -> bool,
    {
        let before = self.link(*left).prev;
        let mut p = *left;
        while m > 0 && right != p {
            if n > 0 && !less(self.value(right), self.value(p)) {
                p = self.link(p).next;
                n -= 1;
            } else {
                let q = right;
                right = self.link(q).next;
                self.unlink(q);
                self.link_before(p, q);
                m -= 1;
            }
        }
        *left = self.link(before).next;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Iterates over mutable references front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let front = self.begin();
        let back = self.link(self.tail).prev;
        IterMut {
            front,
            back,
            remaining: self.len,
            nodes: self.nodes.raw_values(),
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("DoublyLinkedList::extend: {err}");
            }
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, DoublyLinkedList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Iterator over mutable references to the elements.
///
/// `front` and `back` are the next nodes to yield from each end; a node's
/// links are read before its payload is handed out.
pub struct IterMut<'a, T> {
    nodes: RawValues<'a, BiNode<T>>,
    front: NodeRef,
    back: NodeRef,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // Safety: front is a live element that neither end has yielded;
        // remaining stops the ends before they cross
        let node = unsafe { self.nodes.value_mut(self.front) };
        self.front = node.next;
        self.remaining -= 1;
        node.data.as_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // Safety: as in next()
        let node = unsafe { self.nodes.value_mut(self.back) };
        self.back = node.prev;
        self.remaining -= 1;
        node.data.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator, draining from the front.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> LinearList for DoublyLinkedList<T> {
    type Item = T;
    type Pos = NodeRef;
    type IterMut<'a>
        = IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn begin(&self) -> NodeRef {
        DoublyLinkedList::begin(self)
    }

    #[inline]
    fn end(&self) -> NodeRef {
        self.tail
    }

    #[inline]
    fn succ(&self, pos: NodeRef) -> Result<NodeRef> {
        DoublyLinkedList::succ(self, pos)
    }

    #[inline]
    fn pred(&self, pos: NodeRef) -> Result<NodeRef> {
        DoublyLinkedList::pred(self, pos)
    }

    #[inline]
    fn get(&self, pos: NodeRef) -> Result<&T> {
        DoublyLinkedList::get(self, pos)
    }

    #[inline]
    fn get_mut(&mut self, pos: NodeRef) -> Result<&mut T> {
        DoublyLinkedList::get_mut(self, pos)
    }

    #[inline]
    fn insert(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        self.insert_as_prev(pos, value)
    }

    #[inline]
    fn take(&mut self, pos: NodeRef) -> Result<(T, NodeRef)> {
        DoublyLinkedList::take(self, pos)
    }

    #[inline]
    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T> Bidirectional for DoublyLinkedList<T> {}

impl<T> NodeList for DoublyLinkedList<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn values<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.front(), Err(Error::EmptyContainer));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
    }

    #[test]
    fn push_both_ends() {
        let mut list = DoublyLinkedList::new();
        list.push_back(2).unwrap();
        list.push_front(1).unwrap();
        list.push_back(3).unwrap();
        assert_eq!(values(&list), vec![1, 2, 3]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn insert_as_next_and_prev() {
        let mut list = DoublyLinkedList::new();
        let b = list.push_back('b').unwrap();
        list.insert_as_prev(b, 'a').unwrap();
        list.insert_as_next(b, 'c').unwrap();
        let end = list.end();
        list.insert_as_prev(end, 'd').unwrap();
        assert_eq!(values(&list), vec!['a', 'b', 'c', 'd']);
        assert_eq!(list.insert_as_next(end, 'x'), Err(Error::InvalidPosition));
    }

    #[test]
    fn erase_returns_successor() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();
        let two = list.succ(list.begin()).unwrap();
        let next = list.erase(two).unwrap();
        assert_eq!(list.get(next), Ok(&3));
        let next = list.erase(next).unwrap();
        assert_eq!(next, list.end());
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn sentinels_and_stale_handles_rejected() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();
        let end = list.end();
        assert_eq!(list.erase(end), Err(Error::InvalidPosition));
        assert_eq!(list.succ(end), Err(Error::InvalidPosition));
        assert_eq!(list.pred(list.begin()), Err(Error::InvalidPosition));

        let first = list.begin();
        list.erase(first).unwrap();
        // slot reused by the next insert
        let fresh = list.push_back(4).unwrap();
        assert_eq!(fresh.index(), first.index());
        assert_eq!(list.get(first), Err(Error::InvalidPosition));
        assert_eq!(list.erase(first), Err(Error::InvalidPosition));
        assert_eq!(list.get(fresh), Ok(&4));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn pop_on_empty() {
        let mut list: DoublyLinkedList<u64> = DoublyLinkedList::new();
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
        list.push_back(1).unwrap();
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn reverse_relinks() {
        let mut list: DoublyLinkedList<u64> = (1..=5).collect();
        let three = list.find(&3);
        let end = list.end();
        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.get(three), Ok(&3));
        assert_eq!(list.end(), end);

        let mut one: DoublyLinkedList<u64> = [7].into_iter().collect();
        one.reverse();
        assert_eq!(values(&one), vec![7]);
    }

    #[test]
    fn dedup_adjacent() {
        let mut list: DoublyLinkedList<u64> = [1, 1, 2, 3, 3, 3, 1].into_iter().collect();
        assert_eq!(list.dedup(), 3);
        assert_eq!(values(&list), vec![1, 2, 3, 1]);
    }

    #[test]
    fn clear_keeps_sentinels() {
        let mut list: DoublyLinkedList<u64> = (0..10).collect();
        let end = list.end();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.end(), end);
        assert_eq!(list.begin(), end);
        list.push_back(1).unwrap();
        assert_eq!(values(&list), vec![1]);
    }

    #[test]
    fn sort_is_stable_and_keeps_positions() {
        let mut list = DoublyLinkedList::new();
        let keys: Vec<_> = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')]
            .into_iter()
            .map(|pair| list.push_back(pair).unwrap())
            .collect();
        list.sort_by(|a, b| a.0 < b.0);
        assert_eq!(
            values(&list),
            vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]
        );
        // no payload moved
        assert_eq!(list.get(keys[0]), Ok(&(3, 'a')));
        assert_eq!(list.get(keys[4]), Ok(&(1, 'e')));
        // links consistent both ways
        let back: Vec<_> = list.iter().rev().map(|p| p.1).collect();
        assert_eq!(back, vec!['c', 'a', 'd', 'e', 'b']);
    }

    #[test]
    fn sort_edge_sizes() {
        for n in 0..40u64 {
            let mut list: DoublyLinkedList<u64> = (0..n).map(|i| (i * 7) % 11).collect();
            let mut expected: Vec<_> = list.iter().copied().collect();
            expected.sort();
            list.sort();
            assert_eq!(values(&list), expected, "n = {n}");
            assert_eq!(list.len(), n as usize);
        }
    }

    #[test]
    fn clone_and_eq() {
        let list: DoublyLinkedList<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut copy = list.clone();
        assert_eq!(list, copy);
        copy.push_back("c".into()).unwrap();
        assert_ne!(list, copy);
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    #[test]
    fn drops_every_element() {
        let drops = Rc::new(Cell::new(0));
        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut list = DoublyLinkedList::new();
        for _ in 0..6 {
            list.push_back(DropCounter(drops.clone())).unwrap();
        }
        let first = list.begin();
        drop(list.remove(first).unwrap());
        assert_eq!(drops.get(), 1);
        list.clear();
        assert_eq!(drops.get(), 6);
        list.push_back(DropCounter(drops.clone())).unwrap();
        drop(list);
        assert_eq!(drops.get(), 7);
    }

    #[test]
    fn owned_iteration() {
        let list: DoublyLinkedList<u64> = (1..=4).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn iter_mut_updates() {
        let mut list: DoublyLinkedList<u64> = (1..=3).collect();
        for v in &mut list {
            *v *= 2;
        }
        assert_eq!(values(&list), vec![2, 4, 6]);
    }

    #[test]
    fn iter_mut_references_held_together() {
        let mut list: DoublyLinkedList<u64> = (0..6).collect();
        let a = list.push_front(100).unwrap();
        list.remove(a).unwrap();

        let mut iter = list.iter_mut();
        let mut refs = Vec::new();
        refs.push(iter.next().unwrap());
        refs.push(iter.next_back().unwrap());
        refs.extend(iter.by_ref().rev());
        assert!(iter.next().is_none());
        assert_eq!(refs.len(), 6);

        for r in refs {
            *r += 10;
        }
        assert_eq!(values(&list), vec![10, 11, 12, 13, 14, 15]);
    }
}
