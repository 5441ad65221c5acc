//! Singly-linked list with head/tail sentinels and tail bookkeeping.
//!
//! Only [`insert_as_next`](ForwardList::insert_as_next) is a native O(1)
//! splice. Inserting before a node and erasing a node are done in O(1) by
//! moving payloads between neighbouring nodes instead of finding the
//! predecessor:
//!
//! - `insert_as_prev(p, e)` puts a new node holding `p`'s value after `p`
//!   and writes `e` into `p`. Afterwards `p` denotes `e`.
//! - `erase(p)` pulls the successor's value into `p` and frees the
//!   successor. Afterwards `p` denotes the element that followed.
//!
//! Positions to the moved payloads follow the payload only through the
//! returned positions, which is what generic algorithms over
//! [`LinearList`] rely on.
//!
//! ```
//! use nexus_linear::ForwardList;
//!
//! let mut list: ForwardList<u64> = [1, 2, 3].into_iter().collect();
//! let two = list.succ(list.begin()).unwrap();
//!
//! let pos = list.insert_as_prev(two, 9).unwrap();
//! assert_eq!(pos, two);
//! assert_eq!(list.get(two), Ok(&9));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2, 3]);
//! ```

use core::fmt;

use crate::arena::RawValues;
use crate::cursor::Iter;
use crate::linear::{LinearList, NodeList};
use crate::node::ForwardNode;
use crate::sort;
use crate::{Arena, Error, NodeRef, Result};

/// A singly-linked list owning its nodes.
pub struct ForwardList<T> {
    nodes: Arena<ForwardNode<T>>,
    /// Before-begin sentinel.
    head: NodeRef,
    /// Past-the-end sentinel.
    tail: NodeRef,
    /// Last element, or `head` when empty.
    last: NodeRef,
    len: usize,
}

impl<T> ForwardList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        let mut nodes = Arena::with_capacity(2);
        let tail = nodes
            .insert(ForwardNode::sentinel(NodeRef::NONE))
            .expect("capacity reserved for sentinels");
        let head = nodes
            .insert(ForwardNode::sentinel(tail))
            .expect("capacity reserved for sentinels");
        Self {
            nodes,
            head,
            tail,
            last: head,
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

    /// Position before the first element. Valid only as the anchor of
    /// [`insert_as_next`](Self::insert_as_next) and for [`succ`](Self::succ).
    #[inline]
    pub fn before_begin(&self) -> NodeRef {
        self.head
    }

    /// Position of the first element, `end()` when empty.
    #[inline]
    pub fn begin(&self) -> NodeRef {
        self.link(self.head).next
    }

    /// Past-the-end position.
    #[inline]
    pub fn end(&self) -> NodeRef {
        self.tail
    }

    #[inline]
    fn element(&self, pos: NodeRef) -> Result<&ForwardNode<T>> {
        if pos == self.head || pos == self.tail {
            return Err(Error::InvalidPosition);
        }
        self.nodes.get(pos)
    }

    #[inline]
    fn link(&self, key: NodeRef) -> &ForwardNode<T> {
        // Safety: key was reached through links of live nodes (list invariant)
        unsafe { self.nodes.get_unchecked(key) }
    }

    #[inline]
    fn link_mut(&mut self, key: NodeRef) -> &mut ForwardNode<T> {
        // Safety: key was reached through links of live nodes (list invariant)
        unsafe { self.nodes.get_unchecked_mut(key) }
    }

    /// Allocates a node for `value` directly after the live node `prev`.
    fn splice_after(&mut self, prev: NodeRef, value: T) -> Result<NodeRef> {
        let next = self.link(prev).next;
        let key = self.nodes.insert(ForwardNode::new(value, next))?;
        self.link_mut(prev).next = key;
        if prev == self.last {
            self.last = key;
        }
        self.len += 1;
        Ok(key)
    }

    /// Walks from the head to the node whose successor is `pos`. O(n).
    fn predecessor(&self, pos: NodeRef) -> NodeRef {
        let mut key = self.head;
        loop {
            let next = self.link(key).next;
            if next == pos {
                return key;
            }
            key = next;
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` after `pos`, which may be [`before_begin`](Self::before_begin).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is `end()` or stale.
    pub fn insert_as_next(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        if pos != self.head {
            self.element(pos)?;
        }
        self.splice_after(pos, value)
    }

    /// Inserts `value` before the element at `pos` by payload shuffle.
    ///
    /// Returns `pos`, which now denotes `value`; the value previously at
    /// `pos` moves to a new node right after it. At `end()` the value is
    /// appended and the new node's position is returned.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is the before-begin sentinel or stale.
    pub fn insert_as_prev(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        if pos == self.tail {
            return self.splice_after(self.last, value);
        }
        self.element(pos)?;
        // Allocate first so a failed insert leaves the list untouched
        let key = self.splice_after(pos, value)?;
        let value = self.link_mut(key).data.take();
        let displaced = core::mem::replace(&mut self.link_mut(pos).data, value);
        self.link_mut(key).data = displaced;
        Ok(pos)
    }

    /// Inserts `value` at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<NodeRef> {
        self.splice_after(self.head, value)
    }

    /// Inserts `value` at the back in O(1).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<NodeRef> {
        self.splice_after(self.last, value)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the element at `pos`, returning it with the position of the
    /// element that followed it.
    ///
    /// The following element's value is moved into `pos`, so the returned
    /// position is `pos` itself; only when `pos` is the last element is
    /// the predecessor found by an O(n) walk and `end()` returned.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] for sentinels and stale handles.
    pub fn take(&mut self, pos: NodeRef) -> Result<(T, NodeRef)> {
        let next = self.element(pos)?.next;

        if next == self.tail {
            let prev = self.predecessor(pos);
            self.link_mut(prev).next = self.tail;
            self.last = prev;
            self.len -= 1;
            let node = self.nodes.remove(pos)?;
            return Ok((node.data.expect("sentinel has no payload"), self.tail));
        }

        let successor = self.nodes.remove(next)?;
        if next == self.last {
            self.last = pos;
        }
        self.len -= 1;
        let node = self.link_mut(pos);
        node.next = successor.next;
        let value = core::mem::replace(&mut node.data, successor.data)
            .expect("sentinel has no payload");
        Ok((value, pos))
    }

    /// Removes the element at `pos`, returning the position of the element
    /// that followed it (see [`take`](Self::take)).
    #[inline]
    pub fn erase(&mut self, pos: NodeRef) -> Result<NodeRef> {
        self.take(pos).map(|(_, next)| next)
    }

    /// Removes and returns the element at `pos`.
    #[inline]
    pub fn remove(&mut self, pos: NodeRef) -> Result<T> {
        self.take(pos).map(|(value, _)| value)
    }

    /// Removes and returns the first element in O(1).
    pub fn pop_front(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let first = self.begin();
        let next = self.link(first).next;
        self.link_mut(self.head).next = next;
        if first == self.last {
            self.last = self.head;
        }
        self.len -= 1;
        let node = self.nodes.remove(first)?;
        Ok(node.data.expect("sentinel has no payload"))
    }

    /// Removes and returns the last element. O(n).
    pub fn pop_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.remove(self.last)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        let mut key = self.begin();
        while key != self.tail {
            let next = self.link(key).next;
            let _ = self.nodes.remove(key);
            key = next;
        }
        let tail = self.tail;
        self.link_mut(self.head).next = tail;
        self.last = self.head;
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
        self.get(self.begin())
    }

    /// Returns the last element in O(1).
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.last)
    }

    /// Position after `pos` (`pos` may be [`before_begin`](Self::before_begin)).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] at `end()` or for stale handles.
    #[inline]
    pub fn succ(&self, pos: NodeRef) -> Result<NodeRef> {
        if pos == self.head {
            return Ok(self.begin());
        }
        Ok(self.element(pos)?.next)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Reverses the chain in place.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let first = self.begin();
        let mut prev = self.tail;
        let mut key = first;
        while key != self.tail {
            let node = self.link_mut(key);
            let next = node.next;
            node.next = prev;
            prev = key;
            key = next;
        }
        self.link_mut(self.head).next = prev;
        self.last = first;
    }

    /// Sorts the list in ascending order. Stable.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(|a, b| a < b);
    }

    /// Stable position-based merge sort (see [`sort::list::merge_sort_by`]).
    pub fn sort_by<F>(&mut self, less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if let Err(err) = sort::list::merge_sort_by(self, less) {
            unreachable!("merge over live positions failed: {err}");
        }
    }

    /// Iterates over the elements front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    /// Iterates over mutable references front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            front: self.begin(),
            remaining: self.len,
            nodes: self.nodes.raw_values(),
        }
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("ForwardList::extend: {err}");
            }
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, ForwardList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ForwardList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Iterator over mutable references to the elements.
pub struct IterMut<'a, T> {
    nodes: RawValues<'a, ForwardNode<T>>,
    front: NodeRef,
    remaining: usize,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // Safety: front is a live element not yet yielded; the link is read
        // before the payload is handed out and the node is never revisited
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

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owning iterator, draining from the front.
pub struct IntoIter<T> {
    list: ForwardList<T>,
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

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> LinearList for ForwardList<T> {
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
        ForwardList::begin(self)
    }

    #[inline]
    fn end(&self) -> NodeRef {
        self.tail
    }

    #[inline]
    fn succ(&self, pos: NodeRef) -> Result<NodeRef> {
        ForwardList::succ(self, pos)
    }

    #[inline]
    fn get(&self, pos: NodeRef) -> Result<&T> {
        ForwardList::get(self, pos)
    }

    #[inline]
    fn get_mut(&mut self, pos: NodeRef) -> Result<&mut T> {
        ForwardList::get_mut(self, pos)
    }

    #[inline]
    fn insert(&mut self, pos: NodeRef, value: T) -> Result<NodeRef> {
        self.insert_as_prev(pos, value)
    }

    #[inline]
    fn take(&mut self, pos: NodeRef) -> Result<(T, NodeRef)> {
        ForwardList::take(self, pos)
    }

    #[inline]
    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }

    #[inline]
    fn back(&self) -> Result<&T> {
        ForwardList::back(self)
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T> {
        ForwardList::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T> {
        ForwardList::pop_back(self)
    }
}

impl<T> NodeList for ForwardList<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn values<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn new_list_is_empty() {
        let list: ForwardList<u64> = ForwardList::new();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        assert_eq!(list.succ(list.before_begin()), Ok(list.end()));
        assert_eq!(list.back(), Err(Error::EmptyContainer));
    }

    #[test]
    fn insert_as_prev_shuffles_payload() {
        let mut list: ForwardList<u64> = [1, 2, 3].into_iter().collect();
        let two = list.find(&2);

        let pos = list.insert_as_prev(two, 9).unwrap();
        assert_eq!(pos, two);
        assert_eq!(list.get(two), Ok(&9));
        assert_eq!(values(&list), vec![1, 9, 2, 3]);

        // the old value sits in a fresh node right after
        let moved = list.succ(two).unwrap();
        assert_ne!(moved, two);
        assert_eq!(list.get(moved), Ok(&2));
    }

    #[test]
    fn insert_as_prev_at_end_appends() {
        let mut list: ForwardList<u64> = [1, 2].into_iter().collect();
        let end = list.end();
        let pos = list.insert_as_prev(end, 3).unwrap();
        assert_eq!(list.get(pos), Ok(&3));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(values(&list), vec![1, 2, 3]);

        let mut empty = ForwardList::new();
        let end = empty.end();
        empty.insert_as_prev(end, 1).unwrap();
        assert_eq!(values(&empty), vec![1]);
    }

    #[test]
    fn insert_as_prev_on_last_updates_back() {
        let mut list: ForwardList<u64> = [1, 2].into_iter().collect();
        let last = list.find(&2);
        list.insert_as_prev(last, 5).unwrap();
        assert_eq!(values(&list), vec![1, 5, 2]);
        assert_eq!(list.back(), Ok(&2));
        list.push_back(3).unwrap();
        assert_eq!(values(&list), vec![1, 5, 2, 3]);
    }

    #[test]
    fn insert_as_next_from_before_begin() {
        let mut list = ForwardList::new();
        let bb = list.before_begin();
        let a = list.insert_as_next(bb, 'a').unwrap();
        list.insert_as_next(a, 'c').unwrap();
        list.insert_as_next(a, 'b').unwrap();
        assert_eq!(values(&list), vec!['a', 'b', 'c']);
        assert_eq!(list.back(), Ok(&'c'));
        let end = list.end();
        assert_eq!(list.insert_as_next(end, 'x'), Err(Error::InvalidPosition));
        assert_eq!(list.insert_as_prev(bb, 'x'), Err(Error::InvalidPosition));
    }

    #[test]
    fn erase_pulls_successor() {
        let mut list: ForwardList<u64> = [1, 2, 3].into_iter().collect();
        let one = list.begin();
        let pos = list.erase(one).unwrap();
        assert_eq!(pos, one);
        assert_eq!(list.get(pos), Ok(&2));
        assert_eq!(values(&list), vec![2, 3]);
        assert_eq!(list.back(), Ok(&3));
    }

    #[test]
    fn erase_before_last_moves_last() {
        let mut list: ForwardList<u64> = [1, 2].into_iter().collect();
        let one = list.begin();
        list.erase(one).unwrap();
        assert_eq!(list.back(), Ok(&2));
        list.push_back(3).unwrap();
        assert_eq!(values(&list), vec![2, 3]);
    }

    #[test]
    fn erase_last_walks_to_predecessor() {
        let mut list: ForwardList<u64> = [1, 2, 3].into_iter().collect();
        let three = list.find(&3);
        let pos = list.erase(three).unwrap();
        assert_eq!(pos, list.end());
        assert_eq!(values(&list), vec![1, 2]);
        assert_eq!(list.back(), Ok(&2));
        assert_eq!(list.get(three), Err(Error::InvalidPosition));

        let only = list.begin();
        list.erase(only).unwrap();
        list.erase(only).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.back(), Err(Error::EmptyContainer));
        list.push_back(7).unwrap();
        assert_eq!(values(&list), vec![7]);
    }

    #[test]
    fn pops() {
        let mut list: ForwardList<u64> = (1..=4).collect();
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(4));
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Err(Error::EmptyContainer));
        assert_eq!(list.pop_back(), Err(Error::EmptyContainer));
        list.push_back(5).unwrap();
        assert_eq!(list.front(), Ok(&5));
        assert_eq!(list.back(), Ok(&5));
    }

    #[test]
    fn no_predecessor_lookup() {
        let list: ForwardList<u64> = (1..=2).collect();
        assert!(matches!(
            LinearList::pred(&list, list.end()),
            Err(Error::Unsupported(_))
        ));
        // back still works through the tail bookkeeping
        assert_eq!(LinearList::back(&list), Ok(&2));
    }

    #[test]
    fn reverse_and_back() {
        let mut list: ForwardList<u64> = (1..=5).collect();
        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.back(), Ok(&1));
        list.push_back(0).unwrap();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: ForwardList<u64> = (1..=5).collect();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.begin(), list.end());
        list.push_back(1).unwrap();
        list.push_front(0).unwrap();
        assert_eq!(values(&list), vec![0, 1]);
    }

    #[test]
    fn sort_is_stable() {
        let mut list: ForwardList<(u8, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e')].into_iter().collect();
        list.sort_by(|a, b| a.0 < b.0);
        assert_eq!(
            values(&list),
            vec![(0, 'd'), (1, 'b'), (1, 'e'), (2, 'a'), (2, 'c')]
        );
        assert_eq!(list.back(), Ok(&(2, 'c')));
    }

    #[test]
    fn clone_eq_debug() {
        let list: ForwardList<u64> = (1..=3).collect();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{copy:?}"), "[1, 2, 3]");
        assert_eq!(copy.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
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

        let mut list = ForwardList::new();
        for _ in 0..5 {
            list.push_back(DropCounter(drops.clone())).unwrap();
        }
        let first = list.begin();
        list.erase(first).unwrap();
        assert_eq!(drops.get(), 1);
        drop(list);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn insert_as_prev_drops_nothing() {
        let drops = Rc::new(Cell::new(0));
        struct Tagged(u64, Rc<Cell<usize>>);
        impl Drop for Tagged {
            fn drop(&mut self) {
                self.1.set(self.1.get() + 1);
            }
        }

        let mut list = ForwardList::new();
        let mut last = list.end();
        for tag in 0..3 {
            last = list.push_back(Tagged(tag, drops.clone())).unwrap();
        }

        assert_eq!(list.insert_as_prev(last, Tagged(9, drops.clone())), Ok(last));
        assert_eq!(drops.get(), 0);

        let tags: Vec<u64> = list.iter().map(|t| t.0).collect();
        assert_eq!(tags, vec![0, 1, 9, 2]);
        assert_eq!(list.get(last).map(|t| t.0), Ok(9));
        let moved = list.succ(last).unwrap();
        assert_eq!(list.get(moved).map(|t| t.0), Ok(2));
        assert_eq!(list.back().map(|t| t.0), Ok(2));

        drop(list);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn iter_mut_references_held_together() {
        let mut list: ForwardList<u64> = (0..5).collect();
        let first = list.begin();
        list.erase(first).unwrap();
        list.push_back(5).unwrap();

        let refs: Vec<&mut u64> = list.iter_mut().collect();
        assert_eq!(refs.len(), 5);
        for r in refs {
            *r *= 10;
        }
        assert_eq!(values(&list), vec![10, 20, 30, 40, 50]);
    }
}
