//! Doubly-linked list whose links are indices into one [`Vector`].
//!
//! Slots `0`, `1` and `2` are reserved: nil, the head sentinel and the tail
//! sentinel. Every other slot is either in the live chain or on the free
//! list. Freed slots are kept (no compaction) and handed out again most
//! recently freed first.
//!
//! ```
//! use nexus_linear::StaticList;
//!
//! let mut list: StaticList<&str> = StaticList::new();
//! let a = list.push_back("a").unwrap();
//! let b = list.push_back("b").unwrap();
//!
//! list.erase(a).unwrap();
//! assert_eq!(list.free_slots(), 1);
//!
//! // The freed slot is reused.
//! let c = list.insert_as_next(b, "c").unwrap();
//! assert_eq!(c, a);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
//! ```
//!
//! Positions are plain slot indices: there is no generation check, so a
//! position kept past an erase may denote whatever later reuses the slot.

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use tracing::trace;

use crate::cursor::Iter;
use crate::linear::{Bidirectional, LinearList, NodeList};
use crate::node::StaticNode;
use crate::sort;
use crate::{CapacityPolicy, Error, Geometric, Result, Vector};

const NIL: usize = 0;
const HEAD: usize = 1;
const TAIL: usize = 2;
const RESERVED: usize = 3;

/// Index-linked list over a contiguous node vector.
pub struct StaticList<T, P: CapacityPolicy = Geometric> {
    nodes: Vector<StaticNode<T>, P>,
    free: Vector<usize>,
    len: usize,
}

impl<T> StaticList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, Geometric::default())
    }
}

impl<T, P: CapacityPolicy> StaticList<T, P> {
    /// Creates an empty list whose node vector grows by `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self::with_capacity_and_policy(0, policy)
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        let mut nodes = Vector::with_capacity_and_policy(capacity + RESERVED, policy);
        for _ in 0..RESERVED {
            if nodes.push_within_capacity(StaticNode::vacant()).is_err() {
                unreachable!("capacity reserved for sentinels");
            }
        }
        nodes[HEAD].next = TAIL;
        nodes[TAIL].prev = HEAD;
        Self {
            nodes,
            free: Vector::new(),
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

    /// Returns the capacity of the node vector, reserved slots included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of released slots waiting for reuse.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.free.len()
    }

    /// Position of the first element, `end()` when empty.
    #[inline]
    pub fn begin(&self) -> usize {
        self.nodes[HEAD].next
    }

    /// Past-the-end position.
    #[inline]
    pub fn end(&self) -> usize {
        TAIL
    }

    #[inline]
    fn element(&self, pos: usize) -> Result<&StaticNode<T>> {
        match self.nodes.get(pos) {
            Ok(node) if pos >= RESERVED && node.data.is_some() => Ok(node),
            _ => Err(Error::InvalidPosition),
        }
    }

    // ========================================================================
    // Slot management
    // ========================================================================

    /// Takes a slot for `value`, reusing the most recently freed one.
    fn create(&mut self, value: T, prev: usize, next: usize) -> Result<usize> {
        let node = StaticNode {
            data: Some(value),
            prev,
            next,
        };
        if let Ok(index) = self.free.pop_back() {
            trace!(index, "static list slot reused");
            self.nodes[index] = node;
            return Ok(index);
        }
        self.nodes.push_back(node)
    }

    /// Returns `index` to the free list and hands back its value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is reserved or already free.
    fn destroy(&mut self, index: usize) -> T {
        assert!(index >= RESERVED, "release of reserved slot {index}");
        let node = &mut self.nodes[index];
        let Some(value) = node.data.take() else {
            panic!("double release of slot {index}");
        };
        node.prev = NIL;
        node.next = NIL;
        if let Err(err) = self.free.push_back(index) {
            panic!("free list: {err}");
        }
        value
    }

    fn splice_after(&mut self, prev: usize, value: T) -> Result<usize> {
        let next = self.nodes[prev].next;
        let index = self.create(value, prev, next)?;
        self.nodes[prev].next = index;
        self.nodes[next].prev = index;
        self.len += 1;
        Ok(index)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` right after `pos`, returning the new position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is `end()` or not live.
    pub fn insert_as_next(&mut self, pos: usize, value: T) -> Result<usize> {
        self.element(pos)?;
        self.splice_after(pos, value)
    }

    /// Inserts `value` right before `pos` (`end()` appends).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is not live.
    pub fn insert_as_prev(&mut self, pos: usize, value: T) -> Result<usize> {
        if pos != TAIL {
            self.element(pos)?;
        }
        let prev = self.nodes[pos].prev;
        self.splice_after(prev, value)
    }

    /// Inserts `value` at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<usize> {
        self.splice_after(HEAD, value)
    }

    /// Inserts `value` at the back.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<usize> {
        let last = self.nodes[TAIL].prev;
        self.splice_after(last, value)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the element at `pos`, returning it and the former successor.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is not live.
    pub fn take(&mut self, pos: usize) -> Result<(T, usize)> {
        let &StaticNode { prev, next, .. } = self.element(pos)?;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.len -= 1;
        Ok((self.destroy(pos), next))
    }

    /// Removes the element at `pos`, returning the former successor.
    #[inline]
    pub fn erase(&mut self, pos: usize) -> Result<usize> {
        self.take(pos).map(|(_, next)| next)
    }

    /// Removes and returns the element at `pos`.
    #[inline]
    pub fn remove(&mut self, pos: usize) -> Result<T> {
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
        self.remove(self.nodes[TAIL].prev)
    }

    /// Removes all elements, returning every slot to the free list.
    pub fn clear(&mut self) {
        let mut index = self.begin();
        while index != TAIL {
            let next = self.nodes[index].next;
            drop(self.destroy(index));
            index = next;
        }
        self.nodes[HEAD].next = TAIL;
        self.nodes[TAIL].prev = HEAD;
        self.len = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the element at `pos`.
    #[inline]
    pub fn get(&self, pos: usize) -> Result<&T> {
        self.element(pos)?
            .data
            .as_ref()
            .ok_or(Error::InvalidPosition)
    }

    /// Returns the element at `pos` mutably.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
        self.element(pos)?;
        self.nodes[pos].data.as_mut().ok_or(Error::InvalidPosition)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.begin())
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.nodes[TAIL].prev)
    }

    /// Position after `pos`.
    #[inline]
    pub fn succ(&self, pos: usize) -> Result<usize> {
        Ok(self.element(pos)?.next)
    }

    /// Position before `pos`.
    pub fn pred(&self, pos: usize) -> Result<usize> {
        let prev = if pos == TAIL {
            self.nodes[TAIL].prev
        } else {
            self.element(pos)?.prev
        };
        if prev == HEAD {
            return Err(Error::InvalidPosition);
        }
        Ok(prev)
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
            front: self.nodes[HEAD].next,
            back: self.nodes[TAIL].prev,
            remaining: self.len,
            nodes: self.nodes.as_mut_ptr(),
            _marker: PhantomData,
        }
    }
}

impl<T> Default for StaticList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones slot for slot, so positions of `self` are valid in the clone.
impl<T: Clone, P: CapacityPolicy + Clone> Clone for StaticList<T, P> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            free: self.free.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, P: CapacityPolicy> fmt::Debug for StaticList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, P: CapacityPolicy> PartialEq for StaticList<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: CapacityPolicy> Eq for StaticList<T, P> {}

impl<T, P: CapacityPolicy> Extend<T> for StaticList<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(err) = self.push_back(value) {
                panic!("StaticList::extend: {err}");
            }
        }
    }
}

impl<T> FromIterator<T> for StaticList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a StaticList<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, StaticList<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a mut StaticList<T, P> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Iterator over mutable references to the elements.
pub struct IterMut<'a, T> {
    nodes: NonNull<StaticNode<T>>,
    front: usize,
    back: usize,
    remaining: usize,
    _marker: PhantomData<&'a mut StaticNode<T>>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    ///
    /// `index` must be a live element slot that neither end has yielded.
    #[inline]
    unsafe fn node(&mut self, index: usize) -> &'a mut StaticNode<T> {
        // Safety: in bounds and unaliased per the caller; the reference
        // covers this one slot
        unsafe { &mut *self.nodes.as_ptr().add(index) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        // Safety: front is linked into the list and not yet yielded;
        // remaining stops the ends before they cross
        let node = unsafe { self.node(self.front) };
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
        let node = unsafe { self.node(self.back) };
        self.back = node.prev;
        self.remaining -= 1;
        node.data.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T, P: CapacityPolicy> LinearList for StaticList<T, P> {
    type Item = T;
    type Pos = usize;
    type IterMut<'a>
        = IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn begin(&self) -> usize {
        StaticList::begin(self)
    }

    #[inline]
    fn end(&self) -> usize {
        TAIL
    }

    #[inline]
    fn succ(&self, pos: usize) -> Result<usize> {
        StaticList::succ(self, pos)
    }

    #[inline]
    fn pred(&self, pos: usize) -> Result<usize> {
        StaticList::pred(self, pos)
    }

    #[inline]
    fn get(&self, pos: usize) -> Result<&T> {
        StaticList::get(self, pos)
    }

    #[inline]
    fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
        StaticList::get_mut(self, pos)
    }

    #[inline]
    fn insert(&mut self, pos: usize, value: T) -> Result<usize> {
        self.insert_as_prev(pos, value)
    }

    #[inline]
    fn take(&mut self, pos: usize) -> Result<(T, usize)> {
        StaticList::take(self, pos)
    }

    #[inline]
    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T, P: CapacityPolicy> Bidirectional for StaticList<T, P> {}

impl<T, P: CapacityPolicy> NodeList for StaticList<T, P> {}
