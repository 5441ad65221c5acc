//! The contract shared by every container in the crate.
//!
//! Algorithms are written against these traits rather than a concrete
//! container:
//!
//! ```text
//! LinearList            - begin/end, succ, get, insert, take, erase, find
//!     │
//!     └── Bidirectional - pred is O(1)
//!             │
//!             └── RandomAccess - rank <-> position in O(1)
//!
//! LinearList
//!     └── NodeList          - positions name nodes, not ranks
//! ```
//!
//! | Container | Pos | Bidirectional | RandomAccess | NodeList |
//! |-----------|-----|---------------|--------------|----------|
//! | [`Vector`](crate::Vector) | `usize` rank | yes | yes | no |
//! | [`DoublyLinkedList`](crate::DoublyLinkedList) | [`NodeRef`](crate::NodeRef) | yes | no | yes |
//! | [`StaticList`](crate::StaticList) | `usize` slot | yes | no | yes |
//! | [`ForwardList`](crate::ForwardList) | [`NodeRef`](crate::NodeRef) | no | no | yes |
//!
//! # Positions
//!
//! `insert(pos, value)` places `value` immediately before the element at
//! `pos` (or at the back when `pos == end()`) and returns the position that
//! now denotes `value`. `take(pos)` removes the element at `pos` and returns
//! it with the position of the element that followed it.
//!
//! Which *other* positions stay valid is container specific. In particular a
//! [`ForwardList`](crate::ForwardList) implements both operations by moving
//! payloads between nodes, so the returned positions are the only ones a
//! generic algorithm may rely on.

use crate::cursor::{Cursor, CursorMut, Iter};
use crate::{Error, Result};

/// A sequence addressed by positions.
pub trait LinearList {
    /// Element type.
    type Item;

    /// Locator of an element or of the past-the-end slot.
    type Pos: Copy + Eq + core::fmt::Debug;

    /// Iterator over mutable references, in order.
    type IterMut<'a>: Iterator<Item = &'a mut Self::Item>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first element, or `end()` when empty.
    fn begin(&self) -> Self::Pos;

    /// Past-the-end position.
    fn end(&self) -> Self::Pos;

    /// Position following `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos` is `end()` or not live.
    fn succ(&self, pos: Self::Pos) -> Result<Self::Pos>;

    /// Position preceding `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`] for forward-only containers,
    /// [`Error::InvalidPosition`] if `pos` is `begin()` or not live.
    fn pred(&self, pos: Self::Pos) -> Result<Self::Pos> {
        let _ = pos;
        Err(Error::Unsupported("predecessor lookup on a forward-only list"))
    }

    /// Returns the element at `pos`.
    fn get(&self, pos: Self::Pos) -> Result<&Self::Item>;

    /// Returns the element at `pos` mutably.
    fn get_mut(&mut self, pos: Self::Pos) -> Result<&mut Self::Item>;

    /// Inserts `value` before `pos`, returning the position of `value`.
    fn insert(&mut self, pos: Self::Pos, value: Self::Item) -> Result<Self::Pos>;

    /// Removes the element at `pos`, returning it together with the
    /// position of the element that followed it.
    fn take(&mut self, pos: Self::Pos) -> Result<(Self::Item, Self::Pos)>;

    /// Removes the element at `pos`, returning the following position.
    #[inline]
    fn erase(&mut self, pos: Self::Pos) -> Result<Self::Pos> {
        self.take(pos).map(|(_, next)| next)
    }

    /// Position of the first element equal to `value`, or `end()`.
    fn find(&self, value: &Self::Item) -> Self::Pos
    where
        Self::Item: PartialEq,
    {
        let end = self.end();
        let mut pos = self.begin();
        while pos != end {
            match self.get(pos) {
                Ok(item) if item == value => return pos,
                Ok(_) => {}
                Err(_) => break,
            }
            match self.succ(pos) {
                Ok(next) => pos = next,
                Err(_) => break,
            }
        }
        end
    }

    /// Returns the first element.
    #[inline]
    fn front(&self) -> Result<&Self::Item> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.begin())
    }

    /// Returns the last element.
    #[inline]
    fn back(&self) -> Result<&Self::Item> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.get(self.pred(self.end())?)
    }

    /// Inserts `value` at the front.
    #[inline]
    fn push_front(&mut self, value: Self::Item) -> Result<Self::Pos> {
        self.insert(self.begin(), value)
    }

    /// Inserts `value` at the back.
    #[inline]
    fn push_back(&mut self, value: Self::Item) -> Result<Self::Pos> {
        self.insert(self.end(), value)
    }

    /// Removes and returns the first element.
    #[inline]
    fn pop_front(&mut self) -> Result<Self::Item> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.take(self.begin()).map(|(value, _)| value)
    }

    /// Removes and returns the last element.
    #[inline]
    fn pop_back(&mut self) -> Result<Self::Item> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let last = self.pred(self.end())?;
        self.take(last).map(|(value, _)| value)
    }

    /// Iterates over the elements in order.
    #[inline]
    fn elements(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Iterates over mutable references to the elements in order.
    ///
    /// The references are disjoint and may all be held at once.
    fn elements_mut(&mut self) -> Self::IterMut<'_>;

    /// Read-only cursor at `pos`.
    #[inline]
    fn cursor(&self, pos: Self::Pos) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, pos)
    }

    /// Mutating cursor at `pos`.
    #[inline]
    fn cursor_mut(&mut self, pos: Self::Pos) -> CursorMut<'_, Self>
    where
        Self: Sized,
    {
        CursorMut::new(self, pos)
    }
}

/// Marker for containers whose [`LinearList::pred`] is supported in O(1).
pub trait Bidirectional: LinearList {}

/// Containers whose positions convert to and from ranks in O(1).
pub trait RandomAccess: Bidirectional {
    /// Rank of `pos` (`len()` for `end()`).
    fn rank(&self, pos: Self::Pos) -> usize;

    /// Position at `rank`, accepting `len()` for `end()`.
    fn pos_at(&self, rank: usize) -> Result<Self::Pos>;

    /// Element at `rank`.
    #[inline]
    fn at(&self, rank: usize) -> Result<&Self::Item> {
        self.get(self.pos_at(rank)?)
    }
}

/// Containers whose positions name nodes rather than ranks.
///
/// `insert` and `take` only touch the node at the given position and its
/// immediate neighbours, so a position elsewhere in the sequence is never
/// shifted onto another element. In particular the position returned by
/// [`LinearList::take`] stays valid across a following
/// [`LinearList::insert`] at an earlier position, which is what
/// [`sort::list::merge_sort_by`](crate::sort::list::merge_sort_by) relies on.
pub trait NodeList: LinearList {}
