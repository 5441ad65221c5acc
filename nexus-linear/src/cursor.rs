//! Cursors and iterators over any [`LinearList`].
//!
//! A cursor pairs a borrow of the container with a position token. The
//! read-only [`Cursor`] is `Copy` and can walk in both directions on a
//! [`Bidirectional`] container or jump by rank on a [`RandomAccess`] one.
//! [`CursorMut`] additionally inserts and removes at its position.
//!
//! ```
//! use nexus_linear::{DoublyLinkedList, LinearList};
//!
//! let mut list: DoublyLinkedList<u64> = [1, 2, 3, 4].into_iter().collect();
//!
//! // Remove the even elements while walking.
//! let mut cursor = list.cursor_mut(list.begin());
//! while let Some(&value) = cursor.current() {
//!     if value % 2 == 0 {
//!         cursor.remove_current().unwrap();
//!     } else {
//!         cursor.move_next().unwrap();
//!     }
//! }
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//! ```

use crate::linear::{Bidirectional, LinearList, RandomAccess};
use crate::{Error, Result};

// =============================================================================
// Cursor
// =============================================================================

/// Read-only position into a container.
pub struct Cursor<'a, L: LinearList> {
    list: &'a L,
    pos: L::Pos,
}

impl<L: LinearList> Clone for Cursor<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: LinearList> Copy for Cursor<'_, L> {}

impl<L: LinearList> PartialEq for Cursor<'_, L> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<L: LinearList> Eq for Cursor<'_, L> {}

impl<L: LinearList> core::fmt::Debug for Cursor<'_, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

impl<'a, L: LinearList> Cursor<'a, L> {
    /// Creates a cursor at `pos`.
    #[inline]
    pub fn new(list: &'a L, pos: L::Pos) -> Self {
        Self { list, pos }
    }

    /// Returns the position token.
    #[inline]
    pub fn position(&self) -> L::Pos {
        self.pos
    }

    /// Returns `true` at the past-the-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.list.end()
    }

    /// Returns the element under the cursor, `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<&'a L::Item> {
        self.list.get(self.pos).ok()
    }

    /// Returns the element after the cursor without moving.
    #[inline]
    pub fn peek_next(&self) -> Option<&'a L::Item> {
        let next = self.list.succ(self.pos).ok()?;
        self.list.get(next).ok()
    }

    /// Advances one element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] when already at the end.
    #[inline]
    pub fn move_next(&mut self) -> Result<()> {
        self.pos = self.list.succ(self.pos)?;
        Ok(())
    }
}

impl<L: Bidirectional> Cursor<'_, L> {
    /// Steps back one element.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] when already at the first element.
    #[inline]
    pub fn move_prev(&mut self) -> Result<()> {
        self.pos = self.list.pred(self.pos)?;
        Ok(())
    }
}

impl<L: RandomAccess> Cursor<'_, L> {
    /// Rank of the cursor.
    #[inline]
    pub fn rank(&self) -> usize {
        self.list.rank(self.pos)
    }

    /// Moves `delta` elements forward (or back when negative) in O(1).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if the target falls outside `0..=len`.
    pub fn advance_by(&mut self, delta: isize) -> Result<()> {
        let target = self
            .rank()
            .checked_add_signed(delta)
            .ok_or(Error::InvalidPosition)?;
        self.pos = self.list.pos_at(target)?;
        Ok(())
    }

    /// Signed number of elements from `self` to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> isize {
        other.rank() as isize - self.rank() as isize
    }
}

// =============================================================================
// CursorMut
// =============================================================================

/// Mutating position into a container.
///
/// The cursor keeps denoting the *element* it was on across
/// [`insert_before`](Self::insert_before), even on containers where that
/// element moves to another node.
pub struct CursorMut<'a, L: LinearList> {
    list: &'a mut L,
    pos: L::Pos,
}

impl<'a, L: LinearList> CursorMut<'a, L> {
    /// Creates a mutating cursor at `pos`.
    #[inline]
    pub fn new(list: &'a mut L, pos: L::Pos) -> Self {
        Self { list, pos }
    }

    /// Returns the position token.
    #[inline]
    pub fn position(&self) -> L::Pos {
        self.pos
    }

    /// Returns `true` at the past-the-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.list.end()
    }

    /// Returns the element under the cursor.
    #[inline]
    pub fn current(&self) -> Option<&L::Item> {
        self.list.get(self.pos).ok()
    }

    /// Returns the element under the cursor mutably.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut L::Item> {
        self.list.get_mut(self.pos).ok()
    }

    /// Advances one element.
    #[inline]
    pub fn move_next(&mut self) -> Result<()> {
        self.pos = self.list.succ(self.pos)?;
        Ok(())
    }

    /// Inserts `value` before the cursor and returns its position.
    ///
    /// The cursor stays on the element it was on.
    pub fn insert_before(&mut self, value: L::Item) -> Result<L::Pos> {
        let inserted = self.list.insert(self.pos, value)?;
        self.pos = self.list.succ(inserted)?;
        Ok(inserted)
    }

    /// Removes the element under the cursor and moves to the next one.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] at the end.
    pub fn remove_current(&mut self) -> Result<L::Item> {
        let (value, next) = self.list.take(self.pos)?;
        self.pos = next;
        Ok(value)
    }

    /// Read-only view at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, L> {
        Cursor::new(self.list, self.pos)
    }
}

impl<L: Bidirectional> CursorMut<'_, L> {
    /// Steps back one element.
    #[inline]
    pub fn move_prev(&mut self) -> Result<()> {
        self.pos = self.list.pred(self.pos)?;
        Ok(())
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`LinearList`].
pub struct Iter<'a, L: LinearList> {
    list: &'a L,
    front: L::Pos,
    back: L::Pos,
    remaining: usize,
}

impl<'a, L: LinearList> Iter<'a, L> {
    /// Iterates over all of `list`.
    #[inline]
    pub fn new(list: &'a L) -> Self {
        Self {
            list,
            front: list.begin(),
            back: list.end(),
            remaining: list.len(),
        }
    }
}

impl<L: LinearList> Clone for Iter<'_, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, L: LinearList> Iterator for Iter<'a, L> {
    type Item = &'a L::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.list.get(self.front).ok()?;
        self.front = self.list.succ(self.front).ok()?;
        self.remaining -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<L: Bidirectional> DoubleEndedIterator for Iter<'_, L> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.list.pred(self.back).ok()?;
        self.remaining -= 1;
        self.list.get(self.back).ok()
    }
}

impl<L: LinearList> ExactSizeIterator for Iter<'_, L> {}
