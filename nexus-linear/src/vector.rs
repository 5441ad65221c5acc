//! Contiguous growable array driven by a [`CapacityPolicy`].
//!
//! Elements live in `[0, len)` of a single boxed buffer of `capacity` slots.
//! Positions are ranks (`usize`). They are *unstable*: inserting or erasing
//! before a rank shifts the element it denotes.
//!
//! # Example
//!
//! ```
//! use nexus_linear::Vector;
//!
//! let mut v: Vector<u32> = Vector::new();
//! for i in 0..5 {
//!     v.push_back(i).unwrap();
//! }
//! assert_eq!(v.len(), 5);
//! assert_eq!(v.capacity(), 8);
//!
//! v.insert(2, 42).unwrap();
//! assert_eq!(v.as_slice(), &[0, 1, 42, 2, 3, 4]);
//!
//! assert_eq!(v.erase(2), Ok(2));
//! assert_eq!(v.find(&3), 3);
//! assert_eq!(v.find(&99), v.len());
//! ```
//!
//! # Capacity
//!
//! The buffer grows only when an insert finds it full, asking the policy
//! for the next capacity. Removals consult the policy's shrink path, so a
//! [`Geometric`] policy with shrinking enabled releases memory lazily.

use core::mem::{self, MaybeUninit};
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;
use core::{fmt, ptr, slice};

use rand_core::RngCore;
use tracing::trace;

use crate::linear::{Bidirectional, LinearList, RandomAccess};
use crate::render::Render;
use crate::sort::{self, MergeStrategy};
use crate::{CapacityPolicy, Error, Geometric, Result};

/// A contiguous growable array.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `P`: Capacity policy (default [`Geometric::doubling`])
pub struct Vector<T, P: CapacityPolicy = Geometric> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
    policy: P,
}

impl<T> Vector<T> {
    /// Creates an empty vector with capacity 0 and the doubling policy.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(Geometric::doubling())
    }

    /// Creates an empty vector with exactly `capacity` slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, Geometric::doubling())
    }
}

impl<T, P: CapacityPolicy> Vector<T, P> {
    /// Creates an empty vector with capacity 0 using `policy`.
    #[inline]
    pub fn with_policy(policy: P) -> Self {
        Self::with_capacity_and_policy(0, policy)
    }

    /// Creates an empty vector with exactly `capacity` slots using `policy`.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
            policy,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the capacity policy.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [0, len) is initialized
        unsafe { slice::from_raw_parts(self.base(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: [0, len) is initialized
        unsafe { slice::from_raw_parts_mut(self.base_mut(), self.len) }
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos >= len`.
    #[inline]
    pub fn get(&self, pos: usize) -> Result<&T> {
        self.as_slice().get(pos).ok_or(Error::InvalidPosition)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `pos >= len`.
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
        self.as_mut_slice()
            .get_mut(pos)
            .ok_or(Error::InvalidPosition)
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `value` at rank `pos`, shifting `[pos, len)` one slot right.
    ///
    /// Returns `pos`. Grows through the policy first when full.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `pos > len`
    /// - [`Error::CapacityPolicyViolation`] if the policy does not make room
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize> {
        if pos > self.len {
            return Err(Error::InvalidPosition);
        }
        if self.len == self.capacity() {
            self.grow()?;
        }

        // Safety: capacity > len, so slots [pos, len] are in bounds.
        // ptr::copy is memmove, the suffix shift may overlap.
        unsafe {
            let slot = self.base_mut().add(pos);
            ptr::copy(slot, slot.add(1), self.len - pos);
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(pos)
    }

    /// Appends `value`. Amortized O(1) under a geometric policy.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<usize> {
        self.insert(self.len, value)
    }

    /// Prepends `value`. O(len).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<usize> {
        self.insert(0, value)
    }

    /// Appends `value` only if no reallocation is needed.
    ///
    /// Hands `value` back when the vector is full.
    #[inline]
    pub fn push_within_capacity(&mut self, value: T) -> core::result::Result<(), T> {
        if self.len == self.capacity() {
            return Err(value);
        }
        self.buf[self.len].write(value);
        self.len += 1;
        Ok(())
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes and returns the element at `pos`, shifting the suffix left.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `pos >= len`
    /// - [`Error::CapacityPolicyViolation`] if the shrink path would drop
    ///   below the remaining length (nothing is removed in that case)
    pub fn remove(&mut self, pos: usize) -> Result<T> {
        if pos >= self.len {
            return Err(Error::InvalidPosition);
        }
        let target = self.shrink_target(self.len - 1)?;

        // Safety: pos < len; the suffix [pos + 1, len) moves down by one
        let value = unsafe {
            let slot = self.base_mut().add(pos);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - pos - 1);
            value
        };
        self.len -= 1;

        if target < self.capacity() {
            self.reallocate(target);
        }
        Ok(value)
    }

    /// Erases the element at `pos`.
    ///
    /// Returns the position of the element that followed it, which is `pos`
    /// itself (or `len()` if the last element was erased).
    #[inline]
    pub fn erase(&mut self, pos: usize) -> Result<usize> {
        self.remove(pos).map(|_| pos)
    }

    /// Erases `[lo, hi)` and returns `lo`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] unless `lo <= hi <= len`.
    pub fn erase_range(&mut self, lo: usize, hi: usize) -> Result<usize> {
        if lo > hi || hi > self.len {
            return Err(Error::InvalidPosition);
        }
        if lo == hi {
            return Ok(lo);
        }
        let tail = self.len - hi;
        let target = self.shrink_target(lo + tail)?;

        // Safety: [lo, hi) is initialized and dropped exactly once; len is
        // lowered first so a panicking destructor leaks the tail instead of
        // double-dropping it.
        unsafe {
            let base = self.base_mut();
            self.len = lo;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(lo), hi - lo));
            ptr::copy(base.add(hi), base.add(lo), tail);
        }
        self.len = lo + tail;

        if target < self.capacity() {
            self.reallocate(target);
        }
        Ok(lo)
    }

    /// Removes and returns the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.remove(self.len - 1)
    }

    /// Removes and returns the first element. O(len).
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.remove(0)
    }

    /// Shortens the vector to `len` elements. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old = self.len;
        self.len = len;
        // Safety: [len, old) was initialized and is now outside the live range
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.base_mut().add(len),
                old - len,
            ));
        }
    }

    /// Drops every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    /// Ensures room for `additional` more elements with one exact
    /// allocation, bypassing the policy.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required > self.capacity() {
            self.reallocate(required);
        }
    }

    /// Shrinks capacity to the current length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            self.reallocate(self.len);
        }
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.capacity();
        let target = self.policy.apply(capacity, self.len);
        if target <= self.len {
            return Err(Error::CapacityPolicyViolation {
                required: self.len + 1,
                returned: target,
            });
        }
        self.reallocate(target);
        Ok(())
    }

    /// Capacity the shrink path wants once `len` elements remain.
    fn shrink_target(&self, len: usize) -> Result<usize> {
        let capacity = self.capacity();
        let target = self.policy.apply(capacity, len);
        if target < len {
            return Err(Error::CapacityPolicyViolation {
                required: len,
                returned: target,
            });
        }
        Ok(target.min(capacity))
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut buf = Box::new_uninit_slice(capacity);
        // Safety: both buffers hold at least len slots and are distinct
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }
        trace!(
            from = self.buf.len(),
            to = capacity,
            len = self.len,
            "vector reallocated"
        );
        // Old slots are MaybeUninit, nothing is dropped twice
        self.buf = buf;
    }

    #[inline]
    fn base(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    #[inline]
    fn base_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    /// Base pointer of the buffer, for iterators that keep several `&mut`
    /// into it alive at once. Take it once per iterator.
    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> NonNull<T> {
        NonNull::from(&mut self.buf[..]).cast::<T>()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the rank of the first element equal to `value`, or `len()`.
    pub fn find(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.as_slice()
            .iter()
            .position(|item| item == value)
            .unwrap_or(self.len)
    }

    /// In a sorted vector, returns the rank just past the last element not
    /// greater than `value`.
    ///
    /// Inserting at that rank keeps the vector sorted and places `value`
    /// after its equals.
    pub fn search_sorted(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.as_slice().partition_point(|item| item <= value)
    }

    /// Returns the number of adjacent pairs that are out of order.
    pub fn disordered(&self) -> usize
    where
        T: PartialOrd,
    {
        self.as_slice().windows(2).filter(|w| w[0] > w[1]).count()
    }

    /// Removes consecutive duplicates, returning how many were removed.
    pub fn dedup(&mut self) -> usize
    where
        T: PartialEq,
    {
        if self.len < 2 {
            return 0;
        }
        let items = self.as_mut_slice();
        let mut write = 1;
        for read in 1..items.len() {
            if items[read] != items[write - 1] {
                items.swap(read, write);
                write += 1;
            }
        }
        let removed = self.len - write;
        self.truncate(write);
        removed
    }

    /// Shuffles the elements uniformly with the caller's generator.
    pub fn shuffle<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        let items = self.as_mut_slice();
        for i in (1..items.len()).rev() {
            let j = below(rng, i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sorts with the top-down merge sort.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::top_down(self.as_mut_slice(), &mut |a: &T, b: &T| a < b);
    }

    /// Sorts with the chosen merge-sort variant and a strict `less`.
    ///
    /// All variants are stable.
    pub fn sort_by<F>(&mut self, strategy: MergeStrategy, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let items = self.as_mut_slice();
        match strategy {
            MergeStrategy::TopDown => sort::top_down(items, &mut less),
            MergeStrategy::BottomUp => sort::bottom_up(items, &mut less),
            MergeStrategy::InPlace => sort::in_place(items, &mut less),
        }
    }

    /// Renders as `[e1, e2, ...] (n: len) (m: capacity)`.
    pub fn render(&self) -> Render<'_, Self> {
        Render::new(self).size().capacity(self.capacity())
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

/// Unbiased draw from `0..bound`.
///
/// Draws below `2^64 mod bound` are rejected so every residue is backed by
/// the same number of raw values.
fn below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let x = rng.next_u64();
        if x >= threshold {
            return x % bound;
        }
    }
}

impl<T, P: CapacityPolicy> Drop for Vector<T, P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: CapacityPolicy + Clone> Clone for Vector<T, P> {
    /// Deep copy: exactly one `clone` per element, same capacity and policy.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity_and_policy(self.capacity(), self.policy.clone());
        for item in self.as_slice() {
            out.buf[out.len].write(item.clone());
            out.len += 1;
        }
        out
    }
}

impl<T: fmt::Debug, P: CapacityPolicy> fmt::Debug for Vector<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, P: CapacityPolicy, Q: CapacityPolicy> PartialEq<Vector<T, Q>>
    for Vector<T, P>
{
    fn eq(&self, other: &Vector<T, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P: CapacityPolicy> Eq for Vector<T, P> {}

impl<T, P: CapacityPolicy> Index<usize> for Vector<T, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, P: CapacityPolicy> IndexMut<usize> for Vector<T, P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, P: CapacityPolicy> AsRef<[T]> for Vector<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P: CapacityPolicy> AsMut<[T]> for Vector<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P: CapacityPolicy> Extend<T> for Vector<T, P> {
    /// # Panics
    ///
    /// Panics if the capacity policy violates its contract.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            if let Err(err) = self.push_back(item) {
                panic!("{err}");
            }
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a Vector<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: CapacityPolicy> IntoIterator for &'a mut Vector<T, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, P: CapacityPolicy> IntoIterator for Vector<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let buf = mem::replace(&mut self.buf, Box::new_uninit_slice(0));
        let back = mem::replace(&mut self.len, 0);
        IntoIter { buf, front: 0, back }
    }
}

/// Owning iterator over the elements of a [`Vector`].
pub struct IntoIter<T> {
    buf: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // Safety: [front, back) is initialized and each slot is read once
        let value = unsafe { self.buf[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // Safety: as in next()
        Some(unsafe { self.buf[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.front..self.back] {
            // Safety: unread slots are still initialized
            unsafe { slot.assume_init_drop() };
        }
    }
}

// =============================================================================
// LinearList
// =============================================================================

impl<T, P: CapacityPolicy> LinearList for Vector<T, P> {
    type Item = T;
    type Pos = usize;
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len
    }

    #[inline]
    fn succ(&self, pos: usize) -> Result<usize> {
        if pos < self.len {
            Ok(pos + 1)
        } else {
            Err(Error::InvalidPosition)
        }
    }

    #[inline]
    fn pred(&self, pos: usize) -> Result<usize> {
        if pos > 0 && pos <= self.len {
            Ok(pos - 1)
        } else {
            Err(Error::InvalidPosition)
        }
    }

    #[inline]
    fn get(&self, pos: usize) -> Result<&T> {
        Vector::get(self, pos)
    }

    #[inline]
    fn get_mut(&mut self, pos: usize) -> Result<&mut T> {
        Vector::get_mut(self, pos)
    }

    #[inline]
    fn insert(&mut self, pos: usize, value: T) -> Result<usize> {
        Vector::insert(self, pos, value)
    }

    #[inline]
    fn take(&mut self, pos: usize) -> Result<(T, usize)> {
        Vector::remove(self, pos).map(|value| (value, pos))
    }

    #[inline]
    fn elements_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
}

impl<T, P: CapacityPolicy> Bidirectional for Vector<T, P> {}

impl<T, P: CapacityPolicy> RandomAccess for Vector<T, P> {
    #[inline]
    fn rank(&self, pos: usize) -> usize {
        pos
    }

    #[inline]
    fn pos_at(&self, rank: usize) -> Result<usize> {
        if rank <= self.len {
            Ok(rank)
        } else {
            Err(Error::InvalidPosition)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arithmetic;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn new_is_empty() {
        let v: Vector<u64> = Vector::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.front(), Err(Error::EmptyContainer));
        assert_eq!(v.back(), Err(Error::EmptyContainer));
    }

    #[test]
    fn doubling_growth_reaches_eight_after_five() {
        let mut v: Vector<u64> = Vector::new();
        let mut seen = vec![v.capacity()];
        for i in 0..5 {
            v.push_back(i).unwrap();
            if *seen.last().unwrap() != v.capacity() {
                seen.push(v.capacity());
            }
        }
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 8);
        assert_eq!(seen, vec![0, 1, 2, 4, 8]);
    }

    #[test]
    fn arithmetic_growth() {
        let mut v = Vector::with_policy(Arithmetic::new(4).unwrap());
        for i in 0..9 {
            v.push_back(i).unwrap();
        }
        assert_eq!(v.capacity(), 12);
    }

    #[test]
    fn insert_shifts_suffix() {
        let mut v: Vector<u64> = Vector::from([1, 2, 4, 5]);
        assert_eq!(v.insert(2, 3), Ok(2));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.insert(0, 0), Ok(0));
        assert_eq!(v.insert(6, 6), Ok(6));
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn insert_past_end_is_invalid() {
        let mut v: Vector<u64> = Vector::from([1, 2]);
        assert_eq!(v.insert(3, 9), Err(Error::InvalidPosition));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn erase_returns_following_position() {
        let mut v: Vector<u64> = Vector::from([10, 20, 30]);
        assert_eq!(v.erase(1), Ok(1));
        assert_eq!(v[1], 30);
        assert_eq!(v.erase(1), Ok(1));
        assert_eq!(v.len(), 1);
        assert_eq!(v.erase(1), Err(Error::InvalidPosition));
        assert_eq!(v.erase(v.len()), Err(Error::InvalidPosition));
    }

    #[test]
    fn pop_on_empty() {
        let mut v: Vector<u64> = Vector::new();
        assert_eq!(v.pop_back(), Err(Error::EmptyContainer));
        assert_eq!(v.pop_front(), Err(Error::EmptyContainer));
        v.push_back(1).unwrap();
        v.push_front(0).unwrap();
        assert_eq!(v.pop_front(), Ok(0));
        assert_eq!(v.pop_back(), Ok(1));
    }

    #[test]
    fn find_and_search_sorted() {
        let v: Vector<u64> = Vector::from([1, 3, 3, 5, 8]);
        assert_eq!(v.find(&3), 1);
        assert_eq!(v.find(&4), 5);
        assert_eq!(v.search_sorted(&0), 0);
        assert_eq!(v.search_sorted(&3), 3);
        assert_eq!(v.search_sorted(&4), 3);
        assert_eq!(v.search_sorted(&9), 5);
    }

    #[test]
    fn erase_range_middle() {
        let mut v: Vector<u64> = (0..10).collect();
        assert_eq!(v.erase_range(2, 5), Ok(2));
        assert_eq!(v.as_slice(), &[0, 1, 5, 6, 7, 8, 9]);
        assert_eq!(v.erase_range(3, 3), Ok(3));
        assert_eq!(v.erase_range(4, 2), Err(Error::InvalidPosition));
        assert_eq!(v.erase_range(0, 8), Err(Error::InvalidPosition));
    }

    #[test]
    fn shrink_policy_releases_lazily() {
        let policy = Geometric::doubling().with_shrink(2, 4).unwrap();
        let mut v = Vector::with_policy(policy);
        for i in 0..64u64 {
            v.push_back(i).unwrap();
        }
        assert_eq!(v.capacity(), 64);
        while v.len() > 16 {
            v.pop_back().unwrap();
        }
        assert_eq!(v.capacity(), 64);
        v.pop_back().unwrap();
        assert_eq!(v.len(), 15);
        assert_eq!(v.capacity(), 32);
        assert_eq!(v.as_slice(), (0..15).collect::<Vec<_>>().as_slice());
    }

    struct Stuck;

    impl CapacityPolicy for Stuck {
        fn apply(&self, capacity: usize, _size: usize) -> usize {
            capacity
        }
    }

    #[test]
    fn policy_violation_is_reported() {
        let mut v = Vector::with_capacity_and_policy(1, Stuck);
        v.push_back(1u8).unwrap();
        assert_eq!(
            v.push_back(2),
            Err(Error::CapacityPolicyViolation {
                required: 2,
                returned: 1
            })
        );
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn reserve_and_shrink_to_fit() {
        let mut v: Vector<u64> = Vector::new();
        v.reserve(10);
        assert_eq!(v.capacity(), 10);
        v.extend(0..3);
        v.shrink_to_fit();
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn push_within_capacity_hands_back() {
        let mut v: Vector<u64> = Vector::with_capacity(1);
        assert_eq!(v.push_within_capacity(1), Ok(()));
        assert_eq!(v.push_within_capacity(2), Err(2));
    }

    #[test]
    fn dedup_and_disordered() {
        let mut v: Vector<u64> = Vector::from([1, 1, 2, 2, 2, 3, 1, 1]);
        assert_eq!(v.disordered(), 1);
        assert_eq!(v.dedup(), 4);
        assert_eq!(v.as_slice(), &[1, 2, 3, 1]);
    }

    #[test]
    fn shuffle_is_a_seeded_permutation() {
        let mut a: Vector<u64> = (0..100).collect();
        let mut b: Vector<u64> = (0..100).collect();
        a.shuffle(&mut SmallRng::seed_from_u64(7));
        b.shuffle(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a.as_slice(), (0..100).collect::<Vec<_>>().as_slice());

        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted.as_slice(), (0..100).collect::<Vec<_>>().as_slice());
    }

    /// Replays a fixed sequence of words.
    struct Scripted(std::vec::IntoIter<u64>);

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next().expect("script exhausted")
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            rand_core::impls::fill_bytes_via_next(self, dest);
        }

        fn try_fill_bytes(
            &mut self,
            dest: &mut [u8],
        ) -> core::result::Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn below_rejects_the_biased_zone() {
        // 2^64 mod 3 == 1, so a raw 0 would favour residue 0
        let mut rng = Scripted(vec![0, 5].into_iter());
        assert_eq!(below(&mut rng, 3), 2);

        // powers of two have no biased zone
        let mut rng = Scripted(vec![0].into_iter());
        assert_eq!(below(&mut rng, 4), 0);

        let mut rng = Scripted(vec![u64::MAX].into_iter());
        assert_eq!(below(&mut rng, 1), 0);
    }

    #[test]
    fn shuffle_draws_past_rejected_words() {
        // i = 2 draws below 3: 0 is rejected, 4 % 3 == 1 swaps ranks 2 and 1;
        // i = 1 draws below 2: 1 swaps rank 1 with itself
        let mut v: Vector<u64> = Vector::from([10, 20, 30]);
        v.shuffle(&mut Scripted(vec![0, 4, 1].into_iter()));
        assert_eq!(v.as_slice(), &[10, 30, 20]);
    }

    #[derive(Debug)]
    struct CloneCounter(Rc<Cell<usize>>);

    impl Clone for CloneCounter {
        fn clone(&self) -> Self {
            self.0.set(self.0.get() + 1);
            Self(Rc::clone(&self.0))
        }
    }

    #[test]
    fn clone_copies_each_element_once() {
        let clones = Rc::new(Cell::new(0));
        let v: Vector<CloneCounter> = (0..7).map(|_| CloneCounter(Rc::clone(&clones))).collect();
        let copy = v.clone();
        assert_eq!(clones.get(), 7);
        assert_eq!(copy.len(), 7);
        assert_eq!(copy.capacity(), v.capacity());
    }

    #[test]
    fn clone_has_value_semantics() {
        let v: Vector<u64> = Vector::from([1, 2, 3]);
        let mut copy = v.clone();
        copy.push_back(4).unwrap();
        copy[0] = 100;
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
    }

    #[test]
    fn take_leaves_empty_source() {
        let mut v: Vector<String> = Vector::from(["a".to_string(), "b".to_string()]);
        let moved = mem::take(&mut v);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 0);
        assert_eq!(moved.len(), 2);
        v.push_back("c".into()).unwrap();
        assert_eq!(v.as_slice(), &["c".to_string()]);
    }

    #[test]
    fn into_iter_drops_remaining() {
        let drops = Rc::new(Cell::new(0));

        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let v: Vector<DropCounter> = (0..5).map(|_| DropCounter(Rc::clone(&drops))).collect();
        let mut iter = v.into_iter();
        drop(iter.next());
        drop(iter.next_back());
        assert_eq!(drops.get(), 2);
        assert_eq!(iter.len(), 3);
        drop(iter);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn drop_cleans_up() {
        let drops = Rc::new(Cell::new(0));

        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        {
            let mut v = Vector::new();
            for _ in 0..10 {
                v.push_back(DropCounter(Rc::clone(&drops))).unwrap();
            }
            v.erase_range(0, 3).unwrap();
            assert_eq!(drops.get(), 3);
            v.truncate(5);
            assert_eq!(drops.get(), 5);
            assert_eq!(v.len(), 5);
        }
        assert_eq!(drops.get(), 10);
    }

    #[test]
    fn linear_list_positions() {
        let mut v: Vector<u64> = Vector::from([1, 2, 3]);
        assert_eq!(LinearList::begin(&v), 0);
        assert_eq!(LinearList::end(&v), 3);
        assert_eq!(v.succ(2), Ok(3));
        assert_eq!(v.succ(3), Err(Error::InvalidPosition));
        assert_eq!(v.pred(0), Err(Error::InvalidPosition));
        assert_eq!(v.pos_at(3), Ok(3));
        assert_eq!(v.pos_at(4), Err(Error::InvalidPosition));
        assert_eq!(LinearList::take(&mut v, 0), Ok((1, 0)));
        assert_eq!(v.as_slice(), &[2, 3]);
    }
}
