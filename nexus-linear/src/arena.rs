//! Generational slab backing the pointer-style lists.
//!
//! Nodes live in a [`Vector`] of slots; a released slot goes on an intrusive
//! LIFO free list and is handed out again by the next insert. Every release
//! bumps the slot's generation, so handles to erased nodes are detected
//! rather than silently aliasing the node that reused the slot.
//!
//! ```
//! use nexus_linear::{Arena, Error};
//!
//! let mut arena: Arena<&str> = Arena::new();
//! let a = arena.insert("a").unwrap();
//! assert_eq!(arena.remove(a), Ok("a"));
//!
//! // The slot is reused, the old handle is not.
//! let b = arena.insert("b").unwrap();
//! assert_eq!(a.index(), b.index());
//! assert_eq!(arena.get(a), Err(Error::InvalidPosition));
//! assert_eq!(arena.get(b), Ok(&"b"));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use tracing::trace;

use crate::{CapacityPolicy, Error, Geometric, NodeRef, Result, Vector};

const NO_FREE: u32 = u32::MAX;

struct Slot<T> {
    generation: u32,
    entry: Entry<T>,
}

enum Entry<T> {
    Occupied(T),
    Vacant { next_free: u32 },
}

/// Slab of `T` addressed by [`NodeRef`].
pub struct Arena<T, P: CapacityPolicy = Geometric> {
    slots: Vector<Slot<T>, P>,
    /// Head of the free list, `NO_FREE` when empty.
    free_head: u32,
    len: usize,
}

impl<T> Arena<T> {
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self::with_policy(Geometric::default())
    }

    /// Creates an empty arena with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vector::with_capacity(capacity),
            free_head: NO_FREE,
            len: 0,
        }
    }
}

impl<T, P: CapacityPolicy> Arena<T, P> {
    /// Creates an empty arena whose slot vector grows by `policy`.
    #[inline]
    pub fn with_policy(policy: P) -> Self {
        Self {
            slots: Vector::with_policy(policy),
            free_head: NO_FREE,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots ever created (occupied or free).
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity of the slot vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `value`, reusing the most recently freed slot if there is one.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::CapacityPolicyViolation`] from the slot vector.
    pub fn insert(&mut self, value: T) -> Result<NodeRef> {
        if self.free_head != NO_FREE {
            let index = self.free_head;
            let slot = &mut self.slots[index as usize];
            let Entry::Vacant { next_free } = slot.entry else {
                unreachable!("free list points at an occupied slot");
            };
            self.free_head = next_free;
            slot.entry = Entry::Occupied(value);
            self.len += 1;
            trace!(index, generation = slot.generation, "arena slot reused");
            return Ok(NodeRef::new(index, slot.generation));
        }

        let index = self.slots.len();
        assert!(index < NO_FREE as usize, "arena exceeds u32 slots");
        if index == self.slots.capacity() {
            trace!(slots = index, "arena growing");
        }
        self.slots.push_back(Slot {
            generation: 0,
            entry: Entry::Occupied(value),
        })?;
        self.len += 1;
        Ok(NodeRef::new(index as u32, 0))
    }

    /// Removes and returns the value behind `node`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPosition`] if `node` is stale or was never issued.
    pub fn remove(&mut self, node: NodeRef) -> Result<T> {
        if !self.contains(node) {
            return Err(Error::InvalidPosition);
        }
        let slot = &mut self.slots[node.index()];
        let entry = core::mem::replace(
            &mut slot.entry,
            Entry::Vacant {
                next_free: self.free_head,
            },
        );
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = node.index() as u32;
        self.len -= 1;
        match entry {
            Entry::Occupied(value) => Ok(value),
            Entry::Vacant { .. } => unreachable!("contains() checked occupancy"),
        }
    }

    /// Returns `true` if `node` refers to a live value.
    #[inline]
    pub fn contains(&self, node: NodeRef) -> bool {
        matches!(
            self.slots.get(node.index()),
            Ok(Slot { generation, entry: Entry::Occupied(_) }) if *generation == node.generation()
        )
    }

    /// Returns the value behind `node`.
    #[inline]
    pub fn get(&self, node: NodeRef) -> Result<&T> {
        match self.slots.get(node.index()) {
            Ok(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == node.generation() => Ok(value),
            _ => Err(Error::InvalidPosition),
        }
    }

    /// Returns the value behind `node` mutably.
    #[inline]
    pub fn get_mut(&mut self, node: NodeRef) -> Result<&mut T> {
        match self.slots.get_mut(node.index()) {
            Ok(Slot {
                generation,
                entry: Entry::Occupied(value),
            }) if *generation == node.generation() => Ok(value),
            _ => Err(Error::InvalidPosition),
        }
    }

    /// Returns the value behind `node` without checking it.
    ///
    /// # Safety
    ///
    /// `node` must be live in this arena.
    #[inline]
    pub unsafe fn get_unchecked(&self, node: NodeRef) -> &T {
        debug_assert!(self.contains(node), "stale node {node:?}");
        // Safety: caller guarantees the slot exists and is occupied
        match unsafe { self.slots.as_slice().get_unchecked(node.index()) }.entry {
            Entry::Occupied(ref value) => value,
            Entry::Vacant { .. } => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Returns the value behind `node` mutably without checking it.
    ///
    /// # Safety
    ///
    /// `node` must be live in this arena.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, node: NodeRef) -> &mut T {
        debug_assert!(self.contains(node), "stale node {node:?}");
        // Safety: caller guarantees the slot exists and is occupied
        match unsafe { self.slots.as_mut_slice().get_unchecked_mut(node.index()) }.entry {
            Entry::Occupied(ref mut value) => value,
            Entry::Vacant { .. } => unsafe { core::hint::unreachable_unchecked() },
        }
    }

    /// Raw view of the slots for iterators that hold `&mut` references to
    /// several values at once.
    #[inline]
    pub(crate) fn raw_values(&mut self) -> RawValues<'_, T> {
        RawValues {
            slots: self.slots.len(),
            base: self.slots.as_mut_ptr(),
            _marker: PhantomData,
        }
    }

    /// Drops every value. Slots stay allocated and move to the free list;
    /// all outstanding handles become stale.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            if let Entry::Occupied(_) = slot.entry {
                slot.entry = Entry::Vacant {
                    next_free: self.free_head,
                };
                slot.generation = slot.generation.wrapping_add(1);
                self.free_head = index as u32;
            }
        }
        self.len = 0;
    }
}

/// Slot storage of an [`Arena`] seen through its base pointer.
///
/// The pointer is taken once, so handing out a reference to one value never
/// retags the storage of the values handed out before it.
pub(crate) struct RawValues<'a, T> {
    base: NonNull<Slot<T>>,
    slots: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> RawValues<'a, T> {
    /// Returns the value behind `node` for the rest of `'a`.
    ///
    /// # Safety
    ///
    /// `node` must be live, and no reference to its value may have been
    /// handed out by this view before.
    #[inline]
    pub(crate) unsafe fn value_mut(&mut self, node: NodeRef) -> &'a mut T {
        debug_assert!(node.index() < self.slots, "node {node:?} out of range");
        // Safety: the slot is in bounds and occupied (caller contract); the
        // reference covers this one slot
        match unsafe { &mut (*self.base.as_ptr().add(node.index())).entry } {
            Entry::Occupied(value) => value,
            Entry::Vacant { .. } => unsafe { core::hint::unreachable_unchecked() },
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: CapacityPolicy> fmt::Debug for Arena<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn insert_get_remove() {
        let mut arena = Arena::new();
        let a = arena.insert(1u64).unwrap();
        let b = arena.insert(2u64).unwrap();
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Ok(&1));
        *arena.get_mut(b).unwrap() = 20;
        assert_eq!(arena.remove(b), Ok(20));
        assert_eq!(arena.remove(b), Err(Error::InvalidPosition));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let keys: Vec<_> = (0..4u64).map(|i| arena.insert(i).unwrap()).collect();
        arena.remove(keys[1]).unwrap();
        arena.remove(keys[3]).unwrap();

        let first = arena.insert(10).unwrap();
        let second = arena.insert(11).unwrap();
        assert_eq!(first.index(), keys[3].index());
        assert_eq!(second.index(), keys[1].index());
        assert_eq!(arena.slots(), 4);
    }

    #[test]
    fn stale_handles_rejected() {
        let mut arena = Arena::new();
        let old = arena.insert("old").unwrap();
        arena.remove(old).unwrap();
        let new = arena.insert("new").unwrap();
        assert_eq!(old.index(), new.index());
        assert!(!arena.contains(old));
        assert_eq!(arena.get(old), Err(Error::InvalidPosition));
        assert_eq!(arena.get(NodeRef::NONE), Err(Error::InvalidPosition));
    }

    #[test]
    fn clear_drops_and_invalidates() {
        let drops = Rc::new(Cell::new(0));
        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut arena = Arena::new();
        let keys: Vec<_> = (0..5)
            .map(|_| arena.insert(DropCounter(drops.clone())).unwrap())
            .collect();
        arena.clear();
        assert_eq!(drops.get(), 5);
        assert!(arena.is_empty());
        assert!(keys.iter().all(|&k| !arena.contains(k)));

        // Slots are reused after clear
        arena.insert(DropCounter(drops.clone())).unwrap();
        assert_eq!(arena.slots(), 5);
        drop(arena);
        assert_eq!(drops.get(), 6);
    }
}
