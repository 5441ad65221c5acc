//! Linear collections behind one position-based contract.
//!
//! This crate provides a growable array and three linked lists that share a
//! single abstraction: a container hands out *positions*, and every insert
//! and erase takes a position and returns one.
//!
//! ```text
//! Vector<T, P>          - contiguous, rank positions, pluggable growth policy
//! DoublyLinkedList<T>   - sentinels, generational handles, O(1) splice
//! ForwardList<T>        - sentinels + tail bookkeeping, payload-shuffle insert/erase
//! StaticList<T, P>      - doubly linked by indices into one Vector, free-list reuse
//! ```
//!
//! Algorithms are written once against the capability traits in [`linear`]
//! and run on any container that provides what they need.
//!
//! # Quick Start
//!
//! ```
//! use nexus_linear::{DoublyLinkedList, LinearList, Vector};
//!
//! let mut v: Vector<u32> = [3, 1, 2].into();
//! v.sort();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//!
//! let mut list: DoublyLinkedList<u32> = v.iter().copied().collect();
//! let two = list.find(&2);
//! list.insert_as_next(two, 5).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 5, 3]);
//! ```
//!
//! # Capability Traits
//!
//! ```text
//! LinearList            - begin/end, succ, get, insert, take
//!     ├── Bidirectional - O(1) pred
//!     │       └── RandomAccess - O(1) rank <-> position
//!     └── NodeList      - positions name nodes, not ranks
//! ```
//!
//! # Errors
//!
//! Expected failures (stale or sentinel positions, empty containers, a
//! capacity policy breaking its contract) come back as [`Error`]. Corrupted
//! internal state, such as releasing a free-list slot twice, panics.
//!
//! # Sorting
//!
//! | Container | Sort | Notes |
//! |-----------|------|-------|
//! | [`Vector`] | [`Vector::sort_by`] | top-down, bottom-up or in-place ([`MergeStrategy`]) |
//! | [`DoublyLinkedList`] | [`DoublyLinkedList::sort_by`] | relinks nodes, payloads never move |
//! | [`ForwardList`], [`StaticList`] | [`sort::list::merge_sort_by`] | position based |
//!
//! All sorts are stable.
//!
//! # Logging
//!
//! Reallocations, arena growth, slot reuse and large sorts emit `tracing`
//! events at `trace`/`debug` level. No subscriber is installed here.

#![warn(missing_docs)]

pub mod arena;
pub mod capacity;
pub mod cursor;
pub mod error;
pub mod forward_list;
pub mod handle;
pub mod linear;
pub mod list;
mod node;
pub mod render;
pub mod sort;
pub mod static_list;
pub mod vector;

pub use arena::Arena;
pub use capacity::{Arithmetic, CapacityPolicy, Geometric, Shrink};
pub use cursor::{Cursor, CursorMut, Iter};
pub use error::{Error, Result};
pub use forward_list::ForwardList;
pub use handle::NodeRef;
pub use linear::{Bidirectional, LinearList, NodeList, RandomAccess};
pub use list::DoublyLinkedList;
pub use render::Render;
pub use sort::MergeStrategy;
pub use static_list::StaticList;
pub use vector::Vector;
