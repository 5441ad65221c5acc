//! Stable merge sorts.
//!
//! Every variant is driven by a strict comparator `less(a, b)` and is stable:
//! when neither `less(a, b)` nor `less(b, a)` holds, the element that came
//! first in the input comes first in the output.
//!
//! | Variant | Works on | Extra space |
//! |---------|----------|-------------|
//! | [`top_down`] | slices | `n / 2` elements, allocated once |
//! | [`bottom_up`] | slices | up to `n` elements, grown per pass |
//! | [`in_place`] | slices | O(log n) stack |
//! | [`DoublyLinkedList::sort_by`](crate::DoublyLinkedList::sort_by) | linked nodes | O(log n) stack |
//! | [`list::merge_sort_by`] | any [`NodeList`](crate::NodeList) | O(log n) stack |
//!
//! ```
//! use nexus_linear::{MergeStrategy, Vector};
//!
//! let mut v: Vector<(u8, char)> = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into();
//! v.sort_by(MergeStrategy::InPlace, |a, b| a.0 < b.0);
//! assert_eq!(v.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
//! ```

mod in_place;
pub mod list;
mod merge;

pub use in_place::in_place;
pub use merge::{bottom_up, top_down};

/// Inputs at least this long emit a `debug!` event when sorted.
pub(crate) const LARGE_SORT: usize = 1 << 16;

/// Which slice merge sort [`Vector::sort_by`](crate::Vector::sort_by) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MergeStrategy {
    /// Recursive halving, merging through a buffer sized to the left half.
    #[default]
    TopDown,
    /// Iterative passes of width 1, 2, 4, ... through a shared buffer.
    BottomUp,
    /// No buffer; merges by rotating blocks.
    InPlace,
}
