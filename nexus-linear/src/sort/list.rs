//! Merge sort written against positions only.
//!
//! The sort never touches links directly: it reads elements through
//! [`LinearList::get`], walks with [`LinearList::succ`] and moves an element
//! by [`take`](LinearList::take) followed by [`insert`](LinearList::insert).
//! That makes it usable on any [`NodeList`], including a
//! [`ForwardList`](crate::ForwardList), whose insert and erase move payloads
//! between nodes. The algorithm only ever continues from positions the
//! container returned, so those payload moves are invisible to it.

use tracing::debug;

use super::LARGE_SORT;
use crate::Result;
use crate::linear::{LinearList, NodeList};

/// Stable merge sort of a whole list by a strict `less`.
///
/// ```
/// use nexus_linear::{ForwardList, sort};
///
/// let mut list: ForwardList<u32> = [3, 1, 2].into_iter().collect();
/// sort::list::merge_sort_by(&mut list, |a, b| a < b).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Only if the container rejects a position it handed out itself, or fails
/// to allocate a node.
pub fn merge_sort_by<L, F>(list: &mut L, mut less: F) -> Result<()>
where
    L: NodeList,
    F: FnMut(&L::Item, &L::Item) -> bool,
{
    let n = list.len();
    if n >= LARGE_SORT {
        debug!(len = n, "position merge sort");
    }
    let start = list.begin();
    sort_run(list, start, n, &mut less)?;
    Ok(())
}

/// Sorts the `n` elements starting at `start`, returning the position of
/// the first element of the sorted run.
fn sort_run<L, F>(list: &mut L, start: L::Pos, n: usize, less: &mut F) -> Result<L::Pos>
where
    L: NodeList,
    F: FnMut(&L::Item, &L::Item) -> bool,
{
    if n < 2 {
        return Ok(start);
    }
    let m = n / 2;
    let start = sort_run(list, start, m, less)?;
    let mut mid = start;
    for _ in 0..m {
        mid = list.succ(mid)?;
    }
    let mid = sort_run(list, mid, n - m, less)?;
    merge(list, start, m, mid, n - m, less)
}

/// Merges the `n` sorted elements at `p` with the `m` sorted elements at
/// `q` that follow them. Returns the first position of the merged run.
fn merge<L, F>(
    list: &mut L,
    mut p: L::Pos,
    mut n: usize,
    mut q: L::Pos,
    mut m: usize,
    less: &mut F,
) -> Result<L::Pos>
where
    L: NodeList,
    F: FnMut(&L::Item, &L::Item) -> bool,
{
    let mut start = p;
    while n > 0 && m > 0 {
        if !less(list.get(q)?, list.get(p)?) {
            p = list.succ(p)?;
            n -= 1;
        } else {
            let (value, next) = list.take(q)?;
            let inserted = list.insert(p, value)?;
            if p == start {
                start = inserted;
            }
            p = list.succ(inserted)?;
            q = next;
            m -= 1;
        }
    }
    Ok(start)
}
