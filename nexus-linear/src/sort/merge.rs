//! Buffered merge sorts over slices.

use core::ptr;

use tracing::debug;

use super::LARGE_SORT;

/// Top-down merge sort.
///
/// Splits at the midpoint, sorts both halves recursively and merges them by
/// copying the left half into a buffer that is allocated once, sized to the
/// largest left half, and reused by every merge.
pub fn top_down<T, F>(v: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    if n >= LARGE_SORT {
        debug!(len = n, "top-down merge sort");
    }
    let mut buf = Vec::with_capacity(n / 2);
    sort_range(v, &mut buf, less);
}

fn sort_range<T, F>(v: &mut [T], buf: &mut Vec<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    sort_range(&mut v[..mid], buf, less);
    sort_range(&mut v[mid..], buf, less);
    merge(v, mid, buf, less);
}

/// Bottom-up merge sort.
///
/// Merges adjacent runs of width 1, 2, 4, ... until one run covers the
/// slice. A trailing run shorter than the width is merged as is, or left
/// alone when it has no partner.
pub fn bottom_up<T, F>(v: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    if n >= LARGE_SORT {
        debug!(len = n, "bottom-up merge sort");
    }
    let mut buf = Vec::new();
    let mut width = 1;
    while width < n {
        buf.reserve(width);
        let mut lo = 0;
        while lo + width < n {
            let hi = n.min(lo + 2 * width);
            merge(&mut v[lo..hi], width, &mut buf, less);
            lo += 2 * width;
        }
        width *= 2;
    }
}

/// Left-run elements still parked in the buffer. Dropping it writes them to
/// the front of the gap, which closes the gap exactly, even if `less`
/// panicked.
struct Hole<T> {
    src: *const T,
    end: *const T,
    dst: *mut T,
}

impl<T> Drop for Hole<T> {
    fn drop(&mut self) {
        // Safety: [src, end) are initialized buffer slots; the gap starting
        // at dst has exactly that many slots and does not overlap the buffer.
        unsafe {
            let len = self.end.offset_from(self.src) as usize;
            ptr::copy_nonoverlapping(self.src, self.dst, len);
        }
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`. Ties take the left run.
///
/// `buf` must have capacity for `mid` elements; its length stays zero so it
/// never drops what is parked in it.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut Vec<T>, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if mid == 0 || mid >= len {
        return;
    }
    // already in order
    if !less(&v[mid], &v[mid - 1]) {
        return;
    }
    debug_assert!(buf.capacity() >= mid);
    debug_assert!(buf.is_empty());

    let v = v.as_mut_ptr();
    let scratch = buf.as_mut_ptr();
    // Safety: every element is moved exactly once, either to its final slot
    // or into the buffer and back; dst never overtakes the right cursor, so
    // single-element copies never overlap.
    unsafe {
        ptr::copy_nonoverlapping(v, scratch, mid);
        let mut hole = Hole {
            src: scratch,
            end: scratch.add(mid),
            dst: v,
        };
        let mut right = v.add(mid);
        let right_end = v.add(len);

        while hole.src < hole.end && right < right_end {
            let take_right = less(&*right, &*hole.src);
            if take_right {
                ptr::copy_nonoverlapping(right, hole.dst, 1);
                right = right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.src, hole.dst, 1);
                hole.src = hole.src.add(1);
            }
            hole.dst = hole.dst.add(1);
        }
        // the rest of the right run is already in place
    }
}
