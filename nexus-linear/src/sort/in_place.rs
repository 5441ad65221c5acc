//! Merge sort without an auxiliary buffer.
//!
//! Two adjacent sorted runs are merged by cutting both at matching ranks,
//! rotating the middle blocks past each other and recursing on the two
//! halves. Rotations are done with block swaps, so no element is ever held
//! outside the slice. Both cuts use bound searches that keep equal elements
//! in input order, which makes the sort stable.

use tracing::debug;

use super::LARGE_SORT;

/// In-place merge sort. O(n log² n) comparisons, O(log n) stack, no heap.
///
/// Sorts the right half first, then the left, then merges.
pub fn in_place<T, F>(v: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() >= LARGE_SORT {
        debug!(len = v.len(), "in-place merge sort");
    }
    sort_range(v, less);
}

fn sort_range<T, F>(v: &mut [T], less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = v.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    sort_range(&mut v[mid..], less);
    sort_range(&mut v[..mid], less);
    merge(v, mid, less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` without a buffer.
fn merge<T, F>(v: &mut [T], mid: usize, less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let left = mid;
    let right = v.len() - mid;
    if left == 0 || right == 0 {
        return;
    }
    if left + right == 2 {
        if less(&v[1], &v[0]) {
            v.swap(0, 1);
        }
        return;
    }
    if !less(&v[mid], &v[mid - 1]) {
        return;
    }

    let (cut_left, cut_right) = if left > right {
        // lower bound of the left pivot in the right run
        let cut_left = left / 2;
        let (head, tail) = v.split_at(mid);
        let pivot = &head[cut_left];
        (cut_left, mid + tail.partition_point(|x| less(x, pivot)))
    } else {
        // upper bound of the right pivot in the left run
        let cut_right = mid + right / 2;
        let (head, tail) = v.split_at(mid);
        let pivot = &tail[right / 2];
        (head.partition_point(|x| !less(pivot, x)), cut_right)
    };

    rotate_left(&mut v[cut_left..cut_right], mid - cut_left);
    let new_mid = cut_left + (cut_right - mid);

    let (lo, hi) = v.split_at_mut(new_mid);
    merge(lo, cut_left, less);
    merge(hi, cut_right - new_mid, less);
}

/// Rotates `v` so that `v[k..]` comes before `v[..k]`, by block swaps.
fn rotate_left<T>(v: &mut [T], k: usize) {
    let n = v.len();
    if k == 0 || k == n {
        return;
    }
    // i and j are the lengths of the two blocks still out of place around p
    let p = k;
    let mut i = k;
    let mut j = n - k;
    while i != j {
        if i > j {
            swap_ranges(v, p - i, p, j);
            i -= j;
        } else {
            swap_ranges(v, p - i, p + j - i, i);
            j -= i;
        }
    }
    swap_ranges(v, p - i, p, i);
}

/// Swaps `v[a..a + m]` with `v[b..b + m]`. The ranges must not overlap and
/// `a` must come first.
fn swap_ranges<T>(v: &mut [T], a: usize, b: usize, m: usize) {
    debug_assert!(a + m <= b);
    let (lo, hi) = v.split_at_mut(b);
    lo[a..a + m].swap_with_slice(&mut hi[..m]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn rotate_matches_std() {
        for n in 0..20usize {
            for k in 0..=n {
                let mut ours: Vec<usize> = (0..n).collect();
                let mut std: Vec<usize> = (0..n).collect();
                rotate_left(&mut ours, k);
                std.rotate_left(k);
                assert_eq!(ours, std, "n = {n}, k = {k}");
            }
        }
    }

    #[test]
    fn swap_ranges_disjoint() {
        let mut v = [0, 1, 2, 3, 4, 5, 6];
        swap_ranges(&mut v, 0, 4, 3);
        assert_eq!(v, [4, 5, 6, 3, 0, 1, 2]);
        swap_ranges(&mut v, 2, 3, 0);
        assert_eq!(v, [4, 5, 6, 3, 0, 1, 2]);
    }

    #[test]
    fn sorts_stably() {
        let mut rng = SmallRng::seed_from_u64(11);
        for n in [0usize, 1, 2, 3, 4, 7, 16, 33, 100, 500] {
            let mut v: Vec<(u8, usize)> = (0..n).map(|i| (rng.gen_range(0..5), i)).collect();
            let mut expected = v.clone();
            expected.sort_by_key(|p| p.0);
            in_place(&mut v, &mut |a, b| a.0 < b.0);
            assert_eq!(v, expected, "n = {n}");
        }
    }

    #[test]
    fn merge_unbalanced_runs() {
        let mut v = vec![1, 1, 2, 9, 9, 9, 9, 9, 0, 1];
        merge(&mut v, 8, &mut |a, b| a < b);
        assert_eq!(v, vec![0, 1, 1, 1, 2, 9, 9, 9, 9, 9]);

        let mut v = vec![(5, 'a'), (0, 'b'), (5, 'c'), (5, 'd'), (7, 'e')];
        merge(&mut v, 1, &mut |a, b| a.0 < b.0);
        assert_eq!(v, vec![(0, 'b'), (5, 'a'), (5, 'c'), (5, 'd'), (7, 'e')]);
    }
}
