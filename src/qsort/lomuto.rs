use tracing::trace;

use crate::error::{Error, Result};

/// Sorts the whole slice in ascending order.
pub fn qsort(v: &mut [i32]) {
    if let Some(right) = v.len().checked_sub(1) {
        sort(v, 0, right, 0);
    }
}

/// Sorts the inclusive range `[left, right]` of `v` in place.
///
/// A range with `left >= right` holds at most one element and is left
/// untouched, whatever the indices are. A non-trivial range must end inside
/// the slice.
pub fn quicksort(v: &mut [i32], left: usize, right: usize) -> Result<()> {
    if left >= right {
        return Ok(());
    }
    check_range(v, left, right)?;
    sort(v, left, right, 0);
    Ok(())
}

/// Partitions the inclusive range `[left, right]` around `v[left]` and
/// returns the pivot's final index `p`.
///
/// Afterwards every element of `[left, p - 1]` is strictly less than `v[p]`
/// and every element of `[p, right]` is greater than or equal to it.
pub fn partition(v: &mut [i32], left: usize, right: usize) -> Result<usize> {
    check_range(v, left, right)?;
    Ok(lomuto(v, left, right))
}

fn check_range(v: &[i32], left: usize, right: usize) -> Result<()> {
    if left > right || right >= v.len() {
        return Err(Error::InvalidRange {
            left,
            right,
            len: v.len(),
        });
    }
    Ok(())
}

fn sort(v: &mut [i32], left: usize, right: usize, depth: usize) {
    if left >= right {
        return;
    }

    let pivot = lomuto(v, left, right);
    trace!(left, right, pivot, depth, "partitioned");

    // pivot == 0 only when left == 0: the left side is empty
    if let Some(end) = pivot.checked_sub(1) {
        sort(v, left, end, depth + 1);
    }
    sort(v, pivot + 1, right, depth + 1);
}

// bounds already checked: left <= right < v.len()
fn lomuto(v: &mut [i32], left: usize, right: usize) -> usize {
    let pivot = v[left];
    let mut i = left; // last index holding a value < pivot

    for j in left + 1..=right {
        if v[j] < pivot {
            i += 1;
            v.swap(i, j);
        }
    }

    v.swap(left, i);
    i
}
