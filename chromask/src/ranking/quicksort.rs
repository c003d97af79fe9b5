//! In-place quicksort with Hoare partitioning.
//!
//! The pivot is the middle element of the active range. Sub-ranges are kept
//! on an explicit stack instead of recursing; the larger half is pushed first
//! so the smaller one is processed next, which bounds the stack at
//! `log2(len)` entries regardless of input.

use std::cmp::Ordering;

/// Sort `items` in place so that `compare(a, b) != Greater` for every
/// adjacent pair `a, b`. Not stable.
///
/// # Panics
///
/// May panic with an out-of-bounds index if `compare` is not a total order.
pub fn quicksort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let mut pending: Vec<(usize, usize)> = vec![(0, items.len() - 1)];

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let split = hoare_partition(items, low, high, &mut compare);
        let left = (low, split);
        let right = (split + 1, high);

        if split - low > high - split - 1 {
            pending.push(left);
            pending.push(right);
        } else {
            pending.push(right);
            pending.push(left);
        }
    }
}

/// Partition `items[low..=high]` around its middle element.
///
/// Returns `split` in `low..high` such that every element of
/// `items[low..=split]` orders no later than every element of
/// `items[split + 1..=high]`.
fn hoare_partition<T, F>(items: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = items[low + (high - low) / 2].clone();
    let mut left = low;
    let mut right = high;

    loop {
        while compare(&items[left], &pivot) == Ordering::Less {
            left += 1;
        }
        while compare(&items[right], &pivot) == Ordering::Greater {
            right -= 1;
        }
        if left >= right {
            return right;
        }
        items.swap(left, right);
        left += 1;
        right -= 1;
    }
}
