//! Merge Sort
//!
//! Classic top-down merge sort. Every merge copies both halves into freshly
//! allocated temporary buffers and interleaves them back, taking from the left
//! buffer on ties, which makes the sort stable.
//!
//! Cost accounting per merge call: one comparison per interleave decision, one
//! copy per element moved (copy-in, interleave and tail drain), one allocation
//! event for the pair of buffers and two block copies for the two tail drains.
//!
//! Complexity: O(n log n) comparisons in every case

use crate::counters::CostCounters;
use crate::error::{try_reserve, SortError};
use crate::record::KeyComparator;

/// Sort a slice in-place using merge sort.
///
/// Fails only when a temporary buffer cannot be allocated; the slice is then
/// left as a permutation of its input.
pub fn sort<T: Clone, C: KeyComparator<T>>(
    data: &mut [T],
    cmp: &C,
) -> Result<CostCounters, SortError> {
    let mut counters = CostCounters::default();
    if data.len() > 1 {
        merge_sort_recursive(data, 0, data.len() - 1, cmp, &mut counters)?;
    }
    Ok(counters)
}

fn merge_sort_recursive<T: Clone, C: KeyComparator<T>>(
    data: &mut [T],
    low: usize,
    high: usize,
    cmp: &C,
    counters: &mut CostCounters,
) -> Result<(), SortError> {
    if low < high {
        let middle = low + (high - low) / 2;
        merge_sort_recursive(data, low, middle, cmp, counters)?;
        merge_sort_recursive(data, middle + 1, high, cmp, counters)?;
        merge(data, low, middle, high, cmp, counters)?;
    }
    Ok(())
}

/// Merge the sorted runs `data[low..=middle]` and `data[middle + 1..=high]`.
///
/// The temporary buffers live only for the duration of this call.
pub(crate) fn merge<T: Clone, C: KeyComparator<T>>(
    data: &mut [T],
    low: usize,
    middle: usize,
    high: usize,
    cmp: &C,
    counters: &mut CostCounters,
) -> Result<(), SortError> {
    let left_len = middle - low + 1;
    let right_len = high - middle;

    let mut left = Vec::new();
    try_reserve(&mut left, left_len)?;
    let mut right = Vec::new();
    try_reserve(&mut right, right_len)?;
    counters.allocate();

    left.extend_from_slice(&data[low..=middle]);
    right.extend_from_slice(&data[middle + 1..=high]);
    counters.copy((left_len + right_len) as u64);

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut k = low;

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.greater(l, r),
            _ => break,
        };
        counters.compare();
        let next = if take_right { right.next() } else { left.next() };
        if let Some(item) = next {
            data[k] = item;
            k += 1;
            counters.copy(1);
        }
    }

    // Tail drains, only one of which moves anything
    for item in left.chain(right) {
        data[k] = item;
        k += 1;
        counters.copy(1);
    }
    counters.block_copy(2);

    Ok(())
}
