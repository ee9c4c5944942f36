//! Selection Sort
//!
//! Repeatedly moves the maximum of the unsorted prefix `[0, i]` to position `i`.
//!
//! Complexity: O(n²) comparisons, at most n - 1 swaps

use crate::counters::CostCounters;
use crate::primitives::swap;
use crate::record::KeyComparator;

/// Sort a slice in-place using selection sort.
pub fn sort<T, C: KeyComparator<T>>(data: &mut [T], cmp: &C) -> CostCounters {
    let mut counters = CostCounters::default();

    for i in (1..data.len()).rev() {
        let highest = find_highest(&data[..=i], cmp, &mut counters);
        if highest != i {
            counters.swap();
            swap(data, highest, i);
        }
    }

    counters
}

/// Index of the maximum element of `prefix`. Ties resolve to the later index.
///
/// Only indices inside `prefix` are read; the scan costs `prefix.len() - 1`
/// comparisons.
fn find_highest<T, C: KeyComparator<T>>(
    prefix: &[T],
    cmp: &C,
    counters: &mut CostCounters,
) -> usize {
    let mut highest = 0;
    for k in 1..prefix.len() {
        counters.compare();
        if !cmp.greater(&prefix[highest], &prefix[k]) {
            highest = k;
        }
    }
    highest
}
