//! Bubble Sort
//!
//! Adjacent-pair passes over a shrinking unsorted prefix. A pass without swaps
//! does not end the sort, so already-sorted input still costs `n(n-1)/2`
//! comparisons.
//!
//! Complexity: O(n²) comparisons in every case

use crate::counters::CostCounters;
use crate::primitives::swap;
use crate::record::KeyComparator;

/// Sort a slice in-place using bubble sort.
pub fn sort<T, C: KeyComparator<T>>(data: &mut [T], cmp: &C) -> CostCounters {
    let mut counters = CostCounters::default();
    let n = data.len();

    for i in (0..n).rev() {
        for j in 0..i {
            counters.compare();
            if cmp.greater(&data[j], &data[j + 1]) {
                counters.swap();
                swap(data, j, j + 1);
            }
        }
    }

    counters
}
