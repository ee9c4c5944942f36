//! Insertion Sort
//!
//! Linear-scan insertion: for each element, find the first position in the
//! sorted prefix holding a strictly greater element and block-shift the gap
//! open. Equal elements are never passed, so the sort is stable.
//!
//! Cost accounting: one comparison per scanned element, one block copy per
//! shift, `copies` grows by the number of elements shifted plus, once per
//! call, the number of block copies performed in that call.
//!
//! Complexity: O(n²) comparisons, O(n) block copies

use crate::counters::CostCounters;
use crate::primitives::shift_into;
use crate::record::KeyComparator;

/// Sort a slice in-place using insertion sort.
pub fn sort<T, C: KeyComparator<T>>(data: &mut [T], cmp: &C) -> CostCounters {
    let mut counters = CostCounters::default();
    sort_counted(data, cmp, &mut counters);
    counters
}

/// Insertion sort that accumulates into caller-owned counters.
///
/// Used by the merge-insertion hybrid for its small partitions.
pub(crate) fn sort_counted<T, C: KeyComparator<T>>(
    data: &mut [T],
    cmp: &C,
    counters: &mut CostCounters,
) {
    let mut block_copies = 0u64;

    for i in 1..data.len() {
        let position = find_position(&data[..i], &data[i], cmp, counters);
        if position != i {
            let shifted = shift_into(data, position, i);
            counters.copy(shifted as u64);
            counters.block_copy(1);
            block_copies += 1;
        }
    }

    counters.copy(block_copies);
}

/// First index in `sorted` whose element is greater than `item`, or
/// `sorted.len()` when there is none.
fn find_position<T, C: KeyComparator<T>>(
    sorted: &[T],
    item: &T,
    cmp: &C,
    counters: &mut CostCounters,
) -> usize {
    for (i, candidate) in sorted.iter().enumerate() {
        counters.compare();
        if cmp.greater(candidate, item) {
            return i;
        }
    }
    sorted.len()
}
