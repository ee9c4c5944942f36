//! Quick Sort (Lomuto partition, last element as pivot)
//!
//! Already-sorted and reverse-sorted inputs hit the degenerate case: every
//! partition peels off a single element, giving `n(n-1)/2` comparisons.
//!
//! Complexity: O(n log n) average, O(n²) worst case. Not stable.

use crate::counters::CostCounters;
use crate::primitives::swap;
use crate::record::KeyComparator;

/// Sort a slice in-place using quick sort.
pub fn sort<T, C: KeyComparator<T>>(data: &mut [T], cmp: &C) -> CostCounters {
    let mut counters = CostCounters::default();
    if data.len() > 1 {
        quick_sort_recursive(data, 0, data.len() - 1, cmp, &mut counters);
    }
    counters
}

/// Partition `data[low..=high]` around `data[high]` and return the pivot's
/// final index.
fn partition<T, C: KeyComparator<T>>(
    data: &mut [T],
    low: usize,
    high: usize,
    cmp: &C,
    counters: &mut CostCounters,
) -> usize {
    let mut i = low;
    for j in low..high {
        counters.compare();
        if !cmp.greater(&data[j], &data[high]) {
            counters.swap();
            swap(data, i, j);
            i += 1;
        }
    }
    counters.swap();
    swap(data, i, high);
    i
}

/// Sort `data[low..=high]`, which holds at least two elements.
///
/// Recurses into the smaller side and loops on the larger one, so stack depth
/// is O(log n) even for degenerate pivots. The partitions visited are the same
/// as with two recursive calls.
fn quick_sort_recursive<T, C: KeyComparator<T>>(
    data: &mut [T],
    mut low: usize,
    mut high: usize,
    cmp: &C,
    counters: &mut CostCounters,
) {
    while low < high {
        let pivot = partition(data, low, high, cmp, counters);
        let left_len = pivot - low;
        let right_len = high - pivot;

        if left_len < right_len {
            if left_len > 1 {
                quick_sort_recursive(data, low, pivot - 1, cmp, counters);
            }
            if right_len < 2 {
                return;
            }
            low = pivot + 1;
        } else {
            if right_len > 1 {
                quick_sort_recursive(data, pivot + 1, high, cmp, counters);
            }
            if left_len < 2 {
                return;
            }
            high = pivot - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Ascending, Record, SortKey};
    use crate::test_util::{ids, random_records, random_u32s, same_ids};
    use crate::verify::is_sorted;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<u32> = vec![];
        assert!(sort(&mut data, &Ascending).is_zero());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42u32];
        let counters = sort(&mut data, &Ascending);
        assert_eq!(data, vec![42]);
        assert!(counters.is_zero());
    }

    #[test]
    fn test_sorted_by_weight_is_degenerate() {
        let mut data: Vec<Record> = (0..6)
            .map(|i| Record::new(i, format!("m{}", i), i as f64 * 1.5))
            .collect();
        let before = data.clone();
        let counters = sort(&mut data, &SortKey::ByWeight);
        assert_eq!(data, before);
        assert_eq!(counters.comparisons, 6 * 5 / 2);
    }

    #[test]
    fn test_sorted_input_swap_count() {
        // Every scanned element is a self-swap, plus one pivot swap per partition
        let n = 6u64;
        let mut data: Vec<u32> = (0..n as u32).collect();
        let counters = sort(&mut data, &Ascending);
        assert_eq!(counters.swaps, n * (n - 1) / 2 + (n - 1));
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<u32> = (0..500).rev().collect();
        let counters = sort(&mut data, &Ascending);
        assert_eq!(data, (0..500).collect::<Vec<u32>>());
        assert_eq!(counters.comparisons, 500 * 499 / 2);
    }

    #[test]
    fn test_large_sorted_input_does_not_overflow_stack() {
        let mut data: Vec<u32> = (0..5_000).collect();
        sort(&mut data, &Ascending);
        assert!(is_sorted(&data, &Ascending));
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data, &Ascending);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_all_same() {
        let mut data = vec![7u32; 100];
        sort(&mut data, &Ascending);
        assert!(data.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_sort_random() {
        let mut data = random_u32s(10_000, 13);
        let mut expected = data.clone();
        expected.sort();
        sort(&mut data, &Ascending);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_records_both_keys() {
        for key in SortKey::ALL {
            let original = random_records(2000, 17);
            let mut data = original.clone();
            sort(&mut data, &key);
            assert!(is_sorted(&data, &key));
            assert!(same_ids(&original, &data));
        }
    }

    #[test]
    fn test_deterministic() {
        let original = random_records(1000, 4);
        let mut a = original.clone();
        let mut b = original;
        assert_eq!(sort(&mut a, &SortKey::ByWeight), sort(&mut b, &SortKey::ByWeight));
        assert_eq!(ids(&a), ids(&b));
    }
}
