//! Merge-Insertion hybrid
//!
//! Top-down merge sort that hands any range of at most [`INSERTION_THRESHOLD`]
//! elements to insertion sort instead of splitting further. Both halves of the
//! hybrid are stable, so the result is identical to plain merge sort.

use crate::counters::CostCounters;
use crate::error::SortError;
use crate::insertion_sort;
use crate::merge_sort::merge;
use crate::record::KeyComparator;

/// Ranges of this many elements or fewer are sorted by insertion sort.
pub const INSERTION_THRESHOLD: usize = 26;

/// Sort a slice in-place using the merge-insertion hybrid.
pub fn sort<T: Clone, C: KeyComparator<T>>(
    data: &mut [T],
    cmp: &C,
) -> Result<CostCounters, SortError> {
    let mut counters = CostCounters::default();
    if data.len() > 1 {
        merge_insertion_recursive(data, 0, data.len() - 1, cmp, &mut counters)?;
    }
    Ok(counters)
}

fn merge_insertion_recursive<T: Clone, C: KeyComparator<T>>(
    data: &mut [T],
    low: usize,
    high: usize,
    cmp: &C,
    counters: &mut CostCounters,
) -> Result<(), SortError> {
    if high - low < INSERTION_THRESHOLD {
        insertion_sort::sort_counted(&mut data[low..=high], cmp, counters);
        return Ok(());
    }

    let middle = low + (high - low) / 2;
    merge_insertion_recursive(data, low, middle, cmp, counters)?;
    merge_insertion_recursive(data, middle + 1, high, cmp, counters)?;
    merge(data, low, middle, high, cmp, counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge_sort;
    use crate::record::{Ascending, Record, SortKey};
    use crate::test_util::{ids, random_records, random_u32s, same_ids};
    use crate::verify::is_sorted;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<u32> = vec![];
        assert!(sort(&mut data, &Ascending).unwrap().is_zero());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42u32];
        let counters = sort(&mut data, &Ascending).unwrap();
        assert_eq!(data, vec![42]);
        assert_eq!(counters.comparisons, 0);
    }

    #[test]
    fn test_small_input_is_plain_insertion_sort() {
        for n in [2usize, 10, INSERTION_THRESHOLD] {
            for key in SortKey::ALL {
                let original = random_records(n, 100 + n as u64);
                let mut hybrid = original.clone();
                let mut plain = original.clone();
                let hybrid_counters = sort(&mut hybrid, &key).unwrap();
                let plain_counters = insertion_sort::sort(&mut plain, &key);
                assert_eq!(hybrid_counters, plain_counters);
                assert_eq!(hybrid_counters.allocations, 0);
                assert_eq!(ids(&hybrid), ids(&plain));
            }
        }
    }

    #[test]
    fn test_thirty_records_split_once() {
        for key in SortKey::ALL {
            let original = random_records(30, 30);
            let mut hybrid = original.clone();
            let mut merged = original.clone();

            let counters = sort(&mut hybrid, &key).unwrap();
            merge_sort::sort(&mut merged, &key).unwrap();

            // Two 15-element halves go to insertion sort, then one merge
            assert_eq!(counters.allocations, 1);
            assert_eq!(ids(&hybrid), ids(&merged));
            assert!(is_sorted(&hybrid, &key));
        }
    }

    #[test]
    fn test_thirty_records_counters_compose() {
        let original = random_records(30, 31);
        let mut data = original.clone();
        let counters = sort(&mut data, &SortKey::ByWeight).unwrap();

        let mut left = original[..15].to_vec();
        let mut right = original[15..].to_vec();
        let mut expected = insertion_sort::sort(&mut left, &SortKey::ByWeight);
        expected += insertion_sort::sort(&mut right, &SortKey::ByWeight);

        let mut halves = left;
        halves.extend(right);
        let mut merge_counters = CostCounters::default();
        merge(&mut halves, 0, 14, 29, &SortKey::ByWeight, &mut merge_counters).unwrap();
        expected += merge_counters;

        assert_eq!(counters, expected);
        assert_eq!(ids(&data), ids(&halves));
    }

    #[test]
    fn test_stable_on_equal_keys() {
        let mut data: Vec<Record> = (0..200)
            .map(|i| Record::new(i, "same", (i % 3) as f64))
            .collect();
        sort(&mut data, &SortKey::ByWeight).unwrap();
        for w in data.windows(2) {
            if w[0].weight == w[1].weight {
                assert!(w[0].id < w[1].id);
            }
        }
    }

    #[test]
    fn test_matches_merge_sort_on_large_input() {
        let original = random_records(5000, 77);
        for key in SortKey::ALL {
            let mut hybrid = original.clone();
            let mut merged = original.clone();
            let hybrid_counters = sort(&mut hybrid, &key).unwrap();
            let merge_counters = merge_sort::sort(&mut merged, &key).unwrap();
            assert_eq!(ids(&hybrid), ids(&merged));
            assert!(same_ids(&original, &hybrid));
            assert!(hybrid_counters.allocations < merge_counters.allocations);
        }
    }

    #[test]
    fn test_sort_random() {
        let mut data = random_u32s(10_000, 29);
        let mut expected = data.clone();
        expected.sort();
        sort(&mut data, &Ascending).unwrap();
        assert_eq!(data, expected);
    }
}
