//! Sorting benchmark harness
//!
//! Compares classic comparison sorts on generated records and counts what each
//! one costs:
//! - **Bubble**, **Selection**, **Insertion**: O(n²) baselines
//! - **Quick**: Lomuto partition, last element as pivot
//! - **Merge**: top-down, stable, temporary buffers per merge
//! - **Merge-Insertion**: merge sort that hands small ranges to insertion sort
//!
//! Every algorithm returns the [`CostCounters`] of its call (comparisons, swaps,
//! element copies, block copies, allocations) and is generic over a
//! [`KeyComparator`], so the same code sorts records by name or by weight.
//!
//! ```
//! use sort_harness::{merge_sort, verify, GenerationContext, SortKey};
//!
//! let mut records = GenerationContext::new(100, 42).generate().unwrap();
//! let counters = merge_sort::sort(&mut records, &SortKey::ByWeight).unwrap();
//! assert!(verify::is_sorted(&records, &SortKey::ByWeight));
//! assert_eq!(counters.allocations, 99);
//! ```

pub mod algorithm;
pub mod bubble_sort;
pub mod config;
pub mod counters;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod insertion_sort;
pub mod merge_insertion_sort;
pub mod merge_sort;
pub mod primitives;
pub mod quick_sort;
pub mod record;
pub mod report;
pub mod selection_sort;
pub mod verify;

#[cfg(test)]
mod test_util;

pub use algorithm::Algorithm;
pub use counters::CostCounters;
pub use dataset::GenerationContext;
pub use error::SortError;
pub use harness::{run_sort_set, RunOutcome, SortSet};
pub use record::{KeyComparator, Record, SortKey};
