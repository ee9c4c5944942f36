//! Uniform entry point over the six sorting algorithms.

use std::fmt;
use std::ops::Range;

use crate::counters::{CostCounters, Counter};
use crate::error::SortError;
use crate::record::KeyComparator;
use crate::{
    bubble_sort, insertion_sort, merge_insertion_sort, merge_sort, quick_sort, selection_sort,
};

/// The benchmarked algorithms, in the order the harness runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    MergeInsertion,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::MergeInsertion,
    ];

    /// Algorithms still run in fast-only mode.
    pub const FAST: [Algorithm; 3] = [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::MergeInsertion,
    ];

    /// Identifier used in Lino reports (e.g. `merge_insertion`).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::MergeInsertion => "merge_insertion",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Human-readable title used in the text report (e.g. `Merge-insertion`).
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Quick => "Quick",
            Algorithm::Merge => "Merge",
            Algorithm::MergeInsertion => "Merge-insertion",
        }
    }

    /// True for the O(n²) algorithms that fast-only mode skips.
    pub fn is_quadratic(self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion
        )
    }

    /// True if equal keys keep their input order.
    ///
    /// Insertion sort happens to be stable too, but only the merge family
    /// guarantees it.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Merge | Algorithm::MergeInsertion)
    }

    /// Counters that are meaningful for this algorithm, in report order.
    pub fn reported_counters(self) -> &'static [Counter] {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Quick => {
                &[Counter::Comparisons, Counter::Swaps]
            }
            Algorithm::Insertion => &[
                Counter::Comparisons,
                Counter::BlockCopies,
                Counter::Copies,
            ],
            Algorithm::Merge | Algorithm::MergeInsertion => &[
                Counter::Comparisons,
                Counter::BlockCopies,
                Counter::Copies,
                Counter::Allocations,
            ],
        }
    }

    /// Sort the whole slice, returning the counters of this call.
    pub fn sort<T: Clone, C: KeyComparator<T>>(
        self,
        data: &mut [T],
        cmp: &C,
    ) -> Result<CostCounters, SortError> {
        match self {
            Algorithm::Bubble => Ok(bubble_sort::sort(data, cmp)),
            Algorithm::Selection => Ok(selection_sort::sort(data, cmp)),
            Algorithm::Insertion => Ok(insertion_sort::sort(data, cmp)),
            Algorithm::Quick => Ok(quick_sort::sort(data, cmp)),
            Algorithm::Merge => merge_sort::sort(data, cmp),
            Algorithm::MergeInsertion => merge_insertion_sort::sort(data, cmp),
        }
    }

    /// Sort `data[range]` only.
    ///
    /// A reversed range or one reaching past the slice is rejected with
    /// [`SortError::InvalidRange`] before any element is compared.
    pub fn sort_range<T: Clone, C: KeyComparator<T>>(
        self,
        data: &mut [T],
        range: Range<usize>,
        cmp: &C,
    ) -> Result<CostCounters, SortError> {
        if range.start > range.end || range.end > data.len() {
            return Err(SortError::InvalidRange {
                start: range.start,
                end: range.end,
                len: data.len(),
            });
        }
        self.sort(&mut data[range], cmp)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
