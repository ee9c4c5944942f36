//! Cost accounting for one sort call.

use std::fmt;
use std::ops::AddAssign;

/// Counters accumulated during a single top-level sort call.
///
/// A fresh zeroed value is created by each entry point and threaded through the
/// recursive helpers as `&mut CostCounters`. Increments saturate, so the largest
/// benchmarked sizes cannot wrap a counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CostCounters {
    pub comparisons: u64,
    pub swaps: u64,
    /// Element moves, counted one per element placed
    pub copies: u64,
    /// Contiguous-range moves, counted one per range regardless of length
    pub block_copies: u64,
    pub allocations: u64,
}

/// Selects one field of [`CostCounters`], used when deciding which counters a
/// given algorithm reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Comparisons,
    Swaps,
    Copies,
    BlockCopies,
    Allocations,
}

impl Counter {
    pub fn label(self) -> &'static str {
        match self {
            Counter::Comparisons => "comparisons",
            Counter::Swaps => "swaps",
            Counter::Copies => "copies",
            Counter::BlockCopies => "block_copies",
            Counter::Allocations => "allocations",
        }
    }
}

impl CostCounters {
    #[inline]
    pub fn compare(&mut self) {
        self.comparisons = self.comparisons.saturating_add(1);
    }

    #[inline]
    pub fn swap(&mut self) {
        self.swaps = self.swaps.saturating_add(1);
    }

    #[inline]
    pub fn copy(&mut self, elements: u64) {
        self.copies = self.copies.saturating_add(elements);
    }

    #[inline]
    pub fn block_copy(&mut self, events: u64) {
        self.block_copies = self.block_copies.saturating_add(events);
    }

    #[inline]
    pub fn allocate(&mut self) {
        self.allocations = self.allocations.saturating_add(1);
    }

    /// Read one counter by selector.
    pub fn get(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Comparisons => self.comparisons,
            Counter::Swaps => self.swaps,
            Counter::Copies => self.copies,
            Counter::BlockCopies => self.block_copies,
            Counter::Allocations => self.allocations,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == CostCounters::default()
    }
}

impl AddAssign for CostCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons = self.comparisons.saturating_add(rhs.comparisons);
        self.swaps = self.swaps.saturating_add(rhs.swaps);
        self.copies = self.copies.saturating_add(rhs.copies);
        self.block_copies = self.block_copies.saturating_add(rhs.block_copies);
        self.allocations = self.allocations.saturating_add(rhs.allocations);
    }
}

impl fmt::Display for CostCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} copies, {} block copies, {} allocations",
            self.comparisons, self.swaps, self.copies, self.block_copies, self.allocations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert!(CostCounters::default().is_zero());
    }

    #[test]
    fn test_increments() {
        let mut c = CostCounters::default();
        c.compare();
        c.compare();
        c.swap();
        c.copy(7);
        c.block_copy(2);
        c.allocate();
        assert_eq!(c.get(Counter::Comparisons), 2);
        assert_eq!(c.get(Counter::Swaps), 1);
        assert_eq!(c.get(Counter::Copies), 7);
        assert_eq!(c.get(Counter::BlockCopies), 2);
        assert_eq!(c.get(Counter::Allocations), 1);
        assert!(!c.is_zero());
    }

    #[test]
    fn test_saturates_instead_of_wrapping() {
        let mut c = CostCounters {
            copies: u64::MAX - 1,
            ..Default::default()
        };
        c.copy(10);
        assert_eq!(c.copies, u64::MAX);
    }

    #[test]
    fn test_add_assign() {
        let mut a = CostCounters {
            comparisons: 3,
            swaps: 1,
            ..Default::default()
        };
        a += CostCounters {
            comparisons: 2,
            allocations: 4,
            ..Default::default()
        };
        assert_eq!(a.comparisons, 5);
        assert_eq!(a.swaps, 1);
        assert_eq!(a.allocations, 4);
    }
}
