//! Benchmark harness
//!
//! Generates one dataset per sort set, then runs each algorithm of the set on
//! its own copy of that dataset, timing and verifying every run.

use std::time::Duration;
#[cfg(not(unix))]
use std::time::Instant;

use log::{debug, info, warn};

use crate::algorithm::Algorithm;
use crate::counters::CostCounters;
use crate::dataset::GenerationContext;
use crate::error::{try_reserve, SortError};
use crate::record::{Record, SortKey};
use crate::verify::first_unsorted;

/// From this size on the driver runs only the fast algorithms.
pub const FAST_ONLY_THRESHOLD: usize = 50_000;

/// The default size schedule of the driver.
pub const DEFAULT_SIZES: [usize; 5] = [50, 500, 5_000, 50_000, 500_000];

/// Which algorithms a sort set runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSet {
    All,
    /// Skip the O(n²) algorithms
    FastOnly,
}

impl SortSet {
    /// The set the driver uses for a dataset of `size` records.
    pub fn for_size(size: usize) -> Self {
        if size >= FAST_ONLY_THRESHOLD {
            SortSet::FastOnly
        } else {
            SortSet::All
        }
    }

    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            SortSet::All => &Algorithm::ALL,
            SortSet::FastOnly => &Algorithm::FAST,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortSet::All => "all sorts",
            SortSet::FastOnly => "fast sorts only",
        }
    }
}

/// CPU-time timer scoped to a single algorithm call: started right before the
/// sort, consumed right after it.
///
/// Measures the CPU time of the calling thread, which is where every sort
/// runs. Time spent blocked or descheduled does not count.
#[derive(Debug)]
pub struct Stopwatch {
    started: Duration,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            started: thread_cpu_time(),
        }
    }

    pub fn stop(self) -> Duration {
        thread_cpu_time().saturating_sub(self.started)
    }
}

#[cfg(unix)]
fn thread_cpu_time() -> Duration {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // SAFETY: `ts` is a valid, exclusively borrowed timespec for the whole call.
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_THREAD_CPUTIME_ID, &mut ts) };
    if rc != 0 {
        warn!(
            "thread CPU clock unavailable: {}",
            std::io::Error::last_os_error()
        );
        return Duration::ZERO;
    }
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

/// No thread CPU clock off unix: fall back to monotonic time since first use.
#[cfg(not(unix))]
fn thread_cpu_time() -> Duration {
    static EPOCH: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed()
}

/// Result of one algorithm run on one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub algorithm: Algorithm,
    pub size: usize,
    pub key: SortKey,
    pub counters: CostCounters,
    pub elapsed: Duration,
    pub verified: bool,
}

/// Sort a fresh copy of `canonical` with `algorithm`, then verify it.
///
/// `canonical` itself is never modified.
pub fn run_algorithm(
    algorithm: Algorithm,
    canonical: &[Record],
    key: SortKey,
) -> Result<RunOutcome, SortError> {
    let mut working = Vec::new();
    try_reserve(&mut working, canonical.len())?;
    working.extend_from_slice(canonical);

    let timer = Stopwatch::start();
    let counters = algorithm.sort(&mut working, &key)?;
    let elapsed = timer.stop();

    let unsorted_at = first_unsorted(&working, &key);
    if let Some(index) = unsorted_at {
        warn!(
            "{} sort by {} left records {} and {} out of order (n = {})",
            algorithm,
            key,
            index - 1,
            index,
            canonical.len()
        );
    }
    debug!(
        "{} sort of {} records by {}: {} in {:?}",
        algorithm,
        canonical.len(),
        key,
        counters,
        elapsed
    );

    Ok(RunOutcome {
        algorithm,
        size: canonical.len(),
        key,
        counters,
        elapsed,
        verified: unsorted_at.is_none(),
    })
}

/// Generate a dataset from `context` and run every algorithm of `set` on it.
///
/// `on_outcome` sees each outcome as soon as its run finishes. An allocation
/// failure aborts the set and is returned to the caller.
pub fn run_sort_set(
    context: &GenerationContext,
    key: SortKey,
    set: SortSet,
    mut on_outcome: impl FnMut(&RunOutcome),
) -> Result<Vec<RunOutcome>, SortError> {
    info!(
        "sort set: n = {}, {}, by {} (seed {})",
        context.size,
        set.label(),
        key,
        context.seed
    );
    let canonical = context.generate()?;

    let mut outcomes = Vec::with_capacity(set.algorithms().len());
    for &algorithm in set.algorithms() {
        let outcome = run_algorithm(algorithm, &canonical, key)?;
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    let failed = outcomes.iter().filter(|o| !o.verified).count();
    info!(
        "sort set complete: n = {}, by {}, {} of {} runs verified",
        context.size,
        key,
        outcomes.len() - failed,
        outcomes.len()
    );
    Ok(outcomes)
}
