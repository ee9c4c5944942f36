//! Benchmark reports
//!
//! Two outputs are produced from the same runs:
//! - the plain text stream printed while the benchmark runs, one block per
//!   algorithm run;
//! - a Links Notation (Lino) report collecting every run, which can be saved,
//!   parsed back, and rendered as Markdown.
//!
//! Lino layout (indentation is significant only for readability, the parser
//! keys off the line prefixes):
//! ```text
//! results:
//!   key_weight:
//!     size_500:
//!       merge:
//!         time_ms 0.120
//!         verified true
//!         comparisons 3845
//! ```

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::algorithm::Algorithm;
use crate::counters::{CostCounters, Counter};
use crate::harness::{RunOutcome, SortSet};
use crate::record::{Record, SortKey};

/// Last line of every sort set in the text stream
pub const SORT_SET_FOOTER: &str = "SORT SET COMPLETE";

/// Header line of a sort set in the text stream.
pub fn sort_set_header(size: usize, set: SortSet, key: SortKey) -> String {
    format!("SORT SET: n = {}, {}, by {}", size, set.label(), key)
}

/// Text block describing one algorithm run.
pub fn format_run(outcome: &RunOutcome) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{} sort {} records by {}...",
        outcome.algorithm, outcome.size, outcome.key
    )
    .unwrap();
    writeln!(
        output,
        "Sort complete with {}.",
        counter_phrase(outcome.algorithm, &outcome.counters)
    )
    .unwrap();
    writeln!(
        output,
        "  {:.6}s CPU time used",
        outcome.elapsed.as_secs_f64()
    )
    .unwrap();
    if outcome.verified {
        writeln!(output, "The list is sorted.").unwrap();
    } else {
        writeln!(output, "*** The list is NOT sorted.").unwrap();
    }

    output
}

/// Listing of a record list, one line per record in its current order.
pub fn format_record_list(records: &[Record], title: &str) -> String {
    let mut output = String::new();

    writeln!(output, "List {}:", title).unwrap();
    for (i, r) in records.iter().enumerate() {
        writeln!(
            output,
            "  Record {}: {} {} {} {:.6}",
            i, r.name, r.category, r.population, r.weight
        )
        .unwrap();
    }

    output
}

/// "12 comparisons and 3 swaps", listing the counters that apply to `algorithm`.
fn counter_phrase(algorithm: Algorithm, counters: &CostCounters) -> String {
    let parts: Vec<String> = algorithm
        .reported_counters()
        .iter()
        .map(|&c| format!("{} {}", counters.get(c), counter_noun(c)))
        .collect();

    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

fn counter_noun(counter: Counter) -> &'static str {
    match counter {
        Counter::Comparisons => "comparisons",
        Counter::Swaps => "swaps",
        Counter::Copies => "total copies",
        Counter::BlockCopies => "block copies",
        Counter::Allocations => "allocations",
    }
}

/// One algorithm run as recorded in a report
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub key: SortKey,
    /// Array size in records
    pub array_size: usize,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Whether the output passed the sortedness check
    pub verified: bool,
    pub counters: CostCounters,
}

impl From<&RunOutcome> for BenchmarkResult {
    fn from(outcome: &RunOutcome) -> Self {
        BenchmarkResult {
            algorithm: outcome.algorithm,
            key: outcome.key,
            array_size: outcome.size,
            time_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            verified: outcome.verified,
            counters: outcome.counters,
        }
    }
}

/// A complete benchmark report
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// When the benchmark was run (ISO 8601, UTC)
    pub timestamp: String,
    pub description: String,
    /// Dataset seed, if known
    pub seed: Option<u64>,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

/// Host information for the benchmark report
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

impl BenchmarkReport {
    /// Create a new empty report stamped with the current time.
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            seed: None,
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Keys present in the report, in driver order.
    fn keys(&self) -> Vec<SortKey> {
        SortKey::ALL
            .into_iter()
            .filter(|k| self.results.iter().any(|r| r.key == *k))
            .collect()
    }

    /// Distinct sizes measured under `key`, ascending.
    fn sizes(&self, key: SortKey) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .results
            .iter()
            .filter(|r| r.key == key)
            .map(|r| r.array_size)
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    fn find(&self, key: SortKey, size: usize, algorithm: Algorithm) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.key == key && r.array_size == size && r.algorithm == algorithm)
    }

    /// Generate the report in Links Notation format.
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        writeln!(output, "benchmark_report:").unwrap();
        writeln!(output, "  timestamp '{}'", self.timestamp).unwrap();
        writeln!(output, "  description '{}'", escape_lino_string(&self.description)).unwrap();
        if let Some(seed) = self.seed {
            writeln!(output, "  seed {}", seed).unwrap();
        }

        writeln!(output).unwrap();
        writeln!(output, "system_info:").unwrap();
        writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os)).unwrap();
        writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch)).unwrap();

        writeln!(output).unwrap();
        writeln!(output, "results:").unwrap();
        for key in self.keys() {
            writeln!(output, "  key_{}:", key.label()).unwrap();
            for size in self.sizes(key) {
                writeln!(output, "    size_{}:", size).unwrap();
                for result in self
                    .results
                    .iter()
                    .filter(|r| r.key == key && r.array_size == size)
                {
                    writeln!(output, "      {}:", result.algorithm.name()).unwrap();
                    writeln!(output, "        time_ms {:.3}", result.time_ms).unwrap();
                    writeln!(output, "        verified {}", result.verified).unwrap();
                    for counter in ALL_COUNTERS {
                        writeln!(
                            output,
                            "        {} {}",
                            counter.label(),
                            result.counters.get(counter)
                        )
                        .unwrap();
                    }
                }
            }
        }

        writeln!(output).unwrap();
        writeln!(output, "comparisons:").unwrap();
        for key in self.keys() {
            writeln!(output, "  key_{}:", key.label()).unwrap();
            for size in self.sizes(key) {
                let pairs: Vec<(Algorithm, Algorithm, f64)> = COMPARED_PAIRS
                    .iter()
                    .filter_map(|&(a, b)| {
                        let fast = self.find(key, size, a)?;
                        let slow = self.find(key, size, b)?;
                        speedup(size, fast.time_ms, slow.time_ms).map(|s| (a, b, s))
                    })
                    .collect();
                if pairs.is_empty() {
                    continue;
                }

                writeln!(output, "    size_{}:", size).unwrap();
                for (a, b, speedup) in pairs {
                    writeln!(output, "      {}_vs_{}:", a.name(), b.name()).unwrap();
                    writeln!(output, "        speedup {:.2}", speedup).unwrap();
                    writeln!(
                        output,
                        "        faster {}",
                        if speedup > 1.0 { a.name() } else { b.name() }
                    )
                    .unwrap();
                }
            }
        }

        output
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Render the report as Markdown, one time table and one comparison-count
    /// table per key.
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Benchmark Report").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Timestamp:** {}", self.timestamp).unwrap();
        writeln!(output, "**Description:** {}", self.description).unwrap();
        if let Some(seed) = self.seed {
            writeln!(output, "**Seed:** {}", seed).unwrap();
        }
        writeln!(output).unwrap();

        writeln!(output, "## System Information").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Property | Value |").unwrap();
        writeln!(output, "|----------|-------|").unwrap();
        writeln!(output, "| OS | {} |", self.system_info.os).unwrap();
        writeln!(output, "| Arch | {} |", self.system_info.arch).unwrap();
        writeln!(output).unwrap();

        for key in self.keys() {
            let sizes = self.sizes(key);

            writeln!(output, "## Sorted by {}", key).unwrap();
            writeln!(output).unwrap();
            writeln!(output, "### Time (ms)").unwrap();
            writeln!(output).unwrap();
            self.write_markdown_grid(&mut output, key, &sizes, |r| {
                let mark = if r.verified { "" } else { " (unsorted!)" };
                format!("{:.3}{}", r.time_ms, mark)
            });
            writeln!(output).unwrap();

            writeln!(output, "### Comparisons").unwrap();
            writeln!(output).unwrap();
            self.write_markdown_grid(&mut output, key, &sizes, |r| {
                r.counters.comparisons.to_string()
            });
            writeln!(output).unwrap();
        }

        let failed = self.results.iter().filter(|r| !r.verified).count();
        writeln!(output, "---").unwrap();
        writeln!(
            output,
            "*{} runs, {} failed verification. Report generated by sort-harness*",
            self.results.len(),
            failed
        )
        .unwrap();

        output
    }

    fn write_markdown_grid(
        &self,
        output: &mut String,
        key: SortKey,
        sizes: &[usize],
        cell: impl Fn(&BenchmarkResult) -> String,
    ) {
        write!(output, "| Size |").unwrap();
        for algorithm in Algorithm::ALL {
            write!(output, " {} |", algorithm).unwrap();
        }
        writeln!(output).unwrap();
        write!(output, "|------|").unwrap();
        for _ in Algorithm::ALL {
            write!(output, "------|").unwrap();
        }
        writeln!(output).unwrap();

        for &size in sizes {
            write!(output, "| {} |", format_size(size)).unwrap();
            for algorithm in Algorithm::ALL {
                let value = self
                    .find(key, size, algorithm)
                    .map(&cell)
                    .unwrap_or_else(|| "N/A".to_string());
                write!(output, " {} |", value).unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }
}

const ALL_COUNTERS: [Counter; 5] = [
    Counter::Comparisons,
    Counter::Swaps,
    Counter::Copies,
    Counter::BlockCopies,
    Counter::Allocations,
];

/// (candidate, baseline) pairs compared in the `comparisons:` section
const COMPARED_PAIRS: [(Algorithm, Algorithm); 2] = [
    (Algorithm::MergeInsertion, Algorithm::Merge),
    (Algorithm::Quick, Algorithm::Merge),
];

/// How many times faster `fast_ms` is than `slow_ms`. `None` when there is
/// nothing to compare: fewer than two records, or a run too short to register.
fn speedup(size: usize, fast_ms: f64, slow_ms: f64) -> Option<f64> {
    if size < 2 || fast_ms <= 0.0 || slow_ms <= 0.0 {
        return None;
    }
    Some(slow_ms / fast_ms)
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Format a size as a human-readable string (e.g., "5K", "500K")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_unix_timestamp(secs)
}

fn format_unix_timestamp(secs: u64) -> String {
    let days = (secs / 86_400) as i64;
    let time_of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Parse a Links Notation report and return its benchmark results.
///
/// Only the header and the `results:` section are read; the `comparisons:`
/// section is derived data and is recomputed on output. Returns `None` when no
/// result could be parsed.
pub fn parse_lino_report(content: &str) -> Option<BenchmarkReport> {
    let mut report = BenchmarkReport::new("Parsed report");
    let mut in_results_section = false;
    let mut current_key: Option<SortKey> = None;
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<BenchmarkResult> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed == "results:" {
            in_results_section = true;
            continue;
        }
        if trimmed == "comparisons:" || trimmed == "system_info:" {
            report.results.extend(current_result.take());
            in_results_section = false;
            continue;
        }

        if !in_results_section {
            if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                report.timestamp = ts;
            } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                report.description = desc;
            } else if let Some(seed) = trimmed.strip_prefix("seed ") {
                report.seed = seed.parse().ok();
            } else if let Some(os) = extract_quoted_value(trimmed, "os") {
                report.system_info.os = os;
            } else if let Some(arch) = extract_quoted_value(trimmed, "arch") {
                report.system_info.arch = arch;
            }
            continue;
        }

        if let Some(header) = trimmed.strip_suffix(':') {
            if let Some(label) = header.strip_prefix("key_") {
                report.results.extend(current_result.take());
                current_key = SortKey::from_label(label);
                current_size = None;
            } else if let Some(size) = header.strip_prefix("size_") {
                report.results.extend(current_result.take());
                current_size = size.parse().ok();
            } else if let (Some(algorithm), Some(key), Some(size)) =
                (Algorithm::from_name(header), current_key, current_size)
            {
                report.results.extend(current_result.take());
                current_result = Some(BenchmarkResult {
                    algorithm,
                    key,
                    array_size: size,
                    time_ms: 0.0,
                    verified: false,
                    counters: CostCounters::default(),
                });
            }
            continue;
        }

        let Some(result) = current_result.as_mut() else {
            continue;
        };
        let Some((name, value)) = trimmed.split_once(' ') else {
            continue;
        };
        match name {
            "time_ms" => result.time_ms = value.parse().unwrap_or(0.0),
            "verified" => result.verified = value == "true",
            _ => {
                if let Some(counter) = ALL_COUNTERS.into_iter().find(|c| c.label() == name) {
                    let value = value.parse().unwrap_or(0);
                    match counter {
                        Counter::Comparisons => result.counters.comparisons = value,
                        Counter::Swaps => result.counters.swaps = value,
                        Counter::Copies => result.counters.copies = value,
                        Counter::BlockCopies => result.counters.block_copies = value,
                        Counter::Allocations => result.counters.allocations = value,
                    }
                }
            }
        }
    }

    report.results.extend(current_result);

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let rest = line.strip_prefix(prefix)?.strip_prefix(' ')?.trim();
    let inner = rest.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}
