//! Sorting benchmark driver
//!
//! Runs the fixed schedule of sort sets: every size in the schedule, first by
//! weight and then by name. Sizes from 50 000 upward skip the three O(n²)
//! algorithms.
//!
//! Usage: `sort-harness [--seed N] [--sizes 50,500] [--lino out.lino] [--markdown out.md] [--list-records]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process;

use log::{error, info};
use rand::Rng;

use sort_harness::config::{HarnessConfig, USAGE};
use sort_harness::report::{self, BenchmarkReport, BenchmarkResult};
use sort_harness::{run_sort_set, GenerationContext, SortError, SortKey, SortSet};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match HarnessConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return;
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("dataset seed: {}", seed);

    let bench_report = match run_schedule(&config, seed) {
        Ok(r) => r,
        Err(e) => {
            error!("benchmark aborted: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = config.lino_path {
        match bench_report.save_lino(path) {
            Ok(()) => info!("Lino report written to: {}", path.display()),
            Err(e) => {
                error!("writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    if let Some(ref path) = config.markdown_path {
        match bench_report.save_markdown(path) {
            Ok(()) => info!("Markdown report written to: {}", path.display()),
            Err(e) => {
                error!("writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    let failed = bench_report.results.iter().filter(|r| !r.verified).count();
    if failed > 0 {
        error!("{} of {} runs produced unsorted output", failed, bench_report.results.len());
    }
}

/// Run every sort set of the schedule, printing each run as it finishes.
fn run_schedule(config: &HarnessConfig, seed: u64) -> Result<BenchmarkReport, SortError> {
    let mut bench_report = BenchmarkReport::new("Classic comparison sorts on generated records");
    bench_report.seed = Some(seed);

    for &size in &config.sizes {
        let set = SortSet::for_size(size);
        // Same records for both keys of a size
        let context = GenerationContext::new(size, seed.wrapping_add(size as u64));

        if config.list_records {
            let records = context.generate()?;
            let title = format!("of {} generated records", size);
            println!("{}", report::format_record_list(&records, &title));
        }

        for key in SortKey::ALL {
            println!("{}", report::sort_set_header(size, set, key));
            println!();

            let outcomes = run_sort_set(&context, key, set, |outcome| {
                println!("{}", report::format_run(outcome));
            })?;

            println!("{}", report::SORT_SET_FOOTER);
            println!();

            for outcome in &outcomes {
                bench_report.add_result(BenchmarkResult::from(outcome));
            }
        }
    }

    Ok(bench_report)
}
