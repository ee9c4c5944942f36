//! Lino to Markdown Converter
//!
//! Converts a Links Notation benchmark report written by `sort-harness --lino`
//! into Markdown tables.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use sort_harness::report::parse_lino_report;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.lino> [output.md]", args[0]);
        eprintln!();
        eprintln!("Converts a Links Notation sorting benchmark report to Markdown format.");
        process::exit(1);
    }

    let input_path = Path::new(&args[1]);
    let content = match fs::read_to_string(input_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path.display(), e);
            process::exit(1);
        }
    };

    let Some(report) = parse_lino_report(&content) else {
        eprintln!("Error: no benchmark results found in {}", input_path.display());
        process::exit(1);
    };

    let markdown = report.to_markdown_table();

    match args.get(2) {
        Some(output) => {
            let output_path = Path::new(output);
            if let Err(e) = fs::write(output_path, &markdown) {
                eprintln!("Error writing {}: {}", output_path.display(), e);
                process::exit(1);
            }
            println!("Markdown report written to: {}", output_path.display());
        }
        None => print!("{}", markdown),
    }
}
