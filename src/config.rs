//! Command-line configuration of the benchmark driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::harness::DEFAULT_SIZES;

pub const USAGE: &str = "\
Usage: sort-harness [--seed <u64>] [--sizes <n,n,...>] [--lino <path>] [--markdown <path>]
                    [--list-records]

Runs every sort set of the schedule (each size by weight, then by name) and
prints one report block per algorithm run.

Options:
  --seed <u64>        Dataset seed (random when omitted)
  --sizes <list>      Comma-separated dataset sizes (default 50,500,5000,50000,500000)
  --lino <path>       Also write a Links Notation report
  --markdown <path>   Also write a Markdown report
  --list-records      Print each generated dataset before sorting it
  -h, --help          Print this help";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value '{value}' for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Seed for every generated dataset; `None` picks one at startup
    pub seed: Option<u64>,
    pub sizes: Vec<usize>,
    pub lino_path: Option<PathBuf>,
    pub markdown_path: Option<PathBuf>,
    /// Print every generated dataset before its sort sets
    pub list_records: bool,
    pub show_help: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            seed: None,
            sizes: DEFAULT_SIZES.to_vec(),
            lino_path: None,
            markdown_path: None,
            list_records: false,
            show_help: false,
        }
    }
}

impl HarnessConfig {
    /// Parse the arguments after the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = HarnessConfig::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "--list-records" => config.list_records = true,
                "--seed" => {
                    let value = next_value(&mut args, &arg)?;
                    config.seed = Some(parse_value(&arg, &value)?);
                }
                "--sizes" => {
                    let value = next_value(&mut args, &arg)?;
                    config.sizes = value
                        .split(',')
                        .map(|s| parse_value(&arg, s.trim()))
                        .collect::<Result<_, _>>()?;
                }
                "--lino" => config.lino_path = Some(next_value(&mut args, &arg)?.into()),
                "--markdown" => config.markdown_path = Some(next_value(&mut args, &arg)?.into()),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(config)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ConfigError> {
    args.next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
