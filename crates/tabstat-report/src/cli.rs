//! Command-line interface for tabstat-report

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Output rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sections
    Text,
    /// One JSON document with every record
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "tabstat-report",
    version = env!("CARGO_PKG_VERSION"),
    about = "Descriptive statistics, normality and correlation tests, imputation and grouped aggregation"
)]
pub struct Cli {
    /// CSV file with the sales dataset (header row required)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// JSON configuration file; built-in defaults are used when omitted
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter directive implied by `-v`, if any
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
