//! Library half of the `tabstat-report` binary
//!
//! CSV loading, JSON configuration and report assembly live here so they
//! can be tested without spawning the binary.

pub mod cli;
pub mod config;
pub mod load;
pub mod report;

pub use config::ReportConfig;
pub use report::{ComparisonReport, Report, SampleReport, TableReport};
