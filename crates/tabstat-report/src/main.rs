//! tabstat-report entry point

use anyhow::{Context, Result};
use clap::Parser;
use tabstat_report::cli::{Cli, OutputFormat};
use tabstat_report::{load, Report, ReportConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    // -v overrides RUST_LOG; otherwise RUST_LOG, then warn
    let filter = match cli.log_level() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => ReportConfig::from_path(path)?,
        None => ReportConfig::default(),
    };

    let table = cli
        .input
        .as_deref()
        .map(|path| load::load_csv(path, &config.missing_tokens()))
        .transpose()?;
    if let Some(table) = &table {
        info!(rows = table.n_rows(), columns = table.n_cols(), "dataset loaded");
    }

    let report = Report::build(table, &config).context("Analysis failed")?;
    match cli.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        ),
    }
    Ok(())
}
