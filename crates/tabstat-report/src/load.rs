//! CSV loading into a typed table

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tabstat_core::{Column, Table};
use tracing::{debug, instrument};

/// Load a CSV file with a header row
pub fn load_csv(path: &Path, missing_tokens: &[&str]) -> Result<Table> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    read_csv(file, missing_tokens).with_context(|| format!("Failed to load '{}'", path.display()))
}

/// Read CSV from any reader
///
/// A column whose non-missing cells all parse as numbers becomes numeric;
/// any other column is categorical.
#[instrument(skip_all)]
pub fn read_csv<R: Read>(reader: R, missing_tokens: &[&str]) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV header")?.clone();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (line, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV record {}", line + 1))?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(&cells)
        .map(|(name, values)| Column::from_text(name, values.as_slice(), missing_tokens))
        .collect();
    let table = Table::new(columns)?;
    debug!(
        rows = table.n_rows(),
        columns = table.n_cols(),
        missing = table.missing_count(),
        "loaded csv"
    );
    Ok(table)
}
