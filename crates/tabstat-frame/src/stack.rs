//! Column stacking into a dense row-major matrix

use tabstat_core::{Error, Result, Table};

/// Stack the named numeric columns side by side
///
/// Row `i` of the result holds the `i`-th cell of each column, in the order
/// given. Every cell must hold a value.
pub fn hstack(table: &Table, columns: &[&str]) -> Result<Vec<Vec<f64>>> {
    let cells = columns
        .iter()
        .map(|&name| table.column(name)?.numeric_options())
        .collect::<Result<Vec<_>>>()?;

    (0..table.n_rows())
        .map(|row| {
            cells
                .iter()
                .zip(columns)
                .map(|(column, &name)| {
                    column[row].ok_or_else(|| Error::MissingValue {
                        column: name.to_string(),
                        row,
                    })
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}
