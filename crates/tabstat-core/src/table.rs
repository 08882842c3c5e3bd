//! Strongly-typed tables with explicit missing-value bitmaps
//!
//! A [`Table`] is an ordered set of named [`Column`]s of equal length. Each
//! column is either numeric (`f64`) or categorical (`String`) and carries a
//! [`Bitmap`] marking which cells hold a value. Missing cells keep a
//! placeholder in the value buffer that is never observable through the
//! public API.

use crate::{numeric, Bitmap, Error, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value buffer of a column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }
}

/// A single cell, borrowed from its column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Number(f64),
    Text(&'a str),
    Missing,
}

impl Cell<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(x) => write!(f, "{x}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Missing => f.write_str("NA"),
        }
    }
}

/// A named, typed column with a validity bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
    validity: Bitmap,
}

impl Column {
    /// Numeric column with every cell present
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let validity = Bitmap::all_valid(values.len());
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
            validity,
        }
    }

    /// Numeric column where `None` marks a missing cell
    pub fn numeric_opt(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
    ) -> Self {
        let mut data = Vec::new();
        let mut validity = Bitmap::default();
        for value in values {
            validity.push(value.is_some());
            data.push(value.unwrap_or_default());
        }
        Self {
            name: name.into(),
            data: ColumnData::Numeric(data),
            validity,
        }
    }

    /// Categorical column with every cell present
    pub fn categorical<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        let validity = Bitmap::all_valid(values.len());
        Self {
            name: name.into(),
            data: ColumnData::Categorical(values),
            validity,
        }
    }

    /// Categorical column where `None` marks a missing cell
    pub fn categorical_opt<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let mut data = Vec::new();
        let mut validity = Bitmap::default();
        for value in values {
            validity.push(value.is_some());
            data.push(value.map(Into::into).unwrap_or_default());
        }
        Self {
            name: name.into(),
            data: ColumnData::Categorical(data),
            validity,
        }
    }

    /// Build a column from raw text cells, inferring its type
    ///
    /// Cells that are blank or equal to one of `missing_tokens` are missing.
    /// The column is numeric if every remaining cell parses as a finite
    /// number, categorical otherwise.
    pub fn from_text<S: AsRef<str>>(
        name: impl Into<String>,
        cells: &[S],
        missing_tokens: &[&str],
    ) -> Self {
        let present: Vec<Option<&str>> = cells
            .iter()
            .map(|c| {
                let c = c.as_ref().trim();
                if c.is_empty() || missing_tokens.contains(&c) {
                    None
                } else {
                    Some(c)
                }
            })
            .collect();

        let parsed: Option<Vec<Option<f64>>> = present
            .iter()
            .map(|cell| match cell {
                None => Some(None),
                Some(text) => text.parse::<f64>().ok().filter(|x| x.is_finite()).map(Some),
            })
            .collect();

        match parsed {
            Some(values) => Self::numeric_opt(name, values),
            None => Self::categorical_opt(name, present),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Categorical(_) => ColumnKind::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validity(&self) -> &Bitmap {
        &self.validity
    }

    pub fn missing_count(&self) -> usize {
        self.validity.count_missing()
    }

    pub fn valid_count(&self) -> usize {
        self.validity.count_valid()
    }

    pub fn is_valid(&self, row: usize) -> bool {
        self.validity.get(row)
    }

    /// Cell at `row`
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn cell(&self, row: usize) -> Cell<'_> {
        if !self.validity.get(row) {
            return Cell::Missing;
        }
        match &self.data {
            ColumnData::Numeric(v) => Cell::Number(v[row]),
            ColumnData::Categorical(v) => Cell::Text(&v[row]),
        }
    }

    /// Numeric value at `row`, `None` if missing or the column is categorical
    pub fn f64_at(&self, row: usize) -> Option<f64> {
        match self.cell(row) {
            Cell::Number(x) => Some(x),
            _ => None,
        }
    }

    /// Text value at `row`, `None` if missing or the column is numeric
    pub fn str_at(&self, row: usize) -> Option<&str> {
        match self.cell(row) {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Require a numeric column
    pub fn expect_numeric(&self) -> Result<&[f64]> {
        match &self.data {
            ColumnData::Numeric(v) => Ok(v),
            ColumnData::Categorical(_) => Err(Error::type_mismatch(
                &self.name,
                ColumnKind::Numeric.name(),
                ColumnKind::Categorical.name(),
            )),
        }
    }

    /// Require a categorical column
    pub fn expect_categorical(&self) -> Result<&[String]> {
        match &self.data {
            ColumnData::Categorical(v) => Ok(v),
            ColumnData::Numeric(_) => Err(Error::type_mismatch(
                &self.name,
                ColumnKind::Categorical.name(),
                ColumnKind::Numeric.name(),
            )),
        }
    }

    /// Non-missing values of a numeric column, in row order
    pub fn numeric_values(&self) -> Result<Vec<f64>> {
        let data = self.expect_numeric()?;
        Ok(data
            .iter()
            .zip(self.validity.iter())
            .filter_map(|(&x, valid)| valid.then_some(x))
            .collect())
    }

    /// Cells of a numeric column, `None` for missing
    pub fn numeric_options(&self) -> Result<Vec<Option<f64>>> {
        let data = self.expect_numeric()?;
        Ok(data
            .iter()
            .zip(self.validity.iter())
            .map(|(&x, valid)| valid.then_some(x))
            .collect())
    }

    /// Cells of a categorical column, `None` for missing
    pub fn categorical_options(&self) -> Result<Vec<Option<&str>>> {
        let data = self.expect_categorical()?;
        Ok(data
            .iter()
            .zip(self.validity.iter())
            .map(|(s, valid)| valid.then_some(s.as_str()))
            .collect())
    }

    /// Replace every missing cell of a numeric column with `value`
    ///
    /// Returns the number of cells filled.
    pub fn fill_missing(&mut self, value: f64) -> Result<usize> {
        if !value.is_finite() {
            return Err(Error::NonFinite(format!("fill value for '{}'", self.name)));
        }
        let missing: Vec<usize> = self.validity.missing_indices().collect();
        let data = match &mut self.data {
            ColumnData::Numeric(v) => v,
            ColumnData::Categorical(_) => {
                return Err(Error::type_mismatch(
                    &self.name,
                    ColumnKind::Numeric.name(),
                    ColumnKind::Categorical.name(),
                ))
            }
        };
        for &row in &missing {
            data[row] = value;
            self.validity.set(row, true);
        }
        Ok(missing.len())
    }

    fn validate(&self) -> Result<()> {
        if self.validity.len() != self.data.len() {
            return Err(Error::ShapeMismatch {
                column: self.name.clone(),
                expected: self.data.len(),
                actual: self.validity.len(),
            });
        }
        if let ColumnData::Numeric(_) = self.data {
            numeric::check_finite(&self.numeric_values()?, &format!("column '{}'", self.name))?;
        }
        Ok(())
    }
}

impl Serialize for Column {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Column", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("kind", &self.kind())?;
        match &self.data {
            ColumnData::Numeric(_) => {
                let cells: Vec<Option<f64>> = (0..self.len()).map(|r| self.f64_at(r)).collect();
                state.serialize_field("values", &cells)?;
            }
            ColumnData::Categorical(_) => {
                let cells: Vec<Option<&str>> = (0..self.len()).map(|r| self.str_at(r)).collect();
                state.serialize_field("values", &cells)?;
            }
        }
        state.end()
    }
}

/// Per-column overview, as printed by dataframe `info()` helpers
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub kind: ColumnKind,
    pub non_missing: usize,
    pub len: usize,
}

impl fmt::Display for ColumnInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:>4} non-missing of {:<4} {}",
            self.name, self.non_missing, self.len, self.kind
        )
    }
}

/// Ordered set of equal-length named columns
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table, checking names are unique, lengths agree and numeric
    /// values are finite
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(Error::DuplicateColumn(column.name().to_string()));
            }
            if column.len() != n_rows {
                return Err(Error::ShapeMismatch {
                    column: column.name().to_string(),
                    expected: n_rows,
                    actual: column.len(),
                });
            }
            column.validate()?;
        }
        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Index of the column called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Column by name; `UnknownColumn` if absent
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Mutable column by name; `UnknownColumn` if absent
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Cells of row `index`, in column order
    ///
    /// # Panics
    /// Panics if `index >= n_rows`.
    pub fn row(&self, index: usize) -> Vec<Cell<'_>> {
        self.columns.iter().map(|c| c.cell(index)).collect()
    }

    /// Name, type and non-missing count per column
    pub fn info(&self) -> Vec<ColumnInfo> {
        self.columns
            .iter()
            .map(|c| ColumnInfo {
                name: c.name().to_string(),
                kind: c.kind(),
                non_missing: c.valid_count(),
                len: c.len(),
            })
            .collect()
    }

    /// Total number of missing cells across all columns
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| (0..self.n_rows).map(|r| c.cell(r).to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells
                    .iter()
                    .map(|s| s.chars().count())
                    .chain(std::iter::once(c.name().chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{:>width$}", column.name(), width = widths[i])?;
        }
        writeln!(f)?;
        for row in 0..self.n_rows {
            for (i, cells) in rendered.iter().enumerate() {
                if i > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{:>width$}", cells[row], width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
