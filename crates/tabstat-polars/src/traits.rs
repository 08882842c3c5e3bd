//! Extension trait for tabstat operations on Polars DataFrames

use crate::{Error, Result};
use polars::prelude::*;
use tabstat_core::{Column as TableColumn, ColumnKind, Table};
use tabstat_frame::{GroupAggregator, ImputationReport, Imputer};

/// Extension trait running tabstat table operations on a `DataFrame`
pub trait TableExt {
    /// Convert to a tabstat [`Table`]
    ///
    /// String columns become categorical, numeric columns are cast to
    /// `f64`; nulls become missing cells.
    fn to_table(&self) -> Result<Table>;

    /// Impute missing values, returning the cleaned frame and the fills
    fn impute(&self, imputer: &Imputer) -> Result<(DataFrame, ImputationReport)>;

    /// Group and reduce, with grouping columns first in the result
    fn aggregate(&self, aggregator: &GroupAggregator) -> Result<DataFrame>;
}

impl TableExt for DataFrame {
    fn to_table(&self) -> Result<Table> {
        let columns = self
            .get_columns()
            .iter()
            .map(convert_column)
            .collect::<Result<Vec<_>>>()?;
        Ok(Table::new(columns)?)
    }

    fn impute(&self, imputer: &Imputer) -> Result<(DataFrame, ImputationReport)> {
        let mut table = self.to_table()?;
        let report = imputer.apply(&mut table)?;
        Ok((table_to_dataframe(&table)?, report))
    }

    fn aggregate(&self, aggregator: &GroupAggregator) -> Result<DataFrame> {
        let table = self.to_table()?;
        let result = aggregator.aggregate(&table)?;
        table_to_dataframe(&result.to_table()?)
    }
}

fn convert_column(column: &Column) -> Result<TableColumn> {
    let name = column.name().as_str();
    match column.dtype() {
        DataType::String => {
            let ca = column.str()?;
            Ok(TableColumn::categorical_opt(name, ca.into_iter()))
        }
        DataType::Float64 => Ok(TableColumn::numeric_opt(name, column.f64()?.into_iter())),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32 => {
            let float_column = column.cast(&DataType::Float64)?;
            Ok(TableColumn::numeric_opt(name, float_column.f64()?.into_iter()))
        }
        dt => Err(Error::UnsupportedType {
            column: name.to_string(),
            dtype: format!("{dt:?}"),
        }),
    }
}

/// Convert a tabstat [`Table`] to a `DataFrame`, missing cells as nulls
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.n_cols());
    for column in table.columns() {
        let name = PlSmallStr::from(column.name());
        let series = match column.kind() {
            ColumnKind::Numeric => Series::new(name, column.numeric_options()?),
            ColumnKind::Categorical => Series::new(name, column.categorical_options()?),
        };
        columns.push(series.into());
    }
    Ok(DataFrame::new(columns)?)
}
