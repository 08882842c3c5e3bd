//! Common test utilities for tabstat-report tests

/// The sales dataset as CSV, with `NA` and blank cells
pub const SALES_CSV: &str = "\
Region,Month,Sales,Expenses
North,Jan,100,80
North,Feb,NA,90
South,Jan,300,
South,Jan,250,120
East,Feb,,60
";

/// The same dataset with Portuguese headers
pub const VENDAS_CSV: &str = "\
Região,Mês,Vendas,Despesas
Norte,Jan,100,80
Norte,Fev,NA,90
Sul,Jan,300,NA
";
