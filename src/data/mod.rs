//! Tabular input and output layer.

pub mod output;
pub mod spreadsheet;
