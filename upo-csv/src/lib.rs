#![warn(missing_docs)]
//! A [`TableSource`] implementation for comma-separated uploads.
//!
//! This adapter keeps every file-format concern out of the engine: raw bytes
//! plus a declared extension go in, a [`MonthlyTable`] comes out. Cells that
//! do not parse as numbers are dropped — item labels and free-text columns
//! are legal input — and whether the numeric columns that remain satisfy the
//! twelve-month schema is decided downstream, by aggregation.

use thiserror::Error;
use upo_core::models::{MonthlyTable, Row};
use upo_core::ports::TableSource;

/// Parse failures for CSV input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The declared extension is not one this source understands.
    #[error("unsupported file extension {0:?}, expected \"csv\"")]
    UnsupportedExtension(String),
    /// The payload is not well-formed CSV.
    #[error("malformed csv: {0}")]
    Malformed(#[from] csv::Error),
    /// Headers parsed but no data rows followed.
    #[error("no data rows found")]
    Empty,
}

/// A [`TableSource`] reading comma-separated values.
///
/// Header row required; fields are trimmed; short records are tolerated
/// (missing trailing cells simply leave those columns absent from the row,
/// to be caught by month-presence validation later).
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvTableSource;

impl TableSource for CsvTableSource {
    type Error = ParseError;

    fn parse(&self, bytes: &[u8], extension: &str) -> Result<MonthlyTable, ParseError> {
        if !extension.eq_ignore_ascii_case("csv") {
            return Err(ParseError::UnsupportedExtension(extension.to_owned()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = Row::default();
            for (header, cell) in headers.iter().zip(record.iter()) {
                if let Ok(value) = cell.parse::<f64>() {
                    row.insert(header.to_owned(), value);
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(MonthlyTable::new(rows))
    }
}
