//! Reduction of an observation table to twelve monthly averages.

use thiserror::Error;
use upo_core::models::{Month, MonthlyAverages, MonthlyTable};

/// The ways a table can fail aggregation.
#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    /// A required month field is absent (or was non-numeric) in at least one
    /// row of the table.
    #[error("missing month column: {0}")]
    MissingColumn(Month),
    /// The table has no rows, so the per-month means are undefined.
    #[error("table contains no rows")]
    EmptyTable,
}

/// Compute the column mean for each of the twelve month fields, in calendar
/// order.
///
/// Month presence is validated month by month in calendar order, so when
/// several months are missing the first one (January before February, and so
/// on) is the one reported — deterministically, regardless of row or column
/// order in the input.
pub fn monthly_averages(table: &MonthlyTable) -> Result<MonthlyAverages, AggregateError> {
    let rows = table.rows();
    if rows.is_empty() {
        return Err(AggregateError::EmptyTable);
    }

    let mut means = [0.0f64; 12];
    for month in Month::ALL {
        let mut sum = 0.0;
        for row in rows {
            match row.get(month.name()) {
                Some(&value) => sum += value,
                None => return Err(AggregateError::MissingColumn(month)),
            }
        }
        means[month.index()] = sum / rows.len() as f64;
    }

    Ok(MonthlyAverages::new(means))
}
