use super::Month;
use std::ops::Index;

/// Twelve per-month volume averages, index-aligned to the calendar.
///
/// The arithmetic mean of each month column of a
/// [`MonthlyTable`](super::MonthlyTable), derived once per request by the
/// aggregation step and immutable afterwards. The sum of the twelve entries
/// is the annual baseline volume at full demand retention.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MonthlyAverages([f64; 12]);

impl MonthlyAverages {
    /// Wraps twelve averages, one per calendar month in order.
    pub fn new(values: [f64; 12]) -> Self {
        Self(values)
    }

    /// The annual baseline volume: the sum of all twelve entries.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Iterate `(month, average)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<Month> for MonthlyAverages {
    type Output = f64;

    fn index(&self, month: Month) -> &f64 {
        &self.0[month.index()]
    }
}
