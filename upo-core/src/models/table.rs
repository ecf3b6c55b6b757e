use super::Map;

/// A single observation row: column name to numeric value.
///
/// Only numeric columns appear here; adapters drop anything that does not
/// parse as a number (item labels, free-text notes) before the table is
/// built.
pub type Row = Map<String, f64>;

/// An ordered table of per-row monthly sales-volume observations.
///
/// Each row is expected to carry twelve month-named numeric fields, one per
/// calendar month, plus arbitrary other columns the engine ignores. That
/// schema is deliberately *not* enforced here: a table is whatever a
/// [`TableSource`](crate::ports::TableSource) produced, and the aggregation
/// step validates month-field presence when it runs. Constructed once per
/// request and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct MonthlyTable(Vec<Row>);

impl MonthlyTable {
    /// Wraps the given rows as a table.
    pub fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// The observation rows, in input order.
    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    /// The number of observation rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Row>> for MonthlyTable {
    fn from(rows: Vec<Row>) -> Self {
        Self(rows)
    }
}
