use super::{Month, PricingParameters};

/// One month of the reconstructed sales plan at the winning price.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyOutcome {
    /// The calendar month this entry describes.
    pub month: Month,
    /// Expected unit volume for the month at the winning retention.
    pub volume: f64,
    /// `price * volume` for the month.
    pub revenue: f64,
    /// `(price - unit_cost) * volume` for the month.
    pub profit: f64,
}

/// The terminal output of a single pricing run.
///
/// The two variants are the two mutually exclusive shapes of an answer:
/// either a concrete best price with its annual totals and monthly
/// breakdown, or an explicit "no viable price" signal. Exhausting the search
/// without finding positive profit is an *answer*, not an error, so callers
/// branch on the variant rather than on error presence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", rename_all = "snake_case")
)]
pub enum OptimizationResult {
    /// Some price in the feasible range yields positive annual profit.
    Optimal {
        /// The winning integer unit price.
        price: u32,
        /// Total annual unit volume at the winning retention.
        total_volume: f64,
        /// Total annual revenue; equals `price * total_volume`.
        total_revenue: f64,
        /// Total annual profit; equals `total_revenue - unit_cost * total_volume`.
        total_profit: f64,
        /// Twelve entries in calendar order, summing to the totals above.
        breakdown: Vec<MonthlyOutcome>,
    },
    /// No price in the feasible range yields positive profit (or the range
    /// is empty). Echoes the parameters for diagnostics.
    NoViablePrice {
        /// The parameter set as received.
        parameters: PricingParameters,
    },
}

impl OptimizationResult {
    /// Whether this is the positive outcome.
    pub fn is_optimal(&self) -> bool {
        matches!(self, OptimizationResult::Optimal { .. })
    }
}
