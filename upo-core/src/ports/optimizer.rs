use crate::models::{MonthlyTable, OptimizationResult, PricingParameters};

/// The single logical operation this system offers: find the integer unit
/// price that maximizes total annual profit for the given table and
/// parameters.
///
/// Implementations must be pure and stateless per invocation — identical
/// inputs produce identical results, and concurrent calls need no
/// coordination because nothing is shared between them.
///
/// # Errors
///
/// Only input-shape failures (a missing month column, an empty table) are
/// errors. A search that finds no profitable price is a normal return value:
/// [`OptimizationResult::NoViablePrice`].
pub trait Optimizer {
    /// The input-shape failure type.
    type Error: std::error::Error;

    /// Run one optimization over the table with the given parameters.
    fn optimize(
        &self,
        table: &MonthlyTable,
        parameters: &PricingParameters,
    ) -> Result<OptimizationResult, Self::Error>;
}
