//! The exhaustive integer price sweep.

use tracing::{Level, event};
use upo_core::{
    models::{
        MonthlyAverages, MonthlyOutcome, MonthlyTable, OptimizationResult, PricingParameters,
    },
    ports::Optimizer,
};

use crate::aggregate::{self, AggregateError};
use crate::demand::RetentionCurve;

/// An exhaustive sweep over every integer candidate price in the feasible
/// range.
///
/// The feasible range is `[max(floor(unit_cost) + 1, price_best), price_max]`:
/// a price at or below cost can never turn a profit, and a price below
/// `price_best` sells exactly the same volume as `price_best` for strictly
/// less revenue, so neither end is worth exploring. The sweep is linear in
/// the width of that range.
///
/// Ties on maximal profit keep the *lowest* price: the best-so-far is only
/// replaced on a strictly greater profit, and candidates are visited in
/// ascending order. This is a contract, not an accident of iteration (see
/// the tie-break tests).
///
/// Stateless: each call is an independent pure computation over its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepSolver;

struct Candidate {
    price: u32,
    retention: f64,
    profit: f64,
}

impl SweepSolver {
    /// Run the sweep over pre-aggregated monthly averages.
    ///
    /// Returns the positive outcome with the winning price and its monthly
    /// breakdown, or [`OptimizationResult::NoViablePrice`] when the feasible
    /// range is empty or no candidate yields positive profit.
    pub fn sweep(
        &self,
        averages: &MonthlyAverages,
        parameters: &PricingParameters,
    ) -> OptimizationResult {
        let unit_cost = parameters.unit_cost();
        let baseline = averages.total();
        let curve = RetentionCurve::new(parameters);

        let start = (unit_cost.floor() as i64 + 1).max(i64::from(parameters.price_best()));
        let end = i64::from(parameters.price_max());

        if start >= end {
            event!(Level::DEBUG, start, end, "feasible price range is empty");
            return OptimizationResult::NoViablePrice {
                parameters: *parameters,
            };
        }

        let mut best: Option<Candidate> = None;
        for price in start..=end {
            let retention = curve.retention(price as f64);
            if retention == 0.0 {
                continue;
            }

            let volume = retention * baseline;
            let profit = volume * (price as f64 - unit_cost);

            // Strictly greater: on a tie, the earlier (lower) price stands.
            if best.as_ref().is_none_or(|b| profit > b.profit) {
                best = Some(Candidate {
                    price: price as u32,
                    retention,
                    profit,
                });
            }
        }

        match best {
            Some(candidate) if candidate.profit > 0.0 => {
                event!(
                    Level::DEBUG,
                    start,
                    end,
                    price = candidate.price,
                    profit = candidate.profit,
                    "price sweep found a viable price"
                );
                assemble(averages, parameters, &candidate)
            }
            _ => {
                event!(
                    Level::DEBUG,
                    start,
                    end,
                    "no candidate price yields positive profit"
                );
                OptimizationResult::NoViablePrice {
                    parameters: *parameters,
                }
            }
        }
    }
}

/// Reconstruct the monthly plan at the winning price and sum the totals
/// from it, so the reported totals are exactly the sums of the breakdown.
fn assemble(
    averages: &MonthlyAverages,
    parameters: &PricingParameters,
    candidate: &Candidate,
) -> OptimizationResult {
    let price = f64::from(candidate.price);
    let unit_cost = parameters.unit_cost();

    let mut breakdown = Vec::with_capacity(12);
    let mut total_volume = 0.0;
    let mut total_revenue = 0.0;
    let mut total_profit = 0.0;

    for (month, average) in averages.iter() {
        let volume = candidate.retention * average;
        let revenue = price * volume;
        let profit = (price - unit_cost) * volume;

        total_volume += volume;
        total_revenue += revenue;
        total_profit += profit;

        breakdown.push(MonthlyOutcome {
            month,
            volume,
            revenue,
            profit,
        });
    }

    OptimizationResult::Optimal {
        price: candidate.price,
        total_volume,
        total_revenue,
        total_profit,
        breakdown,
    }
}

impl Optimizer for SweepSolver {
    type Error = AggregateError;

    fn optimize(
        &self,
        table: &MonthlyTable,
        parameters: &PricingParameters,
    ) -> Result<OptimizationResult, Self::Error> {
        let averages = aggregate::monthly_averages(table)?;
        Ok(self.sweep(&averages, parameters))
    }
}
