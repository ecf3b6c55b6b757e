use approx::assert_relative_eq;
use rstest::*;
use upo_core::{
    models::{Month, MonthlyAverages, MonthlyTable, OptimizationResult, PricingParameters, Row},
    ports::Optimizer as _,
};
use upo_solver::SweepSolver;

#[fixture]
pub fn uniform_averages() -> MonthlyAverages {
    MonthlyAverages::new([100.0; 12])
}

#[fixture]
pub fn seasonal_averages() -> MonthlyAverages {
    // A mild summer peak; totals 1278.
    MonthlyAverages::new([
        80.0, 85.0, 90.0, 100.0, 115.0, 130.0, 140.0, 135.0, 118.0, 102.0, 93.0, 90.0,
    ])
}

fn table_from(volumes: [f64; 12]) -> MonthlyTable {
    let row: Row = Month::ALL
        .into_iter()
        .zip(volumes)
        .map(|(month, volume)| (month.name().to_owned(), volume))
        .collect();
    MonthlyTable::new(vec![row])
}

fn params(unit_cost: f64, price_best: u32, price_max: u32) -> PricingParameters {
    PricingParameters::new(unit_cost, price_best, price_max).unwrap()
}

#[rstest]
fn finds_the_interior_profit_peak(uniform_averages: MonthlyAverages) {
    // Baseline 1200; profit (20-p)/10 * 1200 * (p-5) peaks between 12 and 13.
    let result = SweepSolver.sweep(&uniform_averages, &params(5.0, 10, 20));

    let OptimizationResult::Optimal {
        price,
        total_volume,
        total_revenue,
        total_profit,
        breakdown,
    } = result
    else {
        panic!("expected a viable price");
    };

    assert!((10..=20).contains(&price));
    assert_eq!(price, 12);
    assert!(total_profit > 0.0);
    assert_relative_eq!(total_volume, 960.0, max_relative = 1e-12);
    assert_relative_eq!(total_revenue, 11520.0, max_relative = 1e-12);
    assert_relative_eq!(total_profit, 6720.0, max_relative = 1e-12);
    assert_eq!(breakdown.len(), 12);
}

#[rstest]
fn a_profit_tie_keeps_the_lower_price(uniform_averages: MonthlyAverages) {
    // With cost 9, best 12, max 20 the retention fractions are exact eighths,
    // and prices 14 and 15 both yield exactly 4500.0 profit. The contract is
    // that the lower price wins.
    let result = SweepSolver.sweep(&uniform_averages, &params(9.0, 12, 20));

    let OptimizationResult::Optimal {
        price, total_profit, ..
    } = result
    else {
        panic!("expected a viable price");
    };

    assert_eq!(price, 14);
    assert_eq!(total_profit, 4500.0);
}

#[rstest]
fn cost_above_the_price_ceiling_short_circuits(uniform_averages: MonthlyAverages) {
    // start = floor(50) + 1 = 51 > end = 20: the loop never runs.
    let parameters = params(50.0, 10, 20);
    let result = SweepSolver.sweep(&uniform_averages, &parameters);

    assert_eq!(
        result,
        OptimizationResult::NoViablePrice { parameters }
    );
}

#[rstest]
fn a_single_candidate_range_is_not_searched(uniform_averages: MonthlyAverages) {
    // start == end counts as an empty range.
    let parameters = params(19.2, 10, 20);
    let result = SweepSolver.sweep(&uniform_averages, &parameters);

    assert_eq!(
        result,
        OptimizationResult::NoViablePrice { parameters }
    );
}

#[rstest]
fn zero_volume_yields_no_viable_price() {
    let averages = MonthlyAverages::new([0.0; 12]);
    let parameters = params(5.0, 10, 20);

    // Every candidate evaluates to exactly zero profit, which is not
    // positive, so the negative outcome is returned.
    let result = SweepSolver.sweep(&averages, &parameters);
    assert_eq!(
        result,
        OptimizationResult::NoViablePrice { parameters }
    );
}

#[rstest]
#[case::wide_span(params(4.5, 7, 19))]
#[case::example(params(5.0, 10, 20))]
#[case::long_tail(params(2.0, 3, 50))]
fn totals_are_the_sums_of_the_breakdown(
    seasonal_averages: MonthlyAverages,
    #[case] parameters: PricingParameters,
) {
    let result = SweepSolver.sweep(&seasonal_averages, &parameters);

    let OptimizationResult::Optimal {
        price,
        total_volume,
        total_revenue,
        total_profit,
        breakdown,
    } = result
    else {
        panic!("expected a viable price");
    };

    let volume_sum: f64 = breakdown.iter().map(|m| m.volume).sum();
    let revenue_sum: f64 = breakdown.iter().map(|m| m.revenue).sum();
    let profit_sum: f64 = breakdown.iter().map(|m| m.profit).sum();

    assert_relative_eq!(volume_sum, total_volume, max_relative = 1e-12);
    assert_relative_eq!(revenue_sum, total_revenue, max_relative = 1e-12);
    assert_relative_eq!(profit_sum, total_profit, max_relative = 1e-12);

    // The cross-identities from the model itself.
    assert_relative_eq!(
        total_revenue,
        f64::from(price) * total_volume,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        total_profit,
        total_revenue - parameters.unit_cost() * total_volume,
        max_relative = 1e-12
    );
}

#[rstest]
fn only_the_annual_total_drives_the_winning_price() {
    // Two tables with identical annual totals but different monthly shapes
    // must produce the same price and total profit; the breakdowns differ
    // proportionally to the monthly averages.
    let flat = table_from([100.0; 12]);
    let spiky = table_from([
        40.0, 160.0, 40.0, 160.0, 40.0, 160.0, 40.0, 160.0, 40.0, 160.0, 40.0, 160.0,
    ]);

    let parameters = params(5.0, 10, 20);
    let a = SweepSolver.optimize(&flat, &parameters).unwrap();
    let b = SweepSolver.optimize(&spiky, &parameters).unwrap();

    let OptimizationResult::Optimal {
        price: price_a,
        total_profit: profit_a,
        breakdown: breakdown_a,
        ..
    } = a
    else {
        panic!("expected a viable price for the flat table");
    };
    let OptimizationResult::Optimal {
        price: price_b,
        total_profit: profit_b,
        breakdown: breakdown_b,
        ..
    } = b
    else {
        panic!("expected a viable price for the spiky table");
    };

    assert_eq!(price_a, price_b);
    assert_relative_eq!(profit_a, profit_b, max_relative = 1e-12);

    // February got four times January's volume, so four times the revenue.
    assert_relative_eq!(
        breakdown_b[1].revenue,
        4.0 * breakdown_b[0].revenue,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        breakdown_a[0].revenue,
        breakdown_a[1].revenue,
        max_relative = 1e-12
    );
}

#[rstest]
fn raising_the_saturation_price_never_lowers_the_winning_profit(
    uniform_averages: MonthlyAverages,
) {
    let mut previous = f64::NEG_INFINITY;
    for price_best in [6, 8, 10, 12, 15, 18] {
        let result = SweepSolver.sweep(&uniform_averages, &params(5.0, price_best, 20));
        let OptimizationResult::Optimal { total_profit, .. } = result else {
            panic!("expected a viable price for price_best = {price_best}");
        };
        assert!(
            total_profit >= previous,
            "profit dropped from {previous} to {total_profit} at price_best = {price_best}"
        );
        previous = total_profit;
    }
}

#[rstest]
fn identical_inputs_produce_bit_identical_results(seasonal_averages: MonthlyAverages) {
    let parameters = params(4.5, 7, 19);
    let first = SweepSolver.sweep(&seasonal_averages, &parameters);
    let second = SweepSolver.sweep(&seasonal_averages, &parameters);

    assert_eq!(first, second);
}

#[rstest]
fn a_missing_month_column_is_an_error_not_an_outcome() {
    let mut volumes_row: Row = Month::ALL
        .into_iter()
        .map(|month| (month.name().to_owned(), 100.0))
        .collect();
    volumes_row.swap_remove("July");
    let table = MonthlyTable::new(vec![volumes_row]);

    let err = SweepSolver
        .optimize(&table, &params(5.0, 10, 20))
        .unwrap_err();
    assert_eq!(
        err,
        upo_solver::AggregateError::MissingColumn(Month::July)
    );
}
