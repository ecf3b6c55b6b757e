//! End-to-end: CSV bytes through the table source into the sweep.

use upo_core::{
    models::{Month, OptimizationResult, PricingParameters},
    ports::{Optimizer as _, TableSource as _},
};
use upo_csv::CsvTableSource;
use upo_solver::{AggregateError, SweepSolver};

const UPLOAD: &str = "\
Item,January,February,March,April,May,June,July,August,September,October,November,December,Notes
Widget,100,100,100,100,100,100,100,100,100,100,100,100,steady seller
";

#[test]
fn parsed_upload_feeds_the_optimizer() {
    let table = CsvTableSource.parse(UPLOAD.as_bytes(), "csv").unwrap();
    let parameters = PricingParameters::new(5.0, 10, 20).unwrap();

    let result = SweepSolver.optimize(&table, &parameters).unwrap();
    let OptimizationResult::Optimal {
        price, breakdown, ..
    } = result
    else {
        panic!("expected a viable price");
    };

    assert_eq!(price, 12);
    assert_eq!(breakdown.len(), 12);
    assert_eq!(breakdown[0].month, Month::January);
}

#[test]
fn a_dropped_text_cell_surfaces_as_a_missing_month() {
    // "n/a" is not numeric, so June never makes it into the row; the
    // aggregation step names the month in its error.
    let upload = "\
January,February,March,April,May,June,July,August,September,October,November,December
100,100,100,100,100,n/a,100,100,100,100,100,100
";
    let table = CsvTableSource.parse(upload.as_bytes(), "csv").unwrap();
    let parameters = PricingParameters::new(5.0, 10, 20).unwrap();

    let err = SweepSolver.optimize(&table, &parameters).unwrap_err();
    assert_eq!(err, AggregateError::MissingColumn(Month::June));
}
