use clap::Parser;
use std::io::Read as _;
use upo_core::models::PricingParameters;
use upo_core::ports::{Optimizer as _, TableSource as _};
use upo_csv::CsvTableSource;
use upo_solver::SweepSolver;

mod io;
pub use io::IOArgs;

/// Sweep a monthly sales table for the profit-maximizing unit price.
///
/// Reads a CSV with twelve month-named columns (January through December),
/// averages each month across rows, and exhaustively searches every integer
/// price between the cost-covering floor and the zero-demand ceiling. The
/// result — either the winning price with its monthly plan, or an explicit
/// "no viable price" — is written as JSON.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Production or acquisition cost per unit
    #[arg(long)]
    pub unit_cost: f64,

    /// Highest price at which demand is still fully saturated
    #[arg(long)]
    pub price_best: u32,

    /// Price at which demand falls to zero
    #[arg(long)]
    pub price_max: u32,

    #[command(flatten)]
    pub io: IOArgs,
}

impl Args {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let parameters =
            PricingParameters::new(self.unit_cost, self.price_best, self.price_max)?;

        let mut bytes = Vec::new();
        self.io.read()?.read_to_end(&mut bytes)?;

        // Stdin carries no extension; assume CSV there.
        let extension = self.io.input_extension().unwrap_or("csv");
        let table = CsvTableSource.parse(&bytes, extension)?;

        let result = SweepSolver.optimize(&table, &parameters)?;
        serde_json::to_writer_pretty(self.io.write()?, &result)?;

        Ok(())
    }
}
