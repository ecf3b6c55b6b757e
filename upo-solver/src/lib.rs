#![warn(missing_docs)]
//! The pricing engine for the unit price optimizer.
//!
//! Three cooperating stages, with data flowing strictly one way:
//!
//! 1. [`aggregate`] reduces a [`MonthlyTable`](upo_core::models::MonthlyTable)
//!    to twelve per-month averages;
//! 2. [`demand`] maps a candidate price to the fraction of baseline volume
//!    retained at that price;
//! 3. [`sweep`] exhaustively evaluates every integer candidate in the
//!    feasible range and reconstructs the monthly plan for the winner.
//!
//! The whole engine is synchronous, allocation-light, and stateless per
//! invocation. It does no I/O: tables arrive already parsed through the
//! [`TableSource`](upo_core::ports::TableSource) port and results leave as
//! plain values.

pub mod aggregate;
pub mod demand;
pub mod sweep;

pub use aggregate::{AggregateError, monthly_averages};
pub use demand::RetentionCurve;
pub use sweep::SweepSolver;
