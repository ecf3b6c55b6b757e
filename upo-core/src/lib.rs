#![warn(missing_docs)]
//! Domain models and ports for the unit price optimizer.
//!
//! The optimizer answers one question: given twelve monthly sales-volume
//! observations for an item, a per-unit cost, and two price thresholds that
//! pin down a linear price-demand relationship, which integer unit price
//! maximizes total annual profit?
//!
//! This crate holds the vocabulary of that question — tables, averages,
//! parameters, outcomes — and the trait seams through which the rest of the
//! system cooperates. It performs no I/O and contains no search logic; see
//! the `upo-solver` crate for the engine and `upo-csv` for table ingestion.

/// Core domain models for the pricing system.
///
/// The types in this module are primarily data structures with minimal
/// business logic. Where a type carries an invariant (such as the ordering
/// of the two price thresholds), the invariant is enforced at construction
/// and the serde path is routed through the same validation.
pub mod models;

/// Interface traits for the pricing system.
///
/// These are the "ports" in a hexagonal architecture: the contract between
/// the pure engine and its collaborators (file parsers, front ends), with no
/// implementation details. Swapping an adapter never touches the engine.
pub mod ports;
