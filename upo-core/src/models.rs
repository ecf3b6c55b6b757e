mod averages;
mod month;
mod outcome;
mod parameters;
mod table;

pub use averages::MonthlyAverages;
pub use month::Month;
pub use outcome::{MonthlyOutcome, OptimizationResult};
pub use parameters::{PricingParameters, RawPricingParameters, ValidationError};
pub use table::{MonthlyTable, Row};

/// The standard map type for this workspace.
///
/// IndexMap preserves insertion order, which keeps row columns and serialized
/// output deterministic; the Fx hasher is cheap for the short string keys we
/// use.
pub type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
