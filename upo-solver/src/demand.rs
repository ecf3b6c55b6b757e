//! The linear price-demand relationship.

use upo_core::models::PricingParameters;

/// The volume-retention curve implied by a set of pricing parameters.
///
/// Maps a candidate price to the fraction of baseline demand retained at
/// that price:
///
/// - `1.0` below `price_best` (demand fully saturated),
/// - `0.0` above `price_max` (no demand at all),
/// - linear interpolation between the two thresholds.
///
/// The saturated branch uses a strict `<`, so `price == price_best` falls
/// through to the linear branch — which evaluates to `1.0` there, keeping
/// the curve continuous at the left boundary. Construction of
/// [`PricingParameters`] guarantees `price_max > price_best`, so the
/// interpolation denominator is never zero.
#[derive(Clone, Copy, Debug)]
pub struct RetentionCurve {
    price_best: f64,
    price_max: f64,
}

impl RetentionCurve {
    /// Builds the curve for the given parameters.
    pub fn new(parameters: &PricingParameters) -> Self {
        Self {
            price_best: f64::from(parameters.price_best()),
            price_max: f64::from(parameters.price_max()),
        }
    }

    /// The retained fraction of baseline volume at `price`, always in `[0, 1]`.
    pub fn retention(&self, price: f64) -> f64 {
        if price < self.price_best {
            1.0
        } else if price > self.price_max {
            0.0
        } else {
            (self.price_max - price) / (self.price_max - self.price_best)
        }
    }
}

impl From<&PricingParameters> for RetentionCurve {
    fn from(parameters: &PricingParameters) -> Self {
        Self::new(parameters)
    }
}
