use thiserror::Error;

/// The three scalar inputs to a pricing run.
///
/// - `unit_cost`: production or acquisition cost per unit, finite and
///   strictly positive.
/// - `price_best`: the integer price at or below which demand is fully
///   saturated, strictly positive.
/// - `price_max`: the integer price at or above which demand vanishes,
///   strictly greater than `price_best`.
///
/// The strict inequality between the two thresholds is an explicit policy
/// choice: `price_max == price_best` would make the linear span of the
/// demand relationship zero-width and its slope undefined, so that
/// configuration is rejected here rather than special-cased downstream.
///
/// All construction goes through [`PricingParameters::new`], including the
/// serde path, so no unvalidated value can reach the solver.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPricingParameters", into = "RawPricingParameters")
)]
pub struct PricingParameters {
    unit_cost: f64,
    price_best: u32,
    price_max: u32,
}

impl PricingParameters {
    /// Validates and assembles a parameter set.
    pub fn new(unit_cost: f64, price_best: u32, price_max: u32) -> Result<Self, ValidationError> {
        if !unit_cost.is_finite() {
            return Err(ValidationError::NonFiniteCost);
        }
        if unit_cost <= 0.0 {
            return Err(ValidationError::NonPositiveCost);
        }
        if price_best == 0 {
            return Err(ValidationError::ZeroBestPrice);
        }
        if price_max <= price_best {
            return Err(ValidationError::EmptyPriceSpan {
                price_best,
                price_max,
            });
        }

        Ok(Self {
            unit_cost,
            price_best,
            price_max,
        })
    }

    /// The per-unit production or acquisition cost.
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }

    /// The price at or below which demand is fully saturated.
    pub fn price_best(&self) -> u32 {
        self.price_best
    }

    /// The price at or above which demand falls to zero.
    pub fn price_max(&self) -> u32 {
        self.price_max
    }
}

/// The ways in which a parameter set can be invalid.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The unit cost is NaN or infinite.
    #[error("unit cost must be a finite number")]
    NonFiniteCost,
    /// The unit cost is zero or negative.
    #[error("unit cost must be strictly positive")]
    NonPositiveCost,
    /// The best price is zero.
    #[error("best price must be strictly positive")]
    ZeroBestPrice,
    /// The maximum price does not exceed the best price, leaving the demand
    /// relationship with no linear span.
    #[error("maximum price ({price_max}) must exceed best price ({price_best})")]
    EmptyPriceSpan {
        /// The offending best price
        price_best: u32,
        /// The offending maximum price
        price_max: u32,
    },
}

/// The "DTO" shape for pricing parameters.
///
/// Serde reads and writes this plain struct; the conversion into
/// [`PricingParameters`] runs the validating constructor, so malformed
/// payloads fail at the deserialization boundary.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPricingParameters {
    /// Per-unit cost
    pub unit_cost: f64,
    /// Saturation price threshold
    pub price_best: u32,
    /// Zero-demand price threshold
    pub price_max: u32,
}

impl TryFrom<RawPricingParameters> for PricingParameters {
    type Error = ValidationError;

    fn try_from(value: RawPricingParameters) -> Result<Self, Self::Error> {
        PricingParameters::new(value.unit_cost, value.price_best, value.price_max)
    }
}

impl From<PricingParameters> for RawPricingParameters {
    fn from(value: PricingParameters) -> Self {
        Self {
            unit_cost: value.unit_cost,
            price_best: value.price_best,
            price_max: value.price_max,
        }
    }
}
