//! Common domain types, result payload, and library-wide error structures.

use serde::{Deserialize, Serialize};

pub mod serialization;
pub mod types;

pub use types::*;

/// Standardized Greeks container produced by the analytic engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility.
    pub vega: f64,
    /// First derivative to time, annualized.
    pub theta: f64,
    /// First derivative to rate.
    pub rho: f64,
}

impl Greeks {
    /// Annualized theta rescaled to calendar-day decay, the convention most
    /// retail front-ends display.
    pub fn theta_per_day(&self) -> f64 {
        self.theta / 365.0
    }
}

/// Maximum profit of a long position in a single option.
///
/// A long call has no upper bound on the underlying, so its profit is
/// unbounded; a long put caps out when the underlying goes to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MaxProfit {
    /// No finite cap (long call).
    Unbounded,
    /// Finite cap in premium currency units.
    Bounded(f64),
}

/// Complete valuation payload for one contract.
///
/// Produced fresh on every [`crate::pricing::european::price`] call and never
/// mutated. `time_value` is the *model* time value (theoretical price minus
/// intrinsic); comparing against an observed market premium is a separate
/// operation, [`crate::pricing::european::market_time_value`], so the two
/// quantities never mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Theoretical (model) price of one unit.
    pub theoretical_price: f64,
    /// First-order sensitivities.
    pub greeks: Greeks,
    /// Payoff if exercised immediately at the current spot.
    pub intrinsic_value: f64,
    /// Model time value: `theoretical_price - intrinsic_value`.
    pub time_value: f64,
    /// Spot level at which a long position breaks even at expiry.
    pub break_even_price: f64,
    /// Profit cap of a long position, per unit.
    pub max_profit: MaxProfit,
    /// Worst-case loss of a long position, per unit: the premium paid.
    /// Quantity scaling is the caller's concern.
    pub max_loss: f64,
    /// Strike-versus-spot classification.
    pub moneyness: Moneyness,
    /// Lognormal `d1` term; `None` on the degenerate paths (expiry day or
    /// zero volatility) where the term is not defined.
    pub d1: Option<f64>,
    /// Lognormal `d2` term; `None` on the degenerate paths.
    pub d2: Option<f64>,
}

/// Errors surfaced by the valuation API.
///
/// Validation is the only failure mode: once inputs pass, the closed-form
/// path has nothing left that can fail, so no error is ever produced
/// mid-computation.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// An input field is out of range. The engine never clamps; the caller
    /// decides whether to re-prompt or fall back to a prior result.
    InvalidParameter {
        /// Field name as it appears on the input struct.
        field: &'static str,
        /// Offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter {
                field,
                value,
                reason,
            } => {
                write!(f, "invalid parameter `{field}` = {value}: {reason}")
            }
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_the_field() {
        let err = PricingError::InvalidParameter {
            field: "implied_volatility",
            value: -0.01,
            reason: "must be >= 0",
        };
        let msg = err.to_string();
        assert!(msg.contains("implied_volatility"));
        assert!(msg.contains("-0.01"));
    }

    #[test]
    fn theta_per_day_rescales() {
        let g = Greeks {
            delta: 0.5,
            gamma: 0.01,
            vega: 20.0,
            theta: -7.3,
            rho: 11.0,
        };
        assert!((g.theta_per_day() - (-7.3 / 365.0)).abs() < 1e-15);
    }
}
