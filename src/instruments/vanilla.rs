//! Canonical vanilla option contract consumed by the pricing engine.
//!
//! [`OptionContract`] is a transient value object built per valuation request:
//! it carries both the contract terms (strike, days to expiry, side) and the
//! market state the caller observed (spot, rate, implied volatility), because
//! the engine's API is a single stateless call with no shared market snapshot.
//! `days_to_expiry == 0` is a valid input meaning expiry day, priced at
//! intrinsic value.

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};

/// Days-per-year convention used to turn `days_to_expiry` into a year
/// fraction.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Immutable valuation request for one vanilla option.
///
/// Rates and volatilities are annualized fractions (`0.065` = 6.5%). A
/// continuous dividend yield, where one applies, is folded into
/// `risk_free_rate` by the caller.
///
/// # Examples
/// ```
/// use vegakit::instruments::OptionContract;
///
/// let contract = OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185);
/// assert!(contract.validate().is_ok());
/// assert!((contract.years_to_expiry() - 7.0 / 365.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Spot price of the underlying. Must be > 0.
    pub underlying_price: f64,
    /// Strike level. Must be > 0.
    pub strike_price: f64,
    /// Calendar days until expiry; 0 means expiry day.
    pub days_to_expiry: u32,
    /// Annualized risk-free rate as a fraction.
    pub risk_free_rate: f64,
    /// Annualized implied volatility as a fraction. Must be >= 0.
    pub implied_volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionContract {
    /// Builds a call contract.
    pub fn call(
        underlying_price: f64,
        strike_price: f64,
        days_to_expiry: u32,
        risk_free_rate: f64,
        implied_volatility: f64,
    ) -> Self {
        Self {
            underlying_price,
            strike_price,
            days_to_expiry,
            risk_free_rate,
            implied_volatility,
            option_type: OptionType::Call,
        }
    }

    /// Builds a put contract.
    pub fn put(
        underlying_price: f64,
        strike_price: f64,
        days_to_expiry: u32,
        risk_free_rate: f64,
        implied_volatility: f64,
    ) -> Self {
        Self {
            underlying_price,
            strike_price,
            days_to_expiry,
            risk_free_rate,
            implied_volatility,
            option_type: OptionType::Put,
        }
    }

    /// Time to expiry as a year fraction under the fixed days/365 convention.
    pub fn years_to_expiry(&self) -> f64 {
        f64::from(self.days_to_expiry) / DAYS_PER_YEAR
    }

    /// Validates every field, identifying the first out-of-range one.
    ///
    /// Validation never clamps: the caller gets the offending field name,
    /// its value, and the violated constraint, and decides what to do.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] when:
    /// - `underlying_price` is not finite or <= 0
    /// - `strike_price` is not finite or <= 0
    /// - `risk_free_rate` is not finite
    /// - `implied_volatility` is not finite or < 0
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.underlying_price.is_finite() || self.underlying_price <= 0.0 {
            return Err(PricingError::InvalidParameter {
                field: "underlying_price",
                value: self.underlying_price,
                reason: "must be finite and > 0",
            });
        }
        if !self.strike_price.is_finite() || self.strike_price <= 0.0 {
            return Err(PricingError::InvalidParameter {
                field: "strike_price",
                value: self.strike_price,
                reason: "must be finite and > 0",
            });
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                field: "risk_free_rate",
                value: self.risk_free_rate,
                reason: "must be finite",
            });
        }
        if !self.implied_volatility.is_finite() || self.implied_volatility < 0.0 {
            return Err(PricingError::InvalidParameter {
                field: "implied_volatility",
                value: self.implied_volatility,
                reason: "must be finite and >= 0",
            });
        }
        Ok(())
    }
}
