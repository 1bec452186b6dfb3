//! Module `pricing::european`.
//!
//! The top-level valuation surface: [`price`] maps a validated
//! [`OptionContract`] to a complete [`PricingResult`], and the
//! `black_scholes_*` helpers expose the underlying kernels positionally for
//! quick one-off valuations.
//!
//! References: Hull (11th ed.), Ch. 13 for the pricing formula and Ch. 19
//! for the Greeks.
//!
//! [`market_time_value`] is deliberately separate from
//! [`PricingResult::time_value`]: the former subtracts intrinsic value from
//! an *observed* premium, the latter from the *model* price. Callers choose
//! which comparison they want; the engine never conflates the two.

use crate::core::{Greeks, OptionType, PricingError, PricingResult};
use crate::engines::analytic::BlackScholesEngine;
use crate::engines::analytic::black_scholes::{
    bs_delta, bs_gamma, bs_price, bs_rho, bs_theta, bs_vega, intrinsic,
};
use crate::instruments::OptionContract;

/// Prices a contract, returning the complete valuation payload.
///
/// Pure and stateless: no shared mutable state, no randomness, safe to call
/// concurrently without coordination. Debouncing of reactive recomputation
/// is the caller's concern; the engine has no notion of request identity.
///
/// # Errors
/// Returns [`PricingError::InvalidParameter`] when a contract field is out
/// of range; no error is ever produced after validation passes.
///
/// # Examples
/// ```rust
/// use vegakit::instruments::OptionContract;
/// use vegakit::pricing::european::price;
///
/// let result = price(&OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185)).unwrap();
/// assert!(result.theoretical_price > result.intrinsic_value);
/// assert!(result.greeks.delta > 0.0 && result.greeks.delta < 1.0);
/// ```
pub fn price(contract: &OptionContract) -> Result<PricingResult, PricingError> {
    BlackScholesEngine::new().price(contract)
}

/// Black-Scholes-Merton price, positional form.
///
/// `s` spot, `k` strike, `r` annualized rate (carry folded in), `sigma`
/// annualized volatility, `t` expiry in years.
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> f64 {
    bs_price(option_type, s, k, r, sigma, t)
}

/// Black-Scholes-Merton Greeks, positional form.
///
/// # Examples
/// ```rust
/// use vegakit::core::OptionType;
/// use vegakit::pricing::european::black_scholes_greeks;
///
/// let g = black_scholes_greeks(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
/// assert!(g.delta < 0.0 && g.delta > -1.0);
/// ```
pub fn black_scholes_greeks(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    sigma: f64,
    t: f64,
) -> Greeks {
    Greeks {
        delta: bs_delta(option_type, s, k, r, sigma, t),
        gamma: bs_gamma(s, k, r, sigma, t),
        vega: bs_vega(s, k, r, sigma, t),
        theta: bs_theta(option_type, s, k, r, sigma, t),
        rho: bs_rho(option_type, s, k, r, sigma, t),
    }
}

/// Time value of an *observed* market premium over intrinsic value.
///
/// This is the quantity a quote screen labels "time value": it compares the
/// traded premium, not the model price, against immediate-exercise payoff.
/// It can be negative when a quote trades below intrinsic.
///
/// # Errors
/// Returns [`PricingError::InvalidParameter`] when the contract is invalid
/// or `observed_price` is not finite or negative.
pub fn market_time_value(
    contract: &OptionContract,
    observed_price: f64,
) -> Result<f64, PricingError> {
    contract.validate()?;
    if !observed_price.is_finite() || observed_price < 0.0 {
        return Err(PricingError::InvalidParameter {
            field: "observed_price",
            value: observed_price,
            reason: "must be finite and >= 0",
        });
    }
    let iv = intrinsic(
        contract.option_type,
        contract.underlying_price,
        contract.strike_price,
    );
    Ok(observed_price - iv)
}
