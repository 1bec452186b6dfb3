//! Black-Scholes-Merton kernels and the analytic engine built on them.
//!
//! The free-function kernels (`bs_price`, `bs_delta`, ...) take the model
//! state positionally and are the hot path; [`BlackScholesEngine`] wraps them
//! behind contract validation and assembles the full
//! [`crate::core::PricingResult`] payload.
//!
//! Rates here are total carry: a continuous dividend yield, when one applies,
//! is folded into the rate by the caller.
//!
//! Expiry-day semantics (`t == 0`): price equals intrinsic value, gamma,
//! vega, theta, and rho are zero, and delta takes its discontinuous
//! step-function limit (see [`expiry_delta`]). This discontinuity is the
//! model's, not a defect. The same limit applies at zero volatility with the
//! step evaluated against the discounted strike.

use crate::core::{Greeks, MaxProfit, Moneyness, OptionType, PricingError, PricingResult};
use crate::instruments::OptionContract;
use crate::math::{normal_cdf, normal_pdf};

/// Analytic Black-Scholes engine for European vanilla options.
///
/// Stateless and trivially `Copy`; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates a Black-Scholes engine instance.
    pub fn new() -> Self {
        Self
    }

    /// Validates the contract and produces a complete valuation.
    ///
    /// Deterministic: identical contracts yield bitwise-identical results.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] from
    /// [`OptionContract::validate`]; nothing after validation can fail.
    pub fn price(&self, contract: &OptionContract) -> Result<PricingResult, PricingError> {
        contract.validate()?;

        let s = contract.underlying_price;
        let k = contract.strike_price;
        let r = contract.risk_free_rate;
        let sigma = contract.implied_volatility;
        let t = contract.years_to_expiry();
        let option_type = contract.option_type;

        let intrinsic_value = intrinsic(option_type, s, k);
        let theoretical_price = bs_price(option_type, s, k, r, sigma, t);

        let greeks = Greeks {
            delta: bs_delta(option_type, s, k, r, sigma, t),
            gamma: bs_gamma(s, k, r, sigma, t),
            vega: bs_vega(s, k, r, sigma, t),
            theta: bs_theta(option_type, s, k, r, sigma, t),
            rho: bs_rho(option_type, s, k, r, sigma, t),
        };

        // d1/d2 only exist on the non-degenerate path.
        let (d1, d2) = if t > 0.0 && sigma > 0.0 {
            let (d1, d2) = d1_d2(s, k, r, sigma, t);
            (Some(d1), Some(d2))
        } else {
            (None, None)
        };

        let break_even_price = match option_type {
            OptionType::Call => k + theoretical_price,
            OptionType::Put => k - theoretical_price,
        };
        let max_profit = match option_type {
            OptionType::Call => MaxProfit::Unbounded,
            OptionType::Put => MaxProfit::Bounded(k - theoretical_price),
        };

        Ok(PricingResult {
            theoretical_price,
            greeks,
            intrinsic_value,
            time_value: theoretical_price - intrinsic_value,
            break_even_price,
            max_profit,
            // Per unit; quantity scaling is the caller's.
            max_loss: theoretical_price,
            moneyness: Moneyness::classify(option_type, s, k),
            d1,
            d2,
        })
    }
}

/// Payoff if exercised immediately at the current spot.
#[inline]
pub fn intrinsic(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    match option_type {
        OptionType::Call => (spot - strike).max(0.0),
        OptionType::Put => (strike - spot).max(0.0),
    }
}

/// Delta at the expiry-day (or zero-volatility) limit.
///
/// The limit of `N(d1)` is a step function: 1 in the money, 0 out of the
/// money, and exactly at the strike the midpoint 0.5 of the jump (puts
/// mirrored to -1 / 0 / -0.5). The at-the-strike value is a convention for a
/// genuinely discontinuous point; callers should not read precision into it.
#[inline]
pub fn expiry_delta(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    let call_delta = if spot > strike {
        1.0
    } else if spot < strike {
        0.0
    } else {
        0.5
    };
    match option_type {
        OptionType::Call => call_delta,
        OptionType::Put => call_delta - 1.0,
    }
}

#[inline]
fn d1_d2(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> (f64, f64) {
    let sig_sqrt_t = vol * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * expiry) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes-Merton price of a European vanilla option.
///
/// # Examples
/// ```rust
/// use vegakit::core::OptionType;
/// use vegakit::engines::analytic::black_scholes::bs_price;
///
/// let call = bs_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
/// let put = bs_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
/// assert!(call > put);
/// ```
#[inline]
pub fn bs_price(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return intrinsic(option_type, spot, strike);
    }
    let df = (-rate * expiry).exp();
    if vol <= 0.0 {
        // Deterministic forward: discounted-forward intrinsic.
        return match option_type {
            OptionType::Call => (spot - strike * df).max(0.0),
            OptionType::Put => (strike * df - spot).max(0.0),
        };
    }

    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => spot * normal_cdf(d1) - strike * df * normal_cdf(d2),
        OptionType::Put => strike * df * normal_cdf(-d2) - spot * normal_cdf(-d1),
    }
}

/// First derivative of price to spot.
///
/// Lies in `[0, 1]` for calls and `[-1, 0]` for puts. On the degenerate
/// paths this is the documented step-function limit, not zero.
#[inline]
pub fn bs_delta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 {
        return expiry_delta(option_type, spot, strike);
    }
    if vol <= 0.0 {
        let df = (-rate * expiry).exp();
        return expiry_delta(option_type, spot, strike * df);
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    match option_type {
        OptionType::Call => normal_cdf(d1),
        OptionType::Put => normal_cdf(d1) - 1.0,
    }
}

/// Second derivative of price to spot; identical for calls and puts.
#[inline]
pub fn bs_gamma(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    normal_pdf(d1) / (spot * vol * expiry.sqrt())
}

/// First derivative of price to volatility; identical for calls and puts.
#[inline]
pub fn bs_vega(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, _) = d1_d2(spot, strike, rate, vol, expiry);
    spot * normal_pdf(d1) * expiry.sqrt()
}

/// First derivative of price to time, annualized.
///
/// Use [`crate::core::Greeks::theta_per_day`] for the calendar-day decay a
/// dashboard displays.
#[inline]
pub fn bs_theta(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (d1, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let sqrt_t = expiry.sqrt();
    let df = (-rate * expiry).exp();
    let decay = -spot * normal_pdf(d1) * vol / (2.0 * sqrt_t);
    match option_type {
        OptionType::Call => decay - rate * strike * df * normal_cdf(d2),
        OptionType::Put => decay + rate * strike * df * normal_cdf(-d2),
    }
}

/// First derivative of price to rate.
#[inline]
pub fn bs_rho(
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> f64 {
    if expiry <= 0.0 || vol <= 0.0 || spot <= 0.0 {
        return 0.0;
    }
    let (_, d2) = d1_d2(spot, strike, rate, vol, expiry);
    let df = (-rate * expiry).exp();
    match option_type {
        OptionType::Call => strike * expiry * df * normal_cdf(d2),
        OptionType::Put => -strike * expiry * df * normal_cdf(-d2),
    }
}
