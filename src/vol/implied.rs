//! Black-Scholes implied-volatility inversion.
//!
//! A calculator front-end that accepts a traded premium needs the inverse of
//! the pricing map. The solver is Newton-Raphson on vega with a bisection
//! fallback for the flat-vega regions (deep ITM/OTM short-dated options),
//! bracketed by no-arbitrage bounds checked up front.

use std::f64::consts::PI;

use crate::core::{OptionType, PricingError};
use crate::math::normal_pdf;
use crate::pricing::european::black_scholes_price;

const SIGMA_LO: f64 = 1e-6;
const SIGMA_HI: f64 = 5.0;

/// Heuristic initial volatility guess shaped by time value and log-moneyness.
///
/// Reduces Newton iterations materially versus a flat seed; output is
/// clamped to `[1e-4, 5.0]`.
pub fn initial_guess(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    market_price: f64,
) -> f64 {
    if t <= 0.0 {
        return 1e-4;
    }

    let df = (-r * t).exp();
    let intrinsic = match option_type {
        OptionType::Call => (s - k * df).max(0.0),
        OptionType::Put => (k * df - s).max(0.0),
    };

    let time_value = (market_price - intrinsic).max(1e-10);
    let atm_guess = ((2.0 * PI) / t).sqrt() * (time_value / s.max(1e-10));
    let m = (s / k).ln().abs();

    let scaled = atm_guess * (1.0 + 0.5 * m + 0.125 * m * m);
    scaled.clamp(1e-4, SIGMA_HI)
}

/// Computes Black-Scholes implied volatility from a market premium.
///
/// Parameters:
/// - `option_type`: call/put flag
/// - `s`, `k`, `r`, `t`: model state and maturity (years)
/// - `market_price`: observed premium
/// - `tol`: target absolute pricing error
/// - `max_iter`: Newton iteration cap before the bisection fallback
///
/// # Returns
/// Non-negative implied volatility. A premium at or below intrinsic value
/// returns `0.0`.
///
/// # Errors
/// Returns [`PricingError::InvalidParameter`] when inputs are non-finite,
/// violate positivity constraints, or the premium sits outside no-arbitrage
/// bounds.
///
/// # Examples
/// ```rust
/// use vegakit::core::OptionType;
/// use vegakit::pricing::european::black_scholes_price;
/// use vegakit::vol::implied_vol;
///
/// let sigma = 0.25;
/// let premium = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.03, sigma, 1.0);
/// let iv = implied_vol(OptionType::Call, 100.0, 100.0, 0.03, 1.0, premium, 1e-12, 64).unwrap();
/// assert!((iv - sigma).abs() < 1e-8);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn implied_vol(
    option_type: OptionType,
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    market_price: f64,
    tol: f64,
    max_iter: usize,
) -> Result<f64, PricingError> {
    if !s.is_finite() || s <= 0.0 {
        return Err(PricingError::InvalidParameter {
            field: "underlying_price",
            value: s,
            reason: "must be finite and > 0",
        });
    }
    if !k.is_finite() || k <= 0.0 {
        return Err(PricingError::InvalidParameter {
            field: "strike_price",
            value: k,
            reason: "must be finite and > 0",
        });
    }
    if !r.is_finite() {
        return Err(PricingError::InvalidParameter {
            field: "risk_free_rate",
            value: r,
            reason: "must be finite",
        });
    }
    if !t.is_finite() || t <= 0.0 {
        return Err(PricingError::InvalidParameter {
            field: "years_to_expiry",
            value: t,
            reason: "must be finite and > 0",
        });
    }
    if !market_price.is_finite() || market_price < 0.0 {
        return Err(PricingError::InvalidParameter {
            field: "market_price",
            value: market_price,
            reason: "must be finite and >= 0",
        });
    }

    let df = (-r * t).exp();
    let intrinsic = match option_type {
        OptionType::Call => (s - k * df).max(0.0),
        OptionType::Put => (k * df - s).max(0.0),
    };
    let upper = match option_type {
        OptionType::Call => s,
        OptionType::Put => k * df,
    };
    let price_tol = 32.0 * f64::EPSILON * (1.0 + upper.abs());
    if market_price < intrinsic - price_tol || market_price > upper + price_tol {
        return Err(PricingError::InvalidParameter {
            field: "market_price",
            value: market_price,
            reason: "outside no-arbitrage bounds",
        });
    }
    if market_price <= intrinsic + price_tol {
        return Ok(0.0);
    }

    let mut sigma = initial_guess(option_type, s, k, r, t, market_price);

    for _ in 0..max_iter {
        let price = black_scholes_price(option_type, s, k, r, sigma, t);
        let diff = price - market_price;
        if diff.abs() < tol {
            return Ok(sigma);
        }

        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
        let vega = s * normal_pdf(d1) * t.sqrt();

        if vega.abs() < 1e-10 {
            break;
        }

        sigma = (sigma - diff / vega).clamp(SIGMA_LO, SIGMA_HI);
    }

    // Robust fallback: bisection on the volatility interval. Price is
    // monotone in sigma, so a sign change brackets the root.
    let mut lo = SIGMA_LO;
    let mut hi = SIGMA_HI;
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        let diff = black_scholes_price(option_type, s, k, r, mid, t) - market_price;
        if diff.abs() < tol || (hi - lo) < 1e-12 {
            return Ok(mid);
        }
        if diff > 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    Ok(0.5 * (lo + hi))
}
