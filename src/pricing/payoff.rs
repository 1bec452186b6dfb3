//! Module `pricing::payoff`.
//!
//! Expiry payoff and profit-and-loss analytics for option strategies,
//! evaluated across a caller-supplied spot axis. This is what a payoff chart
//! plots: intrinsic payoff of every leg net of the premium paid.
//!
//! Strategies are expressed as typed [`StrategyLeg`] values; signed
//! quantities encode direction (+ buy, - sell).

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::engines::analytic::black_scholes::intrinsic;

/// One leg of an option strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrategyLeg {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level of the leg.
    pub strike: f64,
    /// Signed quantity: positive long, negative short.
    pub quantity: f64,
}

/// Payoff of a single option at expiry for a given settlement spot.
#[inline]
pub fn expiry_payoff(option_type: OptionType, strike: f64, spot: f64) -> f64 {
    intrinsic(option_type, spot, strike)
}

/// Strategy PnL at expiry across a spot axis.
///
/// - `spot_axis`: settlement spots to evaluate
/// - `legs`: strategy legs with signed quantities
/// - `net_premium`: net premium paid to open (subtracted from payoff;
///   negative for net-credit strategies)
///
/// Returns one PnL value per spot point.
///
/// # Examples
/// ```rust
/// use vegakit::core::OptionType;
/// use vegakit::pricing::payoff::{StrategyLeg, strategy_expiry_pnl};
///
/// let long_call = [StrategyLeg {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     quantity: 1.0,
/// }];
/// let pnl = strategy_expiry_pnl(&[90.0, 110.0], &long_call, 5.0);
/// assert_eq!(pnl, vec![-5.0, 5.0]);
/// ```
pub fn strategy_expiry_pnl(spot_axis: &[f64], legs: &[StrategyLeg], net_premium: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(spot_axis.len());
    for &s in spot_axis {
        let payoff: f64 = legs
            .iter()
            .map(|leg| leg.quantity * expiry_payoff(leg.option_type, leg.strike, s))
            .sum();
        out.push(payoff - net_premium);
    }
    out
}

/// PnL at expiry of a single long position, per unit.
///
/// Zero exactly at the contract's break-even level
/// (`strike + premium` for calls, `strike - premium` for puts).
pub fn long_expiry_pnl(option_type: OptionType, strike: f64, premium: f64, spot: f64) -> f64 {
    expiry_payoff(option_type, strike, spot) - premium
}
