//! vegakit is a deterministic pricing library for exchange-traded vanilla options,
//! built to sit behind interactive calculators and signal dashboards.
//!
//! The crate maps an immutable [`instruments::OptionContract`] to a
//! [`core::PricingResult`] through the closed-form Black-Scholes-Merton model:
//! theoretical price, the five first-order Greeks, intrinsic and time value,
//! break-even level, and the bounded/unbounded profit-and-loss envelope of a
//! long position. A dividend yield, when relevant, is folded into the rate by
//! the caller.
//!
//! References used across modules:
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13 and 19.
//! - Abramowitz & Stegun, *Handbook of Mathematical Functions*, 7.1.26 for the
//!   normal CDF polynomial.
//!
//! Design points:
//! - Every valuation is a pure function of its inputs. There is no market
//!   snapshot object, no cached state, and no randomness; identical contracts
//!   produce bitwise-identical results, so the library is safe to call
//!   concurrently from any number of request handlers.
//! - Validation happens before any arithmetic and never clamps. Out-of-range
//!   inputs fail with [`core::PricingError::InvalidParameter`] naming the
//!   offending field.
//! - Expiry-day behavior is the documented discontinuous limit of the model,
//!   not an error path: price collapses to intrinsic value and delta to its
//!   step-function limit.
//!
//! # Quick Start
//! Price an index call a week from expiry:
//! ```rust
//! use vegakit::instruments::OptionContract;
//! use vegakit::pricing::european::price;
//!
//! let contract = OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185);
//! let result = price(&contract).unwrap();
//! assert!((result.intrinsic_value - 47.95).abs() < 1e-9);
//! assert!(result.theoretical_price > result.intrinsic_value);
//! ```
//!
//! Compute Greeks directly from the kernels:
//! ```rust
//! use vegakit::core::OptionType;
//! use vegakit::pricing::european::black_scholes_greeks;
//!
//! let g = black_scholes_greeks(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
//! assert!(g.delta > 0.0 && g.gamma > 0.0 && g.vega > 0.0);
//! ```
//!
//! Invert a market premium back to implied volatility:
//! ```rust
//! use vegakit::core::OptionType;
//! use vegakit::pricing::european::black_scholes_price;
//! use vegakit::vol::implied_vol;
//!
//! let premium = black_scholes_price(OptionType::Call, 100.0, 105.0, 0.02, 0.25, 1.0);
//! let iv = implied_vol(OptionType::Call, 100.0, 105.0, 0.02, 1.0, premium, 1e-10, 64).unwrap();
//! assert!((iv - 0.25).abs() < 1e-7);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod math;
pub mod pricing;
pub mod vol;
