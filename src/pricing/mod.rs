//! High-level valuation API and payoff analytics.

pub mod european;
pub mod payoff;

pub use crate::core::types::OptionType;
