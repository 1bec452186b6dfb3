//! Implied-volatility inversion.

pub mod implied;

pub use implied::implied_vol;
