//! Instrument definitions.

pub mod vanilla;

pub use vanilla::OptionContract;
