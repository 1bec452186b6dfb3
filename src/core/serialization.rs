//! JSON serialization helpers for contract and result payloads.
//!
//! The engine's callers are UI and API layers that exchange these types over
//! the wire. These helpers define the stable serde surface for that exchange.
//!
//! # Examples
//! ```rust
//! use vegakit::core::serialization::{from_json, to_json_pretty};
//! use vegakit::instruments::OptionContract;
//!
//! let contract = OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185);
//! let json = to_json_pretty(&contract).expect("json serialization");
//! let decoded: OptionContract = from_json(&json).expect("json deserialization");
//! assert_eq!(decoded, contract);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes a value to compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Serializes a value to pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Deserializes a value from a JSON string.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::OptionContract;
    use crate::pricing::european::price;

    #[test]
    fn contract_round_trips_through_json() {
        let contract = OptionContract::put(19850.0, 20000.0, 14, 0.065, 0.21);
        let json = to_json(&contract).unwrap();
        let decoded: OptionContract = from_json(&json).unwrap();
        assert_eq!(decoded, contract);
    }

    #[test]
    fn pricing_result_round_trips_through_json() {
        let contract = OptionContract::call(100.0, 100.0, 30, 0.05, 0.2);
        let result = price(&contract).unwrap();
        let json = to_json_pretty(&result).unwrap();
        let decoded: crate::core::PricingResult = from_json(&json).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn unbounded_max_profit_survives_the_round_trip() {
        let result = price(&OptionContract::call(100.0, 110.0, 30, 0.05, 0.2)).unwrap();
        let json = to_json(&result).unwrap();
        assert!(json.contains("Unbounded"));
        let decoded: crate::core::PricingResult = from_json(&json).unwrap();
        assert_eq!(decoded.max_profit, crate::core::MaxProfit::Unbounded);
    }
}
