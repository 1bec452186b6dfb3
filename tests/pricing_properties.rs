// Model-level properties checked over a parameter grid, plus the index-option
// scenarios the calculator front-end is specified against.

use approx::assert_relative_eq;
use vegakit::core::{MaxProfit, Moneyness, OptionType, PricingError};
use vegakit::engines::analytic::black_scholes::{bs_price, intrinsic};
use vegakit::instruments::OptionContract;
use vegakit::pricing::european::{black_scholes_price, price};

const SPOTS: [f64; 4] = [50.0, 95.0, 100.0, 180.0];
const STRIKES: [f64; 4] = [60.0, 100.0, 110.0, 150.0];
const VOLS: [f64; 3] = [0.1, 0.25, 0.6];
const DAYS: [u32; 4] = [1, 7, 90, 365];
const RATE: f64 = 0.05;

fn grid() -> impl Iterator<Item = (f64, f64, f64, u32)> {
    SPOTS.iter().flat_map(|&s| {
        STRIKES.iter().flat_map(move |&k| {
            VOLS.iter()
                .flat_map(move |&v| DAYS.iter().map(move |&d| (s, k, v, d)))
        })
    })
}

#[test]
fn call_price_dominates_intrinsic() {
    for (s, k, v, d) in grid() {
        let result = price(&OptionContract::call(s, k, d, RATE, v)).unwrap();
        assert!(result.intrinsic_value >= 0.0);
        assert!(
            result.theoretical_price >= result.intrinsic_value - 1e-12,
            "call S={s} K={k} v={v} d={d}: price {} < intrinsic {}",
            result.theoretical_price,
            result.intrinsic_value
        );
    }
}

#[test]
fn put_price_dominates_discounted_intrinsic() {
    // European puts can trade below raw intrinsic under positive rates; the
    // no-arbitrage floor is the discounted one, max(0, K*e^(-rt) - S).
    for (s, k, v, d) in grid() {
        let contract = OptionContract::put(s, k, d, RATE, v);
        let t = contract.years_to_expiry();
        let floor = (k * (-RATE * t).exp() - s).max(0.0);
        let result = price(&contract).unwrap();
        assert!(result.intrinsic_value >= 0.0);
        assert!(
            result.theoretical_price >= floor - 1e-12,
            "put S={s} K={k} v={v} d={d}: price {} < floor {floor}",
            result.theoretical_price
        );
    }
}

#[test]
fn delta_bounds_and_gamma_convexity() {
    for (s, k, v, d) in grid() {
        let call = price(&OptionContract::call(s, k, d, RATE, v)).unwrap();
        assert!((0.0..=1.0).contains(&call.greeks.delta));
        assert!(call.greeks.gamma >= 0.0);

        let put = price(&OptionContract::put(s, k, d, RATE, v)).unwrap();
        assert!((-1.0..=0.0).contains(&put.greeks.delta));
        assert!(put.greeks.gamma >= 0.0);
    }
}

#[test]
fn put_call_parity_across_the_grid() {
    for (s, k, v, d) in grid() {
        let t = f64::from(d) / 365.0;
        let c = black_scholes_price(OptionType::Call, s, k, RATE, v, t);
        let p = black_scholes_price(OptionType::Put, s, k, RATE, v, t);
        let rhs = s - k * (-RATE * t).exp();
        assert_relative_eq!(c - p, rhs, epsilon = 1e-4);
    }
}

#[test]
fn price_converges_to_intrinsic_near_expiry() {
    for &(s, k) in &[(22547.95, 22500.0), (100.0, 100.0), (80.0, 100.0)] {
        let far = price(&OptionContract::call(s, k, 30, RATE, 0.2)).unwrap();
        let near = price(&OptionContract::call(s, k, 1, RATE, 0.2)).unwrap();
        let at = price(&OptionContract::call(s, k, 0, RATE, 0.2)).unwrap();

        assert!(near.time_value <= far.time_value);
        assert_relative_eq!(at.theoretical_price, at.intrinsic_value, epsilon = 1e-12);
        assert_eq!(at.time_value, 0.0);
    }
}

#[test]
fn week_out_index_call_scenario() {
    let contract = OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185);
    let result = price(&contract).unwrap();

    assert_relative_eq!(result.intrinsic_value, 47.95, epsilon = 1e-9);
    assert!(result.theoretical_price > 47.95);
    assert!(result.time_value > 0.0);
    assert_eq!(result.moneyness, Moneyness::InTheMoney);
    // Slightly ITM a week out: delta just above a half.
    assert!(result.greeks.delta > 0.5 && result.greeks.delta < 0.65);
    assert_relative_eq!(
        result.break_even_price,
        22500.0 + result.theoretical_price,
        epsilon = 1e-9
    );
    assert_eq!(result.max_profit, MaxProfit::Unbounded);
    assert_relative_eq!(result.max_loss, result.theoretical_price, epsilon = 1e-12);
}

#[test]
fn expiry_day_otm_call_scenario() {
    let contract = OptionContract::call(22000.0, 22500.0, 0, 0.065, 0.185);
    let result = price(&contract).unwrap();

    assert_eq!(result.theoretical_price, 0.0);
    assert_eq!(result.greeks.delta, 0.0);
    assert_eq!(result.greeks.gamma, 0.0);
    assert_eq!(result.greeks.vega, 0.0);
    assert_eq!(result.greeks.theta, 0.0);
    assert_eq!(result.greeks.rho, 0.0);
    assert_eq!(result.intrinsic_value, 0.0);
    assert!(result.d1.is_none() && result.d2.is_none());
}

#[test]
fn expiry_day_itm_delta_takes_the_step_limit() {
    let result = price(&OptionContract::call(23000.0, 22500.0, 0, 0.065, 0.185)).unwrap();
    assert_eq!(result.greeks.delta, 1.0);
    assert_relative_eq!(result.theoretical_price, 500.0, epsilon = 1e-9);

    let result = price(&OptionContract::put(22000.0, 22500.0, 0, 0.065, 0.185)).unwrap();
    assert_eq!(result.greeks.delta, -1.0);
}

#[test]
fn negative_volatility_fails_validation() {
    let err = price(&OptionContract::call(22547.95, 22500.0, 7, 0.065, -0.01)).unwrap_err();
    match err {
        PricingError::InvalidParameter {
            field,
            value,
            reason,
        } => {
            assert_eq!(field, "implied_volatility");
            assert_eq!(value, -0.01);
            assert!(!reason.is_empty());
        }
    }
}

#[test]
fn identical_inputs_price_identically() {
    // Determinism: no randomness anywhere in the valuation path.
    let contract = OptionContract::call(22547.95, 22500.0, 7, 0.065, 0.185);
    let a = price(&contract).unwrap();
    let b = price(&contract).unwrap();
    assert_eq!(a, b);
}

#[test]
fn kernel_and_engine_agree() {
    for (s, k, v, d) in grid() {
        let contract = OptionContract::put(s, k, d, RATE, v);
        let result = price(&contract).unwrap();
        let kernel = bs_price(OptionType::Put, s, k, RATE, v, contract.years_to_expiry());
        assert_eq!(result.theoretical_price, kernel);
        assert_eq!(result.intrinsic_value, intrinsic(OptionType::Put, s, k));
    }
}
