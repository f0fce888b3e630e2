//! Property-based tests for position sizing invariants.

use proptest::prelude::*;
use risk_position::{calculate_risk_position, validate_risk_params, RiskError, RiskParams, Side};

/// Capital between one thousand and one crore
fn capital_strategy() -> impl Strategy<Value = f64> {
    1_000.0f64..10_000_000.0f64
}

fn risk_percent_strategy() -> impl Strategy<Value = f64> {
    0.1f64..5.0f64
}

fn entry_strategy() -> impl Strategy<Value = f64> {
    1.0f64..100_000.0f64
}

/// Stop distance as a fraction of entry
fn stop_fraction_strategy() -> impl Strategy<Value = f64> {
    0.001f64..0.5f64
}

fn ratio_strategy() -> impl Strategy<Value = f64> {
    0.5f64..10.0f64
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Buy), Just(Side::Sell)]
}

fn params(
    capital: f64,
    risk_percent: f64,
    entry: f64,
    fraction: f64,
    ratio: f64,
    side: Side,
) -> RiskParams {
    let stop = match side {
        Side::Buy => entry * (1.0 - fraction),
        Side::Sell => entry * (1.0 + fraction),
    };
    RiskParams {
        capital,
        risk_percent,
        entry_price: entry,
        stop_loss_price: stop,
        risk_reward_ratio: ratio,
        side,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Target lies on the profit side of entry
    #[test]
    fn target_on_profit_side(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        fraction in stop_fraction_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let p = params(capital, risk_percent, entry, fraction, ratio, side);
        let position = calculate_risk_position(&p).unwrap();
        match side {
            Side::Buy => prop_assert!(position.target_price > entry),
            Side::Sell => prop_assert!(position.target_price < entry),
        }
    }

    /// Quantity is the floored risk budget over stop distance
    #[test]
    fn quantity_is_floor(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        fraction in stop_fraction_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let p = params(capital, risk_percent, entry, fraction, ratio, side);
        let position = calculate_risk_position(&p).unwrap();
        let expected = (position.risk_amount / position.sl_points).floor();
        prop_assert_eq!(position.quantity as f64, expected);
        prop_assert_eq!(position.position_value, position.quantity as f64 * entry);
        prop_assert_eq!(position.formatted.quantity, position.quantity.to_string());
    }

    /// Realised reward never beats the requested multiple of risk
    #[test]
    fn reward_bounded_by_ratio(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        fraction in stop_fraction_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let p = params(capital, risk_percent, entry, fraction, ratio, side);
        let position = calculate_risk_position(&p).unwrap();
        let bound = ratio * position.risk_amount;
        prop_assert!(position.reward_amount <= bound * (1.0 + 1e-9));
        let risked = position.quantity as f64 * position.sl_points;
        prop_assert!(risked <= position.risk_amount * (1.0 + 1e-9));
    }

    /// Same input, bit-identical output
    #[test]
    fn calculation_is_deterministic(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        fraction in stop_fraction_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let p = params(capital, risk_percent, entry, fraction, ratio, side);
        let first = calculate_risk_position(&p).unwrap();
        let second = calculate_risk_position(&p).unwrap();
        prop_assert_eq!(first.risk_amount.to_bits(), second.risk_amount.to_bits());
        prop_assert_eq!(first.target_price.to_bits(), second.target_price.to_bits());
        prop_assert_eq!(first.reward_amount.to_bits(), second.reward_amount.to_bits());
        prop_assert_eq!(first, second);
    }

    /// Equal entry and stop is always the stop-loss error
    #[test]
    fn equal_prices_always_rejected(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let p = RiskParams {
            capital,
            risk_percent,
            entry_price: entry,
            stop_loss_price: entry,
            risk_reward_ratio: ratio,
            side,
        };
        let err = calculate_risk_position(&p).unwrap_err();
        prop_assert!(err.to_string().contains("Invalid stop loss"));
    }

    /// Stop on the wrong side is rejected by both validation paths
    #[test]
    fn wrong_side_stop_rejected(
        capital in capital_strategy(),
        risk_percent in risk_percent_strategy(),
        entry in entry_strategy(),
        fraction in stop_fraction_strategy(),
        ratio in ratio_strategy(),
        side in side_strategy(),
    ) {
        let flipped = match side {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        };
        let p = RiskParams {
            side: flipped,
            ..params(capital, risk_percent, entry, fraction, ratio, side)
        };
        let expected = match flipped {
            Side::Buy => RiskError::BuyEntryBelowStop,
            Side::Sell => RiskError::SellEntryAboveStop,
        };
        prop_assert_eq!(calculate_risk_position(&p).unwrap_err(), expected.clone());

        let report = validate_risk_params(&p);
        prop_assert!(!report.is_valid);
        prop_assert!(report.errors.contains(&expected));
    }
}
