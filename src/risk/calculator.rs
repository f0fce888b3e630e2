//! Risk-based position sizing
//!
//! Sizes a position so that hitting the stop-loss loses at most
//! `risk_percent` of capital, then projects the target from the requested
//! risk:reward multiple.

use super::types::{FormattedRisk, RiskError, RiskParams, RiskPosition, Side};
use crate::currency::{format_inr_paise, format_inr_whole, format_number};

/// Calculate position size, target and reward for a trade
///
/// Checks run in a fixed order and the first failure is returned:
/// capital, equal prices, side ordering, then the remaining sanity checks.
pub fn calculate_risk_position(params: &RiskParams) -> Result<RiskPosition, RiskError> {
    if let Err(e) = check_params(params) {
        return reject(params, e);
    }

    let risk_amount = params.capital * (params.risk_percent / 100.0);
    let sl_points = (params.entry_price - params.stop_loss_price).abs();
    // Floor so the stop never costs more than the budget
    let units = (risk_amount / sl_points).floor();
    if !units.is_finite() || units >= QUANTITY_LIMIT {
        return reject(params, RiskError::QuantityOutOfRange(units));
    }
    let quantity = units as u64;
    let position_value = units * params.entry_price;

    let reward_points = sl_points * params.risk_reward_ratio;
    let target_price = match params.side {
        Side::Buy => params.entry_price + reward_points,
        Side::Sell => params.entry_price - reward_points,
    };
    let reward_amount = reward_points * units;

    for (field, value) in [
        ("position value", position_value),
        ("reward points", reward_points),
        ("target price", target_price),
        ("reward amount", reward_amount),
    ] {
        if !value.is_finite() {
            return reject(params, RiskError::ResultOutOfRange(field));
        }
    }

    let formatted = FormattedRisk {
        capital: format_inr_whole(params.capital),
        risk_percent: format!("{}%", format_number(params.risk_percent)),
        risk_amount: format_inr_paise(risk_amount),
        quantity: quantity.to_string(),
        rr_ratio: format!("1 : {}", format_number(params.risk_reward_ratio)),
    };

    tracing::trace!(
        side = %params.side,
        quantity,
        target_price,
        risk_amount,
        "Risk position calculated"
    );

    Ok(RiskPosition {
        risk_amount,
        sl_points,
        quantity,
        position_value,
        target_price,
        reward_points,
        reward_amount,
        risk_reward_ratio: params.risk_reward_ratio,
        formatted,
    })
}

/// 2^64; every whole f64 below it converts to `u64` exactly
const QUANTITY_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn reject(params: &RiskParams, e: RiskError) -> Result<RiskPosition, RiskError> {
    tracing::trace!(error = %e, side = %params.side, "Risk position rejected");
    Err(e)
}

fn check_params(params: &RiskParams) -> Result<(), RiskError> {
    if !is_positive_finite(params.capital) {
        return Err(RiskError::NonPositiveCapital);
    }
    if params.entry_price == params.stop_loss_price {
        return Err(RiskError::StopEqualsEntry);
    }
    match params.side {
        Side::Buy if params.entry_price < params.stop_loss_price => {
            return Err(RiskError::BuyEntryBelowStop);
        }
        Side::Sell if params.entry_price > params.stop_loss_price => {
            return Err(RiskError::SellEntryAboveStop);
        }
        _ => {}
    }
    if !is_positive_finite(params.entry_price) {
        return Err(RiskError::InvalidEntryPrice(params.entry_price));
    }
    if !is_positive_finite(params.stop_loss_price) {
        return Err(RiskError::InvalidStopLossPrice(params.stop_loss_price));
    }
    // Zero risk is allowed here and sizes to nothing
    if !(0.0..=100.0).contains(&params.risk_percent) {
        return Err(RiskError::RiskPercentOutOfRange(params.risk_percent));
    }
    if !is_positive_finite(params.risk_reward_ratio) {
        return Err(RiskError::InvalidRiskReward(params.risk_reward_ratio));
    }
    Ok(())
}

/// True for finite values above zero; NaN fails
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
