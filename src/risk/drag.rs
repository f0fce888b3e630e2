//! Chart line dragging
//!
//! A chart overlay shows draggable entry, stop-loss and target lines and
//! recalculates on every move. Entry and stop drags replace a price and leave
//! validation to the calculator. A target drag has no price field to land in,
//! so it is turned back into a reward multiple.

use super::types::{RiskError, RiskParams, Side};

/// A draggable price line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLine {
    /// Entry price line
    Entry,
    /// Stop-loss line
    StopLoss,
    /// Target line
    Target,
}

/// Params after moving `line` to `price`
pub fn drag_line(
    params: &RiskParams,
    line: PriceLine,
    price: f64,
) -> Result<RiskParams, RiskError> {
    match line {
        PriceLine::Entry => Ok(RiskParams {
            entry_price: price,
            ..*params
        }),
        PriceLine::StopLoss => Ok(RiskParams {
            stop_loss_price: price,
            ..*params
        }),
        PriceLine::Target => {
            let sl_points = (params.entry_price - params.stop_loss_price).abs();
            if sl_points == 0.0 || !sl_points.is_finite() {
                return Err(RiskError::StopEqualsEntry);
            }
            let reward_points = match params.side {
                Side::Buy => price - params.entry_price,
                Side::Sell => params.entry_price - price,
            };
            if reward_points.is_nan() || reward_points <= 0.0 {
                return Err(RiskError::TargetOnWrongSide(price));
            }
            Ok(RiskParams {
                risk_reward_ratio: reward_points / sl_points,
                ..*params
            })
        }
    }
}
