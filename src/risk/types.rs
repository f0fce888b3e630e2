//! Risk calculation types

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Trade direction
///
/// Serializes as `BUY`/`SELL`; deserializes through [`FromStr`], so any
/// case and the `LONG`/`SHORT` aliases are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Side {
    /// Long: stop below entry, target above
    Buy,
    /// Short: stop above entry, target below
    Sell,
}

impl Side {
    /// Wire name of the side
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Side {
    type Error = RiskError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Side {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" | "LONG" => Ok(Side::Buy),
            "SELL" | "SHORT" => Ok(Side::Sell),
            _ => Err(RiskError::UnknownSide(s.to_string())),
        }
    }
}

/// Inputs for a single position calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskParams {
    /// Total trading capital
    pub capital: f64,
    /// Percent of capital put at risk, in [0, 100]; zero sizes to nothing
    pub risk_percent: f64,
    /// Intended entry price
    pub entry_price: f64,
    /// Stop-loss price
    pub stop_loss_price: f64,
    /// Reward as a multiple of risk (2.0 means 1 : 2)
    pub risk_reward_ratio: f64,
    /// Trade direction
    pub side: Side,
}

/// Display strings for a computed position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRisk {
    /// Capital in whole rupees, e.g. `₹2,00,000`
    pub capital: String,
    /// Risk percent, e.g. `1%`
    pub risk_percent: String,
    /// Risk amount with paise, e.g. `₹2,000.00`
    pub risk_amount: String,
    /// Quantity as a plain integer
    pub quantity: String,
    /// Ratio label, e.g. `1 : 2`
    pub rr_ratio: String,
}

/// A sized position with its projected target
///
/// Monetary and price fields keep full `f64` precision; only
/// [`FormattedRisk`] is rounded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskPosition {
    /// Capital put at risk if the stop is hit
    pub risk_amount: f64,
    /// Distance between entry and stop-loss
    pub sl_points: f64,
    /// Units tradable within the risk budget, floored
    pub quantity: u64,
    /// Notional value at entry
    pub position_value: f64,
    /// Projected target price
    pub target_price: f64,
    /// Distance between entry and target
    pub reward_points: f64,
    /// Profit if the target is hit
    pub reward_amount: f64,
    /// Requested reward multiple, echoed back
    pub risk_reward_ratio: f64,
    /// Display strings
    pub formatted: FormattedRisk,
}

/// Risk calculation errors
///
/// The display text is shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Capital is zero, negative or not a number
    #[error("Capital must be greater than zero")]
    NonPositiveCapital,
    /// Entry and stop-loss prices coincide
    #[error("Invalid stop loss: Stop Loss cannot equal Entry price")]
    StopEqualsEntry,
    /// Long trade with the stop above entry
    #[error("For BUY: Entry must be above Stop Loss")]
    BuyEntryBelowStop,
    /// Short trade with the stop below entry
    #[error("For SELL: Entry must be below Stop Loss")]
    SellEntryAboveStop,
    /// Entry price is zero, negative or not a number
    #[error("Entry price must be greater than zero, got {0}")]
    InvalidEntryPrice(f64),
    /// Stop-loss price is zero, negative or not a number
    #[error("Stop loss price must be greater than zero, got {0}")]
    InvalidStopLossPrice(f64),
    /// Risk percent outside the accepted range
    #[error("Risk percentage must be between 0 and 100, got {0}")]
    RiskPercentOutOfRange(f64),
    /// Reward multiple is zero, negative or not a number
    #[error("Risk:Reward ratio must be greater than zero, got {0}")]
    InvalidRiskReward(f64),
    /// Dragged target sits on the stop-loss side of entry
    #[error("Target must be on the profit side of Entry, got {0}")]
    TargetOnWrongSide(f64),
    /// Sized quantity is not a finite whole number of units below `u64::MAX`
    #[error("Quantity out of range: {0} units")]
    QuantityOutOfRange(f64),
    /// A derived price or amount overflowed to infinity
    #[error("Calculated {0} is out of range")]
    ResultOutOfRange(&'static str),
    /// Lot size of zero
    #[error("Lot size must be greater than zero")]
    InvalidLotSize,
    /// Side text that is neither buy nor sell
    #[error("Unknown side: {0:?} (expected BUY or SELL)")]
    UnknownSide(String),
}

/// Result of a calculation in its wire shape
///
/// Serializes as `{"success": true, ...position}` or `{"error": "..."}` so
/// callers can branch on the presence of `error`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RiskOutcome {
    /// Position computed
    Success {
        /// Always `true`
        success: bool,
        #[serde(flatten)]
        position: RiskPosition,
    },
    /// Input rejected
    Failure {
        /// User-facing message
        error: String,
    },
}

impl RiskOutcome {
    /// Error message, if the calculation was rejected
    pub fn error(&self) -> Option<&str> {
        match self {
            RiskOutcome::Success { .. } => None,
            RiskOutcome::Failure { error } => Some(error),
        }
    }

    /// The position, if the calculation succeeded
    pub fn position(&self) -> Option<&RiskPosition> {
        match self {
            RiskOutcome::Success { position, .. } => Some(position),
            RiskOutcome::Failure { .. } => None,
        }
    }
}

impl From<Result<RiskPosition, RiskError>> for RiskOutcome {
    fn from(result: Result<RiskPosition, RiskError>) -> Self {
        match result {
            Ok(position) => RiskOutcome::Success {
                success: true,
                position,
            },
            Err(e) => RiskOutcome::Failure {
                error: e.to_string(),
            },
        }
    }
}
