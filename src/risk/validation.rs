//! Form validation for risk parameters
//!
//! Unlike [`calculate_risk_position`](super::calculate_risk_position), which
//! stops at the first problem, this sweep reports every problem at once so a
//! form can highlight all offending fields while the user types.

use super::calculator::is_positive_finite;
use super::types::{RiskError, RiskParams, Side};
use serde::{Serialize, Serializer};

/// Every problem found in a set of risk parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True when no problem was found
    pub is_valid: bool,
    /// Problems in field order
    #[serde(serialize_with = "serialize_messages")]
    pub errors: Vec<RiskError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<RiskError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// User-facing messages, one per problem
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check every parameter independently and collect all violations
pub fn validate_risk_params(params: &RiskParams) -> ValidationReport {
    let mut errors = Vec::new();

    if !is_positive_finite(params.capital) {
        errors.push(RiskError::NonPositiveCapital);
    }
    let risk_percent = params.risk_percent;
    if !risk_percent.is_finite() || risk_percent <= 0.0 || risk_percent > 100.0 {
        errors.push(RiskError::RiskPercentOutOfRange(risk_percent));
    }
    if !is_positive_finite(params.entry_price) {
        errors.push(RiskError::InvalidEntryPrice(params.entry_price));
    }
    if !is_positive_finite(params.stop_loss_price) {
        errors.push(RiskError::InvalidStopLossPrice(params.stop_loss_price));
    }
    if !is_positive_finite(params.risk_reward_ratio) {
        errors.push(RiskError::InvalidRiskReward(params.risk_reward_ratio));
    }

    if params.entry_price == params.stop_loss_price {
        errors.push(RiskError::StopEqualsEntry);
    } else {
        match params.side {
            Side::Buy if params.entry_price < params.stop_loss_price => {
                errors.push(RiskError::BuyEntryBelowStop);
            }
            Side::Sell if params.entry_price > params.stop_loss_price => {
                errors.push(RiskError::SellEntryAboveStop);
            }
            _ => {}
        }
    }

    ValidationReport::from_errors(errors)
}

fn serialize_messages<S>(errors: &[RiskError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}
