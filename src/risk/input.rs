//! Partial requests resolved against configured defaults
//!
//! Form and file input carries capital and prices; risk percent, reward
//! multiple and side fall back to the user's saved defaults. Numeric fields
//! accept numbers or numeric text. Anything unparseable becomes NaN and is
//! rejected later by validation instead of failing deserialization.

use super::types::{RiskParams, Side};
use crate::config::RiskDefaults;
use serde::{Deserialize, Deserializer};

/// A calculation request with optional preference fields
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    /// Total trading capital
    #[serde(deserialize_with = "lenient_f64", default = "missing")]
    pub capital: f64,
    /// Entry price
    #[serde(deserialize_with = "lenient_f64", default = "missing")]
    pub entry_price: f64,
    /// Stop-loss price
    #[serde(deserialize_with = "lenient_f64", default = "missing")]
    pub stop_loss_price: f64,
    /// Risk percent; defaults apply when absent
    #[serde(deserialize_with = "lenient_opt_f64", default)]
    pub risk_percent: Option<f64>,
    /// Reward multiple; defaults apply when absent
    #[serde(deserialize_with = "lenient_opt_f64", default)]
    pub risk_reward_ratio: Option<f64>,
    /// Trade direction; defaults apply when absent
    #[serde(default)]
    pub side: Option<Side>,
}

impl RiskRequest {
    /// Request with only the required fields set
    pub fn new(capital: f64, entry_price: f64, stop_loss_price: f64) -> Self {
        Self {
            capital,
            entry_price,
            stop_loss_price,
            risk_percent: None,
            risk_reward_ratio: None,
            side: None,
        }
    }

    /// Fill missing fields from `defaults`
    pub fn resolve(&self, defaults: &RiskDefaults) -> RiskParams {
        RiskParams {
            capital: self.capital,
            risk_percent: self.risk_percent.unwrap_or(defaults.risk_percent),
            entry_price: self.entry_price,
            stop_loss_price: self.stop_loss_price,
            risk_reward_ratio: self.risk_reward_ratio.unwrap_or(defaults.risk_reward_ratio),
            side: self.side.unwrap_or(defaults.side),
        }
    }

    /// Parse a JSON request
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Parse user-entered numeric text, NaN when it is not a number
///
/// Surrounding whitespace, a leading rupee sign and `,`/`_` digit separators
/// are ignored, so `"₹2,00,000"` parses as `200000`.
pub fn parse_lenient(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .trim_start_matches(crate::currency::RUPEE)
        .chars()
        .filter(|c| !matches!(c, ',' | '_'))
        .collect();
    if cleaned.is_empty() {
        return f64::NAN;
    }
    cleaned.parse().unwrap_or(f64::NAN)
}

fn missing() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl LenientNumber {
    fn into_f64(self) -> f64 {
        match self {
            LenientNumber::Number(n) => n,
            LenientNumber::Text(s) => parse_lenient(&s),
            LenientNumber::Other(_) => f64::NAN,
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LenientNumber::deserialize(deserializer)?.into_f64())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LenientNumber>::deserialize(deserializer)?.map(LenientNumber::into_f64))
}
