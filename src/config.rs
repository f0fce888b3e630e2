//! Configuration types for risk-position

use crate::risk::Side;
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: RiskDefaults,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Saved trade preferences applied to requests that omit them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskDefaults {
    /// Percent of capital risked per trade
    #[serde(default = "default_risk_percent")]
    pub risk_percent: f64,

    /// Reward multiple used to project targets
    #[serde(default = "default_risk_reward_ratio")]
    pub risk_reward_ratio: f64,

    /// Trade direction
    #[serde(default = "default_side")]
    pub side: Side,
}

fn default_risk_percent() -> f64 {
    1.0
}
fn default_risk_reward_ratio() -> f64 {
    2.0
}
fn default_side() -> Side {
    Side::Buy
}

impl Default for RiskDefaults {
    fn default() -> Self {
        Self {
            risk_percent: 1.0,
            risk_reward_ratio: 2.0,
            side: Side::Buy,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject defaults the calculator would refuse
    pub fn validate(&self) -> anyhow::Result<()> {
        let risk_percent = self.defaults.risk_percent;
        if !risk_percent.is_finite() || risk_percent <= 0.0 || risk_percent > 100.0 {
            anyhow::bail!("defaults.risk_percent must be in (0, 100], got {risk_percent}");
        }
        let ratio = self.defaults.risk_reward_ratio;
        if !ratio.is_finite() || ratio <= 0.0 {
            anyhow::bail!("defaults.risk_reward_ratio must be > 0, got {ratio}");
        }
        Ok(())
    }
}
