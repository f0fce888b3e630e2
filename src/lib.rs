//! risk-position: risk-based position sizing for trade entry
//!
//! This library provides:
//! - Position sizing from capital, risk percent and stop-loss distance
//! - Target projection from a risk:reward multiple
//! - Short-circuit and aggregate parameter validation
//! - Rupee formatting with Indian digit grouping
//! - Lot-size rounding and chart line dragging helpers
//! - TOML configuration for saved trade preferences

pub mod cli;
pub mod config;
pub mod currency;
pub mod risk;
pub mod telemetry;

pub use risk::{
    calculate_risk_position, validate_risk_params, RiskError, RiskParams, RiskPosition, Side,
};
