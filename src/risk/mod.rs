//! Risk management module
//!
//! Position sizing from a risk budget, parameter validation, and the input
//! helpers used by forms and chart overlays.

mod calculator;
mod drag;
mod input;
mod lots;
mod types;
mod validation;

pub use calculator::calculate_risk_position;
pub use drag::{drag_line, PriceLine};
pub use input::{parse_lenient, RiskRequest};
pub use lots::{lot_count, round_down_to_lot};
pub use types::{FormattedRisk, RiskError, RiskOutcome, RiskParams, RiskPosition, Side};
pub use validation::{validate_risk_params, ValidationReport};
