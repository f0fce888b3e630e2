//! Calc command implementation

use super::request::{OutputFormat, RequestArgs};
use crate::config::RiskDefaults;
use crate::currency::{format_inr_paise, format_number};
use crate::risk::{
    calculate_risk_position, lot_count, round_down_to_lot, RiskError, RiskOutcome, RiskParams,
    RiskPosition,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Round quantity down to whole lots of this size
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub lot_size: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Lot breakdown of a sized quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LotBreakdown {
    lot_size: u64,
    lots: u64,
    quantity: u64,
}

impl CalcArgs {
    /// Run the calculation and print it; `Ok(false)` when the input was rejected
    pub fn execute(&self, defaults: &RiskDefaults) -> anyhow::Result<bool> {
        let params = self.request.resolve(defaults)?;
        let result = calculate_risk_position(&params);

        let lots = match (&result, self.lot_size) {
            (Ok(position), Some(lot_size)) => Some(LotBreakdown {
                lot_size,
                lots: lot_count(position.quantity, lot_size)?,
                quantity: round_down_to_lot(position.quantity, lot_size)?,
            }),
            _ => None,
        };

        match &result {
            Ok(position) => tracing::info!(
                quantity = position.quantity,
                target_price = position.target_price,
                "Position sized"
            ),
            Err(e) => tracing::info!(error = %e, "Position rejected"),
        }

        let success = result.is_ok();
        match self.format {
            OutputFormat::Json => println!("{}", render_json(result, lots)?),
            OutputFormat::Table => match &result {
                Ok(position) => print!("{}", render_table(&params, position, lots)),
                Err(e) => eprintln!("Error: {e}"),
            },
        }
        Ok(success)
    }
}

fn render_json(
    result: Result<RiskPosition, RiskError>,
    lots: Option<LotBreakdown>,
) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(RiskOutcome::from(result))?;
    if let (Some(lots), Some(object)) = (lots, value.as_object_mut()) {
        object.insert(
            "lots".to_string(),
            serde_json::json!({
                "lotSize": lots.lot_size,
                "lots": lots.lots,
                "quantity": lots.quantity,
            }),
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

fn render_table(
    params: &RiskParams,
    position: &RiskPosition,
    lots: Option<LotBreakdown>,
) -> String {
    let mut out = String::new();
    let mut row = |label: &str, value: String| {
        out.push_str(&format!("{label:<16}{value}\n"));
    };

    row("Side", params.side.to_string());
    row("Capital", position.formatted.capital.clone());
    row(
        "Risk",
        format!(
            "{} ({})",
            position.formatted.risk_percent, position.formatted.risk_amount
        ),
    );
    row(
        "Entry / SL",
        format!(
            "{} / {} ({} pts)",
            format_number(params.entry_price),
            format_number(params.stop_loss_price),
            format_number(position.sl_points)
        ),
    );
    row("Quantity", position.formatted.quantity.clone());
    if let Some(lots) = lots {
        row(
            "Lots",
            format!("{} x {} = {}", lots.lots, lots.lot_size, lots.quantity),
        );
    }
    row("Position value", format_inr_paise(position.position_value));
    row(
        "Target",
        format!(
            "{} ({} pts)",
            format_number(position.target_price),
            format_number(position.reward_points)
        ),
    );
    row("Reward", format_inr_paise(position.reward_amount));
    row("R:R", position.formatted.rr_ratio.clone());
    out
}
