//! Validate command implementation

use super::request::{OutputFormat, RequestArgs};
use crate::config::RiskDefaults;
use crate::risk::{validate_risk_params, ValidationReport};
use clap::Args;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ValidateArgs {
    /// Print every problem found; `Ok(false)` when any was found
    pub fn execute(&self, defaults: &RiskDefaults) -> anyhow::Result<bool> {
        let params = self.request.resolve(defaults)?;
        let report = validate_risk_params(&params);
        tracing::info!(
            is_valid = report.is_valid,
            errors = report.errors.len(),
            "Parameters validated"
        );

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Table => print!("{}", render_report(&report)),
        }
        Ok(report.is_valid)
    }
}

fn render_report(report: &ValidationReport) -> String {
    if report.is_valid {
        return "OK: all parameters valid\n".to_string();
    }
    let mut out = format!("INVALID: {} problem(s)\n", report.errors.len());
    for message in report.messages() {
        out.push_str(&format!("  - {message}\n"));
    }
    out
}
