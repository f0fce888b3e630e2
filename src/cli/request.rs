//! Shared request arguments

use crate::config::RiskDefaults;
use crate::risk::{parse_lenient, RiskParams, RiskRequest, Side};
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Trade parameters given as flags or as a JSON request
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// JSON request file (`-` for stdin); flags override its fields
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Total trading capital
    #[arg(long, value_parser = lenient_number, required_unless_present = "input")]
    pub capital: Option<f64>,

    /// Entry price
    #[arg(long, value_parser = lenient_number, required_unless_present = "input")]
    pub entry: Option<f64>,

    /// Stop-loss price
    #[arg(long, value_parser = lenient_number, required_unless_present = "input")]
    pub stop_loss: Option<f64>,

    /// Percent of capital to risk [default: from config]
    #[arg(long, value_parser = lenient_number)]
    pub risk_percent: Option<f64>,

    /// Reward multiple, e.g. 2 for 1 : 2 [default: from config]
    #[arg(long = "rr", value_parser = lenient_number)]
    pub risk_reward_ratio: Option<f64>,

    /// BUY or SELL [default: from config]
    #[arg(long)]
    pub side: Option<Side>,
}

impl RequestArgs {
    /// Build the request, reading `--input` first when given
    pub fn request(&self) -> anyhow::Result<RiskRequest> {
        let mut request = match &self.input {
            Some(path) => {
                let text = read_input(path)?;
                RiskRequest::from_json(&text)
                    .with_context(|| format!("Invalid request JSON in {}", path.display()))?
            }
            None => RiskRequest::new(f64::NAN, f64::NAN, f64::NAN),
        };

        if let Some(capital) = self.capital {
            request.capital = capital;
        }
        if let Some(entry) = self.entry {
            request.entry_price = entry;
        }
        if let Some(stop_loss) = self.stop_loss {
            request.stop_loss_price = stop_loss;
        }
        request.risk_percent = self.risk_percent.or(request.risk_percent);
        request.risk_reward_ratio = self.risk_reward_ratio.or(request.risk_reward_ratio);
        request.side = self.side.or(request.side);

        Ok(request)
    }

    /// Build the request and fill its gaps from `defaults`
    pub fn resolve(&self, defaults: &RiskDefaults) -> anyhow::Result<RiskParams> {
        let params = self.request()?.resolve(defaults);
        tracing::debug!(?params, "Resolved risk parameters");
        Ok(params)
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read request from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

// Never fails: bad text becomes NaN and is reported by validation
fn lenient_number(text: &str) -> Result<f64, String> {
    Ok(parse_lenient(text))
}
