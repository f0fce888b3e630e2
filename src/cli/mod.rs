//! CLI interface for risk-position
//!
//! Provides subcommands for:
//! - `calc`: Size a position and project its target
//! - `validate`: List every problem with a set of parameters
//! - `config`: Show effective configuration

mod calc;
mod request;
mod validate;

pub use calc::CalcArgs;
pub use request::{OutputFormat, RequestArgs};
pub use validate::ValidateArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "risk-position")]
#[command(about = "Risk-based position sizing with stop-loss and target projection")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Size a position from capital, risk and stop-loss
    Calc(CalcArgs),
    /// Report every invalid parameter
    Validate(ValidateArgs),
    /// Show effective configuration
    Config,
}
