use clap::Parser;
use risk_position::cli::{Cli, Commands};
use risk_position::config::Config;
use std::path::Path;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: No config at {}, using defaults", cli.config);
        Config::default()
    };

    // Initialize telemetry
    risk_position::telemetry::init_telemetry(&config.telemetry)?;
    tracing::debug!(path = %cli.config, "Configuration loaded");

    let ok = match cli.command {
        Commands::Calc(args) => args.execute(&config.defaults)?,
        Commands::Validate(args) => args.execute(&config.defaults)?,
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
