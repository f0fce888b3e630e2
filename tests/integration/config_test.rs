//! Configuration loading from disk

use risk_position::config::Config;
use risk_position::risk::RiskRequest;
use risk_position::telemetry::LogFormat;
use risk_position::{calculate_risk_position, Side};
use std::io::Write;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.defaults.side, Side::Buy);
    assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
}

#[test]
fn test_config_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [defaults]
        risk_percent = 2.0
        risk_reward_ratio = 3.0
        side = "SELL"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.defaults.side, Side::Sell);

    let params = RiskRequest::new(100000.0, 1000.0, 1050.0).resolve(&config.defaults);
    let position = calculate_risk_position(&params).unwrap();
    assert_eq!(position.quantity, 40);
    assert_eq!(position.target_price, 850.0);
}

#[test]
fn test_config_load_rejects_bad_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nrisk_percent = 250.0").unwrap();
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn test_config_load_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults\nrisk_percent = ").unwrap();
    assert!(Config::load(file.path()).is_err());
}
