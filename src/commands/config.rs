//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config set`: Persist one value to `.roster/config.yaml`

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, RosterError};

const CONFIG_KEYS: [&str; 6] = [
    "endpoint",
    "page_size",
    "initial_delay_ms",
    "max_in_flight",
    "request_timeout_secs",
    "store_dir",
];

/// Show the effective configuration, environment overrides applied
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    if output_json {
        let output = json!({
            "endpoint": config.endpoint(),
            "page_size": config.page_size()?,
            "initial_delay_ms": config.initial_delay().as_millis() as u64,
            "max_in_flight": config.max_in_flight(),
            "request_timeout_secs": config.request_timeout().as_secs(),
            "store_dir": config.store_dir(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold());
    println!();
    match config.endpoint() {
        Some(endpoint) => println!("  endpoint: {}", endpoint.cyan()),
        None => println!("  endpoint: {}", "not set".dimmed()),
    }
    println!("  page_size: {}", config.page_size()?);
    println!(
        "  initial_delay_ms: {}",
        config.initial_delay().as_millis()
    );
    println!("  max_in_flight: {}", config.max_in_flight());
    println!(
        "  request_timeout_secs: {}",
        config.request_timeout().as_secs()
    );
    match config.store_dir() {
        Some(dir) => println!("  store_dir: {}", dir.display()),
        None => println!("  store_dir: {}", "not set".dimmed()),
    }
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let path = Config::config_path();
    let mut config = Config::load_from(&path)?;
    apply_value(&mut config, key, value)?;
    config.save_to(&path)?;

    println!("Set {} = {}", key.cyan(), value);
    Ok(())
}

fn apply_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "endpoint" => {
            url::Url::parse(value)
                .map_err(|e| RosterError::InvalidEndpoint(value.to_string(), e.to_string()))?;
            config.endpoint = Some(value.to_string());
        }
        "page_size" => config.page_size = Some(parse_positive(key, value)? as u32),
        "initial_delay_ms" => config.initial_delay_ms = Some(parse_number(key, value)?),
        "max_in_flight" => config.max_in_flight = Some(parse_positive(key, value)? as usize),
        "request_timeout_secs" => config.request_timeout_secs = Some(parse_positive(key, value)?),
        "store_dir" => config.store_dir = Some(PathBuf::from(value)),
        _ => {
            return Err(RosterError::Config(format!(
                "unknown config key '{key}'. Valid keys: {}",
                CONFIG_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| RosterError::Config(format!("{key} must be a number, got '{value}'")))
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match parse_number(key, value)? {
        0 => Err(RosterError::Config(format!("{key} must be at least 1"))),
        n if n > u32::MAX as u64 => Err(RosterError::Config(format!("{key} is too large"))),
        n => Ok(n),
    }
}
