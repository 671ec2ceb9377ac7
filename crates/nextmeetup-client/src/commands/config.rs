//! Configuration commands.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the effective configuration to stdout.
pub fn dump(config: &ClientConfig) -> ClientResult<()> {
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", to_toml(config)?);
    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    config
        .meetup
        .validate()
        .map_err(|e| ClientError::Config(format!("invalid [meetup] settings: {}", e)))?;

    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> ClientResult<()> {
    let config_path = ClientConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}

fn to_toml(config: &ClientConfig) -> ClientResult<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))
}
