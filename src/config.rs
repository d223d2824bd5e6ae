//! Runtime configuration from the environment (and `.env`).
//!
//! Command line flags override these values, see [`crate::cli::Args::apply`].

use crate::error::SubnetError;
use crate::output::OutputFormat;
use crate::processing::{BitSplit, CalcOptions, MaskPolicy};

pub const ENV_MASK_POLICY: &str = "SUBNET_CALC_MASK_POLICY";
pub const ENV_BIT_SPLIT: &str = "SUBNET_CALC_BIT_SPLIT";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_NO_COLOR: &str = "SUBNET_CALC_NO_COLOR";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

/// Default log4rs config file, next to the binary's working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub options: CalcOptions,
    pub format: OutputFormat,
    pub color: bool,
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            options: CalcOptions::default(),
            format: OutputFormat::default(),
            color: true,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Config, SubnetError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, SubnetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(v) = lookup(ENV_MASK_POLICY) {
            config.options.mask_policy = v.parse::<MaskPolicy>()?;
        }
        if let Some(v) = lookup(ENV_BIT_SPLIT) {
            config.options.bit_split = v.parse::<BitSplit>()?;
        }
        if let Some(v) = lookup(ENV_FORMAT) {
            config.format = v.parse::<OutputFormat>()?;
        }
        if let Some(v) = lookup(ENV_NO_COLOR) {
            config.color = !parse_flag(ENV_NO_COLOR, &v)?;
        }
        if let Some(v) = lookup(ENV_LOG_CONFIG) {
            config.log_config = v;
        }
        log::debug!("config from environment: {config:?}");
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, SubnetError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(SubnetError::Config(format!("{key}={other:?} is not a boolean"))),
    }
}
