//! Rate overrides loaded from a TOML file.
//!
//! Every table and key is optional; anything missing keeps the 2025 default.
//!
//! ```toml
//! [health_insurance]
//! rate = "0.0998"
//!
//! [employment_insurance]
//! rounding = "nearest"
//!
//! [residence_tax]
//! per_capita_tax = "6000"
//! ```

use std::fs;
use std::path::Path;

use payroll_core::{PayrollConfig, PayrollError};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a rate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] PayrollError),
}

/// Parses and validates a configuration from TOML text.
pub fn parse_config(text: &str) -> Result<PayrollConfig, ConfigError> {
    let config: PayrollConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Reads, parses and validates the configuration at `path`.
pub fn load_config(path: &Path) -> Result<PayrollConfig, ConfigError> {
    debug!(path = %path.display(), "loading rate configuration");
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}
