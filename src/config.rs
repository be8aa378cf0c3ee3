use config as config_rs;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::logger::LogFormat;
use crate::obfuscator::ReplacementMode;

/// Prefix for environment overrides, e.g. `ID_OBFUSCATOR_REPLACEMENT=shared`.
pub const ENV_PREFIX: &str = "ID_OBFUSCATOR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Selector name; validated by the obfuscator, not here.
    pub identifier_type: String,
    pub replacement: ReplacementMode,
    pub log_format: LogFormat,
}

/// Values supplied on the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub identifier_type: Option<String>,
    pub replacement: Option<ReplacementMode>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

/// Layer defaults, the optional config file, the environment and CLI flags,
/// in that order of increasing precedence.
pub fn load_config(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    let mut builder = config_rs::Config::builder()
        .set_default("identifier_type", "ssn")?
        .set_default("replacement", ReplacementMode::default().as_str())?
        .set_default("log_format", LogFormat::default().as_str())?;

    if let Some(path) = path {
        builder = builder.add_source(config_rs::File::from(path).required(true));
    }
    builder = builder.add_source(config_rs::Environment::with_prefix(ENV_PREFIX));

    if let Some(ref identifier_type) = overrides.identifier_type {
        builder = builder.set_override("identifier_type", identifier_type.as_str())?;
    }
    if let Some(replacement) = overrides.replacement {
        builder = builder.set_override("replacement", replacement.as_str())?;
    }
    if let Some(log_format) = overrides.log_format {
        builder = builder.set_override("log_format", log_format.as_str())?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
