//! Structured logging infrastructure for SalesDash

use crate::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::{
    fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented
    #[default]
    Pretty,
    /// Single-line
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(DashError::config_field(
                format!("Unknown log format '{other}', expected pretty, compact or json"),
                "logging.format",
            )),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives, e.g. `salesdash=info,tower_http=debug`
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "salesdash=info,tower_http=info".to_string(),
            format: LogFormat::Pretty,
            include_targets: true,
        }
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            DashError::config_field(
                format!("Invalid log filter '{}': {e}", config.level),
                "logging.level",
            )
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt_layer::layer().pretty().with_target(config.include_targets))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt_layer::layer().compact().with_target(config.include_targets))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt_layer::layer().json().with_target(config.include_targets))
            .try_init(),
    };

    result.map_err(|e| DashError::config(format!("Failed to initialise logging: {e}")))
}
