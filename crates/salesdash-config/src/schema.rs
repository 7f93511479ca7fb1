//! Configuration schema definitions using serde.

use salesdash_common::logging::{LogFormat, LoggingConfig};
use salesdash_common::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Message shown on the page when no connection string is configured.
pub const MISSING_DATABASE_URL: &str = "Database URL not found";

/// Main configuration structure for SalesDash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Query result memoization.
    pub cache: CacheConfig,
    /// Chart dimensions.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Database configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub url: Option<String>,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// How long a query may wait for a connection.
    pub acquire_timeout_seconds: u64,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the dashboard listens on.
    pub bind_address: String,
}

/// Memoization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Lifetime of a cached query result in seconds.
    pub ttl_seconds: u64,
}

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart width.
    pub width: u32,
    /// Chart height.
    pub height: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directives.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl DatabaseConfig {
    /// Returns the connection string, or the error that halts the page.
    pub fn url(&self) -> Result<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(DashError::config_field(MISSING_DATABASE_URL, "DATABASE_URL")),
        }
    }

    /// Connection string with the password masked, for logs.
    pub fn redacted_url(&self) -> Option<String> {
        self.url.as_deref().map(redact_password)
    }

    /// Connection acquire timeout.
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_seconds", &self.acquire_timeout_seconds)
            .finish()
    }
}

impl ServerConfig {
    /// Parses the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            DashError::config_field(
                format!("Invalid bind address '{}': {e}", self.bind_address),
                "server.bind_address",
            )
        })
    }
}

impl CacheConfig {
    /// Memoization window.
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

impl LoggingSettings {
    /// Converts to the subscriber configuration.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            format: self.format,
            ..LoggingConfig::default()
        }
    }
}

fn redact_password(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &url[authority_start..];
    let Some(at) = rest.find('@') else {
        return url.to_string();
    };
    let credentials = &rest[..at];
    match credentials.find(':') {
        Some(colon) => format!(
            "{}{}:***{}",
            &url[..authority_start],
            &credentials[..colon],
            &rest[at..]
        ),
        None => url.to_string(),
    }
}
