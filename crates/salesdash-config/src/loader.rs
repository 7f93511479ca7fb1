//! Configuration loading from a TOML file, `.env`, and the environment.

use crate::schema::Config;
use salesdash_common::{DashError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "SALESDASH_CONFIG";
/// File read when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "salesdash.toml";

/// Environment variables recognised on top of the TOML file.
pub mod env_keys {
    /// PostgreSQL connection string.
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Listen address.
    pub const BIND: &str = "SALESDASH_BIND";
    /// Memoization window in seconds.
    pub const CACHE_TTL_SECS: &str = "SALESDASH_CACHE_TTL_SECS";
    /// Pool size.
    pub const DB_MAX_CONNECTIONS: &str = "SALESDASH_DB_MAX_CONNECTIONS";
    /// Connection acquire timeout in seconds.
    pub const DB_ACQUIRE_TIMEOUT_SECS: &str = "SALESDASH_DB_ACQUIRE_TIMEOUT_SECS";
    /// Log filter directives.
    pub const LOG: &str = "SALESDASH_LOG";
    /// Log output format.
    pub const LOG_FORMAT: &str = "SALESDASH_LOG_FORMAT";
}

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
    dotenv: bool,
}

impl ConfigLoader {
    /// Creates a loader for an explicit file, which must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
            dotenv: true,
        }
    }

    /// Creates a loader from `SALESDASH_CONFIG`, falling back to an optional
    /// `salesdash.toml` in the working directory.
    pub fn from_env() -> Self {
        std::env::var(CONFIG_PATH_VAR).map_or_else(
            |_| Self {
                path: PathBuf::from(DEFAULT_CONFIG_PATH),
                required: false,
                dotenv: true,
            },
            Self::new,
        )
    }

    /// Skips reading `.env`.
    #[must_use]
    pub const fn without_dotenv(mut self) -> Self {
        self.dotenv = false;
        self
    }

    /// The configuration file this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from the file, `.env`, and the process environment.
    pub async fn load(&self) -> Result<Config> {
        if self.dotenv {
            load_dotenv();
        }
        self.load_with(|key| std::env::var(key).ok()).await
    }

    /// Loads configuration using `lookup` in place of the process environment.
    pub async fn load_with<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.read_file().await?;
        apply_overrides(&mut config, lookup)?;
        Ok(config)
    }

    async fn read_file(&self) -> Result<Config> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                info!("Loaded configuration file {}", self.path.display());
                parse_toml(&raw).map_err(|e| match e {
                    DashError::Config { message, field } => DashError::Config {
                        message: format!("{}: {message}", self.path.display()),
                        field,
                    },
                    other => other,
                })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.required => {
                debug!("No configuration file at {}, using defaults", self.path.display());
                Ok(Config::default())
            }
            Err(e) => Err(DashError::config(format!(
                "Failed to read configuration file {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// Parses a TOML document into a [`Config`]; absent keys keep their defaults.
pub fn parse_toml(raw: &str) -> Result<Config> {
    toml::from_str(raw).map_err(|e| DashError::config(format!("Invalid configuration: {e}")))
}

/// Applies environment overrides on top of `config`.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(env_keys::DATABASE_URL) {
        config.database.url = Some(url);
    }
    if let Some(bind) = lookup(env_keys::BIND) {
        config.server.bind_address = bind;
    }
    if let Some(ttl) = parse_var(&lookup, env_keys::CACHE_TTL_SECS)? {
        config.cache.ttl_seconds = ttl;
    }
    if let Some(max) = parse_var(&lookup, env_keys::DB_MAX_CONNECTIONS)? {
        config.database.max_connections = max;
    }
    if let Some(timeout) = parse_var(&lookup, env_keys::DB_ACQUIRE_TIMEOUT_SECS)? {
        config.database.acquire_timeout_seconds = timeout;
    }
    if let Some(level) = lookup(env_keys::LOG) {
        config.logging.level = level;
    }
    if let Some(format) = parse_var(&lookup, env_keys::LOG_FORMAT)? {
        config.logging.format = format;
    }
    Ok(())
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim().parse().map_err(|e| {
                DashError::config_field(format!("Invalid {key} value '{raw}': {e}"), key)
            })
        })
        .transpose()
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Ignoring unreadable .env file: {e}"),
    }
}
