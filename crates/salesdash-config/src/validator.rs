//! Startup validation of the server-side settings.

use crate::defaults::MAX_CACHE_TTL_SECONDS;
use crate::schema::Config;
use salesdash_common::{DashError, Result};

/// Configuration validator.
///
/// The database URL is deliberately not checked here: a missing URL is
/// reported on the page instead of preventing startup.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        config.server.socket_addr()?;

        if config.cache.ttl_seconds == 0 {
            return Err(DashError::config_field(
                "Cache TTL must be at least one second",
                "cache.ttl_seconds",
            ));
        }

        if config.cache.ttl_seconds > MAX_CACHE_TTL_SECONDS {
            return Err(DashError::config_field(
                format!("Cache TTL cannot exceed {MAX_CACHE_TTL_SECONDS} seconds"),
                "cache.ttl_seconds",
            ));
        }

        if config.database.max_connections == 0 {
            return Err(DashError::config_field(
                "Database pool needs at least one connection",
                "database.max_connections",
            ));
        }

        if config.database.acquire_timeout_seconds == 0 {
            return Err(DashError::config_field(
                "Database acquire timeout must be at least one second",
                "database.acquire_timeout_seconds",
            ));
        }

        if config.chart.width == 0 || config.chart.height == 0 {
            return Err(DashError::config_field(
                "Chart dimensions must be non-zero",
                "chart",
            ));
        }

        if config.logging.level.trim().is_empty() {
            return Err(DashError::config_field(
                "Log level cannot be empty",
                "logging.level",
            ));
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_is_not_a_startup_error() {
        let config = Config::default();
        assert!(config.database.url.is_none());
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_unparsable_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = "localhost".to_string();
        assert!(ConfigValidator::validate(&config).unwrap_err().is_config());
    }

    #[test]
    fn test_cache_ttl_upper_bound() {
        let mut config = Config::default();

        config.cache.ttl_seconds = MAX_CACHE_TTL_SECONDS;
        assert!(ConfigValidator::validate(&config).is_ok());

        config.cache.ttl_seconds = 40_000_000_000;
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("Cache TTL cannot exceed"));
    }

    #[test]
    fn test_rejects_zero_sized_chart() {
        let mut config = Config::default();
        config.chart.height = 0;
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_log_level() {
        let mut config = Config::default();
        config.logging.level = "  ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
