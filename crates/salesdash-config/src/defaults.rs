//! Default values for every configuration section.

use crate::schema::*;
use salesdash_common::logging::{LogFormat, LoggingConfig};

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";
/// Default memoization window in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
/// Longest accepted memoization window: one year.
pub const MAX_CACHE_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;
/// Default pool size.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
/// Default connection acquire timeout in seconds.
pub const DEFAULT_ACQUIRE_TIMEOUT_SECONDS: u64 = 10;
/// Default chart width in pixels.
pub const DEFAULT_CHART_WIDTH: u32 = 900;
/// Default chart height in pixels.
pub const DEFAULT_CHART_HEIGHT: u32 = 500;

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECONDS,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        let defaults = LoggingConfig::default();
        Self {
            level: defaults.level,
            format: LogFormat::default(),
        }
    }
}
