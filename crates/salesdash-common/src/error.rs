//! Error types and utilities for SalesDash

use thiserror::Error;

/// Result type alias for SalesDash operations
pub type Result<T> = std::result::Result<T, DashError>;

/// Boxed error used as the source of wrapped driver errors
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for SalesDash operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Missing or invalid configuration
    #[error("{message}")]
    Config {
        /// Message shown to the user
        message: String,
        /// Offending setting, when known
        field: Option<String>,
    },

    /// Database connection or query failure
    #[error("Database error: {message}")]
    Database {
        /// Description of the failure
        message: String,
        /// Underlying driver error
        #[source]
        source: Option<BoxError>,
    },

    /// Chart model or rendering failure
    #[error("Chart error: {message}")]
    Chart {
        /// Description of the failure
        message: String,
    },

    /// Page template failure
    #[error("Template error: {message}")]
    Template {
        /// Description of the failure
        message: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashError {
    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a configuration error tied to a setting
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Wraps a driver error as a database error
    pub fn database(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Database {
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a database error without an underlying source
    pub fn database_message(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a chart error
    pub fn chart(message: impl Into<String>) -> Self {
        Self::Chart {
            message: message.into(),
        }
    }

    /// Creates a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Whether this error should stop the page before any query
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
