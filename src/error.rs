//! Error types for sqltab.
//!
//! Defines the main error enum used throughout the crate.

use thiserror::Error;

/// Main error type for sqltab operations.
#[derive(Error, Debug)]
pub enum SqltabError {
    /// Connection URI does not follow `scheme://[user[:password]@]host[:port]/database`.
    #[error("Malformed URI: {0}")]
    MalformedUri(String),

    /// Port component is not an integer in the range 1-65535.
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// URI scheme does not name a supported database backend.
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Database connection errors (host unreachable, auth failed, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution errors (syntax errors, missing tables, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Subset table columns do not align with the primary domain.
    #[error("Domain mismatch: {0}")]
    DomainMismatch(String),

    /// Configuration errors (invalid config file, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqltabError {
    /// Creates a malformed-URI error with the given message.
    pub fn malformed_uri(msg: impl Into<String>) -> Self {
        Self::MalformedUri(msg.into())
    }

    /// Creates an invalid-port error with the given message.
    pub fn invalid_port(msg: impl Into<String>) -> Self {
        Self::InvalidPort(msg.into())
    }

    /// Creates an unsupported-scheme error with the given message.
    pub fn unsupported_scheme(msg: impl Into<String>) -> Self {
        Self::UnsupportedScheme(msg.into())
    }

    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a domain-mismatch error with the given message.
    pub fn domain_mismatch(msg: impl Into<String>) -> Self {
        Self::DomainMismatch(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedUri(_) => "Malformed URI",
            Self::InvalidPort(_) => "Invalid Port",
            Self::UnsupportedScheme(_) => "Unsupported Scheme",
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::DomainMismatch(_) => "Domain Mismatch",
            Self::Config(_) => "Configuration Error",
        }
    }
}

/// Result type alias using SqltabError.
pub type Result<T> = std::result::Result<T, SqltabError>;
