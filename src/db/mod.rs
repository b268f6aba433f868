//! Database driver layer.
//!
//! Provides a trait-based interface for executing queries, allowing
//! different database backends to be used interchangeably. Backends are
//! selected by URI scheme from a closed set.

mod mock;
mod mysql;
mod postgres;
mod types;

pub use mock::{FailingDriver, MockDriver};
pub use mysql::MySqlDriver;
pub use postgres::PostgresDriver;
pub use types::{RawColumn, RawResult, Row, TypeCategory, Value};

use crate::error::{Result, SqltabError};
use crate::uri::ConnectionUri;
use async_trait::async_trait;

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Postgres,
    MySql,
}

impl Backend {
    /// Returns the backend as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
        }
    }

    /// Selects a backend by URI scheme. Only `postgres` and `mysql` are
    /// recognized; anything else is an unsupported-scheme error.
    pub fn from_scheme(scheme: &str) -> Result<Self> {
        match scheme {
            "postgres" => Ok(Self::Postgres),
            "mysql" => Ok(Self::MySql),
            other => Err(SqltabError::unsupported_scheme(other)),
        }
    }

    /// Returns the conventional port for this backend.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Postgres => 5432,
            Self::MySql => 3306,
        }
    }
}

/// Opens a driver session for the given connection descriptor.
///
/// This is the central factory function: the descriptor's scheme picks the
/// backend, the backend opens a single session. One attempt, no pooling.
pub async fn connect(uri: &ConnectionUri) -> Result<Box<dyn SqlDriver>> {
    match Backend::from_scheme(&uri.scheme)? {
        Backend::Postgres => {
            let driver = PostgresDriver::connect(uri).await?;
            Ok(Box::new(driver))
        }
        Backend::MySql => {
            let driver = MySqlDriver::connect(uri).await?;
            Ok(Box::new(driver))
        }
    }
}

/// Trait defining the interface for database drivers.
///
/// A driver owns one session and executes one query at a time; `&mut self`
/// on [`execute`](SqlDriver::execute) makes callers serialize use.
#[async_trait]
pub trait SqlDriver: Send {
    /// Executes a read query, returning column descriptions in query order
    /// and all rows fetched until the result is exhausted.
    async fn execute(&mut self, sql: &str) -> Result<RawResult>;

    /// Closes the underlying session.
    async fn close(self: Box<Self>) -> Result<()>;
}
