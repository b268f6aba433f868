//! Mock drivers for testing.
//!
//! Provides in-memory driver implementations so reader behavior can be
//! tested without a live database.

use super::{RawResult, SqlDriver};
use crate::error::{Result, SqltabError};
use async_trait::async_trait;

/// A mock driver that returns a scripted result for every query.
pub struct MockDriver {
    result: RawResult,
}

impl MockDriver {
    /// Creates a mock driver that returns an empty result.
    pub fn new() -> Self {
        Self {
            result: RawResult::default(),
        }
    }

    /// Creates a mock driver that returns the given result.
    pub fn with_result(result: RawResult) -> Self {
        Self { result }
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SqlDriver for MockDriver {
    async fn execute(&mut self, _sql: &str) -> Result<RawResult> {
        Ok(self.result.clone())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

/// A mock driver that fails every query with a query error.
pub struct FailingDriver {
    message: String,
}

impl FailingDriver {
    /// Creates a failing driver with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SqlDriver for FailingDriver {
    async fn execute(&mut self, _sql: &str) -> Result<RawResult> {
        Err(SqltabError::query(self.message.clone()))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
