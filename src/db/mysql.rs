//! MySQL driver implementation.
//!
//! Provides the `MySqlDriver` struct that implements the `SqlDriver` trait
//! for MySQL databases using sqlx.

use crate::db::{RawColumn, RawResult, Row, SqlDriver, TypeCategory, Value};
use crate::error::{Result, SqltabError};
use crate::uri::ConnectionUri;
use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlRow};
use sqlx::{Column as SqlxColumn, ConnectOptions, Connection, Executor, Row as SqlxRow, TypeInfo};
use tracing::debug;

/// MySQL driver holding a single connection.
#[derive(Debug)]
pub struct MySqlDriver {
    conn: MySqlConnection,
}

impl MySqlDriver {
    /// Opens a session from a parsed connection descriptor.
    ///
    /// Descriptor fields that were absent in the URI are left to the
    /// driver's defaults. Single attempt; failures propagate as connection
    /// errors.
    pub async fn connect(uri: &ConnectionUri) -> Result<Self> {
        let mut opts = MySqlConnectOptions::new();
        if let Some(user) = uri.user.as_deref().filter(|s| !s.is_empty()) {
            opts = opts.username(user);
        }
        if let Some(password) = uri.password.as_deref().filter(|s| !s.is_empty()) {
            opts = opts.password(password);
        }
        if let Some(host) = uri.host.as_deref() {
            opts = opts.host(host);
        }
        if let Some(port) = uri.port {
            opts = opts.port(port);
        }
        let database = uri.database();
        if !database.is_empty() {
            opts = opts.database(database);
        }

        let conn = opts
            .connect()
            .await
            .map_err(|e| map_connection_error(e, uri))?;
        debug!("Connected to mysql database");

        Ok(Self { conn })
    }
}

#[async_trait]
impl SqlDriver for MySqlDriver {
    async fn execute(&mut self, sql: &str) -> Result<RawResult> {
        let describe = self
            .conn
            .describe(sql)
            .await
            .map_err(|e| SqltabError::query(format_query_error(e)))?;

        let columns: Vec<RawColumn> = describe
            .columns
            .iter()
            .map(|col| {
                let type_name = col.type_info().name();
                RawColumn::new(col.name(), type_name, categorize(type_name))
            })
            .collect();

        let mut rows: Vec<Row> = Vec::new();
        {
            let mut stream = sqlx::query(sql).fetch(&mut self.conn);
            while let Some(row) = stream
                .try_next()
                .await
                .map_err(|e| SqltabError::query(format_query_error(e)))?
            {
                rows.push(convert_row(&row));
            }
        }
        debug!("Query returned {} rows", rows.len());

        Ok(RawResult { columns, rows })
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| SqltabError::connection(e.to_string()))
    }
}

/// Maps a MySQL native type name to its coarse category.
fn categorize(type_name: &str) -> TypeCategory {
    match type_name.to_uppercase().as_str() {
        "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" | "SET"
        | "JSON" => TypeCategory::Textual,
        "DATE" | "TIME" | "DATETIME" | "TIMESTAMP" | "YEAR" => TypeCategory::Temporal,
        _ => TypeCategory::Other,
    }
}

/// Converts a sqlx MySqlRow to our Row type.
fn convert_row(row: &MySqlRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a MySqlRow to our Value type.
fn convert_value(row: &MySqlRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "BOOLEAN" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),

        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(index)
            .ok()
            .flatten()
            .map(|v| Value::Int(v as i64))
            .unwrap_or(Value::Null),

        "FLOAT" => row
            .try_get::<Option<f32>, _>(index)
            .ok()
            .flatten()
            .map(|v| Value::Float(v as f64))
            .unwrap_or(Value::Null),

        "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BINARY" | "VARBINARY" | "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        // For all other types, try to get as string
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

/// Maps sqlx connection errors to user-friendly messages.
fn map_connection_error(error: sqlx::Error, uri: &ConnectionUri) -> SqltabError {
    let host = uri.host.as_deref().unwrap_or("localhost");
    let port = uri.port.unwrap_or(3306);
    let user = uri.user.as_deref().unwrap_or("unknown");
    let database = uri.database();

    let error_str = error.to_string().to_lowercase();

    if error_str.contains("connection refused") || error_str.contains("could not connect") {
        SqltabError::connection(format!(
            "Cannot connect to {host}:{port}. Check that the server is running."
        ))
    } else if error_str.contains("access denied") || error_str.contains("authentication") {
        SqltabError::connection(format!(
            "Authentication failed for user '{user}'. Check your credentials."
        ))
    } else if error_str.contains("unknown database") {
        SqltabError::connection(format!("Database '{database}' does not exist."))
    } else {
        SqltabError::connection(error.to_string())
    }
}

/// Formats a query error from the server, if one is attached.
fn format_query_error(error: sqlx::Error) -> String {
    if let Some(db_error) = error.as_database_error() {
        format!("ERROR: {}", db_error.message())
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_textual() {
        assert_eq!(categorize("VARCHAR"), TypeCategory::Textual);
        assert_eq!(categorize("TEXT"), TypeCategory::Textual);
        assert_eq!(categorize("ENUM"), TypeCategory::Textual);
    }

    #[test]
    fn test_categorize_temporal() {
        assert_eq!(categorize("DATETIME"), TypeCategory::Temporal);
        assert_eq!(categorize("TIMESTAMP"), TypeCategory::Temporal);
        assert_eq!(categorize("YEAR"), TypeCategory::Temporal);
    }

    #[test]
    fn test_categorize_other() {
        assert_eq!(categorize("INT"), TypeCategory::Other);
        assert_eq!(categorize("DECIMAL"), TypeCategory::Other);
        assert_eq!(categorize("DOUBLE"), TypeCategory::Other);
    }
}
