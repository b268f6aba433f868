//! The SQL reader: executes queries and materializes typed tables.
//!
//! [`SqlReader`] owns one driver session. Each `query` call derives a typed
//! domain from the driver-reported column descriptions, lets the domain
//! builder finalize (and possibly reorder) it, and copies rows into a
//! [`DataTable`] with values re-mapped by column name.

use crate::db::{self, SqlDriver, TypeCategory};
use crate::domain::{ColumnRole, ColumnSpec, DomainBuilder, StandardDomainBuilder, ValueKind};
use crate::error::{Result, SqltabError};
use crate::table::DataTable;
use crate::uri::ConnectionUri;
use std::collections::HashSet;
use tracing::debug;

/// Caller-supplied typing hints for a query.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Names of columns to treat as discrete (unless their native type is
    /// text- or date-like, which always wins).
    pub discrete: HashSet<String>,

    /// Name of the class column. When absent, the first column in query
    /// order becomes the class.
    pub class_attr: Option<String>,

    /// Names of columns carried as meta attributes.
    pub metas: HashSet<String>,
}

impl QueryOptions {
    /// Creates empty options: no hints, class defaults to the first column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the given column names as discrete.
    pub fn discrete<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.discrete = names.into_iter().map(Into::into).collect();
        self
    }

    /// Designates the class column.
    pub fn class_attr(mut self, name: impl Into<String>) -> Self {
        self.class_attr = Some(name.into());
        self
    }

    /// Marks the given column names as meta attributes.
    pub fn metas<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metas = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Reads SQL query results into typed tables over a single driver session.
///
/// One connection, one in-flight query; `&mut self` enforces serialized
/// use. The reader keeps the last successfully materialized table for the
/// [`data`](SqlReader::data) accessor.
pub struct SqlReader {
    driver: Box<dyn SqlDriver>,
    builder: Box<dyn DomainBuilder>,
    last: Option<DataTable>,
}

impl SqlReader {
    /// Parses the connection URI, selects a backend by scheme and opens a
    /// session.
    pub async fn connect(uri: &str) -> Result<Self> {
        let descriptor = ConnectionUri::parse(uri)?;
        let driver = db::connect(&descriptor).await?;
        Ok(Self::with_driver(driver))
    }

    /// Creates a reader over an already-open driver session.
    pub fn with_driver(driver: Box<dyn SqlDriver>) -> Self {
        Self {
            driver,
            builder: Box::new(StandardDomainBuilder),
            last: None,
        }
    }

    /// Replaces the domain-construction collaborator.
    pub fn set_domain_builder(&mut self, builder: Box<dyn DomainBuilder>) {
        self.builder = builder;
    }

    /// Executes a read query and materializes the result.
    ///
    /// The previous result is discarded up front, so a failure at any stage
    /// leaves the reader with no visible result rather than a stale one.
    pub async fn query(&mut self, sql: &str, options: &QueryOptions) -> Result<&DataTable> {
        self.last = None;

        let raw = self.driver.execute(sql).await?;

        let class_attr = options
            .class_attr
            .clone()
            .or_else(|| raw.columns.first().map(|c| c.name.clone()));

        let mut specs = Vec::with_capacity(raw.columns.len());
        for column in &raw.columns {
            let kind = match column.category {
                TypeCategory::Textual | TypeCategory::Temporal => ValueKind::Text,
                TypeCategory::Other if options.discrete.contains(&column.name) => {
                    ValueKind::Discrete
                }
                TypeCategory::Other => ValueKind::Continuous,
            };
            let role = if Some(&column.name) == class_attr.as_ref() {
                ColumnRole::Class
            } else if options.metas.contains(&column.name) {
                ColumnRole::Meta
            } else {
                ColumnRole::Attribute
            };
            specs.push(ColumnSpec::new(column.name.as_str(), kind).with_role(role));
        }

        let domain = self.builder.build(specs)?;
        if domain.len() != raw.columns.len() {
            return Err(SqltabError::query(format!(
                "domain builder returned {} columns for a {}-column query",
                domain.len(),
                raw.columns.len()
            )));
        }

        // The builder may have reordered columns, so compute an explicit
        // query-order -> domain-order remapping by name.
        let mut remap = vec![0usize; raw.columns.len()];
        for (query_pos, column) in raw.columns.iter().enumerate() {
            let domain_pos = domain.index_of(&column.name).ok_or_else(|| {
                SqltabError::query(format!(
                    "domain builder dropped column '{}'",
                    column.name
                ))
            })?;
            remap[domain_pos] = query_pos;
        }

        let mut rows = Vec::with_capacity(raw.rows.len());
        for raw_row in &raw.rows {
            if raw_row.len() != raw.columns.len() {
                return Err(SqltabError::query(format!(
                    "driver returned a row with {} values for {} columns",
                    raw_row.len(),
                    raw.columns.len()
                )));
            }
            let row: Vec<String> = remap
                .iter()
                .map(|&query_pos| raw_row[query_pos].to_display_string())
                .collect();
            rows.push(row);
        }

        let table = DataTable::new(domain, rows)?;
        debug!("Materialized {} rows over {} columns", table.len(), table.domain().len());

        Ok(self.last.insert(table))
    }

    /// Returns the last successfully materialized table, if any.
    pub fn data(&self) -> Option<&DataTable> {
        self.last.as_ref()
    }

    /// Closes the underlying session, releasing the connection.
    pub async fn close(self) -> Result<()> {
        self.driver.close().await
    }
}
