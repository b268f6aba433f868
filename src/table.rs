//! Materialized result tables.
//!
//! A [`DataTable`] ties an ordered sequence of stringified rows to the
//! [`Domain`] describing its columns. Row width always equals domain width.

use crate::domain::Domain;
use crate::error::{Result, SqltabError};
use serde::{Deserialize, Serialize};

/// A materialized query result: a domain plus rows of stringified cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataTable {
    domain: Domain,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a table, checking that every row matches the domain width.
    pub fn new(domain: Domain, rows: Vec<Vec<String>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != domain.len() {
                return Err(SqltabError::query(format!(
                    "row {} has {} values but the domain has {} columns",
                    i,
                    row.len(),
                    domain.len()
                )));
            }
        }
        Ok(Self { domain, rows })
    }

    /// Returns the table's domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Returns the rows in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Projects this table onto another domain.
    ///
    /// Every target column must exist here with the same name and kind,
    /// else the tables do not align and this is a domain mismatch. Rows are
    /// copied in the target domain's column order.
    pub fn select(&self, target: &Domain) -> Result<DataTable> {
        let mut mapping = Vec::with_capacity(target.len());
        for wanted in target.columns() {
            let position = self.domain.index_of(&wanted.name).ok_or_else(|| {
                SqltabError::domain_mismatch(format!(
                    "column '{}' not present in the source table",
                    wanted.name
                ))
            })?;
            let found = &self.domain.columns()[position];
            if found.kind != wanted.kind {
                return Err(SqltabError::domain_mismatch(format!(
                    "column '{}' is {:?} in the source table but {:?} in the target domain",
                    wanted.name, found.kind, wanted.kind
                )));
            }
            mapping.push(position);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| mapping.iter().map(|&i| row[i].clone()).collect())
            .collect();

        DataTable::new(target.clone(), rows)
    }
}
