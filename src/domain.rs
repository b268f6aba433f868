//! Typed column schemas.
//!
//! A [`Domain`] describes the typed columns of a tabular dataset: each
//! column has a representation kind (discrete, continuous or text) and a
//! role (class, meta or plain attribute). Domain construction is delegated
//! to a [`DomainBuilder`], which is free to reorder columns; consumers must
//! look columns up by name rather than assuming query order.

use crate::error::{Result, SqltabError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Representation kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Categorical values.
    Discrete,

    /// Numeric values.
    Continuous,

    /// Free-form text (also used for date/time columns).
    Text,
}

/// Role of a column within a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Ordinary modeling attribute.
    #[default]
    Attribute,

    /// The designated target/label column.
    Class,

    /// Carried alongside but excluded from modeling.
    Meta,
}

/// A typed column in a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name.
    pub name: String,

    /// Representation kind.
    pub kind: ValueKind,

    /// Role within the dataset.
    pub role: ColumnRole,
}

impl ColumnSpec {
    /// Creates a plain attribute column of the given kind.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            role: ColumnRole::Attribute,
        }
    }

    /// Sets the column role.
    pub fn with_role(self, role: ColumnRole) -> Self {
        Self { role, ..self }
    }
}

/// An ordered, typed column schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Domain {
    columns: Vec<ColumnSpec>,
}

impl Domain {
    /// Creates a domain from an ordered column list.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Returns the columns in domain order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the domain has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the position of the named column, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the named column, if present.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the position of the class column, if one exists.
    pub fn class_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c.role == ColumnRole::Class)
    }
}

/// Finalizes a schema from the typed columns of a query result.
///
/// Implementations may reorder columns; callers must re-map row values by
/// name against the returned domain.
pub trait DomainBuilder: Send {
    /// Builds a domain from columns given in query order.
    fn build(&self, columns: Vec<ColumnSpec>) -> Result<Domain>;
}

/// Default domain construction: plain attributes first (in the order
/// given), then metas, then the class column last.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDomainBuilder;

impl DomainBuilder for StandardDomainBuilder {
    fn build(&self, columns: Vec<ColumnSpec>) -> Result<Domain> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(SqltabError::query(format!(
                    "duplicate column name '{}' in query result",
                    column.name
                )));
            }
        }

        let mut ordered = Vec::with_capacity(columns.len());
        for role in [ColumnRole::Attribute, ColumnRole::Meta, ColumnRole::Class] {
            ordered.extend(columns.iter().filter(|c| c.role == role).cloned());
        }

        Ok(Domain::new(ordered))
    }
}
