//! sqltab - read SQL query results into typed in-memory tables.
//!
//! Parse a connection URI, open a session against postgres or mysql, run a
//! read query and get back a [`table::DataTable`]: rows of stringified
//! cells tied to a typed column [`domain::Domain`].

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod inputs;
pub mod logging;
pub mod reader;
pub mod table;
pub mod uri;

pub use error::{Result, SqltabError};
pub use reader::{QueryOptions, SqlReader};
pub use table::DataTable;
pub use uri::ConnectionUri;
