//! Integration tests for sqltab.

pub mod connection_test;
pub mod reader_test;
pub mod uri_test;
