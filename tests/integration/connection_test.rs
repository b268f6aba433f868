//! Live database tests.
//!
//! These require a running PostgreSQL server; set DATABASE_URL to run them.

use sqltab::{QueryOptions, SqlReader};

/// Helper to get the test database URL from the environment.
fn get_test_database_url() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Helper to open a reader against the test database.
async fn get_test_reader() -> Option<SqlReader> {
    let url = get_test_database_url()?;
    SqlReader::connect(&url).await.ok()
}

#[tokio::test]
async fn test_connect_and_close() {
    let Some(reader) = get_test_reader().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    reader.close().await.unwrap();
}

#[tokio::test]
async fn test_simple_select() {
    let Some(mut reader) = get_test_reader().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let table = reader
        .query("SELECT 1 AS num, 'hello' AS greeting", &QueryOptions::new())
        .await
        .unwrap();

    assert_eq!(table.domain().len(), 2);
    assert_eq!(table.len(), 1);

    // num defaults to class and moves last; greeting is text.
    let num = table.domain().index_of("num").unwrap();
    let greeting = table.domain().index_of("greeting").unwrap();
    assert_eq!(table.rows()[0][num], "1");
    assert_eq!(table.rows()[0][greeting], "hello");

    reader.close().await.unwrap();
}

#[tokio::test]
async fn test_empty_result_keeps_schema() {
    let Some(mut reader) = get_test_reader().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let table = reader
        .query(
            "SELECT 1 AS num, 'x' AS tag WHERE false",
            &QueryOptions::new(),
        )
        .await
        .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.domain().len(), 2);

    reader.close().await.unwrap();
}

#[tokio::test]
async fn test_query_error_propagates() {
    let Some(mut reader) = get_test_reader().await else {
        eprintln!("Skipping test: DATABASE_URL not set");
        return;
    };

    let result = reader
        .query("SELECT * FROM nonexistent_table_xyz", &QueryOptions::new())
        .await;
    assert!(result.is_err());
    assert!(reader.data().is_none());

    reader.close().await.unwrap();
}
