//! Reader behavior tests over the mock driver.

use sqltab::db::{MockDriver, RawColumn, RawResult, TypeCategory, Value};
use sqltab::inputs::DataInputs;
use sqltab::{QueryOptions, SqlReader};

fn survey_result() -> RawResult {
    RawResult::with_data(
        vec![
            RawColumn::new("species", "VARCHAR", TypeCategory::Textual),
            RawColumn::new("weight", "FLOAT8", TypeCategory::Other),
            RawColumn::new("ring_id", "INT4", TypeCategory::Other),
        ],
        vec![
            vec![
                Value::String("siskin".to_string()),
                Value::Float(12.5),
                Value::Int(1001),
            ],
            vec![
                Value::String("robin".to_string()),
                Value::Float(18.0),
                Value::Int(1002),
            ],
        ],
    )
}

#[tokio::test]
async fn test_query_materializes_typed_table() {
    let mut reader = SqlReader::with_driver(Box::new(MockDriver::with_result(survey_result())));

    let options = QueryOptions::new()
        .class_attr("species")
        .metas(["ring_id"]);
    let table = reader
        .query("SELECT species, weight, ring_id FROM birds", &options)
        .await
        .unwrap();

    // Attributes first, then metas, then the class column.
    let names: Vec<&str> = table
        .domain()
        .columns()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["weight", "ring_id", "species"]);

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0], vec!["12.5", "1001", "siskin"]);
    assert_eq!(table.rows()[1], vec!["18", "1002", "robin"]);
}

#[tokio::test]
async fn test_data_accessor_tracks_last_result() {
    let mut reader = SqlReader::with_driver(Box::new(MockDriver::with_result(survey_result())));
    assert!(reader.data().is_none());

    reader
        .query("SELECT species, weight, ring_id FROM birds", &QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(reader.data().map(|t| t.len()), Some(2));
}

#[tokio::test]
async fn test_query_result_feeds_input_slots() {
    let mut reader = SqlReader::with_driver(Box::new(MockDriver::with_result(survey_result())));
    let options = QueryOptions::new().class_attr("species");
    let table = reader
        .query("SELECT species, weight, ring_id FROM birds", &options)
        .await
        .unwrap()
        .clone();

    let mut inputs = DataInputs::new();
    inputs.set_data(Some(table.clone()));
    inputs.set_subset(Some(table));

    assert!(inputs.warning().is_none());
    assert_eq!(inputs.subset().map(|s| s.len()), Some(2));
}

#[tokio::test]
async fn test_close_releases_session() {
    let reader = SqlReader::with_driver(Box::new(MockDriver::new()));
    reader.close().await.unwrap();
}
