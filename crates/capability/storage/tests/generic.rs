use park_storage::{
    GenericRecordInput, GenericRecordStore, GenericStatInput, GenericStatStore,
    InMemoryGenericRecordStore, InMemoryGenericStatStore, StatFilter, StorageError,
    parse_numeric_key, require_field, require_timestamp,
};
use serde_json::json;

fn stat(source: &str, description: &str, time: &str, value: Option<f64>) -> GenericStatInput {
    GenericStatInput {
        metric_source_api: source.to_string(),
        metric_description: Some(description.to_string()),
        yq_app_code_context: Some("p1".to_string()),
        related_entity_code_context: Some("b1".to_string()),
        time_period_or_timestamp: Some(time.to_string()),
        value_numeric: value,
        ..GenericStatInput::default()
    }
}

#[tokio::test]
async fn generic_record_crud() {
    let store = InMemoryGenericRecordStore::new();
    let created = store
        .create_record(GenericRecordInput {
            record_type: "inspection".to_string(),
            record_data_json: Some(json!({"ok": true})),
            ..GenericRecordInput::default()
        })
        .await
        .expect("create");
    assert_eq!(created.record_id, 1);

    let updated = store
        .update_record(
            created.record_id,
            GenericRecordInput {
                record_type: "repair".to_string(),
                ..GenericRecordInput::default()
            },
        )
        .await
        .expect("update")
        .expect("record");
    assert_eq!(updated.record_type, "repair");
    assert_eq!(updated.record_data_json, None);

    assert!(store.delete_record(1).await.expect("delete"));
    assert!(store.list_records().await.expect("list").is_empty());
    assert!(!store.delete_record(1).await.expect("delete"));
}

#[tokio::test]
async fn stat_filter_compares_time_text() {
    let store = InMemoryGenericStatStore::new();
    store
        .create_stat(stat("water_meter_api", "daily consumption", "2025-05-20T02:00:00.000Z", Some(3.5)))
        .await
        .expect("create");
    store
        .create_stat(stat("water_meter_api", "daily consumption", "2025-04-01T02:00:00.000Z", Some(9.0)))
        .await
        .expect("create");
    store
        .create_stat(stat("electric_meter_api", "daily consumption", "2025-05-20T02:00:00.000Z", Some(7.0)))
        .await
        .expect("create");
    store
        .create_stat(stat("water_meter_api", "pressure", "2025-05-20T03:00:00.000Z", Some(1.0)))
        .await
        .expect("create");

    let filter = StatFilter {
        source_contains: Some("water".to_string()),
        description_contains: Some("consumption".to_string()),
        from: Some("2025-05-01T00:00:00.000Z".to_string()),
        to: Some("2025-05-31T23:59:59.999Z".to_string()),
        ..StatFilter::default()
    };
    let matched = store.query_stats(&filter).await.expect("query");
    assert_eq!(matched.len(), 1);
    assert_eq!(store.sum_numeric(&filter).await.expect("sum"), Some(3.5));

    let none = StatFilter {
        source_contains: Some("gas".to_string()),
        ..StatFilter::default()
    };
    assert_eq!(store.sum_numeric(&none).await.expect("sum"), None);
}

#[test]
fn required_columns() {
    let err = require_field::<String>(None, "yq_name").expect_err("missing");
    assert!(matches!(err, StorageError::NotNull("yq_name")));
    assert!(require_timestamp(Some("2025-05-20T08:00:00Z"), "alarm_time").is_ok());
    assert!(matches!(
        require_timestamp(Some("yesterday"), "alarm_time"),
        Err(StorageError::Invalid { .. })
    ));
    assert_eq!(parse_numeric_key("12", "record_id").expect("key"), 12);
    assert!(parse_numeric_key("abc", "record_id").is_err());
}
