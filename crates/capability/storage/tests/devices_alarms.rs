use chrono::{DateTime, Duration, Utc};
use domain::{BucketUnit, PageRequest};
use park_storage::{
    AlarmFilter, AlarmInput, AlarmStore, DeviceFilter, DeviceInput, DeviceStore,
    InMemoryAlarmStore, InMemoryDeviceStore, StorageError,
};

fn device(park: &str, name: &str, status: &str, kind: &str) -> DeviceInput {
    DeviceInput {
        yq_app_code: park.to_string(),
        device_name: name.to_string(),
        device_status: Some(status.to_string()),
        device_type: Some(kind.to_string()),
        ..DeviceInput::default()
    }
}

fn alarm(device_code: &str, kind: &str, status: &str, at: DateTime<Utc>) -> AlarmInput {
    AlarmInput {
        device_code: device_code.to_string(),
        alarm_type: Some(kind.to_string()),
        alarm_level: Some("high".to_string()),
        alarm_time: at,
        alarm_status: Some(status.to_string()),
        location_at_alarm: Some("Lobby".to_string()),
    }
}

#[tokio::test]
async fn device_filters_and_pages() {
    let store = InMemoryDeviceStore::new();
    store
        .create_device("d1", device("p1", "Smoke sensor A", "1", "Sensor"))
        .await
        .expect("create");
    store
        .create_device("d2", device("p1", "Gate camera", "0", "Video"))
        .await
        .expect("create");
    store
        .create_device("d3", device("p2", "Smoke sensor B", "1", "Sensor"))
        .await
        .expect("create");

    let filter = DeviceFilter {
        name_contains: Some("Smoke".to_string()),
        ..DeviceFilter::default()
    };
    assert_eq!(store.count_devices(&filter).await.expect("count"), 2);

    let filter = DeviceFilter {
        yq_app_code: Some("p1".to_string()),
        status: Some("1".to_string()),
        ..DeviceFilter::default()
    };
    let matched = store.query_devices(&filter, None).await.expect("query");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].device_code, "d1");

    let page = store
        .query_devices(&DeviceFilter::default(), Some(PageRequest::new(2, 2)))
        .await
        .expect("query");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].device_code, "d3");
}

#[tokio::test]
async fn device_update_replaces_fields_and_touches_timestamp() {
    let store = InMemoryDeviceStore::new();
    let created = store
        .create_device("d1", device("p1", "Old", "1", "Sensor"))
        .await
        .expect("create");
    let updated = store
        .update_device("d1", device("p1", "New", "0", "Video"))
        .await
        .expect("update")
        .expect("device");
    assert_eq!(updated.device_code, "d1");
    assert_eq!(updated.device_name, "New");
    assert_eq!(updated.device_status.as_deref(), Some("0"));
    assert!(updated.last_updated >= created.last_updated);
}

#[tokio::test]
async fn devices_found_by_codes_skip_unknown() {
    let store = InMemoryDeviceStore::new();
    store
        .create_device("d1", device("p1", "Smoke sensor A", "1", "Sensor"))
        .await
        .expect("create");
    store
        .create_device("d2", device("p1", "Gate camera", "0", "Video"))
        .await
        .expect("create");

    let found = store
        .find_devices_by_codes(&["d2".to_string(), "missing".to_string()])
        .await
        .expect("find");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].device_name, "Gate camera");
}

#[tokio::test]
async fn alarm_ids_are_generated_or_supplied() {
    let store = InMemoryAlarmStore::new();
    let now = Utc::now();
    let first = store
        .create_alarm(None, alarm("d1", "fire", "报警中", now))
        .await
        .expect("create");
    assert_eq!(first.api_record_id, 1);
    let supplied = store
        .create_alarm(Some(42), alarm("d1", "fire", "报警中", now))
        .await
        .expect("create");
    assert_eq!(supplied.api_record_id, 42);
    let next = store
        .create_alarm(None, alarm("d1", "fire", "报警中", now))
        .await
        .expect("create");
    assert_eq!(next.api_record_id, 43);

    let err = store
        .create_alarm(Some(42), alarm("d1", "fire", "报警中", now))
        .await
        .expect_err("duplicate");
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn alarm_id_after_max_is_a_conflict() {
    let store = InMemoryAlarmStore::new();
    let now = Utc::now();
    store
        .create_alarm(Some(i64::MAX), alarm("d1", "fire", "报警中", now))
        .await
        .expect("create");
    let err = store
        .create_alarm(None, alarm("d1", "fire", "报警中", now))
        .await
        .expect_err("exhausted");
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn alarms_newest_first_with_device_scope() {
    let store = InMemoryAlarmStore::new();
    let now = Utc::now();
    store
        .create_alarm(None, alarm("d1", "fire", "报警中", now - Duration::hours(2)))
        .await
        .expect("create");
    store
        .create_alarm(None, alarm("d2", "smoke", "已处理", now - Duration::hours(1)))
        .await
        .expect("create");
    store
        .create_alarm(None, alarm("d1", "smoke", "报警中", now))
        .await
        .expect("create");

    let all = store
        .query_alarms(&AlarmFilter::default(), None)
        .await
        .expect("query");
    let ids: Vec<i64> = all.iter().map(|a| a.api_record_id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let scoped = AlarmFilter {
        device_codes: Some(vec!["d1".to_string()]),
        alarm_status: Some("报警中".to_string()),
        ..AlarmFilter::default()
    };
    assert_eq!(store.count_alarms(&scoped).await.expect("count"), 2);

    let nothing = AlarmFilter {
        device_codes: Some(vec![]),
        ..AlarmFilter::default()
    };
    assert_eq!(store.count_alarms(&nothing).await.expect("count"), 0);

    let window = AlarmFilter {
        from: Some(now - Duration::minutes(90)),
        to: Some(now),
        ..AlarmFilter::default()
    };
    assert_eq!(store.count_alarms(&window).await.expect("count"), 2);
}

#[tokio::test]
async fn alarm_type_counts_and_trend() {
    let store = InMemoryAlarmStore::new();
    let now = Utc::now();
    for kind in ["smoke", "fire", "smoke", "smoke", "fire", "intrusion"] {
        store
            .create_alarm(None, alarm("d1", kind, "报警中", now))
            .await
            .expect("create");
    }
    let counts = store
        .count_alarms_by_type(&AlarmFilter::default(), 2)
        .await
        .expect("counts");
    assert_eq!(
        counts,
        vec![(Some("smoke".to_string()), 3), (Some("fire".to_string()), 2)]
    );

    let trend = store
        .alarm_trend(&AlarmFilter::default(), BucketUnit::Year)
        .await
        .expect("trend");
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].1, 6);
}

#[tokio::test]
async fn alarm_missing_key() {
    let store = InMemoryAlarmStore::new();
    let updated = store
        .update_alarm(7, alarm("d1", "fire", "报警中", Utc::now()))
        .await
        .expect("update");
    assert!(updated.is_none());
    assert!(!store.delete_alarm(7).await.expect("delete"));
}
