use park_storage::{
    BuildingInput, BuildingStore, InMemoryBuildingStore, InMemoryParkStore, ParkInput, ParkStore,
    StorageError,
};
use serde_json::json;

fn park_input(name: &str) -> ParkInput {
    ParkInput {
        yq_name: name.to_string(),
        kj_type: Some("industrial".to_string()),
        extra_details_json: Some(json!({"area": 1200})),
    }
}

#[tokio::test]
async fn park_in_memory_crud() {
    let store = InMemoryParkStore::new();
    let created = store
        .create_park("p1", park_input("Park One"))
        .await
        .expect("create");
    assert_eq!(created.yq_app_code, "p1");

    let got = store.find_park("p1").await.expect("find").expect("park");
    assert_eq!(got, created);

    let updated = store
        .update_park(
            "p1",
            ParkInput {
                yq_name: "Park Renamed".to_string(),
                ..ParkInput::default()
            },
        )
        .await
        .expect("update")
        .expect("park");
    assert_eq!(updated.yq_app_code, "p1");
    assert_eq!(updated.yq_name, "Park Renamed");
    assert_eq!(updated.kj_type, None);
    assert_eq!(updated.extra_details_json, None);

    assert!(store.delete_park("p1").await.expect("delete"));
    assert!(store.find_park("p1").await.expect("find").is_none());
}

#[tokio::test]
async fn park_missing_key_reports_none() {
    let store = InMemoryParkStore::new();
    let updated = store
        .update_park("nope", park_input("x"))
        .await
        .expect("update");
    assert!(updated.is_none());
    assert!(!store.delete_park("nope").await.expect("delete"));
}

#[tokio::test]
async fn park_duplicate_key_conflicts() {
    let store = InMemoryParkStore::new();
    store
        .create_park("p1", park_input("Park One"))
        .await
        .expect("create");
    let err = store
        .create_park("p1", park_input("Again"))
        .await
        .expect_err("duplicate");
    assert!(matches!(err, StorageError::Conflict(_)));
}

#[tokio::test]
async fn parks_by_codes() {
    let store = InMemoryParkStore::new();
    store.create_park("a", park_input("A")).await.expect("create");
    store.create_park("b", park_input("B")).await.expect("create");
    let found = store
        .find_parks_by_codes(&["b".to_string(), "zz".to_string()])
        .await
        .expect("find");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].yq_name, "B");
}

#[tokio::test]
async fn buildings_by_park() {
    let store = InMemoryBuildingStore::new();
    for (code, park) in [("b1", "p1"), ("b2", "p1"), ("b3", "p2")] {
        store
            .create_building(
                code,
                BuildingInput {
                    yq_app_code: park.to_string(),
                    building_name: format!("Building {code}"),
                    floors_info_json: None,
                },
            )
            .await
            .expect("create");
    }
    let list = store.list_buildings_by_park("p1").await.expect("list");
    let codes: Vec<&str> = list.iter().map(|b| b.building_code.as_str()).collect();
    assert_eq!(codes, vec!["b1", "b2"]);

    let all = store.list_buildings().await.expect("list");
    assert_eq!(all.len(), 3);
}
