//! 需要真实 Postgres：`PARK_TEST_DATABASE_URL=... cargo test -- --ignored`

use chrono::Utc;
use park_storage::{AlarmInput, AlarmStore, PgAlarmStore, connect_pool, ensure_schema};

#[tokio::test]
#[ignore = "requires PARK_TEST_DATABASE_URL"]
async fn generated_alarm_id_follows_explicit_id() {
    let url = std::env::var("PARK_TEST_DATABASE_URL").expect("PARK_TEST_DATABASE_URL");
    let pool = connect_pool(&url, 2).await.expect("pool");
    ensure_schema(&pool).await.expect("schema");
    sqlx::raw_sql(
        "insert into parks (yq_app_code, yq_name) values ('seq-test', 'seq') \
         on conflict do nothing; \
         insert into devices (device_code, yq_app_code, device_name) \
         values ('seq-dev', 'seq-test', 'seq') on conflict do nothing;",
    )
    .execute(&pool)
    .await
    .expect("seed");

    let store = PgAlarmStore::new(pool.clone());
    let input = || AlarmInput {
        device_code: "seq-dev".to_string(),
        alarm_type: Some("fire".to_string()),
        alarm_level: None,
        alarm_time: Utc::now(),
        alarm_status: Some("报警中".to_string()),
        location_at_alarm: None,
    };
    let max: Option<i64> = sqlx::query_scalar("select max(api_record_id) from alarms")
        .fetch_one(&pool)
        .await
        .expect("max");
    let explicit = max.unwrap_or_default() + 100;

    let supplied = store
        .create_alarm(Some(explicit), input())
        .await
        .expect("explicit id");
    assert_eq!(supplied.api_record_id, explicit);
    let generated = store.create_alarm(None, input()).await.expect("generated id");
    assert_eq!(generated.api_record_id, explicit + 1);

    store.delete_alarm(explicit).await.expect("cleanup");
    store
        .delete_alarm(generated.api_record_id)
        .await
        .expect("cleanup");
}
