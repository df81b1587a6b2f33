use api_contract::dashboard::{
    AccountBindRequest, AlarmStatisticsDto, DeviceStatisticsDto, EnergyPointDto,
    VideoChannelDto,
};
use api_contract::{AlarmRequest, ParkRequest};
use serde_json::json;

#[test]
fn park_request_keeps_json_field() {
    let payload = r#"{"yq_app_code":"p1","yq_name":"Park One","extra_details_json":{"area":12}}"#;
    let req: ParkRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.yq_app_code.as_deref(), Some("p1"));
    assert_eq!(req.kj_type, None);
    assert_eq!(req.extra_details_json, Some(json!({"area": 12})));
}

#[test]
fn alarm_request_without_id() {
    let payload = r#"{"device_code":"d1","alarm_time":"2025-05-20T08:00:00Z"}"#;
    let req: AlarmRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.api_record_id, None);
    assert_eq!(req.device_code.as_deref(), Some("d1"));
}

#[test]
fn bind_request_is_camel_case() {
    let payload = r#"{"yqAppCode":"dl","accountName":"admin_dl"}"#;
    let req: AccountBindRequest = serde_json::from_str(payload).expect("parse");
    assert_eq!(req.yq_app_code.as_deref(), Some("dl"));
    assert_eq!(req.account_name.as_deref(), Some("admin_dl"));
}

#[test]
fn statistics_use_numeric_keys() {
    let devices = DeviceStatisticsDto {
        total: 3,
        offline: 1,
        online: 2,
    };
    let value = serde_json::to_value(devices).expect("serialize");
    assert_eq!(value, json!({"1": 3, "2": 1, "3": 2}));

    let alarms = AlarmStatisticsDto {
        total: "4".to_string(),
        current_month: "2".to_string(),
        last_month: "0".to_string(),
        change: "100.00".to_string(),
    };
    let value = serde_json::to_value(alarms).expect("serialize");
    assert_eq!(value, json!({"1": "4", "2": "2", "3": "0", "4": "100.00"}));
}

#[test]
fn energy_point_prints_integral_values_compactly() {
    let zero = EnergyPointDto {
        time: "2025-05-20".to_string(),
        time_type: None,
        common: 0.0,
    };
    assert_eq!(
        serde_json::to_string(&zero).expect("serialize"),
        r#"{"time":"2025-05-20","timeType":null,"common":0}"#
    );
    let fractional = EnergyPointDto {
        time: "2025-05".to_string(),
        time_type: None,
        common: 12.5,
    };
    let value = serde_json::to_value(fractional).expect("serialize");
    assert_eq!(value["common"], json!(12.5));
}

#[test]
fn video_channel_is_camel_case() {
    let channel = VideoChannelDto {
        id: None,
        create_time: None,
        update_time: None,
        yq_app_code: "dl".to_string(),
        kj_type: None,
        name: "Gate cam".to_string(),
        code: "cam-1".to_string(),
        gb_id: None,
        stream_id: "0".to_string(),
        stream_status: None,
        device_id: "0".to_string(),
        device_status: "1".to_string(),
        device_code: "cam-1".to_string(),
        device_name: "Gate cam".to_string(),
        protocol_type: None,
        organization_code: "DLO0000000".to_string(),
        organization_name: Some("达利集团".to_string()),
    };
    let value = serde_json::to_value(channel).expect("serialize");
    assert_eq!(value["organizationCode"], "DLO0000000");
    assert_eq!(value["streamId"], "0");
    assert!(value.get("gbId").is_some());
    assert!(value.get("organization_code").is_none());
}
