//! 输入整理辅助函数
//!
//! - 大屏查询参数：空字符串视同未传
//! - 管理后台请求体转存储写入结构：必填列缺失时返回 `StorageError::NotNull`，
//!   与数据库拒绝 NULL 的结果一致

use api_contract::{
    AlarmRequest, BuildingRequest, DeviceRequest, GenericRecordRequest, GenericStatRequest,
    ParkRequest,
};
use park_storage::{
    AlarmInput, BuildingInput, DeviceInput, GenericRecordInput, GenericStatInput, ParkInput,
    StorageError, require_field, require_timestamp,
};

/// 去除首尾空格，空字符串视为未提供
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// 必填参数全部存在时返回整理后的值
pub fn required_params<const N: usize>(values: [Option<&str>; N]) -> Option<[&str; N]> {
    let mut out = [""; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = non_blank(value)?;
    }
    Some(out)
}

pub fn park_input(req: ParkRequest) -> Result<ParkInput, StorageError> {
    Ok(ParkInput {
        yq_name: require_field(req.yq_name, "yq_name")?,
        kj_type: req.kj_type,
        extra_details_json: req.extra_details_json,
    })
}

pub fn building_input(req: BuildingRequest) -> Result<BuildingInput, StorageError> {
    Ok(BuildingInput {
        yq_app_code: require_field(req.yq_app_code, "yq_app_code")?,
        building_name: require_field(req.building_name, "building_name")?,
        floors_info_json: req.floors_info_json,
    })
}

pub fn device_input(req: DeviceRequest) -> Result<DeviceInput, StorageError> {
    Ok(DeviceInput {
        api_record_id: req.api_record_id,
        yq_app_code: require_field(req.yq_app_code, "yq_app_code")?,
        building_code: req.building_code,
        device_name: require_field(req.device_name, "device_name")?,
        device_type: req.device_type,
        device_status: req.device_status,
        location: req.location,
        responsible_person_name: req.responsible_person_name,
        channels_info_json: req.channels_info_json,
    })
}

/// 报警时间支持 RFC 3339 与本地 `YYYY-MM-DD HH:MM:SS`
pub fn alarm_input(req: AlarmRequest) -> Result<AlarmInput, StorageError> {
    Ok(AlarmInput {
        alarm_time: require_timestamp(req.alarm_time.as_deref(), "alarm_time")?,
        device_code: require_field(req.device_code, "device_code")?,
        alarm_type: req.alarm_type,
        alarm_level: req.alarm_level,
        alarm_status: req.alarm_status,
        location_at_alarm: req.location_at_alarm,
    })
}

pub fn record_input(req: GenericRecordRequest) -> Result<GenericRecordInput, StorageError> {
    Ok(GenericRecordInput {
        record_type: require_field(req.record_type, "record_type")?,
        yq_app_code_context: req.yq_app_code_context,
        related_entity_code: req.related_entity_code,
        record_data_json: req.record_data_json,
    })
}

pub fn stat_input(req: GenericStatRequest) -> Result<GenericStatInput, StorageError> {
    Ok(GenericStatInput {
        metric_source_api: require_field(req.metric_source_api, "metric_source_api")?,
        metric_description: req.metric_description,
        yq_app_code_context: req.yq_app_code_context,
        related_entity_code_context: req.related_entity_code_context,
        time_period_or_timestamp: req.time_period_or_timestamp,
        value_numeric: req.value_numeric,
        value_text: req.value_text,
        value_complex_json: req.value_complex_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(non_blank(Some("  dl ")), Some("dl"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn required_params_need_every_value() {
        assert_eq!(
            required_params([Some("dl"), Some("2025")]),
            Some(["dl", "2025"])
        );
        assert_eq!(required_params([Some("dl"), Some("")]), None);
    }

    #[test]
    fn missing_required_column_is_not_null_error() {
        let err = park_input(ParkRequest::default()).expect_err("missing name");
        assert!(matches!(err, StorageError::NotNull("yq_name")));

        let err = alarm_input(AlarmRequest {
            device_code: Some("d1".to_string()),
            alarm_time: Some("yesterday".to_string()),
            ..AlarmRequest::default()
        })
        .expect_err("bad time");
        assert!(matches!(
            err,
            StorageError::Invalid {
                column: "alarm_time",
                ..
            }
        ));
    }
}
