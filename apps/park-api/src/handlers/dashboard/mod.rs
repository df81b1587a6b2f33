//! 大屏接口（/api/bigdata）
//!
//! 按大屏分区组织：
//! - `operations`：运营态势（dashOp）
//! - `business`：业务感知（dashBiz）
//! - `security`：安全态势（dashSecure）
//! - `energy`：能耗态势（dashEnergy）
//! - `group`：集团概况（dashGroup）
//! - `gateway`：视频流、楼层点位等外部网关
//!
//! 所有响应使用 `{code, msg, data}` 封装。设备、报警记录需要拼装园区与楼栋名称，
//! 这里统一先批量查出关联行，再在内存中组装。

pub mod business;
pub mod energy;
pub mod gateway;
pub mod group;
pub mod operations;
pub mod placeholders;
pub mod security;

pub use business::*;
pub use energy::*;
pub use gateway::*;
pub use group::*;
pub use operations::*;
pub use security::*;

use crate::AppState;
use crate::utils::non_blank;
use api_contract::dashboard::{AlarmListItemDto, DeviceListItemDto};
use chrono::{Local, NaiveDate};
use domain::{PageRequest, display_local};
use park_storage::{
    AlarmRecord, BuildingRecord, DeviceFilter, DeviceRecord, ParkRecord, StorageError,
};
use std::collections::{BTreeSet, HashMap};

/// 同步来源标记
const SYNC_TYPE: &str = "db";

/// 大屏查询参数（camelCase），全部可选；空字符串视同未传。
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub yq_app_code: Option<String>,
    pub device_name: Option<String>,
    pub device_status: Option<String>,
    pub alarm_type: Option<String>,
    pub alarm_status: Option<String>,
    pub current: Option<String>,
    pub size: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
    pub building_code: Option<String>,
    pub time_period: Option<String>,
    pub floor: Option<String>,
}

impl DashboardQuery {
    pub fn yq(&self) -> Option<&str> {
        non_blank(self.yq_app_code.as_deref())
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::from_query(self.current.as_deref(), self.size.as_deref())
    }
}

/// 服务器本地日期
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn distinct<'a>(codes: impl Iterator<Item = &'a str>) -> Vec<String> {
    codes
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 把设备维度的条件（园区、设备名称）解析为设备编码集合。
///
/// 两个条件都未提供时返回 `None`（不限设备）；提供时两者同时生效。
pub(crate) async fn device_scope(
    state: &AppState,
    yq_app_code: Option<&str>,
    device_name: Option<&str>,
) -> Result<Option<Vec<String>>, StorageError> {
    if yq_app_code.is_none() && device_name.is_none() {
        return Ok(None);
    }
    let filter = DeviceFilter {
        yq_app_code: owned(yq_app_code),
        name_contains: owned(device_name),
        ..DeviceFilter::default()
    };
    let devices = state.device_store.query_devices(&filter, None).await?;
    Ok(Some(
        devices.into_iter().map(|device| device.device_code).collect(),
    ))
}

/// 园区、楼栋名称查找表
struct Names {
    parks: HashMap<String, ParkRecord>,
    buildings: HashMap<String, BuildingRecord>,
}

async fn load_names<'a>(
    state: &AppState,
    devices: impl Iterator<Item = &'a DeviceRecord> + Clone,
) -> Result<Names, StorageError> {
    let park_codes = distinct(devices.clone().map(|device| device.yq_app_code.as_str()));
    let building_codes = distinct(devices.filter_map(|device| device.building_code.as_deref()));
    let parks = state
        .park_store
        .find_parks_by_codes(&park_codes)
        .await?
        .into_iter()
        .map(|park| (park.yq_app_code.clone(), park))
        .collect();
    let buildings = if building_codes.is_empty() {
        HashMap::new()
    } else {
        state
            .building_store
            .find_buildings_by_codes(&building_codes)
            .await?
            .into_iter()
            .map(|building| (building.building_code.clone(), building))
            .collect()
    };
    Ok(Names { parks, buildings })
}

impl Names {
    fn park(&self, device: &DeviceRecord) -> Option<&ParkRecord> {
        self.parks.get(&device.yq_app_code)
    }

    fn building(&self, device: &DeviceRecord) -> Option<&BuildingRecord> {
        device
            .building_code
            .as_ref()
            .and_then(|code| self.buildings.get(code))
    }
}

/// 设备行拼装为设备状态列表记录
pub(crate) async fn device_list_items(
    state: &AppState,
    devices: Vec<DeviceRecord>,
) -> Result<Vec<DeviceListItemDto>, StorageError> {
    if devices.is_empty() {
        return Ok(Vec::new());
    }
    let names = load_names(state, devices.iter()).await?;
    Ok(devices
        .into_iter()
        .map(|device| {
            let park = names.park(&device);
            let building = names.building(&device);
            let time = display_local(device.last_updated);
            DeviceListItemDto {
                id: device.api_record_id,
                sid: None,
                kj_type: String::new(),
                sync_type: SYNC_TYPE.to_string(),
                yq_app_code: park.map(|park| park.yq_app_code.clone()),
                create_time: Some(time.clone()),
                update_time: Some(time),
                yq_name: park.map(|park| park.yq_name.clone()),
                device_name: device.device_name,
                device_code: device.device_code,
                device_type: device.device_type,
                building_name: building.map(|building| building.building_name.clone()),
                building_code: building.map(|building| building.building_code.clone()),
                location: device.location,
                device_status: device.device_status,
                person_code: None,
                person_name: device.responsible_person_name,
            }
        })
        .collect())
}

/// 报警行拼装为报警列表记录（设备、园区、楼栋信息经设备关联）
pub(crate) async fn alarm_list_items(
    state: &AppState,
    alarms: Vec<AlarmRecord>,
) -> Result<Vec<AlarmListItemDto>, StorageError> {
    if alarms.is_empty() {
        return Ok(Vec::new());
    }
    let device_codes = distinct(alarms.iter().map(|alarm| alarm.device_code.as_str()));
    let devices: HashMap<String, DeviceRecord> = state
        .device_store
        .find_devices_by_codes(&device_codes)
        .await?
        .into_iter()
        .map(|device| (device.device_code.clone(), device))
        .collect();
    let names = load_names(state, devices.values()).await?;

    Ok(alarms
        .into_iter()
        .map(|alarm| {
            let device = devices.get(&alarm.device_code);
            let park = device.and_then(|device| names.park(device));
            let building = device.and_then(|device| names.building(device));
            let alarm_time = display_local(alarm.alarm_time);
            AlarmListItemDto {
                id: alarm.api_record_id,
                sid: None,
                kj_type: String::new(),
                sync_type: SYNC_TYPE.to_string(),
                yq_app_code: park.map(|park| park.yq_app_code.clone()),
                create_time: alarm_time.clone(),
                update_time: Some(display_local(alarm.last_updated)),
                yq_name: park.map(|park| park.yq_name.clone()),
                device_code: alarm.device_code,
                device_name: device.map(|device| device.device_name.clone()),
                device_type: device.and_then(|device| device.device_type.clone()),
                building_name: building.map(|building| building.building_name.clone()),
                building_code: building.map(|building| building.building_code.clone()),
                location: alarm.location_at_alarm,
                person_code: None,
                person_name: device.and_then(|device| device.responsible_person_name.clone()),
                alarm_type: alarm.alarm_type,
                alarm_level: alarm.alarm_level,
                alarm_time: alarm_time.clone(),
                alarm_code: alarm_time,
                alarm_status: alarm.alarm_status,
            }
        })
        .collect())
}
