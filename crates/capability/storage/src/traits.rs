//! 存储接口 Trait 定义
//!
//! 定义所有资源存储的异步接口：
//! - ParkStore：园区
//! - BuildingStore：楼栋
//! - DeviceStore：设备（含大屏过滤、分页、计数）
//! - AlarmStore：报警（含分页、按类型计数、趋势分组）
//! - GenericRecordStore：通用记录
//! - GenericStatStore：通用统计（含过滤与求和）
//!
//! 约定：
//! - 查询不存在的主键返回 `None`，更新返回 `Ok(None)`，删除返回 `Ok(false)`
//! - 所有接口返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{
    AlarmFilter, AlarmInput, AlarmRecord, BuildingInput, BuildingRecord, DeviceFilter,
    DeviceInput, DeviceRecord, GenericRecord, GenericRecordInput, GenericStat, GenericStatInput,
    ParkInput, ParkRecord, StatFilter,
};
use async_trait::async_trait;
use domain::{BucketUnit, PageRequest};

/// 园区存储接口
#[async_trait]
pub trait ParkStore: Send + Sync {
    async fn list_parks(&self) -> Result<Vec<ParkRecord>, StorageError>;

    async fn find_park(&self, yq_app_code: &str) -> Result<Option<ParkRecord>, StorageError>;

    /// 批量查找园区（用于拼装大屏记录的园区名称）
    async fn find_parks_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<ParkRecord>, StorageError>;

    async fn create_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<ParkRecord, StorageError>;

    async fn update_park(
        &self,
        yq_app_code: &str,
        input: ParkInput,
    ) -> Result<Option<ParkRecord>, StorageError>;

    async fn delete_park(&self, yq_app_code: &str) -> Result<bool, StorageError>;
}

/// 楼栋存储接口
#[async_trait]
pub trait BuildingStore: Send + Sync {
    async fn list_buildings(&self) -> Result<Vec<BuildingRecord>, StorageError>;

    /// 指定园区下的楼栋
    async fn list_buildings_by_park(
        &self,
        yq_app_code: &str,
    ) -> Result<Vec<BuildingRecord>, StorageError>;

    async fn find_buildings_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<BuildingRecord>, StorageError>;

    async fn create_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<BuildingRecord, StorageError>;

    async fn update_building(
        &self,
        building_code: &str,
        input: BuildingInput,
    ) -> Result<Option<BuildingRecord>, StorageError>;

    async fn delete_building(&self, building_code: &str) -> Result<bool, StorageError>;
}

/// 设备存储接口
#[async_trait]
pub trait DeviceStore: Send + Sync {
    async fn list_devices(&self) -> Result<Vec<DeviceRecord>, StorageError>;

    /// 按条件查询设备（按设备编码排序），`page` 为 `None` 时返回全部
    async fn query_devices(
        &self,
        filter: &DeviceFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<DeviceRecord>, StorageError>;

    async fn count_devices(&self, filter: &DeviceFilter) -> Result<i64, StorageError>;

    /// 批量查找设备（用于拼装报警记录的设备信息）
    async fn find_devices_by_codes(
        &self,
        codes: &[String],
    ) -> Result<Vec<DeviceRecord>, StorageError>;

    async fn create_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<DeviceRecord, StorageError>;

    async fn update_device(
        &self,
        device_code: &str,
        input: DeviceInput,
    ) -> Result<Option<DeviceRecord>, StorageError>;

    async fn delete_device(&self, device_code: &str) -> Result<bool, StorageError>;
}

/// 报警存储接口
#[async_trait]
pub trait AlarmStore: Send + Sync {
    async fn list_alarms(&self) -> Result<Vec<AlarmRecord>, StorageError>;

    /// 按条件查询报警（报警时间倒序），`page` 为 `None` 时返回全部
    async fn query_alarms(
        &self,
        filter: &AlarmFilter,
        page: Option<PageRequest>,
    ) -> Result<Vec<AlarmRecord>, StorageError>;

    async fn count_alarms(&self, filter: &AlarmFilter) -> Result<i64, StorageError>;

    /// 按报警类型计数，数量倒序，最多 `limit` 组
    async fn count_alarms_by_type(
        &self,
        filter: &AlarmFilter,
        limit: i64,
    ) -> Result<Vec<(Option<String>, i64)>, StorageError>;

    /// 按报警时间分组计数，返回 `(桶 key, 数量)` 升序
    async fn alarm_trend(
        &self,
        filter: &AlarmFilter,
        unit: BucketUnit,
    ) -> Result<Vec<(String, i64)>, StorageError>;

    /// 新增报警；`api_record_id` 为 `None` 时生成
    async fn create_alarm(
        &self,
        api_record_id: Option<i64>,
        input: AlarmInput,
    ) -> Result<AlarmRecord, StorageError>;

    async fn update_alarm(
        &self,
        api_record_id: i64,
        input: AlarmInput,
    ) -> Result<Option<AlarmRecord>, StorageError>;

    async fn delete_alarm(&self, api_record_id: i64) -> Result<bool, StorageError>;
}

/// 通用记录存储接口
#[async_trait]
pub trait GenericRecordStore: Send + Sync {
    async fn list_records(&self) -> Result<Vec<GenericRecord>, StorageError>;

    async fn create_record(&self, input: GenericRecordInput)
    -> Result<GenericRecord, StorageError>;

    async fn update_record(
        &self,
        record_id: i64,
        input: GenericRecordInput,
    ) -> Result<Option<GenericRecord>, StorageError>;

    async fn delete_record(&self, record_id: i64) -> Result<bool, StorageError>;
}

/// 通用统计存储接口
#[async_trait]
pub trait GenericStatStore: Send + Sync {
    async fn list_stats(&self) -> Result<Vec<GenericStat>, StorageError>;

    async fn query_stats(&self, filter: &StatFilter) -> Result<Vec<GenericStat>, StorageError>;

    /// `value_numeric` 求和，无匹配行时为 `None`
    async fn sum_numeric(&self, filter: &StatFilter) -> Result<Option<f64>, StorageError>;

    async fn create_stat(&self, input: GenericStatInput) -> Result<GenericStat, StorageError>;

    async fn update_stat(
        &self,
        entry_id: i64,
        input: GenericStatInput,
    ) -> Result<Option<GenericStat>, StorageError>;

    async fn delete_stat(&self, entry_id: i64) -> Result<bool, StorageError>;
}
