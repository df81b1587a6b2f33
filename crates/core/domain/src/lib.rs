//! 园区大屏与管理后台共享的领域逻辑。
//!
//! - [`pagination`]：分页参数解析与页数计算
//! - [`period`]：时间窗口、日/月/年分桶、时间解析与格式化
//! - [`trend`]：报警环比

pub mod pagination;
pub mod period;
pub mod trend;

pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, page_count};
pub use period::{
    BucketSeries, BucketUnit, DateWindow, display_local, local_to_utc, parse_instant,
    parse_timestamp,
};
pub use trend::{format_change, month_over_month_change};
