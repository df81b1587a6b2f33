//! Handlers 模块

pub mod alarms;
pub mod buildings;
pub mod dashboard;
pub mod devices;
pub mod generic_records;
pub mod generic_stats;
pub mod health;
pub mod parks;

pub use alarms::*;
pub use buildings::*;
pub use dashboard::*;
pub use devices::*;
pub use generic_records::*;
pub use generic_stats::*;
pub use health::*;
pub use parks::*;
