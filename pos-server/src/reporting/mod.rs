//! 报表模块 - 仪表盘统计

mod dashboard;

pub use dashboard::{UNKNOWN_CATEGORY, dashboard};
