//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`PosError`] - 核心操作错误
//! - [`AppError`] - HTTP 边界错误 (from shared::error)
//! - 输入验证、日志

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, PosError, Resource};
pub use result::PosResult;
