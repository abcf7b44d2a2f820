//! 统一错误处理
//!
//! - [`PosError`] - 核心操作错误 (菜单、桌台、订单)
//! - [`AppError`] - HTTP 边界错误 (from shared::error)
//!
//! # 错误分类
//!
//! | PosError | 分类 | ErrorCode |
//! |----------|------|-----------|
//! | `Validation` | 验证错误 | 调用方给定 (ValidationFailed, InvalidPrice, ...) |
//! | `NoValidItems` | 验证错误 | OrderEmpty |
//! | `NotFound` / `InvalidTable` | 不存在 | MenuItemNotFound / TableNotFound / OrderNotFound |
//! | `Conflict` | 冲突 | OrderIdConflict |
//! | `Persistence` | 存储错误 | StorageError / StorageCorrupted |

use std::fmt;
use thiserror::Error;

use crate::store::StoreError;

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Entity kinds addressed by natural key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    MenuItem,
    Table,
    Order,
}

impl Resource {
    fn not_found_code(&self) -> ErrorCode {
        match self {
            Self::MenuItem => ErrorCode::MenuItemNotFound,
            Self::Table => ErrorCode::TableNotFound,
            Self::Order => ErrorCode::OrderNotFound,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MenuItem => "Menu item",
            Self::Table => "Table",
            Self::Order => "Order",
        })
    }
}

/// Core operation errors
///
/// Validation and not-found errors leave every collection untouched.
/// `Persistence` means the mutation was rolled back.
#[derive(Debug, Error)]
pub enum PosError {
    #[error("{1}")]
    Validation(ErrorCode, String),

    #[error("no valid items selected")]
    NoValidItems,

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("{0} {1} not found")]
    NotFound(Resource, String),

    #[error("{0}")]
    Conflict(String),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl PosError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(ErrorCode::ValidationFailed, msg.into())
    }

    pub fn not_found(resource: Resource, key: impl Into<String>) -> Self {
        Self::NotFound(resource, key.into())
    }
}

impl From<PosError> for AppError {
    fn from(err: PosError) -> Self {
        match err {
            PosError::Validation(code, message) => AppError::with_message(code, message),
            PosError::NoValidItems => AppError::new(ErrorCode::OrderEmpty),
            PosError::InvalidTable(table_id) => AppError::with_message(
                ErrorCode::TableNotFound,
                format!("Invalid table: {table_id}"),
            )
            .with_detail("table_id", table_id),
            PosError::NotFound(resource, key) => AppError::with_message(
                resource.not_found_code(),
                format!("{resource} {key} not found"),
            )
            .with_detail("id", key),
            PosError::Conflict(message) => {
                AppError::with_message(ErrorCode::OrderIdConflict, message)
            }
            PosError::Persistence(e) => {
                let code = if e.is_corruption() {
                    ErrorCode::StorageCorrupted
                } else {
                    ErrorCode::StorageError
                };
                AppError::with_message(code, e.to_string())
            }
        }
    }
}
