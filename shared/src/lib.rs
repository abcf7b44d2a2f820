//! Shared types for the restaurant POS
//!
//! Domain models, request/response payloads and the unified error system
//! used by the server and its presentation layer.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
