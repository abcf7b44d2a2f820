//! Unified Result Types

use super::error::PosError;

/// Result of a core store operation
///
/// Converted to [`shared::error::AppResult`] at the HTTP boundary.
pub type PosResult<T> = Result<T, PosError>;
