//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub table_id: String,
    pub seats: u32,
    pub occupied: bool,
}

/// Create-or-replace dining table payload
///
/// `seats` is signed so a non-positive count reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableUpsert {
    pub table_id: String,
    pub seats: i64,
}
