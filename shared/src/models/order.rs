//! Order Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Order lifecycle stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    /// Token used in files and forms
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0:?}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// Order entity
///
/// `items` and `total` are a snapshot taken at placement time; later menu
/// edits never change them. `table_id` is a weak reference and may dangle
/// once the table is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub table_id: String,
    /// Total amount in currency unit
    pub total: f64,
    /// Menu item name -> quantity
    ///
    /// Keys are kept sorted, so a rewrite of a legacy row lists the same
    /// items in name order rather than in their original order.
    pub items: BTreeMap<String, u32>,
    pub customer_name: String,
    pub status: OrderStatus,
    /// Placement time (Unix millis), absent for rows written before it was recorded
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub notes: String,
}

impl Order {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

/// Quantity as submitted: a JSON number or the raw text of a form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(i64),
    Text(String),
}

impl QuantityInput {
    /// Integer value, `None` when the text is not an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One requested order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<QuantityInput>,
}

/// Place order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub table_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub notes: String,
    pub items: Vec<OrderLineInput>,
}

/// Result of a successful placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: String,
    pub table_id: String,
    pub total: f64,
    /// Human-readable confirmation line
    pub message: String,
}

/// Update order status payload
///
/// Kept as text so an unknown token is reported as a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

/// Order history query (`?status=&date=`)
///
/// Empty values mean "no filter", as submitted by a blank select.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub status: Option<String>,
    /// Calendar date `YYYY-MM-DD` (UTC)
    #[serde(default)]
    pub date: Option<String>,
}

/// Filtered order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderHistory {
    pub orders: Vec<Order>,
    /// Sum of totals of the listed orders that are completed
    pub completed_revenue: f64,
}
