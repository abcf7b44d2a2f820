//! Order history filtering

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{Order, OrderHistory, OrderQuery, OrderStatus};

use super::lifecycle::parse_status;
use super::money;
use crate::store::PosStore;
use crate::utils::{PosError, PosResult};

/// Parsed history filter; `None` fields match everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
}

impl OrderFilter {
    /// Parse query parameters, treating blank values as absent
    pub fn from_query(query: &OrderQuery) -> PosResult<Self> {
        let status = match non_blank(query.status.as_deref()) {
            Some(token) => Some(parse_status(token)?),
            None => None,
        };
        let date = match non_blank(query.date.as_deref()) {
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                PosError::Validation(
                    ErrorCode::InvalidFormat,
                    format!("date must be YYYY-MM-DD, got {raw:?}"),
                )
            })?),
            None => None,
        };
        Ok(Self { status, date })
    }

    /// Orders without a creation time never match a date
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }
        if let Some(date) = self.date {
            return order
                .created_at
                .and_then(shared::util::utc_date)
                .is_some_and(|d| d == date);
        }
        true
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Orders in file order, plus the revenue of the completed ones listed
pub fn list_orders(store: &PosStore, filter: &OrderFilter) -> OrderHistory {
    let orders: Vec<Order> = store
        .orders()
        .iter()
        .filter(|o| filter.matches(o))
        .cloned()
        .collect();

    let completed_revenue = money::to_f64(money::sum_amounts(
        orders.iter().filter(|o| o.is_completed()).map(|o| o.total),
    ));

    OrderHistory {
        orders,
        completed_revenue,
    }
}
