//! Dashboard Model

use serde::{Deserialize, Serialize};

/// Revenue attributed to one menu category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: f64,
}

/// Dashboard aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub menu_items: usize,
    pub completed_orders: usize,
    /// Sum of completed order totals
    pub total_revenue: f64,
    pub occupied_tables: usize,
    pub total_tables: usize,
    /// Chart series, highest revenue first
    pub revenue_by_category: Vec<CategoryRevenue>,
}
