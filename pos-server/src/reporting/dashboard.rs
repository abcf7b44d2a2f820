//! Dashboard aggregates
//!
//! Revenue by category splits each completed order's total across its lines
//! in proportion to `current price × quantity`. When a line's item has left
//! the menu (or every price is zero) the weights fall back to quantities and
//! the missing items count as [`UNKNOWN_CATEGORY`]. Shares are rounded to
//! cents; the last line absorbs the rounding residue so the shares of one
//! order always add up to its total.

use rust_decimal::Decimal;
use shared::models::{CategoryRevenue, DashboardSummary, MenuItem, Order};
use std::collections::BTreeMap;

use crate::orders::money;
use crate::store::PosStore;

/// Category for revenue that cannot be attributed to a menu item
pub const UNKNOWN_CATEGORY: &str = "Unknown";

pub fn dashboard(store: &PosStore) -> DashboardSummary {
    let completed: Vec<&Order> = store.orders().iter().filter(|o| o.is_completed()).collect();

    let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in &completed {
        for (category, share) in split_order(store.menu(), order) {
            *by_category.entry(category).or_default() += share;
        }
    }

    let mut revenue_by_category: Vec<(String, Decimal)> = by_category.into_iter().collect();
    // BTreeMap order is by name; a stable sort keeps it for equal revenue
    revenue_by_category.sort_by(|a, b| b.1.cmp(&a.1));

    DashboardSummary {
        menu_items: store.menu().len(),
        completed_orders: completed.len(),
        total_revenue: money::to_f64(money::sum_amounts(completed.iter().map(|o| o.total))),
        occupied_tables: store.tables().values().filter(|t| t.occupied).count(),
        total_tables: store.tables().len(),
        revenue_by_category: revenue_by_category
            .into_iter()
            .map(|(category, revenue)| CategoryRevenue {
                category,
                revenue: money::to_f64(revenue),
            })
            .collect(),
    }
}

/// `(category, share)` per line; shares sum to the order total
fn split_order(menu: &BTreeMap<String, MenuItem>, order: &Order) -> Vec<(String, Decimal)> {
    let total = money::to_decimal(order.total);
    if order.items.is_empty() {
        return vec![(UNKNOWN_CATEGORY.to_string(), total)];
    }

    let weighted = line_weights(menu, order);
    let weight_sum: Decimal = weighted.iter().map(|(_, w)| *w).sum();

    let mut shares = Vec::with_capacity(weighted.len());
    let mut allocated = Decimal::ZERO;
    let last = weighted.len() - 1;
    for (i, (category, weight)) in weighted.into_iter().enumerate() {
        let share = if i == last {
            total - allocated
        } else {
            money::round_money(total * weight / weight_sum)
        };
        allocated += share;
        shares.push((category, share));
    }
    shares
}

/// Price weights when every item is priced on the menu, else quantity weights
fn line_weights(menu: &BTreeMap<String, MenuItem>, order: &Order) -> Vec<(String, Decimal)> {
    let priced: Option<Vec<(String, Decimal)>> = order
        .items
        .iter()
        .map(|(name, qty)| {
            menu.get(name)
                .map(|item| (item.category.clone(), money::line_total(item.price, *qty)))
        })
        .collect();

    if let Some(priced) = priced
        && priced.iter().any(|(_, w)| !w.is_zero())
    {
        return priced;
    }

    order
        .items
        .iter()
        .map(|(name, qty)| {
            let category = menu
                .get(name)
                .map_or(UNKNOWN_CATEGORY, |item| item.category.as_str());
            (category.to_string(), Decimal::from(*qty))
        })
        .collect()
}
