//! Order status transitions

use shared::error::ErrorCode;
use shared::models::{Order, OrderStatus};

use crate::store::{PosStore, StoreTable};
use crate::utils::{PosError, PosResult, Resource};

/// Parse a status token (`Pending` / `Completed`)
pub fn parse_status(token: &str) -> PosResult<OrderStatus> {
    token.trim().parse().map_err(|e: shared::models::UnknownOrderStatus| {
        PosError::Validation(ErrorCode::InvalidOrderStatus, e.to_string())
    })
}

/// Set the status of the first order with `order_id`
///
/// Completing an order frees its table when the table still exists.
/// Completed -> Pending is allowed and leaves the table alone.
pub fn update_order_status(
    store: &mut PosStore,
    order_id: &str,
    status: OrderStatus,
) -> PosResult<Order> {
    let (order, table_freed) =
        store.transact(&[StoreTable::Orders, StoreTable::Tables], |s| {
            let order = s
                .orders
                .iter_mut()
                .find(|o| o.order_id == order_id)
                .ok_or_else(|| PosError::not_found(Resource::Order, order_id))?;
            order.status = status;
            let order = order.clone();

            let mut table_freed = false;
            if status == OrderStatus::Completed
                && let Some(table) = s.tables.get_mut(&order.table_id)
            {
                table.occupied = false;
                table_freed = true;
            }
            Ok((order, table_freed))
        })?;

    tracing::info!(
        order_id = %order.order_id,
        status = %order.status,
        table_id = %order.table_id,
        table_freed,
        "Order status updated"
    );
    Ok(order)
}
