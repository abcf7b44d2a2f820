//! Order API Handlers

use axum::{
    Form, Json,
    extract::{Path, Query, State},
};
use shared::models::{
    Order, OrderHistory, OrderQuery, OrderReceipt, OrderStatusUpdate, PlaceOrderRequest,
};

use crate::core::ServerState;
use crate::orders::{self, OrderFilter};
use crate::utils::{ApiResponse, AppResult};

/// GET /api/orders - 历史订单，可按状态与日期筛选
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<ApiResponse<OrderHistory>> {
    let filter = OrderFilter::from_query(&query)?;
    let store = state.store.read();
    Ok(ApiResponse::success(orders::list_orders(&store, &filter)))
}

/// POST /api/orders - 下单
pub async fn place(
    State(state): State<ServerState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<ApiResponse<OrderReceipt>> {
    place_request(&state, payload)
}

/// POST /api/orders/form - 以扁平表单下单
pub async fn place_form(
    State(state): State<ServerState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<ApiResponse<OrderReceipt>> {
    let request = orders::decode_order_form(pairs)?;
    place_request(&state, request)
}

fn place_request(
    state: &ServerState,
    request: PlaceOrderRequest,
) -> AppResult<ApiResponse<OrderReceipt>> {
    let mut store = state.store.write();
    let receipt = orders::place_order(&mut store, request, &mut rand::thread_rng())?;
    Ok(ApiResponse::success_with_message(receipt.message.clone(), receipt))
}

/// PUT /api/orders/{id}/status - 修改订单状态 (完成时释放桌台)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<ApiResponse<Order>> {
    let status = orders::parse_status(&payload.status)?;
    let mut store = state.store.write();
    let order = orders::update_order_status(&mut store, &id, status)?;
    Ok(ApiResponse::success(order))
}
