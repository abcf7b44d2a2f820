//! Order API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/orders | GET | 历史订单 (`?status=&date=`) |
//! | /api/orders | POST | 下单 (JSON) |
//! | /api/orders/form | POST | 下单 (表单 `items[N][name]`) |
//! | /api/orders/{id}/status | PUT | 修改订单状态 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::place))
        .route("/form", post(handler::place_form))
        .route("/{id}/status", put(handler::update_status))
}
