//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单管理接口
//! - [`tables`] - 桌台管理接口
//! - [`orders`] - 下单、订单状态、历史订单
//! - [`dashboard`] - 仪表盘统计
//! - [`export`] - CSV 导出

pub mod dashboard;
pub mod export;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(menu::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .merge(export::router())
}

/// Build the application with state and middleware
///
/// Used by both the HTTP server and in-process tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // Trace - 请求追踪 span
        .layer(TraceLayer::new_for_http())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
