//! Dashboard API 模块

use axum::{Router, extract::State, routing::get};
use shared::models::DashboardSummary;

use crate::core::ServerState;
use crate::reporting;
use crate::utils::{ApiResponse, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard", get(summary))
}

/// GET /api/dashboard - 营业额、订单数、桌台占用、分类营收
pub async fn summary(State(state): State<ServerState>) -> AppResult<ApiResponse<DashboardSummary>> {
    let store = state.store.read();
    Ok(ApiResponse::success(reporting::dashboard(&store)))
}
