//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DiningTable, DiningTableUpsert};

use crate::catalog;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<DiningTable>>> {
    let store = state.store.read();
    Ok(ApiResponse::success(catalog::list_tables(&store)))
}

/// POST /api/tables - 新增或覆盖桌台 (新桌台为空闲)
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableUpsert>,
) -> AppResult<ApiResponse<DiningTable>> {
    let mut store = state.store.write();
    let table = catalog::upsert_table(&mut store, payload)?;
    Ok(ApiResponse::success(table))
}

/// POST /api/tables/{id}/toggle - 切换占用状态
pub async fn toggle(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<DiningTable>> {
    let mut store = state.store.write();
    let table = catalog::toggle_table(&mut store, &id)?;
    Ok(ApiResponse::success(table))
}

/// DELETE /api/tables/{id} - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<DiningTable>> {
    let mut store = state.store.write();
    let table = catalog::delete_table(&mut store, &id)?;
    Ok(ApiResponse::success(table))
}
