//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{MenuItem, MenuItemUpdate, MenuItemUpsert};

use crate::catalog;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult};

/// GET /api/menu - 获取全部菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let store = state.store.read();
    Ok(ApiResponse::success(catalog::list_menu(&store)))
}

/// POST /api/menu - 新增或覆盖菜品
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemUpsert>,
) -> AppResult<ApiResponse<MenuItem>> {
    let mut store = state.store.write();
    let item = catalog::upsert_menu_item(&mut store, payload)?;
    Ok(ApiResponse::success(item))
}

/// PUT /api/menu/{name} - 修改价格与上架状态
pub async fn update(
    State(state): State<ServerState>,
    Path(name): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<ApiResponse<MenuItem>> {
    let mut store = state.store.write();
    let item = catalog::update_menu_item(&mut store, &name, payload)?;
    Ok(ApiResponse::success(item))
}

/// DELETE /api/menu/{name} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<ApiResponse<MenuItem>> {
    let mut store = state.store.write();
    let item = catalog::delete_menu_item(&mut store, &name)?;
    Ok(ApiResponse::success(item))
}
