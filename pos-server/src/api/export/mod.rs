//! CSV 导出
//!
//! `GET /api/export/{menu|tables|orders}` 原样返回数据文件内容 (附件下载)

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::core::ServerState;
use crate::store::StoreTable;
use crate::utils::{AppError, AppResult, PosError};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/export/{table}", get(download))
}

/// GET /api/export/{table} - 下载数据文件
pub async fn download(
    State(state): State<ServerState>,
    Path(table): Path<String>,
) -> AppResult<impl IntoResponse> {
    let table: StoreTable = table
        .parse()
        .map_err(|_| AppError::not_found(format!("Export {table}")))?;

    let store = state.store.read();
    let body = store.export(table).map_err(PosError::from)?;
    let file_name = store
        .paths()
        .path(table)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| format!("{table}.csv"));

    tracing::debug!(table = %table, bytes = body.len(), "Exporting table");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}
