//! 集成测试公共工具

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, Response, StatusCode};
use pos_server::{Config, ServerState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// 独立数据目录 + 应用
pub struct TestApp {
    pub dir: TempDir,
    pub state: ServerState,
    pub app: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        Self::with_dir(dir)
    }

    /// 在已有数据目录上启动 (用于预置 CSV 文件)
    pub fn with_dir(dir: TempDir) -> Self {
        let mut config = Config::with_overrides(dir.path().to_string_lossy(), 0);
        config.menu_file = "menu.csv".into();
        config.tables_file = "tables.csv".into();
        config.orders_file = "orders.csv".into();
        let state = ServerState::initialize(&config).expect("initialize state");
        let app = pos_server::api::build_app(state.clone());
        Self { dir, state, app }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.expect("oneshot")
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");
        let response = self.send(request).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    pub async fn form(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                http::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .expect("request");
        let response = self.send(request).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    /// Burger 8.00 (Food), Cola 2.50 (Drinks), Soup (unavailable), table T1 (4 seats)
    pub async fn seed(&self) {
        for item in [
            serde_json::json!({"name": "Burger", "category": "Food", "price": 8.0}),
            serde_json::json!({"name": "Cola", "category": "Drinks", "price": 2.5}),
            serde_json::json!({"name": "Soup", "category": "Food", "price": 5.0, "available": false}),
        ] {
            let (status, _) = self.json(Method::POST, "/api/menu", Some(item)).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, _) = self
            .json(
                Method::POST,
                "/api/tables",
                Some(serde_json::json!({"table_id": "T1", "seats": 4})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    /// 当前桌台占用状态
    pub async fn occupied(&self, table_id: &str) -> bool {
        let (_, body) = self.json(Method::GET, "/api/tables", None).await;
        body["data"]
            .as_array()
            .expect("tables")
            .iter()
            .find(|t| t["table_id"] == table_id)
            .map(|t| t["occupied"].as_bool().expect("occupied"))
            .expect("table exists")
    }
}
