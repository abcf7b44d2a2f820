//! HTTP 端到端测试 - 菜单、桌台、下单、订单状态、报表、导出

mod common;

use common::TestApp;
use http::{Method, Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_place_and_complete_order() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/orders",
            Some(json!({
                "table_id": "T1",
                "customer_name": "Ann",
                "items": [{"name": "Burger", "quantity": 2}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 16.0);
    let order_id = body["data"]["order_id"].as_str().unwrap().to_string();
    assert_eq!(order_id.len(), 8);
    assert_eq!(
        body["message"],
        format!("Order {order_id} placed for Table T1. Total: $16.00")
    );
    assert!(app.occupied("T1").await);

    let (_, body) = app.json(Method::GET, "/api/orders", None).await;
    assert_eq!(body["data"]["orders"][0]["status"], "Pending");

    let (status, body) = app
        .json(
            Method::PUT,
            &format!("/api/orders/{order_id}/status"),
            Some(json!({"status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Completed");
    assert!(!app.occupied("T1").await);

    let (_, body) = app.json(Method::GET, "/api/dashboard", None).await;
    assert_eq!(body["data"]["completed_orders"], 1);
    assert_eq!(body["data"]["total_revenue"], 16.0);
    assert_eq!(body["data"]["revenue_by_category"][0]["category"], "Food");
}

#[tokio::test]
async fn test_only_unavailable_items_rejected() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/orders",
            Some(json!({
                "table_id": "T1",
                "customer_name": "Ann",
                "items": [{"name": "Soup"}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "No valid items selected");

    let (_, body) = app.json(Method::GET, "/api/orders", None).await;
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
    assert!(!app.occupied("T1").await);
}

#[tokio::test]
async fn test_unknown_table_rejected() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/orders",
            Some(json!({
                "table_id": "T9",
                "customer_name": "Ann",
                "items": [{"name": "Burger"}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Invalid table: T9");
    assert_eq!(body["details"]["table_id"], "T9");

    let (_, body) = app.json(Method::GET, "/api/orders", None).await;
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_place_order_from_form() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .form(
            "/api/orders/form",
            "table_id=T1&customer_name=Ann+Lee&notes=no+ice\
             &items%5B0%5D%5Bname%5D=Cola&items%5B0%5D%5Bquantity%5D=2\
             &items%5B1%5D%5Bname%5D=Burger&items%5B1%5D%5Bquantity%5D=",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    // Cola x2 + Burger x1 (blank quantity)
    assert_eq!(body["data"]["total"], 13.0);

    let (_, body) = app.json(Method::GET, "/api/orders", None).await;
    let order = &body["data"]["orders"][0];
    assert_eq!(order["customer_name"], "Ann Lee");
    assert_eq!(order["notes"], "no ice");
    assert_eq!(order["items"]["Cola"], 2);

    let (status, _) = app
        .form("/api/orders/form", "table_id=T1&items%5Bx%5D%5Bname%5D=Cola")
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_quantity_rejected() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::POST,
            "/api/orders",
            Some(json!({
                "table_id": "T1",
                "customer_name": "Ann",
                "items": [{"name": "Burger", "quantity": -1}]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_order_status_errors() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::PUT,
            "/api/orders/NOPE0000/status",
            Some(json!({"status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (status, body) = app
        .json(
            Method::PUT,
            "/api/orders/NOPE0000/status",
            Some(json!({"status": "Served"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);
}

#[tokio::test]
async fn test_complete_after_table_deleted() {
    let app = TestApp::new();
    app.seed().await;

    let (_, body) = app
        .json(
            Method::POST,
            "/api/orders",
            Some(json!({"table_id": "T1", "customer_name": "Ann", "items": [{"name": "Cola"}]})),
        )
        .await;
    let order_id = body["data"]["order_id"].as_str().unwrap().to_string();

    let (status, _) = app.json(Method::DELETE, "/api/tables/T1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .json(
            Method::PUT,
            &format!("/api/orders/{order_id}/status"),
            Some(json!({"status": "Completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["table_id"], "T1");
}

#[tokio::test]
async fn test_menu_and_table_management() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .json(
            Method::PUT,
            "/api/menu/Burger",
            Some(json!({"price": 9.5, "available": false})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], "Food");

    let (status, body) = app
        .json(
            Method::POST,
            "/api/menu",
            Some(json!({"name": "Pie", "category": "Desserts", "price": -1.0})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6003);

    let (status, _) = app.json(Method::DELETE, "/api/menu/Pizza", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.json(Method::POST, "/api/tables/T1/toggle", None).await;
    assert_eq!(body["data"]["occupied"], true);
    let (_, body) = app.json(Method::POST, "/api/tables/T1/toggle", None).await;
    assert_eq!(body["data"]["occupied"], false);

    let (status, _) = app.json(Method::POST, "/api/tables/T9/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_history_filters() {
    let app = TestApp::new();
    app.seed().await;

    for item in ["Burger", "Cola"] {
        app.json(
            Method::POST,
            "/api/orders",
            Some(json!({"table_id": "T1", "customer_name": "Ann", "items": [{"name": item}]})),
        )
        .await;
    }
    let (_, body) = app.json(Method::GET, "/api/orders", None).await;
    let first = body["data"]["orders"][0]["order_id"].as_str().unwrap().to_string();
    app.json(
        Method::PUT,
        &format!("/api/orders/{first}/status"),
        Some(json!({"status": "Completed"})),
    )
    .await;

    let (_, body) = app
        .json(Method::GET, "/api/orders?status=Completed&date=", None)
        .await;
    assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["completed_revenue"], 8.0);

    let (_, body) = app
        .json(Method::GET, "/api/orders?date=1999-01-01", None)
        .await;
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());

    let (status, _) = app.json(Method::GET, "/api/orders?date=yesterday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_export_is_verbatim_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let raw = "T1,4,True\nT2,2,False\n";
    std::fs::write(dir.path().join("tables.csv"), raw).unwrap();
    let app = TestApp::with_dir(dir);

    let request = Request::builder()
        .uri("/api/export/tables")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[http::header::CONTENT_DISPOSITION],
        "attachment; filename=\"tables.csv\""
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], raw.as_bytes());

    let (status, _) = app.json(Method::GET, "/api/export/staff", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_corrupt_file_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("orders.csv"),
        "AB12CD34,T1,16.0,{not json},Ann,Pending\n",
    )
    .unwrap();

    let mut config = pos_server::Config::with_overrides(dir.path().to_string_lossy(), 0);
    config.orders_file = "orders.csv".into();
    config.menu_file = "menu.csv".into();
    config.tables_file = "tables.csv".into();
    let err = pos_server::ServerState::initialize(&config).unwrap_err();
    assert!(err.to_string().contains("orders.csv"));
}
