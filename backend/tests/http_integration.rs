//! HTTP API tests driven through the router without binding a socket.

#![cfg(feature = "http-server")]

mod support;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use distribution_lab::db::repositories::LocalRepository;
use distribution_lab::db::DatasetRepository;
use distribution_lab::http::{create_router, AppState};

use support::sample_csv;

fn create_test_app() -> Router {
    let repo = Arc::new(LocalRepository::new()) as Arc<dyn DatasetRepository>;
    create_router(AppState::with_default_config(repo))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["repository"], "connected");
}

#[tokio::test]
async fn test_upload_csv_then_dashboard() {
    let app = create_test_app();

    let (status, info) = send(
        &app,
        "POST",
        "/v1/datasets",
        Some(json!({
            "name": "Q1 shipments",
            "role": "supplier",
            "payload": sample_csv(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(info["record_count"], 6);
    let id = info["dataset_id"].as_i64().unwrap();

    let (status, data) = send(
        &app,
        "POST",
        &format!("/v1/datasets/{}/dashboard", id),
        Some(json!({ "modelIds": ["M-201"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["total_count"], 6);
    assert_eq!(data["filtered_count"], 2);
    assert_eq!(data["pareto"][0]["model"], "M-201");
    assert_eq!(data["pareto"][0]["cumulative_percent"], 100);

    let (status, list) = send(&app, "GET", "/v1/datasets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn test_upload_json_array() {
    let app = create_test_app();
    let payload = json!([{
        "SupplierID": "MedTech-A",
        "Category": "Cardiac",
        "LicenseNo": "LIC-1000",
        "Model": "M-200",
        "LotNO": "L-5000",
        "SerialNo": "SN-1",
        "CustomerID": "HOSP-100",
        "DeliverDate": "2023-01-01",
        "Quantity": 3
    }]);

    let (status, info) = send(
        &app,
        "POST",
        "/v1/datasets",
        Some(json!({ "name": "Receipts", "role": "customer", "payload": payload })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(info["role"], "customer");
    assert_eq!(info["record_count"], 1);
}

#[tokio::test]
async fn test_malformed_upload_is_bad_request() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/v1/datasets",
        Some(json!({ "name": "Broken", "role": "supplier", "payload": "SupplierID,Category\nA,B\n" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("LicenseNo"));
}

#[tokio::test]
async fn test_default_sources_preview_and_discrepancy() {
    let app = create_test_app();

    let (status, sources) = send(&app, "POST", "/v1/datasets/default", None).await;
    assert_eq!(status, StatusCode::OK);
    let a = sources["supplier"]["dataset_id"].as_i64().unwrap();
    let b = sources["customer"]["dataset_id"].as_i64().unwrap();

    let (status, preview) = send(&app, "GET", &format!("/v1/datasets/{}/preview?rows=500", a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["row_limit"], 50);
    assert_eq!(preview["total_count"], 20);
    assert_eq!(preview["rows"].as_array().unwrap().len(), 20);

    let (status, data) = send(
        &app,
        "POST",
        &format!("/v1/datasets/{}/discrepancy/{}", a, b),
        Some(json!({ "modelIds": ["M-200"], "searchQuery": "HOSP-100" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["comparison_scope"], "reduced");
    assert_eq!(data["supplier_matches"], 1);
    assert_eq!(data["customer_matches"], 4);
    assert!(data["prompt"].as_str().unwrap().contains("Dataset B (Customer)"));
}

#[tokio::test]
async fn test_unknown_dataset_is_not_found() {
    let app = create_test_app();
    let (status, body) = send(&app, "POST", "/v1/datasets/42/dashboard", Some(json!({}))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_inverted_time_zone_range_is_rejected() {
    let app = create_test_app();
    let (_, sources) = send(&app, "POST", "/v1/datasets/default", None).await;
    let a = sources["supplier"]["dataset_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/v1/datasets/{}/dashboard", a),
        Some(json!({ "timeZoneRange": { "lo": 5, "hi": -5 } })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_discrepancy_requires_supplier_then_customer() {
    let app = create_test_app();
    let (_, sources) = send(&app, "POST", "/v1/datasets/default", None).await;
    let a = sources["supplier"]["dataset_id"].as_i64().unwrap();
    let b = sources["customer"]["dataset_id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/v1/datasets/{}/discrepancy/{}", b, a),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ROLE_MISMATCH");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/v1/datasets/{}/discrepancy/{}", a, a),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_standardize_prompt_and_fenced_reply() {
    let app = create_test_app();

    let (status, prompt) = send(
        &app,
        "POST",
        "/v1/standardize/prompt",
        Some(json!({ "raw": "MedTech-A sent 4 x M-200 to HOSP-100 on 2023-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prompt["truncated"], false);
    assert!(prompt["prompt"].as_str().unwrap().contains("HOSP-100 on 2023-01-01"));

    let reply = "```json\n[{\"SupplierID\": \"MedTech-A\", \"Category\": \"UNKNOWN\", \
                 \"LicenseNo\": \"UNKNOWN\", \"Model\": \"M-200\", \"LotNO\": \"UNKNOWN\", \
                 \"SerialNo\": \"UNKNOWN\", \"CustomerID\": \"HOSP-100\", \
                 \"DeliverDate\": \"2023-01-01\", \"Quantity\": 4}]\n```";
    let (status, info) = send(
        &app,
        "POST",
        "/v1/datasets/standardized",
        Some(json!({ "name": "Pasted notes", "role": "supplier", "response": reply })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(info["record_count"], 1);

    let (status, body) = send(
        &app,
        "POST",
        "/v1/datasets/standardized",
        Some(json!({ "name": "Bad reply", "role": "supplier", "response": "no data found" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_PAYLOAD");
}
