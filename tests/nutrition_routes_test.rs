// ABOUTME: Integration tests for nutrition search and food recognition routes
// ABOUTME: Exercises the built-in fallback data and simulated detections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_resources, create_test_user, test_app};
use helpers::axum_test::AxumTestRequest;
use quickcal_server::nutrition::FoodHit;
use quickcal_server::routes::recognition::ScanResponse;
use serde_json::json;

#[tokio::test]
async fn test_search_uses_builtin_data_without_api_key() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::get("/api/nutrition/search?q=banana")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let hits: Vec<FoodHit> = response.json();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Banana");
    assert!(hits[0].per_100g);
}

#[tokio::test]
async fn test_search_requires_query() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::get("/api/nutrition/search?q=%20")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_requires_authentication() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::get("/api/nutrition/search?q=apple")
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_scan_returns_simulated_detections() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::post("/api/recognition/scan")
        .header("authorization", &auth_header)
        .json(&json!({ "filename": "lunch.jpg" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let scan: ScanResponse = response.json();
    assert!((1..=3).contains(&scan.detections.len()));
    for detection in &scan.detections {
        assert!(detection.confidence >= 0.6);
        assert!(detection.estimated_grams > 0);
    }
}
