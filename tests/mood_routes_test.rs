// ABOUTME: Integration tests for the mood journal route handlers
// ABOUTME: Covers entry creation, category validation, and daily/timeline views
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
use quickcal_server::models::{MoodEntry, MoodKind};
use serde_json::json;

#[tokio::test]
async fn test_create_mood_entry() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::post("/api/mood")
        .header("authorization", &auth_header)
        .json(&json!({ "category": "happy", "note": "Great workout" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let entry: MoodEntry = response.json();
    assert_eq!(entry.category, MoodKind::Happy);
    assert_eq!(entry.note.as_deref(), Some("Great workout"));
}

#[tokio::test]
async fn test_unknown_category_rejected() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::post("/api/mood")
        .header("authorization", &auth_header)
        .json(&json!({ "category": "grumpy" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_today_lists_entries_newest_first() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    for category in ["stressed", "happy"] {
        AxumTestRequest::post("/api/mood")
            .header("authorization", &auth_header)
            .json(&json!({ "category": category }))
            .send(app.clone())
            .await;
    }

    let response = AxumTestRequest::get("/api/mood/today")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let entries: Vec<MoodEntry> = response.json();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].created_at >= entries[1].created_at);
}

#[tokio::test]
async fn test_timeline_rejects_nonpositive_days() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::get("/api/mood/timeline?days=0")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_timeline_includes_todays_entries() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    AxumTestRequest::post("/api/mood")
        .header("authorization", &auth_header)
        .json(&json!({ "category": "low_energy" }))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::get("/api/mood/timeline")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let entries: Vec<MoodEntry> = response.json();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, MoodKind::LowEnergy);
}
