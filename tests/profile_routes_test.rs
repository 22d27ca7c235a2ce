// ABOUTME: Integration tests for the profile route handlers
// ABOUTME: Covers create-on-read, partial updates, and range validation
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
use quickcal_server::models::{ActivityLevel, GoalType, Profile};
use serde_json::json;

#[tokio::test]
async fn test_get_creates_empty_profile_on_first_access() {
    let resources = create_test_resources().await;
    let (user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::get("/api/profile")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: Profile = response.json();
    assert_eq!(profile.user_id, user.id);
    assert!(profile.name.is_none());
    assert!(profile.activity.is_none());
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    AxumTestRequest::put("/api/profile")
        .header("authorization", &auth_header)
        .json(&json!({ "name": "Demo User", "age": 28 }))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::put("/api/profile")
        .header("authorization", &auth_header)
        .json(&json!({ "activity": "moderate", "goals": { "type": "maintenance" } }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let profile: Profile = response.json();
    assert_eq!(profile.name.as_deref(), Some("Demo User"));
    assert_eq!(profile.age, Some(28));
    assert_eq!(profile.activity, Some(ActivityLevel::Moderate));
    assert_eq!(
        profile.goals.unwrap().goal_type,
        Some(GoalType::Maintenance)
    );
}

#[tokio::test]
async fn test_age_out_of_range_rejected() {
    let resources = create_test_resources().await;
    let (_user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::put("/api/profile")
        .header("authorization", &auth_header)
        .json(&json!({ "age": 200 }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_requires_authentication() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::get("/api/profile").send(app).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
