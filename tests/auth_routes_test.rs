// ABOUTME: Integration tests for the authentication route handlers
// ABOUTME: Covers registration, login, duplicate accounts, and the identity endpoint
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
use quickcal_server::routes::auth::{MeResponse, SessionResponse};
use serde_json::json;

#[tokio::test]
async fn test_register_returns_user_and_token() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "new@quickcal.ai", "password": "password123" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let session: SessionResponse = response.json();
    assert_eq!(session.user.email, "new@quickcal.ai");
    assert!(!session.token.is_empty());
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "new@quickcal.ai", "password": "short" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let resources = create_test_resources().await;
    let app = test_app(resources);

    let first = AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "dup@quickcal.ai", "password": "password123" }))
        .send(app.clone())
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "dup@quickcal.ai", "password": "password123" }))
        .send(app)
        .await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_round_trip() {
    let resources = create_test_resources().await;
    let app = test_app(resources);

    AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "login@quickcal.ai", "password": "password123" }))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "login@quickcal.ai", "password": "password123" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let session: SessionResponse = response.json();
    assert_eq!(session.user.email, "login@quickcal.ai");
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let resources = create_test_resources().await;
    let app = test_app(resources);

    AxumTestRequest::post("/api/auth/register")
        .json(&json!({ "email": "login@quickcal.ai", "password": "password123" }))
        .send(app.clone())
        .await;

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "login@quickcal.ai", "password": "wrong-password" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_rejected() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::post("/api/auth/login")
        .json(&json!({ "email": "nobody@quickcal.ai", "password": "password123" }))
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_returns_user_and_profile() {
    let resources = create_test_resources().await;
    let (user, auth_header) = create_test_user(&resources).await;
    let app = test_app(resources);

    let response = AxumTestRequest::get("/api/auth/me")
        .header("authorization", &auth_header)
        .send(app)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let me: MeResponse = response.json();
    assert_eq!(me.user.id, user.id);
    // No profile has been created yet
    assert!(me.profile.is_none());
}

#[tokio::test]
async fn test_me_without_token_rejected() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::get("/api/auth/me").send(app).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_garbage_token_rejected() {
    let app = test_app(create_test_resources().await);

    let response = AxumTestRequest::get("/api/auth/me")
        .header("authorization", "Bearer not-a-token")
        .send(app)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
