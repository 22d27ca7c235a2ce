// ABOUTME: Authentication route handlers for registration, login, and identity
// ABOUTME: Issues JWT session tokens and verifies bcrypt credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Authentication routes
//!
//! Registration and login return `{ user, token }`. Login failures are
//! indistinguishable between unknown email and wrong password.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::{Profile, User};
use crate::resources::ServerResources;

/// Registration request payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    pub email: String,
    /// Plain-text password, hashed server-side
    pub password: String,
}

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain-text password
    pub password: String,
}

/// Response carrying the user and a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// The account
    pub user: User,
    /// JWT session token
    pub token: String,
}

/// Response for the identity endpoint
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    /// The account
    pub user: User,
    /// The account's profile, when one exists
    pub profile: Option<Profile>,
}

/// Authentication routes handler
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/auth/register", post(Self::handle_register))
            .route("/api/auth/login", post(Self::handle_login))
            .route("/api/auth/me", get(Self::handle_me))
            .with_state(resources)
    }

    fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::invalid_input("A valid email is required"));
        }
        if password.len() < 8 {
            return Err(AppError::invalid_input(
                "Password must be at least 8 characters",
            ));
        }
        Ok(())
    }

    /// Handle POST /api/auth/register
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<RegisterRequest>,
    ) -> Result<Response, AppError> {
        Self::validate_credentials(&body.email, &body.password)?;

        let password_hash = hash_password(&body.password)?;
        let user = resources
            .database
            .create_user(&body.email, &password_hash)
            .await?;
        let token = resources.auth_manager.generate_token(&user)?;

        info!("Registered user {}", user.id);
        let response = SessionResponse { user, token };
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle POST /api/auth/login
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let user = resources
            .database
            .get_user_by_email(&body.email)
            .await?
            .ok_or_else(|| AppError::auth_invalid("Invalid credentials"))?;

        if !verify_password(&body.password, &user.password_hash)? {
            return Err(AppError::auth_invalid("Invalid credentials"));
        }

        let token = resources.auth_manager.generate_token(&user)?;
        let response = SessionResponse { user, token };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/auth/me
    async fn handle_me(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;

        let user = resources
            .database
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;
        let profile = resources.database.get_profile(auth.user_id).await?;

        let response = MeResponse { user, profile };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
