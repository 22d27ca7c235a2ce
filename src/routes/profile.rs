// ABOUTME: Profile route handlers for onboarding data
// ABOUTME: Reads create an empty profile on first access; updates are partial
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Profile routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::database::UpdateProfileRequest;
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Profile routes handler
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/profile", get(Self::handle_get))
            .route("/api/profile", put(Self::handle_update))
            .with_state(resources)
    }

    /// Handle GET /api/profile
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        let profile = resources.database.get_or_create_profile(auth.user_id).await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    /// Handle PUT /api/profile
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<UpdateProfileRequest>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        body.validate()?;
        let profile = resources.database.update_profile(auth.user_id, &body).await?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }
}
