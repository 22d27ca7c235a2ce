// ABOUTME: Coaching recommendation route handlers
// ABOUTME: Merges the stored profile into health state, runs the rule engine, persists the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Coaching routes
//!
//! The handler loads the caller's stored profile, merges it into the
//! supplied health state, runs the rule engine, and persists the generated
//! buckets before returning them.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::errors::AppError;
use crate::intelligence::{HealthData, ProfileSnapshot};
use crate::resources::ServerResources;

/// Coaching routes handler
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create all coaching routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/coach/recommendations",
                post(Self::handle_recommendations),
            )
            .with_state(resources)
    }

    /// Handle POST /api/coach/recommendations
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(mut data): Json<HealthData>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;

        data.profile = resources
            .database
            .get_profile(auth.user_id)
            .await?
            .as_ref()
            .map(ProfileSnapshot::from);

        let recommendations = resources.coach.generate(&data);

        let content = serde_json::to_value(&recommendations)
            .map_err(|e| AppError::internal(format!("Failed to serialize result: {e}")))?;
        resources
            .database
            .store_recommendation(auth.user_id, "general", &content)
            .await?;

        Ok((StatusCode::OK, Json(recommendations)).into_response())
    }
}
