// ABOUTME: Mood-based food recommendation route handlers
// ABOUTME: Serves catalog selections and the fixed mood option list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Recommendation routes
//!
//! These endpoints are unauthenticated: the client shows mood suggestions
//! before onboarding completes. A missing `mood` is the only rejected input;
//! unknown moods degrade to the positive bucket.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intelligence::catalog::{Catalog, MoodOption};
use crate::intelligence::RecommendationRequest;
use crate::resources::ServerResources;

/// Body of the mood recommendation endpoint
///
/// `mood` is optional here so its absence can surface as a 400 rather than a
/// deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecommendationBody {
    /// Reported mood
    #[serde(default)]
    pub mood: Option<String>,
    /// Calories consumed so far today
    #[serde(default)]
    pub current_calories: Option<f64>,
    /// Restriction terms matched against ingredient names
    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,
    /// Accepted for forward compatibility
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

/// Response listing the selectable moods
#[derive(Debug, Serialize)]
pub struct MoodListResponse {
    /// Fixed list of mood options
    pub moods: Vec<MoodOption>,
}

/// Recommendation routes handler
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/recommendations/mood",
                post(Self::handle_mood_recommendations),
            )
            .route("/api/recommendations/moods", get(Self::handle_list_moods))
            .with_state(resources)
    }

    /// Handle POST /api/recommendations/mood
    async fn handle_mood_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<MoodRecommendationBody>,
    ) -> Result<Response, AppError> {
        let mood = body
            .mood
            .ok_or_else(|| AppError::invalid_input("Mood is required"))?;

        let request = RecommendationRequest {
            mood,
            current_calories: body.current_calories,
            dietary_restrictions: body.dietary_restrictions,
            goals: body.goals,
        };

        let response = resources.selector.select(&request);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/recommendations/moods
    async fn handle_list_moods(
        State(_resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = MoodListResponse {
            moods: Catalog::mood_options().to_vec(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
