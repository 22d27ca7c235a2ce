// ABOUTME: Mood journal route handlers
// ABOUTME: Logs mood entries and serves daily and timeline views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Mood journal routes

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::constants::limits;
use crate::errors::AppError;
use crate::models::MoodKind;
use crate::resources::ServerResources;

/// Request to log a mood entry
#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    /// Mood category; must be one of the journal categories
    pub category: String,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for the mood timeline
#[derive(Debug, Deserialize, Default)]
pub struct TimelineQuery {
    /// Number of days to look back; defaults to 30
    #[serde(default)]
    pub days: Option<i64>,
}

/// Mood journal routes handler
pub struct MoodRoutes;

impl MoodRoutes {
    /// Create all mood journal routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/mood", post(Self::handle_create))
            .route("/api/mood/today", get(Self::handle_today))
            .route("/api/mood/timeline", get(Self::handle_timeline))
            .with_state(resources)
    }

    /// Handle POST /api/mood
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CreateMoodRequest>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;

        let category = MoodKind::parse(&body.category).ok_or_else(|| {
            AppError::invalid_input(format!("Unknown mood category: {}", body.category))
        })?;

        let entry = resources
            .database
            .create_mood(auth.user_id, category, body.note.as_deref())
            .await?;

        Ok((StatusCode::CREATED, Json(entry)).into_response())
    }

    /// Handle GET /api/mood/today
    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        let moods = resources.database.get_moods_today(auth.user_id).await?;
        Ok((StatusCode::OK, Json(moods)).into_response())
    }

    /// Handle GET /api/mood/timeline
    async fn handle_timeline(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<TimelineQuery>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        let days = query.days.unwrap_or(limits::DEFAULT_TIMELINE_DAYS);
        if days <= 0 {
            return Err(AppError::invalid_input("days must be positive"));
        }
        let moods = resources
            .database
            .get_mood_timeline(auth.user_id, days)
            .await?;
        Ok((StatusCode::OK, Json(moods)).into_response())
    }
}
