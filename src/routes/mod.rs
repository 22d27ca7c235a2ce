// ABOUTME: Route module organization for QuickCal HTTP endpoints
// ABOUTME: Centralizes per-domain route definitions and shared authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Route module for the QuickCal server
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the service and persistence layers. All handlers return
//! `Result<Response, AppError>` so failures surface as consistent JSON.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::auth::AuthResult;
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;

/// Assistant chat routes
pub mod assistant;
/// Authentication routes (register, login, me)
pub mod auth;
/// Coaching recommendation routes
pub mod coach;
/// Health check routes
pub mod health;
/// Meal logging routes
pub mod meals;
/// Mood journal routes
pub mod moods;
/// Nutrition search routes
pub mod nutrition;
/// Profile routes
pub mod profile;
/// Food recognition routes
pub mod recognition;
/// Mood-based food recommendation routes
pub mod recommendations;

pub use assistant::AssistantRoutes;
pub use auth::AuthRoutes;
pub use coach::CoachRoutes;
pub use health::HealthRoutes;
pub use meals::MealsRoutes;
pub use moods::MoodRoutes;
pub use nutrition::NutritionRoutes;
pub use profile::ProfileRoutes;
pub use recognition::RecognitionRoutes;
pub use recommendations::RecommendationRoutes;

/// Extract and validate the bearer token, confirming the user still exists
pub(crate) async fn authenticate(
    headers: &HeaderMap,
    resources: &Arc<ServerResources>,
) -> AppResult<AuthResult> {
    let auth_header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AppError::auth_required)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::auth_invalid("Expected a bearer token"))?;

    let auth = resources.auth_manager.authenticate(token)?;

    resources
        .database
        .get_user(auth.user_id)
        .await?
        .ok_or_else(|| AppError::auth_invalid("User not found"))?;

    Ok(auth)
}
