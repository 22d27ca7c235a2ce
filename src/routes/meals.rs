// ABOUTME: Meal logging route handlers
// ABOUTME: Creates meals with items and serves per-day and per-meal lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Meal routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::NewMealItem;
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Request to log a meal
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    /// When the meal was eaten; defaults to now
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    /// Items making up the meal
    pub items: Vec<NewMealItem>,
}

/// Query parameters for the daily meal listing
#[derive(Debug, Deserialize, Default)]
pub struct DayQuery {
    /// Calendar day (YYYY-MM-DD); defaults to today (UTC)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Meal routes handler
pub struct MealsRoutes;

impl MealsRoutes {
    /// Create all meal routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meals", post(Self::handle_create))
            .route("/api/meals/day", get(Self::handle_day))
            .route("/api/meals/:meal_id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle POST /api/meals
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CreateMealRequest>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;

        for item in &body.items {
            if item.quantity <= 0.0 {
                return Err(AppError::invalid_input(
                    "Item quantity must be a positive number",
                ));
            }
        }

        let time = body.time.unwrap_or_else(Utc::now);
        let meal = resources
            .database
            .create_meal(auth.user_id, time, &body.items)
            .await?;

        Ok((StatusCode::CREATED, Json(meal)).into_response())
    }

    /// Handle GET /api/meals/day
    async fn handle_day(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<DayQuery>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
        let meals = resources.database.get_meals_for_day(auth.user_id, date).await?;
        Ok((StatusCode::OK, Json(meals)).into_response())
    }

    /// Handle GET /api/meals/:meal_id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(meal_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;
        let meal = resources
            .database
            .get_meal(auth.user_id, meal_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        Ok((StatusCode::OK, Json(meal)).into_response())
    }
}
