// ABOUTME: Nutrition search route handlers
// ABOUTME: Looks up per-100g food data with external API and built-in fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Nutrition routes

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resources::ServerResources;

/// Query parameters for food search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search term
    pub q: String,
}

/// Nutrition routes handler
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/nutrition/search", get(Self::handle_search))
            .with_state(resources)
    }

    /// Handle GET /api/nutrition/search
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(query): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        super::authenticate(&headers, &resources).await?;

        if query.q.trim().is_empty() {
            return Err(AppError::invalid_input("Query parameter q is required"));
        }

        let results = resources.nutrition.search_foods(query.q.trim()).await?;
        Ok((StatusCode::OK, Json(results)).into_response())
    }
}
