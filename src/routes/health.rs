// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Provides a liveness endpoint for load balancers and deploy checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Health check routes

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
