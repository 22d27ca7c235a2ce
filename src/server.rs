// ABOUTME: HTTP server assembly and lifecycle
// ABOUTME: Merges per-domain routers and applies shared middleware layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! HTTP server
//!
//! Assembles the per-domain routers into one axum application with tracing,
//! CORS, and body-limit layers, then serves it.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::constants::limits;
use crate::resources::ServerResources;
use crate::routes::{
    AssistantRoutes, AuthRoutes, CoachRoutes, HealthRoutes, MealsRoutes, MoodRoutes,
    NutritionRoutes, ProfileRoutes, RecognitionRoutes, RecommendationRoutes,
};

/// The QuickCal HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(&self) -> Router {
        let resources = &self.resources;

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AuthRoutes::routes(resources.clone()))
            .merge(ProfileRoutes::routes(resources.clone()))
            .merge(MealsRoutes::routes(resources.clone()))
            .merge(MoodRoutes::routes(resources.clone()))
            .merge(NutritionRoutes::routes(resources.clone()))
            .merge(RecognitionRoutes::routes(resources.clone()))
            .merge(RecommendationRoutes::routes(resources.clone()))
            .merge(CoachRoutes::routes(resources.clone()))
            .merge(AssistantRoutes::routes(resources.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(&resources.config.security.cors_origins))
            .layer(DefaultBodyLimit::max(limits::MAX_BODY_BYTES))
    }

    /// Serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails
    pub async fn run(self, port: u16) -> Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
            .await
            .with_context(|| format!("Failed to bind port {port}"))?;

        info!("HTTP server listening on port {port}");
        axum::serve(listener, router)
            .await
            .context("HTTP server exited with an error")
    }

    fn cors_layer(origins: &[String]) -> CorsLayer {
        if origins.iter().any(|origin| origin == "*") {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let parsed: Vec<axum::http::HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(parsed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
