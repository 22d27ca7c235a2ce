// ABOUTME: Food recognition route handlers for camera scans
// ABOUTME: Accepts a base64 image and returns detections, simulated when offline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Food recognition routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recognition::Detection;
use crate::resources::ServerResources;

/// Request to scan an image for foods
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Original filename, for logging
    #[serde(default)]
    pub filename: Option<String>,
    /// Base64-encoded image data
    #[serde(default)]
    pub image: Option<String>,
}

/// Scan response with recognized items
#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Recognized foods
    pub detections: Vec<Detection>,
}

/// Recognition routes handler
pub struct RecognitionRoutes;

impl RecognitionRoutes {
    /// Create all recognition routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recognition/scan", post(Self::handle_scan))
            .with_state(resources)
    }

    /// Handle POST /api/recognition/scan
    async fn handle_scan(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<ScanRequest>,
    ) -> Result<Response, AppError> {
        super::authenticate(&headers, &resources).await?;

        let filename = body.filename.as_deref().unwrap_or("upload.jpg");
        let image = body.image.as_deref().unwrap_or_default();
        let detections = resources.recognition.recognize(filename, image).await?;

        Ok((StatusCode::OK, Json(ScanResponse { detections })).into_response())
    }
}
