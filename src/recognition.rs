// ABOUTME: Simulated food recognition for camera scans
// ABOUTME: Forwards to a model server when configured, otherwise returns mock detections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Food recognition service
//!
//! When a model server is configured, scans are forwarded to it. Otherwise
//! (or when the call fails) the service returns one to three randomly chosen
//! mock detections with jittered confidence and weight. Randomness is
//! confined to this module; the recommendation and coaching engines stay
//! deterministic.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AppError, AppResult};

/// A recognized food item in a scanned image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    /// Food name
    pub name: String,
    /// Recognition confidence between 0 and 1
    pub confidence: f64,
    /// Estimated portion weight in grams
    pub estimated_grams: i64,
}

/// Mock recognition table used when no model server is available
const MOCK_DETECTIONS: [(&str, f64, i64); 10] = [
    ("Apple", 0.95, 150),
    ("Banana", 0.88, 120),
    ("Sandwich", 0.82, 200),
    ("Salad", 0.76, 180),
    ("Pizza Slice", 0.91, 100),
    ("Chicken Breast", 0.87, 150),
    ("Rice Bowl", 0.84, 200),
    ("Pasta", 0.79, 250),
    ("Yogurt", 0.93, 170),
    ("Coffee", 0.96, 240),
];

/// Model server response shape
#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    detections: Vec<Detection>,
}

/// Model server request body; images travel as base64 JSON
#[derive(Debug, Serialize)]
struct RecognizeBody<'a> {
    filename: &'a str,
    image: &'a str,
}

/// Food recognition with model-server forwarding and mock fallback
pub struct RecognitionService {
    model_server_url: Option<String>,
    http_client: reqwest::Client,
}

impl RecognitionService {
    /// Create the service; pass `None` to always return mock detections
    #[must_use]
    pub fn new(model_server_url: Option<String>) -> Self {
        Self {
            model_server_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Recognize foods in an image
    ///
    /// # Errors
    ///
    /// Never fails in practice: a model-server error degrades to mock
    /// detections.
    pub async fn recognize(&self, filename: &str, image_base64: &str) -> AppResult<Vec<Detection>> {
        if let Some(url) = &self.model_server_url {
            match self.recognize_remote(url, filename, image_base64).await {
                Ok(detections) => return Ok(detections),
                Err(e) => {
                    warn!("Food recognition API failed, using fallback: {e}");
                }
            }
        }

        Ok(Self::mock_detections())
    }

    async fn recognize_remote(
        &self,
        base_url: &str,
        filename: &str,
        image_base64: &str,
    ) -> AppResult<Vec<Detection>> {
        let url = format!("{base_url}/recognize");
        let response = self
            .http_client
            .post(&url)
            .json(&RecognizeBody {
                filename,
                image: image_base64,
            })
            .send()
            .await
            .map_err(|e| AppError::external_service("Recognition API", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "Recognition API",
                format!("HTTP {}", response.status()),
            ));
        }

        let body: RecognizeResponse = response.json().await.map_err(|e| {
            AppError::external_service("Recognition API", format!("JSON parse error: {e}"))
        })?;

        Ok(body.detections)
    }

    /// One to three random mock detections with jittered confidence and weight
    #[must_use]
    pub fn mock_detections() -> Vec<Detection> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=3);

        (0..count)
            .map(|_| {
                let (name, confidence, grams) =
                    MOCK_DETECTIONS[rng.gen_range(0..MOCK_DETECTIONS.len())];
                let jittered_confidence =
                    (confidence + (rng.gen::<f64>() - 0.5) * 0.2).max(0.6);
                #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
                let jittered_grams =
                    (grams as f64 * (0.8 + rng.gen::<f64>() * 0.4)).round() as i64;
                Detection {
                    name: name.to_owned(),
                    confidence: jittered_confidence,
                    estimated_grams: jittered_grams,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_detections_within_bounds() {
        for _ in 0..50 {
            let detections = RecognitionService::mock_detections();
            assert!((1..=3).contains(&detections.len()));
            for detection in detections {
                assert!(detection.confidence >= 0.6);
                assert!(detection.confidence <= 1.1);
                assert!(detection.estimated_grams > 0);
            }
        }
    }

    #[tokio::test]
    async fn test_service_without_model_server_uses_mock() {
        let service = RecognitionService::new(None);
        let detections = service.recognize("lunch.jpg", "").await.unwrap();
        assert!(!detections.is_empty());
    }
}
