// ABOUTME: Stored coaching recommendation database operations
// ABOUTME: Persists generated advice so clients can review past results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

use chrono::Utc;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::StoredRecommendation;

impl Database {
    /// Create the recommendations table
    pub(super) async fn migrate_recommendations(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recommendations (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                scope TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create recommendations table: {e}"))
        })?;

        Ok(())
    }

    /// Persist a generated recommendation result
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the database operation fails
    pub async fn store_recommendation(
        &self,
        user_id: Uuid,
        scope: &str,
        content: &serde_json::Value,
    ) -> AppResult<StoredRecommendation> {
        let record = StoredRecommendation {
            id: Uuid::new_v4(),
            user_id,
            scope: scope.to_owned(),
            content: content.clone(),
            created_at: Utc::now(),
        };

        let content_json = serde_json::to_string(content)
            .map_err(|e| AppError::database(format!("Failed to serialize content: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO recommendations (id, user_id, scope, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.id.to_string())
        .bind(user_id.to_string())
        .bind(&record.scope)
        .bind(content_json)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to store recommendation: {e}")))?;

        Ok(record)
    }
}
