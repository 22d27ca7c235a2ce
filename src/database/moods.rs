// ABOUTME: Mood journal database operations
// ABOUTME: Handles mood entry creation and daily/timeline retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

use chrono::{Duration, NaiveTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{MoodEntry, MoodKind};

impl Database {
    /// Create the moods table
    pub(super) async fn migrate_moods(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS moods (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                category TEXT NOT NULL,
                note TEXT,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create moods table: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_moods_user_created ON moods(user_id, created_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create moods index: {e}")))?;

        Ok(())
    }

    /// Log a mood entry
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_mood(
        &self,
        user_id: Uuid,
        category: MoodKind,
        note: Option<&str>,
    ) -> AppResult<MoodEntry> {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            user_id,
            category,
            note: note.map(ToOwned::to_owned),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO moods (id, user_id, category, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(entry.id.to_string())
        .bind(user_id.to_string())
        .bind(category.as_str())
        .bind(&entry.note)
        .bind(entry.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create mood: {e}")))?;

        Ok(entry)
    }

    /// Today's mood entries, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_moods_today(&self, user_id: Uuid) -> AppResult<Vec<MoodEntry>> {
        let now = Utc::now();
        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Duration::days(1);

        self.get_moods_between(user_id, &day_start.to_rfc3339(), &day_end.to_rfc3339())
            .await
    }

    /// Mood entries from the last `days` days, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_mood_timeline(&self, user_id: Uuid, days: i64) -> AppResult<Vec<MoodEntry>> {
        let now = Utc::now();
        let start = now - Duration::days(days);
        self.get_moods_between(user_id, &start.to_rfc3339(), &now.to_rfc3339())
            .await
    }

    async fn get_moods_between(
        &self,
        user_id: Uuid,
        start: &str,
        end: &str,
    ) -> AppResult<Vec<MoodEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, category, note, created_at
            FROM moods
            WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.to_string())
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get moods: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let user_id: String = row.get("user_id");
                let category: String = row.get("category");
                let created_at: String = row.get("created_at");
                Ok(MoodEntry {
                    id: parse_uuid(&id)?,
                    user_id: parse_uuid(&user_id)?,
                    category: MoodKind::parse(&category).ok_or_else(|| {
                        AppError::database(format!("Invalid stored mood category: {category}"))
                    })?,
                    note: row.get("note"),
                    created_at: parse_timestamp(&created_at)?,
                })
            })
            .collect()
    }
}
