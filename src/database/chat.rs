// ABOUTME: Chat message database operations
// ABOUTME: Persists user and assistant messages from the chat endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

use chrono::Utc;
use uuid::Uuid;

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::llm::MessageRole;
use crate::models::ChatMessageRecord;

impl Database {
    /// Create the chat messages table
    pub(super) async fn migrate_chat(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS chat_messages (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create chat_messages table: {e}")))?;

        Ok(())
    }

    /// Persist a chat message
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn add_chat_message(
        &self,
        user_id: Uuid,
        role: MessageRole,
        content: &str,
    ) -> AppResult<ChatMessageRecord> {
        let record = ChatMessageRecord {
            id: Uuid::new_v4(),
            user_id,
            role: role.as_str().to_owned(),
            content: content.to_owned(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO chat_messages (id, user_id, role, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(record.id.to_string())
        .bind(user_id.to_string())
        .bind(&record.role)
        .bind(&record.content)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to add chat message: {e}")))?;

        Ok(record)
    }
}
