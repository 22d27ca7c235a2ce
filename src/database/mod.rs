// ABOUTME: SQLite persistence layer with startup schema migration
// ABOUTME: Owns the connection pool; per-domain operations live in submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Database layer
//!
//! A single [`Database`] owns the SQLite pool. Schema creation is idempotent
//! (`CREATE TABLE IF NOT EXISTS`) and runs on startup. Each domain's
//! operations live in a submodule extending `impl Database`.

mod chat;
mod meals;
mod moods;
mod recommendations;
mod users;

pub use meals::NewMealItem;
pub use users::UpdateProfileRequest;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// SQLite database handle
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(5);
        if database_url.contains(":memory:") {
            // An in-memory database exists per connection; keep exactly one
            // alive for the process lifetime.
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")))?;

        let database = Self { pool };
        database.migrate().await?;
        Ok(database)
    }

    /// The underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run all schema migrations
    async fn migrate(&self) -> AppResult<()> {
        self.migrate_users().await?;
        self.migrate_meals().await?;
        self.migrate_moods().await?;
        self.migrate_chat().await?;
        self.migrate_recommendations().await?;
        tracing::debug!("Database schema ready");
        Ok(())
    }
}

/// Parse a stored UUID column
pub(crate) fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| AppError::database(format!("Invalid stored UUID: {e}")))
}

/// Parse a stored RFC 3339 timestamp column
pub(crate) fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("Invalid stored timestamp: {e}")))
}
