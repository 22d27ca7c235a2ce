// ABOUTME: User and profile database operations
// ABOUTME: Handles account creation, lookup, and profile upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

use chrono::Utc;
use serde::Deserialize;
use sqlx::Row;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, Goals, Profile, User};

/// Partial profile update, validated before persisting
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Age in years (1-120)
    #[serde(default)]
    pub age: Option<i64>,
    /// Free-text gender
    #[serde(default)]
    pub gender: Option<String>,
    /// Height in centimeters (50-300)
    #[serde(default)]
    pub height_cm: Option<i64>,
    /// Weight in kilograms (20-500)
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Activity level
    #[serde(default)]
    pub activity: Option<ActivityLevel>,
    /// Structured goals
    #[serde(default)]
    pub goals: Option<Goals>,
    /// Free-form dietary preferences
    #[serde(default)]
    pub preferences: Option<serde_json::Value>,
    /// Free-form health conditions
    #[serde(default)]
    pub conditions: Option<serde_json::Value>,
}

impl UpdateProfileRequest {
    /// Validate field ranges
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        if let Some(age) = self.age {
            if !(1..=120).contains(&age) {
                return Err(AppError::invalid_input("age must be between 1 and 120"));
            }
        }
        if let Some(height) = self.height_cm {
            if !(50..=300).contains(&height) {
                return Err(AppError::invalid_input(
                    "heightCm must be between 50 and 300",
                ));
            }
        }
        if let Some(weight) = self.weight_kg {
            if !(20.0..=500.0).contains(&weight) {
                return Err(AppError::invalid_input(
                    "weightKg must be between 20 and 500",
                ));
            }
        }
        Ok(())
    }
}

impl Database {
    /// Create users and profiles tables
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create users table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                name TEXT,
                age INTEGER,
                gender TEXT,
                height_cm INTEGER,
                weight_kg REAL,
                activity TEXT,
                goals TEXT,
                preferences TEXT,
                conditions TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create profiles table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create users index: {e}")))?;

        Ok(())
    }

    /// Create a new user account
    ///
    /// # Errors
    ///
    /// Returns an already-exists error when the email is taken
    pub async fn create_user(&self, email: &str, password_hash: &str) -> AppResult<User> {
        if self.get_user_by_email(email).await?.is_some() {
            return Err(AppError::already_exists("User already exists"));
        }

        let user = User {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        Ok(user)
    }

    /// Look up a user by email
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get user by email: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row =
            sqlx::query("SELECT id, email, password_hash, created_at FROM users WHERE id = $1")
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    /// Get a user's profile, creating an empty one on first access
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_or_create_profile(&self, user_id: Uuid) -> AppResult<Profile> {
        if let Some(profile) = self.get_profile(user_id).await? {
            return Ok(profile);
        }

        let profile = Profile::empty(user_id);
        sqlx::query(
            r"
            INSERT INTO profiles (user_id, created_at, updated_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(user_id.to_string())
        .bind(profile.created_at.to_rfc3339())
        .bind(profile.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create profile: {e}")))?;

        Ok(profile)
    }

    /// Get a user's profile if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let row = sqlx::query(
            r"
            SELECT user_id, name, age, gender, height_cm, weight_kg, activity,
                   goals, preferences, conditions, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get profile: {e}")))?;

        row.map(|r| row_to_profile(&r)).transpose()
    }

    /// Apply a partial profile update, creating the row when absent
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: &UpdateProfileRequest,
    ) -> AppResult<Profile> {
        let mut profile = self.get_or_create_profile(user_id).await?;

        if let Some(name) = &update.name {
            profile.name = Some(name.clone());
        }
        if let Some(age) = update.age {
            profile.age = Some(age);
        }
        if let Some(gender) = &update.gender {
            profile.gender = Some(gender.clone());
        }
        if let Some(height_cm) = update.height_cm {
            profile.height_cm = Some(height_cm);
        }
        if let Some(weight_kg) = update.weight_kg {
            profile.weight_kg = Some(weight_kg);
        }
        if let Some(activity) = update.activity {
            profile.activity = Some(activity);
        }
        if let Some(goals) = &update.goals {
            profile.goals = Some(goals.clone());
        }
        if let Some(preferences) = &update.preferences {
            profile.preferences = Some(preferences.clone());
        }
        if let Some(conditions) = &update.conditions {
            profile.conditions = Some(conditions.clone());
        }
        profile.updated_at = Utc::now();

        let goals_json = profile
            .goals
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| AppError::database(format!("Failed to serialize goals: {e}")))?;
        let preferences_json = profile
            .preferences
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| AppError::database(format!("Failed to serialize preferences: {e}")))?;
        let conditions_json = profile
            .conditions
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| AppError::database(format!("Failed to serialize conditions: {e}")))?;

        sqlx::query(
            r"
            UPDATE profiles
            SET name = $1, age = $2, gender = $3, height_cm = $4, weight_kg = $5,
                activity = $6, goals = $7, preferences = $8, conditions = $9,
                updated_at = $10
            WHERE user_id = $11
            ",
        )
        .bind(&profile.name)
        .bind(profile.age)
        .bind(&profile.gender)
        .bind(profile.height_cm)
        .bind(profile.weight_kg)
        .bind(profile.activity.map(|a| a.as_str()))
        .bind(goals_json)
        .bind(preferences_json)
        .bind(conditions_json)
        .bind(profile.updated_at.to_rfc3339())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update profile: {e}")))?;

        Ok(profile)
    }
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> AppResult<User> {
    let id: String = row.get("id");
    let created_at: String = row.get("created_at");
    Ok(User {
        id: parse_uuid(&id)?,
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: parse_timestamp(&created_at)?,
    })
}

fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> AppResult<Profile> {
    let user_id: String = row.get("user_id");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    let activity: Option<String> = row.get("activity");
    let goals: Option<String> = row.get("goals");
    let preferences: Option<String> = row.get("preferences");
    let conditions: Option<String> = row.get("conditions");

    Ok(Profile {
        user_id: parse_uuid(&user_id)?,
        name: row.get("name"),
        age: row.get("age"),
        gender: row.get("gender"),
        height_cm: row.get("height_cm"),
        weight_kg: row.get("weight_kg"),
        activity: activity.as_deref().and_then(ActivityLevel::parse),
        goals: goals
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| AppError::database(format!("Invalid stored goals: {e}")))?,
        preferences: preferences
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| AppError::database(format!("Invalid stored preferences: {e}")))?,
        conditions: conditions
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(|e| AppError::database(format!("Invalid stored conditions: {e}")))?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
