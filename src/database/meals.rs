// ABOUTME: Meal and meal item database operations
// ABOUTME: Handles meal creation with calorie totals and daily retrieval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use sqlx::Row;
use uuid::Uuid;

use super::{parse_timestamp, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Meal, MealItem};

/// A meal item supplied by the client when logging a meal
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealItem {
    /// Food name
    pub name: String,
    /// Quantity in grams
    pub quantity: f64,
    /// Calories for this quantity
    #[serde(default)]
    pub kcal: Option<f64>,
    /// Protein in grams
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat in grams
    #[serde(default)]
    pub fat: Option<f64>,
}

impl Database {
    /// Create meals and meal items tables
    pub(super) async fn migrate_meals(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meals (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                time TEXT NOT NULL,
                total_kcal INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meals table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS meal_items (
                id TEXT PRIMARY KEY,
                meal_id TEXT NOT NULL REFERENCES meals(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                quantity REAL NOT NULL,
                kcal REAL,
                protein REAL,
                carbs REAL,
                fat REAL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meal_items table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_meals_user_time ON meals(user_id, time)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create meals index: {e}")))?;

        Ok(())
    }

    /// Create a meal with its items; the total is the rounded sum of item kcal
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_meal(
        &self,
        user_id: Uuid,
        time: DateTime<Utc>,
        items: &[NewMealItem],
    ) -> AppResult<Meal> {
        let meal_id = Uuid::new_v4();
        let now = Utc::now();
        #[allow(clippy::cast_possible_truncation)]
        let total_kcal = items
            .iter()
            .map(|item| item.kcal.unwrap_or(0.0))
            .sum::<f64>()
            .round() as i64;

        sqlx::query(
            r"
            INSERT INTO meals (id, user_id, time, total_kcal, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(meal_id.to_string())
        .bind(user_id.to_string())
        .bind(time.to_rfc3339())
        .bind(total_kcal)
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create meal: {e}")))?;

        let mut stored_items = Vec::with_capacity(items.len());
        for item in items {
            let item_id = Uuid::new_v4();
            sqlx::query(
                r"
                INSERT INTO meal_items (id, meal_id, name, quantity, kcal, protein, carbs, fat)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ",
            )
            .bind(item_id.to_string())
            .bind(meal_id.to_string())
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.kcal)
            .bind(item.protein)
            .bind(item.carbs)
            .bind(item.fat)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create meal item: {e}")))?;

            stored_items.push(MealItem {
                id: item_id,
                meal_id,
                name: item.name.clone(),
                quantity: item.quantity,
                kcal: item.kcal,
                protein: item.protein,
                carbs: item.carbs,
                fat: item.fat,
            });
        }

        Ok(Meal {
            id: meal_id,
            user_id,
            time,
            total_kcal,
            items: stored_items,
            created_at: now,
        })
    }

    /// Get a meal with its items; `None` when absent or owned by another user
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_meal(&self, user_id: Uuid, meal_id: Uuid) -> AppResult<Option<Meal>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, time, total_kcal, created_at
            FROM meals
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(meal_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get meal: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut meal = row_to_meal(&row)?;
        meal.items = self.get_meal_items(meal.id).await?;
        Ok(Some(meal))
    }

    /// Get all meals for a UTC calendar day, ordered by time ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_meals_for_day(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<Meal>> {
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + chrono::Duration::days(1);

        let rows = sqlx::query(
            r"
            SELECT id, user_id, time, total_kcal, created_at
            FROM meals
            WHERE user_id = $1 AND time >= $2 AND time < $3
            ORDER BY time ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(day_start.to_rfc3339())
        .bind(day_end.to_rfc3339())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get meals for day: {e}")))?;

        let mut meals = Vec::with_capacity(rows.len());
        for row in rows {
            let mut meal = row_to_meal(&row)?;
            meal.items = self.get_meal_items(meal.id).await?;
            meals.push(meal);
        }
        Ok(meals)
    }

    async fn get_meal_items(&self, meal_id: Uuid) -> AppResult<Vec<MealItem>> {
        let rows = sqlx::query(
            r"
            SELECT id, meal_id, name, quantity, kcal, protein, carbs, fat
            FROM meal_items
            WHERE meal_id = $1
            ",
        )
        .bind(meal_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get meal items: {e}")))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let meal_id: String = row.get("meal_id");
                Ok(MealItem {
                    id: parse_uuid(&id)?,
                    meal_id: parse_uuid(&meal_id)?,
                    name: row.get("name"),
                    quantity: row.get("quantity"),
                    kcal: row.get("kcal"),
                    protein: row.get("protein"),
                    carbs: row.get("carbs"),
                    fat: row.get("fat"),
                })
            })
            .collect()
    }
}

fn row_to_meal(row: &sqlx::sqlite::SqliteRow) -> AppResult<Meal> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let time: String = row.get("time");
    let created_at: String = row.get("created_at");
    Ok(Meal {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        time: parse_timestamp(&time)?,
        total_kcal: row.get("total_kcal"),
        items: Vec::new(),
        created_at: parse_timestamp(&created_at)?,
    })
}
