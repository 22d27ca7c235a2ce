// ABOUTME: Demo data seeder for the QuickCal server
// ABOUTME: Creates the demo account with a profile, one meal, and a mood entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Demo data seeder for the QuickCal server.
//!
//! Usage:
//! ```bash
//! # Seed against the configured DATABASE_URL
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-data -- --database-url sqlite:./dev.db
//! ```

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use quickcal_server::{
    auth::hash_password,
    config::ServerConfig,
    database::{Database, NewMealItem, UpdateProfileRequest},
    logging,
    models::{ActivityLevel, GoalType, Goals, MoodKind},
};
use tracing::info;

/// Demo account credentials; allows login for testing
const DEMO_EMAIL: &str = "demo@quickcal.ai";
const DEMO_PASSWORD: &str = "demo123";

#[derive(Parser)]
#[command(name = "seed-demo-data", about = "QuickCal demo data seeder")]
struct Args {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;
    let args = Args::parse();

    let config = ServerConfig::from_env()?;
    let database_url = args
        .database_url
        .unwrap_or_else(|| config.database.url.to_connection_string());

    let database = Database::new(&database_url).await?;

    let user = match database.get_user_by_email(DEMO_EMAIL).await? {
        Some(user) => {
            info!("Demo user already exists: {}", user.id);
            user
        }
        None => {
            let password_hash = hash_password(DEMO_PASSWORD)?;
            let user = database.create_user(DEMO_EMAIL, &password_hash).await?;
            info!("Created demo user: {}", user.id);
            user
        }
    };

    database
        .update_profile(
            user.id,
            &UpdateProfileRequest {
                name: Some("Demo User".into()),
                age: Some(28),
                gender: Some("non-binary".into()),
                height_cm: Some(175),
                weight_kg: Some(70.0),
                activity: Some(ActivityLevel::Moderate),
                goals: Some(Goals {
                    goal_type: Some(GoalType::Maintenance),
                    target_weight: Some(70.0),
                }),
                preferences: Some(serde_json::json!({ "diet": "balanced", "allergies": [] })),
                conditions: Some(serde_json::json!([])),
            },
        )
        .await?;

    database
        .create_meal(
            user.id,
            Utc::now(),
            &[
                NewMealItem {
                    name: "Oatmeal".into(),
                    quantity: 100.0,
                    kcal: Some(389.0),
                    protein: Some(16.9),
                    carbs: Some(66.3),
                    fat: Some(6.9),
                },
                NewMealItem {
                    name: "Banana".into(),
                    quantity: 120.0,
                    kcal: Some(105.0),
                    protein: Some(1.3),
                    carbs: Some(27.0),
                    fat: Some(0.4),
                },
                NewMealItem {
                    name: "Almonds".into(),
                    quantity: 30.0,
                    kcal: Some(164.0),
                    protein: Some(6.0),
                    carbs: Some(6.0),
                    fat: Some(14.2),
                },
            ],
        )
        .await?;

    database
        .create_mood(
            user.id,
            MoodKind::Happy,
            Some("Feeling great after my morning workout!"),
        )
        .await?;

    info!("Database seeded successfully");
    Ok(())
}
