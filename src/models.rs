// ABOUTME: Common domain models for users, profiles, meals, and moods
// ABOUTME: Shared across the persistence layer, routes, and intelligence engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Common data models for QuickCal
//!
//! All models serialize to the camelCase wire format consumed by the mobile
//! client. Timestamps are UTC and serialize as RFC 3339 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Email address (unique)
    pub email: String,
    /// Bcrypt password hash, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Self-reported activity level used by the coaching engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    /// Parse from a stored string, returning `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(Self::Sedentary),
            "light" => Some(Self::Light),
            "moderate" => Some(Self::Moderate),
            "active" => Some(Self::Active),
            _ => None,
        }
    }

    /// String representation for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
        }
    }
}

/// The kind of goal a user is working towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

/// Structured goal settings stored on the profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    /// Goal kind; absent when the user has not chosen one
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    /// Target body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
}

/// A user's onboarding profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning user ID
    pub user_id: Uuid,
    /// Display name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<i64>,
    /// Free-text gender
    pub gender: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<i64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level
    pub activity: Option<ActivityLevel>,
    /// Structured goals
    pub goals: Option<Goals>,
    /// Dietary preferences (free-form JSON from the client)
    pub preferences: Option<serde_json::Value>,
    /// Health conditions (free-form JSON from the client)
    pub conditions: Option<serde_json::Value>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// An empty profile for a user, created on first access
    #[must_use]
    pub fn empty(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            name: None,
            age: None,
            gender: None,
            height_cm: None,
            weight_kg: None,
            activity: None,
            goals: None,
            preferences: None,
            conditions: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A single food item inside a logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    /// Unique item ID
    pub id: Uuid,
    /// Meal this item belongs to
    pub meal_id: Uuid,
    /// Food name
    pub name: String,
    /// Quantity in grams
    pub quantity: f64,
    /// Calories for this quantity
    pub kcal: Option<f64>,
    /// Protein in grams
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    pub carbs: Option<f64>,
    /// Fat in grams
    pub fat: Option<f64>,
}

/// A logged meal with its items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Unique meal ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// When the meal was eaten
    pub time: DateTime<Utc>,
    /// Rounded total calories across items
    pub total_kcal: i64,
    /// Items making up the meal
    pub items: Vec<MealItem>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Mood categories available in the mood journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodKind {
    Stressed,
    LowEnergy,
    Sad,
    Excited,
    Anxious,
    Happy,
}

impl MoodKind {
    /// Parse from a stored or request string, returning `None` for unknown values
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stressed" => Some(Self::Stressed),
            "low_energy" => Some(Self::LowEnergy),
            "sad" => Some(Self::Sad),
            "excited" => Some(Self::Excited),
            "anxious" => Some(Self::Anxious),
            "happy" => Some(Self::Happy),
            _ => None,
        }
    }

    /// String representation for storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stressed => "stressed",
            Self::LowEnergy => "low_energy",
            Self::Sad => "sad",
            Self::Excited => "excited",
            Self::Anxious => "anxious",
            Self::Happy => "happy",
        }
    }
}

/// A mood journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Unique entry ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Reported mood
    pub category: MoodKind,
    /// Optional free-text note
    pub note: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A persisted chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageRecord {
    /// Unique message ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Message role (user or assistant)
    pub role: String,
    /// Message content
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// A persisted coaching recommendation result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecommendation {
    /// Unique record ID
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Recommendation scope (currently always "general")
    pub scope: String,
    /// Generated recommendation buckets as JSON
    pub content: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_kind_round_trip() {
        for kind in [
            MoodKind::Stressed,
            MoodKind::LowEnergy,
            MoodKind::Sad,
            MoodKind::Excited,
            MoodKind::Anxious,
            MoodKind::Happy,
        ] {
            assert_eq!(MoodKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(MoodKind::parse("grumpy"), None);
    }

    #[test]
    fn test_goals_wire_format() {
        let goals = Goals {
            goal_type: Some(GoalType::WeightLoss),
            target_weight: Some(65.0),
        };
        let json = serde_json::to_value(&goals).unwrap();
        assert_eq!(json["type"], "weight_loss");
        assert_eq!(json["targetWeight"], 65.0);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            email: "demo@quickcal.ai".into(),
            password_hash: "secret".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("demo@quickcal.ai"));
    }
}
