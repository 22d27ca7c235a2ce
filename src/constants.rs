// ABOUTME: Application constants and fixed behavioral thresholds
// ABOUTME: Centralizes limits and defaults so modules share one source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Application constants and configuration values

/// Behavioral thresholds for recommendation and coaching logic
pub mod limits {
    /// Maximum number of food recommendations returned per request
    pub const MAX_RECOMMENDATIONS: usize = 4;

    /// Daily intake below this (kcal) triggers calorie-replenishment ordering
    /// and a low-intake warning
    pub const LOW_INTAKE_KCAL: f64 = 1200.0;

    /// Daily intake above this (kcal) triggers a portion-control warning
    pub const HIGH_INTAKE_KCAL: f64 = 3000.0;

    /// A meal item with more protein than this (grams) counts as a protein source
    pub const PROTEIN_SOURCE_GRAMS: f64 = 5.0;

    /// Default mood timeline window in days
    pub const DEFAULT_TIMELINE_DAYS: i64 = 30;

    /// Nutrition search cache TTL in seconds
    pub const NUTRITION_CACHE_TTL_SECS: u64 = 3600;

    /// Maximum request body size in bytes (uploads are base64 JSON)
    pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;
}

/// Default values used when environment variables are absent
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 5000;

    /// Default SQLite database URL
    pub const DATABASE_URL: &str = "sqlite:./data/quickcal.db";

    /// Development-only JWT secret; production deployments must override
    pub const JWT_SECRET: &str = "super-secret-change-me";

    /// JWT expiry in hours (7 days)
    pub const JWT_EXPIRY_HOURS: u64 = 168;

    /// Default OpenAI-compatible chat completions base URL
    pub const LLM_BASE_URL: &str = "https://api.openai.com/v1";

    /// Default chat model
    pub const LLM_MODEL: &str = "gpt-4o-mini";

    /// Default USDA FoodData Central base URL
    pub const NUTRITION_API_BASE: &str = "https://api.nal.usda.gov/fdc/v1";
}

/// Service identity strings
pub mod service {
    /// Service name used in logs and token audience
    pub const NAME: &str = "quickcal-server";
}
