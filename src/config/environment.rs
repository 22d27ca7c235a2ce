// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into typed configuration with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Environment-based configuration management
//!
//! All runtime configuration comes from environment variables (optionally via
//! a `.env` file). Every setting has a development default so a bare
//! `cargo run` starts a working server.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::defaults;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        write!(f, "{s}")
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from a connection string
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for JWTs
    pub jwt_secret: String,
    /// JWT expiry time in hours
    pub jwt_expiry_hours: u64,
}

/// OpenAI-compatible LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; the assistant uses the local fallback when absent
    pub api_key: Option<String>,
    /// Base URL of the chat completions API
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

/// USDA FoodData Central configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionApiConfig {
    /// API key; food search uses built-in data when absent
    pub api_key: Option<String>,
    /// Base URL of the FoodData Central API
    pub base_url: String,
}

/// Food recognition model server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Model server URL; scans return mock detections when absent
    pub model_server_url: Option<String>,
}

/// External service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Chat assistant LLM
    pub llm: LlmConfig,
    /// Nutrition data lookup
    pub nutrition: NutritionApiConfig,
    /// Food recognition
    pub recognition: RecognitionConfig,
}

/// Security settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// CORS allowed origins; `*` allows any origin
    pub cors_origins: Vec<String>,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// External service configuration
    pub external_services: ExternalServicesConfig,
    /// Security settings
    pub security: SecurityConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a present environment variable fails to parse
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            warn!("JWT_SECRET not set, using development default");
            defaults::JWT_SECRET.to_owned()
        });

        Ok(Self {
            http_port: env_var_or("PORT", &defaults::HTTP_PORT.to_string())?
                .parse()
                .context("Invalid PORT value")?,
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned()),
            ),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL)?),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &defaults::JWT_EXPIRY_HOURS.to_string(),
                )?
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
            external_services: ExternalServicesConfig {
                llm: LlmConfig {
                    api_key: env::var("OPENAI_API_KEY").ok(),
                    base_url: env_var_or("OPENAI_BASE_URL", defaults::LLM_BASE_URL)?,
                    model: env_var_or("OPENAI_MODEL", defaults::LLM_MODEL)?,
                },
                nutrition: NutritionApiConfig {
                    api_key: env::var("USDA_API_KEY").ok(),
                    base_url: env_var_or("NUTRITION_API_BASE", defaults::NUTRITION_API_BASE)?,
                },
                recognition: RecognitionConfig {
                    model_server_url: env::var("MODEL_SERVER_URL").ok(),
                },
            },
            security: SecurityConfig {
                cors_origins: parse_origins(&env_var_or("CORS_ORIGINS", "*")?),
            },
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} database={} llm={} nutrition_api={} recognition={}",
            self.http_port,
            self.database.url,
            if self.external_services.llm.api_key.is_some() {
                self.external_services.llm.model.as_str()
            } else {
                "local-fallback"
            },
            if self.external_services.nutrition.api_key.is_some() {
                "usda"
            } else {
                "built-in"
            },
            if self.external_services.recognition.model_server_url.is_some() {
                "model-server"
            } else {
                "simulated"
            },
        )
    }
}

fn env_var_or(name: &str, default: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Ok(default.to_owned()),
    }
}

fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        let file = DatabaseUrl::parse_url("sqlite:./data/quickcal.db");
        assert_eq!(file.to_connection_string(), "sqlite:./data/quickcal.db");
        // Bare paths are treated as SQLite files
        let bare = DatabaseUrl::parse_url("./dev.db");
        assert_eq!(bare.to_connection_string(), "sqlite:./dev.db");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:8080, http://127.0.0.1:8080"),
            vec!["http://localhost:8080", "http://127.0.0.1:8080"]
        );
    }
}
