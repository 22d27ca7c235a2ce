// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database, resources, and user creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

//! Shared test utilities for `quickcal_server`
//!
//! Common setup to reduce duplication across integration tests: an in-memory
//! database, test resources with external services unconfigured (so the
//! assistant and nutrition search exercise their fallbacks), and user
//! creation helpers.

use std::sync::Arc;

use quickcal_server::{
    auth::{hash_password, AuthManager},
    config::{
        AuthConfig, DatabaseConfig, DatabaseUrl, ExternalServicesConfig, LlmConfig, LogLevel,
        NutritionApiConfig, RecognitionConfig, SecurityConfig, ServerConfig,
    },
    database::Database,
    models::User,
    resources::ServerResources,
    server::HttpServer,
};

/// Server configuration for tests: in-memory database, no external services
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        auth: AuthConfig {
            jwt_secret: "test-secret".into(),
            jwt_expiry_hours: 24,
        },
        external_services: ExternalServicesConfig {
            llm: LlmConfig {
                api_key: None,
                base_url: "http://localhost:0".into(),
                model: "test-model".into(),
            },
            nutrition: NutritionApiConfig {
                api_key: None,
                base_url: "http://localhost:0".into(),
            },
            recognition: RecognitionConfig {
                model_server_url: None,
            },
        },
        security: SecurityConfig {
            cors_origins: vec!["*".into()],
        },
    }
}

/// Standard test resources over an in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let config = test_config();
    let database = Database::new(&config.database.url.to_connection_string())
        .await
        .expect("Failed to create test database");
    let auth_manager = AuthManager::new(config.auth.jwt_secret.as_bytes().to_vec(), 24);
    Arc::new(ServerResources::new(
        database,
        auth_manager,
        Arc::new(config),
    ))
}

/// The complete application router over the given resources
pub fn test_app(resources: Arc<ServerResources>) -> axum::Router {
    HttpServer::new(resources).router()
}

/// Create a test user and return it with a bearer header value
pub async fn create_test_user(resources: &Arc<ServerResources>) -> (User, String) {
    let password_hash = hash_password("password123").expect("Failed to hash password");
    let user = resources
        .database
        .create_user("tester@quickcal.ai", &password_hash)
        .await
        .expect("Failed to create test user");
    let token = resources
        .auth_manager
        .generate_token(&user)
        .expect("Failed to generate token");
    (user, format!("Bearer {token}"))
}
