// ABOUTME: Centralized resource container for dependency injection
// ABOUTME: Builds and shares database, auth, engines, and external clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! # Server Resources
//!
//! All shared server state is constructed once at startup and handed to the
//! HTTP layer behind an `Arc`. There are no ambient singletons: everything a
//! handler needs arrives through this container.

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::external::{UsdaClient, UsdaClientConfig};
use crate::intelligence::{Catalog, CoachEngine, RecommendationSelector};
use crate::llm::{FallbackResponder, LlmProvider, OpenAiConfig, OpenAiProvider};
use crate::nutrition::NutritionService;
use crate::recognition::RecognitionService;

/// Centralized resource container for dependency injection
pub struct ServerResources {
    /// Database handle
    pub database: Arc<Database>,
    /// JWT and password authentication
    pub auth_manager: Arc<AuthManager>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Mood-based recommendation selector over the static catalog
    pub selector: RecommendationSelector,
    /// Rule-based coaching engine
    pub coach: CoachEngine,
    /// Deterministic assistant fallback
    pub fallback: FallbackResponder,
    /// External chat provider, when configured
    pub chat_provider: Option<Arc<dyn LlmProvider>>,
    /// Food search service
    pub nutrition: NutritionService,
    /// Food recognition service
    pub recognition: RecognitionService,
}

impl ServerResources {
    /// Assemble server resources from configuration
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        let external = &config.external_services;

        let chat_provider: Option<Arc<dyn LlmProvider>> =
            external.llm.api_key.as_ref().map(|api_key| {
                let provider = OpenAiProvider::new(OpenAiConfig {
                    api_key: api_key.clone(),
                    base_url: external.llm.base_url.clone(),
                    model: external.llm.model.clone(),
                });
                Arc::new(provider) as Arc<dyn LlmProvider>
            });

        let usda = external.nutrition.api_key.as_ref().map(|api_key| {
            UsdaClient::new(UsdaClientConfig::new(
                api_key.clone(),
                external.nutrition.base_url.clone(),
            ))
        });

        let recognition =
            RecognitionService::new(external.recognition.model_server_url.clone());

        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            config,
            selector: RecommendationSelector::new(Catalog::new()),
            coach: CoachEngine::new(),
            fallback: FallbackResponder::new(),
            chat_provider,
            nutrition: NutritionService::new(usda),
            recognition,
        }
    }
}
