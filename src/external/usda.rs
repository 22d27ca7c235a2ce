// ABOUTME: USDA FoodData Central API client for nutritional data retrieval
// ABOUTME: Implements food search with per-100g macro mapping and TTL caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! USDA FoodData Central API client
//!
//! Searches the free USDA FoodData Central API and maps the standard
//! nutrient numbers (208 energy, 203 protein, 205 carbohydrate, 204 fat)
//! onto per-100g values. Search results are cached in-process to keep
//! repeat queries off the network.
//!
//! API reference: <https://fdc.nal.usda.gov/api-guide.html>

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::nutrition::FoodHit;

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for the USDA API
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl_secs: u64,
}

impl UsdaClientConfig {
    /// Config for a key with defaults
    #[must_use]
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            cache_ttl_secs: limits::NUTRITION_CACHE_TTL_SECS,
        }
    }
}

/// USDA API search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    food_nutrients: Vec<SearchNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNutrient {
    #[serde(default)]
    nutrient_number: Option<String>,
    #[serde(default)]
    value: Option<f64>,
}

impl SearchFood {
    fn nutrient(&self, number: &str) -> f64 {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_number.as_deref() == Some(number))
            .and_then(|n| n.value)
            .unwrap_or(0.0)
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    hits: Vec<FoodHit>,
    expires_at: Instant,
}

/// USDA FoodData Central API client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    search_cache: RwLock<HashMap<String, CacheEntry>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    #[must_use]
    pub fn new(config: UsdaClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            search_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Search for foods by query string, returning per-100g macro values
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed; callers fall back to built-in food data.
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodHit>> {
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let cache_key = query.to_lowercase();
        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    debug!("USDA cache hit for {query}");
                    return Ok(entry.hits.clone());
                }
            }
        }

        let url = format!("{}/foods/search", self.config.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("query", query),
                ("api_key", &self.config.api_key),
                ("pageSize", "10"),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service("USDA API", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "USDA API",
                format!("HTTP {}", response.status()),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service("USDA API", format!("JSON parse error: {e}"))
        })?;

        let hits: Vec<FoodHit> = search_response
            .foods
            .iter()
            .map(|food| FoodHit {
                id: Some(food.fdc_id),
                name: food.description.clone(),
                kcal: food.nutrient("208"),
                protein: food.nutrient("203"),
                carbs: food.nutrient("205"),
                fat: food.nutrient("204"),
                per_100g: true,
            })
            .collect();

        {
            let mut cache = self.search_cache.write().await;
            cache.insert(
                cache_key,
                CacheEntry {
                    hits: hits.clone(),
                    expires_at: Instant::now() + Duration::from_secs(self.config.cache_ttl_secs),
                },
            );
        }

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_mapping() {
        let food = SearchFood {
            fdc_id: 1,
            description: "Apple".into(),
            food_nutrients: vec![
                SearchNutrient {
                    nutrient_number: Some("208".into()),
                    value: Some(52.0),
                },
                SearchNutrient {
                    nutrient_number: Some("203".into()),
                    value: Some(0.3),
                },
            ],
        };
        assert!((food.nutrient("208") - 52.0).abs() < f64::EPSILON);
        assert!((food.nutrient("203") - 0.3).abs() < f64::EPSILON);
        // Missing nutrients default to zero
        assert!(food.nutrient("204").abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let client = UsdaClient::new(UsdaClientConfig::new("key", "http://localhost:1"));
        assert!(client.search_foods("").await.is_err());
    }
}
