// ABOUTME: Food search service with external lookup and built-in fallback data
// ABOUTME: Also computes macro totals for quantities of per-100g foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Nutrition service
//!
//! Food search prefers the USDA FoodData Central API when a key is
//! configured; on failure or when unconfigured it answers from a small
//! built-in table of common foods. All values are per 100 g.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppResult;
use crate::external::UsdaClient;

/// A food search result with per-100g macro values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodHit {
    /// External database id, when the hit came from the USDA API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Food name
    pub name: String,
    /// Calories per 100 g
    pub kcal: f64,
    /// Protein grams per 100 g
    pub protein: f64,
    /// Carbohydrate grams per 100 g
    pub carbs: f64,
    /// Fat grams per 100 g
    pub fat: f64,
    /// Always true; values are normalized to 100 g
    pub per_100g: bool,
}

/// Summed macro totals for a set of quantified items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories
    pub kcal: f64,
    /// Total protein grams
    pub protein: f64,
    /// Total carbohydrate grams
    pub carbs: f64,
    /// Total fat grams
    pub fat: f64,
}

/// An item with a quantity and optional per-100g macros
#[derive(Debug, Clone, Deserialize)]
pub struct QuantifiedItem {
    /// Quantity in grams
    pub quantity: f64,
    /// Calories per 100 g
    #[serde(default)]
    pub kcal: Option<f64>,
    /// Protein per 100 g
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrates per 100 g
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat per 100 g
    #[serde(default)]
    pub fat: Option<f64>,
}

/// Built-in nutrition data for common foods, used when the external API is
/// unavailable. Values are per 100 g.
const FALLBACK_FOODS: [(&str, f64, f64, f64, f64); 10] = [
    ("Apple", 52.0, 0.3, 14.0, 0.2),
    ("Banana", 89.0, 1.1, 23.0, 0.3),
    ("Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    ("Brown Rice", 111.0, 2.6, 23.0, 0.9),
    ("Broccoli", 34.0, 2.8, 7.0, 0.4),
    ("Salmon", 208.0, 20.0, 0.0, 13.0),
    ("Oatmeal", 389.0, 16.9, 66.0, 6.9),
    ("Almonds", 579.0, 21.0, 22.0, 50.0),
    ("Greek Yogurt", 59.0, 10.0, 3.6, 0.4),
    ("Eggs", 155.0, 13.0, 1.1, 11.0),
];

/// Food search with external lookup and built-in fallback
pub struct NutritionService {
    usda: Option<UsdaClient>,
}

impl NutritionService {
    /// Create the service; pass `None` to always use built-in data
    #[must_use]
    pub const fn new(usda: Option<UsdaClient>) -> Self {
        Self { usda }
    }

    /// Search foods by name
    ///
    /// # Errors
    ///
    /// Never fails in practice: an external API error degrades to the
    /// built-in table, which always answers.
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<FoodHit>> {
        if let Some(usda) = &self.usda {
            match usda.search_foods(query).await {
                Ok(hits) => return Ok(hits),
                Err(e) => {
                    warn!("USDA API failed, falling back to local data: {e}");
                }
            }
        }

        Ok(Self::search_fallback(query))
    }

    /// Case-insensitive substring search over the built-in table
    #[must_use]
    pub fn search_fallback(query: &str) -> Vec<FoodHit> {
        let needle = query.to_lowercase();
        FALLBACK_FOODS
            .iter()
            .filter(|(name, ..)| name.to_lowercase().contains(&needle))
            .map(|&(name, kcal, protein, carbs, fat)| FoodHit {
                id: None,
                name: name.to_owned(),
                kcal,
                protein,
                carbs,
                fat,
                per_100g: true,
            })
            .collect()
    }

    /// Sum macro totals across quantified items, scaling per-100g values
    #[must_use]
    pub fn calculate_totals(items: &[QuantifiedItem]) -> MacroTotals {
        items.iter().fold(MacroTotals::default(), |totals, item| {
            let scale = item.quantity / 100.0;
            MacroTotals {
                kcal: totals.kcal + item.kcal.unwrap_or(0.0) * scale,
                protein: totals.protein + item.protein.unwrap_or(0.0) * scale,
                carbs: totals.carbs + item.carbs.unwrap_or(0.0) * scale,
                fat: totals.fat + item.fat.unwrap_or(0.0) * scale,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_search_is_case_insensitive() {
        let hits = NutritionService::search_fallback("chicken");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chicken Breast");
        assert!((hits[0].protein - 31.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallback_search_no_match() {
        assert!(NutritionService::search_fallback("durian").is_empty());
    }

    #[test]
    fn test_calculate_totals_scales_by_quantity() {
        let items = [
            QuantifiedItem {
                quantity: 200.0,
                kcal: Some(52.0),
                protein: Some(0.3),
                carbs: Some(14.0),
                fat: Some(0.2),
            },
            QuantifiedItem {
                quantity: 50.0,
                kcal: Some(389.0),
                protein: None,
                carbs: None,
                fat: None,
            },
        ];
        let totals = NutritionService::calculate_totals(&items);
        assert!((totals.kcal - (104.0 + 194.5)).abs() < 1e-9);
        assert!((totals.protein - 0.6).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_service_without_api_key_uses_fallback() {
        let service = NutritionService::new(None);
        let hits = service.search_foods("yogurt").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Greek Yogurt");
    }
}
