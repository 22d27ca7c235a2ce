// ABOUTME: Mood-aware food recommendation selection over the static catalog
// ABOUTME: Applies dietary filtering, calorie-aware ordering, and result capping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Recommendation selector
//!
//! Given a mood and optional context, produces an ordered, capped list of
//! catalog items plus mood-specific tips and advice. The selection is a pure
//! function over the static catalog: no I/O, no hidden randomness, identical
//! input always yields identical output.

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, MoodCategory, RecommendationItem};
use crate::constants::limits;

/// Input context for a recommendation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Reported mood; unrecognized values degrade to positive
    pub mood: String,
    /// Calories consumed so far today
    #[serde(default)]
    pub current_calories: Option<f64>,
    /// Free-text restriction terms matched against ingredient names
    #[serde(default)]
    pub dietary_restrictions: Option<Vec<String>>,
    /// Accepted for forward compatibility; not used by filtering yet
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

/// Result of a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// The mood string as supplied by the caller
    pub mood: String,
    /// At most [`limits::MAX_RECOMMENDATIONS`] catalog items, ordered
    pub recommendations: Vec<RecommendationItem>,
    /// Mood-specific general tips
    pub general_tips: Vec<String>,
    /// Mood-specific nutritional advice paragraph
    pub nutritional_advice: String,
}

/// Selects and orders catalog items for a mood and context
pub struct RecommendationSelector {
    catalog: Catalog,
}

impl RecommendationSelector {
    /// Create a selector over the given catalog
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Select recommendations for the request
    ///
    /// The operation never fails: unknown moods degrade to the positive
    /// bucket, and missing context simply skips the corresponding step.
    #[must_use]
    pub fn select(&self, request: &RecommendationRequest) -> RecommendationResponse {
        let mood = MoodCategory::parse_or_default(&request.mood);

        let mut items: Vec<RecommendationItem> = self.catalog.items_for(mood).to_vec();

        if let Some(restrictions) = &request.dietary_restrictions {
            if !restrictions.is_empty() {
                let needles: Vec<String> =
                    restrictions.iter().map(|r| r.to_lowercase()).collect();
                items.retain(|item| !matches_restriction(item, &needles));
            }
        }

        // Below the daily intake threshold, favor calorie replenishment.
        // The sort is stable: equal-calorie items keep catalog order.
        if matches!(request.current_calories, Some(c) if c < limits::LOW_INTAKE_KCAL) {
            items.sort_by(|a, b| b.calories.cmp(&a.calories));
        }

        items.truncate(limits::MAX_RECOMMENDATIONS);

        RecommendationResponse {
            mood: request.mood.clone(),
            recommendations: items,
            general_tips: Catalog::general_tips(mood)
                .iter()
                .map(|&tip| tip.to_owned())
                .collect(),
            nutritional_advice: Catalog::nutritional_advice(mood).to_owned(),
        }
    }
}

/// Whether an item's ingredient list matches any lowercased restriction term.
///
/// An item with no ingredient list can never match and is kept. The match is
/// a plain substring test, not a food taxonomy: "nuts" excludes "Walnuts" but
/// only because the text literally overlaps.
fn matches_restriction(item: &RecommendationItem, needles: &[String]) -> bool {
    item.ingredients.as_ref().is_some_and(|ingredients| {
        ingredients.iter().any(|ingredient| {
            let ingredient = ingredient.to_lowercase();
            needles.iter().any(|needle| ingredient.contains(needle))
        })
    })
}
