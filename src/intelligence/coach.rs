// ABOUTME: Rule-based coaching engine generating categorized health advice
// ABOUTME: Ordered independent rules append to immediate, meal, lifestyle, and warning buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Coaching rule engine
//!
//! The engine evaluates an ordered list of independent rules over the
//! caller-supplied health state. Each rule inspects one slice of the input
//! and may append entries to one or more output buckets. Rules never read
//! each other's output, so ordering only determines append order within a
//! bucket. Repeated advice across rules is not deduplicated.

use serde::{Deserialize, Serialize};

use crate::constants::limits;
use crate::models::{ActivityLevel, GoalType, Goals, Meal, MoodKind, Profile};

/// Item-name keywords that count as vegetable coverage. A deliberately
/// narrow heuristic, not a food taxonomy.
const VEGETABLE_KEYWORDS: [&str; 4] = ["vegetable", "salad", "broccoli", "spinach"];

/// A meal reduced to what the coaching rules need
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    /// Total calories for the meal
    #[serde(default)]
    pub total_kcal: f64,
    /// Items with the fields the coverage rules inspect
    #[serde(default)]
    pub items: Vec<MealItemSummary>,
}

/// A meal item reduced to what the coaching rules need
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItemSummary {
    /// Item name, matched against vegetable keywords
    pub name: String,
    /// Protein in grams, if known
    #[serde(default)]
    pub protein: Option<f64>,
}

impl From<&Meal> for MealSummary {
    fn from(meal: &Meal) -> Self {
        Self {
            total_kcal: meal.total_kcal as f64,
            items: meal
                .items
                .iter()
                .map(|item| MealItemSummary {
                    name: item.name.clone(),
                    protein: item.protein,
                })
                .collect(),
        }
    }
}

/// The slice of a profile the coaching rules consume
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSnapshot {
    /// Activity level, if set
    pub activity: Option<ActivityLevel>,
    /// Goal settings, if set
    pub goals: Option<Goals>,
}

impl From<&Profile> for ProfileSnapshot {
    fn from(profile: &Profile) -> Self {
        Self {
            activity: profile.activity,
            goals: profile.goals.clone(),
        }
    }
}

/// Input state for the coaching engine
///
/// Every field is optional; a rule whose input is absent simply does not
/// fire. The engine never fails.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    /// Current mood tag; unrecognized values produce no mood advice
    #[serde(default)]
    pub current_mood: Option<String>,
    /// Opaque health status payload; accepted but not yet inspected by rules
    #[serde(default)]
    pub health_status: Option<serde_json::Value>,
    /// Recent meals, typically today's
    #[serde(default)]
    pub recent_meals: Option<Vec<MealSummary>>,
    /// Profile snapshot, merged in server-side from the stored profile
    #[serde(skip)]
    pub profile: Option<ProfileSnapshot>,
}

/// Categorized coaching advice
///
/// Append-only during generation; append order is output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachRecommendations {
    /// Things to do right now
    pub immediate: Vec<String>,
    /// Meal planning advice
    pub meal_planning: Vec<String>,
    /// Longer-term lifestyle advice
    pub lifestyle: Vec<String>,
    /// Intake warnings
    pub warnings: Vec<String>,
}

impl CoachRecommendations {
    /// Whether no rule produced any advice
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty()
            && self.meal_planning.is_empty()
            && self.lifestyle.is_empty()
            && self.warnings.is_empty()
    }
}

/// Rule-based coaching advice generator
///
/// Stateless and synchronous; safe to share across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoachEngine;

impl CoachEngine {
    /// Create a new coaching engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate categorized advice for the given health state
    #[must_use]
    pub fn generate(&self, data: &HealthData) -> CoachRecommendations {
        let mut rec = CoachRecommendations::default();

        if let Some(mood) = data.current_mood.as_deref().and_then(MoodKind::parse) {
            Self::apply_mood_rule(&mut rec, mood);
        }

        if let Some(meals) = data.recent_meals.as_deref() {
            if !meals.is_empty() {
                Self::apply_intake_rule(&mut rec, meals);
                Self::apply_coverage_rule(&mut rec, meals);
            }
        }

        if let Some(profile) = &data.profile {
            Self::apply_goal_rule(&mut rec, profile);
            Self::apply_activity_rule(&mut rec, profile);
        }

        rec
    }

    /// At most one branch fires, keyed by the reported mood
    fn apply_mood_rule(rec: &mut CoachRecommendations, mood: MoodKind) {
        match mood {
            MoodKind::Stressed => {
                rec.immediate.push("Try deep breathing exercises".into());
                rec.meal_planning.push(
                    "Include magnesium-rich foods like dark chocolate, nuts, and leafy greens"
                        .into(),
                );
                rec.lifestyle
                    .push("Consider adding meditation to your daily routine".into());
            }
            MoodKind::LowEnergy => {
                rec.immediate
                    .push("Take a short walk or do light stretching".into());
                rec.meal_planning.push(
                    "Focus on iron-rich foods like lean meats, spinach, and lentils".into(),
                );
                rec.lifestyle
                    .push("Ensure you're getting 7-9 hours of sleep".into());
            }
            MoodKind::Anxious => {
                rec.immediate
                    .push("Practice the 4-7-8 breathing technique".into());
                rec.meal_planning.push(
                    "Include omega-3 rich foods like salmon, walnuts, and chia seeds".into(),
                );
                rec.lifestyle
                    .push("Limit caffeine intake, especially in the afternoon".into());
            }
            MoodKind::Sad => {
                rec.immediate
                    .push("Get some sunlight or bright light exposure".into());
                rec.meal_planning.push(
                    "Include vitamin D rich foods and consider B-complex vitamins".into(),
                );
                rec.lifestyle
                    .push("Try to connect with friends or family".into());
            }
            MoodKind::Excited => {
                rec.immediate
                    .push("Channel this energy into a productive activity".into());
                rec.meal_planning
                    .push("Maintain balanced meals to sustain energy levels".into());
            }
            MoodKind::Happy => {
                rec.immediate
                    .push("Great job maintaining your positive mood!".into());
                rec.meal_planning
                    .push("Continue your current healthy eating patterns".into());
            }
        }
    }

    /// Warn on low or high total intake. The bounds are strict, so a sum of
    /// exactly 1200 or 3000 kcal produces no warning, and the two conditions
    /// are mutually exclusive.
    fn apply_intake_rule(rec: &mut CoachRecommendations, meals: &[MealSummary]) {
        let total_kcal: f64 = meals.iter().map(|meal| meal.total_kcal).sum();

        if total_kcal < limits::LOW_INTAKE_KCAL {
            rec.warnings
                .push("Your calorie intake seems low. Consider adding healthy snacks.".into());
        } else if total_kcal > limits::HIGH_INTAKE_KCAL {
            rec.warnings
                .push("Your calorie intake is quite high. Consider portion control.".into());
        }
    }

    /// Suggest missing food groups across all items of all recent meals
    fn apply_coverage_rule(rec: &mut CoachRecommendations, meals: &[MealSummary]) {
        let has_protein = meals.iter().any(|meal| {
            meal.items
                .iter()
                .any(|item| item.protein.is_some_and(|p| p > limits::PROTEIN_SOURCE_GRAMS))
        });
        let has_vegetables = meals.iter().any(|meal| {
            meal.items.iter().any(|item| {
                let name = item.name.to_lowercase();
                VEGETABLE_KEYWORDS.iter().any(|keyword| name.contains(keyword))
            })
        });

        if !has_protein {
            rec.meal_planning.push(
                "Add more protein sources like lean meats, fish, eggs, or legumes".into(),
            );
        }
        if !has_vegetables {
            rec.meal_planning.push(
                "Include more vegetables in your meals for essential vitamins and minerals"
                    .into(),
            );
        }
    }

    /// Goal-specific guidance; goal types without guidance produce nothing
    fn apply_goal_rule(rec: &mut CoachRecommendations, profile: &ProfileSnapshot) {
        match profile.goals.as_ref().and_then(|goals| goals.goal_type) {
            Some(GoalType::WeightLoss) => {
                rec.lifestyle
                    .push("Create a moderate calorie deficit through diet and exercise".into());
                rec.meal_planning
                    .push("Focus on high-protein, high-fiber foods for satiety".into());
            }
            Some(GoalType::MuscleGain) => {
                rec.meal_planning
                    .push("Increase protein intake to 1.6-2.2g per kg body weight".into());
                rec.lifestyle
                    .push("Incorporate resistance training 3-4 times per week".into());
            }
            Some(GoalType::Maintenance) | None => {}
        }
    }

    /// Movement guidance for sedentary users
    fn apply_activity_rule(rec: &mut CoachRecommendations, profile: &ProfileSnapshot) {
        if profile.activity == Some(ActivityLevel::Sedentary) {
            rec.lifestyle
                .push("Try to incorporate 150 minutes of moderate activity per week".into());
            rec.immediate
                .push("Take regular breaks to stand and move throughout the day".into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CoachEngine {
        CoachEngine::new()
    }

    fn meal(total_kcal: f64, items: Vec<MealItemSummary>) -> MealSummary {
        MealSummary { total_kcal, items }
    }

    fn item(name: &str, protein: Option<f64>) -> MealItemSummary {
        MealItemSummary {
            name: name.to_owned(),
            protein,
        }
    }

    #[test]
    fn test_empty_input_produces_empty_buckets() {
        let rec = engine().generate(&HealthData::default());
        assert!(rec.is_empty());
    }

    #[test]
    fn test_unrecognized_mood_produces_no_mood_advice() {
        let data = HealthData {
            current_mood: Some("ecstatic".into()),
            ..HealthData::default()
        };
        assert!(engine().generate(&data).is_empty());
    }

    #[test]
    fn test_stressed_mood_fills_three_buckets() {
        let data = HealthData {
            current_mood: Some("stressed".into()),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(rec.immediate, vec!["Try deep breathing exercises"]);
        assert_eq!(
            rec.meal_planning,
            vec!["Include magnesium-rich foods like dark chocolate, nuts, and leafy greens"]
        );
        assert_eq!(
            rec.lifestyle,
            vec!["Consider adding meditation to your daily routine"]
        );
        assert!(rec.warnings.is_empty());
    }

    #[test]
    fn test_excited_mood_fills_two_buckets_only() {
        let data = HealthData {
            current_mood: Some("excited".into()),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(rec.immediate.len(), 1);
        assert_eq!(rec.meal_planning.len(), 1);
        assert!(rec.lifestyle.is_empty());
    }

    #[test]
    fn test_low_intake_warning() {
        let data = HealthData {
            recent_meals: Some(vec![meal(500.0, vec![]), meal(400.0, vec![])]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(
            rec.warnings,
            vec!["Your calorie intake seems low. Consider adding healthy snacks."]
        );
    }

    #[test]
    fn test_high_intake_warning() {
        let data = HealthData {
            recent_meals: Some(vec![meal(1800.0, vec![]), meal(1400.0, vec![])]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(
            rec.warnings,
            vec!["Your calorie intake is quite high. Consider portion control."]
        );
    }

    #[test]
    fn test_intake_boundaries_are_strict() {
        for total in [1200.0, 3000.0] {
            let data = HealthData {
                recent_meals: Some(vec![meal(total, vec![item("Salad", Some(10.0))])]),
                ..HealthData::default()
            };
            let rec = engine().generate(&data);
            assert!(rec.warnings.is_empty(), "sum {total} should not warn");
        }
    }

    #[test]
    fn test_no_meals_means_no_meal_rules() {
        let data = HealthData {
            recent_meals: Some(vec![]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_missing_protein_and_vegetables_suggested() {
        let data = HealthData {
            recent_meals: Some(vec![meal(
                2000.0,
                vec![item("White rice", Some(2.0)), item("Toast", None)],
            )]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(
            rec.meal_planning,
            vec![
                "Add more protein sources like lean meats, fish, eggs, or legumes",
                "Include more vegetables in your meals for essential vitamins and minerals",
            ]
        );
    }

    #[test]
    fn test_protein_threshold_is_strict() {
        // Exactly 5 g does not count as a protein source
        let data = HealthData {
            recent_meals: Some(vec![meal(2000.0, vec![item("Spinach salad", Some(5.0))])]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert!(rec
            .meal_planning
            .iter()
            .any(|advice| advice.contains("protein sources")));
        // Vegetable keyword matched, so no vegetable suggestion
        assert!(!rec
            .meal_planning
            .iter()
            .any(|advice| advice.contains("more vegetables")));
    }

    #[test]
    fn test_weight_loss_goal_guidance() {
        let data = HealthData {
            profile: Some(ProfileSnapshot {
                activity: None,
                goals: Some(Goals {
                    goal_type: Some(GoalType::WeightLoss),
                    target_weight: Some(65.0),
                }),
            }),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(
            rec.lifestyle,
            vec!["Create a moderate calorie deficit through diet and exercise"]
        );
        assert_eq!(
            rec.meal_planning,
            vec!["Focus on high-protein, high-fiber foods for satiety"]
        );
    }

    #[test]
    fn test_muscle_gain_goal_guidance() {
        let data = HealthData {
            profile: Some(ProfileSnapshot {
                activity: None,
                goals: Some(Goals {
                    goal_type: Some(GoalType::MuscleGain),
                    target_weight: None,
                }),
            }),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(
            rec.meal_planning,
            vec!["Increase protein intake to 1.6-2.2g per kg body weight"]
        );
        assert_eq!(
            rec.lifestyle,
            vec!["Incorporate resistance training 3-4 times per week"]
        );
    }

    #[test]
    fn test_maintenance_goal_produces_nothing() {
        let data = HealthData {
            profile: Some(ProfileSnapshot {
                activity: None,
                goals: Some(Goals {
                    goal_type: Some(GoalType::Maintenance),
                    target_weight: Some(70.0),
                }),
            }),
            ..HealthData::default()
        };
        assert!(engine().generate(&data).is_empty());
    }

    #[test]
    fn test_sedentary_activity_rule_fires_regardless_of_other_fields() {
        let snapshot = ProfileSnapshot {
            activity: Some(ActivityLevel::Sedentary),
            goals: None,
        };
        for data in [
            HealthData {
                profile: Some(snapshot.clone()),
                ..HealthData::default()
            },
            HealthData {
                current_mood: Some("happy".into()),
                recent_meals: Some(vec![meal(2000.0, vec![item("Salad", Some(20.0))])]),
                profile: Some(snapshot),
                health_status: None,
            },
        ] {
            let rec = engine().generate(&data);
            assert!(rec
                .lifestyle
                .contains(&"Try to incorporate 150 minutes of moderate activity per week".to_owned()));
            assert!(rec
                .immediate
                .contains(&"Take regular breaks to stand and move throughout the day".to_owned()));
        }
    }

    #[test]
    fn test_advice_is_not_deduplicated_across_rules() {
        // Both the low-energy mood rule and the protein coverage rule mention
        // meal planning; entries accumulate in append order without dedup.
        let data = HealthData {
            current_mood: Some("low_energy".into()),
            recent_meals: Some(vec![meal(1500.0, vec![item("Plain bagel", Some(1.0))])]),
            ..HealthData::default()
        };
        let rec = engine().generate(&data);
        assert_eq!(rec.meal_planning.len(), 3);
        assert_eq!(
            rec.meal_planning[0],
            "Focus on iron-rich foods like lean meats, spinach, and lentils"
        );
    }

    #[test]
    fn test_meal_summary_from_stored_meal() {
        use chrono::Utc;
        use uuid::Uuid;

        let meal_id = Uuid::new_v4();
        let stored = Meal {
            id: meal_id,
            user_id: Uuid::new_v4(),
            time: Utc::now(),
            total_kcal: 650,
            items: vec![crate::models::MealItem {
                id: Uuid::new_v4(),
                meal_id,
                name: "Oatmeal".into(),
                quantity: 100.0,
                kcal: Some(389.0),
                protein: Some(16.9),
                carbs: Some(66.3),
                fat: Some(6.9),
            }],
            created_at: Utc::now(),
        };
        let summary = MealSummary::from(&stored);
        assert!((summary.total_kcal - 650.0).abs() < f64::EPSILON);
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.items[0].name, "Oatmeal");
        assert_eq!(summary.items[0].protein, Some(16.9));
    }
}
