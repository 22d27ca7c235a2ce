// ABOUTME: Static food recommendation catalog grouped by mood category
// ABOUTME: Defines catalog items, mood-specific tips, and nutritional advice text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Static recommendation catalog
//!
//! The catalog is defined once at startup and never mutated. Selection
//! produces filtered views over these items; the items themselves are
//! only ever cloned into responses.

use serde::{Deserialize, Serialize};

/// Mood categories accepted by the recommendation endpoint
///
/// `Tired` and `Sick` are accepted on the wire but have no dedicated catalog
/// bucket; they resolve to the `Positive` bucket. Unrecognized strings also
/// degrade to `Positive` rather than erroring (see [`MoodCategory::parse_or_default`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodCategory {
    Positive,
    LowEnergy,
    Fever,
    Stressed,
    Tired,
    Sick,
}

impl MoodCategory {
    /// Parse a mood string, degrading unknown values to `Positive`.
    ///
    /// The silent default is intentional, long-standing behavior: the
    /// endpoint never rejects a mood value, it degrades. The default lives
    /// in this one match arm so it stays visible and testable.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "low-energy" | "low_energy" => Self::LowEnergy,
            "fever" => Self::Fever,
            "stressed" => Self::Stressed,
            "tired" => Self::Tired,
            "sick" => Self::Sick,
            // "positive" and anything unrecognized
            _ => Self::Positive,
        }
    }

    /// Wire identifier for this mood
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::LowEnergy => "low-energy",
            Self::Fever => "fever",
            Self::Stressed => "stressed",
            Self::Tired => "tired",
            Self::Sick => "sick",
        }
    }
}

/// Preparation difficulty of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Display macro breakdown for a catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Macros {
    /// Protein display string, e.g. "10P"
    pub protein: String,
    /// Carbohydrate display string, e.g. "35C"
    pub carbs: String,
    /// Fat display string, e.g. "8F"
    pub fat: String,
}

impl Macros {
    fn new(protein: &str, carbs: &str, fat: &str) -> Self {
        Self {
            protein: protein.to_owned(),
            carbs: carbs.to_owned(),
            fat: fat.to_owned(),
        }
    }
}

/// A single suggested food or recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Calorie count
    pub calories: u32,
    /// Macro breakdown as display strings
    pub macros: Macros,
    /// Free-text benefit statement
    pub benefits: String,
    /// Preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    /// Preparation difficulty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Ingredient list, matched against dietary restrictions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Display glyph
    pub image: String,
}

/// A selectable mood option shown by the client
#[derive(Debug, Clone, Serialize)]
pub struct MoodOption {
    /// Wire identifier
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
    /// Display emoji
    pub emoji: &'static str,
}

/// The static recommendation catalog
///
/// Constructed once and shared read-only. Lookup falls back to the
/// `Positive` bucket for moods without a dedicated one.
pub struct Catalog {
    low_energy: Vec<RecommendationItem>,
    positive: Vec<RecommendationItem>,
    fever: Vec<RecommendationItem>,
    stressed: Vec<RecommendationItem>,
}

impl Catalog {
    /// Build the catalog from its built-in definitions
    #[must_use]
    pub fn new() -> Self {
        Self {
            low_energy: low_energy_items(),
            positive: positive_items(),
            fever: fever_items(),
            stressed: stressed_items(),
        }
    }

    /// Items for a mood, falling back to the positive bucket
    #[must_use]
    pub fn items_for(&self, mood: MoodCategory) -> &[RecommendationItem] {
        match mood {
            MoodCategory::LowEnergy => &self.low_energy,
            MoodCategory::Fever => &self.fever,
            MoodCategory::Stressed => &self.stressed,
            MoodCategory::Positive | MoodCategory::Tired | MoodCategory::Sick => &self.positive,
        }
    }

    /// Mood-specific general tips, falling back to the positive list
    #[must_use]
    pub fn general_tips(mood: MoodCategory) -> &'static [&'static str] {
        match mood {
            MoodCategory::LowEnergy => &[
                "Stay hydrated with water and herbal teas",
                "Eat small, frequent meals to maintain energy",
                "Include iron-rich foods like spinach and beans",
                "Get some natural sunlight when possible",
            ],
            MoodCategory::Fever => &[
                "Focus on hydration - drink plenty of fluids",
                "Eat light, easily digestible foods",
                "Include foods with anti-inflammatory properties",
                "Rest and allow your body to recover",
            ],
            MoodCategory::Stressed => &[
                "Practice mindful eating",
                "Limit caffeine and sugar intake",
                "Include calming foods like chamomile tea",
                "Take time to enjoy your meals without distractions",
            ],
            MoodCategory::Positive | MoodCategory::Tired | MoodCategory::Sick => &[
                "Maintain your great routine!",
                "Include colorful fruits and vegetables",
                "Stay active and enjoy your meals",
                "Share healthy meals with friends and family",
            ],
        }
    }

    /// Mood-specific nutritional advice paragraph, falling back to positive
    #[must_use]
    pub fn nutritional_advice(mood: MoodCategory) -> &'static str {
        match mood {
            MoodCategory::LowEnergy => {
                "Focus on complex carbohydrates and iron-rich foods. B-vitamins from whole grains can help convert food into energy more efficiently."
            }
            MoodCategory::Fever => {
                "Your body needs extra nutrients to fight infection. Focus on easily digestible foods rich in vitamin C, zinc, and anti-inflammatory compounds."
            }
            MoodCategory::Stressed => {
                "Chronic stress depletes certain nutrients. Prioritize magnesium-rich foods, omega-3 fatty acids, and avoid excessive caffeine or sugar."
            }
            MoodCategory::Positive | MoodCategory::Tired | MoodCategory::Sick => {
                "Keep up the great work! Continue with a balanced diet rich in omega-3s, antioxidants, and whole foods to maintain your positive mood."
            }
        }
    }

    /// The fixed list of mood options shown by the client
    #[must_use]
    pub fn mood_options() -> &'static [MoodOption] {
        &[
            MoodOption {
                id: "positive",
                label: "Positive",
                emoji: "😊",
            },
            MoodOption {
                id: "low-energy",
                label: "Low Energy",
                emoji: "⚡",
            },
            MoodOption {
                id: "fever",
                label: "Fever/Cold",
                emoji: "🤒",
            },
            MoodOption {
                id: "stressed",
                label: "Stressed",
                emoji: "😰",
            },
            MoodOption {
                id: "tired",
                label: "Tired",
                emoji: "😴",
            },
        ]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    calories: u32,
    macros: Macros,
    benefits: &str,
    cooking_time: u32,
    difficulty: Difficulty,
    ingredients: &[&str],
    image: &str,
) -> RecommendationItem {
    RecommendationItem {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        calories,
        macros,
        benefits: benefits.to_owned(),
        cooking_time: Some(cooking_time),
        difficulty: Some(difficulty),
        ingredients: Some(ingredients.iter().map(|&i| i.to_owned()).collect()),
        image: image.to_owned(),
    }
}

fn low_energy_items() -> Vec<RecommendationItem> {
    vec![
        item(
            "green-smoothie-1",
            "Revitalizing Green Smoothie",
            "Boosts energy & aids recovery.",
            250,
            Macros::new("10P", "35C", "8F"),
            "Rich in iron and B-vitamins for natural energy boost",
            5,
            Difficulty::Easy,
            &["Spinach", "Banana", "Almond milk", "Chia seeds", "Honey"],
            "🥬",
        ),
        item(
            "quinoa-salad-1",
            "Hearty Quinoa Power Bowl",
            "Rich in protein and complex carbs.",
            380,
            Macros::new("18P", "50C", "12F"),
            "Complete protein and sustained energy release",
            25,
            Difficulty::Medium,
            &["Quinoa", "Chickpeas", "Bell peppers", "Cucumber", "Olive oil"],
            "🥗",
        ),
        item(
            "oatmeal-1",
            "Energy-Boosting Oatmeal",
            "Sustained energy with natural sweetness.",
            320,
            Macros::new("12P", "45C", "10F"),
            "Slow-release carbs for steady energy levels",
            10,
            Difficulty::Easy,
            &["Oats", "Banana", "Walnuts", "Cinnamon", "Honey"],
            "🥣",
        ),
    ]
}

fn positive_items() -> Vec<RecommendationItem> {
    vec![
        item(
            "salmon-1",
            "Grilled Salmon with Vegetables",
            "Omega-3 rich for brain health.",
            420,
            Macros::new("35P", "15C", "25F"),
            "Supports mood and cognitive function",
            20,
            Difficulty::Medium,
            &["Salmon fillet", "Asparagus", "Sweet potato", "Lemon", "Herbs"],
            "🐟",
        ),
        item(
            "berry-bowl-1",
            "Antioxidant Berry Bowl",
            "Packed with mood-boosting nutrients.",
            280,
            Macros::new("15P", "40C", "8F"),
            "Antioxidants support overall well-being",
            5,
            Difficulty::Easy,
            &["Mixed berries", "Greek yogurt", "Granola", "Honey", "Mint"],
            "🫐",
        ),
    ]
}

fn fever_items() -> Vec<RecommendationItem> {
    vec![
        item(
            "ginger-soup-1",
            "Healing Ginger Chicken Soup",
            "Soothing and immune-boosting.",
            220,
            Macros::new("25P", "12C", "8F"),
            "Anti-inflammatory properties aid recovery",
            45,
            Difficulty::Medium,
            &["Chicken breast", "Ginger", "Garlic", "Vegetables", "Broth"],
            "🍲",
        ),
        item(
            "citrus-tea-1",
            "Immune-Boosting Citrus Tea",
            "Vitamin C rich hydration.",
            45,
            Macros::new("0P", "12C", "0F"),
            "High vitamin C content supports immune system",
            5,
            Difficulty::Easy,
            &["Green tea", "Lemon", "Orange", "Honey", "Ginger"],
            "🍋",
        ),
    ]
}

fn stressed_items() -> Vec<RecommendationItem> {
    vec![item(
        "magnesium-bowl-1",
        "Calming Magnesium Bowl",
        "Stress-reducing nutrients.",
        360,
        Macros::new("14P", "35C", "18F"),
        "Magnesium helps reduce stress and anxiety",
        15,
        Difficulty::Easy,
        &["Dark chocolate", "Almonds", "Spinach", "Avocado", "Seeds"],
        "🥑",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_known_moods() {
        assert_eq!(MoodCategory::parse_or_default("positive"), MoodCategory::Positive);
        assert_eq!(MoodCategory::parse_or_default("low-energy"), MoodCategory::LowEnergy);
        assert_eq!(MoodCategory::parse_or_default("low_energy"), MoodCategory::LowEnergy);
        assert_eq!(MoodCategory::parse_or_default("fever"), MoodCategory::Fever);
        assert_eq!(MoodCategory::parse_or_default("stressed"), MoodCategory::Stressed);
        assert_eq!(MoodCategory::parse_or_default("tired"), MoodCategory::Tired);
        assert_eq!(MoodCategory::parse_or_default("sick"), MoodCategory::Sick);
    }

    #[test]
    fn test_parse_or_default_degrades_to_positive() {
        assert_eq!(MoodCategory::parse_or_default("angry"), MoodCategory::Positive);
        assert_eq!(MoodCategory::parse_or_default(""), MoodCategory::Positive);
    }

    #[test]
    fn test_moods_without_bucket_fall_back_to_positive() {
        let catalog = Catalog::new();
        let positive: Vec<_> = catalog
            .items_for(MoodCategory::Positive)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        let tired: Vec<_> = catalog
            .items_for(MoodCategory::Tired)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        let sick: Vec<_> = catalog
            .items_for(MoodCategory::Sick)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(positive, tired);
        assert_eq!(positive, sick);
    }

    #[test]
    fn test_every_bucket_is_nonempty() {
        let catalog = Catalog::new();
        for mood in [
            MoodCategory::Positive,
            MoodCategory::LowEnergy,
            MoodCategory::Fever,
            MoodCategory::Stressed,
        ] {
            assert!(!catalog.items_for(mood).is_empty(), "{mood:?} bucket empty");
            assert!(!Catalog::general_tips(mood).is_empty());
            assert!(!Catalog::nutritional_advice(mood).is_empty());
        }
    }

    #[test]
    fn test_item_wire_format() {
        let catalog = Catalog::new();
        let json = serde_json::to_value(&catalog.items_for(MoodCategory::LowEnergy)[0]).unwrap();
        assert_eq!(json["id"], "green-smoothie-1");
        assert_eq!(json["cookingTime"], 5);
        assert_eq!(json["difficulty"], "easy");
        assert_eq!(json["macros"]["protein"], "10P");
    }
}
