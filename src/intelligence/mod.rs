// ABOUTME: Recommendation and coaching intelligence for QuickCal
// ABOUTME: Pure, synchronous engines over static catalog data and request state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! # Intelligence Engines
//!
//! This module hosts the pure computation at the heart of QuickCal:
//!
//! - [`catalog`]: the static food recommendation catalog grouped by mood
//! - [`selector`]: mood-aware selection, filtering, and ordering of catalog items
//! - [`coach`]: the rule-based coaching advice generator
//!
//! All engines are stateless and deterministic: identical inputs produce
//! identical outputs, and none of them perform I/O. Shared state is limited
//! to the read-only catalog constructed at startup.

pub mod catalog;
pub mod coach;
pub mod selector;

pub use catalog::{Catalog, Difficulty, Macros, MoodCategory, MoodOption, RecommendationItem};
pub use coach::{CoachEngine, CoachRecommendations, HealthData, MealItemSummary, MealSummary, ProfileSnapshot};
pub use selector::{RecommendationRequest, RecommendationResponse, RecommendationSelector};
