// ABOUTME: Deterministic keyword-matching responder for the chat assistant
// ABOUTME: Used when no external LLM is configured or the external call fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Local fallback responder
//!
//! Tests the last user message against keyword buckets in fixed priority
//! order and returns the first matching canned reply. Given the same input
//! text the responder always produces the same output, which keeps the chat
//! endpoint testable without network access.

/// Deterministic canned-reply generator
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackResponder;

impl FallbackResponder {
    /// Create a new fallback responder
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Produce a canned reply for the given user message.
    ///
    /// Buckets are checked in priority order; the first match wins and
    /// matches are not combined.
    #[must_use]
    pub fn respond(&self, content: &str) -> &'static str {
        let message = content.to_lowercase();

        if message.contains("meal") || message.contains("food") {
            "I'd be happy to help with meal planning! Based on your profile and recent activities, I recommend focusing on balanced meals with adequate protein, healthy fats, and plenty of vegetables. Would you like specific meal suggestions?"
        } else if message.contains("calories") || message.contains("nutrition") {
            "For nutrition tracking, aim for a balanced approach. Focus on whole foods, adequate protein (0.8-1g per kg body weight), and don't forget about micronutrients from fruits and vegetables. What specific nutrition questions do you have?"
        } else if message.contains("exercise") || message.contains("workout") {
            "Regular physical activity is great for overall health! Aim for at least 150 minutes of moderate-intensity exercise per week, plus strength training twice weekly. What type of activities do you enjoy?"
        } else {
            "Hello! I'm your QuickCal AI assistant. I can help you with nutrition advice, meal planning, and healthy lifestyle tips. What would you like to know about today?"
        }
    }
}
