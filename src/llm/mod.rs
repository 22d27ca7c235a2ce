// ABOUTME: LLM provider abstraction for the chat assistant
// ABOUTME: Defines message types, the provider contract, and the local fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! # LLM Provider Interface
//!
//! The chat assistant prefers an external OpenAI-compatible provider when one
//! is configured and reachable, and otherwise answers from the local
//! [`FallbackResponder`]. The provider contract is deliberately small: a
//! non-streaming chat completion over role-tagged messages.

mod fallback;
mod openai;

pub use fallback::FallbackResponder;
pub use openai::{OpenAiConfig, OpenAiProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// System prompt shaping the assistant's behavior
pub const ASSISTANT_SYSTEM_PROMPT: &str = "You are QuickCal AI, a helpful health and nutrition assistant. Provide personalized advice about nutrition, meal planning, and healthy lifestyle choices. Keep responses concise and actionable.";

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// String representation for API calls and storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a chat conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Configuration for a chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier override
    pub model: Option<String>,
    /// Temperature for response randomness
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new chat request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated message content
    pub content: String,
    /// Model used for generation
    pub model: String,
}

/// LLM provider trait for chat completion
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g. "openai")
    fn name(&self) -> &'static str;

    /// Default model used when the request does not specify one
    fn default_model(&self) -> &str;

    /// Perform a chat completion
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream request fails or the response cannot
    /// be parsed; callers fall back to the local responder.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
