// ABOUTME: OpenAI-compatible chat completion provider
// ABOUTME: Talks to api.openai.com or any server speaking the same protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! OpenAI-compatible provider
//!
//! Sends chat completions to an OpenAI-compatible `/chat/completions`
//! endpoint. The system prompt is prepended server-side so clients only send
//! conversation turns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, ASSISTANT_SYSTEM_PROMPT};
use crate::constants::defaults;
use crate::errors::AppError;

/// Configuration for the OpenAI-compatible provider
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl OpenAiConfig {
    /// Config for a key with default base URL and model
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: defaults::LLM_BASE_URL.to_owned(),
            model: defaults::LLM_MODEL.to_owned(),
        }
    }
}

/// Chat completion request body in OpenAI wire format
#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completion response body in OpenAI wire format
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// OpenAI-compatible chat provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    http_client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider from configuration
    #[must_use]
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    fn wire_messages<'a>(request: &'a ChatRequest) -> Vec<WireMessage<'a>> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(WireMessage {
            role: "system",
            content: ASSISTANT_SYSTEM_PROMPT,
        });
        messages.extend(request.messages.iter().map(|message: &ChatMessage| {
            WireMessage {
                role: message.role.as_str(),
                content: &message.content,
            }
        }));
        messages
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let body = CompletionBody {
            model,
            messages: Self::wire_messages(request),
            max_tokens: request.max_tokens.unwrap_or(500),
            temperature: request.temperature.unwrap_or(0.7),
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Requesting chat completion from {url} with model {model}");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("LLM", e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                "LLM",
                format!("HTTP {}", response.status()),
            ));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service("LLM", format!("JSON parse error: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::external_service("LLM", "response contained no choices"))?;

        Ok(ChatResponse {
            content,
            model: completion.model.unwrap_or_else(|| model.to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MessageRole;

    #[test]
    fn test_system_prompt_prepended() {
        let request = ChatRequest::new(vec![ChatMessage::user("What should I eat?")]);
        let messages = OpenAiProvider::wire_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, ASSISTANT_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        assert_eq!(MessageRole::Assistant.as_str(), "assistant");
        let json = serde_json::to_string(&MessageRole::User).unwrap();
        assert_eq!(json, "\"user\"");
    }
}
