// ABOUTME: Assistant chat route handlers
// ABOUTME: Prefers the configured LLM provider, falls back to canned replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Assistant chat routes
//!
//! The reply comes from the external LLM provider when one is configured and
//! the call succeeds; otherwise the deterministic fallback answers from the
//! last user message. Both the incoming user message and the reply are
//! persisted.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm::{ChatMessage, ChatRequest, MessageRole};
use crate::resources::ServerResources;

/// A chat message as sent by the client
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    /// Message role: user, assistant, or system
    pub role: String,
    /// Message content
    pub content: String,
}

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    /// Conversation messages, oldest first
    pub messages: Vec<IncomingMessage>,
}

/// Chat response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply
    pub message: ReplyMessage,
}

/// The assistant message inside the reply envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplyMessage {
    /// Always "assistant"
    pub role: String,
    /// Reply content
    pub content: String,
}

/// Assistant routes handler
pub struct AssistantRoutes;

impl AssistantRoutes {
    /// Create all assistant routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/assistant/chat", post(Self::handle_chat))
            .with_state(resources)
    }

    fn parse_role(role: &str) -> Result<MessageRole, AppError> {
        match role {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            "system" => Ok(MessageRole::System),
            other => Err(AppError::invalid_input(format!(
                "Unknown message role: {other}"
            ))),
        }
    }

    /// Handle POST /api/assistant/chat
    async fn handle_chat(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<ChatBody>,
    ) -> Result<Response, AppError> {
        let auth = super::authenticate(&headers, &resources).await?;

        let messages: Vec<ChatMessage> = body
            .messages
            .iter()
            .map(|message| {
                Ok(ChatMessage::new(
                    Self::parse_role(&message.role)?,
                    message.content.clone(),
                ))
            })
            .collect::<Result<_, AppError>>()?;

        let last = messages
            .last()
            .ok_or_else(|| AppError::invalid_input("messages must not be empty"))?
            .clone();

        if last.role == MessageRole::User {
            resources
                .database
                .add_chat_message(auth.user_id, MessageRole::User, &last.content)
                .await?;
        }

        let content = Self::reply_content(&resources, messages, &last.content).await;

        resources
            .database
            .add_chat_message(auth.user_id, MessageRole::Assistant, &content)
            .await?;

        let response = ChatReply {
            message: ReplyMessage {
                role: MessageRole::Assistant.as_str().to_owned(),
                content,
            },
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// LLM reply when configured and reachable, canned fallback otherwise
    async fn reply_content(
        resources: &Arc<ServerResources>,
        messages: Vec<ChatMessage>,
        last_user_content: &str,
    ) -> String {
        if let Some(provider) = &resources.chat_provider {
            match provider.complete(&ChatRequest::new(messages)).await {
                Ok(response) => return response.content,
                Err(e) => {
                    warn!("LLM request failed, using fallback: {e}");
                }
            }
        }

        resources.fallback.respond(last_user_content).to_owned()
    }
}
