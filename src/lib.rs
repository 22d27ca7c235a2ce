// ABOUTME: Main library entry point for the QuickCal nutrition API server
// ABOUTME: Provides REST endpoints for meal tracking, recommendations, and AI coaching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

#![deny(unsafe_code)]

//! # QuickCal Server
//!
//! A nutrition-tracking API backend. QuickCal lets users log meals and moods,
//! look up nutritional data, and receive food recommendations and coaching
//! advice tailored to how they feel and what they have eaten.
//!
//! ## Features
//!
//! - **User accounts**: registration, login, and JWT-authenticated sessions
//! - **Meal logging**: meals with per-item macros and daily summaries
//! - **Mood journal**: mood entries with daily and timeline views
//! - **Recommendations**: mood-aware food suggestions from a curated catalog
//! - **Coaching**: rule-based advice across four categories (immediate,
//!   meal planning, lifestyle, warnings)
//! - **Assistant**: chat backed by an OpenAI-compatible provider with a
//!   deterministic local fallback
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Routes**: thin axum handlers per domain, delegating to services
//! - **Intelligence**: pure, synchronous recommendation and coaching engines
//! - **Database**: SQLite persistence with per-domain operation modules
//! - **External**: USDA FoodData Central and model-server clients
//! - **Config**: environment-driven configuration with sensible defaults

/// JWT-based authentication and password hashing
pub mod auth;

/// Configuration management from environment variables
pub mod config;

/// Application constants and fixed thresholds
pub mod constants;

/// SQLite persistence layer with per-domain operations
pub mod database;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// External API clients (USDA FoodData Central, food recognition)
pub mod external;

/// Recommendation selection and coaching rule engine
pub mod intelligence;

/// LLM provider abstraction and local fallback responder
pub mod llm;

/// Structured logging configuration
pub mod logging;

/// Common data models shared across modules
pub mod models;

/// Food search with external lookup and built-in fallback data
pub mod nutrition;

/// Simulated food recognition for camera scans
pub mod recognition;

/// Centralized resource container for dependency injection
pub mod resources;

/// HTTP routes for all API endpoints
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
