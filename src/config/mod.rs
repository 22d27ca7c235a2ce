// ABOUTME: Configuration module for the QuickCal server
// ABOUTME: Re-exports environment-driven configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! Configuration management

/// Environment-based configuration loading
pub mod environment;

pub use environment::{
    AuthConfig, DatabaseConfig, DatabaseUrl, ExternalServicesConfig, LlmConfig, LogLevel,
    NutritionApiConfig, RecognitionConfig, SecurityConfig, ServerConfig,
};
