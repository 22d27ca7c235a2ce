// ABOUTME: External API clients used by QuickCal services
// ABOUTME: Currently the USDA FoodData Central nutrition client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

//! External API clients

/// USDA FoodData Central client for nutritional data
pub mod usda;

pub use usda::{UsdaClient, UsdaClientConfig};
