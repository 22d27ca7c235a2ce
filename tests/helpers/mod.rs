// ABOUTME: Test helper module exports
// ABOUTME: Provides the in-process axum request harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QuickCal

pub mod axum_test;
