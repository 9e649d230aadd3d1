// ABOUTME: Configuration module for the personalization engines
// ABOUTME: Hosts the personalization config tree and its environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Goal, workout and meal analysis constants
pub mod personalization;

pub use personalization::{ConfigError, PersonalizationConfig};
