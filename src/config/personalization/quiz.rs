// ABOUTME: Quiz input policy: fallback values for missing fields and plausibility ranges
// ABOUTME: Strict mode turns out-of-range answers into errors instead of warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Values used when a required numeric quiz answer is absent or unreadable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizFallbacksConfig {
    /// Age in years
    pub age_years: f64,
    /// Height in meters
    pub height_m: f64,
    /// Current weight in kg
    pub weight_kg: f64,
}

impl Default for QuizFallbacksConfig {
    fn default() -> Self {
        Self {
            age_years: 30.0,
            height_m: 1.70,
            weight_kg: 70.0,
        }
    }
}

/// Plausibility ranges for body metrics
///
/// Out-of-range values are always logged. They are rejected only when
/// `strict` is set; otherwise they are used as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizValidationConfig {
    /// Reject out-of-range answers
    pub strict: bool,
    /// Minimum plausible age (years)
    pub age_min: f64,
    /// Maximum plausible age (years)
    pub age_max: f64,
    /// Minimum plausible height (m)
    pub height_min_m: f64,
    /// Maximum plausible height (m)
    pub height_max_m: f64,
    /// Minimum plausible weight (kg)
    pub weight_min_kg: f64,
    /// Maximum plausible weight (kg)
    pub weight_max_kg: f64,
}

impl Default for QuizValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            age_min: 1.0,
            age_max: 120.0,
            height_min_m: 0.5,
            height_max_m: 2.6,
            weight_min_kg: 20.0,
            weight_max_kg: 400.0,
        }
    }
}
