// ABOUTME: Workout planner configuration
// ABOUTME: Default weekly frequency and session length, and high-intensity volume scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Workout planner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutConfig {
    /// Repetition multiplier for high and maximum intensity: 1.5
    pub high_intensity_rep_multiplier: f64,
    /// Sessions per week when the frequency answer is missing: 3
    pub default_sessions_per_week: u8,
    /// Session minutes when the duration answer is missing: 60
    pub default_duration_minutes: u32,
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self {
            high_intensity_rep_multiplier: 1.5,
            default_sessions_per_week: 3,
            default_duration_minutes: 60,
        }
    }
}
