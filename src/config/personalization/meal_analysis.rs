// ABOUTME: Meal analysis normalizer configuration
// ABOUTME: Placeholder name for food items the vision model returned without a name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Meal analysis normalizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAnalysisConfig {
    /// Name given to items the model did not name
    pub unknown_item_name: String,
}

impl Default for MealAnalysisConfig {
    fn default() -> Self {
        Self {
            unknown_item_name: "Alimento não identificado".to_owned(),
        }
    }
}
