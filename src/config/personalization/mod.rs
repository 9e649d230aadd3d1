// ABOUTME: Personalization configuration for goal calculation, workout planning and meal analysis
// ABOUTME: Global singleton with defaults, FITPLAN_* environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Personalization Configuration Module
//!
//! Every constant the engines apply lives here, so product changes to the
//! goal tables are configuration changes rather than code changes.
//!
//! Defaults match the values the mobile app has always used. A handful of
//! knobs can be overridden through `FITPLAN_*` environment variables; the
//! Mifflin-St Jeor coefficients and activity factors are not overridable.

/// Configuration error types
pub mod error;
/// Meal analysis normalizer settings
pub mod meal_analysis;
/// BMR, TDEE, macro, water and fiber settings
pub mod nutrition;
/// Quiz fallback values and plausibility ranges
pub mod quiz;
/// Workout planner settings
pub mod workout;

pub use error::ConfigError;
pub use meal_analysis::MealAnalysisConfig;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentsConfig, FiberConfig, HydrationConfig,
    MacroSplit, MacroSplitsConfig, NutritionConfig,
};
pub use quiz::{QuizFallbacksConfig, QuizValidationConfig};
pub use workout::WorkoutConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PERSONALIZATION_CONFIG: OnceLock<PersonalizationConfig> = OnceLock::new();

/// Main personalization configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Nutrition goal constants
    pub nutrition: NutritionConfig,
    /// Fallbacks for missing quiz answers
    pub quiz_fallbacks: QuizFallbacksConfig,
    /// Plausibility ranges and strict mode
    pub validation: QuizValidationConfig,
    /// Workout planner constants
    pub workout: WorkoutConfig,
    /// Meal analysis constants
    pub meal_analysis: MealAnalysisConfig,
}

impl PersonalizationConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PERSONALIZATION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load personalization config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_quiz()?;
        self.validate_workout()?;

        if self.meal_analysis.unknown_item_name.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "Unknown meal item name must not be blank",
            ));
        }

        Ok(())
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        if nutr.calorie_adjustments.weight_loss_kcal > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight loss adjustment must not be a surplus",
            ));
        }
        if nutr.calorie_adjustments.muscle_gain_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Muscle gain adjustment must not be a deficit",
            ));
        }

        nutr.macro_splits.validate()?;

        if nutr.hydration.liters_per_kg <= 0.0 || nutr.hydration.active_bonus_l < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Water per kg must be positive and active bonus non-negative",
            ));
        }

        if nutr.fiber.grams_per_1000_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fiber per 1000 kcal must be positive",
            ));
        }

        Ok(())
    }

    fn validate_quiz(&self) -> Result<(), ConfigError> {
        let ranges = &self.validation;
        if ranges.age_min >= ranges.age_max {
            return Err(ConfigError::InvalidRange("age_min must be < age_max"));
        }
        if ranges.height_min_m >= ranges.height_max_m {
            return Err(ConfigError::InvalidRange(
                "height_min_m must be < height_max_m",
            ));
        }
        if ranges.weight_min_kg >= ranges.weight_max_kg {
            return Err(ConfigError::InvalidRange(
                "weight_min_kg must be < weight_max_kg",
            ));
        }

        let fallbacks = &self.quiz_fallbacks;
        let in_range = (ranges.age_min..=ranges.age_max).contains(&fallbacks.age_years)
            && (ranges.height_min_m..=ranges.height_max_m).contains(&fallbacks.height_m)
            && (ranges.weight_min_kg..=ranges.weight_max_kg).contains(&fallbacks.weight_kg);
        if !in_range {
            return Err(ConfigError::ValueOutOfRange(
                "Quiz fallbacks must lie inside the plausibility ranges",
            ));
        }

        Ok(())
    }

    fn validate_workout(&self) -> Result<(), ConfigError> {
        let workout = &self.workout;
        if !workout.high_intensity_rep_multiplier.is_finite()
            || workout.high_intensity_rep_multiplier < 1.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "High intensity rep multiplier must be >= 1.0",
            ));
        }
        if !(1..=7).contains(&workout.default_sessions_per_week) {
            return Err(ConfigError::ValueOutOfRange(
                "Default sessions per week must be between 1 and 7",
            ));
        }
        if workout.default_duration_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default session duration must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to apply environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Quiz fallbacks
        Self::apply_env_var("FITPLAN_FALLBACK_AGE", &mut self.quiz_fallbacks.age_years)?;
        Self::apply_env_var(
            "FITPLAN_FALLBACK_HEIGHT_M",
            &mut self.quiz_fallbacks.height_m,
        )?;
        Self::apply_env_var(
            "FITPLAN_FALLBACK_WEIGHT_KG",
            &mut self.quiz_fallbacks.weight_kg,
        )?;
        Self::apply_env_var(
            "FITPLAN_STRICT_QUIZ_VALIDATION",
            &mut self.validation.strict,
        )?;

        // Nutrition
        Self::apply_env_var(
            "FITPLAN_WATER_L_PER_KG",
            &mut self.nutrition.hydration.liters_per_kg,
        )?;
        Self::apply_env_var(
            "FITPLAN_WATER_ACTIVE_BONUS_L",
            &mut self.nutrition.hydration.active_bonus_l,
        )?;
        Self::apply_env_var(
            "FITPLAN_FIBER_G_PER_1000_KCAL",
            &mut self.nutrition.fiber.grams_per_1000_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_WEIGHT_LOSS_ADJUSTMENT_KCAL",
            &mut self.nutrition.calorie_adjustments.weight_loss_kcal,
        )?;
        Self::apply_env_var(
            "FITPLAN_MUSCLE_GAIN_ADJUSTMENT_KCAL",
            &mut self.nutrition.calorie_adjustments.muscle_gain_kcal,
        )?;

        // Workout planner
        Self::apply_env_var(
            "FITPLAN_HIGH_INTENSITY_REP_MULTIPLIER",
            &mut self.workout.high_intensity_rep_multiplier,
        )?;
        Self::apply_env_var(
            "FITPLAN_DEFAULT_SESSIONS_PER_WEEK",
            &mut self.workout.default_sessions_per_week,
        )?;
        Self::apply_env_var(
            "FITPLAN_DEFAULT_SESSION_MINUTES",
            &mut self.workout.default_duration_minutes,
        )?;

        // Meal analysis
        Self::apply_env_var(
            "FITPLAN_UNKNOWN_MEAL_ITEM_NAME",
            &mut self.meal_analysis.unknown_item_name,
        )?;

        Ok(self)
    }
}
