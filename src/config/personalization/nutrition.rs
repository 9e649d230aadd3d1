// ABOUTME: Nutrition configuration for goal calculation
// ABOUTME: BMR coefficients, activity factors, calorie adjustments, macro splits, water and fiber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goal Configuration
//!
//! Constants behind the daily nutrition goal. Defaults reproduce the goal
//! tables the mobile app has always shipped with.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use fitplan_core::models::{ActivityLevel, Objective};
use serde::{Deserialize, Serialize};

/// Nutrition goal configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie surplus/deficit per objective
    pub calorie_adjustments: CalorieAdjustmentsConfig,
    /// Macro split per objective
    pub macro_splits: MacroSplitsConfig,
    /// Daily water target
    pub hydration: HydrationConfig,
    /// Daily fiber target
    pub fiber: FiberConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0 per kg)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25 per cm)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0 per year)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// sedentario: 1.2
    pub sedentary: f64,
    /// leve: 1.375
    pub lightly_active: f64,
    /// moderado: 1.55
    pub moderately_active: f64,
    /// ativo: 1.725
    pub very_active: f64,
    /// `muito_ativo`: 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentario => self.sedentary,
            ActivityLevel::Leve => self.lightly_active,
            ActivityLevel::Moderado => self.moderately_active,
            ActivityLevel::Ativo => self.very_active,
            ActivityLevel::MuitoAtivo => self.extra_active,
        }
    }
}

/// Daily calorie adjustment applied on top of TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentsConfig {
    /// emagrecer: -500 kcal
    pub weight_loss_kcal: f64,
    /// `ganhar_massa`: +300 kcal
    pub muscle_gain_kcal: f64,
}

impl CalorieAdjustmentsConfig {
    /// Adjustment for an objective; maintenance and conditioning get none
    #[must_use]
    pub const fn adjustment_for(&self, objective: Objective) -> f64 {
        match objective {
            Objective::Emagrecer => self.weight_loss_kcal,
            Objective::GanharMassa => self.muscle_gain_kcal,
            Objective::Manter | Objective::Condicionamento => 0.0,
        }
    }
}

/// Share of daily calories per macronutrient, as fractions summing to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein fraction
    pub protein: f64,
    /// Carbohydrate fraction
    pub carb: f64,
    /// Fat fraction
    pub fat: f64,
}

impl MacroSplit {
    /// Create a split
    #[must_use]
    pub const fn new(protein: f64, carb: f64, fat: f64) -> Self {
        Self { protein, carb, fat }
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let sum = self.protein + self.carb + self.fat;
        if (sum - 1.0).abs() > 0.001 {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} macro split must sum to 1.0, got {sum}"
            )));
        }
        if self.protein <= 0.0 || self.carb <= 0.0 || self.fat <= 0.0 {
            return Err(ConfigError::InvalidWeights(format!(
                "{name} macro split fractions must be positive"
            )));
        }
        Ok(())
    }
}

/// Macro split per objective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// emagrecer: 35% protein, 40% carbs, 25% fat
    pub weight_loss: MacroSplit,
    /// `ganhar_massa`: 30% protein, 50% carbs, 20% fat
    pub muscle_gain: MacroSplit,
    /// everything else: 25% protein, 55% carbs, 20% fat
    pub balanced: MacroSplit,
}

impl MacroSplitsConfig {
    /// Split for an objective
    #[must_use]
    pub const fn split_for(&self, objective: Objective) -> MacroSplit {
        match objective {
            Objective::Emagrecer => self.weight_loss,
            Objective::GanharMassa => self.muscle_gain,
            Objective::Manter | Objective::Condicionamento => self.balanced,
        }
    }

    /// Validate that every split sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first bad split
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weight_loss.validate("weight_loss")?;
        self.muscle_gain.validate("muscle_gain")?;
        self.balanced.validate("balanced")
    }
}

/// Water target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Liters per kg of body weight: 0.033
    pub liters_per_kg: f64,
    /// Extra liters for `ativo` and `muito_ativo`: 0.5
    pub active_bonus_l: f64,
}

/// Fiber target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiberConfig {
    /// Grams per 1000 kcal: 14
    pub grams_per_1000_kcal: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for CalorieAdjustmentsConfig {
    fn default() -> Self {
        Self {
            weight_loss_kcal: -500.0,
            muscle_gain_kcal: 300.0,
        }
    }
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroSplit::new(0.35, 0.40, 0.25),
            muscle_gain: MacroSplit::new(0.30, 0.50, 0.20),
            balanced: MacroSplit::new(0.25, 0.55, 0.20),
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            liters_per_kg: 0.033,
            active_bonus_l: 0.5,
        }
    }
}

impl Default for FiberConfig {
    fn default() -> Self {
        Self {
            grams_per_1000_kcal: 14.0,
        }
    }
}
