// ABOUTME: Daily nutrition goal record produced by the goal calculator
// ABOUTME: Calories, macro split, fiber, water, micronutrients, meal timing and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target for a single macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTarget {
    /// Grams per day
    pub grams: i32,
    /// Share of daily calories, 0-100
    pub percent: f64,
}

/// Protein / carbohydrate / fat targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein target (4 kcal/g)
    pub protein: MacroTarget,
    /// Carbohydrate target (4 kcal/g)
    pub carb: MacroTarget,
    /// Fat target (9 kcal/g)
    pub fat: MacroTarget,
}

/// Micronutrients the goal gives guidance for
///
/// Variant order is the order entries are serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Micronutrient {
    /// Vitamin D
    VitaminaD,
    /// Vitamin B12
    VitaminaB12,
    /// Iron
    Ferro,
    /// Calcium
    Calcio,
    /// Magnesium
    Magnesio,
    /// Omega-3 fatty acids
    #[serde(rename = "omega_3")]
    Omega3,
    /// Zinc
    Zinco,
}

/// Where to get a micronutrient, how much, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicronutrientRecommendation {
    /// Food sources, most relevant first
    pub sources: Vec<String>,
    /// Daily amount, with unit
    pub amount: String,
    /// Why it matters for this user
    pub rationale: String,
}

/// Named meals of the day, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    CafeDaManha,
    /// Mid-morning snack
    LancheManha,
    /// Lunch
    Almoco,
    /// Afternoon snack
    LancheTarde,
    /// Dinner
    Jantar,
    /// Late snack
    Ceia,
}

/// Personalized daily nutrition goal
///
/// Immutable once built; a recalculation produces a new record and the
/// storage layer keeps the latest as the active goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoal {
    /// Daily calorie target (kcal)
    pub calories_daily: i32,
    /// Basal metabolic rate the target was derived from (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Macronutrient split
    pub macros: MacroBreakdown,
    /// Fiber target (g/day)
    pub fiber_g: i32,
    /// Water target (liters/day, two decimals)
    pub water_l: f64,
    /// Micronutrient guidance
    pub micronutrients: BTreeMap<Micronutrient, MicronutrientRecommendation>,
    /// Meal schedule, slot to `HH:MM`
    pub meal_timing: BTreeMap<MealSlot, String>,
    /// Ordered tips
    pub tips: Vec<String>,
    /// When the goal was calculated
    pub generated_at: DateTime<Utc>,
}
