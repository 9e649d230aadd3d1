// ABOUTME: Personalization engines turning quiz answers and model output into plans and targets
// ABOUTME: Goal calculator, workout planner with its exercise catalogue, and meal analysis normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Stateless engines. Each takes its input plus a [`PersonalizationConfig`]
//! reference and returns a record for the caller to persist or display.
//!
//! [`PersonalizationConfig`]: crate::config::PersonalizationConfig

/// Static exercise templates per workout type and location
pub mod exercise_catalog;
/// Daily nutrition goal calculation
pub mod goal_calculator;
/// Vision model meal analysis normalization
pub mod meal_analysis;
/// Weekly workout plan generation
pub mod workout_planner;

pub use goal_calculator::{
    calculate_daily_calories, calculate_fiber, calculate_macros, calculate_mifflin_st_jeor,
    calculate_nutrition_goal, calculate_nutrition_goal_at, calculate_tdee, calculate_water,
    resolve_body_metrics, BodyMetrics,
};
pub use meal_analysis::{
    extract_json_object, normalize_meal_analysis, normalize_meal_value, parse_model_response,
    strip_code_fences, ParsedResponse,
};
pub use workout_planner::{
    determine_intensity, generate_workout_plan, generate_workout_plan_at, select_workout_types,
    sessions_per_week,
};
