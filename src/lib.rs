// ABOUTME: Main library entry point for the fitplan personalization engine
// ABOUTME: Nutrition goals and workout plans from quiz answers, and meal photo analysis normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Engine
//!
//! The personalization rules behind the fitplan app:
//!
//! - **Goal calculator**: quiz answers to daily calories, macros, fiber,
//!   water, micronutrient guidance, meal timing and tips
//! - **Workout planner**: quiz answers to a weekly session schedule
//! - **Meal analysis normalizer**: vision model text to a validated
//!   nutrition breakdown with totals recomputed from the items
//!
//! All three are synchronous and free of I/O. HTTP, persistence and the
//! call to the vision model belong to the embedding service.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan_engine::config::PersonalizationConfig;
//! use fitplan_engine::intelligence::{calculate_nutrition_goal, generate_workout_plan};
//! use fitplan_engine::models::QuizProfile;
//! use serde_json::json;
//!
//! # fn main() -> fitplan_engine::errors::AppResult<()> {
//! let profile = QuizProfile::from_answers(&json!({
//!     "sexo": "masculino",
//!     "idade": 25,
//!     "altura": 1.75,
//!     "peso_atual": 70,
//!     "nivel_atividade": "moderado",
//!     "objetivo": "emagrecer"
//! }));
//!
//! let config = PersonalizationConfig::global();
//! let goal = calculate_nutrition_goal(&profile, config)?;
//! let plan = generate_workout_plan(&profile, config);
//! println!("{} kcal, {} sessions", goal.calories_daily, plan.sessions.len());
//! # Ok(())
//! # }
//! ```

/// Personalization configuration and environment overrides
pub mod config;
/// Fixed constants
pub mod constants;
/// Unified error types
pub mod errors;
/// Goal, workout and meal analysis engines
pub mod intelligence;
/// Structured logging setup
pub mod logging;

/// Quiz input and engine output models
pub mod models {
    pub use fitplan_core::models::*;
}

/// Lenient coercion of untrusted JSON fields
pub use fitplan_core::coerce;
