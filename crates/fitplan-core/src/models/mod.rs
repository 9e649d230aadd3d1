// ABOUTME: Data models exchanged between the engines and their collaborators
// ABOUTME: Quiz profile input plus nutrition goal, workout plan and meal analysis outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meal photo analysis result normalized from AI model output
pub mod meal_analysis;
/// Daily nutrition targets derived from the quiz
pub mod nutrition_goal;
/// User health questionnaire and its boundary parsing
pub mod quiz;
/// Weekly workout schedule derived from the quiz
pub mod workout;

pub use meal_analysis::{MealAnalysisResult, MealItem, MealTotals};
pub use nutrition_goal::{
    MacroBreakdown, MacroTarget, MealSlot, Micronutrient, MicronutrientRecommendation,
    NutritionGoal,
};
pub use quiz::{
    ActivityLevel, DietaryRestriction, GymAccess, Habit, Objective, PreferredTime, QuizProfile,
    SessionDuration, Sex, SpecificGoal, TrainingFrequency,
};
pub use workout::{Exercise, Intensity, Repetitions, WorkoutPlan, WorkoutSession, WorkoutType};
