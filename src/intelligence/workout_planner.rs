// ABOUTME: Weekly workout plan generation from quiz answers
// ABOUTME: Intensity table, weekly frequency, type rotation, session naming and rep scaling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Workout Planner Module
//!
//! Builds a [`WorkoutPlan`] from a [`QuizProfile`]. Session types rotate
//! round-robin over the types implied by the objective and the specific goals.
//! Regenerating a plan always starts from scratch with nothing completed; see
//! [`WorkoutPlan::carry_completed_from`] for callers who want to keep progress.

use super::exercise_catalog::exercises_for;
use crate::config::personalization::{PersonalizationConfig, WorkoutConfig};
use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use fitplan_core::models::{
    Exercise, GymAccess, Intensity, Objective, PreferredTime, QuizProfile, SpecificGoal,
    TrainingFrequency, WorkoutPlan, WorkoutSession, WorkoutType,
};
use tracing::debug;

/// Plan-wide intensity from objective and the beginner flag
///
/// Only the `iniciante` activity code counts as a beginner; every recognized
/// activity level follows the non-beginner row. Without an objective the plan
/// is medium intensity.
#[must_use]
pub const fn determine_intensity(objective: Option<Objective>, beginner: bool) -> Intensity {
    match (objective, beginner) {
        (Some(Objective::Emagrecer), true) => Intensity::Media,
        (Some(Objective::Emagrecer | Objective::Condicionamento), false) => Intensity::Alta,
        (Some(Objective::GanharMassa | Objective::Condicionamento), true) => Intensity::Baixa,
        (Some(Objective::GanharMassa), false) | (Some(Objective::Manter) | None, _) => {
            Intensity::Media
        }
    }
}

/// Sessions per week for the chosen frequency
#[must_use]
pub const fn sessions_per_week(frequency: TrainingFrequency) -> u8 {
    match frequency {
        TrainingFrequency::OneToTwo => 2,
        TrainingFrequency::ThreeToFour => 4,
        TrainingFrequency::FiveToSix => 5,
        TrainingFrequency::Daily => 7,
    }
}

const fn base_types(objective: Option<Objective>) -> &'static [WorkoutType] {
    match objective {
        Some(Objective::Emagrecer) => &[WorkoutType::Cardio, WorkoutType::Funcional],
        Some(Objective::GanharMassa) => &[WorkoutType::Forca, WorkoutType::Funcional],
        Some(Objective::Condicionamento) => &[
            WorkoutType::Cardio,
            WorkoutType::Forca,
            WorkoutType::Flexibilidade,
        ],
        Some(Objective::Manter) | None => &[WorkoutType::Funcional, WorkoutType::Cardio],
    }
}

const fn implied_type(goal: SpecificGoal) -> WorkoutType {
    match goal {
        SpecificGoal::Resistencia => WorkoutType::Cardio,
        SpecificGoal::Forca => WorkoutType::Forca,
        SpecificGoal::Flexibilidade => WorkoutType::Flexibilidade,
    }
}

/// Session types in rotation order
///
/// The objective's base types come first, followed by any type a specific
/// goal adds. Never empty, never repeats a type.
#[must_use]
pub fn select_workout_types(objective: Option<Objective>, goals: &[SpecificGoal]) -> Vec<WorkoutType> {
    let mut types: Vec<WorkoutType> = base_types(objective).to_vec();
    for workout_type in goals.iter().copied().map(implied_type) {
        if !types.contains(&workout_type) {
            types.push(workout_type);
        }
    }
    types
}

/// Display name for a session
#[must_use]
pub const fn session_name(workout_type: WorkoutType, intensity: Intensity) -> &'static str {
    match (workout_type, intensity) {
        (WorkoutType::Cardio, Intensity::Baixa) => "Cardio Leve",
        (WorkoutType::Cardio, Intensity::Media) => "Cardio Moderado",
        (WorkoutType::Cardio, Intensity::Alta) => "Cardio Intenso",
        (WorkoutType::Cardio, Intensity::Maxima) => "Cardio HIIT",
        (WorkoutType::Forca, Intensity::Baixa) => "Força Iniciante",
        (WorkoutType::Forca, Intensity::Media) => "Força Intermediário",
        (WorkoutType::Forca, Intensity::Alta) => "Força Avançado",
        (WorkoutType::Forca, Intensity::Maxima) => "Força Máxima",
        (WorkoutType::Funcional, Intensity::Baixa) => "Funcional Básico",
        (WorkoutType::Funcional, Intensity::Media) => "Funcional Moderado",
        (WorkoutType::Funcional, Intensity::Alta) => "Funcional Intenso",
        (WorkoutType::Funcional, Intensity::Maxima) => "Funcional Extremo",
        (WorkoutType::Flexibilidade, Intensity::Baixa) => "Alongamento Suave",
        (WorkoutType::Flexibilidade, Intensity::Media) => "Mobilidade e Alongamento",
        (WorkoutType::Flexibilidade, Intensity::Alta) => "Mobilidade Dinâmica",
        (WorkoutType::Flexibilidade, Intensity::Maxima) => "Mobilidade Avançada",
    }
}

/// Short description for a session of a given length
#[must_use]
pub fn session_description(workout_type: WorkoutType, duration_minutes: u32) -> String {
    match workout_type {
        WorkoutType::Cardio => format!(
            "Treino cardiovascular de {duration_minutes} minutos para melhorar o condicionamento e queimar calorias"
        ),
        WorkoutType::Forca => format!(
            "Treino de força de {duration_minutes} minutos focado nos principais grupos musculares"
        ),
        WorkoutType::Funcional => format!(
            "Circuito funcional de {duration_minutes} minutos combinando força, equilíbrio e agilidade"
        ),
        WorkoutType::Flexibilidade => format!(
            "Sessão de {duration_minutes} minutos de alongamento e mobilidade articular"
        ),
    }
}

/// Apply the intensity's volume scaling to a list of exercises
///
/// Counted repetitions are multiplied and floored at high and maximum
/// intensity; timed prescriptions are never touched.
#[must_use]
pub fn scale_for_intensity(
    exercises: Vec<Exercise>,
    intensity: Intensity,
    config: &WorkoutConfig,
) -> Vec<Exercise> {
    if !intensity.scales_volume() {
        return exercises;
    }
    exercises
        .into_iter()
        .map(|exercise| Exercise {
            reps: exercise.reps.scaled(config.high_intensity_rep_multiplier),
            ..exercise
        })
        .collect()
}

/// Generate a weekly plan stamped with the current time
#[must_use]
pub fn generate_workout_plan(profile: &QuizProfile, config: &PersonalizationConfig) -> WorkoutPlan {
    generate_workout_plan_at(profile, config, Utc::now())
}

/// Generate a weekly plan with an explicit timestamp
///
/// Deterministic: the same profile, config and timestamp give an identical plan.
#[must_use]
pub fn generate_workout_plan_at(
    profile: &QuizProfile,
    config: &PersonalizationConfig,
    generated_at: DateTime<Utc>,
) -> WorkoutPlan {
    let workout_config = &config.workout;

    let objective = profile
        .objective
        .valid_or_warn("objective", "medium intensity, funcional and cardio");
    let level = if profile.beginner {
        None
    } else {
        profile
            .activity_level
            .valid_or_warn("activity_level", "non-beginner intensity")
    };
    let intensity = determine_intensity(objective, profile.beginner);
    debug!(
        ?objective,
        ?level,
        beginner = profile.beginner,
        intensity = intensity.label(),
        "Resolved plan intensity"
    );

    let sessions_count = profile
        .training_frequency
        .clone()
        .map(sessions_per_week)
        .resolve_or("training_frequency", workout_config.default_sessions_per_week);
    let duration_minutes = profile
        .session_duration
        .clone()
        .map(|duration| duration.minutes())
        .resolve_or("session_duration", workout_config.default_duration_minutes);
    let gym_access = profile.gym_access.resolve_or("gym_access", GymAccess::Casa);
    let preferred_time = profile
        .preferred_time
        .resolve_or("preferred_time", PreferredTime::Manha);

    let types = select_workout_types(objective, &profile.specific_goals);

    let sessions = (1..=sessions_count)
        .zip(types.iter().copied().cycle())
        .map(|(day, workout_type)| WorkoutSession {
            day,
            workout_type,
            intensity,
            duration_minutes,
            name: session_name(workout_type, intensity).to_owned(),
            description: session_description(workout_type, duration_minutes),
            exercises: scale_for_intensity(
                exercises_for(workout_type, gym_access),
                intensity,
                workout_config,
            ),
            completed: false,
        })
        .collect::<Vec<_>>();

    AppLogger::log_plan_generated(sessions.len(), intensity.label(), duration_minutes);

    WorkoutPlan {
        intensity,
        sessions_per_week: sessions_count,
        duration_minutes,
        preferred_time,
        sessions,
        generated_at,
    }
}
