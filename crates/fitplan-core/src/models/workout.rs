// ABOUTME: Weekly workout plan record produced by the workout planner
// ABOUTME: Sessions with type, intensity, duration, exercises and the user-owned completed flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::quiz::PreferredTime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Cardiovascular work
    #[serde(rename = "cardio")]
    Cardio,
    /// Strength training
    #[serde(rename = "força")]
    Forca,
    /// Functional / circuit training
    #[serde(rename = "funcional")]
    Funcional,
    /// Mobility and stretching
    #[serde(rename = "flexibilidade")]
    Flexibilidade,
}

/// Session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    /// Low
    #[serde(rename = "baixa")]
    Baixa,
    /// Medium
    #[serde(rename = "média")]
    Media,
    /// High
    #[serde(rename = "alta")]
    Alta,
    /// Maximum
    #[serde(rename = "máxima")]
    Maxima,
}

impl Intensity {
    /// Wire label, as serialized
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baixa => "baixa",
            Self::Media => "média",
            Self::Alta => "alta",
            Self::Maxima => "máxima",
        }
    }

    /// Whether repetition counts are scaled up at this intensity
    #[must_use]
    pub const fn scales_volume(self) -> bool {
        matches!(self, Self::Alta | Self::Maxima)
    }
}

/// Repetitions of an exercise: a count, or a timed prescription like `"30 min"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Repetitions {
    /// Number of repetitions per set
    Count(u32),
    /// Time or distance based prescription, never scaled
    Timed(String),
}

impl Repetitions {
    /// Scale a count by `factor`, flooring the result; timed work is untouched
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Self::Count(reps) => Self::Count((f64::from(*reps) * factor).floor() as u32),
            Self::Timed(prescription) => Self::Timed(prescription.clone()),
        }
    }
}

/// One exercise within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    #[serde(rename = "nome")]
    pub name: String,
    /// Number of sets
    #[serde(rename = "series")]
    pub sets: u32,
    /// Repetitions per set
    #[serde(rename = "repeticoes")]
    pub reps: Repetitions,
}

/// One training day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Day index within the week, starting at 1
    pub day: u8,
    /// Session type
    pub workout_type: WorkoutType,
    /// Session intensity
    pub intensity: Intensity,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Exercises in order
    pub exercises: Vec<Exercise>,
    /// Set by the user once the session is done
    pub completed: bool,
}

/// Weekly workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Plan-wide intensity
    pub intensity: Intensity,
    /// Number of sessions per week
    pub sessions_per_week: u8,
    /// Length of every session in minutes
    pub duration_minutes: u32,
    /// Period of the day the sessions are meant for
    pub preferred_time: PreferredTime,
    /// Sessions ordered by day
    pub sessions: Vec<WorkoutSession>,
    /// When the plan was generated
    pub generated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Mark the session on `day` as done. Returns `false` if there is no such day.
    pub fn mark_completed(&mut self, day: u8, completed: bool) -> bool {
        self.sessions
            .iter_mut()
            .find(|session| session.day == day)
            .map(|session| session.completed = completed)
            .is_some()
    }

    /// Number of sessions marked done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.completed).count()
    }

    /// Copy `completed` flags from a previous plan for sessions whose day and
    /// type did not change. Returns how many flags were carried over.
    ///
    /// Regeneration never calls this; a fresh plan starts with nothing done.
    pub fn carry_completed_from(&mut self, previous: &Self) -> usize {
        let mut carried = 0;
        for session in &mut self.sessions {
            let unchanged_and_done = previous.sessions.iter().any(|old| {
                old.day == session.day && old.workout_type == session.workout_type && old.completed
            });
            if unchanged_and_done {
                session.completed = true;
                carried += 1;
            }
        }
        debug!(carried, "Carried completed flags from previous plan");
        carried
    }
}
