// ABOUTME: Fixed exercise catalogue keyed by workout type and training location
// ABOUTME: Const templates turned into owned exercises, with count or timed repetitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitplan_core::models::{Exercise, GymAccess, Repetitions, WorkoutType};

/// Repetition prescription in a template
#[derive(Debug, Clone, Copy)]
pub enum RepsTemplate {
    /// Repetitions per set
    Count(u32),
    /// Time or distance, e.g. `"30 min"`
    Timed(&'static str),
}

/// One catalogue entry
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    /// Exercise name
    pub name: &'static str,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: RepsTemplate,
}

impl ExerciseTemplate {
    const fn count(name: &'static str, sets: u32, reps: u32) -> Self {
        Self {
            name,
            sets,
            reps: RepsTemplate::Count(reps),
        }
    }

    const fn timed(name: &'static str, sets: u32, duration: &'static str) -> Self {
        Self {
            name,
            sets,
            reps: RepsTemplate::Timed(duration),
        }
    }

    /// Owned exercise for a plan
    #[must_use]
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            name: self.name.to_owned(),
            sets: self.sets,
            reps: match self.reps {
                RepsTemplate::Count(reps) => Repetitions::Count(reps),
                RepsTemplate::Timed(duration) => Repetitions::Timed(duration.to_owned()),
            },
        }
    }
}

const CARDIO_ACADEMIA: &[ExerciseTemplate] = &[
    ExerciseTemplate::timed("Esteira", 1, "20 min"),
    ExerciseTemplate::timed("Bicicleta ergométrica", 1, "15 min"),
    ExerciseTemplate::timed("Elíptico", 1, "10 min"),
];

const CARDIO_CASA: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Polichinelo", 3, 30),
    ExerciseTemplate::count("Corrida estacionária", 3, 40),
    ExerciseTemplate::count("Burpee", 3, 10),
    ExerciseTemplate::count("Escalador", 3, 20),
];

const CARDIO_AR_LIVRE: &[ExerciseTemplate] = &[
    ExerciseTemplate::timed("Caminhada rápida", 1, "30 min"),
    ExerciseTemplate::count("Tiros de corrida", 6, 1),
    ExerciseTemplate::count("Subida de escadas", 3, 10),
];

const FORCA_ACADEMIA: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Supino reto", 4, 10),
    ExerciseTemplate::count("Agachamento livre", 4, 10),
    ExerciseTemplate::count("Remada curvada", 4, 10),
    ExerciseTemplate::count("Desenvolvimento com halteres", 3, 12),
    ExerciseTemplate::count("Leg press", 3, 12),
];

const FORCA_CASA: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Flexão de braço", 3, 12),
    ExerciseTemplate::count("Agachamento", 3, 15),
    ExerciseTemplate::count("Afundo", 3, 10),
    ExerciseTemplate::count("Tríceps no banco", 3, 12),
    ExerciseTemplate::timed("Prancha", 3, "30 seg"),
];

const FORCA_AR_LIVRE: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Barra fixa", 3, 8),
    ExerciseTemplate::count("Paralelas", 3, 10),
    ExerciseTemplate::count("Agachamento com salto", 3, 12),
    ExerciseTemplate::count("Flexão de braço", 3, 15),
];

const FUNCIONAL_ACADEMIA: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Kettlebell swing", 4, 15),
    ExerciseTemplate::count("Wall ball", 3, 12),
    ExerciseTemplate::count("Box jump", 3, 10),
    ExerciseTemplate::timed("Battle rope", 3, "30 seg"),
];

const FUNCIONAL_CASA: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Burpee", 3, 10),
    ExerciseTemplate::count("Agachamento com salto", 3, 12),
    ExerciseTemplate::count("Mountain climber", 3, 20),
    ExerciseTemplate::timed("Prancha", 3, "30 seg"),
];

const FUNCIONAL_AR_LIVRE: &[ExerciseTemplate] = &[
    ExerciseTemplate::count("Corrida com mudança de direção", 4, 6),
    ExerciseTemplate::count("Afundo caminhando", 3, 12),
    ExerciseTemplate::count("Flexão inclinada no banco", 3, 12),
    ExerciseTemplate::timed("Prancha", 3, "40 seg"),
];

const FLEXIBILIDADE_ACADEMIA: &[ExerciseTemplate] = &[
    ExerciseTemplate::timed("Alongamento de isquiotibiais", 2, "30 seg"),
    ExerciseTemplate::timed("Liberação miofascial com rolo", 1, "10 min"),
    ExerciseTemplate::timed("Alongamento de ombros", 2, "30 seg"),
];

const FLEXIBILIDADE_CASA: &[ExerciseTemplate] = &[
    ExerciseTemplate::timed("Yoga", 1, "20 min"),
    ExerciseTemplate::count("Gato-camelo", 2, 10),
    ExerciseTemplate::timed("Alongamento de quadril", 2, "30 seg"),
];

const FLEXIBILIDADE_AR_LIVRE: &[ExerciseTemplate] = &[
    ExerciseTemplate::timed("Mobilidade articular", 1, "10 min"),
    ExerciseTemplate::timed("Alongamento de panturrilha", 2, "30 seg"),
    ExerciseTemplate::timed("Alongamento de quadríceps", 2, "30 seg"),
];

/// Catalogue entries for a session type and location
#[must_use]
pub const fn templates_for(
    workout_type: WorkoutType,
    gym_access: GymAccess,
) -> &'static [ExerciseTemplate] {
    match (workout_type, gym_access) {
        (WorkoutType::Cardio, GymAccess::Academia) => CARDIO_ACADEMIA,
        (WorkoutType::Cardio, GymAccess::Casa) => CARDIO_CASA,
        (WorkoutType::Cardio, GymAccess::ArLivre) => CARDIO_AR_LIVRE,
        (WorkoutType::Forca, GymAccess::Academia) => FORCA_ACADEMIA,
        (WorkoutType::Forca, GymAccess::Casa) => FORCA_CASA,
        (WorkoutType::Forca, GymAccess::ArLivre) => FORCA_AR_LIVRE,
        (WorkoutType::Funcional, GymAccess::Academia) => FUNCIONAL_ACADEMIA,
        (WorkoutType::Funcional, GymAccess::Casa) => FUNCIONAL_CASA,
        (WorkoutType::Funcional, GymAccess::ArLivre) => FUNCIONAL_AR_LIVRE,
        (WorkoutType::Flexibilidade, GymAccess::Academia) => FLEXIBILIDADE_ACADEMIA,
        (WorkoutType::Flexibilidade, GymAccess::Casa) => FLEXIBILIDADE_CASA,
        (WorkoutType::Flexibilidade, GymAccess::ArLivre) => FLEXIBILIDADE_AR_LIVRE,
    }
}

/// Owned exercises for a session type and location
#[must_use]
pub fn exercises_for(workout_type: WorkoutType, gym_access: GymAccess) -> Vec<Exercise> {
    templates_for(workout_type, gym_access)
        .iter()
        .map(ExerciseTemplate::to_exercise)
        .collect()
}
