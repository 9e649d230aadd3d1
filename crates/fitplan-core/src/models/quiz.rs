// ABOUTME: User health questionnaire (quiz) model and its untrusted-JSON boundary parser
// ABOUTME: Every field is read as absent / invalid / valid so engines can apply explicit fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Quiz profile.
//!
//! The questionnaire is stored by an external collaborator and reaches the
//! engine as loosely typed JSON. Nothing in it is guaranteed present or in
//! range, so [`QuizProfile::from_answers`] never fails: each field becomes a
//! [`Coerced`] value and the engines decide what to do with gaps.
//!
//! Keys are accepted in English (`weight_current`) and in the Portuguese form
//! the mobile client sends (`peso_atual`).

use crate::coerce::{coerce_code, coerce_number, normalize_code, Coerced, FromCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Biological sex, used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Masculino,
    /// Female (-161 kcal constant)
    Feminino,
}

impl FromCode for Sex {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "masculino" | "m" | "male" | "homem" => Some(Self::Masculino),
            "feminino" | "f" | "female" | "mulher" => Some(Self::Feminino),
            _ => None,
        }
    }
}

/// Main goal the user picked in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Lose weight
    Emagrecer,
    /// Gain muscle mass
    GanharMassa,
    /// Maintain current weight
    Manter,
    /// Improve general conditioning
    Condicionamento,
}

impl FromCode for Objective {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "emagrecer" | "perder_peso" => Some(Self::Emagrecer),
            "ganhar_massa" | "hipertrofia" => Some(Self::GanharMassa),
            "manter" | "manutencao" => Some(Self::Manter),
            "condicionamento" => Some(Self::Condicionamento),
            _ => None,
        }
    }
}

/// Self-reported daily activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentario,
    /// Light exercise 1-3 days/week
    Leve,
    /// Moderate exercise 3-5 days/week
    Moderado,
    /// Hard exercise 6-7 days/week
    Ativo,
    /// Very hard exercise or physical job
    MuitoAtivo,
}

impl FromCode for ActivityLevel {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "sedentario" => Some(Self::Sedentario),
            "leve" | "levemente_ativo" => Some(Self::Leve),
            "moderado" | "moderadamente_ativo" => Some(Self::Moderado),
            "ativo" => Some(Self::Ativo),
            "muito_ativo" | "extremamente_ativo" => Some(Self::MuitoAtivo),
            _ => None,
        }
    }
}

/// How often the user wants to train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingFrequency {
    /// Once or twice a week
    #[serde(rename = "1_2_vezes")]
    OneToTwo,
    /// Three or four times a week
    #[serde(rename = "3_4_vezes")]
    ThreeToFour,
    /// Five or six times a week
    #[serde(rename = "5_6_vezes")]
    FiveToSix,
    /// Every day
    #[serde(rename = "diario")]
    Daily,
}

impl FromCode for TrainingFrequency {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "1_2_vezes" => Some(Self::OneToTwo),
            "3_4_vezes" => Some(Self::ThreeToFour),
            "5_6_vezes" => Some(Self::FiveToSix),
            "diario" | "todos_os_dias" => Some(Self::Daily),
            _ => None,
        }
    }
}

/// Where the user can train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GymAccess {
    /// Full gym with machines and free weights
    Academia,
    /// At home, bodyweight and light equipment
    Casa,
    /// Outdoors (park, street)
    ArLivre,
}

impl FromCode for GymAccess {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "academia" | "sim" => Some(Self::Academia),
            "casa" | "nao" => Some(Self::Casa),
            "ar_livre" | "parque" => Some(Self::ArLivre),
            _ => None,
        }
    }
}

/// Preferred period of the day for training and the meal schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredTime {
    /// Morning
    Manha,
    /// Afternoon
    Tarde,
    /// Evening
    Noite,
}

impl FromCode for PreferredTime {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "manha" => Some(Self::Manha),
            "tarde" => Some(Self::Tarde),
            "noite" => Some(Self::Noite),
            _ => None,
        }
    }
}

/// Desired length of a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionDuration {
    /// 30 minutes
    #[serde(rename = "30_min")]
    Min30,
    /// 45 minutes
    #[serde(rename = "45_min")]
    Min45,
    /// 60 minutes
    #[serde(rename = "60_min")]
    Min60,
    /// 90 minutes
    #[serde(rename = "90_min")]
    Min90,
}

impl SessionDuration {
    /// Length in minutes
    #[must_use]
    pub const fn minutes(self) -> u32 {
        match self {
            Self::Min30 => 30,
            Self::Min45 => 45,
            Self::Min60 => 60,
            Self::Min90 => 90,
        }
    }
}

impl FromCode for SessionDuration {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "30_min" | "30" => Some(Self::Min30),
            "45_min" | "45" => Some(Self::Min45),
            "60_min" | "60" | "1_hora" => Some(Self::Min60),
            "90_min" | "90" => Some(Self::Min90),
            _ => None,
        }
    }
}

/// Additional training focus flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificGoal {
    /// Endurance
    Resistencia,
    /// Strength
    Forca,
    /// Flexibility
    Flexibilidade,
}

impl FromCode for SpecificGoal {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "resistencia" => Some(Self::Resistencia),
            "forca" => Some(Self::Forca),
            "flexibilidade" => Some(Self::Flexibilidade),
            _ => None,
        }
    }
}

/// Dietary restriction flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetariano,
    /// No animal products at all
    Vegano,
    /// Lactose intolerance
    Lactose,
    /// Gluten intolerance or celiac disease
    Gluten,
}

impl FromCode for DietaryRestriction {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "vegetariano" => Some(Self::Vegetariano),
            "vegano" => Some(Self::Vegano),
            "lactose" | "intolerancia_lactose" | "sem_lactose" => Some(Self::Lactose),
            "gluten" | "sem_gluten" | "celiaco" => Some(Self::Gluten),
            _ => None,
        }
    }
}

/// Eating and lifestyle habits that trigger extra tips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Habit {
    /// Drinks little water
    PoucaAgua,
    /// Skips meals
    PulaRefeicoes,
    /// Eats sweets often
    DocesFrequentes,
    /// Eats late at night
    RefeicoesTardias,
    /// Irregular sleep
    SonoIrregular,
    /// Regular alcohol intake
    Alcool,
}

impl FromCode for Habit {
    fn from_code(code: &str) -> Option<Self> {
        match code {
            "pouca_agua" | "bebe_pouca_agua" => Some(Self::PoucaAgua),
            "pula_refeicoes" => Some(Self::PulaRefeicoes),
            "doces_frequentes" | "doces" => Some(Self::DocesFrequentes),
            "refeicoes_tardias" | "come_tarde" => Some(Self::RefeicoesTardias),
            "sono_irregular" | "dorme_pouco" => Some(Self::SonoIrregular),
            "alcool" | "bebidas_alcoolicas" => Some(Self::Alcool),
            _ => None,
        }
    }
}

/// Activity level code marking a training beginner
///
/// Not an activity level of its own: the calorie factor treats it as
/// unrecognized, only the workout intensity table reads it.
pub const BEGINNER_CODE: &str = "iniciante";

/// Parsed quiz answers
///
/// Scalar fields keep the absent/invalid/valid distinction. Flag sets hold
/// only recognized codes, deduplicated. Arrays and comma separated strings
/// keep the order the user gave; the `code: bool` object shape yields its
/// keys in alphabetical order.
#[derive(Debug, Clone, Default)]
pub struct QuizProfile {
    /// Age in years
    pub age: Coerced<f64>,
    /// Biological sex
    pub sex: Coerced<Sex>,
    /// Height in meters
    pub height_m: Coerced<f64>,
    /// Current weight in kg
    pub weight_current_kg: Coerced<f64>,
    /// Target weight in kg
    pub weight_goal_kg: Coerced<f64>,
    /// Main objective
    pub objective: Coerced<Objective>,
    /// Daily activity level
    pub activity_level: Coerced<ActivityLevel>,
    /// Activity level was given as the beginner code
    pub beginner: bool,
    /// Desired training frequency
    pub training_frequency: Coerced<TrainingFrequency>,
    /// Training location
    pub gym_access: Coerced<GymAccess>,
    /// Preferred time of day
    pub preferred_time: Coerced<PreferredTime>,
    /// Desired session length
    pub session_duration: Coerced<SessionDuration>,
    /// Extra training focus flags
    pub specific_goals: Vec<SpecificGoal>,
    /// Dietary restriction flags
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Habit flags
    pub habits: Vec<Habit>,
    /// Free-form preferences, carried but not interpreted
    pub preferences: Map<String, Value>,
}

impl QuizProfile {
    /// Build a profile from raw quiz JSON
    ///
    /// Never fails. A non-object input yields a profile with every field absent.
    #[must_use]
    pub fn from_answers(answers: &Value) -> Self {
        let Some(obj) = answers.as_object() else {
            warn!(kind = json_kind(answers), "Quiz answers are not a JSON object, every field absent");
            return Self::default();
        };

        let activity = lookup(obj, &["activity_level", "nivel_atividade"]);

        Self {
            age: coerce_number(lookup(obj, &["age", "idade"])),
            sex: coerce_code(lookup(obj, &["sex", "sexo", "genero"])),
            height_m: coerce_number(lookup(obj, &["height", "altura"])),
            weight_current_kg: coerce_number(lookup(
                obj,
                &["weight_current", "peso_atual", "peso"],
            )),
            weight_goal_kg: coerce_number(lookup(obj, &["weight_goal", "peso_objetivo", "peso_meta"])),
            objective: coerce_code(lookup(obj, &["objective", "objetivo"])),
            activity_level: coerce_code(activity),
            beginner: activity
                .and_then(Value::as_str)
                .is_some_and(|code| normalize_code(code) == BEGINNER_CODE),
            training_frequency: coerce_code(lookup(
                obj,
                &["training_frequency", "frequencia_treino"],
            )),
            gym_access: coerce_code(lookup(obj, &["gym_access", "acesso_academia"])),
            preferred_time: coerce_code(lookup(obj, &["preferred_time", "horario_preferido"])),
            session_duration: coerce_code(lookup(obj, &["session_duration", "duracao_treino"])),
            specific_goals: coerce_flags(
                "specific_goals",
                lookup(obj, &["specific_goals", "objetivos_especificos"]),
            ),
            dietary_restrictions: coerce_flags(
                "dietary_restrictions",
                lookup(obj, &["dietary_restrictions", "restricoes_alimentares"]),
            ),
            habits: coerce_flags("habits", lookup(obj, &["habits", "habitos"])),
            preferences: lookup(obj, &["preferences", "preferencias"])
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Whether the user declared a restriction
    #[must_use]
    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }

    /// Whether the user follows a plant-based diet (vegetarian or vegan)
    #[must_use]
    pub fn is_plant_based(&self) -> bool {
        self.has_restriction(DietaryRestriction::Vegetariano)
            || self.has_restriction(DietaryRestriction::Vegano)
    }
}

/// First present key wins
fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// Read a flag set from an array of codes, an object of `code: bool`, or a
/// comma separated string. Unknown codes are dropped.
fn coerce_flags<T: FromCode + PartialEq>(field: &str, value: Option<&Value>) -> Vec<T> {
    let codes: Vec<String> = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        Some(Value::Object(flags)) => flags
            .iter()
            .filter(|(_, enabled)| is_truthy(enabled))
            .map(|(code, _)| code.clone())
            .collect(),
        Some(Value::String(list)) => list.split(',').map(str::to_owned).collect(),
        Some(other) => {
            warn!(field, raw = %other, "Quiz flag set has unexpected shape, ignoring");
            return Vec::new();
        }
    };

    let mut flags = Vec::new();
    for code in codes {
        let normalized = normalize_code(&code);
        if normalized.is_empty() {
            continue;
        }
        match T::from_code(&normalized) {
            Some(flag) if !flags.contains(&flag) => flags.push(flag),
            Some(_) => {}
            None => debug!(field, code = %code, "Ignoring unrecognized quiz flag"),
        }
    }
    flags
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => matches!(normalize_code(s).as_str(), "sim" | "true" | "yes" | "1"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_from_object_and_string() {
        let from_object: Vec<Habit> =
            coerce_flags("habits", Some(&json!({"pouca_agua": true, "alcool": false, "doces": "sim"})));
        assert_eq!(from_object.len(), 2);
        assert!(from_object.contains(&Habit::PoucaAgua));
        assert!(from_object.contains(&Habit::DocesFrequentes));

        let from_string: Vec<SpecificGoal> =
            coerce_flags("specific_goals", Some(&json!("força, resistencia,força")));
        assert_eq!(from_string, vec![SpecificGoal::Forca, SpecificGoal::Resistencia]);
    }

    #[test]
    fn test_object_flags_come_out_alphabetically() {
        let habits: Vec<Habit> =
            coerce_flags("habits", Some(&json!({"sono_irregular": true, "alcool": true})));
        assert_eq!(habits, vec![Habit::Alcool, Habit::SonoIrregular]);

        let listed: Vec<Habit> = coerce_flags("habits", Some(&json!(["sono_irregular", "alcool"])));
        assert_eq!(listed, vec![Habit::SonoIrregular, Habit::Alcool]);
    }

    #[test]
    fn test_beginner_code_is_not_an_activity_level() {
        let quiz = QuizProfile::from_answers(&json!({"nivel_atividade": " Iniciante "}));
        assert!(quiz.beginner);
        assert!(matches!(quiz.activity_level, Coerced::Invalid { .. }));

        for code in ["sedentario", "leve", "moderado"] {
            let quiz = QuizProfile::from_answers(&json!({"activity_level": code}));
            assert!(!quiz.beginner, "{code}");
            assert!(quiz.activity_level.is_valid(), "{code}");
        }
    }

    #[test]
    fn test_flags_ignore_unknown_and_bad_shapes() {
        let flags: Vec<DietaryRestriction> =
            coerce_flags("dietary_restrictions", Some(&json!(["kosher", "lactose", 7])));
        assert_eq!(flags, vec![DietaryRestriction::Lactose]);

        let none: Vec<Habit> = coerce_flags("habits", Some(&json!(12)));
        assert!(none.is_empty());
    }
}
