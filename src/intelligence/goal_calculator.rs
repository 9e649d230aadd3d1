// ABOUTME: Daily nutrition goal calculation from quiz answers
// ABOUTME: Mifflin-St Jeor BMR, TDEE, macro split, fiber, water, micronutrients, meal timing and tips
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Goal Calculator Module
//!
//! Turns a [`QuizProfile`] into a [`NutritionGoal`]. Missing or unreadable
//! answers are replaced by configured fallbacks and logged; nothing here
//! fails unless strict validation is switched on.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Institute of Medicine (2005). Dietary Reference Intakes for Energy, Carbohydrate,
//!   Fiber, Fat, Fatty Acids, Cholesterol, Protein, and Amino Acids. (14 g fiber / 1000 kcal)

use crate::config::personalization::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentsConfig, FiberConfig, HydrationConfig,
    MacroSplit, PersonalizationConfig, QuizFallbacksConfig, QuizValidationConfig,
};
use crate::constants::energy_density::{CARB_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use chrono::{DateTime, Utc};
use fitplan_core::models::{
    ActivityLevel, DietaryRestriction, Habit, MacroBreakdown, MacroTarget, MealSlot,
    Micronutrient, MicronutrientRecommendation, NutritionGoal, Objective, PreferredTime,
    QuizProfile, Sex,
};
use std::collections::BTreeMap;
use tracing::warn;

/// Body metrics after fallbacks have been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    /// Age in years
    pub age_years: f64,
    /// Height in meters
    pub height_m: f64,
    /// Current weight in kg
    pub weight_kg: f64,
    /// Biological sex
    pub sex: Sex,
    /// How many of the four fields were substituted
    pub fallbacks_used: usize,
}

/// Resolve age, height, weight and sex from the profile
///
/// Absent or invalid values are replaced by the configured fallbacks; sex
/// falls back to [`Sex::Feminino`]. Resolved values outside the plausibility
/// ranges are logged, and rejected when strict validation is on.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` in strict mode when a value is implausible
pub fn resolve_body_metrics(
    profile: &QuizProfile,
    fallbacks: &QuizFallbacksConfig,
    validation: &QuizValidationConfig,
) -> AppResult<BodyMetrics> {
    let fallbacks_used = [
        profile.age.is_valid(),
        profile.height_m.is_valid(),
        profile.weight_current_kg.is_valid(),
        profile.sex.is_valid(),
    ]
    .iter()
    .filter(|valid| !**valid)
    .count();

    let metrics = BodyMetrics {
        age_years: profile.age.resolve_or("age", fallbacks.age_years),
        height_m: profile.height_m.resolve_or("height", fallbacks.height_m),
        weight_kg: profile
            .weight_current_kg
            .resolve_or("weight_current", fallbacks.weight_kg),
        sex: profile.sex.resolve_or("sex", Sex::Feminino),
        fallbacks_used,
    };

    check_range(
        "age",
        metrics.age_years,
        validation.age_min,
        validation.age_max,
        validation.strict,
    )?;
    check_range(
        "height",
        metrics.height_m,
        validation.height_min_m,
        validation.height_max_m,
        validation.strict,
    )?;
    check_range(
        "weight_current",
        metrics.weight_kg,
        validation.weight_min_kg,
        validation.weight_max_kg,
        validation.strict,
    )?;

    Ok(metrics)
}

fn check_range(field: &str, value: f64, min: f64, max: f64, strict: bool) -> AppResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    if strict {
        return Err(AppError::value_out_of_range(
            field,
            format!("{field} = {value} is outside {min}..={max}"),
        ));
    }
    warn!(field, value, min, max, "Quiz value outside plausible range, using as given");
    Ok(())
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor formula
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
///
/// Height is taken in meters, as the quiz collects it.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_m: f64,
    age_years: f64,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * (height_m * 100.0);
    let age_component = config.msj_age_coef * age_years;

    let sex_constant = match sex {
        Sex::Masculino => config.msj_male_constant,
        Sex::Feminino => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Daily calorie target: TDEE plus the objective's deficit or surplus, rounded
#[must_use]
pub fn calculate_daily_calories(
    tdee: f64,
    objective: Objective,
    config: &CalorieAdjustmentsConfig,
) -> i32 {
    (tdee + config.adjustment_for(objective)).round() as i32
}

/// Split daily calories into protein, carbohydrate and fat targets
#[must_use]
pub fn calculate_macros(calories_daily: i32, split: MacroSplit) -> MacroBreakdown {
    let calories = f64::from(calories_daily);
    let target = |fraction: f64, kcal_per_g: f64| MacroTarget {
        grams: (calories * fraction / kcal_per_g).round() as i32,
        percent: round_2(fraction * 100.0),
    };

    MacroBreakdown {
        protein: target(split.protein, PROTEIN_KCAL_PER_G),
        carb: target(split.carb, CARB_KCAL_PER_G),
        fat: target(split.fat, FAT_KCAL_PER_G),
    }
}

/// Fiber target in grams, proportional to calories
#[must_use]
pub fn calculate_fiber(calories_daily: i32, config: &FiberConfig) -> i32 {
    (f64::from(calories_daily) / 1000.0 * config.grams_per_1000_kcal).round() as i32
}

/// Water target in liters with two decimals
///
/// Very active users (`ativo`, `muito_ativo`) get the configured bonus on top.
#[must_use]
pub fn calculate_water(weight_kg: f64, activity_level: ActivityLevel, config: &HydrationConfig) -> f64 {
    let bonus = match activity_level {
        ActivityLevel::Ativo | ActivityLevel::MuitoAtivo => config.active_bonus_l,
        ActivityLevel::Sedentario | ActivityLevel::Leve | ActivityLevel::Moderado => 0.0,
    };
    round_2(weight_kg.mul_add(config.liters_per_kg, bonus))
}

fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn recommendation(sources: &[&str], amount: &str, rationale: &str) -> MicronutrientRecommendation {
    MicronutrientRecommendation {
        sources: sources.iter().map(|s| (*s).to_owned()).collect(),
        amount: amount.to_owned(),
        rationale: rationale.to_owned(),
    }
}

/// Micronutrient guidance, adjusted for dietary restrictions
///
/// Plant-based diets switch B12 to fortified sources and raise the iron
/// target (non-heme iron is absorbed less). Lactose intolerance and vegan
/// diets switch calcium to non-dairy sources.
#[must_use]
pub fn recommend_micronutrients(
    profile: &QuizProfile,
) -> BTreeMap<Micronutrient, MicronutrientRecommendation> {
    let plant_based = profile.is_plant_based();
    let dairy_free = profile.has_restriction(DietaryRestriction::Lactose)
        || profile.has_restriction(DietaryRestriction::Vegano);

    let mut table = BTreeMap::new();

    table.insert(
        Micronutrient::VitaminaD,
        recommendation(
            &["Exposição solar (15-20 min/dia)", "Peixes gordurosos", "Gema de ovo"],
            "600 UI",
            "Saúde óssea e função imunológica",
        ),
    );

    table.insert(
        Micronutrient::VitaminaB12,
        if plant_based {
            recommendation(
                &["Alimentos fortificados", "Levedura nutricional", "Suplemento de B12"],
                "2,4 mcg",
                "Ausente em alimentos vegetais; suplementação recomendada",
            )
        } else {
            recommendation(
                &["Carnes", "Peixes", "Ovos", "Laticínios"],
                "2,4 mcg",
                "Formação de glóbulos vermelhos e função neurológica",
            )
        },
    );

    table.insert(
        Micronutrient::Ferro,
        if plant_based {
            recommendation(
                &["Feijão", "Lentilha", "Folhas verde-escuras", "Sementes de abóbora"],
                "32 mg",
                "Ferro vegetal é menos absorvido; combine com vitamina C",
            )
        } else {
            recommendation(
                &["Carnes vermelhas", "Feijão", "Folhas verde-escuras"],
                "18 mg",
                "Transporte de oxigênio e prevenção de anemia",
            )
        },
    );

    table.insert(
        Micronutrient::Calcio,
        if dairy_free {
            recommendation(
                &["Brócolis", "Couve", "Tofu", "Bebidas vegetais fortificadas", "Sardinha"],
                "1000 mg",
                "Saúde óssea sem depender de laticínios",
            )
        } else {
            recommendation(
                &["Leite", "Iogurte", "Queijos", "Folhas verde-escuras"],
                "1000 mg",
                "Saúde óssea e contração muscular",
            )
        },
    );

    table.insert(
        Micronutrient::Magnesio,
        recommendation(
            &["Oleaginosas", "Sementes", "Grãos integrais", "Banana"],
            "400 mg",
            "Função muscular e qualidade do sono",
        ),
    );

    table.insert(
        Micronutrient::Omega3,
        recommendation(
            &["Salmão", "Sardinha", "Linhaça", "Chia"],
            "1,1-1,6 g",
            "Ação anti-inflamatória e saúde cardiovascular",
        ),
    );

    table.insert(
        Micronutrient::Zinco,
        recommendation(
            &["Carnes", "Sementes de abóbora", "Castanha de caju", "Grão-de-bico"],
            "11 mg",
            "Imunidade e recuperação muscular",
        ),
    );

    table
}

/// Meal schedule for the preferred time of day
#[must_use]
pub fn meal_schedule(preferred_time: PreferredTime) -> BTreeMap<MealSlot, String> {
    let slots: &[(MealSlot, &str)] = match preferred_time {
        PreferredTime::Manha => &[
            (MealSlot::CafeDaManha, "07:00"),
            (MealSlot::LancheManha, "10:00"),
            (MealSlot::Almoco, "12:30"),
            (MealSlot::LancheTarde, "15:30"),
            (MealSlot::Jantar, "19:00"),
        ],
        PreferredTime::Tarde => &[
            (MealSlot::CafeDaManha, "08:00"),
            (MealSlot::LancheManha, "10:30"),
            (MealSlot::Almoco, "13:00"),
            (MealSlot::LancheTarde, "16:00"),
            (MealSlot::Jantar, "20:00"),
        ],
        PreferredTime::Noite => &[
            (MealSlot::CafeDaManha, "08:00"),
            (MealSlot::Almoco, "12:30"),
            (MealSlot::LancheTarde, "16:30"),
            (MealSlot::Jantar, "20:30"),
            (MealSlot::Ceia, "22:30"),
        ],
    };

    slots
        .iter()
        .map(|(slot, time)| (*slot, (*time).to_owned()))
        .collect()
}

const fn objective_tips(objective: Objective) -> &'static [&'static str] {
    match objective {
        Objective::Emagrecer => &[
            "Priorize proteínas em todas as refeições para aumentar a saciedade",
            "Prefira alimentos integrais e ricos em fibras",
            "Evite bebidas açucaradas e ultraprocessados",
        ],
        Objective::GanharMassa => &[
            "Consuma proteína a cada 3-4 horas",
            "Inclua carboidratos antes e depois do treino",
            "Não pule refeições para manter o superávit calórico",
        ],
        Objective::Manter => &[
            "Mantenha horários regulares de refeição",
            "Varie as fontes de proteínas, legumes e frutas",
        ],
        Objective::Condicionamento => &[
            "Hidrate-se antes, durante e depois do treino",
            "Consuma carboidratos de fácil digestão antes de treinos longos",
        ],
    }
}

const fn activity_tips(level: ActivityLevel) -> &'static [&'static str] {
    match level {
        ActivityLevel::Sedentario => &[
            "Comece com caminhadas leves de 20 a 30 minutos",
            "Levante-se e movimente-se a cada hora",
        ],
        ActivityLevel::Leve => &["Aumente gradualmente a frequência de atividade física"],
        ActivityLevel::Moderado => &["Mantenha a consistência nos treinos ao longo da semana"],
        ActivityLevel::Ativo => &["Reforce a hidratação nos dias de treino intenso"],
        ActivityLevel::MuitoAtivo => &[
            "Garanta sono e descanso adequados para a recuperação",
            "Reforce a hidratação nos dias de treino intenso",
        ],
    }
}

const fn habit_tip(habit: Habit) -> &'static str {
    match habit {
        Habit::PoucaAgua => "Tenha sempre uma garrafa de água por perto e beba ao longo do dia",
        Habit::PulaRefeicoes => "Planeje lanches práticos para não ficar longos períodos sem comer",
        Habit::DocesFrequentes => "Troque doces por frutas e reserve sobremesas para ocasiões especiais",
        Habit::RefeicoesTardias => "Faça a última refeição pelo menos 2 horas antes de dormir",
        Habit::SonoIrregular => "Procure dormir e acordar sempre nos mesmos horários",
        Habit::Alcool => "Reduza o consumo de álcool, que adiciona calorias vazias",
    }
}

/// Tips in order: objective, then activity level, then each habit as given
#[must_use]
pub fn build_tips(objective: Objective, level: ActivityLevel, habits: &[Habit]) -> Vec<String> {
    objective_tips(objective)
        .iter()
        .chain(activity_tips(level))
        .copied()
        .chain(habits.iter().map(|habit| habit_tip(*habit)))
        .map(str::to_owned)
        .collect()
}

fn resolve_objective(profile: &QuizProfile) -> Objective {
    profile.objective.resolve_or("objective", Objective::Manter)
}

fn resolve_activity_level(profile: &QuizProfile) -> ActivityLevel {
    profile
        .activity_level
        .resolve_or("activity_level", ActivityLevel::Moderado)
}

/// Calculate a nutrition goal stamped with the current time
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` in strict mode when body metrics are implausible
pub fn calculate_nutrition_goal(
    profile: &QuizProfile,
    config: &PersonalizationConfig,
) -> AppResult<NutritionGoal> {
    calculate_nutrition_goal_at(profile, config, Utc::now())
}

/// Calculate a nutrition goal with an explicit timestamp
///
/// Deterministic: the same profile, config and timestamp give an identical goal.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` in strict mode when body metrics are implausible
pub fn calculate_nutrition_goal_at(
    profile: &QuizProfile,
    config: &PersonalizationConfig,
    generated_at: DateTime<Utc>,
) -> AppResult<NutritionGoal> {
    let nutrition = &config.nutrition;
    let metrics = resolve_body_metrics(profile, &config.quiz_fallbacks, &config.validation)?;
    let objective = resolve_objective(profile);
    let level = resolve_activity_level(profile);
    let preferred_time = profile
        .preferred_time
        .resolve_or("preferred_time", PreferredTime::Manha);

    let bmr = calculate_mifflin_st_jeor(
        metrics.weight_kg,
        metrics.height_m,
        metrics.age_years,
        metrics.sex,
        &nutrition.bmr,
    );
    let tdee = calculate_tdee(bmr, level, &nutrition.activity_factors);
    let calories_daily = calculate_daily_calories(tdee, objective, &nutrition.calorie_adjustments);

    let goal = NutritionGoal {
        calories_daily,
        bmr,
        tdee,
        macros: calculate_macros(calories_daily, nutrition.macro_splits.split_for(objective)),
        fiber_g: calculate_fiber(calories_daily, &nutrition.fiber),
        water_l: calculate_water(metrics.weight_kg, level, &nutrition.hydration),
        micronutrients: recommend_micronutrients(profile),
        meal_timing: meal_schedule(preferred_time),
        tips: build_tips(objective, level, &profile.habits),
        generated_at,
    };

    let fallbacks_used = metrics.fallbacks_used
        + usize::from(!profile.objective.is_valid())
        + usize::from(!profile.activity_level.is_valid())
        + usize::from(!profile.preferred_time.is_valid());
    AppLogger::log_goal_calculated(goal.calories_daily, goal.bmr, goal.tdee, fallbacks_used);

    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_percent_is_rounded() {
        let macros = calculate_macros(2000, MacroSplit::new(0.35, 0.40, 0.25));
        assert!((macros.protein.percent - 35.0).abs() < f64::EPSILON);
        assert!((macros.carb.percent - 40.0).abs() < f64::EPSILON);
        assert!((macros.fat.percent - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_water_bonus_only_for_very_active() {
        let config = HydrationConfig::default();
        assert!((calculate_water(70.0, ActivityLevel::Moderado, &config) - 2.31).abs() < 1e-9);
        assert!((calculate_water(70.0, ActivityLevel::Ativo, &config) - 2.81).abs() < 1e-9);
        assert!((calculate_water(70.0, ActivityLevel::MuitoAtivo, &config) - 2.81).abs() < 1e-9);
    }

    #[test]
    fn test_check_range_permissive_and_strict() {
        assert!(check_range("age", -4.0, 1.0, 120.0, false).is_ok());
        assert!(check_range("age", -4.0, 1.0, 120.0, true).is_err());
        assert!(check_range("age", 1.0, 1.0, 120.0, true).is_ok());
    }
}
