// ABOUTME: Integration tests for the nutrition goal calculator
// ABOUTME: Reference scenario, fallbacks, dietary overrides, meal timing, tips, strict mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Goal calculator tests
//!
//! Covers the Mifflin-St Jeor reference scenario end to end, the fallback
//! path for missing answers, restriction-driven micronutrient overrides and
//! strict validation of implausible body metrics.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{answers_with, fixed_timestamp, profile, reference_answers};
use fitplan_engine::config::personalization::{BmrConfig, PersonalizationConfig};
use fitplan_engine::errors::ErrorCode;
use fitplan_engine::intelligence::goal_calculator::{
    build_tips, calculate_mifflin_st_jeor, calculate_nutrition_goal_at, meal_schedule,
    recommend_micronutrients,
};
use fitplan_engine::models::{
    ActivityLevel, Habit, MealSlot, Micronutrient, Objective, PreferredTime, Sex,
};
use serde_json::json;

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_reference_scenario() {
    let config = PersonalizationConfig::default();
    let goal =
        calculate_nutrition_goal_at(&profile(&reference_answers()), &config, fixed_timestamp())
            .unwrap();

    assert!((goal.bmr - 1673.75).abs() < 1e-9, "BMR was {}", goal.bmr);
    assert!((goal.tdee - 2594.3125).abs() < 1e-6, "TDEE was {}", goal.tdee);
    assert_eq!(goal.calories_daily, 2094);
    assert_eq!(goal.macros.protein.grams, 183);
    assert_eq!(goal.macros.carb.grams, 209);
    assert_eq!(goal.macros.fat.grams, 58);
    assert_eq!(goal.fiber_g, 29);
    assert!((goal.water_l - 2.31).abs() < 1e-9, "water was {}", goal.water_l);

    assert!((goal.macros.protein.percent - 35.0).abs() < 1e-9);
    assert!((goal.macros.carb.percent - 40.0).abs() < 1e-9);
    assert!((goal.macros.fat.percent - 25.0).abs() < 1e-9);
    assert_eq!(goal.generated_at, fixed_timestamp());
}

#[test]
fn test_portuguese_keys_match_english_keys() {
    let config = PersonalizationConfig::default();
    let portuguese = profile(&json!({
        "sexo": "Masculino",
        "idade": "25",
        "altura": "1,75 m",
        "peso_atual": "70 kg",
        "nivel_atividade": "Moderado",
        "objetivo": "emagrecer"
    }));

    let from_english =
        calculate_nutrition_goal_at(&profile(&reference_answers()), &config, fixed_timestamp())
            .unwrap();
    let from_portuguese =
        calculate_nutrition_goal_at(&portuguese, &config, fixed_timestamp()).unwrap();

    assert_eq!(from_english, from_portuguese);
}

#[test]
fn test_female_bmr_offset() {
    let config = BmrConfig::default();
    let male = calculate_mifflin_st_jeor(70.0, 1.75, 25.0, Sex::Masculino, &config);
    let female = calculate_mifflin_st_jeor(70.0, 1.75, 25.0, Sex::Feminino, &config);
    assert!((male - female - 166.0).abs() < 1e-9);
}

#[test]
fn test_objective_adjustments_and_splits() {
    let config = PersonalizationConfig::default();

    let gain = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"objective": "ganhar_massa"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();
    // round(2594.3125 + 300)
    assert_eq!(gain.calories_daily, 2894);
    assert!((gain.macros.carb.percent - 50.0).abs() < 1e-9);

    let maintain = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"objective": "manter"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();
    assert_eq!(maintain.calories_daily, 2594);
    assert!((maintain.macros.carb.percent - 55.0).abs() < 1e-9);
    assert!((maintain.macros.protein.percent - 25.0).abs() < 1e-9);
}

#[test]
fn test_water_bonus_for_very_active() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"activity_level": "muito_ativo"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();
    assert!((goal.water_l - 2.81).abs() < 1e-9, "water was {}", goal.water_l);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_same_input_gives_identical_output() {
    let config = PersonalizationConfig::default();
    let answers = answers_with(&json!({
        "preferred_time": "noite",
        "dietary_restrictions": ["vegano"],
        "habits": ["alcool", "pouca_agua"]
    }));

    let first = calculate_nutrition_goal_at(&profile(&answers), &config, fixed_timestamp()).unwrap();
    let second =
        calculate_nutrition_goal_at(&profile(&answers), &config, fixed_timestamp()).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_empty_answers_use_fallbacks() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(&profile(&json!({})), &config, fixed_timestamp())
        .unwrap();

    // Female, 30 years, 1.70 m, 70 kg: 700 + 1062.5 - 150 - 161
    assert!((goal.bmr - 1451.5).abs() < 1e-9, "BMR was {}", goal.bmr);
    // Moderate activity, maintenance
    assert_eq!(goal.calories_daily, 2250);
    assert_eq!(
        goal.meal_timing.get(&MealSlot::CafeDaManha).map(String::as_str),
        Some("07:00")
    );
}

#[test]
fn test_invalid_values_use_fallbacks() {
    let config = PersonalizationConfig::default();
    let garbage = calculate_nutrition_goal_at(
        &profile(&json!({
            "sex": "masculino",
            "age": "vinte",
            "height": true,
            "weight_current": 70,
            "activity_level": "hiperativo",
            "objective": "emagrecer"
        })),
        &config,
        fixed_timestamp(),
    )
    .unwrap();

    // Age 30, height 1.70: 700 + 1062.5 - 150 + 5
    assert!((garbage.bmr - 1617.5).abs() < 1e-9, "BMR was {}", garbage.bmr);
    assert!((garbage.tdee - 1617.5 * 1.55).abs() < 1e-6);
}

#[test]
fn test_beginner_code_uses_default_activity_factor() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"activity_level": "iniciante"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();

    assert!((goal.bmr - 1673.75).abs() < 1e-9);
    assert!((goal.tdee - goal.bmr * 1.55).abs() < 1e-9, "TDEE was {}", goal.tdee);
    assert!((goal.tdee - 2594.3125).abs() < 1e-9);
    // 2594.3125 - 500
    assert_eq!(goal.calories_daily, 2094);
}

#[test]
fn test_out_of_range_values_are_used_when_permissive() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"age": -5}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();
    // 700 + 1093.75 + 25 + 5
    assert!((goal.bmr - 1823.75).abs() < 1e-9);
}

#[test]
fn test_strict_mode_rejects_out_of_range_values() {
    let mut config = PersonalizationConfig::default();
    config.validation.strict = true;

    let negative_age = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"age": -5}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap_err();
    assert_eq!(negative_age.code, ErrorCode::ValueOutOfRange);
    assert_eq!(negative_age.context.field.as_deref(), Some("age"));

    let zero_height = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"height": 0}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap_err();
    assert_eq!(zero_height.code, ErrorCode::ValueOutOfRange);

    assert!(calculate_nutrition_goal_at(
        &profile(&reference_answers()),
        &config,
        fixed_timestamp()
    )
    .is_ok());
}

#[test]
fn test_strict_mode_still_falls_back_for_missing_values() {
    let mut config = PersonalizationConfig::default();
    config.validation.strict = true;
    assert!(calculate_nutrition_goal_at(&profile(&json!({})), &config, fixed_timestamp()).is_ok());
}

// ============================================================================
// Micronutrients
// ============================================================================

#[test]
fn test_micronutrient_table_is_complete() {
    let table = recommend_micronutrients(&profile(&reference_answers()));
    assert_eq!(table.len(), 7);
    let b12 = &table[&Micronutrient::VitaminaB12];
    assert!(b12.sources.iter().any(|s| s == "Carnes"));
    assert_eq!(table[&Micronutrient::Ferro].amount, "18 mg");
}

#[test]
fn test_vegetarian_overrides_b12_and_iron() {
    let table = recommend_micronutrients(&profile(&answers_with(
        &json!({"dietary_restrictions": ["vegetariano"]}),
    )));

    let b12 = &table[&Micronutrient::VitaminaB12];
    assert!(b12.sources.iter().any(|s| s == "Suplemento de B12"));
    assert!(!b12.sources.iter().any(|s| s == "Carnes"));
    assert_eq!(table[&Micronutrient::Ferro].amount, "32 mg");
    // Vegetarians may still eat dairy
    assert!(table[&Micronutrient::Calcio]
        .sources
        .iter()
        .any(|s| s == "Leite"));
}

#[test]
fn test_lactose_switches_calcium_sources() {
    let table = recommend_micronutrients(&profile(&answers_with(
        &json!({"restricoes_alimentares": {"lactose": true, "gluten": false}}),
    )));

    let calcium = &table[&Micronutrient::Calcio];
    assert!(!calcium.sources.iter().any(|s| s == "Leite" || s == "Iogurte"));
    assert!(calcium.sources.iter().any(|s| s == "Tofu"));
    assert_eq!(table[&Micronutrient::Ferro].amount, "18 mg");
}

#[test]
fn test_micronutrients_serialize_in_declaration_order() {
    let config = PersonalizationConfig::default();
    let goal =
        calculate_nutrition_goal_at(&profile(&reference_answers()), &config, fixed_timestamp())
            .unwrap();
    let json = serde_json::to_value(&goal).unwrap();
    let keys: Vec<&str> = json["micronutrients"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.contains(&"omega_3"));
    assert!(keys.contains(&"vitamina_b12"));
}

// ============================================================================
// Meal Timing and Tips
// ============================================================================

#[test]
fn test_meal_schedules_by_preferred_time() {
    let morning = meal_schedule(PreferredTime::Manha);
    assert_eq!(morning[&MealSlot::CafeDaManha], "07:00");
    assert!(!morning.contains_key(&MealSlot::Ceia));

    let evening = meal_schedule(PreferredTime::Noite);
    assert_eq!(evening[&MealSlot::Ceia], "22:30");

    // Slots iterate in chronological order
    let times: Vec<&String> = evening.values().collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn test_unknown_preferred_time_defaults_to_morning() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"preferred_time": "madrugada"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();
    assert_eq!(goal.meal_timing, meal_schedule(PreferredTime::Manha));
}

#[test]
fn test_tips_order_objective_activity_habits() {
    let tips = build_tips(
        Objective::Emagrecer,
        ActivityLevel::Sedentario,
        &[Habit::SonoIrregular, Habit::PoucaAgua],
    );

    assert_eq!(tips.len(), 3 + 2 + 2);
    assert!(tips[0].contains("proteínas"));
    assert!(tips[3].contains("caminhadas"));
    assert!(tips[5].contains("dormir"));
    assert!(tips[6].contains("água"));
}

#[test]
fn test_tips_keep_habit_order_from_answers() {
    let config = PersonalizationConfig::default();
    let goal = calculate_nutrition_goal_at(
        &profile(&answers_with(&json!({"habitos": "alcool, doces_frequentes"}))),
        &config,
        fixed_timestamp(),
    )
    .unwrap();

    let last_two = &goal.tips[goal.tips.len() - 2..];
    assert!(last_two[0].contains("álcool"));
    assert!(last_two[1].contains("doces"));
}
