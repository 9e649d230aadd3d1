// ABOUTME: Integration tests for the meal analysis normalizer
// ABOUTME: Fenced and prose-wrapped responses, hard failures, item defaults, totals invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use fitplan_engine::config::personalization::MealAnalysisConfig;
use fitplan_engine::errors::{ErrorCode, ErrorResponse};
use fitplan_engine::intelligence::meal_analysis::{normalize_meal_analysis, normalize_meal_value};
use fitplan_engine::models::{MealAnalysisResult, MealTotals};
use serde_json::json;

const BARE_RESPONSE: &str = r#"{"itens":[{"nome":"Arroz branco","calorias":130,"proteinas":2.7,"carboidratos":28.2,"gorduras":0.3},{"nome":"Feijão","calorias":76,"proteinas":4.8,"carboidratos":13.6,"gorduras":0.5}]}"#;

fn normalize(text: &str) -> fitplan_engine::errors::AppResult<MealAnalysisResult> {
    init_test_logging();
    normalize_meal_analysis(text, &MealAnalysisConfig::default())
}

fn assert_totals_match_items(result: &MealAnalysisResult) {
    let totals = result.totals();
    let items = result.items();
    let calories: f64 = items.iter().map(|i| i.calories).fold(0.0, |a, b| a + b);
    let protein: f64 = items.iter().map(|i| i.protein_g).fold(0.0, |a, b| a + b);
    let carbs: f64 = items.iter().map(|i| i.carbs_g).fold(0.0, |a, b| a + b);
    let fat: f64 = items.iter().map(|i| i.fat_g).fold(0.0, |a, b| a + b);

    assert_eq!(totals.calories.to_bits(), calories.to_bits());
    assert_eq!(totals.protein_g.to_bits(), protein.to_bits());
    assert_eq!(totals.carbs_g.to_bits(), carbs.to_bits());
    assert_eq!(totals.fat_g.to_bits(), fat.to_bits());
}

// ============================================================================
// Lenient Parsing
// ============================================================================

#[test]
fn test_bare_json() {
    let result = normalize(BARE_RESPONSE).unwrap();
    assert_eq!(result.items().len(), 2);
    assert_eq!(result.items()[0].name, "Arroz branco");
    assert!((result.totals().calories - 206.0).abs() < 1e-9);
    assert_totals_match_items(&result);
}

#[test]
fn test_fenced_text_matches_bare_json() {
    let fenced = format!("Here you go:\n```json\n{BARE_RESPONSE}\n```");
    assert_eq!(normalize(&fenced).unwrap(), normalize(BARE_RESPONSE).unwrap());
}

#[test]
fn test_prose_around_json() {
    let wrapped = format!("Claro! Analisei a foto.\n{BARE_RESPONSE}\nEspero ter ajudado.");
    assert_eq!(normalize(&wrapped).unwrap(), normalize(BARE_RESPONSE).unwrap());
}

#[test]
fn test_items_alias() {
    let result = normalize(r#"{"items":[{"name":"Egg","calories":"78 kcal"}]}"#).unwrap();
    assert_eq!(result.items()[0].name, "Egg");
    assert!((result.items()[0].calories - 78.0).abs() < 1e-9);
}

// ============================================================================
// Hard Failures
// ============================================================================

#[test]
fn test_missing_items_key_fails() {
    let err = normalize(r#"{"foo": 1}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailure);
    assert_eq!(err.http_status(), 422);
}

#[test]
fn test_non_json_fails() {
    for text in [
        "",
        "Desculpe, não consegui identificar alimentos nesta imagem.",
        "```json\n```",
        "{nome: arroz}",
    ] {
        let err = normalize(text).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailure, "input {text:?}");
    }
}

#[test]
fn test_failure_envelope_for_client() {
    let err = normalize("sem json aqui").unwrap_err();
    let envelope = serde_json::to_value(ErrorResponse::from(err)).unwrap();

    assert_eq!(envelope["error"]["code"], "VALIDATION_FAILURE");
    assert_eq!(
        envelope["error"]["message"],
        "Não foi possível analisar a imagem. Tente novamente."
    );
    assert!(envelope["error"]["details"]["reason"].is_string());
    assert!(envelope["error"].get("request_id").is_none());
}

#[test]
fn test_items_not_array_fails() {
    let err = normalize(r#"{"itens": {"nome": "Arroz"}}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailure);

    let err = normalize(r#"[{"nome": "Arroz"}]"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailure);
}

// ============================================================================
// Item Normalization
// ============================================================================

#[test]
fn test_item_defaults() {
    let result = normalize(
        r#"{"itens":[{"calorias":"abc","proteinas":null},{"nome":"   ","gorduras":"3,5g"},42]}"#,
    )
    .unwrap();

    let items = result.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "Alimento não identificado");
    assert!(items[0].calories.abs() < f64::EPSILON);
    assert!(items[0].protein_g.abs() < f64::EPSILON);
    assert_eq!(items[1].name, "Alimento não identificado");
    assert!((items[1].fat_g - 3.5).abs() < 1e-9);
    assert_eq!(items[2].name, "Alimento não identificado");
    assert_totals_match_items(&result);
}

#[test]
fn test_negative_amounts_clamped() {
    let result = normalize(r#"{"itens":[{"nome":"Erro","calorias":-120,"proteinas":"-4"}]}"#)
        .unwrap();
    assert!(result.items()[0].calories.abs() < f64::EPSILON);
    assert!(result.items()[0].protein_g.abs() < f64::EPSILON);
}

#[test]
fn test_custom_unknown_name() {
    let config = MealAnalysisConfig {
        unknown_item_name: "Desconhecido".into(),
    };
    let result = normalize_meal_analysis(r#"{"itens":[{}]}"#, &config).unwrap();
    assert_eq!(result.items()[0].name, "Desconhecido");
}

// ============================================================================
// Totals Invariant
// ============================================================================

#[test]
fn test_model_totals_are_ignored() {
    let result = normalize(
        r#"{"itens":[{"nome":"Pão","calorias":150,"proteinas":5,"carboidratos":28,"gorduras":2}],
            "caloriasTotais": 9999, "proteinasTotais": 1}"#,
    )
    .unwrap();
    assert!((result.totals().calories - 150.0).abs() < 1e-9);
    assert!((result.totals().protein_g - 5.0).abs() < 1e-9);
}

#[test]
fn test_empty_item_list_has_zero_totals() {
    let result = normalize(r#"{"itens": []}"#).unwrap();
    assert!(result.items().is_empty());
    assert_eq!(*result.totals(), MealTotals::default());
}

#[test]
fn test_totals_match_items_for_many_values() {
    let items: Vec<_> = (0..25)
        .map(|i| {
            let i = f64::from(i);
            json!({
                "nome": format!("Item {i}"),
                "calorias": i.mul_add(37.3, 0.1),
                "proteinas": i * 1.7,
                "carboidratos": i.mul_add(0.33, 2.0),
                "gorduras": i / 3.0
            })
        })
        .collect();
    let result =
        normalize_meal_value(&json!({ "itens": items }), &MealAnalysisConfig::default()).unwrap();
    assert_eq!(result.items().len(), 25);
    assert_totals_match_items(&result);
}

#[test]
fn test_serialized_shape() {
    let json = serde_json::to_value(normalize(BARE_RESPONSE).unwrap()).unwrap();
    assert_eq!(json["itens"][1]["nome"], "Feijão");
    assert!(json["caloriasTotais"].is_number());
    assert!(json["proteinasTotais"].is_number());
    assert!(json["carboidratosTotais"].is_number());
    assert!(json["gordurasTotais"].is_number());
}
