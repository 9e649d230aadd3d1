// ABOUTME: Normalizes vision model meal analysis text into a validated nutrition breakdown
// ABOUTME: Strips code fences, parses JSON with a regex fallback, and recomputes totals from items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Analysis Normalizer
//!
//! The vision model is asked for a JSON object with an `itens` array, but its
//! answers arrive wrapped in markdown fences, surrounded by prose, or with
//! numbers as strings. This module turns such text into a
//! [`MealAnalysisResult`] or fails with `ErrorCode::ValidationFailure`.
//!
//! Totals the model may send are ignored; they are always recomputed from
//! the normalized items.

use crate::config::personalization::MealAnalysisConfig;
use crate::constants::meal_analysis::ANALYSIS_FAILED_MESSAGE;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use fitplan_core::coerce::{coerce_number, coerce_text, Coerced};
use fitplan_core::models::{MealAnalysisResult, MealItem};
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// First `{` through last `}`, across lines
static JSON_OBJECT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").ok());

const ITEMS_KEYS: &[&str] = &["itens", "items"];
const NAME_KEYS: &[&str] = &["nome", "name", "alimento"];
const CALORIES_KEYS: &[&str] = &["calorias", "calories", "kcal"];
const PROTEIN_KEYS: &[&str] = &["proteinas", "proteínas", "proteina", "protein"];
const CARBS_KEYS: &[&str] = &["carboidratos", "carboidrato", "carbs", "carbohydrates"];
const FAT_KEYS: &[&str] = &["gorduras", "gordura", "fat", "fats"];

/// JSON parsed out of a model response
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// The parsed document
    pub value: Value,
    /// Whether the regex fallback was needed
    pub extracted: bool,
}

/// Remove markdown code fences (```` ```json ```` and ```` ``` ````)
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_owned()
}

/// Find the span from the first `{` to the last `}`
///
/// Heuristic: it does not check that braces balance, so the span may still
/// fail to parse.
#[must_use]
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.find(text))
        .map(|m| m.as_str())
}

fn validation_failure(reason: &str, response_len: usize) -> AppError {
    AppLogger::log_validation_failure(reason, response_len);
    AppError::validation_failure(ANALYSIS_FAILED_MESSAGE).with_details(json!({ "reason": reason }))
}

/// Parse a model response: whole text first, then the embedded object
///
/// # Errors
///
/// Returns `ErrorCode::ValidationFailure` when neither attempt yields JSON
pub fn parse_model_response(text: &str) -> AppResult<ParsedResponse> {
    let stripped = strip_code_fences(text);

    if let Ok(value) = serde_json::from_str::<Value>(&stripped) {
        return Ok(ParsedResponse {
            value,
            extracted: false,
        });
    }

    let candidate = extract_json_object(&stripped)
        .ok_or_else(|| validation_failure("no JSON object in response", text.len()))?;
    debug!(
        candidate_len = candidate.len(),
        "Direct parse failed, trying embedded JSON object"
    );

    serde_json::from_str::<Value>(candidate)
        .map(|value| ParsedResponse {
            value,
            extracted: true,
        })
        .map_err(|e| validation_failure(&format!("embedded object is not JSON: {e}"), text.len()))
}

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// Read a nutrient amount; unusable and negative values become 0.0
fn nutrient(obj: &Map<String, Value>, keys: &[&str], index: usize) -> f64 {
    let field = keys[0];
    match coerce_number(lookup(obj, keys)) {
        Coerced::Valid(amount) if amount >= 0.0 => amount,
        Coerced::Valid(amount) => {
            warn!(item = index, field, amount, "Negative nutrient amount clamped to 0");
            0.0
        }
        Coerced::Invalid { raw } => {
            warn!(item = index, field, raw = %raw, "Unreadable nutrient amount, using 0");
            0.0
        }
        Coerced::Absent => {
            debug!(item = index, field, "Nutrient amount missing, using 0");
            0.0
        }
    }
}

/// Normalize one item of the `itens` array
///
/// Never fails: a non-object entry becomes an unnamed item with zero nutrients.
#[must_use]
pub fn normalize_item(value: &Value, index: usize, config: &MealAnalysisConfig) -> MealItem {
    let Some(obj) = value.as_object() else {
        warn!(item = index, raw = %value, "Meal item is not an object");
        return MealItem {
            name: config.unknown_item_name.clone(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
        };
    };

    let name = match coerce_text(lookup(obj, NAME_KEYS)) {
        Coerced::Valid(name) => name,
        Coerced::Absent | Coerced::Invalid { .. } => config.unknown_item_name.clone(),
    };

    MealItem {
        name,
        calories: nutrient(obj, CALORIES_KEYS, index),
        protein_g: nutrient(obj, PROTEIN_KEYS, index),
        carbs_g: nutrient(obj, CARBS_KEYS, index),
        fat_g: nutrient(obj, FAT_KEYS, index),
    }
}

/// Normalize an already parsed document
///
/// # Errors
///
/// Returns `ErrorCode::ValidationFailure` when the document has no items array
pub fn normalize_meal_value(value: &Value, config: &MealAnalysisConfig) -> AppResult<MealAnalysisResult> {
    let items = value
        .as_object()
        .and_then(|obj| lookup(obj, ITEMS_KEYS))
        .ok_or_else(|| validation_failure("response has no itens array", 0))?
        .as_array()
        .ok_or_else(|| validation_failure("itens is not an array", 0))?;

    let normalized = items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_item(item, index, config))
        .collect();

    Ok(MealAnalysisResult::from_items(normalized))
}

/// Normalize raw model text into a meal analysis
///
/// # Errors
///
/// Returns `ErrorCode::ValidationFailure` when the text holds no parsable
/// JSON object or the object has no items array
pub fn normalize_meal_analysis(text: &str, config: &MealAnalysisConfig) -> AppResult<MealAnalysisResult> {
    let parsed = parse_model_response(text)?;
    let result = normalize_meal_value(&parsed.value, config)?;

    AppLogger::log_meal_analysis(
        result.items().len(),
        result.totals().calories,
        parsed.extracted,
    );

    Ok(result)
}
