// ABOUTME: Shared test utilities for the personalization engine integration tests
// ABOUTME: Quiet logging setup, a fixed timestamp, and reference quiz answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fitplan_engine`

use chrono::{DateTime, TimeZone, Utc};
use fitplan_engine::models::QuizProfile;
use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default WARN keeps output quiet
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed generation time so outputs can be compared
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

/// Reference answers: 25 year old man, 1.75 m, 70 kg, moderately active, losing weight
pub fn reference_answers() -> Value {
    json!({
        "sex": "masculino",
        "age": 25,
        "height": 1.75,
        "weight_current": 70,
        "weight_goal": 65,
        "activity_level": "moderado",
        "objective": "emagrecer"
    })
}

/// Parse quiz answers with logging initialized
pub fn profile(answers: &Value) -> QuizProfile {
    init_test_logging();
    QuizProfile::from_answers(answers)
}

/// Reference answers with some keys replaced or added
pub fn answers_with(overrides: &Value) -> Value {
    let mut answers = reference_answers();
    if let (Some(base), Some(extra)) = (answers.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    answers
}
