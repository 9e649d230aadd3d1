// ABOUTME: Lenient three-way coercion of untrusted JSON values (absent / invalid / valid)
// ABOUTME: Used at the quiz and AI-response boundaries so fallbacks are explicit and logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Lenient coercion of untrusted scalars.
//!
//! Quiz answers and model responses arrive as loosely typed JSON. Instead of
//! collapsing every problem into a zero, each read yields a [`Coerced`] value
//! that keeps "the field was not there" apart from "the field was there but
//! unusable", so the caller can decide on a fallback and log which case hit.

use serde_json::Value;
use std::fmt::Debug;
use tracing::warn;

/// Outcome of reading one untrusted field
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced<T> {
    /// Field missing, `null`, or blank
    Absent,
    /// Field present but not convertible
    Invalid {
        /// The raw value as received, for logging
        raw: String,
    },
    /// Field converted successfully
    Valid(T),
}

impl<T> Coerced<T> {
    /// Whether a usable value was read
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The converted value, discarding the absent/invalid distinction
    #[must_use]
    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::Invalid { .. } => None,
        }
    }

    /// Borrowing variant of [`Coerced::valid`]
    #[must_use]
    pub const fn as_valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Absent | Self::Invalid { .. } => None,
        }
    }

    /// Map the valid value, keeping absent/invalid as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Coerced<U> {
        match self {
            Self::Valid(value) => Coerced::Valid(f(value)),
            Self::Absent => Coerced::Absent,
            Self::Invalid { raw } => Coerced::Invalid { raw },
        }
    }
}

impl<T: Clone + Debug> Coerced<T> {
    /// Resolve to the valid value or `fallback`, logging the substitution
    #[must_use]
    pub fn resolve_or(&self, field: &str, fallback: T) -> T {
        match self {
            Self::Valid(value) => value.clone(),
            Self::Absent => {
                warn!(field, fallback = ?fallback, reason = "absent", "Quiz field missing, using fallback");
                fallback
            }
            Self::Invalid { raw } => {
                warn!(field, raw = %raw, fallback = ?fallback, reason = "invalid", "Quiz field invalid, using fallback");
                fallback
            }
        }
    }
}

impl<T: Copy + Debug> Coerced<T> {
    /// The valid value, or `None` with a `warn` naming the default rule applied instead
    #[must_use]
    pub fn valid_or_warn(&self, field: &str, default_rule: &str) -> Option<T> {
        match self {
            Self::Valid(value) => Some(*value),
            Self::Absent => {
                warn!(field, default_rule, reason = "absent", "Quiz field missing, using default rule");
                None
            }
            Self::Invalid { raw } => {
                warn!(field, raw = %raw, default_rule, reason = "invalid", "Quiz field invalid, using default rule");
                None
            }
        }
    }
}

impl<T> Default for Coerced<T> {
    fn default() -> Self {
        Self::Absent
    }
}

/// Enumerations that can be read from the short codes the mobile client sends
pub trait FromCode: Sized {
    /// Parse an already normalized code (see [`normalize_code`])
    fn from_code(code: &str) -> Option<Self>;
}

/// Lowercase, trim, fold Portuguese diacritics and turn separators into `_`
///
/// `"Força"`, `"forca"` and `" FORÇA "` all normalize to `"forca"`;
/// `"muito ativo"` and `"muito-ativo"` to `"muito_ativo"`.
#[must_use]
pub fn normalize_code(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            ' ' | '-' => '_',
            other => other,
        })
        .collect()
}

/// Read an enumerated code field
pub fn coerce_code<T: FromCode>(value: Option<&Value>) -> Coerced<T> {
    match value {
        None | Some(Value::Null) => Coerced::Absent,
        Some(Value::String(s)) if s.trim().is_empty() => Coerced::Absent,
        Some(Value::String(s)) => T::from_code(&normalize_code(s))
            .map_or_else(|| Coerced::Invalid { raw: s.clone() }, Coerced::Valid),
        // Some clients send durations as bare numbers
        Some(Value::Number(n)) => {
            let raw = n.to_string();
            T::from_code(&raw).map_or(Coerced::Invalid { raw }, Coerced::Valid)
        }
        Some(other) => Coerced::Invalid {
            raw: other.to_string(),
        },
    }
}

/// Read a numeric field from a JSON number or a numeric string
pub fn coerce_number(value: Option<&Value>) -> Coerced<f64> {
    match value {
        None | Some(Value::Null) => Coerced::Absent,
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).map_or_else(
            || Coerced::Invalid { raw: n.to_string() },
            Coerced::Valid,
        ),
        Some(Value::String(s)) if s.trim().is_empty() => Coerced::Absent,
        Some(Value::String(s)) => parse_lenient_number(s)
            .map_or_else(|| Coerced::Invalid { raw: s.clone() }, Coerced::Valid),
        Some(other) => Coerced::Invalid {
            raw: other.to_string(),
        },
    }
}

/// Read a free-text field, treating blank strings as absent
pub fn coerce_text(value: Option<&Value>) -> Coerced<String> {
    match value {
        None | Some(Value::Null) => Coerced::Absent,
        Some(Value::String(s)) if s.trim().is_empty() => Coerced::Absent,
        Some(Value::String(s)) => Coerced::Valid(s.trim().to_owned()),
        Some(Value::Number(n)) => Coerced::Valid(n.to_string()),
        Some(other) => Coerced::Invalid {
            raw: other.to_string(),
        },
    }
}

/// Parse the leading number of a string such as `"250 kcal"` or `"1,75"`
///
/// A decimal comma is accepted. Anything after the numeric prefix (units,
/// prose) is ignored. Returns `None` when no digit leads the string.
#[must_use]
pub fn parse_lenient_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_separator = false;

    for (idx, c) in text.char_indices() {
        match c {
            '+' | '-' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' | ',' if !seen_separator => seen_separator = true,
            _ => break,
        }
        end = idx + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    let candidate = text[..end].trim_end_matches(['.', ',']).replace(',', ".");
    candidate.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_lenient_number_variants() {
        assert_eq!(parse_lenient_number("70"), Some(70.0));
        assert_eq!(parse_lenient_number(" 1,75 m"), Some(1.75));
        assert_eq!(parse_lenient_number("250 kcal"), Some(250.0));
        assert_eq!(parse_lenient_number("12.5g"), Some(12.5));
        assert_eq!(parse_lenient_number("-3"), Some(-3.0));
        assert_eq!(parse_lenient_number("10."), Some(10.0));
        assert_eq!(parse_lenient_number("abc"), None);
        assert_eq!(parse_lenient_number("-"), None);
        assert_eq!(parse_lenient_number(""), None);
    }

    #[test]
    fn test_coerce_number_three_way() {
        assert_eq!(coerce_number(None), Coerced::Absent);
        assert_eq!(coerce_number(Some(&Value::Null)), Coerced::Absent);
        assert_eq!(coerce_number(Some(&json!("  "))), Coerced::Absent);
        assert_eq!(coerce_number(Some(&json!(42))), Coerced::Valid(42.0));
        assert_eq!(coerce_number(Some(&json!("42,5"))), Coerced::Valid(42.5));
        assert_eq!(
            coerce_number(Some(&json!("lots"))),
            Coerced::Invalid {
                raw: "lots".to_owned()
            }
        );
        assert_eq!(
            coerce_number(Some(&json!(true))),
            Coerced::Invalid {
                raw: "true".to_owned()
            }
        );
    }

    #[test]
    fn test_valid_or_warn() {
        assert_eq!(Coerced::Valid(3_u8).valid_or_warn("sessions", "default"), Some(3));
        assert_eq!(Coerced::<u8>::Absent.valid_or_warn("sessions", "default"), None);
        let invalid: Coerced<u8> = Coerced::Invalid { raw: "x".to_owned() };
        assert_eq!(invalid.valid_or_warn("sessions", "default"), None);
    }

    #[test]
    fn test_normalize_code_folds_accents_and_separators() {
        assert_eq!(normalize_code(" Força "), "forca");
        assert_eq!(normalize_code("Muito Ativo"), "muito_ativo");
        assert_eq!(normalize_code("sedentário"), "sedentario");
        assert_eq!(normalize_code("manhã"), "manha");
    }

    #[test]
    fn test_resolve_or_prefers_valid_value() {
        assert!((Coerced::Valid(5.0).resolve_or("x", 1.0_f64) - 5.0).abs() < f64::EPSILON);
        assert!((Coerced::Absent.resolve_or("x", 1.0_f64) - 1.0).abs() < f64::EPSILON);
        let invalid: Coerced<f64> = Coerced::Invalid {
            raw: "?".to_owned(),
        };
        assert!((invalid.resolve_or("x", 2.0) - 2.0).abs() < f64::EPSILON);
    }
}
