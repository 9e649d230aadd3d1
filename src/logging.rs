// ABOUTME: Logging configuration and structured logging setup for the personalization engines
// ABOUTME: Builds a tracing-subscriber registry from environment settings, plus event helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! The engines only emit `tracing` events. Binaries embedding them call
//! [`init_from_env`] (or build a [`LoggingConfig`]) once at startup.

use crate::constants::service_names;
use anyhow::{anyhow, Result};
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Crates whose events follow the configured level regardless of `RUST_LOG`
const ENGINE_TARGETS: [&str; 2] = ["fitplan_engine", "fitplan_core"];

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)] // Independent output toggles
pub struct LoggingConfig {
    /// Level for the engine crates (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name attached to the startup event
    pub service_name: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output without targets
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::FITPLAN_ENGINE.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `ENVIRONMENT`, `SERVICE_NAME` and the
    /// `LOG_INCLUDE_{LOCATION,THREAD,SPANS}` switches
    ///
    /// Production turns every include switch on. An unknown `LOG_FORMAT`
    /// keeps the pretty format.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let is_production = environment == "production";

        let format = env::var("LOG_FORMAT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.format);

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format,
            include_location: is_production || env_switch("LOG_INCLUDE_LOCATION"),
            include_thread: is_production || env_switch("LOG_INCLUDE_THREAD"),
            include_spans: is_production || env_switch("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment,
        }
    }

    /// Filter directives: the configured level, then one directive per engine crate
    #[must_use]
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        let level = if level.contains('=') || level.contains(',') {
            "info"
        } else {
            level
        };
        ENGINE_TARGETS
            .iter()
            .fold(self.level.trim().to_owned(), |acc, target| {
                format!("{acc},{target}={level}")
            })
    }

    fn fmt_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_writer(io::stdout)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directives do not parse or a global
    /// subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(self.directives())
            .map_err(|e| anyhow!("Invalid log level '{}': {e}", self.level))?;

        tracing_subscriber::registry()
            .with(self.fmt_layer())
            .with(filter)
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        info!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Personalization engine logging initialized"
        );
        Ok(())
    }
}

/// Switch variables count as on when set to `1`, `true`, `yes` or `on`
fn env_switch(name: &str) -> bool {
    env::var(name).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Engine-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log a computed nutrition goal
    pub fn log_goal_calculated(calories_daily: i32, bmr: f64, tdee: f64, fallbacks_used: usize) {
        info!(
            goal.calories_daily = calories_daily,
            goal.bmr = bmr,
            goal.tdee = tdee,
            goal.fallbacks_used = fallbacks_used,
            "Nutrition goal calculated"
        );
    }

    /// Log a generated workout plan
    pub fn log_plan_generated(sessions: usize, intensity: &str, duration_minutes: u32) {
        info!(
            plan.sessions = sessions,
            plan.intensity = %intensity,
            plan.duration_minutes = duration_minutes,
            "Workout plan generated"
        );
    }

    /// Log a normalized meal analysis
    pub fn log_meal_analysis(items: usize, total_calories: f64, used_fallback_extraction: bool) {
        info!(
            meal.items = items,
            meal.total_calories = total_calories,
            meal.fallback_extraction = used_fallback_extraction,
            "Meal analysis normalized"
        );
    }

    /// Log a model response that could not be normalized
    pub fn log_validation_failure(reason: &str, response_len: usize) {
        warn!(
            meal.failure_reason = %reason,
            meal.response_len = response_len,
            "Meal analysis validation failure"
        );
    }
}
