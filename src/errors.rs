// ABOUTME: Error handling for the personalization engines
// ABOUTME: Re-exports the unified error types from fitplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling
//!
//! The error types live in `fitplan-core` so the models can construct them.
//! Conversions from configuration errors are in
//! [`crate::config::personalization::error`].

pub use fitplan_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
