// ABOUTME: Core types for the fitplan personalization engine
// ABOUTME: Foundation crate with error handling, quiz profile model, and output records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitplan Core
//!
//! Foundation crate shared by the personalization engines. It changes rarely:
//! the engines evolve their rules, while the records they exchange with the
//! persistence and HTTP collaborators stay put.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **coerce**: Lenient three-way coercion of untrusted JSON values
//! - **models**: Quiz profile (input) and goal, plan, meal analysis records (output)

/// Unified error handling system with standard error codes
pub mod errors;

/// Lenient coercion of untrusted JSON scalars
pub mod coerce;

/// Quiz profile and derived output records
pub mod models;
