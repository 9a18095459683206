// ABOUTME: Core types and constants for the calorie and macronutrient calculator
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Core
//!
//! Foundation crate providing shared types and constants for the calorie
//! calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, energy densities, and input limits
//! - **models**: Calculation inputs, results, and the persisted record

/// Unified error handling system with standard error codes
pub mod errors;

/// Formula coefficients and limits organized by domain
pub mod constants;

/// Calculation inputs, results, and the persisted record
pub mod models;
