// ABOUTME: Domain service layer combining calculations with persistence
// ABOUTME: Front-end agnostic services reused by the CLI and library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services wrap the pure engine with storage so every front end (CLI,
//! embedding applications) applies the same persistence rules.

/// Calorie calculation with single-slot persistence and lazy record upgrades
pub mod calorie_service;

pub use calorie_service::CalorieService;
