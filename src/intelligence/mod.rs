// ABOUTME: Calculation modules: the calorie engine and caller-side input validation
// ABOUTME: Pure functions with no storage or async dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Evidence-based nutrition calculations. Everything here is synchronous
//! and side-effect free apart from `tracing` events; persistence lives in
//! [`crate::services`].

/// BMR, TDEE, target calories, and macronutrient split
pub mod calorie_calculator;

/// Range checks applied by callers before invoking the engine
pub mod input_validation;

pub use calorie_calculator::{
    activity_multiplier, calculate_bmr, calculate_calories, calculate_macronutrients,
    calculate_target_calories, calculate_tdee, goal_calorie_modifier, MacroPercentages,
};
pub use input_validation::{validate_basic_data, validate_calculation_input};
