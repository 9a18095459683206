// ABOUTME: Caller-side range checks for calculator input before it reaches the engine
// ABOUTME: Mirrors the calculator form limits for age, height, and weight
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Input Validation
//!
//! The engine in [`super::calorie_calculator`] never validates. Front ends
//! call [`validate_calculation_input`] first, which rejects the same values
//! the calculator form does:
//!
//! - age: 10-120 years
//! - height: 100-250 cm
//! - weight: 30-300 kg

use calorie_core::constants::limits::{
    AGE_MAX, AGE_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN, WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};
use calorie_core::errors::{AppError, AppResult};
use calorie_core::models::{BasicData, CalorieCalculationData};

/// Check a finite value against an inclusive range
fn check_range(field: &str, value: f64, min: f64, max: f64, unit: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::value_out_of_range(field, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(AppError::value_out_of_range(
            field,
            format!("must be between {min} and {max} {unit}, got {value}"),
        ));
    }
    Ok(())
}

/// Validate the biometric step of the calculator
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error naming the first field outside its range
pub fn validate_basic_data(basic: &BasicData) -> AppResult<()> {
    if !(AGE_MIN..=AGE_MAX).contains(&basic.age) {
        return Err(AppError::value_out_of_range(
            "age",
            format!(
                "must be between {AGE_MIN} and {AGE_MAX} years, got {}",
                basic.age
            ),
        ));
    }
    check_range("height", basic.height_cm, HEIGHT_CM_MIN, HEIGHT_CM_MAX, "cm")?;
    check_range("weight", basic.weight_kg, WEIGHT_KG_MIN, WEIGHT_KG_MAX, "kg")
}

/// Validate a complete calculation input
///
/// Activity level and goal are not checked: unknown values are accepted
/// and resolved to defaults by the engine.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error naming the first field outside its range
pub fn validate_calculation_input(data: &CalorieCalculationData) -> AppResult<()> {
    validate_basic_data(&data.basic)
}
