// ABOUTME: Core data models for calorie calculations
// ABOUTME: Re-exports calculation inputs, results, and the persisted record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The JSON shapes here are the persisted wire format. Field names are
//! camelCase on the wire and whole-valued numbers are written as integers,
//! so records written by older clients load and re-save unchanged.
//!
//! ## Core Models
//!
//! - `CalorieCalculationData`: biometric input plus activity level and goal
//! - `CalorieResults`: BMR, TDEE, target calories, and macro split
//! - `StoredCalculation`: the single persisted `{data, results}` record
//! - `PersistedCalculation`: lenient read shape that tolerates records
//!   written before macros existed

mod input;
mod results;
mod wire;

pub use input::{ActivityData, ActivityLevel, BasicData, CalorieCalculationData, Gender, Goal};
pub use results::{
    CalculationFormula, CalorieResults, Macronutrients, PersistedCalculation, PersistedResults,
    StoredCalculation,
};
