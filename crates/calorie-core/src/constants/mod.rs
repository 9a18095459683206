// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, formula coefficients, input limits, and storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Values that operators may tune at
//! runtime live in the configuration layer; the ones here are either
//! physical facts or the defaults that configuration starts from.

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting
/// energy expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
    /// Identifier written into persisted results
    pub const FORMULA_ID: &str = "mifflin";
}

/// Input ranges enforced by the caller before a calculation runs
pub mod limits {
    /// Minimum age in years
    pub const AGE_MIN: u32 = 10;
    /// Maximum age in years
    pub const AGE_MAX: u32 = 120;
    /// Minimum height in centimeters
    pub const HEIGHT_CM_MIN: f64 = 100.0;
    /// Maximum height in centimeters
    pub const HEIGHT_CM_MAX: f64 = 250.0;
    /// Minimum weight in kilograms
    pub const WEIGHT_KG_MIN: f64 = 30.0;
    /// Maximum weight in kilograms
    pub const WEIGHT_KG_MAX: f64 = 300.0;
}

/// Persistence defaults
pub mod storage {
    /// Key of the single persisted calculation slot
    pub const DEFAULT_CALCULATION_KEY: &str = "calorie_calculation";
    /// Directory name under the platform data dir used by the file backend
    pub const DEFAULT_DATA_DIR_NAME: &str = "calorie-tracker";
    /// File extension for values written by the file backend
    pub const FILE_EXTENSION: &str = "json";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// CLI binary name
    pub const CALORIE_CLI: &str = "calorie-cli";
    /// Library crate name (log target prefix)
    pub const CALORIE_TRACKER: &str = "calorie_tracker";
}
