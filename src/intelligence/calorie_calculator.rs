// ABOUTME: Calorie calculation algorithms: Mifflin-St Jeor BMR, TDEE, goal target, macro split
// ABOUTME: Pure synchronous functions with lenient defaults for unknown activity levels and goals
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Calorie Calculator Module
//!
//! The pipeline is BMR → TDEE → target calories → macronutrients. Nothing
//! here validates ranges or returns errors: callers validate input before
//! invoking the engine, and unknown activity levels or goals resolve to the
//! configured defaults.
//!
//! Rounding is half-up (`floor(x + 0.5)`), matching the values already
//! persisted by earlier clients. Intermediate protein and fat amounts are
//! rounded to one decimal before the carbohydrate remainder is computed.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
use calorie_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use calorie_core::models::{
    ActivityLevel, CalculationFormula, CalorieCalculationData, CalorieResults, Goal,
    Macronutrients,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Round half-up to the nearest integer
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half-up to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// The value is not rounded; rounding happens when results are reported.
#[must_use]
pub fn calculate_bmr(data: &CalorieCalculationData, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * data.weight_kg();
    let height_component = config.msj_height_coef * data.height_cm();
    let age_component = config.msj_age_coef * f64::from(data.age());

    weight_component + height_component + age_component + config.gender_constant(data.gender())
}

/// Activity multiplier for TDEE; unknown levels use the configured default (1.2)
#[must_use]
pub const fn activity_multiplier(level: &ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Percentage applied to TDEE for a goal; unknown goals use the configured default (0)
#[must_use]
pub const fn goal_calorie_modifier(goal: &Goal, config: &GoalAdjustmentConfig) -> f64 {
    config.percent_for(goal)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = round(BMR x Activity Factor)
#[must_use]
pub fn calculate_tdee(bmr: f64, level: &ActivityLevel, config: &ActivityFactorsConfig) -> i64 {
    round_half_up(bmr * activity_multiplier(level, config)) as i64
}

/// Calculate the daily calorie target
///
/// Formula: target = round(TDEE x (1 + modifier / 100))
#[must_use]
pub fn calculate_target_calories(tdee: i64, goal: &Goal, config: &GoalAdjustmentConfig) -> i64 {
    let factor = 1.0 + goal_calorie_modifier(goal, config) / 100.0;
    round_half_up(tdee as f64 * factor) as i64
}

fn carbs_calories(target_calories: f64, protein_g: f64, fat_g: f64) -> f64 {
    target_calories - protein_g.mul_add(KCAL_PER_GRAM_PROTEIN, fat_g * KCAL_PER_GRAM_FAT)
}

fn whole_grams(grams: f64) -> u32 {
    round_half_up(grams).max(0.0) as u32
}

/// Split the target calories into protein, fat, and carbohydrate grams
///
/// Protein is `weight x (activity base + goal adjustment)` g/kg and fat is
/// `weight x goal base` g/kg; carbohydrates take the remaining calories.
///
/// When protein and fat alone exceed the target, fat is first lowered to
/// 20% of the target calories, then protein is lowered to 1.4 g/kg (each only
/// if currently above its floor), and the carbohydrate remainder is
/// recomputed. Carbohydrates never go below zero.
#[must_use]
pub fn calculate_macronutrients(
    data: &CalorieCalculationData,
    target_calories: i64,
    config: &MacronutrientConfig,
) -> Macronutrients {
    let weight_kg = data.weight_kg();
    let target = target_calories as f64;

    let protein_g_per_kg =
        config.protein_base_for(data.activity_level()) + config.protein_adjustment_for(data.goal());
    let mut protein_g = round_to_tenth(weight_kg * protein_g_per_kg);
    let mut fat_g = round_to_tenth(weight_kg * config.fat_base_for(data.goal()));
    let mut remaining = carbs_calories(target, protein_g, fat_g);

    if remaining < 0.0 {
        // Fat is clamped before protein.
        let fat_floor =
            round_to_tenth((target * config.fat_floor_percent_target / 100.0) / KCAL_PER_GRAM_FAT);
        if fat_g > fat_floor {
            fat_g = fat_floor;
        }

        let protein_floor = round_to_tenth(config.protein_floor_g_per_kg * weight_kg);
        if protein_g > protein_floor {
            protein_g = protein_floor;
        }

        debug!(
            carbs_kcal = remaining,
            protein_g, fat_g, "Negative carbohydrate remainder, clamped fat and protein to floors"
        );
        remaining = carbs_calories(target, protein_g, fat_g);
    }

    Macronutrients {
        protein_grams: whole_grams(protein_g),
        fat_grams: whole_grams(fat_g),
        carbs_grams: whole_grams(remaining / KCAL_PER_GRAM_CARBS),
    }
}

/// Calculate BMR, TDEE, target calories, and the macro split
#[must_use]
pub fn calculate_calories(
    data: &CalorieCalculationData,
    config: &NutritionConfig,
) -> CalorieResults {
    let bmr = calculate_bmr(data, &config.bmr);
    let tdee = calculate_tdee(bmr, data.activity_level(), &config.activity_factors);
    let target_calories = calculate_target_calories(tdee, data.goal(), &config.goal_adjustments);
    let macros = calculate_macronutrients(data, target_calories, &config.macronutrients);

    debug!(
        bmr,
        tdee,
        target_calories,
        activity_level = %data.activity_level(),
        goal = %data.goal(),
        "Calculated calorie targets"
    );

    CalorieResults {
        bmr: round_half_up(bmr) as i64,
        tdee,
        target_calories,
        formula: CalculationFormula::Mifflin,
        macros,
    }
}

/// Share of calories supplied by each macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

impl MacroPercentages {
    /// Percentages of the calories the split supplies; all zero for an empty split
    #[must_use]
    pub fn from_macros(macros: &Macronutrients) -> Self {
        let total = macros.total_calories();
        if total <= 0.0 {
            return Self {
                protein_percent: 0.0,
                carbs_percent: 0.0,
                fat_percent: 0.0,
            };
        }
        Self {
            protein_percent: f64::from(macros.protein_grams) * KCAL_PER_GRAM_PROTEIN / total
                * 100.0,
            carbs_percent: f64::from(macros.carbs_grams) * KCAL_PER_GRAM_CARBS / total * 100.0,
            fat_percent: f64::from(macros.fat_grams) * KCAL_PER_GRAM_FAT / total * 100.0,
        }
    }
}
