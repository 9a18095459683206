// ABOUTME: Calculation result models and the persisted {data, results} record
// ABOUTME: Includes the lenient read shape for records written before macros existed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::input::CalorieCalculationData;
use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::constants::mifflin::FORMULA_ID;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMR formula used for a calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalculationFormula {
    /// Mifflin-St Jeor (1990)
    #[default]
    Mifflin,
}

impl CalculationFormula {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mifflin => FORMULA_ID,
        }
    }
}

impl fmt::Display for CalculationFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily macronutrient split in whole grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Macronutrients {
    /// Protein (g)
    pub protein_grams: u32,
    /// Fat (g)
    pub fat_grams: u32,
    /// Carbohydrates (g)
    pub carbs_grams: u32,
}

impl Macronutrients {
    /// Calories supplied by this split (`p*4 + f*9 + c*4`)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        f64::from(self.fat_grams).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.protein_grams).mul_add(
                KCAL_PER_GRAM_PROTEIN,
                f64::from(self.carbs_grams) * KCAL_PER_GRAM_CARBS,
            ),
        )
    }
}

/// Result of a calorie calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieResults {
    /// Basal Metabolic Rate (kcal/day), rounded
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// Daily calorie target after the goal modifier
    pub target_calories: i64,
    /// BMR formula used
    pub formula: CalculationFormula,
    /// Macronutrient split of the target calories
    pub macros: Macronutrients,
}

/// The single persisted calculation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCalculation {
    /// Input the results were computed from
    pub data: CalorieCalculationData,
    /// Computed results
    pub results: CalorieResults,
}

/// Results as read from storage; `macros` is absent in older records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedResults {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// Daily calorie target
    pub target_calories: i64,
    /// BMR formula used
    #[serde(default)]
    pub formula: CalculationFormula,
    /// Macronutrient split, if the record has one
    #[serde(default)]
    pub macros: Option<Macronutrients>,
}

/// Calculation record as read from storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedCalculation {
    /// Input the results were computed from
    pub data: CalorieCalculationData,
    /// Possibly incomplete results
    pub results: PersistedResults,
}

impl PersistedCalculation {
    /// Whether the record predates macro support
    #[must_use]
    pub const fn needs_macros(&self) -> bool {
        self.results.macros.is_none()
    }

    /// Convert into a complete record if macros are present
    ///
    /// # Errors
    ///
    /// Returns the record unchanged when `results.macros` is missing
    pub fn into_complete(self) -> Result<StoredCalculation, Self> {
        match self.results.macros {
            Some(macros) => Ok(self.with_macros(macros)),
            None => Err(self),
        }
    }

    /// Complete the record with the given macros
    #[must_use]
    pub fn with_macros(self, macros: Macronutrients) -> StoredCalculation {
        StoredCalculation {
            data: self.data,
            results: CalorieResults {
                bmr: self.results.bmr,
                tdee: self.results.tdee,
                target_calories: self.results.target_calories,
                formula: self.results.formula,
                macros,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE: &str = r#"{"data":{"gender":"male","age":30,"height":180,"weight":80,"activityLevel":"moderately_active","goal":"maintain_weight"},"results":{"bmr":1755,"tdee":2720,"targetCalories":2720,"formula":"mifflin","macros":{"proteinGrams":152,"fatGrams":80,"carbsGrams":348}}}"#;

    #[test]
    fn test_stored_calculation_round_trips_byte_for_byte() {
        let record: StoredCalculation = serde_json::from_str(COMPLETE).unwrap();
        assert_eq!(record.results.macros.protein_grams, 152);
        assert_eq!(serde_json::to_string(&record).unwrap(), COMPLETE);
    }

    #[test]
    fn test_legacy_record_without_macros() {
        let legacy = r#"{"data":{"gender":"female","age":25,"height":165,"weight":60,"activityLevel":"sedentary","goal":"lose_weight"},"results":{"bmr":1345,"tdee":1614,"targetCalories":1291,"formula":"mifflin"}}"#;
        let record: PersistedCalculation = serde_json::from_str(legacy).unwrap();
        assert!(record.needs_macros());
        let record = record.into_complete().unwrap_err();
        let complete = record.with_macros(Macronutrients::default());
        assert_eq!(complete.results.target_calories, 1291);
    }

    #[test]
    fn test_total_calories() {
        let macros = Macronutrients {
            protein_grams: 152,
            fat_grams: 80,
            carbs_grams: 348,
        };
        assert!((macros.total_calories() - 2720.0).abs() < f64::EPSILON);
    }
}
