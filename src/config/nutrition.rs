// ABOUTME: Nutrition configuration for BMR, TDEE, goal adjustment, and macro split
// ABOUTME: Lookup tables are exhaustive matches with an explicit default for unknown values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Every per-activity and per-goal table below is a `match` over the full
//! enum including `Other`, so adding a variant fails to compile until the
//! table is updated, and unknown wire values resolve to the documented
//! default instead of an error.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use calorie_core::constants::mifflin;
use calorie_core::models::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Serialize};

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein and fat targets, and the negative-carbs floors
    pub macronutrients: MacronutrientConfig,
}

impl NutritionConfig {
    /// Validate all nutrition settings
    ///
    /// # Errors
    ///
    /// Returns an error if any multiplier or floor is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.goal_adjustments.validate()?;
        self.macronutrients.validate()
    }
}

/// Mifflin-St Jeor formula coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Gender constant added to the base formula
    #[must_use]
    pub const fn gender_constant(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.msj_male_constant,
            Gender::Female => self.msj_female_constant,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin::WEIGHT_COEF,
            msj_height_coef: mifflin::HEIGHT_COEF,
            msj_age_coef: mifflin::AGE_COEF,
            msj_male_constant: mifflin::MALE_CONSTANT,
            msj_female_constant: mifflin::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
    /// Unrecognized activity level: 1.2
    pub unknown: f64,
}

impl ActivityFactorsConfig {
    /// TDEE multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: &ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
            ActivityLevel::Other(_) => self.unknown,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extremely_active,
            self.unknown,
        ];
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
            unknown: 1.2,
        }
    }
}

/// Percentage applied to TDEE to get the daily calorie target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Weight loss deficit: -20%
    pub lose_weight_percent: f64,
    /// Maintenance: 0%
    pub maintain_weight_percent: f64,
    /// Weight gain surplus: +15%
    pub gain_weight_percent: f64,
    /// Unrecognized goal: 0%
    pub unknown_percent: f64,
}

impl GoalAdjustmentConfig {
    /// Allowed magnitude of any goal adjustment
    const MAX_ABS_PERCENT: f64 = 50.0;

    /// Calorie modifier (percent of TDEE) for a goal
    #[must_use]
    pub const fn percent_for(&self, goal: &Goal) -> f64 {
        match goal {
            Goal::LoseWeight => self.lose_weight_percent,
            Goal::MaintainWeight => self.maintain_weight_percent,
            Goal::GainWeight => self.gain_weight_percent,
            Goal::Other(_) => self.unknown_percent,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let percents = [
            self.lose_weight_percent,
            self.maintain_weight_percent,
            self.gain_weight_percent,
            self.unknown_percent,
        ];
        if percents
            .iter()
            .any(|p| !p.is_finite() || p.abs() > Self::MAX_ABS_PERCENT)
        {
            return Err(ConfigError::InvalidRange(
                "goal adjustments must be between -50 and 50 percent",
            ));
        }
        Ok(())
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_weight_percent: -20.0,
            maintain_weight_percent: 0.0,
            gain_weight_percent: 15.0,
            unknown_percent: 0.0,
        }
    }
}

/// Protein/fat targets and the floors applied when carbs would go negative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein base (g/kg) - sedentary: 1.6
    pub protein_sedentary_g_per_kg: f64,
    /// Protein base (g/kg) - lightly active: 1.7
    pub protein_lightly_active_g_per_kg: f64,
    /// Protein base (g/kg) - moderately active: 1.9
    pub protein_moderately_active_g_per_kg: f64,
    /// Protein base (g/kg) - very active: 2.1
    pub protein_very_active_g_per_kg: f64,
    /// Protein base (g/kg) - extremely active: 2.2
    pub protein_extremely_active_g_per_kg: f64,
    /// Protein base (g/kg) - unrecognized activity level: 1.6
    pub protein_unknown_g_per_kg: f64,
    /// Protein added for weight loss (g/kg): +0.2
    pub protein_lose_weight_adjustment: f64,
    /// Protein added for maintenance (g/kg): 0
    pub protein_maintain_weight_adjustment: f64,
    /// Protein added for weight gain (g/kg): +0.1
    pub protein_gain_weight_adjustment: f64,
    /// Protein added for unrecognized goals (g/kg): 0
    pub protein_unknown_adjustment: f64,
    /// Fat (g/kg) for weight loss: 0.8
    pub fat_lose_weight_g_per_kg: f64,
    /// Fat (g/kg) for maintenance: 1.0
    pub fat_maintain_weight_g_per_kg: f64,
    /// Fat (g/kg) for weight gain: 1.1
    pub fat_gain_weight_g_per_kg: f64,
    /// Fat (g/kg) for unrecognized goals: 1.0
    pub fat_unknown_g_per_kg: f64,
    /// Fat floor as percent of target calories when carbs go negative: 20%
    pub fat_floor_percent_target: f64,
    /// Protein floor (g/kg) when carbs go negative: 1.4
    pub protein_floor_g_per_kg: f64,
}

impl MacronutrientConfig {
    /// Base protein (g/kg) for an activity level
    #[must_use]
    pub const fn protein_base_for(&self, level: &ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.protein_sedentary_g_per_kg,
            ActivityLevel::LightlyActive => self.protein_lightly_active_g_per_kg,
            ActivityLevel::ModeratelyActive => self.protein_moderately_active_g_per_kg,
            ActivityLevel::VeryActive => self.protein_very_active_g_per_kg,
            ActivityLevel::ExtremelyActive => self.protein_extremely_active_g_per_kg,
            ActivityLevel::Other(_) => self.protein_unknown_g_per_kg,
        }
    }

    /// Protein adjustment (g/kg) for a goal
    #[must_use]
    pub const fn protein_adjustment_for(&self, goal: &Goal) -> f64 {
        match goal {
            Goal::LoseWeight => self.protein_lose_weight_adjustment,
            Goal::MaintainWeight => self.protein_maintain_weight_adjustment,
            Goal::GainWeight => self.protein_gain_weight_adjustment,
            Goal::Other(_) => self.protein_unknown_adjustment,
        }
    }

    /// Fat (g/kg) for a goal
    #[must_use]
    pub const fn fat_base_for(&self, goal: &Goal) -> f64 {
        match goal {
            Goal::LoseWeight => self.fat_lose_weight_g_per_kg,
            Goal::MaintainWeight => self.fat_maintain_weight_g_per_kg,
            Goal::GainWeight => self.fat_gain_weight_g_per_kg,
            Goal::Other(_) => self.fat_unknown_g_per_kg,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.fat_floor_percent_target) {
            return Err(ConfigError::InvalidRange(
                "fat floor must be between 0 and 100 percent of target calories",
            ));
        }
        let per_kg = [
            self.protein_sedentary_g_per_kg,
            self.protein_lightly_active_g_per_kg,
            self.protein_moderately_active_g_per_kg,
            self.protein_very_active_g_per_kg,
            self.protein_extremely_active_g_per_kg,
            self.protein_unknown_g_per_kg,
            self.fat_lose_weight_g_per_kg,
            self.fat_maintain_weight_g_per_kg,
            self.fat_gain_weight_g_per_kg,
            self.fat_unknown_g_per_kg,
            self.protein_floor_g_per_kg,
        ];
        if per_kg.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "macronutrient g/kg values must be non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_sedentary_g_per_kg: 1.6,
            protein_lightly_active_g_per_kg: 1.7,
            protein_moderately_active_g_per_kg: 1.9,
            protein_very_active_g_per_kg: 2.1,
            protein_extremely_active_g_per_kg: 2.2,
            protein_unknown_g_per_kg: 1.6,
            protein_lose_weight_adjustment: 0.2,
            protein_maintain_weight_adjustment: 0.0,
            protein_gain_weight_adjustment: 0.1,
            protein_unknown_adjustment: 0.0,
            fat_lose_weight_g_per_kg: 0.8,
            fat_maintain_weight_g_per_kg: 1.0,
            fat_gain_weight_g_per_kg: 1.1,
            fat_unknown_g_per_kg: 1.0,
            fat_floor_percent_target: 20.0,
            protein_floor_g_per_kg: 1.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_activity_uses_sedentary_defaults() {
        let config = NutritionConfig::default();
        let unknown = ActivityLevel::Other("couch".to_owned());
        assert!((config.activity_factors.factor_for(&unknown) - 1.2).abs() < f64::EPSILON);
        assert!(
            (config.macronutrients.protein_base_for(&unknown) - 1.6).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_unknown_goal_is_neutral() {
        let config = NutritionConfig::default();
        let unknown = Goal::Other("bulk".to_owned());
        assert!(config.goal_adjustments.percent_for(&unknown).abs() < f64::EPSILON);
        assert!(
            config
                .macronutrients
                .protein_adjustment_for(&unknown)
                .abs()
                < f64::EPSILON
        );
        assert!((config.macronutrients.fat_base_for(&unknown) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_activity_factor() {
        let mut config = NutritionConfig::default();
        config.activity_factors.very_active = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_extreme_goal_adjustment() {
        let mut config = NutritionConfig::default();
        config.goal_adjustments.lose_weight_percent = -75.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }
}
