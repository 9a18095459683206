// ABOUTME: Configuration management module for calculator and storage settings
// ABOUTME: Loads defaults, applies environment overrides, validates, and caches globally
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
//! Configuration module for the calorie calculator
//!
//! - **Nutrition**: Mifflin-St Jeor coefficients, activity factors, goal
//!   adjustments, macronutrient targets and floors
//! - **Storage**: Backend selection, data directory, and the calculation key
//!
//! Configuration is environment-only: defaults are overridden by variables
//! prefixed `CALORIE_`, then validated.

/// Configuration error types
pub mod error;
/// Nutrition calculation parameters
pub mod nutrition;
/// Storage backend settings
pub mod storage;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacronutrientConfig, NutritionConfig,
};
pub use storage::{StorageBackend, StorageConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Main configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Nutrition calculation parameters
    pub nutrition: NutritionConfig,
    /// Persistence settings
    pub storage: StorageConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once; an invalid environment falls back to the defaults.
    #[must_use]
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            storage.backend = %config.storage.backend,
            storage.dir = %config.storage.data_dir.display(),
            "Calculator configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.storage.validate()
    }

    /// Parse `env_var_name` into `target` if it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("CALORIE_ACTIVITY_FACTOR_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var(
            "CALORIE_ACTIVITY_FACTOR_LIGHTLY_ACTIVE",
            &mut factors.lightly_active,
        )?;
        Self::apply_env_var(
            "CALORIE_ACTIVITY_FACTOR_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var(
            "CALORIE_ACTIVITY_FACTOR_VERY_ACTIVE",
            &mut factors.very_active,
        )?;
        Self::apply_env_var(
            "CALORIE_ACTIVITY_FACTOR_EXTREMELY_ACTIVE",
            &mut factors.extremely_active,
        )?;

        let goals = &mut self.nutrition.goal_adjustments;
        Self::apply_env_var("CALORIE_GOAL_LOSE_PERCENT", &mut goals.lose_weight_percent)?;
        Self::apply_env_var("CALORIE_GOAL_GAIN_PERCENT", &mut goals.gain_weight_percent)?;

        let macros = &mut self.nutrition.macronutrients;
        Self::apply_env_var(
            "CALORIE_FAT_FLOOR_PERCENT",
            &mut macros.fat_floor_percent_target,
        )?;
        Self::apply_env_var(
            "CALORIE_PROTEIN_FLOOR_G_PER_KG",
            &mut macros.protein_floor_g_per_kg,
        )?;

        Self::apply_env_var("CALORIE_STORAGE_BACKEND", &mut self.storage.backend)?;
        Self::apply_env_var::<PathBuf>("CALORIE_STORAGE_DIR", &mut self.storage.data_dir)?;
        Self::apply_env_var("CALORIE_STORAGE_KEY", &mut self.storage.calculation_key)?;

        Ok(self)
    }
}
