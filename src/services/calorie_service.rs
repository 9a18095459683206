// ABOUTME: Calorie calculation service combining the engine with single-slot persistence
// ABOUTME: Swallows storage failures and lazily adds macros to records that predate them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie Service
//!
//! Availability of the computed result wins over strict persistence:
//!
//! - a failed save is logged and dropped; the caller still gets its results
//! - an unreadable or unparsable stored value reads as "no calculation"
//! - a stored record without `macros` is completed from its own `data` and
//!   `targetCalories`, written back once, and returned
//!
//! Concurrent calls are not ordered against each other; the last write wins.

use crate::config::{CalculatorConfig, NutritionConfig};
use crate::intelligence::calorie_calculator::{calculate_calories, calculate_macronutrients};
use crate::repository::CalculationRepository;
use crate::storage::factory::Storage;
use crate::storage::KeyValueStore;
use calorie_core::models::{
    CalorieCalculationData, CalorieResults, PersistedCalculation, StoredCalculation,
};
use tracing::{info, warn};

/// Calculation service over a key-value store
#[derive(Clone, Debug)]
pub struct CalorieService<S> {
    repository: CalculationRepository<S>,
    config: NutritionConfig,
}

impl CalorieService<Storage> {
    /// Build a service using the configured storage backend and key
    #[must_use]
    pub fn from_config(config: &CalculatorConfig) -> Self {
        let storage = Storage::new(&config.storage);
        Self::with_repository(
            CalculationRepository::with_key(storage, config.storage.calculation_key.clone()),
            config.nutrition.clone(),
        )
    }
}

impl<S: KeyValueStore> CalorieService<S> {
    /// Service over `store` with the default key
    #[must_use]
    pub fn new(store: S, config: NutritionConfig) -> Self {
        Self::with_repository(CalculationRepository::new(store), config)
    }

    /// Service over an existing repository
    #[must_use]
    pub const fn with_repository(
        repository: CalculationRepository<S>,
        config: NutritionConfig,
    ) -> Self {
        Self { repository, config }
    }

    /// Underlying repository
    #[must_use]
    pub const fn repository(&self) -> &CalculationRepository<S> {
        &self.repository
    }

    /// Nutrition parameters in use
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Compute results without touching storage
    #[must_use]
    pub fn calculate(&self, data: &CalorieCalculationData) -> CalorieResults {
        calculate_calories(data, &self.config)
    }

    /// Compute results and persist them as the current calculation
    ///
    /// Never fails: if the save fails the results are still returned.
    pub async fn calculate_calories(&self, data: &CalorieCalculationData) -> CalorieResults {
        let results = self.calculate(data);
        self.save_calculation(data, &results).await;
        results
    }

    /// Overwrite the stored calculation with `{data, results}`
    ///
    /// Failures are logged and dropped.
    pub async fn save_calculation(&self, data: &CalorieCalculationData, results: &CalorieResults) {
        let record = StoredCalculation {
            data: data.clone(),
            results: results.clone(),
        };
        if let Err(e) = self.repository.save(&record).await {
            warn!(
                key = %self.repository.key(),
                error = %e,
                "Failed to save calorie calculation, keeping in-memory result"
            );
        }
    }

    /// Read the stored calculation
    ///
    /// Returns `None` when nothing is stored, the store cannot be read, or
    /// the payload is not a valid record. Records without macros are
    /// upgraded and rewritten; complete records are returned untouched.
    pub async fn get_calories_result(&self) -> Option<StoredCalculation> {
        let record = match self.repository.load().await {
            Ok(record) => record?,
            Err(e) => {
                warn!(
                    key = %self.repository.key(),
                    error = %e,
                    "Ignoring unreadable stored calculation"
                );
                return None;
            }
        };

        match record.into_complete() {
            Ok(complete) => Some(complete),
            Err(legacy) => Some(self.upgrade_legacy_record(legacy).await),
        }
    }

    async fn upgrade_legacy_record(&self, legacy: PersistedCalculation) -> StoredCalculation {
        let macros = calculate_macronutrients(
            &legacy.data,
            legacy.results.target_calories,
            &self.config.macronutrients,
        );
        let upgraded = legacy.with_macros(macros);

        match self.repository.save(&upgraded).await {
            Ok(()) => info!(
                key = %self.repository.key(),
                target_calories = upgraded.results.target_calories,
                "Added macronutrients to stored calculation"
            ),
            Err(e) => warn!(
                key = %self.repository.key(),
                error = %e,
                "Failed to rewrite upgraded calculation"
            ),
        }
        upgraded
    }
}
