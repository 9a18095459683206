// ABOUTME: Single-slot repository for the persisted calorie calculation
// ABOUTME: Whole-record overwrite under one fixed key on top of any KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calculation Repository
//!
//! The store holds at most one calculation. Every save replaces the whole
//! record; there is no history. This layer reports every failure, including
//! unparsable payloads; the service decides which failures to swallow.

use crate::storage::KeyValueStore;
use calorie_core::constants::storage::DEFAULT_CALCULATION_KEY;
use calorie_core::errors::AppResult;
use calorie_core::models::{PersistedCalculation, StoredCalculation};
use tracing::debug;

/// Repository for the single persisted calculation
#[derive(Clone, Debug)]
pub struct CalculationRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CalculationRepository<S> {
    /// Repository using the default key
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_CALCULATION_KEY)
    }

    /// Repository using a custom key
    #[must_use]
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Key of the calculation slot
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the raw stored payload
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_raw(&self) -> AppResult<Option<String>> {
        self.store.get(&self.key).await
    }

    /// Read and parse the stored record, which may predate macro support
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the payload is not a valid record
    pub async fn load(&self) -> AppResult<Option<PersistedCalculation>> {
        let Some(raw) = self.load_raw().await? else {
            return Ok(None);
        };
        let record: PersistedCalculation = serde_json::from_str(&raw)?;
        Ok(Some(record))
    }

    /// Overwrite the slot with `record`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub async fn save(&self, record: &StoredCalculation) -> AppResult<()> {
        let payload = serde_json::to_string(record)?;
        self.store.set(&self.key, &payload).await?;
        debug!(key = %self.key, bytes = payload.len(), "Saved calculation");
        Ok(())
    }

    /// Remove the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the store removal fails
    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(&self.key).await
    }
}
