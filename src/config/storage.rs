// ABOUTME: Storage configuration selecting the key-value backend and its location
// ABOUTME: Resolves the default data directory through the platform data dir
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::storage::validate_key;
use calorie_core::constants::storage::{DEFAULT_CALCULATION_KEY, DEFAULT_DATA_DIR_NAME};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Key-value backend used for the persisted calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, lost on exit
    Memory,
    /// One JSON file per key under a data directory
    #[default]
    File,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            other => Err(ConfigError::Parse(format!(
                "unknown storage backend '{other}' (expected memory or file)"
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Key of the single calculation slot
    pub calculation_key: String,
}

impl StorageConfig {
    /// Platform data directory for the file backend, or `./.calorie-tracker` if none exists
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from(format!(".{DEFAULT_DATA_DIR_NAME}")),
            |dir| dir.join(DEFAULT_DATA_DIR_NAME),
        )
    }

    /// In-memory storage with the default key
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            ..Self::default()
        }
    }

    /// File storage rooted at `data_dir` with the default key
    #[must_use]
    pub fn file(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.calculation_key.trim().is_empty() {
            return Err(ConfigError::MissingField("storage calculation key"));
        }
        validate_key(&self.calculation_key).map_err(|e| ConfigError::Parse(e.message))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: Self::default_data_dir(),
            calculation_key: DEFAULT_CALCULATION_KEY.to_owned(),
        }
    }
}
