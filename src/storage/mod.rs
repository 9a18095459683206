// ABOUTME: Key-value storage abstraction for persisted calculator state
// ABOUTME: Pluggable backends (in-memory, file) selected by the storage factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Storage factory for configuration-based backend selection
pub mod factory;
/// File-backed store (one JSON file per key)
pub mod file;
/// In-memory store
pub mod memory;

use calorie_core::errors::{AppError, AppResult};

/// Byte-string key-value store addressed by string keys
///
/// Values are opaque UTF-8 strings; interpretation (JSON parsing, schema
/// upgrades) belongs to the caller.
///
/// # Examples
///
/// ```rust,no_run
/// use calorie_tracker::storage::{memory::InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), calorie_tracker::errors::AppError> {
///
/// let store = InMemoryStore::new();
/// store.set("calorie_calculation", r#"{"data":{}}"#).await?;
///
/// if let Some(value) = store.get("calorie_calculation").await? {
///     println!("Stored: {value}");
/// }
///
/// store.remove("calorie_calculation").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the read fails
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the write fails
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value under `key`; removing a missing key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unavailable or the removal fails
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Verify the backend is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot serve requests
    async fn health_check(&self) -> AppResult<()>;
}

#[async_trait::async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key).await
    }

    async fn health_check(&self) -> AppResult<()> {
        (**self).health_check().await
    }
}

/// Reject keys that cannot be used safely as a single path component
///
/// # Errors
///
/// Returns an `InvalidInput` error for empty keys, path separators, or dot-only keys
pub fn validate_key(key: &str) -> AppResult<()> {
    if key.trim().is_empty() {
        return Err(AppError::invalid_input("storage key must not be empty"));
    }
    if key.contains(['/', '\\', '\0']) || key.chars().all(|c| c == '.') {
        return Err(AppError::invalid_input(format!(
            "storage key '{key}' is not a valid key"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_key;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("calorie_calculation").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a\\b").is_err());
    }
}
