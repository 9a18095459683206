// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Dispatches KeyValueStore calls to the in-memory or file backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{file::FileStore, memory::InMemoryStore, KeyValueStore};
use crate::config::{StorageBackend, StorageConfig};
use calorie_core::errors::AppResult;

/// Unified storage interface over the configured backend
#[derive(Clone, Debug)]
pub enum Storage {
    /// Process-local storage
    Memory(InMemoryStore),
    /// Directory of JSON files
    File(FileStore),
}

impl Storage {
    /// Create a storage instance for the configured backend
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        match config.backend {
            StorageBackend::Memory => {
                tracing::info!("Initializing in-memory storage");
                Self::Memory(InMemoryStore::new())
            }
            StorageBackend::File => {
                tracing::info!(
                    "Initializing file storage at {}",
                    config.data_dir.display()
                );
                Self::File(FileStore::new(&config.data_dir))
            }
        }
    }

    /// Backend in use
    #[must_use]
    pub const fn backend(&self) -> StorageBackend {
        match self {
            Self::Memory(_) => StorageBackend::Memory,
            Self::File(_) => StorageBackend::File,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Storage {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            Self::File(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            Self::File(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            Self::File(store) => store.remove(key).await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.health_check().await,
            Self::File(store) => store.health_check().await,
        }
    }
}
