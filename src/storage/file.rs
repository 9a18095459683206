// ABOUTME: File-backed key-value store writing one UTF-8 file per key
// ABOUTME: Each write goes to its own temporary file which is then renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{validate_key, KeyValueStore};
use calorie_core::constants::storage::FILE_EXTENSION;
use calorie_core::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::debug;

/// Distinguishes temporary files of concurrent writes within one process
static WRITE_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Key-value store rooted at a directory
///
/// The value for `key` lives in `<root>/<key>.json`. A reader never sees a
/// partially written value because each write is renamed over the old file.
/// Concurrent writers each use their own temporary file, so the final value
/// is always one complete write; the last rename wins.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the stored values
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is not a valid single path component
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{FILE_EXTENSION}")))
    }

    /// Per-write temporary path inside the store directory
    fn temp_path_for(&self, key: &str) -> PathBuf {
        let sequence = WRITE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!(".{key}.{}.{sequence}.tmp", process::id()))
    }

    fn storage_error(action: &str, path: &Path, error: std::io::Error) -> AppError {
        AppError::storage(format!("failed to {action} {}: {error}", path.display()))
            .with_source(error)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_error("read", &path, e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Self::storage_error("create", &self.root, e))?;

        let tmp_path = self.temp_path_for(key);
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| Self::storage_error("write", &tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(Self::storage_error("replace", &path, e));
        }

        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::storage_error("remove", &path, e)),
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| Self::storage_error("create", &self.root, e))?;
        let metadata = fs::metadata(&self.root)
            .await
            .map_err(|e| Self::storage_error("inspect", &self.root, e))?;
        if metadata.permissions().readonly() {
            return Err(AppError::unavailable(format!(
                "storage directory {} is read-only",
                self.root.display()
            )));
        }
        Ok(())
    }
}
