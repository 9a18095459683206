// ABOUTME: Configuration error types for environment loading and validation
// ABOUTME: Converted into AppError at the service boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A range-constrained value is outside its range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required value is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value that must be positive is not
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
