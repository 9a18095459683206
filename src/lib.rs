// ABOUTME: Main library entry point for the calorie tracker
// ABOUTME: Calculation engine, configuration, storage backends, and the persistence service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Tracker
//!
//! Computes Basal Metabolic Rate (Mifflin-St Jeor), Total Daily Energy
//! Expenditure, a goal-adjusted calorie target, and a protein/fat/carbohydrate
//! split, then keeps the latest calculation in a single-slot key-value store.
//!
//! ## Architecture
//!
//! - **Models / errors / constants**: re-exported from `calorie-core`
//! - **Intelligence**: pure calculation functions and input validation
//! - **Storage**: `KeyValueStore` trait with in-memory and file backends
//! - **Repository**: the single persisted calculation slot
//! - **Services**: `CalorieService`, which combines the engine with persistence
//!   and upgrades records saved before macros existed
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_tracker::config::NutritionConfig;
//! use calorie_tracker::models::{
//!     ActivityData, ActivityLevel, BasicData, CalorieCalculationData, Gender, Goal,
//! };
//! use calorie_tracker::services::CalorieService;
//! use calorie_tracker::storage::memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = CalorieService::new(InMemoryStore::new(), NutritionConfig::default());
//!     let data = CalorieCalculationData::new(
//!         BasicData { gender: Gender::Male, age: 30, height_cm: 180.0, weight_kg: 80.0 },
//!         ActivityData {
//!             activity_level: ActivityLevel::ModeratelyActive,
//!             goal: Goal::MaintainWeight,
//!         },
//!     );
//!     let results = service.calculate_calories(&data).await;
//!     println!("Target: {} kcal", results.target_calories);
//! }
//! ```

pub use calorie_core::{constants, errors, models};

/// Calculator and storage configuration with environment overrides
pub mod config;

/// Calorie engine and input validation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Single-slot repository for the persisted calculation
pub mod repository;

/// Service layer combining calculation and persistence
pub mod services;

/// Key-value storage backends
pub mod storage;
