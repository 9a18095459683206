// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample inputs, and a write-counting store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `calorie_tracker`

use async_trait::async_trait;
use calorie_tracker::{
    config::NutritionConfig,
    errors::AppResult,
    models::{ActivityData, ActivityLevel, BasicData, CalorieCalculationData, Gender, Goal},
    services::CalorieService,
    storage::{memory::InMemoryStore, KeyValueStore},
};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calculation input with every field given
pub fn input(
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: Goal,
) -> CalorieCalculationData {
    CalorieCalculationData::new(
        BasicData {
            gender,
            age,
            height_cm,
            weight_kg,
        },
        ActivityData {
            activity_level,
            goal,
        },
    )
}

/// Male, 30 years, 180 cm, 80 kg, moderately active, with the given goal
pub fn reference_input(goal: Goal) -> CalorieCalculationData {
    input(
        Gender::Male,
        30,
        180.0,
        80.0,
        ActivityLevel::ModeratelyActive,
        goal,
    )
}

/// Record saved before macros existed, for the reference profile at 2720 kcal
pub const LEGACY_RECORD: &str = r#"{"data":{"gender":"male","age":30,"height":180,"weight":80,"activityLevel":"moderately_active","goal":"maintain_weight"},"results":{"bmr":1755,"tdee":2720,"targetCalories":2720,"formula":"mifflin"}}"#;

/// In-memory store that counts writes
#[derive(Clone, Debug, Default)]
pub struct CountingStore {
    inner: InMemoryStore,
    writes: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `set` calls that reached the store
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub const fn inner(&self) -> &InMemoryStore {
        &self.inner
    }
}

#[async_trait]
impl KeyValueStore for CountingStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn health_check(&self) -> AppResult<()> {
        self.inner.health_check().await
    }
}

/// Service over a counting in-memory store seeded with `entries`
///
/// Seeding goes through the inner store and is not counted as a write.
pub async fn counting_service(
    entries: &[(&str, &str)],
) -> AppResult<(CalorieService<CountingStore>, CountingStore)> {
    init_test_logging();
    let inner = InMemoryStore::new();
    for (key, value) in entries {
        inner.set(key, value).await?;
    }
    let store = CountingStore::new(inner);
    Ok((
        CalorieService::new(store.clone(), NutritionConfig::default()),
        store,
    ))
}
