// ABOUTME: Integration tests for the calorie service persistence rules
// ABOUTME: Covers idempotent reads, lazy macro upgrades, swallowed failures, and file storage
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use async_trait::async_trait;
use calorie_tracker::{
    config::{NutritionConfig, StorageConfig},
    constants::storage::DEFAULT_CALCULATION_KEY,
    errors::{AppError, AppResult},
    models::{ActivityLevel, Gender, Goal, Macronutrients, StoredCalculation},
    repository::CalculationRepository,
    services::CalorieService,
    storage::{factory::Storage, memory::InMemoryStore, KeyValueStore},
};
use common::{counting_service, init_test_logging, input, reference_input, LEGACY_RECORD};
use std::fs;
use std::sync::Arc;

/// Store that serves reads but rejects every write
#[derive(Clone, Debug)]
struct ReadOnlyStore(InMemoryStore);

#[async_trait]
impl KeyValueStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.0.get(key).await
    }

    async fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Err(AppError::storage("quota exceeded"))
    }

    async fn remove(&self, _key: &str) -> AppResult<()> {
        Err(AppError::storage("quota exceeded"))
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_empty_storage_reads_as_none() -> Result<()> {
    let (service, store) = counting_service(&[]).await?;
    assert!(service.get_calories_result().await.is_none());
    assert_eq!(store.writes(), 0);
    Ok(())
}

#[tokio::test]
async fn test_malformed_payloads_read_as_none_without_writes() -> Result<()> {
    for payload in ["invalid-json", "", r#"{"data":{"gender":"male"}}"#, "[1,2,3]"] {
        let (service, store) = counting_service(&[(DEFAULT_CALCULATION_KEY, payload)]).await?;
        assert!(service.get_calories_result().await.is_none(), "{payload}");
        assert_eq!(store.writes(), 0, "{payload}");
        assert_eq!(
            store.inner().get(DEFAULT_CALCULATION_KEY).await?.as_deref(),
            Some(payload)
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_calculate_then_read_is_idempotent() -> Result<()> {
    let (service, store) = counting_service(&[]).await?;
    let data = reference_input(Goal::LoseWeight);

    let results = service.calculate_calories(&data).await;
    assert_eq!(store.writes(), 1);

    let first = service.get_calories_result().await.unwrap();
    let second = service.get_calories_result().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.data, data);
    assert_eq!(first.results, results);
    assert_eq!(store.writes(), 1);
    Ok(())
}

#[tokio::test]
async fn test_new_calculation_overwrites_slot() -> Result<()> {
    let (service, store) = counting_service(&[]).await?;
    service
        .calculate_calories(&reference_input(Goal::LoseWeight))
        .await;
    let latest = service
        .calculate_calories(&reference_input(Goal::GainWeight))
        .await;

    let stored = service.get_calories_result().await.unwrap();
    assert_eq!(stored.results, latest);
    assert_eq!(stored.data.goal(), &Goal::GainWeight);
    assert_eq!(store.inner().len().await, 1);
    Ok(())
}

#[tokio::test]
async fn test_legacy_record_upgraded_once() -> Result<()> {
    let (service, store) = counting_service(&[(DEFAULT_CALCULATION_KEY, LEGACY_RECORD)]).await?;

    let upgraded = service.get_calories_result().await.unwrap();
    assert_eq!(store.writes(), 1);
    // Stored results are kept; macros come from the stored target, not a recomputation
    assert_eq!(upgraded.results.bmr, 1755);
    assert_eq!(upgraded.results.target_calories, 2720);
    assert_eq!(
        upgraded.results.macros,
        Macronutrients {
            protein_grams: 152,
            fat_grams: 80,
            carbs_grams: 348,
        }
    );

    let raw = store.inner().get(DEFAULT_CALCULATION_KEY).await?.unwrap();
    let persisted: StoredCalculation = serde_json::from_str(&raw)?;
    assert_eq!(persisted, upgraded);

    let again = service.get_calories_result().await.unwrap();
    assert_eq!(again, upgraded);
    assert_eq!(store.writes(), 1);
    Ok(())
}

#[tokio::test]
async fn test_legacy_record_with_unknown_values_round_trips() -> Result<()> {
    let legacy = r#"{"data":{"gender":"female","age":41,"height":170,"weight":80,"activityLevel":"couch_potato","goal":"recomp"},"results":{"bmr":1500,"tdee":2000,"targetCalories":2000,"formula":"mifflin"}}"#;
    let (service, store) = counting_service(&[(DEFAULT_CALCULATION_KEY, legacy)]).await?;

    let upgraded = service.get_calories_result().await.unwrap();
    assert_eq!(
        upgraded.data.activity_level(),
        &ActivityLevel::Other("couch_potato".to_owned())
    );
    // Sedentary protein base and maintenance fat base for unknown values
    assert_eq!(
        upgraded.results.macros,
        Macronutrients {
            protein_grams: 128,
            fat_grams: 80,
            carbs_grams: 192,
        }
    );

    let raw = store.inner().get(DEFAULT_CALCULATION_KEY).await?.unwrap();
    assert!(raw.contains(r#""activityLevel":"couch_potato""#));
    assert!(raw.contains(r#""goal":"recomp""#));
    Ok(())
}

#[tokio::test]
async fn test_failed_upgrade_write_still_returns_record() -> Result<()> {
    init_test_logging();
    let store = ReadOnlyStore(InMemoryStore::with_entry(
        DEFAULT_CALCULATION_KEY,
        LEGACY_RECORD,
    ));
    let service = CalorieService::new(store.clone(), NutritionConfig::default());

    let upgraded = service.get_calories_result().await.unwrap();
    assert_eq!(upgraded.results.macros.carbs_grams, 348);
    let raw = store.0.get(DEFAULT_CALCULATION_KEY).await?.unwrap();
    assert_eq!(raw, LEGACY_RECORD);
    Ok(())
}

#[tokio::test]
async fn test_unavailable_storage_is_swallowed() {
    init_test_logging();
    let store = InMemoryStore::new();
    store.set_offline(true);
    let service = CalorieService::new(store.clone(), NutritionConfig::default());

    let results = service
        .calculate_calories(&reference_input(Goal::MaintainWeight))
        .await;
    assert_eq!(results.target_calories, 2759);
    assert!(service.get_calories_result().await.is_none());

    store.set_offline(false);
    assert!(service.get_calories_result().await.is_none());
}

#[tokio::test]
async fn test_rejected_write_keeps_previous_record() -> Result<()> {
    init_test_logging();
    let complete = serde_json::to_string(&StoredCalculation {
        data: reference_input(Goal::MaintainWeight),
        results: CalorieService::new(InMemoryStore::new(), NutritionConfig::default())
            .calculate(&reference_input(Goal::MaintainWeight)),
    })?;
    let store = ReadOnlyStore(InMemoryStore::with_entry(DEFAULT_CALCULATION_KEY, complete));
    let service = CalorieService::new(store, NutritionConfig::default());

    let results = service
        .calculate_calories(&reference_input(Goal::GainWeight))
        .await;
    assert_eq!(results.target_calories, 3173);

    let stored = service.get_calories_result().await.unwrap();
    assert_eq!(stored.data.goal(), &Goal::MaintainWeight);
    Ok(())
}

#[tokio::test]
async fn test_custom_key_repository() -> Result<()> {
    init_test_logging();
    let store = InMemoryStore::new();
    let service = CalorieService::with_repository(
        CalculationRepository::with_key(store.clone(), "profile_a"),
        NutritionConfig::default(),
    );
    service
        .calculate_calories(&reference_input(Goal::MaintainWeight))
        .await;

    assert!(store.get("profile_a").await?.is_some());
    assert!(store.get(DEFAULT_CALCULATION_KEY).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_concurrent_calculations_last_write_wins() -> Result<()> {
    init_test_logging();
    let service = Arc::new(CalorieService::new(
        InMemoryStore::new(),
        NutritionConfig::default(),
    ));

    let mut handles = Vec::new();
    for weight in [60.0, 70.0, 80.0, 90.0, 100.0] {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let data = input(
                Gender::Male,
                35,
                178.0,
                weight,
                ActivityLevel::LightlyActive,
                Goal::MaintainWeight,
            );
            let results = service.calculate_calories(&data).await;
            StoredCalculation { data, results }
        }));
    }

    let mut written = Vec::new();
    for handle in handles {
        written.push(handle.await?);
    }

    let stored = service.get_calories_result().await.unwrap();
    assert!(written.contains(&stored));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calculations_over_file_storage() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let service = Arc::new(CalorieService::new(
        Storage::new(&StorageConfig::file(dir.path())),
        NutritionConfig::default(),
    ));

    for round in 0..20 {
        let mut handles = Vec::new();
        for weight in [55.0, 65.0, 75.0, 85.0, 95.0, 105.0] {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let data = input(
                    Gender::Female,
                    40,
                    165.0,
                    weight,
                    ActivityLevel::VeryActive,
                    Goal::LoseWeight,
                );
                let results = service.calculate_calories(&data).await;
                StoredCalculation { data, results }
            }));
        }

        let mut written = Vec::new();
        for handle in handles {
            written.push(handle.await?);
        }

        let stored = service.get_calories_result().await;
        assert!(
            stored.as_ref().is_some_and(|s| written.contains(s)),
            "round {round}: stored record is not one of the completed saves"
        );
    }

    let leftovers: Vec<_> = fs::read_dir(dir.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .filter(|name| name != "calorie_calculation.json")
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
    Ok(())
}

#[tokio::test]
async fn test_file_storage_survives_restart() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let config = StorageConfig::file(dir.path());

    let service = CalorieService::new(Storage::new(&config), NutritionConfig::default());
    let results = service
        .calculate_calories(&reference_input(Goal::GainWeight))
        .await;

    let path = dir.path().join("calorie_calculation.json");
    let raw = fs::read_to_string(&path)?;
    let on_disk: StoredCalculation = serde_json::from_str(&raw)?;
    assert_eq!(on_disk.results, results);
    assert!(raw.contains(r#""height":180,"weight":80"#));

    let reopened = CalorieService::new(Storage::new(&config), NutritionConfig::default());
    assert_eq!(reopened.get_calories_result().await, Some(on_disk));
    Ok(())
}

#[tokio::test]
async fn test_file_storage_upgrades_legacy_file() -> Result<()> {
    init_test_logging();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("calorie_calculation.json");
    fs::write(&path, LEGACY_RECORD)?;

    let service = CalorieService::new(
        Storage::new(&StorageConfig::file(dir.path())),
        NutritionConfig::default(),
    );
    let upgraded = service.get_calories_result().await.unwrap();
    assert_eq!(upgraded.results.macros.protein_grams, 152);

    let raw = fs::read_to_string(&path)?;
    assert!(raw.contains(r#""macros":{"proteinGrams":152,"fatGrams":80,"carbsGrams":348}"#));
    Ok(())
}
