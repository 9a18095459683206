// ABOUTME: Show and clear commands for calorie-cli
// ABOUTME: Prints the saved calculation, upgrading older records on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use calorie_tracker::{errors::AppResult, services::CalorieService, storage::factory::Storage};
use tracing::info;

use crate::helpers::display::{display_calculation, print_json};

/// Print the saved calculation, or a notice when there is none
pub async fn run(service: &CalorieService<Storage>, json: bool) -> AppResult<()> {
    match service.get_calories_result().await {
        Some(record) if json => print_json(&record)?,
        Some(record) => display_calculation(&record),
        None if json => println!("null"),
        None => println!("No saved calculation. Run `calorie-cli calculate` first."),
    }
    Ok(())
}

/// Remove the saved calculation
pub async fn clear(service: &CalorieService<Storage>) -> AppResult<()> {
    service.repository().clear().await?;
    info!(key = %service.repository().key(), "Cleared saved calculation");
    println!("Saved calculation removed.");
    Ok(())
}
